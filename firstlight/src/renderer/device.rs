/// RenderDevice trait - the synchronous graphics driver interface

use crate::error::Result;
use crate::renderer::{GeometryDesc, ShaderStage};

slotmap::new_key_type! {
    /// Driver-side handle to a compiled shader stage
    pub struct ShaderId;
    /// Driver-side handle to a linked shader program
    pub struct ProgramId;
    /// Driver-side handle to an uploaded vertex/index store
    pub struct GeometryId;
}

/// A single draw command
///
/// Exactly one of these is issued per `StaticRender::draw_frame` call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawCommand {
    /// Draw `vertex_count` vertices as a triangle list starting at offset 0
    Arrays { vertex_count: u32 },
    /// Draw `index_count` indices as a triangle list, resolving through the
    /// geometry's index store
    Elements { index_count: u32 },
}

/// Graphics driver trait
///
/// Implemented by backend-specific devices (e.g., GlDevice). Every operation
/// runs to completion before returning; there is no asynchronous I/O and no
/// deferred failure. The device is bound to the single thread owning the
/// graphics context, so the trait carries no `Send`/`Sync` bound.
pub trait RenderDevice {
    /// Compile one shader stage from source
    ///
    /// # Arguments
    ///
    /// * `stage` - Stage kind (vertex or fragment)
    /// * `source` - Source text in the backend's shading language
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderCompile` with the stage kind and the compiler
    /// diagnostic when compilation fails.
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId>;

    /// Link a vertex stage and a fragment stage into one program
    ///
    /// The stage objects remain alive and must be destroyed separately;
    /// they have no further use once linking has been attempted.
    ///
    /// # Errors
    ///
    /// Returns `Error::ShaderLink` with the linker diagnostic on failure.
    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId>;

    /// Destroy a shader stage object (stale ids are a no-op)
    fn destroy_shader(&mut self, shader: ShaderId);

    /// Destroy a linked program (stale ids are a no-op)
    fn destroy_program(&mut self, program: ProgramId);

    /// Allocate GPU stores for the described geometry and upload it
    ///
    /// Uploads the vertex data (and index data, if present) with a
    /// write-once usage hint and declares the `POSITION_LAYOUT` vertex
    /// attribute layout.
    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryId>;

    /// Destroy a geometry's GPU stores (stale ids are a no-op)
    fn destroy_geometry(&mut self, geometry: GeometryId);

    /// Set the rendering viewport to `width` x `height` pixels
    fn set_viewport(&mut self, width: u32, height: u32);

    /// Clear the color buffer to the given RGBA value
    fn clear(&mut self, color: [f32; 4]);

    /// Bind the program and geometry and issue exactly one draw command
    ///
    /// No transformation, culling, or depth state is configured; the
    /// backend's default state applies.
    fn draw(&mut self, program: ProgramId, geometry: GeometryId, command: DrawCommand)
        -> Result<()>;
}
