/// StaticRender - the write-once render setup
///
/// Converts an immutable list of vertex positions (plus an optional list of
/// triangle indices) and a shader source pair into a GPU-resident form that
/// is drawn with exactly one command per frame. Lifecycle is strictly
/// Uninitialized -> Ready -> Released: a failed initialize leaves nothing
/// allocated, and release is terminal and idempotent.

use crate::error::{Error, Result};
use crate::render_info;
use crate::renderer::{
    DrawCommand, GeometryDesc, GeometryId, ProgramId, RenderDevice, ShaderPair, ShaderStage,
};

const SOURCE: &str = "firstlight::StaticRender";

/// A ready-to-draw piece of static geometry with its linked program
///
/// This is the only state the caller must retain between frames. All GPU
/// resources it references are owned exclusively by this value and freed by
/// `release`.
#[derive(Debug)]
pub struct StaticRender {
    program: ProgramId,
    geometry: GeometryId,
    command: DrawCommand,
    released: bool,
}

impl StaticRender {
    /// Compile, link and upload everything needed to draw the geometry
    ///
    /// Validates the descriptor before touching the driver, compiles both
    /// stages, links them, and uploads the vertex (and index) data. The two
    /// per-stage shader objects are destroyed immediately after linking has
    /// been attempted - they have no further use. Any resource created
    /// before a failure is destroyed before the error is returned, so a
    /// failed initialize retains no partial GPU allocation.
    ///
    /// # Arguments
    ///
    /// * `device` - Driver with a current graphics context
    /// * `geometry` - The constant vertex/index data
    /// * `shaders` - Vertex and fragment stage sources
    ///
    /// # Errors
    ///
    /// `Error::InvalidGeometry`, `Error::ShaderCompile` or
    /// `Error::ShaderLink`, surfaced synchronously.
    pub fn initialize(
        device: &mut dyn RenderDevice,
        geometry: &GeometryDesc,
        shaders: &ShaderPair,
    ) -> Result<Self> {
        geometry.validate()?;

        let vertex = device.compile_shader(ShaderStage::Vertex, shaders.vertex_source)?;
        let fragment = match device.compile_shader(ShaderStage::Fragment, shaders.fragment_source)
        {
            Ok(fragment) => fragment,
            Err(err) => {
                device.destroy_shader(vertex);
                return Err(err);
            }
        };

        // Stage objects are dead weight once linking has been attempted,
        // success or not.
        let linked = device.link_program(vertex, fragment);
        device.destroy_shader(vertex);
        device.destroy_shader(fragment);
        let program = linked?;

        let uploaded = match device.create_geometry(geometry) {
            Ok(uploaded) => uploaded,
            Err(err) => {
                device.destroy_program(program);
                return Err(err);
            }
        };

        let command = match geometry.indices {
            Some(_) => DrawCommand::Elements {
                index_count: geometry.index_count(),
            },
            None => DrawCommand::Arrays {
                vertex_count: geometry.vertex_count(),
            },
        };

        render_info!(
            SOURCE,
            "ready: {} vertices, {} indices",
            geometry.vertex_count(),
            geometry.index_count()
        );

        Ok(Self {
            program,
            geometry: uploaded,
            command,
            released: false,
        })
    }

    /// Draw the geometry once
    ///
    /// Binds the linked program and the geometry and issues exactly one draw
    /// command with the counts captured at initialize time. Clearing the
    /// color buffer and presenting the frame belong to the frame loop, not
    /// to this call.
    ///
    /// # Errors
    ///
    /// `Error::InvalidHandle` if called after `release`; the driver is not
    /// invoked in that case.
    pub fn draw_frame(&self, device: &mut dyn RenderDevice) -> Result<()> {
        if self.released {
            return Err(Error::InvalidHandle("draw_frame called on a released handle"));
        }
        device.draw(self.program, self.geometry, self.command)
    }

    /// The draw command this setup issues each frame
    pub fn command(&self) -> DrawCommand {
        self.command
    }

    /// Free the GPU stores and the linked program
    ///
    /// Idempotent: calling twice is a no-op, so shutdown paths may run it
    /// unconditionally. After release the handle is invalid for
    /// `draw_frame`.
    pub fn release(&mut self, device: &mut dyn RenderDevice) {
        if self.released {
            return;
        }
        device.destroy_geometry(self.geometry);
        device.destroy_program(self.program);
        self.released = true;
        render_info!(SOURCE, "released");
    }
}

#[cfg(test)]
#[path = "static_render_tests.rs"]
mod tests;
