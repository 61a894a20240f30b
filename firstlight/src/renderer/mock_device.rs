/// Mock RenderDevice for unit tests (no GPU required)
///
/// Tracks live resources, records issued draw commands, and captures
/// uploaded data so tests can check counts, byte layout, and cleanup
/// behavior without a graphics context.

use slotmap::SlotMap;

use crate::error::{Error, Result};
use crate::renderer::{
    DrawCommand, GeometryDesc, GeometryId, ProgramId, RenderDevice, ShaderId, ShaderStage,
    VertexLayout, POSITION_LAYOUT,
};

/// What the mock retained from a create_geometry call
#[derive(Debug, Clone)]
pub struct UploadedGeometry {
    /// Vertex data exactly as it would reach GPU memory
    pub vertex_bytes: Vec<u8>,
    /// Flattened index count (0 when non-indexed)
    pub index_count: u32,
    /// Layout declared for attribute slot 0
    pub layout: VertexLayout,
}

/// Mock driver that simulates the collaborator without a GPU
///
/// Compilation fails when the source has no `main` entry point, which is
/// enough to exercise the malformed-source paths. Link failure is injected
/// with `fail_next_link`.
pub struct MockDevice {
    shaders: SlotMap<ShaderId, ShaderStage>,
    programs: SlotMap<ProgramId, ()>,
    geometries: SlotMap<GeometryId, UploadedGeometry>,
    /// Every draw command issued, in order
    pub draws: Vec<DrawCommand>,
    /// Every upload received by create_geometry, in order (kept even after
    /// the geometry is destroyed)
    pub uploads: Vec<UploadedGeometry>,
    /// Every clear color received, in order
    pub clears: Vec<[f32; 4]>,
    /// Force the next link_program call to fail
    pub fail_next_link: bool,
    /// Total compile_shader calls (including failed ones)
    pub compile_calls: u32,
}

impl MockDevice {
    pub fn new() -> Self {
        Self {
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            geometries: SlotMap::with_key(),
            draws: Vec::new(),
            uploads: Vec::new(),
            clears: Vec::new(),
            fail_next_link: false,
            compile_calls: 0,
        }
    }

    /// Resource-count queries used by the leak tests
    pub fn live_shaders(&self) -> usize {
        self.shaders.len()
    }

    pub fn live_programs(&self) -> usize {
        self.programs.len()
    }

    pub fn live_geometries(&self) -> usize {
        self.geometries.len()
    }

    /// Inspect an uploaded geometry, if still alive
    pub fn geometry(&self, id: GeometryId) -> Option<&UploadedGeometry> {
        self.geometries.get(id)
    }
}

impl RenderDevice for MockDevice {
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId> {
        self.compile_calls += 1;
        if !source.contains("main") {
            return Err(Error::ShaderCompile {
                stage,
                log: "entry point 'main' not found".to_string(),
            });
        }
        Ok(self.shaders.insert(stage))
    }

    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId> {
        if !self.shaders.contains_key(vertex) || !self.shaders.contains_key(fragment) {
            return Err(Error::InvalidHandle("link_program: unknown shader object"));
        }
        if self.fail_next_link {
            self.fail_next_link = false;
            return Err(Error::ShaderLink("forced link failure".to_string()));
        }
        Ok(self.programs.insert(()))
    }

    fn destroy_shader(&mut self, shader: ShaderId) {
        self.shaders.remove(shader);
    }

    fn destroy_program(&mut self, program: ProgramId) {
        self.programs.remove(program);
    }

    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryId> {
        let uploaded = UploadedGeometry {
            vertex_bytes: bytemuck::cast_slice(desc.vertices).to_vec(),
            index_count: desc.index_count(),
            layout: POSITION_LAYOUT,
        };
        self.uploads.push(uploaded.clone());
        Ok(self.geometries.insert(uploaded))
    }

    fn destroy_geometry(&mut self, geometry: GeometryId) {
        self.geometries.remove(geometry);
    }

    fn set_viewport(&mut self, _width: u32, _height: u32) {}

    fn clear(&mut self, color: [f32; 4]) {
        self.clears.push(color);
    }

    fn draw(
        &mut self,
        program: ProgramId,
        geometry: GeometryId,
        command: DrawCommand,
    ) -> Result<()> {
        if !self.programs.contains_key(program) {
            return Err(Error::InvalidHandle("draw: unknown program"));
        }
        if !self.geometries.contains_key(geometry) {
            return Err(Error::InvalidHandle("draw: unknown geometry"));
        }
        self.draws.push(command);
        Ok(())
    }
}

#[cfg(test)]
#[path = "mock_device_tests.rs"]
mod tests;
