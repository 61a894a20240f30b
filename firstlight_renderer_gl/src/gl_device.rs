/// GlDevice - OpenGL implementation of the RenderDevice trait

use glow::HasContext;
use slotmap::SlotMap;

use firstlight::renderer::{
    DrawCommand, GeometryDesc, GeometryId, ProgramId, RenderDevice, ShaderId, ShaderStage,
    POSITION_LAYOUT,
};
use firstlight::{render_debug, Error, Result};

const SOURCE: &str = "firstlight::gl::Device";

/// GPU stores backing one geometry
struct GlGeometry {
    vao: glow::VertexArray,
    vbo: glow::Buffer,
    ebo: Option<glow::Buffer>,
}

/// OpenGL 3.3 core-profile driver
///
/// Owns the glow context and the id-to-native-object tables. Must only be
/// used on the thread where the context is current; every call issues its
/// GL commands synchronously.
pub struct GlDevice {
    gl: glow::Context,
    shaders: SlotMap<ShaderId, glow::Shader>,
    programs: SlotMap<ProgramId, glow::Program>,
    geometries: SlotMap<GeometryId, GlGeometry>,
}

/// GL enum for a shader stage kind
fn gl_stage(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
    }
}

impl GlDevice {
    /// Wrap a loaded glow context
    pub fn new(gl: glow::Context) -> Self {
        Self {
            gl,
            shaders: SlotMap::with_key(),
            programs: SlotMap::with_key(),
            geometries: SlotMap::with_key(),
        }
    }
}

impl RenderDevice for GlDevice {
    fn compile_shader(&mut self, stage: ShaderStage, source: &str) -> Result<ShaderId> {
        let gl = &self.gl;
        unsafe {
            let shader = gl.create_shader(gl_stage(stage)).map_err(Error::Backend)?;
            gl.shader_source(shader, source);
            gl.compile_shader(shader);

            // The original never checked this status; surfacing the
            // compiler log here is the whole point of the rework.
            if !gl.get_shader_compile_status(shader) {
                let log = gl.get_shader_info_log(shader);
                gl.delete_shader(shader);
                return Err(Error::ShaderCompile { stage, log });
            }
            render_debug!(SOURCE, "{} shader compiled", stage);
            Ok(self.shaders.insert(shader))
        }
    }

    fn link_program(&mut self, vertex: ShaderId, fragment: ShaderId) -> Result<ProgramId> {
        let vertex = *self
            .shaders
            .get(vertex)
            .ok_or(Error::InvalidHandle("link_program: unknown vertex shader"))?;
        let fragment = *self
            .shaders
            .get(fragment)
            .ok_or(Error::InvalidHandle("link_program: unknown fragment shader"))?;

        let gl = &self.gl;
        unsafe {
            let program = gl.create_program().map_err(Error::Backend)?;
            gl.attach_shader(program, vertex);
            gl.attach_shader(program, fragment);
            gl.link_program(program);

            if !gl.get_program_link_status(program) {
                let log = gl.get_program_info_log(program);
                gl.delete_program(program);
                return Err(Error::ShaderLink(log));
            }
            render_debug!(SOURCE, "program linked");
            Ok(self.programs.insert(program))
        }
    }

    fn destroy_shader(&mut self, shader: ShaderId) {
        if let Some(shader) = self.shaders.remove(shader) {
            unsafe { self.gl.delete_shader(shader) };
        }
    }

    fn destroy_program(&mut self, program: ProgramId) {
        if let Some(program) = self.programs.remove(program) {
            unsafe { self.gl.delete_program(program) };
        }
    }

    fn create_geometry(&mut self, desc: &GeometryDesc) -> Result<GeometryId> {
        let gl = &self.gl;
        unsafe {
            let vao = gl.create_vertex_array().map_err(Error::Backend)?;
            let vbo = gl.create_buffer().map_err(Error::Backend)?;
            gl.bind_vertex_array(Some(vao));

            // Write-once upload: the data never changes after this call
            gl.bind_buffer(glow::ARRAY_BUFFER, Some(vbo));
            gl.buffer_data_u8_slice(
                glow::ARRAY_BUFFER,
                bytemuck::cast_slice(desc.vertices),
                glow::STATIC_DRAW,
            );

            gl.vertex_attrib_pointer_f32(
                POSITION_LAYOUT.location,
                POSITION_LAYOUT.components as i32,
                glow::FLOAT,
                false,
                POSITION_LAYOUT.stride as i32,
                POSITION_LAYOUT.offset as i32,
            );
            gl.enable_vertex_attrib_array(POSITION_LAYOUT.location);

            // The element buffer binding is part of the VAO state, so it is
            // created while the VAO is still bound.
            let ebo = match desc.indices {
                Some(triangles) => {
                    let ebo = gl.create_buffer().map_err(Error::Backend)?;
                    gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, Some(ebo));
                    gl.buffer_data_u8_slice(
                        glow::ELEMENT_ARRAY_BUFFER,
                        bytemuck::cast_slice(triangles),
                        glow::STATIC_DRAW,
                    );
                    Some(ebo)
                }
                None => None,
            };

            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);

            render_debug!(
                SOURCE,
                "geometry uploaded ({} vertices, {} indices)",
                desc.vertex_count(),
                desc.index_count()
            );
            Ok(self.geometries.insert(GlGeometry { vao, vbo, ebo }))
        }
    }

    fn destroy_geometry(&mut self, geometry: GeometryId) {
        if let Some(geometry) = self.geometries.remove(geometry) {
            unsafe {
                self.gl.delete_vertex_array(geometry.vao);
                self.gl.delete_buffer(geometry.vbo);
                if let Some(ebo) = geometry.ebo {
                    self.gl.delete_buffer(ebo);
                }
            }
        }
    }

    fn set_viewport(&mut self, width: u32, height: u32) {
        unsafe { self.gl.viewport(0, 0, width as i32, height as i32) };
    }

    fn clear(&mut self, color: [f32; 4]) {
        unsafe {
            self.gl.clear_color(color[0], color[1], color[2], color[3]);
            self.gl.clear(glow::COLOR_BUFFER_BIT);
        }
    }

    fn draw(
        &mut self,
        program: ProgramId,
        geometry: GeometryId,
        command: DrawCommand,
    ) -> Result<()> {
        let program = *self
            .programs
            .get(program)
            .ok_or(Error::InvalidHandle("draw: unknown program"))?;
        let geometry = self
            .geometries
            .get(geometry)
            .ok_or(Error::InvalidHandle("draw: unknown geometry"))?;

        let gl = &self.gl;
        unsafe {
            gl.use_program(Some(program));
            gl.bind_vertex_array(Some(geometry.vao));
            match command {
                DrawCommand::Arrays { vertex_count } => {
                    gl.draw_arrays(glow::TRIANGLES, 0, vertex_count as i32);
                }
                DrawCommand::Elements { index_count } => {
                    gl.draw_elements(
                        glow::TRIANGLES,
                        index_count as i32,
                        glow::UNSIGNED_INT,
                        0,
                    );
                }
            }
        }
        Ok(())
    }
}
