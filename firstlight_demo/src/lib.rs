/*!
# Firstlight demos

One parametrized frame-loop driver exercised by three binaries:
`window_clear` (clear only), `triangle` (non-indexed draw) and `quad`
(indexed draw through shared vertices). Geometry, shader sources, clear
color and window dimensions are compile-time constants owned by each
binary; everything else is shared here.
*/

use firstlight::renderer::{GeometryDesc, RenderDevice, ShaderPair, StaticRender};
use firstlight::Result;
use firstlight_renderer_gl::{GlWindow, Key, WindowConfig};

/// The constant inputs of one demo scene
pub struct SceneDesc {
    /// Flat (x, y, z) vertex positions
    pub vertices: &'static [f32],
    /// Optional triangle triples
    pub indices: Option<&'static [[u32; 3]]>,
    /// GLSL vertex stage source
    pub vertex_shader: &'static str,
    /// GLSL fragment stage source
    pub fragment_shader: &'static str,
}

/// Everything a demo binary chooses
pub struct DemoConfig {
    pub window: WindowConfig,
    /// RGBA clear value used every frame
    pub clear_color: [f32; 4],
    /// Scene to draw; `None` clears only
    pub scene: Option<SceneDesc>,
}

/// Open the window, run the blocking frame loop, tear everything down
///
/// Per-iteration order: input check, clear, draw, swap, poll - with resize
/// and input handling applied before the draw of the following iteration.
/// Escape closes the window. The render setup is initialized once before
/// the loop and released once after it.
pub fn run(config: DemoConfig) -> Result<()> {
    let (mut window, mut device) = GlWindow::create(&config.window)?;

    let mut setup = match &config.scene {
        Some(scene) => Some(StaticRender::initialize(
            &mut device,
            &GeometryDesc {
                vertices: scene.vertices,
                indices: scene.indices,
            },
            &ShaderPair {
                vertex_source: scene.vertex_shader,
                fragment_source: scene.fragment_shader,
            },
        )?),
        None => None,
    };

    while !window.should_close() {
        if window.key_pressed(Key::Escape) {
            window.set_should_close(true);
        }

        device.clear(config.clear_color);
        if let Some(setup) = &setup {
            setup.draw_frame(&mut device)?;
        }

        window.swap_buffers();
        window.poll_events(&mut device);
    }

    if let Some(setup) = &mut setup {
        setup.release(&mut device);
    }
    Ok(())
}
