/// GlWindow - GLFW window, OpenGL context, and per-frame input surface

use glfw::{fail_on_errors, Action, Context, Key, OpenGlProfileHint, WindowHint, WindowMode};

use firstlight::renderer::RenderDevice;
use firstlight::{render_info, Error, Result};

use crate::GlDevice;

const SOURCE: &str = "firstlight::gl::Window";

/// Window configuration
#[derive(Debug, Clone)]
pub struct WindowConfig {
    /// Framebuffer width in pixels
    pub width: u32,
    /// Framebuffer height in pixels
    pub height: u32,
    /// Title bar text
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            title: "Firstlight".to_string(),
        }
    }
}

/// A GLFW window with a current OpenGL 3.3 core-profile context
///
/// Owns the event receiver and exposes the poll-style frame-loop surface:
/// `should_close` / `set_should_close` / `key_pressed` / `swap_buffers` /
/// `poll_events`. Framebuffer resize events are applied to the device
/// viewport inside `poll_events`, so they take effect before the next
/// iteration's draw.
pub struct GlWindow {
    glfw: glfw::Glfw,
    window: glfw::PWindow,
    events: glfw::GlfwReceiver<(f64, glfw::WindowEvent)>,
}

impl GlWindow {
    /// Create the window, make its context current, and load the driver
    ///
    /// # Arguments
    ///
    /// * `config` - Dimensions and title
    ///
    /// # Errors
    ///
    /// Returns `Error::WindowCreation` when GLFW fails to initialize or the
    /// window/context cannot be created.
    pub fn create(config: &WindowConfig) -> Result<(Self, GlDevice)> {
        let mut glfw = glfw::init(glfw::fail_on_errors!())
            .map_err(|err| Error::WindowCreation(err.to_string()))?;

        glfw.window_hint(WindowHint::ContextVersion(3, 3));
        glfw.window_hint(WindowHint::OpenGlProfile(OpenGlProfileHint::Core));

        let (mut window, events) = glfw
            .create_window(
                config.width,
                config.height,
                &config.title,
                WindowMode::Windowed,
            )
            .ok_or_else(|| {
                Error::WindowCreation("glfwCreateWindow returned null".to_string())
            })?;

        window.make_current();
        window.set_framebuffer_size_polling(true);

        let gl = unsafe {
            glow::Context::from_loader_function(|name| {
                window.get_proc_address(name) as *const _
            })
        };
        let mut device = GlDevice::new(gl);
        device.set_viewport(config.width, config.height);

        render_info!(
            SOURCE,
            "window created: {}x{} \"{}\"",
            config.width,
            config.height,
            config.title
        );
        Ok((Self { glfw, window, events }, device))
    }

    /// Has the window been asked to close?
    pub fn should_close(&self) -> bool {
        self.window.should_close()
    }

    /// Request (or cancel) window close
    pub fn set_should_close(&mut self, value: bool) {
        self.window.set_should_close(value);
    }

    /// Is the key currently pressed?
    pub fn key_pressed(&self, key: Key) -> bool {
        self.window.get_key(key) == Action::Press
    }

    /// Swap front and back buffers (present the frame)
    pub fn swap_buffers(&mut self) {
        self.window.swap_buffers();
    }

    /// Poll pending events and apply framebuffer resizes to the viewport
    pub fn poll_events(&mut self, device: &mut GlDevice) {
        self.glfw.poll_events();
        for (_, event) in glfw::flush_messages(&self.events) {
            if let glfw::WindowEvent::FramebufferSize(width, height) = event {
                device.set_viewport(width as u32, height as u32);
            }
        }
    }
}
