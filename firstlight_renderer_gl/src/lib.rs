/*!
# Firstlight - OpenGL Renderer Backend

OpenGL 3.3 core-profile implementation of the Firstlight rendering traits.

This crate provides the two collaborators the core crate treats as external:
the graphics driver (`GlDevice`, implementing `RenderDevice` through the glow
bindings) and the windowing/input surface (`GlWindow`, wrapping GLFW). A
`GlWindow` owns the context; creating one yields the `GlDevice` bound to it.
*/

mod gl_device;
mod gl_window;

pub use gl_device::GlDevice;
pub use gl_window::{GlWindow, WindowConfig};

// The demo binaries query keys through the window, re-export the type
pub use glfw::Key;
