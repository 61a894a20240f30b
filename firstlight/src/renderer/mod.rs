/// Renderer module - driver trait, descriptors and the static render setup

// Module declarations
pub mod device;
pub mod geometry;
pub mod shader;
pub mod static_render;

#[cfg(test)]
pub mod mock_device;

// Re-export the public surface
pub use device::*;
pub use geometry::*;
pub use shader::*;
pub use static_render::*;
