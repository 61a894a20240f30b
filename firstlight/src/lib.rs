/*!
# Firstlight

Core traits and types for the Firstlight static-geometry renderer.

This crate provides the platform-agnostic API for uploading an immutable
piece of geometry plus a vertex/fragment shader pair and drawing it once per
frame. Backend implementations (OpenGL, etc.) live in separate crates and
plug in through the `RenderDevice` trait.

## Architecture

- **RenderDevice**: synchronous driver trait (shader compilation, program
  linking, buffer upload, draw issuance)
- **StaticRender**: the write-once render setup - initialize, draw_frame,
  release
- **GeometryDesc / ShaderPair**: plain descriptors for the constant inputs

The windowing collaborator (window creation, event polling, buffer swap) is
owned by the backend crate; this crate only requires that a valid graphics
context is current on the calling thread.
*/

mod error;
pub mod log;
pub mod renderer;

pub use error::{Error, Result};
