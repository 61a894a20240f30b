//! Error types for Firstlight
//!
//! This module defines the error taxonomy used throughout the crate.
//! Every failure in this domain is either a startup-time fatal condition
//! (window, compile, link) or a checked precondition violation; nothing is
//! transient and there is no retry policy anywhere.

use std::fmt;

use crate::renderer::ShaderStage;

/// Result type for Firstlight operations
pub type Result<T> = std::result::Result<T, Error>;

/// Firstlight errors
#[derive(Debug, Clone)]
pub enum Error {
    /// The windowing collaborator failed to create a window/context
    WindowCreation(String),

    /// A shader stage failed to compile; carries the stage kind and the
    /// compiler diagnostic text
    ShaderCompile { stage: ShaderStage, log: String },

    /// The two stages failed to link into one program
    ShaderLink(String),

    /// Vertex/index descriptor violates an invariant (empty data, length
    /// not a multiple of 3, index out of range)
    InvalidGeometry(String),

    /// Use of a released or never-initialized handle (programmer error)
    InvalidHandle(&'static str),

    /// Driver-reported failure with no more specific classification
    Backend(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::WindowCreation(msg) => write!(f, "Window creation failed: {}", msg),
            Error::ShaderCompile { stage, log } => {
                write!(f, "{} shader compilation failed: {}", stage, log)
            }
            Error::ShaderLink(log) => write!(f, "Shader program link failed: {}", log),
            Error::InvalidGeometry(msg) => write!(f, "Invalid geometry: {}", msg),
            Error::InvalidHandle(msg) => write!(f, "Invalid render handle: {}", msg),
            Error::Backend(msg) => write!(f, "Backend error: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
