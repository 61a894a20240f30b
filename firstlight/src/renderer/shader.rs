/// Shader stage kind and source descriptor

use std::fmt;

/// Shader stage
///
/// A linked program is always exactly one vertex stage plus one fragment
/// stage; no other stage kinds exist in this renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => write!(f, "Vertex"),
            ShaderStage::Fragment => write!(f, "Fragment"),
        }
    }
}

/// The two shader source strings combined into one linked program
///
/// Sources are text in the backend's shading language (GLSL for the GL
/// backend). They are explicit inputs rather than process-wide constants;
/// nothing is shared across render setups.
#[derive(Debug, Clone, Copy)]
pub struct ShaderPair<'a> {
    /// Vertex stage source
    pub vertex_source: &'a str,
    /// Fragment stage source
    pub fragment_source: &'a str,
}
