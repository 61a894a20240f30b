//! Unit tests for error.rs
//!
//! Tests all Error variants and their implementations (Display, Debug,
//! Clone, std::error::Error).

use crate::error::Error;
use crate::renderer::ShaderStage;

// ============================================================================
// ERROR DISPLAY TESTS
// ============================================================================

#[test]
fn test_window_creation_display() {
    let err = Error::WindowCreation("glfwCreateWindow returned null".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Window creation failed"));
    assert!(display.contains("glfwCreateWindow returned null"));
}

#[test]
fn test_shader_compile_display_carries_stage_and_log() {
    let err = Error::ShaderCompile {
        stage: ShaderStage::Vertex,
        log: "0:3: syntax error".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Vertex shader compilation failed"));
    assert!(display.contains("0:3: syntax error"));

    let err = Error::ShaderCompile {
        stage: ShaderStage::Fragment,
        log: "entry point 'main' not found".to_string(),
    };
    let display = format!("{}", err);
    assert!(display.contains("Fragment shader compilation failed"));
}

#[test]
fn test_shader_link_display() {
    let err = Error::ShaderLink("output of vertex stage not consumed".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Shader program link failed"));
    assert!(display.contains("not consumed"));
}

#[test]
fn test_invalid_geometry_display() {
    let err = Error::InvalidGeometry("vertex data is empty".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Invalid geometry"));
    assert!(display.contains("vertex data is empty"));
}

#[test]
fn test_invalid_handle_display() {
    let err = Error::InvalidHandle("draw_frame called on a released handle");
    let display = format!("{}", err);
    assert!(display.contains("Invalid render handle"));
    assert!(display.contains("released handle"));
}

#[test]
fn test_backend_display() {
    let err = Error::Backend("context lost".to_string());
    let display = format!("{}", err);
    assert!(display.contains("Backend error"));
    assert!(display.contains("context lost"));
}

// ============================================================================
// ERROR TRAIT IMPLEMENTATIONS
// ============================================================================

#[test]
fn test_error_is_std_error() {
    let err = Error::Backend("test".to_string());
    let _: &dyn std::error::Error = &err;
}

#[test]
fn test_error_debug() {
    let err = Error::ShaderLink("test".to_string());
    let debug = format!("{:?}", err);
    assert!(debug.contains("ShaderLink"));

    let err = Error::InvalidHandle("stale");
    let debug = format!("{:?}", err);
    assert!(debug.contains("InvalidHandle"));
}

#[test]
fn test_error_clone() {
    let err = Error::ShaderCompile {
        stage: ShaderStage::Fragment,
        log: "boom".to_string(),
    };
    let cloned = err.clone();
    assert_eq!(format!("{}", err), format!("{}", cloned));
}
