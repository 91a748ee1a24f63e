//! Unit tests for MockShaderDriver
//!
//! Ensures the mock records calls faithfully, since the compiler tests lean
//! on that recording.

use super::*;
use crate::driver::{CompileStatus, ShaderDriver, ShaderHandle, ShaderStage};
use crate::error::ShaderError;

#[test]
fn test_create_shader_issues_distinct_handles() {
    let mut driver = MockShaderDriver::new();

    let first = driver.create_shader(ShaderStage::Vertex).unwrap();
    let second = driver.create_shader(ShaderStage::Fragment).unwrap();

    assert_ne!(first, second);
    assert_eq!(driver.create_calls(), 2);
    assert_eq!(
        driver.calls[0],
        DriverCall::CreateShader {
            stage: ShaderStage::Vertex,
            handle: first,
        }
    );
    assert_eq!(
        driver.calls[1],
        DriverCall::CreateShader {
            stage: ShaderStage::Fragment,
            handle: second,
        }
    );
}

#[test]
fn test_failing_create_records_nothing() {
    let mut driver = MockShaderDriver::failing_create();

    let result = driver.create_shader(ShaderStage::Vertex);

    assert!(matches!(result, Err(ShaderError::Driver(_))));
    assert!(driver.calls.is_empty());
}

#[test]
fn test_shader_source_records_bytes_and_length() {
    let mut driver = MockShaderDriver::new();
    let handle = driver.create_shader(ShaderStage::Vertex).unwrap();

    driver.shader_source(handle, b"void main() {}").unwrap();

    assert_eq!(driver.source_calls(), 1);
    assert_eq!(
        driver.calls[1],
        DriverCall::ShaderSource {
            shader: handle,
            len: 14,
        }
    );
    assert_eq!(driver.source_for(handle), Some(b"void main() {}".as_slice()));
}

#[test]
fn test_unknown_handle_is_rejected() {
    let mut driver = MockShaderDriver::new();
    let bogus = ShaderHandle::new(99);

    assert!(driver.shader_source(bogus, b"x").is_err());
    assert!(driver.compile_shader(bogus).is_err());
    assert!(driver.compile_status(bogus).is_err());
    assert!(driver.calls.is_empty());
}

#[test]
fn test_compile_status_reports_configured_status() {
    let mut driver = MockShaderDriver::with_status(CompileStatus::Failed);
    let handle = driver.create_shader(ShaderStage::Vertex).unwrap();

    assert_eq!(driver.compile_status(handle), Ok(CompileStatus::Failed));
    assert_eq!(
        driver.calls[1],
        DriverCall::CompileStatus { shader: handle }
    );
}

#[test]
fn test_default_status_is_succeeded() {
    let mut driver = MockShaderDriver::new();
    let handle = driver.create_shader(ShaderStage::Compute).unwrap();

    driver.compile_shader(handle).unwrap();
    assert_eq!(driver.compile_status(handle), Ok(CompileStatus::Succeeded));
}
