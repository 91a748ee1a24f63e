//! Unit tests for compiler.rs
//!
//! Runs the full file-to-shader pipeline against MockShaderDriver and real
//! files in the system temp directory, asserting exactly which driver calls
//! each scenario produces.

use super::*;
use crate::driver::mock_driver::{DriverCall, MockShaderDriver};
use crate::log::{reset_logger, set_logger, LogEntry, Logger};
use serial_test::serial;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

// ============================================================================
// Helper Functions
// ============================================================================

/// Temp file that removes itself on drop
struct TempFile {
    path: PathBuf,
}

impl TempFile {
    fn new(name: &str, contents: &[u8]) -> Self {
        let mut path = std::env::temp_dir();
        path.push(format!("oxbow_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        Self { path }
    }

    fn path_str(&self) -> &str {
        self.path.to_str().unwrap()
    }
}

impl Drop for TempFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}

/// 42 bytes of plausible shader text
const BASIC_VERT: &[u8] = b"void main() { gl_Position = vec4(0.0); }\r\n";

#[derive(Clone)]
struct RecordingLogger {
    entries: Arc<Mutex<Vec<LogEntry>>>,
}

impl RecordingLogger {
    fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn messages(&self) -> Vec<String> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|entry| entry.message.clone())
            .collect()
    }
}

impl Logger for RecordingLogger {
    fn log(&self, entry: &LogEntry) {
        self.entries.lock().unwrap().push(entry.clone());
    }
}

// ============================================================================
// compile_shader TESTS
// ============================================================================

#[test]
fn test_compile_shader_valid_file() {
    let file = TempFile::new("compile_basic.vert", BASIC_VERT);
    let mut driver = MockShaderDriver::new();

    let handle = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex).unwrap();

    // Exactly one shader object created, with the requested stage
    assert_eq!(driver.create_calls(), 1);
    assert_eq!(
        driver.calls[0],
        DriverCall::CreateShader {
            stage: ShaderStage::Vertex,
            handle,
        }
    );

    // Exactly one source submission whose length is the file's byte length
    assert_eq!(driver.source_calls(), 1);
    assert_eq!(
        driver.calls[1],
        DriverCall::ShaderSource {
            shader: handle,
            len: BASIC_VERT.len(),
        }
    );
    assert_eq!(driver.source_for(handle), Some(BASIC_VERT));

    // Compilation requested, status never queried
    assert_eq!(driver.calls[2], DriverCall::CompileShader { shader: handle });
    assert_eq!(driver.calls.len(), 3);
}

#[test]
fn test_compile_shader_forwards_stage_untouched() {
    let file = TempFile::new("compile_frag.frag", b"void main() {}");
    let mut driver = MockShaderDriver::new();

    let handle = compile_shader(&mut driver, file.path_str(), ShaderStage::Fragment).unwrap();

    assert_eq!(
        driver.calls[0],
        DriverCall::CreateShader {
            stage: ShaderStage::Fragment,
            handle,
        }
    );
}

#[test]
fn test_compile_shader_nonexistent_path_makes_no_driver_calls() {
    let mut driver = MockShaderDriver::new();

    let result = compile_shader(
        &mut driver,
        "/nonexistent/oxbow/basic.vert",
        ShaderStage::Vertex,
    );

    assert!(matches!(result, Err(ShaderError::Open { .. })));
    assert!(driver.calls.is_empty());
}

#[test]
fn test_compile_shader_empty_file_makes_no_driver_calls() {
    let file = TempFile::new("compile_empty.vert", b"");
    let mut driver = MockShaderDriver::new();

    let result = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex);

    assert!(matches!(result, Err(ShaderError::InvalidSize { .. })));
    assert!(driver.calls.is_empty());
}

#[test]
fn test_compile_shader_twice_yields_independent_handles_same_bytes() {
    let file = TempFile::new("compile_twice.vert", BASIC_VERT);
    let mut driver = MockShaderDriver::new();

    let first = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex).unwrap();
    let second = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex).unwrap();

    assert_ne!(first, second);
    assert_eq!(driver.create_calls(), 2);
    assert_eq!(driver.source_for(first), driver.source_for(second));
    assert_eq!(driver.source_for(first), Some(BASIC_VERT));
}

#[test]
fn test_compile_shader_propagates_driver_create_failure() {
    let file = TempFile::new("compile_nodriver.vert", BASIC_VERT);
    let mut driver = MockShaderDriver::failing_create();

    let result = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex);

    assert!(matches!(result, Err(ShaderError::Driver(_))));
    assert_eq!(driver.source_calls(), 0);
}

#[test]
fn test_compile_shader_ignores_driver_compile_status() {
    // Driver-side compile errors are not a Failure here; the caller queries
    // status separately if it cares
    let file = TempFile::new("compile_badsrc.vert", b"not a shader at all");
    let mut driver = MockShaderDriver::with_status(CompileStatus::Failed);

    let result = compile_shader(&mut driver, file.path_str(), ShaderStage::Vertex);

    assert!(result.is_ok());
    assert!(!driver
        .calls
        .iter()
        .any(|call| matches!(call, DriverCall::CompileStatus { .. })));
}

#[test]
#[serial]
fn test_compile_shader_load_failure_emits_diagnostic() {
    let recorder = RecordingLogger::new();
    set_logger(Box::new(recorder.clone()));

    let mut driver = MockShaderDriver::new();
    let _ = compile_shader(
        &mut driver,
        "/nonexistent/oxbow/basic.vert",
        ShaderStage::Vertex,
    );

    let messages = recorder.messages();
    // One diagnostic from the source layer, one from the compiler
    assert!(messages
        .iter()
        .any(|message| message.contains("Could not open file for reading")));
    assert!(messages
        .iter()
        .any(|message| message.contains("Failed to load shader")));

    reset_logger();
}

// ============================================================================
// compile_shader_checked TESTS
// ============================================================================

#[test]
fn test_compile_shader_checked_success() {
    let file = TempFile::new("checked_ok.vert", BASIC_VERT);
    let mut driver = MockShaderDriver::new();

    let handle = compile_shader_checked(&mut driver, file.path_str(), ShaderStage::Vertex).unwrap();

    // Same pipeline as compile_shader plus exactly one status query
    assert_eq!(driver.calls.len(), 4);
    assert_eq!(
        driver.calls[3],
        DriverCall::CompileStatus { shader: handle }
    );
}

#[test]
fn test_compile_shader_checked_surfaces_driver_rejection() {
    let file = TempFile::new("checked_bad.vert", b"not a shader at all");
    let mut driver = MockShaderDriver::with_status(CompileStatus::Failed);

    let result = compile_shader_checked(&mut driver, file.path_str(), ShaderStage::Vertex);

    assert_eq!(
        result,
        Err(ShaderError::CompileFailed {
            path: file.path_str().to_string(),
        })
    );
    // The shader object was still created; only the status check failed
    assert_eq!(driver.create_calls(), 1);
}

#[test]
fn test_compile_shader_checked_file_failure_is_not_compile_failed() {
    let mut driver = MockShaderDriver::with_status(CompileStatus::Failed);

    let result = compile_shader_checked(
        &mut driver,
        "/nonexistent/oxbow/basic.vert",
        ShaderStage::Vertex,
    );

    // File/IO failure and driver rejection stay distinguishable
    assert!(matches!(result, Err(ShaderError::Open { .. })));
    assert!(driver.calls.is_empty());
}
