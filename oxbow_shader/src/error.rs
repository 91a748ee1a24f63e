//! Error types for the oxbow shader loader
//!
//! This module defines the error types used throughout the loader,
//! covering file access, sizing, reading, and driver submission.

use std::fmt;

/// Result type for shader loading operations
pub type ShaderResult<T> = Result<T, ShaderError>;

/// Shader loading errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShaderError {
    /// File missing or unreadable
    Open {
        /// Path that failed to open
        path: String,
        /// Underlying I/O failure description
        reason: String,
    },

    /// File reports a zero or otherwise invalid length
    InvalidSize {
        /// Path whose size was probed
        path: String,
        /// The invalid size that was reported
        size: u64,
    },

    /// Fewer bytes were available than the requested read length
    ShortRead {
        /// Path being read
        path: String,
        /// Number of bytes that were requested
        expected: usize,
    },

    /// Caller-supplied buffer cannot hold the content plus terminator
    BufferTooSmall {
        /// Path being read
        path: String,
        /// Bytes required (content plus terminator)
        needed: usize,
        /// Bytes actually available in the buffer
        capacity: usize,
    },

    /// Backend-specific driver error (GL, Vulkan, etc.)
    Driver(String),

    /// The driver issued a handle but rejected the source during compilation
    CompileFailed {
        /// Path of the shader that failed to compile
        path: String,
    },
}

impl fmt::Display for ShaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderError::Open { path, reason } => {
                write!(f, "Could not open file for reading: {}: {}", path, reason)
            }
            ShaderError::InvalidSize { path, size } => {
                write!(
                    f,
                    "File is of 0 length or has invalid size: {} with size {}",
                    path, size
                )
            }
            ShaderError::ShortRead { path, expected } => {
                write!(f, "Could not read {} bytes of file {}", expected, path)
            }
            ShaderError::BufferTooSmall {
                path,
                needed,
                capacity,
            } => {
                write!(
                    f,
                    "Buffer of {} bytes cannot hold {} bytes of {}",
                    capacity, needed, path
                )
            }
            ShaderError::Driver(msg) => write!(f, "Driver error: {}", msg),
            ShaderError::CompileFailed { path } => {
                write!(f, "Shader compilation failed: {}", path)
            }
        }
    }
}

impl std::error::Error for ShaderError {}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
