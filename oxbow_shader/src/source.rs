//! Shader source file access
//!
//! Two leaf operations and an owned buffer type built on top of them:
//! [`probe_size`] reports a file's byte length, [`load_content`] reads a
//! known number of bytes into a caller-supplied buffer and appends the
//! terminator, and [`ShaderSource`] performs probe and read on a single
//! open handle so the file cannot change size between the two steps.
//!
//! All failures emit a diagnostic through the crate logger and return a
//! [`ShaderError`]; file handles are released on every exit path.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};

use crate::error::{ShaderError, ShaderResult};
use crate::oxbow_error;

/// Terminator byte appended after the last content byte of a shader source
pub const SOURCE_TERMINATOR: u8 = 0;

/// Log source for this module
const LOG_SOURCE: &str = "oxbow::source";

/// Probe the byte length of a shader source file
///
/// Opens the file, seeks to end-of-file, and reports the resulting offset.
/// A file that exists but is empty is treated identically to an unreadable
/// file: both are errors, never an "empty shader".
///
/// # Arguments
///
/// * `path` - File path, absolute or relative
///
/// # Returns
///
/// The file's byte length, strictly positive
pub fn probe_size(path: &str) -> ShaderResult<u64> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            oxbow_error!(LOG_SOURCE, "Could not open file for reading: {}", path);
            return Err(ShaderError::Open {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }
    };

    let size = match file.seek(SeekFrom::End(0)) {
        Ok(size) => size,
        Err(err) => {
            oxbow_error!(LOG_SOURCE, "Failed to read EOF in file: {}", path);
            return Err(ShaderError::Open {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }
    };

    if size == 0 {
        oxbow_error!(
            LOG_SOURCE,
            "File is of 0 length or has invalid size: {} with size {}",
            path,
            size
        );
        return Err(ShaderError::InvalidSize {
            path: path.to_string(),
            size,
        });
    }

    // File handle is released here on the success path as well (RAII drop)
    Ok(size)
}

/// Read exactly `expected` bytes of a file into `buffer` and terminate
///
/// The buffer must hold at least `expected + 1` bytes; that precondition is
/// checked explicitly, so the terminator write can never land out of bounds.
/// On success the first `expected` bytes are the file contents and byte
/// `expected` is [`SOURCE_TERMINATOR`].
///
/// # Arguments
///
/// * `buffer` - Destination buffer of at least `expected + 1` bytes
/// * `path` - File path, absolute or relative
/// * `expected` - Exact number of content bytes to read (the file's true
///   size, typically obtained from [`probe_size`])
pub fn load_content(buffer: &mut [u8], path: &str, expected: usize) -> ShaderResult<()> {
    let mut file = match File::open(path) {
        Ok(file) => file,
        Err(err) => {
            oxbow_error!(LOG_SOURCE, "Could not open file for reading: {}", path);
            return Err(ShaderError::Open {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }
    };

    if expected == 0 {
        oxbow_error!(
            LOG_SOURCE,
            "File is of 0 length or has invalid size: {} with size {}",
            path,
            expected
        );
        return Err(ShaderError::InvalidSize {
            path: path.to_string(),
            size: 0,
        });
    }

    if buffer.len() < expected + 1 {
        oxbow_error!(
            LOG_SOURCE,
            "Buffer of {} bytes cannot hold {} bytes of {}",
            buffer.len(),
            expected + 1,
            path
        );
        return Err(ShaderError::BufferTooSmall {
            path: path.to_string(),
            needed: expected + 1,
            capacity: buffer.len(),
        });
    }

    if file.read_exact(&mut buffer[..expected]).is_err() {
        oxbow_error!(
            LOG_SOURCE,
            "Could not read {} bytes of file {}: destination too small or file invalid",
            expected,
            path
        );
        return Err(ShaderError::ShortRead {
            path: path.to_string(),
            expected,
        });
    }

    buffer[expected] = SOURCE_TERMINATOR;
    Ok(())
}

/// Owned shader source text plus trailing terminator byte
///
/// Probing and reading happen on a single open file handle, so the size the
/// buffer was allocated for is the size that is read. The buffer belongs to
/// the caller for the duration of one compilation and may be discarded
/// immediately afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSource {
    /// Content bytes followed by exactly one terminator byte
    bytes: Vec<u8>,
}

impl ShaderSource {
    /// Load a whole shader source file into an owned, terminated buffer
    ///
    /// # Arguments
    ///
    /// * `path` - File path, absolute or relative
    pub fn from_file(path: &str) -> ShaderResult<Self> {
        let mut file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                oxbow_error!(LOG_SOURCE, "Could not open file for reading: {}", path);
                return Err(ShaderError::Open {
                    path: path.to_string(),
                    reason: err.to_string(),
                });
            }
        };

        let size = match file.seek(SeekFrom::End(0)) {
            Ok(size) => size,
            Err(err) => {
                oxbow_error!(LOG_SOURCE, "Failed to read EOF in file: {}", path);
                return Err(ShaderError::Open {
                    path: path.to_string(),
                    reason: err.to_string(),
                });
            }
        };

        if size == 0 {
            oxbow_error!(
                LOG_SOURCE,
                "File is of 0 length or has invalid size: {} with size {}",
                path,
                size
            );
            return Err(ShaderError::InvalidSize {
                path: path.to_string(),
                size,
            });
        }

        if let Err(err) = file.seek(SeekFrom::Start(0)) {
            oxbow_error!(LOG_SOURCE, "Failed to rewind file: {}", path);
            return Err(ShaderError::Open {
                path: path.to_string(),
                reason: err.to_string(),
            });
        }

        let expected = size as usize;
        let mut bytes = Vec::with_capacity(expected + 1);

        // Cap the read at the probed size; a file that grew in between is
        // truncated to the size the buffer was allocated for.
        let read = match file.by_ref().take(size).read_to_end(&mut bytes) {
            Ok(read) => read,
            Err(_) => {
                oxbow_error!(
                    LOG_SOURCE,
                    "Could not read {} bytes of file {}: destination too small or file invalid",
                    expected,
                    path
                );
                return Err(ShaderError::ShortRead {
                    path: path.to_string(),
                    expected,
                });
            }
        };

        if read != expected {
            oxbow_error!(
                LOG_SOURCE,
                "Could not read {} bytes of file {}: destination too small or file invalid",
                expected,
                path
            );
            return Err(ShaderError::ShortRead {
                path: path.to_string(),
                expected,
            });
        }

        bytes.push(SOURCE_TERMINATOR);
        Ok(Self { bytes })
    }

    /// Number of content bytes, excluding the terminator
    pub fn text_len(&self) -> usize {
        self.bytes.len() - 1
    }

    /// Content bytes without the terminator
    ///
    /// This is the slice to submit to a driver's source-upload call.
    pub fn text(&self) -> &[u8] {
        &self.bytes[..self.text_len()]
    }

    /// Content bytes including the trailing terminator
    pub fn terminated_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[cfg(test)]
#[path = "source_tests.rs"]
mod tests;
