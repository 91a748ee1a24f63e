//! Shader Compiler - orchestrates the file-to-shader pipeline
//!
//! Loads a shader source file into an owned, terminated buffer and hands it
//! to the driver: create a shader object for the requested stage, submit
//! exactly the loaded content bytes, request compilation, return the handle.
//!
//! Control flow is strictly sequential and single-threaded. Any file-side
//! failure returns before the first driver call, so a failed call creates no
//! driver-side shader object.

use crate::driver::{CompileStatus, ShaderDriver, ShaderHandle, ShaderStage};
use crate::error::{ShaderError, ShaderResult};
use crate::oxbow_error;
use crate::source::ShaderSource;

/// Log source for this module
const LOG_SOURCE: &str = "oxbow::compiler";

/// Load a shader source file and submit it to the driver for compilation
///
/// Returns the driver-issued handle regardless of whether driver-internal
/// compilation succeeded; inspecting compile status is the caller's business
/// (or use [`compile_shader_checked`]).
///
/// # Arguments
///
/// * `driver` - Graphics driver to create and compile the shader with
/// * `path` - Shader source file path, absolute or relative
/// * `stage` - Pipeline stage tag, forwarded untouched to the driver
///
/// # Returns
///
/// Handle to the (possibly failed) driver-side shader object
pub fn compile_shader<D>(
    driver: &mut D,
    path: &str,
    stage: ShaderStage,
) -> ShaderResult<ShaderHandle>
where
    D: ShaderDriver + ?Sized,
{
    // File-side failures abort before any driver call is made
    let source = match ShaderSource::from_file(path) {
        Ok(source) => source,
        Err(err) => {
            oxbow_error!(LOG_SOURCE, "Failed to load shader: {}", path);
            return Err(err);
        }
    };

    let handle = driver.create_shader(stage)?;
    driver.shader_source(handle, source.text())?;
    driver.compile_shader(handle)?;
    Ok(handle)
}

/// [`compile_shader`], then verify the driver-side compilation status
///
/// Distinguishes file/IO failure (errors from the load pipeline) from a
/// driver that accepted the handle but rejected the source
/// ([`ShaderError::CompileFailed`]).
///
/// # Arguments
///
/// * `driver` - Graphics driver to create and compile the shader with
/// * `path` - Shader source file path, absolute or relative
/// * `stage` - Pipeline stage tag, forwarded untouched to the driver
///
/// # Returns
///
/// Handle to a shader object whose compilation the driver reports as
/// successful
pub fn compile_shader_checked<D>(
    driver: &mut D,
    path: &str,
    stage: ShaderStage,
) -> ShaderResult<ShaderHandle>
where
    D: ShaderDriver + ?Sized,
{
    let handle = compile_shader(driver, path, stage)?;
    match driver.compile_status(handle)? {
        CompileStatus::Succeeded => Ok(handle),
        CompileStatus::Failed => {
            oxbow_error!(LOG_SOURCE, "Shader compilation failed: {}", path);
            Err(ShaderError::CompileFailed {
                path: path.to_string(),
            })
        }
    }
}

#[cfg(test)]
#[path = "compiler_tests.rs"]
mod tests;
