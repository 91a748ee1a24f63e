//! ShaderDriver trait and the opaque types passed across it

use crate::error::ShaderResult;

/// Shader pipeline stage
///
/// Forwarded untouched to the driver; the loader itself attaches no meaning
/// to the stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex shader
    Vertex,
    /// Fragment/Pixel shader
    Fragment,
    /// Geometry shader
    Geometry,
    /// Compute shader
    Compute,
}

/// Opaque identifier for a driver-side shader object
///
/// Issued by the driver when a shader object is created. The loader only
/// creates handles and hands them back to the caller; it never destroys or
/// tracks them, so the handle's lifetime is governed by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShaderHandle(u32);

impl ShaderHandle {
    /// Wrap a raw driver identifier
    pub fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// The raw driver identifier
    pub fn raw(&self) -> u32 {
        self.0
    }
}

/// Result of the driver-side compilation status query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompileStatus {
    /// The driver accepted and compiled the source
    Succeeded,
    /// The driver rejected the source
    Failed,
}

/// Graphics driver seam for shader creation and compilation
///
/// Implemented by backend crates (e.g., GlShaderDriver over OpenGL). The
/// trait is deliberately not `Send`/`Sync`: a graphics context is owned by
/// one thread, and the loader assumes exactly one caller at a time.
pub trait ShaderDriver {
    /// Create a new shader object for the given stage
    ///
    /// # Arguments
    ///
    /// * `stage` - Pipeline stage of the shader
    ///
    /// # Returns
    ///
    /// Handle to the new driver-side shader object
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderResult<ShaderHandle>;

    /// Submit source text for a shader object
    ///
    /// # Arguments
    ///
    /// * `shader` - Handle returned by [`ShaderDriver::create_shader`]
    /// * `source` - Source text bytes, without any terminator
    fn shader_source(&mut self, shader: ShaderHandle, source: &[u8]) -> ShaderResult<()>;

    /// Request compilation of previously submitted source
    ///
    /// Driver-internal compile errors are not reported here; query them with
    /// [`ShaderDriver::compile_status`].
    ///
    /// # Arguments
    ///
    /// * `shader` - Handle returned by [`ShaderDriver::create_shader`]
    fn compile_shader(&mut self, shader: ShaderHandle) -> ShaderResult<()>;

    /// Query whether the last compilation of this shader succeeded
    ///
    /// # Arguments
    ///
    /// * `shader` - Handle returned by [`ShaderDriver::create_shader`]
    fn compile_status(&mut self, shader: ShaderHandle) -> ShaderResult<CompileStatus>;
}
