//! Mock ShaderDriver for unit tests (no GPU required)
//!
//! Records every driver call so tests can assert exactly which calls were
//! made, with which stage and how many source bytes, without a graphics
//! context.

#[cfg(test)]
use std::collections::HashMap;

#[cfg(test)]
use crate::driver::{CompileStatus, ShaderDriver, ShaderHandle, ShaderStage};
#[cfg(test)]
use crate::error::{ShaderError, ShaderResult};

/// One recorded driver call
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DriverCall {
    /// create_shader was called
    CreateShader {
        stage: ShaderStage,
        handle: ShaderHandle,
    },
    /// shader_source was called with `len` source bytes
    ShaderSource { shader: ShaderHandle, len: usize },
    /// compile_shader was called
    CompileShader { shader: ShaderHandle },
    /// compile_status was called
    CompileStatus { shader: ShaderHandle },
}

/// Recording mock driver
#[cfg(test)]
pub struct MockShaderDriver {
    /// Raw id handed out by the next create_shader call
    next_raw: u32,
    /// Every call made against this driver, in order
    pub calls: Vec<DriverCall>,
    /// Source bytes submitted per handle
    pub sources: HashMap<ShaderHandle, Vec<u8>>,
    /// When true, create_shader fails with a Driver error
    pub fail_create: bool,
    /// Status reported by compile_status
    pub status: CompileStatus,
}

#[cfg(test)]
impl MockShaderDriver {
    pub fn new() -> Self {
        Self {
            next_raw: 1,
            calls: Vec::new(),
            sources: HashMap::new(),
            fail_create: false,
            status: CompileStatus::Succeeded,
        }
    }

    /// Mock whose create_shader call fails
    pub fn failing_create() -> Self {
        let mut driver = Self::new();
        driver.fail_create = true;
        driver
    }

    /// Mock whose compile_status reports the given status
    pub fn with_status(status: CompileStatus) -> Self {
        let mut driver = Self::new();
        driver.status = status;
        driver
    }

    /// Number of create_shader calls recorded
    pub fn create_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::CreateShader { .. }))
            .count()
    }

    /// Number of shader_source calls recorded
    pub fn source_calls(&self) -> usize {
        self.calls
            .iter()
            .filter(|call| matches!(call, DriverCall::ShaderSource { .. }))
            .count()
    }

    /// Source bytes submitted for a handle, if any
    pub fn source_for(&self, shader: ShaderHandle) -> Option<&[u8]> {
        self.sources.get(&shader).map(|bytes| bytes.as_slice())
    }

    fn known(&self, shader: ShaderHandle) -> ShaderResult<()> {
        if self.sources.contains_key(&shader) {
            Ok(())
        } else {
            Err(ShaderError::Driver(format!(
                "unknown shader handle {}",
                shader.raw()
            )))
        }
    }
}

#[cfg(test)]
impl ShaderDriver for MockShaderDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderResult<ShaderHandle> {
        if self.fail_create {
            return Err(ShaderError::Driver("mock create_shader failure".to_string()));
        }
        let handle = ShaderHandle::new(self.next_raw);
        self.next_raw += 1;
        self.calls.push(DriverCall::CreateShader { stage, handle });
        self.sources.insert(handle, Vec::new());
        Ok(handle)
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &[u8]) -> ShaderResult<()> {
        self.known(shader)?;
        self.calls.push(DriverCall::ShaderSource {
            shader,
            len: source.len(),
        });
        self.sources.insert(shader, source.to_vec());
        Ok(())
    }

    fn compile_shader(&mut self, shader: ShaderHandle) -> ShaderResult<()> {
        self.known(shader)?;
        self.calls.push(DriverCall::CompileShader { shader });
        Ok(())
    }

    fn compile_status(&mut self, shader: ShaderHandle) -> ShaderResult<CompileStatus> {
        self.known(shader)?;
        self.calls.push(DriverCall::CompileStatus { shader });
        Ok(self.status)
    }
}

#[cfg(test)]
#[path = "mock_driver_tests.rs"]
mod tests;
