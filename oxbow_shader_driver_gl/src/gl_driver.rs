//! GlShaderDriver - OpenGL implementation of the ShaderDriver trait

use std::sync::Arc;

use glow::HasContext as _;
use rustc_hash::FxHashMap;

use oxbow_shader::{
    CompileStatus, ShaderDriver, ShaderError, ShaderHandle, ShaderResult, ShaderStage,
};

/// Map a pipeline stage tag to the GL shader type enum
pub fn stage_to_gl(stage: ShaderStage) -> u32 {
    match stage {
        ShaderStage::Vertex => glow::VERTEX_SHADER,
        ShaderStage::Fragment => glow::FRAGMENT_SHADER,
        ShaderStage::Geometry => glow::GEOMETRY_SHADER,
        ShaderStage::Compute => glow::COMPUTE_SHADER,
    }
}

/// OpenGL shader driver
///
/// Owns a handle table mapping the loader's opaque [`ShaderHandle`]s to GL
/// shader objects. The GL context must be current on the calling thread for
/// every method; the driver performs no synchronization of its own.
pub struct GlShaderDriver {
    /// GL function loader
    gl: Arc<glow::Context>,
    /// Loader handle to GL shader object
    shaders: FxHashMap<u32, glow::Shader>,
    /// Raw id handed out by the next create_shader call
    next_raw: u32,
}

impl GlShaderDriver {
    /// Create a driver over an existing GL context
    ///
    /// # Arguments
    ///
    /// * `gl` - The glow context, shared with whatever owns the window
    pub fn new(gl: Arc<glow::Context>) -> Self {
        Self {
            gl,
            shaders: FxHashMap::default(),
            next_raw: 1,
        }
    }

    fn lookup(&self, shader: ShaderHandle) -> ShaderResult<glow::Shader> {
        self.shaders
            .get(&shader.raw())
            .copied()
            .ok_or_else(|| ShaderError::Driver(format!("unknown shader handle {}", shader.raw())))
    }
}

impl ShaderDriver for GlShaderDriver {
    fn create_shader(&mut self, stage: ShaderStage) -> ShaderResult<ShaderHandle> {
        let shader =
            unsafe { self.gl.create_shader(stage_to_gl(stage)) }.map_err(ShaderError::Driver)?;

        let handle = ShaderHandle::new(self.next_raw);
        self.next_raw += 1;
        self.shaders.insert(handle.raw(), shader);
        Ok(handle)
    }

    fn shader_source(&mut self, shader: ShaderHandle, source: &[u8]) -> ShaderResult<()> {
        let gl_shader = self.lookup(shader)?;

        // GLSL source is text; glow submits it as &str
        let text = std::str::from_utf8(source).map_err(|err| {
            ShaderError::Driver(format!("shader source is not valid UTF-8: {}", err))
        })?;

        unsafe { self.gl.shader_source(gl_shader, text) };
        Ok(())
    }

    fn compile_shader(&mut self, shader: ShaderHandle) -> ShaderResult<()> {
        let gl_shader = self.lookup(shader)?;
        unsafe { self.gl.compile_shader(gl_shader) };
        Ok(())
    }

    fn compile_status(&mut self, shader: ShaderHandle) -> ShaderResult<CompileStatus> {
        let gl_shader = self.lookup(shader)?;
        let compiled = unsafe { self.gl.get_shader_compile_status(gl_shader) };
        Ok(if compiled {
            CompileStatus::Succeeded
        } else {
            CompileStatus::Failed
        })
    }
}

#[cfg(test)]
#[path = "gl_driver_tests.rs"]
mod tests;
