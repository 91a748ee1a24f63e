/*!
# Oxbow Shader

File-to-shader loading pipeline: probe a shader file's size, read its
contents into an owned buffer with a trailing terminator, and submit the
source text to a graphics driver for compilation.

The crate is backend-agnostic. The driver side of the pipeline is the
[`ShaderDriver`] trait; backend crates (OpenGL, etc.) provide concrete
implementations, and tests run against a recording mock.

## Architecture

- **source**: size probing and content loading ([`probe_size`],
  [`load_content`], [`ShaderSource`])
- **driver**: the [`ShaderDriver`] seam plus stage/handle/status types
- **compiler**: orchestration from file path to driver-issued handle

Scope ends at the compiled (or failed) shader handle: program linking and
everything after it belongs to the caller.
*/

// Internal modules
mod error;
pub mod compiler;
pub mod driver;
pub mod log;
pub mod source;

// Re-exports at crate root for backend implementations and callers
pub use crate::compiler::{compile_shader, compile_shader_checked};
pub use crate::driver::{CompileStatus, ShaderDriver, ShaderHandle, ShaderStage};
pub use crate::error::{ShaderError, ShaderResult};
pub use crate::source::{load_content, probe_size, ShaderSource, SOURCE_TERMINATOR};

// Main oxbow namespace module
pub mod oxbow {
    // Error types
    pub use crate::error::{ShaderError, ShaderResult};

    // Compilation entry points
    pub use crate::compiler::{compile_shader, compile_shader_checked};

    // Logging sub-module (types only, NOT macros)
    pub mod log {
        pub use crate::log::{DefaultLogger, LogEntry, LogSeverity, Logger};
    }

    // Driver sub-module with the backend seam
    pub mod driver {
        pub use crate::driver::*;
    }

    // Source sub-module
    pub mod source {
        pub use crate::source::*;
    }
}
