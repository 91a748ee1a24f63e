//! Driver module - the backend seam of the loading pipeline
//!
//! Defines the [`ShaderDriver`] trait implemented by backend crates and the
//! opaque stage/handle/status types passed across it. A recording mock
//! driver is available for tests.

// Module declarations
pub mod mock_driver;
pub mod shader_driver;

// Re-export the driver seam
pub use shader_driver::*;
