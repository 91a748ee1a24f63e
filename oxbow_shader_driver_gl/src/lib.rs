/*!
# Oxbow Shader - OpenGL Driver Backend

OpenGL implementation of the oxbow_shader driver seam.

This crate provides a [`GlShaderDriver`] that implements the
`oxbow_shader::ShaderDriver` trait using the glow library for GL bindings.
The caller owns the GL context and the thread it is current on; the driver
only issues shader object calls against it.
*/

// GL implementation modules
mod gl_driver;

pub use gl_driver::{stage_to_gl, GlShaderDriver};
