//! Unit tests for gl_driver.rs
//!
//! Everything touching a live GL context needs a window and a current
//! context, which is out of reach for unit tests; these cover the pure
//! stage mapping.

use super::*;
use oxbow_shader::ShaderStage;

#[test]
fn test_stage_to_gl_mapping() {
    assert_eq!(stage_to_gl(ShaderStage::Vertex), glow::VERTEX_SHADER);
    assert_eq!(stage_to_gl(ShaderStage::Fragment), glow::FRAGMENT_SHADER);
    assert_eq!(stage_to_gl(ShaderStage::Geometry), glow::GEOMETRY_SHADER);
    assert_eq!(stage_to_gl(ShaderStage::Compute), glow::COMPUTE_SHADER);
}

#[test]
fn test_stage_to_gl_values_are_distinct() {
    let values = [
        stage_to_gl(ShaderStage::Vertex),
        stage_to_gl(ShaderStage::Fragment),
        stage_to_gl(ShaderStage::Geometry),
        stage_to_gl(ShaderStage::Compute),
    ];

    for (i, a) in values.iter().enumerate() {
        for b in values.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}
