//! Shader module - WGSL shaders for GPU rendering
//!
//! Shaders are stored as external .wgsl files and included at compile time.
//! This enables better IDE support (syntax highlighting, validation) while
//! keeping the binary self-contained.

/// Built-in shaders included at compile time
pub mod builtin {
    /// Stroke shader - clip-space pass-through for freehand line segments
    pub const STROKE: &str = include_str!("stroke.wgsl");

    /// Shape shader - same pass-through with `triangle_vs`/`rectangle_vs`
    /// entry points, used for rectangle outlines
    pub const SHAPE: &str = include_str!("shape.wgsl");
}
