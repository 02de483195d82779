//! Vertex layout and coordinate conversion
//!
//! The vertex record here is the bit-exact contract the GPU pipelines bind:
//! attribute slot 0 is a two-float position in clip space, slot 1 a
//! four-float RGBA color. The shaders copy both through unchanged, so all
//! geometry work happens on the CPU in these coordinates.

use bytemuck::{Pod, Zeroable};

/// A single whiteboard vertex as uploaded to the GPU.
///
/// Position is already in clip space (x and y in [-1, 1]); the vertex stage
/// appends z = 0.0 and w = 1.0. Color is normalized RGBA and reaches the
/// fragment stage unmodified.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub fn new(position: [f32; 2], color: [f32; 4]) -> Self {
        Self { position, color }
    }
}

/// Convert window pixel coordinates to clip-space coordinates.
///
/// (0, 0) is the window's top-left corner; clip space puts (-1, -1) at the
/// bottom-left, so y is flipped.
pub fn screen_to_clip(x: f32, y: f32, width: f32, height: f32) -> [f32; 2] {
    [x / width * 2.0 - 1.0, -(y / height * 2.0 - 1.0)]
}

/// Convert a normalized RGBA color to 8-bit channels.
pub fn normalized_to_rgba(color: [f32; 4]) -> [u8; 4] {
    [
        (color[0].clamp(0.0, 1.0) * 255.0) as u8,
        (color[1].clamp(0.0, 1.0) * 255.0) as u8,
        (color[2].clamp(0.0, 1.0) * 255.0) as u8,
        (color[3].clamp(0.0, 1.0) * 255.0) as u8,
    ]
}

/// Convert 8-bit RGBA channels to a normalized color.
pub fn rgba_to_normalized(color: [u8; 4]) -> [f32; 4] {
    [
        color[0] as f32 / 255.0,
        color[1] as f32 / 255.0,
        color[2] as f32 / 255.0,
        color[3] as f32 / 255.0,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_is_24_bytes() {
        // Two f32 position + four f32 color, no padding
        assert_eq!(std::mem::size_of::<Vertex>(), 24);
        assert_eq!(std::mem::offset_of!(Vertex, position), 0);
        assert_eq!(std::mem::offset_of!(Vertex, color), 8);
    }

    #[test]
    fn test_screen_to_clip_corners() {
        assert_eq!(screen_to_clip(0.0, 0.0, 800.0, 600.0), [-1.0, 1.0]);
        assert_eq!(screen_to_clip(800.0, 600.0, 800.0, 600.0), [1.0, -1.0]);
        assert_eq!(screen_to_clip(400.0, 300.0, 800.0, 600.0), [0.0, 0.0]);
    }

    #[test]
    fn test_screen_to_clip_quadrants() {
        // Top-right quadrant of the window has positive x, positive y in clip space
        let [x, y] = screen_to_clip(600.0, 150.0, 800.0, 600.0);
        assert!(x > 0.0 && y > 0.0);
        // Bottom-left quadrant is negative in both
        let [x, y] = screen_to_clip(200.0, 450.0, 800.0, 600.0);
        assert!(x < 0.0 && y < 0.0);
    }

    #[test]
    fn test_color_conversion_roundtrip() {
        let rgba = [255, 0, 128, 255];
        let normalized = rgba_to_normalized(rgba);
        assert_eq!(normalized_to_rgba(normalized), rgba);
    }

    #[test]
    fn test_color_conversion_clamps() {
        assert_eq!(normalized_to_rgba([2.0, -1.0, 0.0, 1.0]), [255, 0, 0, 255]);
    }
}
