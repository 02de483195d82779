//! Slate core - whiteboard document model
//!
//! Pure state types with no GPU or window dependencies, so everything here
//! can be unit tested headlessly. The actual rendering lives in
//! `slate-renderer`; this crate only describes what is on the canvas.

pub mod document;
pub mod geometry;

pub use document::{Action, Document, RectShape, TextBounds, TextEntry};
pub use geometry::{Vertex, normalized_to_rgba, rgba_to_normalized, screen_to_clip};
