//! Interaction state
//!
//! Pure drawing-tool and text-editing state with no GPU or window
//! dependencies, so the interaction logic can be unit tested headlessly.

mod editor;
mod tool;

pub use editor::TextEditor;
pub use tool::ToolState;
