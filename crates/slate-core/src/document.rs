//! Whiteboard document: strokes, rectangle shapes, and text entries
//!
//! A document is an ordered log of committed actions. Rendering derives
//! vertex lists from the log each frame; undo/redo move actions between the
//! history and a redo stack.

use crate::geometry::Vertex;

/// Axis-aligned rectangle drawn as a line-list outline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectShape {
    /// First drag corner in clip space
    pub first: [f32; 2],
    /// Opposite drag corner in clip space
    pub last: [f32; 2],
    /// Outline color (RGBA)
    pub color: [f32; 4],
}

impl RectShape {
    /// Expand the rectangle into the 8 vertices of its outline.
    ///
    /// Each edge contributes a line-list pair, walked corner to corner so
    /// the outline closes on itself.
    pub fn outline_vertices(&self) -> [Vertex; 8] {
        let (x1, y1) = (self.first[0], self.first[1]);
        let (x2, y2) = (self.last[0], self.last[1]);
        let v = |x, y| Vertex::new([x, y], self.color);

        [
            v(x1, y2),
            v(x2, y2),
            v(x2, y2),
            v(x2, y1),
            v(x2, y1),
            v(x1, y1),
            v(x1, y1),
            v(x1, y2),
        ]
    }
}

/// Pixel-space bounds of a laid-out text entry, used for hit testing.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct TextBounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl TextBounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }
}

/// A text entry placed on the canvas.
///
/// Position is in window pixels (text is laid out by the glyph pipeline,
/// not the vertex shaders). Bounds are written back after layout.
#[derive(Clone, Debug, PartialEq)]
pub struct TextEntry {
    pub position: [f32; 2],
    pub color: [u8; 4],
    pub content: String,
    /// Still being edited; rendered with a blinking cursor
    pub pending: bool,
    pub bounds: TextBounds,
    pub font_size: f32,
}

impl TextEntry {
    /// Create an empty pending entry at a position.
    pub fn new(position: [f32; 2], color: [u8; 4], font_size: f32) -> Self {
        Self {
            position,
            color,
            content: String::new(),
            pending: true,
            bounds: TextBounds::default(),
            font_size,
        }
    }

    /// Remove the last character, if any.
    pub fn pop_char(&mut self) {
        self.content.pop();
    }
}

/// A committed user action, in the order it happened.
#[derive(Clone, Debug, PartialEq)]
pub enum Action {
    Stroke(Vec<Vertex>),
    Shape(RectShape),
    Text(TextEntry),
}

/// The whiteboard document: an action log plus a redo stack.
#[derive(Debug, Default)]
pub struct Document {
    actions: Vec<Action>,
    undone: Vec<Action>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of committed actions.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Commit a freehand stroke. Empty and single-point strokes are
    /// dropped; they produce no line segments.
    pub fn commit_stroke(&mut self, stroke: Vec<Vertex>) {
        if stroke.len() < 2 {
            return;
        }
        self.push(Action::Stroke(stroke));
    }

    /// Commit a rectangle shape.
    pub fn commit_shape(&mut self, shape: RectShape) {
        self.push(Action::Shape(shape));
    }

    /// Commit a text entry. Empty entries are dropped.
    pub fn commit_text(&mut self, mut entry: TextEntry) {
        if entry.content.is_empty() {
            return;
        }
        entry.pending = false;
        self.push(Action::Text(entry));
    }

    fn push(&mut self, action: Action) {
        self.actions.push(action);
        self.undone.clear();
    }

    /// Undo the most recent action. Returns false if there is nothing to undo.
    pub fn undo(&mut self) -> bool {
        match self.actions.pop() {
            Some(action) => {
                self.undone.push(action);
                true
            }
            None => false,
        }
    }

    /// Re-apply the most recently undone action.
    pub fn redo(&mut self) -> bool {
        match self.undone.pop() {
            Some(action) => {
                self.actions.push(action);
                true
            }
            None => false,
        }
    }

    /// Remove everything, including the redo stack.
    pub fn clear(&mut self) {
        self.actions.clear();
        self.undone.clear();
        log::info!("Canvas cleared");
    }

    /// Flatten committed strokes (plus an optional in-progress stroke) into
    /// line-list vertices: each adjacent point pair becomes one segment.
    pub fn stroke_vertices(&self, live: Option<&[Vertex]>) -> Vec<Vertex> {
        let mut out = Vec::new();
        for action in &self.actions {
            if let Action::Stroke(stroke) = action {
                append_line_list(&mut out, stroke);
            }
        }
        if let Some(stroke) = live {
            append_line_list(&mut out, stroke);
        }
        out
    }

    /// Flatten committed shapes (plus an optional drag preview) into
    /// line-list outline vertices.
    pub fn shape_vertices(&self, preview: Option<&RectShape>) -> Vec<Vertex> {
        let mut out = Vec::new();
        for action in &self.actions {
            if let Action::Shape(shape) = action {
                out.extend_from_slice(&shape.outline_vertices());
            }
        }
        if let Some(shape) = preview {
            out.extend_from_slice(&shape.outline_vertices());
        }
        out
    }

    /// Committed text entries in commit order.
    pub fn texts(&self) -> impl Iterator<Item = &TextEntry> {
        self.actions.iter().filter_map(|a| match a {
            Action::Text(entry) => Some(entry),
            _ => None,
        })
    }

    /// Mutable access to committed text entries (layout writes bounds back,
    /// editing mutates content in place).
    pub fn texts_mut(&mut self) -> impl Iterator<Item = &mut TextEntry> {
        self.actions.iter_mut().filter_map(|a| match a {
            Action::Text(entry) => Some(entry),
            _ => None,
        })
    }

    /// Mutable access to the nth committed text entry.
    pub fn text_mut(&mut self, index: usize) -> Option<&mut TextEntry> {
        self.texts_mut().nth(index)
    }

    /// Find the committed text entry whose bounds contain the pixel position.
    pub fn hit_test_text(&self, x: f32, y: f32) -> Option<usize> {
        self.texts().position(|entry| entry.bounds.contains(x, y))
    }
}

fn append_line_list(out: &mut Vec<Vertex>, stroke: &[Vertex]) {
    for pair in stroke.windows(2) {
        out.push(pair[0]);
        out.push(pair[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    fn stroke_of(points: &[[f32; 2]]) -> Vec<Vertex> {
        points.iter().map(|&p| Vertex::new(p, RED)).collect()
    }

    #[test]
    fn test_rect_outline_has_four_edges() {
        let rect = RectShape {
            first: [-0.5, -0.5],
            last: [0.5, 0.5],
            color: RED,
        };
        let verts = rect.outline_vertices();
        assert_eq!(verts.len(), 8);
        // Every vertex carries the shape color
        assert!(verts.iter().all(|v| v.color == RED));
        // The outline closes: last vertex returns to the first
        assert_eq!(verts[7].position, verts[0].position);
        // All four corners appear
        for corner in [[-0.5, -0.5], [0.5, -0.5], [-0.5, 0.5], [0.5, 0.5]] {
            assert!(verts.iter().any(|v| v.position == corner));
        }
    }

    #[test]
    fn test_stroke_flattens_to_segment_pairs() {
        let mut doc = Document::new();
        doc.commit_stroke(stroke_of(&[[0.0, 0.0], [0.1, 0.1], [0.2, 0.0]]));

        let verts = doc.stroke_vertices(None);
        // 3 points -> 2 segments -> 4 line-list vertices
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[1].position, verts[2].position);
    }

    #[test]
    fn test_live_stroke_is_appended() {
        let mut doc = Document::new();
        doc.commit_stroke(stroke_of(&[[0.0, 0.0], [0.1, 0.0]]));

        let live = stroke_of(&[[0.5, 0.5], [0.6, 0.6]]);
        let verts = doc.stroke_vertices(Some(&live));
        assert_eq!(verts.len(), 4);
        assert_eq!(verts[2].position, [0.5, 0.5]);
    }

    #[test]
    fn test_short_strokes_are_dropped() {
        let mut doc = Document::new();
        doc.commit_stroke(vec![]);
        doc.commit_stroke(stroke_of(&[[0.0, 0.0]]));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_empty_text_is_dropped() {
        let mut doc = Document::new();
        doc.commit_text(TextEntry::new([10.0, 10.0], [0, 0, 0, 255], 16.0));
        assert!(doc.is_empty());
    }

    #[test]
    fn test_undo_redo_mixed_actions() {
        let mut doc = Document::new();
        doc.commit_stroke(stroke_of(&[[0.0, 0.0], [0.1, 0.0]]));
        doc.commit_shape(RectShape {
            first: [0.0, 0.0],
            last: [0.5, 0.5],
            color: RED,
        });
        let mut entry = TextEntry::new([10.0, 10.0], [255, 0, 0, 255], 16.0);
        entry.content.push_str("hi");
        doc.commit_text(entry);
        assert_eq!(doc.len(), 3);

        // Undo removes in reverse order
        assert!(doc.undo());
        assert_eq!(doc.texts().count(), 0);
        assert!(doc.undo());
        assert!(doc.shape_vertices(None).is_empty());
        assert!(doc.undo());
        assert!(doc.is_empty());
        assert!(!doc.undo());

        // Redo restores in original order
        assert!(doc.redo());
        assert!(!doc.stroke_vertices(None).is_empty());
        assert!(doc.redo());
        assert!(doc.redo());
        assert_eq!(doc.texts().count(), 1);
        assert!(!doc.redo());
    }

    #[test]
    fn test_new_action_clears_redo_stack() {
        let mut doc = Document::new();
        doc.commit_stroke(stroke_of(&[[0.0, 0.0], [0.1, 0.0]]));
        doc.undo();
        doc.commit_stroke(stroke_of(&[[0.2, 0.2], [0.3, 0.3]]));
        assert!(!doc.redo());
    }

    #[test]
    fn test_commit_text_clears_pending() {
        let mut doc = Document::new();
        let mut entry = TextEntry::new([0.0, 0.0], [0, 0, 0, 255], 16.0);
        entry.content.push_str("note");
        doc.commit_text(entry);
        assert!(!doc.texts().next().unwrap().pending);
    }

    #[test]
    fn test_hit_test_text_uses_bounds() {
        let mut doc = Document::new();
        let mut entry = TextEntry::new([100.0, 50.0], [0, 0, 0, 255], 16.0);
        entry.content.push_str("hello");
        doc.commit_text(entry);

        // Bounds start empty; simulate layout writing them back
        doc.text_mut(0).unwrap().bounds = TextBounds {
            x: 100.0,
            y: 50.0,
            width: 60.0,
            height: 20.0,
        };

        assert_eq!(doc.hit_test_text(120.0, 60.0), Some(0));
        assert_eq!(doc.hit_test_text(10.0, 10.0), None);
    }
}
