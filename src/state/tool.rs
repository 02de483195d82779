//! Drawing tool state
//!
//! Tracks the in-progress stroke or rectangle drag between mouse press and
//! release. Positions are in clip space, matching what the vertex pipelines
//! consume.

use slate_core::{RectShape, Vertex};

/// In-progress drawing gesture
#[derive(Debug, Default)]
pub struct ToolState {
    /// Points of the live freehand stroke, in press order
    pub active_stroke: Vec<Vertex>,
    rect_anchor: Option<[f32; 2]>,
    rect_cursor: Option<[f32; 2]>,
}

impl ToolState {
    /// Start a freehand stroke at the given clip-space point
    pub fn begin_stroke(&mut self, point: [f32; 2], color: [f32; 4]) {
        self.active_stroke.clear();
        self.active_stroke.push(Vertex::new(point, color));
    }

    /// Extend the live stroke
    pub fn push_point(&mut self, point: [f32; 2], color: [f32; 4]) {
        self.active_stroke.push(Vertex::new(point, color));
    }

    /// Start a rectangle drag anchored at the given clip-space point
    pub fn begin_rect(&mut self, point: [f32; 2]) {
        self.rect_anchor = Some(point);
        self.rect_cursor = Some(point);
    }

    /// Move the free corner of the rectangle drag
    pub fn drag_rect(&mut self, point: [f32; 2]) {
        if self.rect_anchor.is_some() {
            self.rect_cursor = Some(point);
        }
    }

    pub fn is_rect_drag(&self) -> bool {
        self.rect_anchor.is_some()
    }

    /// Current rectangle under drag, if any
    pub fn preview_shape(&self, color: [f32; 4]) -> Option<RectShape> {
        match (self.rect_anchor, self.rect_cursor) {
            (Some(first), Some(last)) => Some(RectShape { first, last, color }),
            _ => None,
        }
    }

    /// Finish the rectangle drag, returning the final shape
    pub fn take_shape(&mut self, color: [f32; 4]) -> Option<RectShape> {
        let shape = self.preview_shape(color);
        self.rect_anchor = None;
        self.rect_cursor = None;
        shape
    }

    /// Finish the freehand stroke, returning its points
    pub fn take_stroke(&mut self) -> Vec<Vertex> {
        std::mem::take(&mut self.active_stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_stroke_accumulates_points() {
        let mut tool = ToolState::default();
        tool.begin_stroke([0.0, 0.0], RED);
        tool.push_point([0.1, 0.1], RED);
        tool.push_point([0.2, 0.0], RED);
        assert_eq!(tool.active_stroke.len(), 3);

        let points = tool.take_stroke();
        assert_eq!(points.len(), 3);
        assert!(tool.active_stroke.is_empty());
    }

    #[test]
    fn test_begin_stroke_discards_previous() {
        let mut tool = ToolState::default();
        tool.begin_stroke([0.0, 0.0], RED);
        tool.push_point([0.5, 0.5], RED);
        tool.begin_stroke([-0.5, -0.5], RED);
        assert_eq!(tool.active_stroke.len(), 1);
        assert_eq!(tool.active_stroke[0].position, [-0.5, -0.5]);
    }

    #[test]
    fn test_rect_drag_tracks_cursor() {
        let mut tool = ToolState::default();
        assert!(tool.preview_shape(RED).is_none());

        tool.begin_rect([-0.5, 0.5]);
        tool.drag_rect([0.5, -0.5]);
        let shape = tool.preview_shape(RED).unwrap();
        assert_eq!(shape.first, [-0.5, 0.5]);
        assert_eq!(shape.last, [0.5, -0.5]);

        let taken = tool.take_shape(RED).unwrap();
        assert_eq!(taken.last, [0.5, -0.5]);
        assert!(tool.take_shape(RED).is_none());
    }

    #[test]
    fn test_drag_without_anchor_is_ignored() {
        let mut tool = ToolState::default();
        tool.drag_rect([0.3, 0.3]);
        assert!(tool.preview_shape(RED).is_none());
    }
}
