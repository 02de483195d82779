//! Canvas document functional tests
//!
//! Drives whole drawing sessions through the document API: strokes, shapes,
//! text, undo/redo, and the vertex flattening the renderers consume.

use slate_core::{screen_to_clip, Document, RectShape, TextEntry, Vertex};

const BLACK: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
const RED: [f32; 4] = [1.0, 0.0, 0.0, 1.0];

fn stroke(points: &[[f32; 2]], color: [f32; 4]) -> Vec<Vertex> {
    points.iter().map(|p| Vertex::new(*p, color)).collect()
}

#[test]
fn test_drawing_session_accumulates_vertices() {
    let mut doc = Document::new();

    doc.commit_stroke(stroke(&[[0.0, 0.0], [0.1, 0.1], [0.2, 0.1]], BLACK));
    doc.commit_stroke(stroke(&[[-0.5, 0.0], [-0.4, 0.0]], RED));

    // 3 points -> 2 segments, 2 points -> 1 segment, 2 vertices each
    let vertices = doc.stroke_vertices(None);
    assert_eq!(vertices.len(), 6);
    assert_eq!(vertices[0].position, [0.0, 0.0]);
    assert_eq!(vertices[4].color, RED);
}

#[test]
fn test_live_stroke_is_appended_without_committing() {
    let mut doc = Document::new();
    doc.commit_stroke(stroke(&[[0.0, 0.0], [0.1, 0.0]], BLACK));

    let live = stroke(&[[0.5, 0.5], [0.6, 0.5], [0.7, 0.5]], RED);
    assert_eq!(doc.stroke_vertices(Some(&live)).len(), 2 + 4);
    // Nothing was committed
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_degenerate_strokes_are_dropped() {
    let mut doc = Document::new();
    doc.commit_stroke(vec![]);
    doc.commit_stroke(stroke(&[[0.3, 0.3]], BLACK));
    assert!(doc.is_empty());
}

#[test]
fn test_shape_outline_has_four_edges() {
    let mut doc = Document::new();
    doc.commit_shape(RectShape {
        first: [-0.5, 0.5],
        last: [0.5, -0.5],
        color: RED,
    });

    let vertices = doc.shape_vertices(None);
    assert_eq!(vertices.len(), 8);
    for v in &vertices {
        assert_eq!(v.color, RED);
        assert!(v.position[0] == -0.5 || v.position[0] == 0.5);
        assert!(v.position[1] == -0.5 || v.position[1] == 0.5);
    }
}

#[test]
fn test_undo_redo_across_action_kinds() {
    let mut doc = Document::new();

    doc.commit_stroke(stroke(&[[0.0, 0.0], [0.1, 0.0]], BLACK));
    doc.commit_shape(RectShape {
        first: [0.0, 0.0],
        last: [0.2, 0.2],
        color: BLACK,
    });
    let mut entry = TextEntry::new([50.0, 50.0], [255, 0, 0, 255], 16.0);
    entry.content = "note".to_string();
    doc.commit_text(entry);
    assert_eq!(doc.len(), 3);

    // Undo removes newest-first
    assert!(doc.undo());
    assert_eq!(doc.texts().count(), 0);
    assert!(doc.undo());
    assert!(doc.shape_vertices(None).is_empty());
    assert!(!doc.stroke_vertices(None).is_empty());

    // Redo restores in order
    assert!(doc.redo());
    assert_eq!(doc.shape_vertices(None).len(), 8);
    assert!(doc.redo());
    assert_eq!(doc.texts().next().unwrap().content, "note");
    assert!(!doc.redo());
}

#[test]
fn test_new_action_clears_redo_history() {
    let mut doc = Document::new();
    doc.commit_stroke(stroke(&[[0.0, 0.0], [0.1, 0.0]], BLACK));
    doc.undo();

    doc.commit_shape(RectShape {
        first: [0.0, 0.0],
        last: [0.1, 0.1],
        color: BLACK,
    });
    assert!(!doc.redo());
    assert_eq!(doc.len(), 1);
}

#[test]
fn test_clear_empties_everything() {
    let mut doc = Document::new();
    doc.commit_stroke(stroke(&[[0.0, 0.0], [0.1, 0.0]], BLACK));
    doc.undo();
    doc.commit_stroke(stroke(&[[0.2, 0.2], [0.3, 0.2]], BLACK));

    doc.clear();
    assert!(doc.is_empty());
    assert!(!doc.undo());
    assert!(!doc.redo());
}

#[test]
fn test_text_hit_testing_uses_layout_bounds() {
    let mut doc = Document::new();
    let mut entry = TextEntry::new([100.0, 200.0], [0, 0, 0, 255], 16.0);
    entry.content = "hello".to_string();
    doc.commit_text(entry);

    // Bounds are written back by the text pass after layout; simulate that
    doc.text_mut(0).unwrap().bounds = slate_core::TextBounds {
        x: 100.0,
        y: 200.0,
        width: 60.0,
        height: 20.0,
    };

    assert_eq!(doc.hit_test_text(130.0, 210.0), Some(0));
    assert_eq!(doc.hit_test_text(130.0, 250.0), None);
    assert_eq!(doc.hit_test_text(0.0, 0.0), None);
}

#[test]
fn test_screen_to_clip_matches_vertex_contract() {
    // A stroke drawn across an 800x600 window lands in clip space
    let mut doc = Document::new();
    let points: Vec<Vertex> = [(0.0, 0.0), (400.0, 300.0), (800.0, 600.0)]
        .iter()
        .map(|(x, y)| Vertex::new(screen_to_clip(*x, *y, 800.0, 600.0), BLACK))
        .collect();
    doc.commit_stroke(points);

    let vertices = doc.stroke_vertices(None);
    assert_eq!(vertices[0].position, [-1.0, 1.0]);
    assert_eq!(vertices[1].position, [0.0, 0.0]);
    assert_eq!(vertices[3].position, [1.0, -1.0]);
}
