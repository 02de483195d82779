//! Mouse input helpers

use std::time::{Duration, Instant};

/// Two right-clicks this close in time count as a double-click
pub const DOUBLE_CLICK_THRESHOLD: Duration = Duration::from_millis(500);
/// ...and this close in pixels
pub const DOUBLE_CLICK_DISTANCE: f32 = 5.0;

/// Whether a click at `position` forms a double-click with the previous one
pub fn is_double_click(
    last: Option<(Instant, (f32, f32))>,
    now: Instant,
    position: (f32, f32),
) -> bool {
    let Some((then, prev)) = last else {
        return false;
    };
    if now.duration_since(then) > DOUBLE_CLICK_THRESHOLD {
        return false;
    }
    let dx = position.0 - prev.0;
    let dy = position.1 - prev.1;
    (dx * dx + dy * dy).sqrt() <= DOUBLE_CLICK_DISTANCE
}
