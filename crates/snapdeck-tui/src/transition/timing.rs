//! L4 Atomic Layer: animation progress and row arithmetic

use std::time::{Duration, Instant};

/// Progress (0.0 to 1.0) of an animation started at `start`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    (elapsed.as_secs_f64() / duration.as_secs_f64()).clamp(0.0, 1.0)
}

#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Visible part of a full-height section displaced by `offset` viewport heights.
///
/// Returns `(top, height, scroll)`: the row inside the viewport where the
/// section starts being drawn, how many rows are visible, and how many of the
/// section's own rows are scrolled off the top. `None` when fully off-screen.
pub fn visible_band(offset: f32, viewport_height: u16) -> Option<(u16, u16, u16)> {
    let h = i32::from(viewport_height);
    let shift = (offset * h as f32).round() as i32;
    let start = shift.max(0);
    let end = (shift + h).min(h);
    if end <= start {
        return None;
    }
    Some((start as u16, (end - start) as u16, (start - shift) as u16))
}
