//! Wheel, key and swipe input coalesced into a single per-frame delta.
//!
//! Events only ever touch the pending frame delta. `flush` (driven once per
//! rendered frame) folds it into the accumulator and runs the threshold test,
//! so a burst of events inside one frame can commit at most one step.

use tracing::trace;

use super::Direction;
use crate::config::GestureConfig;

/// Accumulated magnitude that commits a step
pub const COMMIT_THRESHOLD: f64 = 40.0;
/// Wheel deltas below this magnitude come from trackpads and get boosted
pub const SMALL_MOTION_CUTOFF: f64 = 12.0;
pub const SMALL_MOTION_BOOST: f64 = 3.0;
/// Swipes must travel strictly further than this
pub const SWIPE_MIN_DISTANCE: f64 = 40.0;
pub const SWIPE_AMPLIFICATION: f64 = 2.5;
/// Synthetic delta for arrow and page keys
pub const KEY_STEP: f64 = 100.0;

/// Keys understood by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapKey {
    ArrowUp,
    ArrowDown,
    PageUp,
    PageDown,
    Home,
    End,
}

/// Explicit jump requested by Home/End
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpTarget {
    First,
    Last,
}

#[derive(Debug, Clone)]
pub struct GestureAccumulator {
    config: GestureConfig,
    /// Deltas queued since the last flush
    pending: f64,
    /// Deltas carried across flushes until the threshold is crossed
    accumulated: f64,
    /// Pointer position of an in-progress swipe
    touch_start: Option<f64>,
}

impl Default for GestureAccumulator {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}

impl GestureAccumulator {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            pending: 0.0,
            accumulated: 0.0,
            touch_start: None,
        }
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Queue a wheel delta (positive = towards the next section)
    pub fn on_wheel(&mut self, delta_y: f64) {
        if !delta_y.is_finite() {
            return;
        }
        let contribution = if delta_y.abs() < self.config.small_motion_cutoff {
            delta_y * self.config.small_motion_boost
        } else {
            delta_y
        };
        self.pending += contribution;
    }

    /// Queue the synthetic delta for a key, or hand back a jump for Home/End
    pub fn on_key(&mut self, key: SnapKey) -> Option<JumpTarget> {
        match key {
            SnapKey::ArrowDown | SnapKey::PageDown => {
                self.pending += self.config.key_step;
                None
            }
            SnapKey::ArrowUp | SnapKey::PageUp => {
                self.pending -= self.config.key_step;
                None
            }
            SnapKey::Home => Some(JumpTarget::First),
            SnapKey::End => Some(JumpTarget::Last),
        }
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.touch_start = Some(y);
    }

    /// Finish a swipe; short swipes are discarded entirely
    pub fn on_touch_end(&mut self, y: f64) {
        let Some(start) = self.touch_start.take() else {
            return;
        };
        let delta = start - y;
        if delta.abs() > self.config.swipe_min_distance {
            self.pending += delta * self.config.swipe_amplification;
        } else {
            trace!(delta, "swipe below minimum distance, discarded");
        }
    }

    /// Move the pending frame delta into the accumulator and run the threshold test.
    ///
    /// While `locked`, input keeps accumulating in full but nothing commits. Once
    /// a test fires the accumulator is cleared, whether or not the caller
    /// manages to apply the step.
    pub fn flush(&mut self, locked: bool) -> Option<Direction> {
        self.accumulated += std::mem::take(&mut self.pending);
        if locked {
            return None;
        }

        if self.accumulated.abs() >= self.config.commit_threshold {
            let direction = Direction::from_delta(self.accumulated);
            self.accumulated = 0.0;
            direction
        } else {
            None
        }
    }

    pub fn pending_delta(&self) -> f64 {
        self.pending
    }

    pub fn accumulated(&self) -> f64 {
        self.accumulated
    }

    /// Whether the next flush has anything to look at
    pub fn needs_flush(&self) -> bool {
        self.pending != 0.0 || self.accumulated != 0.0
    }
}
