//! Section-snap controller
//!
//! Turns noisy wheel, key and swipe input into discrete one-section steps
//! over a fixed, ordered list of sections.
//!
//! - `gesture` - per-frame coalescing and the commit threshold
//! - `index` - bounded current index and last direction
//! - `cooldown` - timed lock while a transition is on screen
//! - `presenter` - the rendering side's contract and slide geometry
//!
//! # Usage
//!
//! ```ignore
//! let mut snap = SectionSnapScroll::new(sections.len(), GestureConfig::default())?;
//!
//! // input handlers only queue deltas
//! snap.on_wheel(delta_y);
//!
//! // once per rendered frame
//! snap.poll(now);
//! if let Some(transition) = snap.flush(now) {
//!     presenter.present(&transition);
//! }
//! ```

pub mod cooldown;
pub mod gesture;
pub mod index;
pub mod presenter;

use std::time::{Duration, Instant};

use tracing::debug;

pub use cooldown::TransitionCooldown;
pub use gesture::{GestureAccumulator, JumpTarget, SnapKey};
pub use index::SectionIndexController;
pub use presenter::{SectionPresenter, SlideOffsets};

use crate::config::GestureConfig;
use crate::Result;

/// Lock after a gesture-driven step
pub const GESTURE_COOLDOWN_MS: u64 = 900;
/// Lock after an explicit jump; longer because it may cut into a running slide
pub const JUMP_COOLDOWN_MS: u64 = 1400;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Towards the first section
    Up,
    /// Towards the last section
    Down,
}

impl Direction {
    /// Direction of a gesture delta; zero has none
    pub fn from_delta(delta: f64) -> Option<Self> {
        if delta > 0.0 {
            Some(Direction::Down)
        } else if delta < 0.0 {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionKind {
    /// ±1 step from accumulated wheel, swipe or arrow input
    Step,
    /// Home/End or a navigation-dot click
    Jump,
}

impl TransitionKind {
    pub fn cooldown(self, config: &GestureConfig) -> Duration {
        match self {
            TransitionKind::Step => config.gesture_cooldown(),
            TransitionKind::Jump => config.jump_cooldown(),
        }
    }
}

/// A committed section change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub from: usize,
    pub to: usize,
    pub direction: Direction,
    pub kind: TransitionKind,
}

/// One controller instance per mounted section carousel
#[derive(Debug, Clone)]
pub struct SectionSnapScroll {
    gestures: GestureAccumulator,
    index: SectionIndexController,
    cooldown: TransitionCooldown,
}

impl SectionSnapScroll {
    pub fn new(section_count: usize, config: GestureConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            gestures: GestureAccumulator::new(config),
            index: SectionIndexController::new(section_count)?,
            cooldown: TransitionCooldown::new(),
        })
    }

    pub fn config(&self) -> &GestureConfig {
        self.gestures.config()
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.index.current_index()
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.index.direction()
    }

    pub fn section_count(&self) -> usize {
        self.index.section_count()
    }

    pub fn is_locked(&self, now: Instant) -> bool {
        self.cooldown.is_locked(now)
    }

    pub fn lock_remaining(&self, now: Instant) -> Duration {
        self.cooldown.remaining(now)
    }

    pub fn gestures(&self) -> &GestureAccumulator {
        &self.gestures
    }

    /// Whether the caller should keep driving frames at animation rate
    pub fn needs_frame(&self, now: Instant) -> bool {
        self.gestures.pending_delta() != 0.0 || self.cooldown.remaining(now) > Duration::ZERO
    }

    pub fn on_wheel(&mut self, delta_y: f64) {
        self.gestures.on_wheel(delta_y);
    }

    /// Arrow and page keys are queued; Home/End jump immediately
    pub fn on_key(&mut self, key: SnapKey, now: Instant) -> Option<Transition> {
        let target = self.gestures.on_key(key)?;
        let index = match target {
            JumpTarget::First => 0,
            JumpTarget::Last => self.index.last_index(),
        };
        self.jump_to(index, now)
    }

    pub fn on_touch_start(&mut self, y: f64) {
        self.gestures.on_touch_start(y);
    }

    pub fn on_touch_end(&mut self, y: f64) {
        self.gestures.on_touch_end(y);
    }

    /// Explicit navigation. Never blocked by the lock; it restarts it with the
    /// longer jump cooldown instead.
    pub fn jump_to(&mut self, index: usize, now: Instant) -> Option<Transition> {
        let transition = self.index.jump_to(index)?;
        self.commit(transition, now);
        Some(transition)
    }

    /// Fire the cooldown expiry if it is due
    pub fn poll(&mut self, now: Instant) -> bool {
        let expired = self.cooldown.poll(now);
        if expired {
            debug!(index = self.current_index(), "transition lock released");
        }
        expired
    }

    /// Per-frame step: coalesce queued input and commit at most one transition
    pub fn flush(&mut self, now: Instant) -> Option<Transition> {
        self.poll(now);
        let locked = self.cooldown.is_locked(now);
        let direction = self.gestures.flush(locked)?;
        let transition = self.index.attempt_transition(direction)?;
        self.commit(transition, now);
        Some(transition)
    }

    fn commit(&mut self, transition: Transition, now: Instant) {
        let cooldown = transition.kind.cooldown(self.gestures.config());
        self.cooldown.engage(now, cooldown);
        debug!(
            from = transition.from,
            to = transition.to,
            direction = ?transition.direction,
            kind = ?transition.kind,
            cooldown_ms = cooldown.as_millis() as u64,
            "section transition committed"
        );
    }
}
