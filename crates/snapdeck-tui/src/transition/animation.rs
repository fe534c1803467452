//! L3 Molecular Layer: section slide controller
//!
//! Receives committed transitions from the snap controller and turns them
//! into per-frame slide geometry for the stage widget.

use std::time::{Duration, Instant};

use snapdeck_core::snap::{Direction, SectionPresenter, SlideOffsets, Transition};
use snapdeck_core::TransitionConfig;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete, progress};

/// Active slide animation state
#[derive(Debug, Clone)]
struct ActiveSlide {
    start: Instant,
    from: usize,
    to: usize,
    direction: Direction,
    duration: Duration,
    easing: EasingType,
}

/// What the stage draws on one frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SlideFrame {
    /// A single section at rest
    Still(usize),
    /// Two sections mid-slide, offsets in viewport heights
    Sliding {
        outgoing: usize,
        incoming: usize,
        outgoing_offset: f32,
        incoming_offset: f32,
    },
}

/// Terminal presenter for committed section transitions.
///
/// Call `update()` every frame to advance the slide and get the geometry to draw.
#[derive(Debug, Clone)]
pub struct SectionAnimator {
    config: TransitionConfig,
    reduced_motion: bool,
    slide: Option<ActiveSlide>,
    /// Section shown once any running slide has settled
    target: usize,
}

impl SectionAnimator {
    pub fn new(config: TransitionConfig, reduced_motion: bool) -> Self {
        Self {
            config,
            reduced_motion,
            slide: None,
            target: 0,
        }
    }

    pub fn reduced_motion(&self) -> bool {
        self.reduced_motion
    }

    /// Whether transitions are animated at all
    pub fn is_smooth(&self) -> bool {
        !self.reduced_motion && self.config.duration_ms > 0
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.slide.is_some()
    }

    pub fn target(&self) -> usize {
        self.target
    }

    /// Start presenting `transition` as of `now`
    pub fn present_at(&mut self, transition: &Transition, now: Instant) {
        // an interrupted slide continues from wherever it was heading
        let from = self.target;
        self.target = transition.to;

        if !self.is_smooth() || from == transition.to {
            self.slide = None;
            return;
        }

        self.slide = Some(ActiveSlide {
            start: now,
            from,
            to: transition.to,
            direction: transition.direction,
            duration: Duration::from_millis(self.config.duration_ms),
            easing: self.config.easing,
        });
    }

    /// Advance the slide and return the frame to draw
    pub fn update(&mut self, now: Instant) -> SlideFrame {
        let Some(slide) = &self.slide else {
            return SlideFrame::Still(self.target);
        };

        if is_complete(slide.start, slide.duration, now) {
            self.slide = None;
            return SlideFrame::Still(self.target);
        }

        let eased = slide.easing.apply(progress(slide.start, slide.duration, now)) as f32;
        let (outgoing_offset, incoming_offset) =
            SlideOffsets::for_direction(slide.direction).at(eased);
        SlideFrame::Sliding {
            outgoing: slide.from,
            incoming: slide.to,
            outgoing_offset,
            incoming_offset,
        }
    }
}

impl SectionPresenter for SectionAnimator {
    fn present(&mut self, transition: &Transition) {
        self.present_at(transition, Instant::now());
    }
}
