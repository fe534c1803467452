//! Boundary between the controller and whatever draws the sections.

use super::{Direction, Transition};

/// Receives every committed transition.
///
/// Presentation is fire-and-forget: the controller never waits for the
/// animation and relies on its own cooldown to keep transitions apart.
pub trait SectionPresenter {
    fn present(&mut self, transition: &Transition);
}

/// Slide geometry for a direction, as fractions of the viewport height.
///
/// Positive offsets are below the viewport, negative ones above it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlideOffsets {
    /// Where the incoming section starts
    pub enter_offset: f32,
    /// Where the outgoing section ends up
    pub exit_offset: f32,
}

impl SlideOffsets {
    pub fn for_direction(direction: Direction) -> Self {
        match direction {
            // moving forward: the next section rises from below
            Direction::Down => Self {
                enter_offset: 1.0,
                exit_offset: -1.0,
            },
            Direction::Up => Self {
                enter_offset: -1.0,
                exit_offset: 1.0,
            },
        }
    }

    /// Offsets of (outgoing, incoming) after `progress` in [0, 1]
    pub fn at(&self, progress: f32) -> (f32, f32) {
        let t = progress.clamp(0.0, 1.0);
        (self.exit_offset * t, self.enter_offset * (1.0 - t))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_offsets_are_opposite() {
        for direction in [Direction::Up, Direction::Down] {
            let offsets = SlideOffsets::for_direction(direction);
            assert_eq!(offsets.enter_offset, -offsets.exit_offset);
        }
        assert_eq!(SlideOffsets::for_direction(Direction::Down).enter_offset, 1.0);
    }

    #[test]
    fn test_offsets_interpolate() {
        let offsets = SlideOffsets::for_direction(Direction::Down);
        assert_eq!(offsets.at(0.0), (0.0, 1.0));
        assert_eq!(offsets.at(1.0), (-1.0, 0.0));
        assert_eq!(offsets.at(0.5), (-0.5, 0.5));
        assert_eq!(offsets.at(7.0), (-1.0, 0.0));
    }
}
