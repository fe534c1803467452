use tracing::debug;

use super::{Direction, Transition, TransitionKind};
use crate::{Error, Result};

/// Bounded section index with the direction of the last committed move
#[derive(Debug, Clone)]
pub struct SectionIndexController {
    section_count: usize,
    current: usize,
    direction: Direction,
}

impl SectionIndexController {
    /// Start at the first of `section_count` sections
    pub fn new(section_count: usize) -> Result<Self> {
        if section_count == 0 {
            return Err(Error::Content(
                "at least one section is required".to_string(),
            ));
        }
        Ok(Self {
            section_count,
            current: 0,
            direction: Direction::Down,
        })
    }

    pub fn section_count(&self) -> usize {
        self.section_count
    }

    #[inline]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_index(&self) -> usize {
        self.section_count - 1
    }

    /// Step one section; rejected without any state change at either end
    pub fn attempt_transition(&mut self, direction: Direction) -> Option<Transition> {
        let from = self.current;
        let to = match direction {
            Direction::Down if from < self.last_index() => from + 1,
            Direction::Up if from > 0 => from - 1,
            _ => {
                debug!(index = from, ?direction, "step rejected at boundary");
                return None;
            }
        };

        self.current = to;
        self.direction = direction;
        Some(Transition {
            from,
            to,
            direction,
            kind: TransitionKind::Step,
        })
    }

    /// Move straight to `index` (clamped to the last section).
    ///
    /// Jumping to the section already shown is a no-op.
    pub fn jump_to(&mut self, index: usize) -> Option<Transition> {
        let from = self.current;
        let to = index.min(self.last_index());
        if to == from {
            return None;
        }

        let direction = if to > from {
            Direction::Down
        } else {
            Direction::Up
        };
        self.current = to;
        self.direction = direction;
        Some(Transition {
            from,
            to,
            direction,
            kind: TransitionKind::Jump,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_section_list_rejected() {
        assert!(matches!(
            SectionIndexController::new(0),
            Err(Error::Content(_))
        ));
    }

    #[test]
    fn test_starts_at_first_section() {
        let index = SectionIndexController::new(5).unwrap();
        assert_eq!(index.current_index(), 0);
        assert_eq!(index.section_count(), 5);
    }

    #[test]
    fn test_step_down_and_up() {
        let mut index = SectionIndexController::new(3).unwrap();
        let t = index.attempt_transition(Direction::Down).unwrap();
        assert_eq!((t.from, t.to, t.direction), (0, 1, Direction::Down));
        assert_eq!(t.kind, TransitionKind::Step);

        let t = index.attempt_transition(Direction::Up).unwrap();
        assert_eq!((t.from, t.to, t.direction), (1, 0, Direction::Up));
        assert_eq!(index.direction(), Direction::Up);
    }

    #[test]
    fn test_rejection_at_last_section_is_idempotent() {
        let mut index = SectionIndexController::new(2).unwrap();
        index.attempt_transition(Direction::Down).unwrap();
        for _ in 0..10 {
            assert!(index.attempt_transition(Direction::Down).is_none());
            assert_eq!(index.current_index(), 1);
            assert_eq!(index.direction(), Direction::Down);
        }
    }

    #[test]
    fn test_rejection_at_first_section() {
        let mut index = SectionIndexController::new(4).unwrap();
        assert!(index.attempt_transition(Direction::Up).is_none());
        assert_eq!(index.current_index(), 0);
        // a rejected move does not record its direction
        assert_eq!(index.direction(), Direction::Down);
    }

    #[test]
    fn test_single_section_never_moves() {
        let mut index = SectionIndexController::new(1).unwrap();
        assert!(index.attempt_transition(Direction::Down).is_none());
        assert!(index.attempt_transition(Direction::Up).is_none());
        assert!(index.jump_to(3).is_none());
    }

    #[test]
    fn test_jump_sets_direction_from_target() {
        let mut index = SectionIndexController::new(6).unwrap();
        let t = index.jump_to(4).unwrap();
        assert_eq!((t.to, t.direction, t.kind), (4, Direction::Down, TransitionKind::Jump));

        let t = index.jump_to(1).unwrap();
        assert_eq!((t.from, t.to, t.direction), (4, 1, Direction::Up));
    }

    #[test]
    fn test_jump_is_clamped() {
        let mut index = SectionIndexController::new(3).unwrap();
        let t = index.jump_to(99).unwrap();
        assert_eq!(t.to, 2);
        assert_eq!(index.current_index(), 2);
    }

    #[test]
    fn test_jump_to_current_is_noop() {
        let mut index = SectionIndexController::new(3).unwrap();
        assert!(index.jump_to(0).is_none());
    }

    #[test]
    fn test_bounds_hold_for_mixed_sequences() {
        let mut index = SectionIndexController::new(4).unwrap();
        let moves = [
            Direction::Down, Direction::Down, Direction::Down, Direction::Down,
            Direction::Down, Direction::Up, Direction::Up, Direction::Up,
            Direction::Up, Direction::Up, Direction::Down,
        ];
        for (step, direction) in moves.into_iter().enumerate() {
            index.attempt_transition(direction);
            if step % 3 == 0 {
                index.jump_to(step * 2);
            }
            assert!(index.current_index() < index.section_count());
        }
    }
}
