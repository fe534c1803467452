use std::time::{Duration, Instant};

/// Timed lock held while a section transition is on screen.
///
/// Only one expiry deadline exists at a time: re-engaging replaces it, so an
/// earlier, shorter cooldown can never release a later one.
#[derive(Debug, Clone, Default)]
pub struct TransitionCooldown {
    deadline: Option<Instant>,
}

impl TransitionCooldown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lock for `duration` starting at `now`, cancelling any pending expiry
    pub fn engage(&mut self, now: Instant, duration: Duration) {
        self.deadline = Some(now + duration);
    }

    #[inline]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now < deadline)
    }

    /// Fire the expiry if its deadline has passed; returns true exactly once per engage
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    /// Time left on the lock
    pub fn remaining(&self, now: Instant) -> Duration {
        self.deadline
            .map(|deadline| deadline.saturating_duration_since(now))
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GESTURE: Duration = Duration::from_millis(900);
    const JUMP: Duration = Duration::from_millis(1400);

    #[test]
    fn test_unlocked_by_default() {
        let cooldown = TransitionCooldown::new();
        let now = Instant::now();
        assert!(!cooldown.is_locked(now));
        assert_eq!(cooldown.remaining(now), Duration::ZERO);
    }

    #[test]
    fn test_lock_expires_after_duration() {
        let mut cooldown = TransitionCooldown::new();
        let t0 = Instant::now();
        cooldown.engage(t0, GESTURE);

        assert!(cooldown.is_locked(t0));
        assert!(cooldown.is_locked(t0 + Duration::from_millis(899)));
        assert!(!cooldown.poll(t0 + Duration::from_millis(899)));
        assert!(!cooldown.is_locked(t0 + GESTURE));
        assert!(cooldown.poll(t0 + GESTURE));
        assert!(!cooldown.poll(t0 + GESTURE));
    }

    #[test]
    fn test_reengage_cancels_previous_expiry() {
        let mut cooldown = TransitionCooldown::new();
        let t0 = Instant::now();
        cooldown.engage(t0, GESTURE);
        cooldown.engage(t0 + Duration::from_millis(800), JUMP);

        // the first deadline (t0 + 900ms) must not release the lock
        let after_first = t0 + Duration::from_millis(1000);
        assert!(!cooldown.poll(after_first));
        assert!(cooldown.is_locked(after_first));
        assert_eq!(cooldown.remaining(after_first), Duration::from_millis(1200));

        assert!(cooldown.poll(t0 + Duration::from_millis(2200)));
    }
}
