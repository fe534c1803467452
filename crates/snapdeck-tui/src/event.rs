use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    /// Idle tick rate plus a faster frame interval used while a slide or
    /// pending gesture needs per-frame flushing
    pub fn with_animation_fps(tick_rate_ms: u64, animation_fps: u32) -> Self {
        let animation_tick = if animation_fps == 0 {
            Duration::from_millis(16)
        } else {
            Duration::from_millis((1000 / animation_fps as u64).max(1))
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms.max(1)),
            animation_tick,
        }
    }

    pub fn animation_tick(&self) -> Duration {
        self.animation_tick
    }

    /// Events for one frame at the idle tick rate
    pub fn next(&self) -> Result<Vec<AppEvent>> {
        self.next_frame(self.tick_rate)
    }

    /// Events for one frame at the animation frame rate
    pub fn next_animation(&self) -> Result<Vec<AppEvent>> {
        self.next_frame(self.animation_tick)
    }

    /// Wait up to `timeout` for input, then take everything already queued
    /// so the whole burst lands before the next flush.
    fn next_frame(&self, timeout: Duration) -> Result<Vec<AppEvent>> {
        if !event::poll(timeout)? {
            return Ok(vec![AppEvent::Tick]);
        }

        let mut events = Vec::new();
        loop {
            events.extend(translate(event::read()?));
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
        Ok(events)
    }
}

fn translate(event: Event) -> Option<AppEvent> {
    match event {
        // Only key presses; crossterm 0.27+ reports releases on some systems
        Event::Key(key) if key.kind == KeyEventKind::Press => Some(AppEvent::Key(key)),
        Event::Mouse(mouse) => Some(AppEvent::Mouse(mouse)),
        Event::Resize(w, h) => Some(AppEvent::Resize(w, h)),
        _ => None,
    }
}

/// Application events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Wheel, click or drag
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Nothing happened within the tick interval
    Tick,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEventState, KeyModifiers};

    #[test]
    fn test_animation_tick_from_fps() {
        assert_eq!(
            EventHandler::with_animation_fps(100, 50).animation_tick(),
            Duration::from_millis(20)
        );
        assert_eq!(
            EventHandler::with_animation_fps(100, 0).animation_tick(),
            Duration::from_millis(16)
        );
        assert_eq!(
            EventHandler::with_animation_fps(100, 5000).animation_tick(),
            Duration::from_millis(1)
        );
    }

    #[test]
    fn test_key_releases_are_dropped() {
        let key = |kind| KeyEvent {
            code: KeyCode::Char('j'),
            modifiers: KeyModifiers::NONE,
            kind,
            state: KeyEventState::NONE,
        };
        assert_eq!(
            translate(Event::Key(key(KeyEventKind::Press))),
            Some(AppEvent::Key(key(KeyEventKind::Press)))
        );
        assert_eq!(translate(Event::Key(key(KeyEventKind::Release))), None);
        assert_eq!(translate(Event::FocusGained), None);
        assert_eq!(translate(Event::Resize(80, 24)), Some(AppEvent::Resize(80, 24)));
    }
}
