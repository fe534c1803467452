use std::sync::Arc;
use std::time::Instant;

use anyhow::Result;
use ratatui::layout::{Position, Rect};
use snapdeck_core::snap::{SectionSnapScroll, Transition};
use snapdeck_core::{AppConfig, Section, SiteContent};
use tracing::{debug, info, warn};

use crate::event::AppEvent;
use crate::input::{handle_key_event, handle_mouse_event, Action, PointerAction};
use crate::keymap::Keymap;
use crate::theme::Theme;
use crate::transition::{SectionAnimator, SlideFrame};

/// Application mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Browsing sections
    Normal,
    /// Key reference overlay
    Help,
}

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    pub site: SiteContent,
    /// Gesture-to-section controller
    pub snap: SectionSnapScroll,
    /// Slide animation for committed transitions
    pub animator: SectionAnimator,
    /// Geometry computed by the last `advance_frame`
    pub slide: SlideFrame,
    pub mode: Mode,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    /// Pending key for multi-key sequences (e.g., 'gg')
    pub pending_key: Option<char>,
    /// Navigation dot hit areas from the last render, with their section index
    pub nav_hitboxes: Vec<(Rect, usize)>,
    /// Idle ticks since start, drives the starfield twinkle
    pub tick_count: u64,
    /// Where the left button went down, for swipe and click resolution
    pointer_down: Option<(u16, u16)>,
}

impl App {
    pub fn new(config: Arc<AppConfig>, site: SiteContent, theme: Theme) -> Result<Self> {
        site.validate()?;
        let snap = SectionSnapScroll::new(site.len(), config.gesture.clone())?;
        let animator = SectionAnimator::new(config.ui.transition.clone(), config.ui.reduced_motion);

        Ok(Self {
            config,
            theme,
            site,
            snap,
            animator,
            slide: SlideFrame::Still(0),
            mode: Mode::Normal,
            should_quit: false,
            status_message: None,
            pending_key: None,
            nav_hitboxes: Vec::new(),
            tick_count: 0,
            pointer_down: None,
        })
    }

    /// The section the controller is on (the slide target while animating)
    pub fn current_section(&self) -> Option<&Section> {
        self.site.get(self.snap.current_index())
    }

    pub fn section(&self, index: usize) -> Option<&Section> {
        self.site.get(index)
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn clear_pending_key(&mut self) {
        self.pending_key = None;
    }

    /// Apply a key action
    pub fn apply_action(&mut self, action: Action, now: Instant) {
        if action != Action::PendingG {
            self.clear_pending_key();
        }

        match action {
            Action::Quit => self.should_quit = true,
            Action::Snap(key) => {
                self.clear_status();
                if let Some(transition) = self.snap.on_key(key, now) {
                    self.present(&transition, now);
                }
            }
            Action::JumpTo(index) => {
                self.clear_status();
                self.jump_to(index, now);
            }
            Action::PendingG => self.pending_key = Some('g'),
            Action::OpenLink => self.open_current_link(),
            Action::ToggleHelp => {
                self.mode = match self.mode {
                    Mode::Help => Mode::Normal,
                    Mode::Normal => Mode::Help,
                };
            }
            Action::ExitMode => {
                self.mode = Mode::Normal;
                self.clear_status();
            }
            Action::None => {}
        }
    }

    /// Apply wheel, click and drag input
    pub fn handle_pointer(&mut self, pointer: PointerAction, now: Instant) {
        let notch = self.config.ui.wheel_notch_delta;
        let row_units = self.config.ui.drag_row_units;

        match pointer {
            PointerAction::WheelDown => self.snap.on_wheel(notch),
            PointerAction::WheelUp => self.snap.on_wheel(-notch),
            PointerAction::Press { column, row } => {
                self.pointer_down = Some((column, row));
                self.snap.on_touch_start(f64::from(row) * row_units);
            }
            PointerAction::Release { column, row } => {
                self.snap.on_touch_end(f64::from(row) * row_units);

                let pressed = self.pointer_down.take();
                let clicked = pressed
                    .and_then(|(c, r)| self.nav_target_at(c, r))
                    .filter(|&index| self.nav_target_at(column, row) == Some(index));
                if let Some(index) = clicked {
                    self.jump_to(index, now);
                }
            }
        }
    }

    /// Apply one frame's worth of terminal events.
    ///
    /// Nothing here flushes the controller, so the whole batch is coalesced
    /// by the next `advance_frame`.
    pub fn handle_events(
        &mut self,
        events: impl IntoIterator<Item = AppEvent>,
        keymap: &Keymap,
        now: Instant,
    ) {
        for event in events {
            match event {
                AppEvent::Key(key) => {
                    let action = handle_key_event(key, self, keymap);
                    self.apply_action(action, now);
                }
                AppEvent::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse) {
                        self.handle_pointer(pointer, now);
                    }
                }
                AppEvent::Resize(_, _) => {}
                AppEvent::Tick => self.tick(),
            }
        }
    }

    /// Per-frame step: fold queued input into at most one transition and
    /// advance the slide animation
    pub fn advance_frame(&mut self, now: Instant) {
        if let Some(transition) = self.snap.flush(now) {
            self.present(&transition, now);
        }
        self.slide = self.animator.update(now);
    }

    /// Whether the main loop should poll at animation rate
    pub fn needs_fast_update(&self, now: Instant) -> bool {
        self.animator.is_animating() || self.snap.needs_frame(now)
    }

    pub fn tick(&mut self) {
        self.tick_count = self.tick_count.wrapping_add(1);
    }

    /// Section under a navigation dot at the given cell
    pub fn nav_target_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.nav_hitboxes
            .iter()
            .find(|(rect, _)| rect.contains(position))
            .map(|(_, index)| *index)
    }

    fn jump_to(&mut self, index: usize, now: Instant) {
        if let Some(transition) = self.snap.jump_to(index, now) {
            self.present(&transition, now);
        }
    }

    fn present(&mut self, transition: &Transition, now: Instant) {
        debug!(from = transition.from, to = transition.to, "presenting section");
        self.animator.present_at(transition, now);
        self.slide = self.animator.update(now);
    }

    fn open_current_link(&mut self) {
        let Some(link) = self.current_section().and_then(|s| s.link.clone()) else {
            self.set_status("This section has no link");
            return;
        };

        match open::that(&link.url) {
            Ok(()) => {
                info!(url = %link.url, "opened section link");
                self.set_status(format!("Opened {}", link.url));
            }
            Err(e) => {
                warn!(url = %link.url, error = %e, "failed to open link");
                self.set_status(format!("Could not open {}: {}", link.url, e));
            }
        }
    }
}

#[cfg(test)]
impl App {
    pub(crate) fn for_tests() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub(crate) fn with_config(config: AppConfig) -> Self {
        let site = SiteContent::builtin().unwrap();
        App::new(Arc::new(config), site, Theme::default()).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
    use snapdeck_core::snap::SnapKey;
    use std::time::Duration;

    const GESTURE: Duration = Duration::from_millis(900);

    #[test]
    fn test_two_notches_in_one_frame_step_once() {
        let mut app = App::for_tests();
        let now = Instant::now();
        for _ in 0..2 {
            app.handle_pointer(PointerAction::WheelDown, now);
        }
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 1);

        // a flood of notches in one frame still moves one section
        for _ in 0..30 {
            app.handle_pointer(PointerAction::WheelDown, now + GESTURE);
        }
        app.advance_frame(now + GESTURE);
        assert_eq!(app.snap.current_index(), 2);
    }

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn wheel(kind: MouseEventKind) -> AppEvent {
        AppEvent::Mouse(MouseEvent {
            kind,
            column: 0,
            row: 0,
            modifiers: KeyModifiers::NONE,
        })
    }

    #[test]
    fn test_opposite_keys_in_one_batch_cancel() {
        let mut app = App::for_tests();
        let keymap = Keymap::from_config(&app.config.keymap);
        let now = Instant::now();
        app.handle_events([key(KeyCode::Down), key(KeyCode::Up)], &keymap, now);
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 0);
        assert!(!app.snap.is_locked(now));
    }

    #[test]
    fn test_batched_notches_commit_once() {
        let mut app = App::for_tests();
        let keymap = Keymap::from_config(&app.config.keymap);
        let now = Instant::now();
        let burst = vec![wheel(MouseEventKind::ScrollDown); 12];
        app.handle_events(burst, &keymap, now);
        assert_eq!(app.snap.current_index(), 0);

        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 1);
        app.advance_frame(now + GESTURE);
        assert_eq!(app.snap.current_index(), 1);
    }

    #[test]
    fn test_batch_keeps_key_sequences() {
        let mut app = App::for_tests();
        let keymap = Keymap::from_config(&app.config.keymap);
        let now = Instant::now();
        app.jump_to(3, now);
        app.handle_events([key(KeyCode::Char('g')), key(KeyCode::Char('g'))], &keymap, now);
        assert_eq!(app.snap.current_index(), 0);

        app.handle_events([AppEvent::Tick, AppEvent::Tick], &keymap, now);
        assert_eq!(app.tick_count, 2);
    }

    #[test]
    fn test_single_notch_does_not_move() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.handle_pointer(PointerAction::WheelDown, now);
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 0);
    }

    #[test]
    fn test_drag_up_is_a_swipe_forward() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 10, row: 20 }, now);
        app.handle_pointer(PointerAction::Release { column: 10, row: 12 }, now);
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 1);
    }

    #[test]
    fn test_short_drag_is_ignored() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 10, row: 20 }, now);
        app.handle_pointer(PointerAction::Release { column: 10, row: 17 }, now);
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 0);
    }

    #[test]
    fn test_nav_dot_click_jumps() {
        let mut app = App::for_tests();
        app.nav_hitboxes = vec![
            (Rect::new(70, 2, 3, 1), 0),
            (Rect::new(70, 4, 3, 1), 1),
            (Rect::new(70, 6, 3, 1), 2),
            (Rect::new(70, 8, 3, 1), 3),
        ];
        let now = Instant::now();
        app.handle_pointer(PointerAction::Press { column: 71, row: 8 }, now);
        app.handle_pointer(PointerAction::Release { column: 71, row: 8 }, now);
        assert_eq!(app.snap.current_index(), 3);
        assert!(app.snap.is_locked(now + GESTURE));

        // press on one dot, release on another: not a click
        app.handle_pointer(PointerAction::Press { column: 71, row: 2 }, now);
        app.handle_pointer(PointerAction::Release { column: 71, row: 4 }, now);
        assert_eq!(app.snap.current_index(), 3);
    }

    #[test]
    fn test_reduced_motion_shows_target_immediately() {
        let mut config = AppConfig::default();
        config.ui.reduced_motion = true;
        let mut app = App::with_config(config);
        let now = Instant::now();

        app.apply_action(Action::Snap(SnapKey::ArrowDown), now);
        app.advance_frame(now);
        assert_eq!(app.snap.current_index(), 1);
        assert_eq!(app.slide, SlideFrame::Still(1));
        assert!(!app.animator.is_animating());
        // semantics are unchanged: the lock still holds
        assert!(app.snap.is_locked(now));
    }

    #[test]
    fn test_animated_transition_slides() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.apply_action(Action::Snap(SnapKey::End), now);
        let last = app.site.len() - 1;
        assert_eq!(app.snap.current_index(), last);
        assert!(matches!(app.slide, SlideFrame::Sliding { incoming, .. } if incoming == last));
        assert!(app.needs_fast_update(now));

        app.advance_frame(now + Duration::from_secs(2));
        assert_eq!(app.slide, SlideFrame::Still(last));
        assert!(!app.needs_fast_update(now + Duration::from_secs(2)));
    }

    #[test]
    fn test_digit_jump_is_clamped() {
        let mut app = App::for_tests();
        app.apply_action(Action::JumpTo(8), Instant::now());
        assert_eq!(app.snap.current_index(), app.site.len() - 1);
    }

    #[test]
    fn test_modes_and_pending_key() {
        let mut app = App::for_tests();
        let now = Instant::now();
        app.apply_action(Action::PendingG, now);
        assert_eq!(app.pending_key, Some('g'));
        app.apply_action(Action::ToggleHelp, now);
        assert_eq!(app.mode, Mode::Help);
        assert_eq!(app.pending_key, None);
        app.apply_action(Action::ExitMode, now);
        assert_eq!(app.mode, Mode::Normal);
        app.apply_action(Action::Quit, now);
        assert!(app.should_quit);
    }

    #[test]
    fn test_open_link_without_link_sets_status() {
        let mut app = App::for_tests();
        let now = Instant::now();
        // "about" has no link in the built-in site
        let about = app.site.position("about").unwrap();
        app.apply_action(Action::JumpTo(about), now);
        app.apply_action(Action::OpenLink, now);
        assert_eq!(app.status_message.as_deref(), Some("This section has no link"));
    }
}
