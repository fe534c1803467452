use crossterm::event::{KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use snapdeck_core::snap::SnapKey;

use crate::app::{App, Mode};
use crate::keymap::{KeyBinding, Keymap};

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// Arrow/page keys queue a step, Home/End jump
    Snap(SnapKey),
    /// Explicit navigation to a section (digit keys)
    JumpTo(usize),
    PendingG, // First 'g' press, waiting for second 'g'
    OpenLink,
    ToggleHelp,
    ExitMode,
    None,
}

/// Pointer input relevant to section navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerAction {
    WheelDown,
    WheelUp,
    /// Left button pressed: a swipe or a navigation-dot click starts
    Press { column: u16, row: u16 },
    /// Left button released: the swipe ends
    Release { column: u16, row: u16 },
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App, keymap: &Keymap) -> Action {
    let binding = KeyBinding::new(key.code, key.modifiers);

    if app.mode == Mode::Help {
        // Any key closes help, except quitting outright
        return match keymap.get(&binding) {
            Some(Action::Quit) => Action::Quit,
            _ => Action::ExitMode,
        };
    }

    if keymap.is_g_prefix(&binding) {
        return if app.pending_key == Some('g') {
            keymap.get_pending_g_action().copied().unwrap_or(Action::None)
        } else {
            Action::PendingG
        };
    }

    keymap.get(&binding).copied().unwrap_or(Action::None)
}

/// Map a crossterm mouse event to a pointer action; drags are resolved on release
pub fn handle_mouse_event(mouse: MouseEvent) -> Option<PointerAction> {
    let (column, row) = (mouse.column, mouse.row);
    match mouse.kind {
        MouseEventKind::ScrollDown => Some(PointerAction::WheelDown),
        MouseEventKind::ScrollUp => Some(PointerAction::WheelUp),
        MouseEventKind::Down(MouseButton::Left) => Some(PointerAction::Press { column, row }),
        MouseEventKind::Up(MouseButton::Left) => Some(PointerAction::Release { column, row }),
        _ => None,
    }
}
