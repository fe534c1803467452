use std::time::Instant;

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use super::truncate_width;
use crate::app::{App, Mode};

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
        let bg = Style::default().bg(app.theme.bg_alt);
        let keys = &app.config.keymap;

        let position = format!(
            " {}/{} ",
            app.snap.current_index() + 1,
            app.snap.section_count()
        );
        let name = app
            .current_section()
            .map(|s| s.name.clone())
            .unwrap_or_default();

        let status_text = match (&app.status_message, app.mode) {
            (Some(msg), _) => format!(" {} ", msg),
            (None, Mode::Help) => " HELP ".to_string(),
            (None, Mode::Normal) => format!(" {} │ {} ", app.site.title, name),
        };

        let remaining = app.snap.lock_remaining(now);
        let lock = if remaining.is_zero() {
            String::new()
        } else {
            format!(" ⏳{:.1}s ", remaining.as_secs_f32())
        };

        let help_hint = format!(
            " {}/{}:scroll 1-9:jump {}:open {}:help {}:quit ",
            keys.next_section, keys.prev_section, keys.open_link, keys.help, keys.quit
        );

        let fixed = position.width() + lock.width() + help_hint.width();
        let status_room = (area.width as usize).saturating_sub(fixed);
        let status_text = truncate_width(&status_text, status_room);
        let padding_len = status_room.saturating_sub(status_text.width());

        let line = Line::from(vec![
            Span::styled(
                position,
                Style::default()
                    .fg(app.theme.bg)
                    .bg(app.theme.accent)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(status_text, bg.fg(app.theme.fg)),
            Span::styled(" ".repeat(padding_len), bg),
            Span::styled(lock, bg.fg(app.theme.warning)),
            Span::styled(help_hint, bg.fg(app.theme.fg_dim)),
        ]);

        frame.render_widget(Paragraph::new(line).style(bg), area);
    }
}
