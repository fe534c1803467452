use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::App;

pub struct HelpWidget;

impl HelpWidget {
    /// Key reference popup, centered over the stage
    pub fn render(frame: &mut Frame, app: &App) {
        let area = frame.area();
        let theme = &app.theme;
        let keys = &app.config.keymap;

        let rows: Vec<(String, &str)> = vec![
            (format!("{} / ↓ / wheel", keys.next_section), "Next section"),
            (format!("{} / ↑ / wheel", keys.prev_section), "Previous section"),
            ("PgDn / PgUp".to_string(), "Page to next / previous"),
            (format!("{} / Home", keys.first_section), "First section"),
            (format!("{} / End", keys.last_section), "Last section"),
            ("1-9 / click dot".to_string(), "Jump to section"),
            ("drag".to_string(), "Swipe between sections"),
            (keys.open_link.clone(), "Open section link"),
            (keys.help.clone(), "Toggle this help"),
            (format!("{} / Ctrl+C", keys.quit), "Quit"),
        ];

        let key_width = rows.iter().map(|(k, _)| k.chars().count()).max().unwrap_or(0);
        let mut lines: Vec<Line> = rows
            .into_iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(
                        format!("  {:<width$}  ", key, width = key_width),
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    ),
                    Span::styled(desc, Style::default().fg(theme.fg)),
                ])
            })
            .collect();

        lines.push(Line::default());
        let motion = if app.animator.reduced_motion() {
            "Reduced motion: on"
        } else {
            "Reduced motion: off"
        };
        lines.push(
            Line::from(Span::styled(motion, Style::default().fg(theme.fg_dim)))
                .alignment(Alignment::Center),
        );
        lines.push(
            Line::from(Span::styled(
                "Press any key to close",
                Style::default().fg(theme.fg_dim),
            ))
            .alignment(Alignment::Center),
        );

        let popup_width = 56u16.min(area.width.saturating_sub(4));
        let popup_height = (lines.len() as u16 + 2).min(area.height.saturating_sub(2));
        let popup_area = centered_rect(popup_width, popup_height, area);

        frame.render_widget(Clear, popup_area);

        let block = Block::default()
            .title(" Keys ")
            .title_alignment(Alignment::Center)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(theme.accent))
            .style(Style::default().bg(theme.bg_alt));

        frame.render_widget(Paragraph::new(lines).block(block), popup_area);
    }
}

/// A rect of the given size centered in `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
