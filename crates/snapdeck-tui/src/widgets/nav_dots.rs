use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use super::truncate_width;
use crate::app::App;

/// Width of the rail when labels are hidden
const BARE_WIDTH: u16 = 3;

/// Vertical rail of section markers along the right edge
pub struct NavDotsWidget;

impl NavDotsWidget {
    /// Width the rail wants for the given site and settings
    pub fn preferred_width(app: &App) -> u16 {
        if !app.config.ui.show_nav_labels {
            return BARE_WIDTH;
        }
        let longest = app
            .site
            .names()
            .iter()
            .map(|n| n.width())
            .max()
            .unwrap_or(0);
        (longest as u16 + BARE_WIDTH + 1).min(18)
    }

    /// Draw the rail and return the clickable row of each dot
    pub fn render(frame: &mut Frame, area: Rect, app: &App) -> Vec<(Rect, usize)> {
        let count = app.site.len();
        if count == 0 || area.height == 0 || area.width == 0 {
            return Vec::new();
        }

        // Spread the dots out when there is room
        let spacing: u16 = if area.height as usize >= count * 2 - 1 { 2 } else { 1 };
        let span = ((count as u16).saturating_sub(1) * spacing + 1).min(area.height);
        let start = area.y + (area.height - span) / 2;
        let current = app.snap.current_index();
        let label_width = area.width.saturating_sub(BARE_WIDTH) as usize;

        let mut hitboxes = Vec::with_capacity(count);
        for (index, section) in app.site.sections.iter().enumerate() {
            let y = start + index as u16 * spacing;
            if y >= area.bottom() {
                break;
            }

            let active = index == current;
            let (dot, dot_style) = if active {
                (
                    "●",
                    Style::default()
                        .fg(app.theme.accent)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                ("○", Style::default().fg(app.theme.fg_dim))
            };

            let mut spans = vec![Span::raw(" "), Span::styled(dot, dot_style)];
            if app.config.ui.show_nav_labels && label_width > 0 {
                let label_style = if active {
                    Style::default().fg(app.theme.fg)
                } else {
                    Style::default().fg(app.theme.fg_dim)
                };
                spans.push(Span::raw(" "));
                spans.push(Span::styled(
                    truncate_width(&section.name, label_width),
                    label_style,
                ));
            }

            let row = Rect {
                y,
                height: 1,
                ..area
            };
            frame.render_widget(Paragraph::new(Line::from(spans)), row);
            hitboxes.push((row, index));
        }

        hitboxes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{backend::TestBackend, Terminal};

    #[test]
    fn test_one_hitbox_per_section() {
        let app = App::for_tests();
        let mut terminal = Terminal::new(TestBackend::new(16, 24)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| hitboxes = NavDotsWidget::render(f, f.area(), &app))
            .unwrap();

        assert_eq!(hitboxes.len(), app.site.len());
        let rows: Vec<u16> = hitboxes.iter().map(|(r, _)| r.y).collect();
        assert!(rows.windows(2).all(|w| w[1] == w[0] + 2));
    }

    #[test]
    fn test_cramped_rail_packs_dots() {
        let app = App::for_tests();
        let height = app.site.len() as u16;
        let mut terminal = Terminal::new(TestBackend::new(3, height)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| hitboxes = NavDotsWidget::render(f, f.area(), &app))
            .unwrap();

        assert_eq!(hitboxes.len(), app.site.len());
        assert_eq!(hitboxes[0].0.y, 0);
    }

    #[test]
    fn test_hitboxes_resolve_to_sections() {
        let mut app = App::for_tests();
        let mut terminal = Terminal::new(TestBackend::new(16, 24)).unwrap();
        let mut hitboxes = Vec::new();
        terminal
            .draw(|f| hitboxes = NavDotsWidget::render(f, f.area(), &app))
            .unwrap();
        app.nav_hitboxes = hitboxes.clone();

        let (rect, index) = hitboxes[2];
        assert_eq!(app.nav_target_at(rect.x + 1, rect.y), Some(index));
        assert_eq!(app.nav_target_at(rect.x, rect.y + 1), None);
    }
}
