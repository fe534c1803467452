use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use snapdeck_core::content::{Event, Section, SectionKind};

use crate::theme::Theme;

/// Horizontal breathing room on each side of section text
const SIDE_MARGIN: u16 = 4;

pub struct SectionViewWidget;

impl SectionViewWidget {
    /// Draw `section` into `area`, skipping `scroll` rows of its own content.
    ///
    /// `viewport_height` is the height the section occupies when at rest,
    /// used to center the hero vertically.
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        section: &Section,
        theme: &Theme,
        scroll: u16,
        viewport_height: u16,
        today: NaiveDate,
    ) {
        let mut lines = Self::lines(section, theme, today);
        let centered = matches!(section.kind, SectionKind::Hero | SectionKind::Hackathon);

        let pad = if section.kind == SectionKind::Hero {
            viewport_height.saturating_sub(lines.len() as u16) / 2
        } else {
            1
        };
        let mut padded = vec![Line::default(); pad as usize];
        padded.append(&mut lines);

        let inner = Rect {
            x: area.x + SIDE_MARGIN.min(area.width / 4),
            width: area.width.saturating_sub(2 * SIDE_MARGIN.min(area.width / 4)),
            ..area
        };

        let paragraph = Paragraph::new(padded)
            .alignment(if centered {
                Alignment::Center
            } else {
                Alignment::Left
            })
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0));
        frame.render_widget(paragraph, inner);
    }

    /// Styled content of a section, top to bottom
    pub fn lines(section: &Section, theme: &Theme, today: NaiveDate) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        let title_color = match section.kind {
            SectionKind::Hackathon => theme.highlight,
            _ => theme.accent,
        };
        lines.push(Line::from(Span::styled(
            section.title.clone(),
            Style::default()
                .fg(title_color)
                .add_modifier(Modifier::BOLD),
        )));

        if let Some(tagline) = &section.tagline {
            lines.push(Line::from(Span::styled(
                tagline.clone(),
                Style::default()
                    .fg(theme.fg_dim)
                    .add_modifier(Modifier::ITALIC),
            )));
        }

        if section.kind == SectionKind::Text {
            lines.push(Line::from(Span::styled(
                "─".repeat(24),
                Style::default().fg(theme.fg_dim),
            )));
        }

        for paragraph in &section.body {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                paragraph.clone(),
                Style::default().fg(theme.fg),
            )));
        }

        match section.kind {
            SectionKind::Team => Self::push_members(&mut lines, section, theme),
            SectionKind::Events => Self::push_events(&mut lines, section, theme, today),
            _ => {}
        }

        if !section.highlights.is_empty() {
            lines.push(Line::default());
            let bullet = if section.kind == SectionKind::Hackathon {
                "★ "
            } else {
                "▸ "
            };
            for highlight in &section.highlights {
                lines.push(Line::from(vec![
                    Span::styled(bullet, Style::default().fg(theme.highlight)),
                    Span::styled(highlight.clone(), Style::default().fg(theme.fg)),
                ]));
            }
        }

        if let Some(link) = &section.link {
            lines.push(Line::default());
            lines.push(Line::from(vec![
                Span::styled("[o] ", Style::default().fg(theme.fg_dim)),
                Span::styled(
                    format!("{} →", link.label),
                    Style::default()
                        .fg(theme.accent)
                        .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
                ),
            ]));
        }

        lines
    }

    fn push_members(lines: &mut Vec<Line<'static>>, section: &Section, theme: &Theme) {
        lines.push(Line::default());
        for member in &section.members {
            let mut spans = vec![
                Span::styled("● ", Style::default().fg(theme.accent)),
                Span::styled(
                    member.name.clone(),
                    Style::default().fg(theme.fg).add_modifier(Modifier::BOLD),
                ),
                Span::styled(format!("  {}", member.role), Style::default().fg(theme.fg_dim)),
            ];
            if let Some(handle) = &member.handle {
                spans.push(Span::styled(
                    format!("  @{}", handle.trim_start_matches('@')),
                    Style::default().fg(theme.highlight),
                ));
            }
            lines.push(Line::from(spans));
        }
    }

    fn push_events(
        lines: &mut Vec<Line<'static>>,
        section: &Section,
        theme: &Theme,
        today: NaiveDate,
    ) {
        let (upcoming, past) = section.partition_events(today);

        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Upcoming",
            Style::default()
                .fg(theme.success)
                .add_modifier(Modifier::BOLD),
        )));
        if upcoming.is_empty() {
            lines.push(Line::from(Span::styled(
                "  Nothing scheduled yet. Check back soon.",
                Style::default().fg(theme.fg_dim),
            )));
        }
        for event in upcoming {
            Self::push_event(lines, event, theme, false);
        }

        if !past.is_empty() {
            lines.push(Line::default());
            lines.push(Line::from(Span::styled(
                "Past",
                Style::default()
                    .fg(theme.fg_dim)
                    .add_modifier(Modifier::BOLD),
            )));
            for event in past {
                Self::push_event(lines, event, theme, true);
            }
        }
    }

    fn push_event(lines: &mut Vec<Line<'static>>, event: &Event, theme: &Theme, past: bool) {
        let name_style = if past {
            Style::default().fg(theme.fg_dim)
        } else {
            Style::default().fg(theme.fg).add_modifier(Modifier::BOLD)
        };

        let mut spans = vec![
            Span::styled(
                format!("  {}  ", event.date.format("%b %d, %Y")),
                Style::default().fg(theme.warning),
            ),
            Span::styled(event.name.clone(), name_style),
        ];
        if let Some(location) = &event.location {
            spans.push(Span::styled(
                format!(" · {}", location),
                Style::default().fg(theme.fg_dim),
            ));
        }
        lines.push(Line::from(spans));

        if let Some(summary) = &event.summary {
            lines.push(Line::from(Span::styled(
                format!("      {}", summary),
                Style::default().fg(theme.fg_dim),
            )));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use snapdeck_core::SiteContent;

    fn text_of(lines: &[Line<'_>]) -> Vec<String> {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_events_split_around_today() {
        let site = SiteContent::builtin().unwrap();
        let events = site.sections.iter().find(|s| s.kind == SectionKind::Events).unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();

        let text = text_of(&SectionViewWidget::lines(events, &Theme::default(), today));
        let upcoming = text.iter().position(|l| l == "Upcoming").unwrap();
        if let Some(past) = text.iter().position(|l| l == "Past") {
            assert!(past > upcoming);
        }
    }

    #[test]
    fn test_no_upcoming_events_placeholder() {
        let site = SiteContent::builtin().unwrap();
        let events = site.sections.iter().find(|s| s.kind == SectionKind::Events).unwrap();
        let far_future = NaiveDate::from_ymd_opt(2999, 1, 1).unwrap();

        let text = text_of(&SectionViewWidget::lines(events, &Theme::default(), far_future));
        assert!(text.iter().any(|l| l.contains("Nothing scheduled")));
        assert!(text.iter().any(|l| l == "Past"));
    }

    #[test]
    fn test_link_hint_only_with_link() {
        let site = SiteContent::builtin().unwrap();
        let today = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        for section in &site.sections {
            let text = text_of(&SectionViewWidget::lines(section, &Theme::default(), today));
            let has_hint = text.iter().any(|l| l.starts_with("[o] "));
            assert_eq!(has_hint, section.link.is_some(), "section {}", section.id);
        }
    }

    #[test]
    fn test_member_handles_are_prefixed_once() {
        let site = SiteContent::builtin().unwrap();
        let team = site.get(site.position("team").unwrap()).unwrap();
        let text = text_of(&SectionViewWidget::lines(team, &Theme::default(), NaiveDate::MIN));
        assert!(!text.iter().any(|l| l.contains("@@")));
    }
}
