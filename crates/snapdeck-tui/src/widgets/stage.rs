use chrono::NaiveDate;
use ratatui::{layout::Rect, style::Style, widgets::Block, Frame};
use snapdeck_core::content::SectionKind;

use super::{SectionViewWidget, Starfield};
use crate::app::App;
use crate::transition::{timing::visible_band, SlideFrame};

/// The full-height viewport that shows one section, or two mid-slide
pub struct StageWidget;

impl StageWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        frame.render_widget(
            Block::default().style(Style::default().bg(app.theme.bg)),
            area,
        );

        let today = chrono::Local::now().date_naive();
        match app.slide {
            SlideFrame::Still(index) => Self::render_band(frame, area, app, index, 0.0, today),
            SlideFrame::Sliding {
                outgoing,
                incoming,
                outgoing_offset,
                incoming_offset,
            } => {
                Self::render_band(frame, area, app, outgoing, outgoing_offset, today);
                Self::render_band(frame, area, app, incoming, incoming_offset, today);
            }
        }
    }

    fn render_band(
        frame: &mut Frame,
        area: Rect,
        app: &App,
        index: usize,
        offset: f32,
        today: NaiveDate,
    ) {
        let Some(section) = app.section(index) else {
            return;
        };
        let Some((top, height, scroll)) = visible_band(offset, area.height) else {
            return;
        };
        let band = Rect {
            y: area.y + top,
            height,
            ..area
        };

        if section.kind == SectionKind::Hero && app.config.ui.starfield {
            let starfield = Starfield {
                seed: index as u64,
                phase: (!app.animator.reduced_motion()).then_some(app.tick_count),
                row_offset: scroll,
                bright: app.theme.star,
                dim: app.theme.star_dim,
            };
            frame.render_widget(starfield, band);
        }

        SectionViewWidget::render(frame, band, section, &app.theme, scroll, area.height, today);
    }
}
