mod help;
mod nav_dots;
mod section_view;
mod stage;
mod starfield;
mod status_bar;

pub use help::HelpWidget;
pub use nav_dots::NavDotsWidget;
pub use section_view::SectionViewWidget;
pub use stage::StageWidget;
pub use starfield::Starfield;
pub use status_bar::StatusBarWidget;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Truncate a string to a display width, adding an ellipsis when cut
pub(crate) fn truncate_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
