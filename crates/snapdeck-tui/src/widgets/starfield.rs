use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget};

/// One star per this many cells, on average
const DENSITY: u64 = 37;

/// Decorative star backdrop behind the hero section.
///
/// Star positions are a pure function of (column, section row, seed), so the
/// field scrolls along with its section during a slide.
#[derive(Debug, Clone, Copy)]
pub struct Starfield {
    pub seed: u64,
    /// Twinkle phase; `None` keeps every star steady
    pub phase: Option<u64>,
    /// Section rows scrolled off above the drawn area
    pub row_offset: u16,
    pub bright: Color,
    pub dim: Color,
}

fn mix(mut z: u64) -> u64 {
    // splitmix64 finalizer
    z = z.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

impl Starfield {
    /// Glyph and brightness of the star at a cell, if there is one
    pub fn star_at(&self, column: u16, section_row: u32) -> Option<(char, bool)> {
        let h = mix(self.seed ^ (u64::from(column) << 32) ^ u64::from(section_row));
        if h % DENSITY != 0 {
            return None;
        }
        let glyph = match (h >> 8) % 6 {
            0 => '*',
            1 => '+',
            2 => '·',
            _ => '.',
        };
        let bright = match self.phase {
            Some(phase) => (h >> 16).wrapping_add(phase / 4) % 3 == 0,
            None => (h >> 16) % 3 == 0,
        };
        Some((glyph, bright))
    }
}

impl Widget for Starfield {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.top()..area.bottom() {
            let section_row = u32::from(y - area.y) + u32::from(self.row_offset);
            for x in area.left()..area.right() {
                let Some((glyph, bright)) = self.star_at(x - area.x, section_row) else {
                    continue;
                };
                if let Some(cell) = buf.cell_mut((x, y)) {
                    let color = if bright { self.bright } else { self.dim };
                    cell.set_char(glyph).set_fg(color);
                }
            }
        }
    }
}
