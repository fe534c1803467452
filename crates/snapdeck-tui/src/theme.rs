//! Built-in palettes and config-driven theme loading

use ratatui::style::Color;
use snapdeck_core::config::ThemeConfig;
use tracing::warn;

/// Runtime theme with semantic colors
#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub bg: Color,
    pub bg_alt: Color,
    pub fg: Color,
    pub fg_dim: Color,
    pub accent: Color,
    pub highlight: Color,
    pub star: Color,
    pub star_dim: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Default for Theme {
    fn default() -> Self {
        midnight()
    }
}

/// Deep blue backdrop, the site's own colors
fn midnight() -> Theme {
    Theme {
        bg: Color::Rgb(0x0b, 0x10, 0x26),
        bg_alt: Color::Rgb(0x16, 0x1d, 0x3a),
        fg: Color::Rgb(0xe6, 0xe9, 0xf5),
        fg_dim: Color::Rgb(0x8a, 0x93, 0xb8),
        accent: Color::Rgb(0x4f, 0x8c, 0xff),
        highlight: Color::Rgb(0xff, 0xc8, 0x57),
        star: Color::Rgb(0xf5, 0xf7, 0xff),
        star_dim: Color::Rgb(0x5a, 0x63, 0x8a),
        success: Color::Rgb(0x5f, 0xd3, 0x8d),
        warning: Color::Rgb(0xff, 0x9f, 0x43),
        error: Color::Rgb(0xff, 0x5c, 0x6c),
    }
}

fn gruvbox_dark() -> Theme {
    Theme {
        bg: Color::Rgb(0x28, 0x28, 0x28),
        bg_alt: Color::Rgb(0x45, 0x40, 0x3d),
        fg: Color::Rgb(0xd4, 0xbe, 0x98),
        fg_dim: Color::Rgb(0x92, 0x83, 0x74),
        accent: Color::Rgb(0x89, 0xb4, 0x82),
        highlight: Color::Rgb(0xd8, 0xa6, 0x57),
        star: Color::Rgb(0xdd, 0xc7, 0xa1),
        star_dim: Color::Rgb(0x7c, 0x6f, 0x64),
        success: Color::Rgb(0xa9, 0xb6, 0x65),
        warning: Color::Rgb(0xe7, 0x8a, 0x4e),
        error: Color::Rgb(0xea, 0x69, 0x62),
    }
}

fn nord() -> Theme {
    Theme {
        bg: Color::Rgb(0x2e, 0x34, 0x40),
        bg_alt: Color::Rgb(0x43, 0x4c, 0x5e),
        fg: Color::Rgb(0xec, 0xef, 0xf4),
        fg_dim: Color::Rgb(0xd8, 0xde, 0xe9),
        accent: Color::Rgb(0x88, 0xc0, 0xd0),
        highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
        star: Color::Rgb(0xe5, 0xe9, 0xf0),
        star_dim: Color::Rgb(0x4c, 0x56, 0x6a),
        success: Color::Rgb(0xa3, 0xbe, 0x8c),
        warning: Color::Rgb(0xd0, 0x87, 0x70),
        error: Color::Rgb(0xbf, 0x61, 0x6a),
    }
}

fn daylight() -> Theme {
    Theme {
        bg: Color::Rgb(0xfa, 0xfa, 0xfc),
        bg_alt: Color::Rgb(0xe8, 0xeb, 0xf2),
        fg: Color::Rgb(0x1f, 0x23, 0x33),
        fg_dim: Color::Rgb(0x6b, 0x72, 0x8a),
        accent: Color::Rgb(0x1a, 0x5f, 0xd6),
        highlight: Color::Rgb(0xc2, 0x7c, 0x0e),
        star: Color::Rgb(0x9a, 0xa3, 0xc0),
        star_dim: Color::Rgb(0xd0, 0xd5, 0xe3),
        success: Color::Rgb(0x1e, 0x8e, 0x4f),
        warning: Color::Rgb(0xc2, 0x5e, 0x0e),
        error: Color::Rgb(0xc6, 0x28, 0x3a),
    }
}

/// Parse a hex color string into a ratatui Color
/// Accepts formats: "#RRGGBB", "RRGGBB", "#RGB", "RGB"
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if !hex.is_ascii() {
        return None;
    }

    let channel = |s: &str| u8::from_str_radix(s, 16).ok();
    match hex.len() {
        3 => {
            let r = channel(&hex[0..1])? * 17;
            let g = channel(&hex[1..2])? * 17;
            let b = channel(&hex[2..3])? * 17;
            Some(Color::Rgb(r, g, b))
        }
        6 => Some(Color::Rgb(
            channel(&hex[0..2])?,
            channel(&hex[2..4])?,
            channel(&hex[4..6])?,
        )),
        _ => None,
    }
}

/// Load a theme by name from config
pub fn load_theme(config: &ThemeConfig) -> Theme {
    let mut theme = match config.name.to_lowercase().as_str() {
        "midnight" => midnight(),
        "gruvbox" | "gruvbox-dark" => gruvbox_dark(),
        "nord" => nord(),
        "daylight" | "light" => daylight(),
        other => {
            warn!("Unknown theme '{}', falling back to midnight", other);
            midnight()
        }
    };

    if let Some(accent) = &config.accent {
        match parse_hex_color(accent) {
            Some(color) => theme.accent = color,
            None => warn!("Invalid accent color '{}', keeping theme accent", accent),
        }
    }

    theme
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_hex_color() {
        assert_eq!(parse_hex_color("#ff8800"), Some(Color::Rgb(0xff, 0x88, 0x00)));
        assert_eq!(parse_hex_color("0a0B0c"), Some(Color::Rgb(0x0a, 0x0b, 0x0c)));
        assert_eq!(parse_hex_color("#fff"), Some(Color::Rgb(0xff, 0xff, 0xff)));
        assert_eq!(parse_hex_color("#ff88"), None);
        assert_eq!(parse_hex_color("zzzzzz"), None);
    }

    #[test]
    fn test_load_theme_with_accent_override() {
        let config = ThemeConfig {
            name: "Nord".to_string(),
            accent: Some("#123456".to_string()),
        };
        let theme = load_theme(&config);
        assert_eq!(theme.accent, Color::Rgb(0x12, 0x34, 0x56));
        assert_eq!(theme.bg, nord().bg);
    }

    #[test]
    fn test_unknown_theme_falls_back() {
        let config = ThemeConfig {
            name: "no-such-theme".to_string(),
            accent: None,
        };
        assert_eq!(load_theme(&config), Theme::default());
    }
}
