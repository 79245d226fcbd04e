//! Color theme and glyphs for the Vitrine TUI.
//!
//! Near-black page with soft white text, matching the page the app
//! renders; an optional high-contrast override flattens it to pure
//! black/white.

use ratatui::style::{Color, Modifier, Style};

use vitrine_types::ui::UiOptions;

mod colors {
    use super::Color;

    // === Backgrounds ===
    pub const BG_PAGE: Color = Color::Rgb(11, 11, 11);
    pub const BG_CARD: Color = Color::Rgb(22, 22, 26);
    pub const BG_FIELD: Color = Color::Rgb(30, 30, 36);

    // === Foregrounds ===
    pub const TEXT_PRIMARY: Color = Color::Rgb(245, 245, 245);
    pub const TEXT_SECONDARY: Color = Color::Rgb(209, 213, 219); // gray-300
    pub const TEXT_MUTED: Color = Color::Rgb(120, 120, 130);

    // === Accents ===
    pub const NET: Color = Color::Rgb(181, 181, 217); // background lattice
    pub const ACCENT: Color = Color::Rgb(147, 157, 255);
    pub const BORDER: Color = Color::Rgb(60, 60, 70);
    pub const BORDER_ACTIVE: Color = Color::Rgb(160, 160, 180);
    pub const SUCCESS: Color = Color::Rgb(134, 239, 172);
    pub const WARNING: Color = Color::Rgb(250, 204, 21);
    pub const ERROR: Color = Color::Rgb(248, 113, 113);
}

/// Resolved theme palette used by the UI.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub bg_page: Color,
    pub bg_card: Color,
    pub bg_field: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    pub net: Color,
    pub accent: Color,
    pub border: Color,
    pub border_active: Color,
    pub success: Color,
    pub warning: Color,
    pub error: Color,
}

impl Palette {
    #[must_use]
    fn default_theme() -> Self {
        Self {
            bg_page: colors::BG_PAGE,
            bg_card: colors::BG_CARD,
            bg_field: colors::BG_FIELD,
            text_primary: colors::TEXT_PRIMARY,
            text_secondary: colors::TEXT_SECONDARY,
            text_muted: colors::TEXT_MUTED,
            net: colors::NET,
            accent: colors::ACCENT,
            border: colors::BORDER,
            border_active: colors::BORDER_ACTIVE,
            success: colors::SUCCESS,
            warning: colors::WARNING,
            error: colors::ERROR,
        }
    }

    #[must_use]
    fn high_contrast() -> Self {
        Self {
            bg_page: Color::Black,
            bg_card: Color::Black,
            bg_field: Color::Black,
            text_primary: Color::White,
            text_secondary: Color::White,
            text_muted: Color::Gray,
            net: Color::Gray,
            accent: Color::Cyan,
            border: Color::White,
            border_active: Color::Cyan,
            success: Color::Green,
            warning: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// Glyph set, with an ASCII fallback for terminals without good Unicode
/// coverage.
#[derive(Debug, Clone, Copy)]
pub struct Glyphs {
    pub caret: &'static str,
    pub bullet: &'static str,
    pub node: &'static str,
    pub link: &'static str,
    pub arrow: &'static str,
    pub focus: &'static str,
}

impl Glyphs {
    #[must_use]
    fn unicode() -> Self {
        Self {
            caret: "▌",
            bullet: "•",
            node: "●",
            link: "·",
            arrow: "→",
            focus: "▸",
        }
    }

    #[must_use]
    fn ascii() -> Self {
        Self {
            caret: "|",
            bullet: "*",
            node: "o",
            link: ".",
            arrow: "->",
            focus: ">",
        }
    }
}

#[must_use]
pub fn palette(options: UiOptions) -> Palette {
    if options.high_contrast {
        Palette::high_contrast()
    } else {
        Palette::default_theme()
    }
}

#[must_use]
pub fn glyphs(options: UiOptions) -> Glyphs {
    if options.ascii_only {
        Glyphs::ascii()
    } else {
        Glyphs::unicode()
    }
}

/// Parse an `#rrggbb` accent from the content tables.
#[must_use]
pub fn parse_hex_color(raw: &str) -> Option<Color> {
    let hex = raw.strip_prefix('#')?;
    // Byte-range slicing below: reject anything non-ASCII up front so a
    // multibyte accent value cannot split a char boundary.
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

pub mod styles {
    use super::{Color, Modifier, Palette, Style};

    #[must_use]
    pub fn title(palette: &Palette) -> Style {
        Style::default()
            .fg(palette.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    #[must_use]
    pub fn body(palette: &Palette) -> Style {
        Style::default().fg(palette.text_secondary)
    }

    #[must_use]
    pub fn muted(palette: &Palette) -> Style {
        Style::default().fg(palette.text_muted)
    }

    #[must_use]
    pub fn accent(palette: &Palette) -> Style {
        Style::default().fg(palette.accent)
    }

    #[must_use]
    pub fn tag(palette: &Palette) -> Style {
        Style::default()
            .fg(Color::Black)
            .bg(palette.success)
            .add_modifier(Modifier::BOLD)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_accents_parse() {
        assert_eq!(parse_hex_color("#ffd343"), Some(Color::Rgb(0xff, 0xd3, 0x43)));
        assert_eq!(parse_hex_color("ffd343"), None);
        assert_eq!(parse_hex_color("#xyzxyz"), None);
        assert_eq!(parse_hex_color("#fff"), None);
    }

    #[test]
    fn multibyte_accents_fall_back_instead_of_panicking() {
        // Six bytes but not six ASCII digits: Cyrillic letters land the
        // old byte slicing inside a char boundary.
        assert_eq!(parse_hex_color("#x\u{0435}\u{0435}y"), None);
        assert_eq!(parse_hex_color("#\u{00e9}\u{00e9}\u{00e9}"), None);
    }
}
