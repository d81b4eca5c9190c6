use iced::theme::Palette;
use iced::{Color, Theme};

/// Console colors as hex strings.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) panel: String,
    pub(crate) rail: String,
    pub(crate) hover: String,
    pub(crate) accent: String,
    pub(crate) dim_foreground: String,
    pub(crate) separator: String,
    pub(crate) green: String,
    pub(crate) red: String,
    pub(crate) yellow: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#C0C5CE"),
            background: String::from("#161822"),
            panel: String::from("#1E2130"),
            rail: String::from("#0F1115"),
            hover: String::from("#232530"),
            accent: String::from("#4FA6ED"),
            dim_foreground: String::from("#6B7280"),
            separator: String::from("#2F3342"),
            green: String::from("#98C379"),
            red: String::from("#E06C75"),
            yellow: String::from("#E5C07B"),
        }
    }
}

/// Parsed console colors ready for widget styling.
#[derive(Debug, Clone, Copy)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) panel: Color,
    pub(crate) rail: Color,
    pub(crate) hover: Color,
    pub(crate) accent: Color,
    pub(crate) dim_foreground: Color,
    pub(crate) separator: Color,
    pub(crate) green: Color,
    pub(crate) red: Color,
    pub(crate) yellow: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: color_or(&p.foreground, Color::WHITE),
            background: color_or(&p.background, Color::BLACK),
            panel: color_or(&p.panel, Color::BLACK),
            rail: color_or(&p.rail, Color::BLACK),
            hover: color_or(&p.hover, Color::BLACK),
            accent: color_or(&p.accent, Color::WHITE),
            dim_foreground: color_or(&p.dim_foreground, Color::WHITE),
            separator: color_or(&p.separator, Color::BLACK),
            green: color_or(&p.green, Color::WHITE),
            red: color_or(&p.red, Color::WHITE),
            yellow: color_or(&p.yellow, Color::WHITE),
        }
    }
}

/// Application theme shared by every widget.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("default"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.accent,
            success: palette.green,
            danger: palette.red,
            warning: palette.yellow,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Parse `#RRGGBB` (leading `#` optional) into a color.
pub(crate) fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return None;
    }

    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16).ok()
    };
    Some(Color::from_rgb8(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

fn color_or(value: &str, fallback: Color) -> Color {
    parse_hex_color(value).unwrap_or_else(|| {
        log::warn!("invalid color `{value}`, using fallback");
        fallback
    })
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::{AppTheme, ColorPalette, IcedColorPalette, parse_hex_color};

    #[test]
    fn given_hex_strings_when_parsed_then_channels_match() {
        assert_eq!(
            parse_hex_color("#FF8000"),
            Some(Color::from_rgb8(255, 128, 0))
        );
        assert_eq!(
            parse_hex_color("00ff00"),
            Some(Color::from_rgb8(0, 255, 0))
        );
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_none_is_returned() {
        assert_eq!(parse_hex_color("#FFF"), None);
        assert_eq!(parse_hex_color("#GG0000"), None);
        assert_eq!(parse_hex_color("#ÿÿÿ"), None);
    }

    #[test]
    fn given_invalid_palette_entry_when_converted_then_fallback_is_used() {
        let palette = ColorPalette {
            accent: String::from("nope"),
            ..ColorPalette::default()
        };

        let parsed = IcedColorPalette::from(&palette);

        assert_eq!(parsed.accent, Color::WHITE);
        assert_eq!(parsed.background, Color::from_rgb8(0x16, 0x18, 0x22));
    }

    #[test]
    fn given_default_theme_when_converted_then_iced_palette_uses_accent() {
        let theme = AppTheme::default();

        let iced_theme = iced::Theme::from(&theme);

        assert_eq!(
            iced_theme.palette().primary,
            theme.iced_palette().accent
        );
    }
}
