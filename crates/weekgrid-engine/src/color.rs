//! Text colour to draw on top of an event's background colour.

use serde::Serialize;

/// Brightness at or above which dark text is used.
const YIQ_THRESHOLD: u32 = 128;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    Dark,
    Light,
}

impl TextColor {
    #[must_use]
    pub const fn as_hex(self) -> &'static str {
        match self {
            Self::Dark => "#000000",
            Self::Light => "#ffffff",
        }
    }
}

/// ## Summary
/// Picks dark or light text for a `#rrggbb` or `#rgb` background using YIQ
/// brightness. Anything unparseable gets dark text.
#[must_use]
pub fn contrast_text_color(background: &str) -> TextColor {
    let Some((r, g, b)) = parse_hex(background) else {
        return TextColor::Dark;
    };
    let brightness = (u32::from(r) * 299 + u32::from(g) * 587 + u32::from(b) * 114) / 1000;
    if brightness >= YIQ_THRESHOLD {
        TextColor::Dark
    } else {
        TextColor::Light
    }
}

fn parse_hex(color: &str) -> Option<(u8, u8, u8)> {
    let digits = color.trim().strip_prefix('#')?;
    if !digits.is_ascii() {
        return None;
    }
    match digits.len() {
        6 => Some((
            u8::from_str_radix(&digits[0..2], 16).ok()?,
            u8::from_str_radix(&digits[2..4], 16).ok()?,
            u8::from_str_radix(&digits[4..6], 16).ok()?,
        )),
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&digits[i..=i], 16).ok().map(|v| v * 17);
            Some((nibble(0)?, nibble(1)?, nibble(2)?))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_light_backgrounds_get_dark_text() {
        assert_eq!(contrast_text_color("#ffffff"), TextColor::Dark);
        assert_eq!(contrast_text_color("#FFEB3B"), TextColor::Dark);
        assert_eq!(contrast_text_color("#fff"), TextColor::Dark);
    }

    #[test]
    fn test_dark_backgrounds_get_light_text() {
        assert_eq!(contrast_text_color("#000000"), TextColor::Light);
        assert_eq!(contrast_text_color("#1a237e"), TextColor::Light);
        assert_eq!(contrast_text_color("#03c"), TextColor::Light);
    }

    #[test]
    fn test_unparseable_colors_fall_back_to_dark_text() {
        assert_eq!(contrast_text_color("blue"), TextColor::Dark);
        assert_eq!(contrast_text_color("#12345"), TextColor::Dark);
        assert_eq!(contrast_text_color("#gggggg"), TextColor::Dark);
        assert_eq!(contrast_text_color(""), TextColor::Dark);
    }

    #[test]
    fn test_hex_values() {
        assert_eq!(TextColor::Dark.as_hex(), "#000000");
        assert_eq!(TextColor::Light.as_hex(), "#ffffff");
    }
}
