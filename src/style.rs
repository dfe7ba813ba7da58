//! Colors and widget styles derived from the preferences

use iced::widget::container;
use iced::{Background, Border, Color, Theme};
use shopping_list_prefs::HeaderColor;

/// The tint for a header color, if any
pub fn header_tint(color: HeaderColor) -> Option<Color> {
    match color {
        HeaderColor::None => None,
        HeaderColor::Red => Some(Color::from_rgb8(0xE5, 0x39, 0x35)),
        HeaderColor::Green => Some(Color::from_rgb8(0x43, 0xA0, 0x47)),
        HeaderColor::Orange => Some(Color::from_rgb8(0xFB, 0x8C, 0x00)),
        HeaderColor::Purple => Some(Color::from_rgb8(0x8E, 0x24, 0xAA)),
    }
}

/// Header bar style: tinted when a color is chosen, plain otherwise
pub fn header(color: HeaderColor) -> impl Fn(&Theme) -> container::Style {
    move |_theme| match header_tint(color) {
        Some(tint) => container::Style {
            background: Some(Background::Color(tint)),
            text_color: Some(Color::WHITE),
            border: Border::default().rounded(8.0),
            ..container::Style::default()
        },
        None => container::Style::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_none_is_untinted() {
        for color in HeaderColor::ALL {
            assert_eq!(header_tint(color).is_none(), color == HeaderColor::None);
        }
    }
}
