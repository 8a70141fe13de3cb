use crate::constants::BUTTON_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::button;
use iced::{Background, Border, Color, Shadow, Theme, Vector};

/// Primary accent button style with glow on hover.
pub fn primary_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let base = button::Style {
            background: Some(Background::Color(palette.accent)),
            text_color: palette.background,
            border: Border {
                color: palette.accent,
                width: 1.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            shadow: Shadow::default(),
            ..Default::default()
        };
        match status {
            button::Status::Hovered => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.9,
                    ..palette.accent
                })),
                shadow: Shadow {
                    color: palette.accent,
                    blur_radius: 10.0,
                    offset: Vector::default(),
                },
                ..base
            },
            button::Status::Pressed => button::Style {
                background: Some(Background::Color(Color {
                    a: 0.7,
                    ..palette.accent
                })),
                ..base
            },
            _ => base,
        }
    }
}

/// Borderless icon button for the top bar (theme toggle, nav toggle).
pub fn icon_button_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let is_hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(Color {
                a: if is_hovered { 0.2 } else { 0.0 },
                ..palette.surface_raised
            })),
            text_color: if is_hovered {
                palette.accent
            } else {
                palette.text
            },
            border: Border {
                color: Color::TRANSPARENT,
                width: 0.0,
                radius: BUTTON_BORDER_RADIUS.into(),
            },
            ..Default::default()
        }
    }
}

/// Navigation link: transparent, accent on hover.
pub fn nav_link_style(
    palette: PaletteColors,
) -> impl Fn(&Theme, button::Status) -> button::Style + Clone {
    move |_, status| {
        let is_hovered = matches!(status, button::Status::Hovered);
        button::Style {
            background: Some(Background::Color(Color::TRANSPARENT)),
            text_color: if is_hovered {
                palette.accent
            } else {
                palette.text
            },
            border: Border::default(),
            ..Default::default()
        }
    }
}
