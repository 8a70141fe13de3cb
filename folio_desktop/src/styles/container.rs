use crate::constants::CARD_BORDER_RADIUS;
use crate::theme::PaletteColors;
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Section container whose fade-in is driven by the reveal progress.
pub fn section_style(
    palette: PaletteColors,
    progress: f32,
) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(Color {
            a: 0.55 * progress,
            ..palette.surface
        })),
        text_color: Some(Color {
            a: progress,
            ..palette.text
        }),
        border: Border {
            color: Color {
                a: 0.6 * progress,
                ..palette.border
            },
            width: 1.0,
            radius: CARD_BORDER_RADIUS.into(),
        },
        ..Default::default()
    }
}

/// Fully transparent wrapper.
pub fn transparent_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: Some(palette.text),
        border: Border::default(),
        ..Default::default()
    }
}

/// Success-tinted line under the contact form.
pub fn feedback_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.12,
            ..palette.success
        })),
        text_color: Some(palette.success),
        border: Border {
            color: Color {
                a: 0.4,
                ..palette.success
            },
            width: 1.0,
            radius: 8.0.into(),
        },
        ..Default::default()
    }
}

/// Translucent bar pinned over the particle layer.
pub fn top_bar_style(palette: PaletteColors) -> impl Fn(&Theme) -> container::Style + Clone {
    move |_| container::Style {
        background: Some(Background::Color(Color {
            a: 0.75,
            ..palette.background
        })),
        border: Border {
            color: Color {
                a: 0.5,
                ..palette.border
            },
            width: 1.0,
            radius: 0.0.into(),
        },
        ..Default::default()
    }
}
