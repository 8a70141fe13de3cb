use super::palette::{palette_from_mode, ThemeMode};
use iced::{theme, Theme};

/// Creates the Iced theme for the given mode.
///
/// Applying the same mode twice produces an identical theme; all palette
/// state derives from the mode alone.
pub fn app_theme_with_mode(mode: ThemeMode) -> Theme {
    let p = palette_from_mode(mode);
    Theme::custom(
        format!("Folio {}", mode.name()),
        theme::Palette {
            background: p.background,
            text: p.text,
            primary: p.accent,
            success: p.success,
            danger: p.danger,
            ..theme::Palette::DARK
        },
    )
}
