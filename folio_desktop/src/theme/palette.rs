use folio_core::utils::config::{THEME_DARK, THEME_LIGHT};
use iced::Color;

/// Theme mode enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    Light,
    #[default]
    Dark,
}

impl ThemeMode {
    /// The persisted name: exactly the string written to the config file.
    pub fn name(&self) -> &'static str {
        match self {
            ThemeMode::Light => THEME_LIGHT,
            ThemeMode::Dark => THEME_DARK,
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "light" => Some(ThemeMode::Light),
            "dark" => Some(ThemeMode::Dark),
            _ => None,
        }
    }

    /// The other mode: light <-> dark.
    pub fn toggled(&self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::Light,
        }
    }
}

/// Core color palette for the showcase.
#[derive(Debug, Clone, Copy)]
pub struct PaletteColors {
    pub background: Color,
    pub surface: Color,
    pub surface_raised: Color,
    pub border: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub success: Color,
    pub danger: Color,
    /// Particle / glare tint.
    pub glow: Color,
    pub shadow: Color,
}

impl Default for PaletteColors {
    fn default() -> Self {
        Self::dark()
    }
}

impl PaletteColors {
    /// Light theme palette
    pub fn light() -> Self {
        Self {
            background: Color::from_rgb8(245, 249, 252),
            surface: Color::from_rgb8(234, 241, 247),
            surface_raised: Color::from_rgb8(255, 255, 255),
            border: Color::from_rgb8(198, 212, 224),
            text: Color::from_rgb8(18, 32, 44),
            muted: Color::from_rgb8(100, 116, 132),
            accent: Color::from_rgb8(20, 130, 180),
            success: Color::from_rgb8(36, 150, 90),
            danger: Color::from_rgb8(205, 60, 60),
            glow: Color::from_rgb8(40, 90, 130),
            shadow: Color::from_rgb8(10, 20, 30),
        }
    }

    /// Dark theme palette
    pub fn dark() -> Self {
        Self {
            background: Color::from_rgb8(7, 12, 18),
            surface: Color::from_rgb8(13, 21, 30),
            surface_raised: Color::from_rgb8(20, 30, 42),
            border: Color::from_rgb8(40, 58, 76),
            text: Color::from_rgb8(226, 238, 246),
            muted: Color::from_rgb8(130, 150, 166),
            accent: Color::from_rgb8(90, 200, 250),
            success: Color::from_rgb8(90, 220, 140),
            danger: Color::from_rgb8(250, 110, 110),
            glow: Color::from_rgb8(230, 250, 255),
            shadow: Color::from_rgb8(10, 20, 30),
        }
    }

    /// Create palette from theme mode
    pub fn from_theme_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Light => Self::light(),
            ThemeMode::Dark => Self::dark(),
        }
    }
}

/// Returns palette for a specific theme mode
pub fn palette_from_mode(mode: ThemeMode) -> PaletteColors {
    PaletteColors::from_theme_mode(mode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_round_trips_through_from_name() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(ThemeMode::from_name(mode.name()), Some(mode));
        }
    }

    #[test]
    fn from_name_is_case_insensitive() {
        assert_eq!(ThemeMode::from_name("LIGHT"), Some(ThemeMode::Light));
        assert_eq!(ThemeMode::from_name("Dark"), Some(ThemeMode::Dark));
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(ThemeMode::from_name("black"), None);
        assert_eq!(ThemeMode::from_name(""), None);
    }

    #[test]
    fn toggled_is_an_involution() {
        for mode in [ThemeMode::Light, ThemeMode::Dark] {
            assert_eq!(mode.toggled().toggled(), mode);
            assert_ne!(mode.toggled(), mode);
        }
    }
}
