//! Folio Desktop - An animated portfolio showcase built with Iced.

pub mod animation;
pub mod canvas;
pub mod constants;
pub mod form;
pub mod styles;
pub mod theme;

pub use animation::{NavMenuState, Particle, ParticleField, RevealTracker, Spring, TiltCardState, TiltTransform, Typewriter};
pub use constants::*;
pub use form::ContactForm;
pub use styles::*;
pub use theme::{app_theme_with_mode, palette_from_mode, PaletteColors, ThemeMode};
