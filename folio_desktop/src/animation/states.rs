use super::Spring;
use crate::constants::{NAV_SPRING_DAMPING, NAV_SPRING_STIFFNESS};
use iced::widget::canvas;

/// State for the sliding navigation panel.
#[derive(Debug)]
pub struct NavMenuState {
    pub spring: Spring,
    pub cache: canvas::Cache,
}

impl Default for NavMenuState {
    fn default() -> Self {
        Self {
            spring: Spring::new(NAV_SPRING_STIFFNESS, NAV_SPRING_DAMPING),
            cache: canvas::Cache::default(),
        }
    }
}

impl NavMenuState {
    /// Updates the panel animation. Returns true if still animating.
    pub fn update(&mut self) -> bool {
        let animating = self.spring.update();
        if animating {
            self.cache.clear();
        }
        animating
    }

    pub fn toggle(&mut self) {
        if self.is_open() {
            self.close();
        } else {
            self.open();
        }
    }

    pub fn open(&mut self) {
        self.spring.set_target(1.0);
    }

    pub fn close(&mut self) {
        self.spring.set_target(0.0);
    }

    /// Returns true if the panel is open or opening.
    pub fn is_open(&self) -> bool {
        self.spring.is_open()
    }

    /// Returns the current animation progress (0.0 to 1.0).
    pub fn progress(&self) -> f32 {
        self.spring.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_open_state() {
        let mut nav = NavMenuState::default();
        assert!(!nav.is_open());
        nav.toggle();
        assert!(nav.is_open());
        nav.toggle();
        assert!(!nav.is_open());
    }

    #[test]
    fn close_is_idempotent() {
        let mut nav = NavMenuState::default();
        nav.open();
        nav.close();
        nav.close();
        assert!(!nav.is_open());
    }
}
