use crate::constants::{
    HOVER_TICK_INCREMENT, TILT_MAX_ROTATE_DEG, TILT_MAX_TRANSLATE, TILT_SHADOW_FACTOR,
};
use iced::widget::canvas;
use iced::{Point, Size, Vector};

/// Perspective transform derived from a contact point over a card.
///
/// Angles are in degrees; `shadow_offset` is the directional drop-shadow
/// displacement in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TiltTransform {
    pub rotate_x: f32,
    pub rotate_y: f32,
    pub translate_z: f32,
    pub shadow_offset: Vector,
}

impl TiltTransform {
    /// The resting transform: no rotation, no depth, no shadow offset.
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        translate_z: 0.0,
        shadow_offset: Vector::new(0.0, 0.0),
    };

    /// Computes the transform for a contact point normalized to
    /// (px, py) ∈ [-0.5, 0.5]² relative to the card center.
    pub fn from_normalized(px: f32, py: f32) -> Self {
        let px = px.clamp(-0.5, 0.5);
        let py = py.clamp(-0.5, 0.5);

        let rotate_x = -py * TILT_MAX_ROTATE_DEG;
        let rotate_y = px * TILT_MAX_ROTATE_DEG;
        let translate_z = (px.abs() + py.abs()) * TILT_MAX_TRANSLATE;

        Self {
            rotate_x,
            rotate_y,
            translate_z,
            shadow_offset: Vector::new(
                -rotate_y * TILT_SHADOW_FACTOR,
                rotate_x * TILT_SHADOW_FACTOR,
            ),
        }
    }

    /// Normalizes a widget-local contact point against the card bounds.
    /// Degenerate bounds resolve to the neutral transform.
    pub fn from_contact(point: Point, bounds: Size) -> Self {
        if bounds.width <= 0.0 || bounds.height <= 0.0 {
            return Self::NEUTRAL;
        }
        Self::from_normalized(
            point.x / bounds.width - 0.5,
            point.y / bounds.height - 0.5,
        )
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }
}

/// State for one tilt-responsive card.
///
/// Pointer and touch contacts feed the same path; nothing persists between
/// interactions — leaving the card always restores `TiltTransform::NEUTRAL`.
#[derive(Debug, Default)]
pub struct TiltCardState {
    pub transform: TiltTransform,
    pub is_hovered: bool,
    pub hover_tick: f32,
    pub cache: canvas::Cache,
}

impl Default for TiltTransform {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

impl TiltCardState {
    /// Updates the card hover pulse. Returns true while a redraw is needed.
    pub fn update(&mut self) -> bool {
        if self.is_hovered {
            self.hover_tick += HOVER_TICK_INCREMENT;
            true
        } else {
            false
        }
    }

    /// Sets the hover state; leaving resets the transform to neutral.
    pub fn set_hovered(&mut self, hovered: bool) {
        self.is_hovered = hovered;
        if !hovered {
            self.hover_tick = 0.0;
            self.transform = TiltTransform::NEUTRAL;
            self.cache.clear();
        }
    }

    /// Feeds a widget-local contact point (mouse or touch) into the tilt.
    pub fn set_contact(&mut self, point: Point, bounds: Size) {
        self.transform = TiltTransform::from_contact(point, bounds);
        self.cache.clear();
    }

    /// Clears the canvas cache for redraw.
    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rotation_stays_within_half_max_rotate() {
        let mut corner = -0.5_f32;
        while corner <= 0.5 {
            let mut other = -0.5_f32;
            while other <= 0.5 {
                let t = TiltTransform::from_normalized(corner, other);
                assert!(t.rotate_x.abs() <= 6.0 + f32::EPSILON);
                assert!(t.rotate_y.abs() <= 6.0 + f32::EPSILON);
                other += 0.125;
            }
            corner += 0.125;
        }
    }

    #[test]
    fn center_contact_is_neutral() {
        let t = TiltTransform::from_contact(Point::new(50.0, 50.0), Size::new(100.0, 100.0));
        assert!(t.is_neutral());
    }

    #[test]
    fn corner_contact_maxes_rotation_and_depth() {
        let t = TiltTransform::from_contact(Point::new(100.0, 0.0), Size::new(100.0, 100.0));
        assert!((t.rotate_y - 6.0).abs() < 1e-4);
        assert!((t.rotate_x - 6.0).abs() < 1e-4);
        assert!((t.translate_z - 10.0).abs() < 1e-4);
    }

    #[test]
    fn shadow_tracks_rotation_direction() {
        let t = TiltTransform::from_normalized(0.25, -0.25);
        assert!((t.shadow_offset.x - (-t.rotate_y * 1.6)).abs() < 1e-5);
        assert!((t.shadow_offset.y - (t.rotate_x * 1.6)).abs() < 1e-5);
    }

    #[test]
    fn out_of_bounds_contact_is_clamped() {
        let t = TiltTransform::from_contact(Point::new(250.0, -40.0), Size::new(100.0, 100.0));
        assert!((t.rotate_y - 6.0).abs() < 1e-4);
        assert!((t.rotate_x - 6.0).abs() < 1e-4);
    }

    #[test]
    fn degenerate_bounds_resolve_neutral() {
        let t = TiltTransform::from_contact(Point::new(10.0, 10.0), Size::new(0.0, 0.0));
        assert!(t.is_neutral());
    }

    #[test]
    fn leaving_always_resets_to_neutral() {
        let mut card = TiltCardState::default();
        card.set_hovered(true);
        card.set_contact(Point::new(90.0, 10.0), Size::new(100.0, 100.0));
        assert!(!card.transform.is_neutral());

        card.set_hovered(false);
        assert!(card.transform.is_neutral());
        assert_eq!(card.hover_tick, 0.0);
    }
}
