use crate::constants::{
    PARTICLE_ALPHA_MIN, PARTICLE_ALPHA_SPAN, PARTICLE_DENSITY, PARTICLE_DRIFT,
    PARTICLE_EDGE_MARGIN, PARTICLE_RADIUS_MIN, PARTICLE_RADIUS_SPAN, PARTICLE_RISE_MIN,
    PARTICLE_RISE_SPAN,
};
use iced::widget::canvas;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A single drifting background dot.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub radius: f32,
    pub vx: f32,
    pub vy: f32,
    pub alpha: f32,
}

impl Particle {
    /// Samples a fresh particle uniformly within the given bounds.
    fn spawn(rng: &mut StdRng, width: f32, height: f32) -> Self {
        Self {
            x: rng.gen::<f32>() * width,
            y: rng.gen::<f32>() * height,
            radius: rng.gen::<f32>() * PARTICLE_RADIUS_SPAN + PARTICLE_RADIUS_MIN,
            vx: (rng.gen::<f32>() - 0.5) * PARTICLE_DRIFT,
            vy: -(rng.gen::<f32>() * PARTICLE_RISE_SPAN + PARTICLE_RISE_MIN),
            alpha: rng.gen::<f32>() * PARTICLE_ALPHA_SPAN + PARTICLE_ALPHA_MIN,
        }
    }
}

/// State for the ambient background particle layer.
///
/// Density is held constant at one particle per `PARTICLE_DENSITY` square
/// pixels; the count invariant is re-established on every resize. Particles
/// are recycled by wrapping at the edges, never destroyed.
#[derive(Debug)]
pub struct ParticleField {
    width: f32,
    height: f32,
    pub particles: Vec<Particle>,
    rng: StdRng,
    pub cache: canvas::Cache,
}

impl ParticleField {
    pub fn new(width: f32, height: f32) -> Self {
        Self::with_rng(StdRng::from_entropy(), width, height)
    }

    /// Builds a field from a caller-supplied generator, so tests can seed it.
    pub fn with_rng(mut rng: StdRng, width: f32, height: f32) -> Self {
        let count = Self::target_count(width, height);
        let particles = (0..count)
            .map(|_| Particle::spawn(&mut rng, width, height))
            .collect();
        Self {
            width,
            height,
            particles,
            rng,
            cache: canvas::Cache::default(),
        }
    }

    /// Particle budget for the given bounds: one per 70 000 px², floored at
    /// zero so a degenerate viewport yields an empty field.
    pub fn target_count(width: f32, height: f32) -> usize {
        let count = (width * height / PARTICLE_DENSITY).round() as i64;
        count.max(0) as usize
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    pub fn height(&self) -> f32 {
        self.height
    }

    /// Adopts new bounds. Surviving particles keep their prior coordinates
    /// (they may render out of bounds for a few frames until wrap-around
    /// recycles them); only the population is topped up or truncated to the
    /// new budget.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;

        let target = Self::target_count(width, height);
        while self.particles.len() < target {
            let particle = Particle::spawn(&mut self.rng, width, height);
            self.particles.push(particle);
        }
        self.particles.truncate(target);
        self.cache.clear();
    }

    /// Advances every particle by `frames` frame-units of velocity and
    /// applies the wrap rules: exit through the top respawns at the bottom
    /// edge with a fresh x, horizontal exits teleport to the opposite edge.
    pub fn advance(&mut self, frames: f32) {
        let (width, height) = (self.width, self.height);
        let rng = &mut self.rng;

        for p in &mut self.particles {
            p.x += p.vx * frames;
            p.y += p.vy * frames;

            if p.y < -PARTICLE_EDGE_MARGIN {
                p.y = height + PARTICLE_EDGE_MARGIN;
                p.x = rng.gen::<f32>() * width;
            }
            if p.x < -PARTICLE_EDGE_MARGIN {
                p.x = width + PARTICLE_EDGE_MARGIN;
            }
            if p.x > width + PARTICLE_EDGE_MARGIN {
                p.x = -PARTICLE_EDGE_MARGIN;
            }
        }
        self.cache.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn seeded_field(width: f32, height: f32) -> ParticleField {
        ParticleField::with_rng(StdRng::seed_from_u64(7), width, height)
    }

    #[test]
    fn count_matches_viewport_density() {
        let field = seeded_field(1920.0, 1080.0);
        let expected = (1920.0_f32 * 1080.0 / 70_000.0).round() as usize;
        assert_eq!(field.particles.len(), expected);
        assert_eq!(field.particles.len(), 30);
    }

    #[test]
    fn zero_area_viewport_yields_empty_field() {
        let mut field = seeded_field(0.0, 0.0);
        assert!(field.particles.is_empty());
        // Must not panic with nothing to move
        field.advance(1.0);
    }

    #[test]
    fn count_invariant_holds_after_any_resize() {
        let mut field = seeded_field(800.0, 600.0);
        for (w, h) in [(1920.0, 1080.0), (320.0, 480.0), (0.0, 100.0), (2560.0, 1440.0)] {
            field.resize(w, h);
            assert_eq!(field.particles.len(), ParticleField::target_count(w, h));
        }
    }

    #[test]
    fn resize_keeps_surviving_positions() {
        let mut field = seeded_field(800.0, 600.0);
        let before: Vec<(f32, f32)> = field.particles.iter().map(|p| (p.x, p.y)).collect();

        // Grow: survivors keep their coordinates, newcomers are appended
        field.resize(1600.0, 1200.0);
        for (i, (x, y)) in before.iter().enumerate() {
            assert_eq!(field.particles[i].x, *x);
            assert_eq!(field.particles[i].y, *y);
        }
    }

    #[test]
    fn initial_samples_stay_in_documented_ranges() {
        let field = seeded_field(4000.0, 3000.0);
        assert!(!field.particles.is_empty());
        for p in &field.particles {
            assert!((0.0..4000.0).contains(&p.x));
            assert!((0.0..3000.0).contains(&p.y));
            assert!((0.4..2.0).contains(&p.radius));
            assert!((-0.1..0.1).contains(&p.vx));
            assert!(p.vy > -0.5 && p.vy <= -0.2);
            assert!((0.15..0.65).contains(&p.alpha));
        }
    }

    #[test]
    fn top_exit_respawns_at_bottom_with_fresh_x() {
        let mut field = seeded_field(800.0, 600.0);
        field.particles[0] = Particle {
            x: 400.0,
            y: -10.5,
            radius: 1.0,
            vx: 0.0,
            vy: -0.3,
            alpha: 0.3,
        };
        field.advance(1.0);

        let p = &field.particles[0];
        assert_eq!(p.y, 610.0);
        assert!((0.0..800.0).contains(&p.x));
    }

    #[test]
    fn horizontal_wrap_is_reflective_at_both_edges() {
        let mut field = seeded_field(800.0, 600.0);
        field.particles[0] = Particle {
            x: -10.5,
            y: 300.0,
            radius: 1.0,
            vx: -0.05,
            vy: -0.3,
            alpha: 0.3,
        };
        field.particles[1] = Particle {
            x: 810.5,
            y: 300.0,
            radius: 1.0,
            vx: 0.05,
            vy: -0.3,
            alpha: 0.3,
        };
        field.advance(1.0);

        assert_eq!(field.particles[0].x, 810.0);
        assert_eq!(field.particles[1].x, -10.0);
    }

    #[test]
    fn advance_moves_by_velocity() {
        let mut field = seeded_field(800.0, 600.0);
        field.particles[0] = Particle {
            x: 100.0,
            y: 200.0,
            radius: 1.0,
            vx: 0.1,
            vy: -0.4,
            alpha: 0.3,
        };
        field.advance(2.0);

        let p = &field.particles[0];
        assert!((p.x - 100.2).abs() < 1e-4);
        assert!((p.y - 199.2).abs() < 1e-4);
    }
}
