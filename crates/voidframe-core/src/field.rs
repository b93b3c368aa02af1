//! The bouncing node cloud in the middle of the display, plus the proximity
//! scan that produces the link web between nearby nodes.

use crate::config::{FIELD_HALF_EXTENT, LINK_DISTANCE, PARTICLE_COUNT, SPAWN_SPREAD, SPEED_LIMIT};
use crate::rng::RandomSource;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
}

/// A link segment between two particle positions.
pub type Link = ((f64, f64), (f64, f64));

pub struct ParticleField {
    particles: Vec<Particle>,
    center: (f64, f64),
}

impl ParticleField {
    /// Spawn [`PARTICLE_COUNT`] particles around `center`. Spawn offsets are
    /// whole pixels while velocities are real-valued; both match the shipped
    /// look.
    pub fn new(center: (f64, f64), rng: &mut dyn RandomSource) -> Self {
        let particles = (0..PARTICLE_COUNT)
            .map(|_| Particle {
                x: center.0 + rng.int_between(-SPAWN_SPREAD, SPAWN_SPREAD) as f64,
                y: center.1 + rng.int_between(-SPAWN_SPREAD, SPAWN_SPREAD) as f64,
                vx: rng.float_between(-SPEED_LIMIT, SPEED_LIMIT),
                vy: rng.float_between(-SPEED_LIMIT, SPEED_LIMIT),
            })
            .collect();
        Self { particles, center }
    }

    /// Field with explicit contents, for tests.
    pub fn with_particles(center: (f64, f64), particles: Vec<Particle>) -> Self {
        Self { particles, center }
    }

    /// Euler step, then per-axis containment against the post-step position.
    /// Leaving the box on an axis flips that axis's velocity; both axes can
    /// flip in the same tick. Position is never pulled back inside, so a
    /// fast particle visibly overshoots before turning. That overshoot is
    /// part of the shipped motion and is kept as-is.
    pub fn advance(&mut self) {
        for p in &mut self.particles {
            p.x += p.vx;
            p.y += p.vy;
            if (p.x - self.center.0).abs() > FIELD_HALF_EXTENT {
                p.vx = -p.vx;
            }
            if (p.y - self.center.1).abs() > FIELD_HALF_EXTENT {
                p.vy = -p.vy;
            }
        }
    }

    /// All-pairs proximity scan over the current snapshot; mutates nothing.
    /// At 40 particles this is 1600 distance checks per frame, cheap enough
    /// that no spatial index is warranted. Ordered pairs are reported both
    /// ways and every particle links to itself at distance zero; the
    /// duplicates overlap exactly on screen, so deduplicating would change
    /// nothing visible. Kept for fidelity with the shipped renderer.
    pub fn links(&self) -> Vec<Link> {
        let mut links = Vec::new();
        for a in &self.particles {
            for b in &self.particles {
                let dist = (a.x - b.x).hypot(a.y - b.y);
                if dist < LINK_DISTANCE {
                    links.push(((a.x, a.y), (b.x, b.y)));
                }
            }
        }
        links
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn center(&self) -> (f64, f64) {
        self.center
    }
}
