//! Background particle field.
//!
//! Particle placement is a pure function of `(seed, count)` so the same seed
//! always draws the same sky.

use rand::prelude::*;
use rand_pcg::Mcg128Xsl64;
use serde::{Deserialize, Serialize};
use tracing::warn;

pub const DEFAULT_PARTICLE_COUNT: usize = 30;

/// Upper bound on a generated field.
pub const MAX_PARTICLE_COUNT: usize = 1_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Particle {
    pub id: usize,
    /// Horizontal position, percent of viewport
    pub x: f64,
    /// Vertical position, percent of viewport
    pub y: f64,
    /// Diameter in px, [1, 3)
    pub size: f64,
    /// Float cycle length in seconds, [10, 25)
    pub duration: f64,
    /// Start delay in seconds, [0, 5)
    pub delay: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParticleField {
    pub seed: u64,
    pub particles: Vec<Particle>,
}

impl ParticleField {
    /// Field of `count` particles, capped at [`MAX_PARTICLE_COUNT`].
    pub fn generate(seed: u64, count: usize) -> Self {
        if count > MAX_PARTICLE_COUNT {
            warn!(count, max = MAX_PARTICLE_COUNT, "particle count capped");
        }
        let count = count.min(MAX_PARTICLE_COUNT);
        let mut rng = Mcg128Xsl64::seed_from_u64(seed);
        let particles = (0..count)
            .map(|id| Particle {
                id,
                x: rng.gen_range(0.0..100.0),
                y: rng.gen_range(0.0..100.0),
                size: rng.gen_range(1.0..3.0),
                duration: rng.gen_range(10.0..25.0),
                delay: rng.gen_range(0.0..5.0),
            })
            .collect();
        Self { seed, particles }
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }
}
