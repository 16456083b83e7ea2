use std::f32::consts::TAU;

use bevy::prelude::*;
use rand::{Rng, SeedableRng, rngs::StdRng};

// rejection happens ~21.5% of the time, so 64 misses in a row means a broken rng.
const MAX_REJECTIONS: usize = 64;

/// Source of randomness for every confetti burst.
///
/// Seeded from OS entropy by default. Insert [`ConfettiRng::seeded`] to make
/// bursts reproducible.
#[derive(Resource)]
pub struct ConfettiRng(pub StdRng);

impl Default for ConfettiRng {
    fn default() -> Self {
        Self(StdRng::from_entropy())
    }
}

impl ConfettiRng {
    /// Creates a deterministic generator from a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }
}

/// Returns a sample from a normal distribution with the given mean and standard deviation.
///
/// Uses the Marsaglia polar method: a point is drawn uniformly from the square
/// `[-1, 1]²` and rejected until it lies inside the unit circle (excluding the
/// origin). The rejection loop is capped; if the cap is ever reached, a plain
/// Box-Muller sample is returned instead.
pub fn rand_norm(rng: &mut impl Rng, mean: f32, std_dev: f32) -> f32 {
    for _ in 0..MAX_REJECTIONS {
        let x: f32 = rng.gen_range(-1.0..=1.0);
        let y: f32 = rng.gen_range(-1.0..=1.0);
        let r = x * x + y * y;
        if r > 1.0 || r == 0.0 {
            continue;
        }
        return mean + std_dev * x * (-2.0 * r.ln() / r).sqrt();
    }

    mean + std_dev * box_muller(rng)
}

fn box_muller(rng: &mut impl Rng) -> f32 {
    // 1 - [0, 1) keeps u1 away from zero
    let u1 = 1.0 - rng.r#gen::<f32>();
    let u2 = rng.r#gen::<f32>();
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Returns a uniformly distributed index in `0..len`, or `None` if `len` is zero.
pub fn rand_index(rng: &mut impl Rng, len: usize) -> Option<usize> {
    (len > 0).then(|| rng.gen_range(0..len))
}

/// Returns a uniformly distributed angle in `[0, 360)` degrees.
pub fn rand_degrees(rng: &mut impl Rng) -> f32 {
    rng.gen_range(0.0..360.0)
}
