//! Uniform and weighted sampling primitives for system generation.
//!
//! All draws go through an injected [`ChaChaRng`] so generation is fully
//! reproducible from a seed; nothing here touches a global RNG.

use std::f64::consts::TAU;

use nalgebra::Vector2;
use rand::Rng;
use rand_chacha::ChaChaRng;

/// Uniform integer in `[min, max)`.
pub fn integer(rng: &mut ChaChaRng, min: u64, max: u64) -> u64 {
    rng.random_range(min..max)
}

/// Integer in `[1, max]` with probability proportional to the value.
///
/// Draws a uniform value in `[0, max·(max+1)/2)` and scans cumulative
/// weights `1, 2, 3, …` until one trips. The scan covers `1..max`; whatever
/// mass is left lands on `max` itself.
///
/// # Example
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaChaRng;
///
/// let mut rng = ChaChaRng::seed_from_u64(7);
/// let n = cosmogony::sampling::sawtooth(&mut rng, 4);
/// assert!((1..=4).contains(&n));
/// ```
pub fn sawtooth(rng: &mut ChaChaRng, max: u64) -> u64 {
    let value = rng.random_range(0..max * (max + 1) / 2);
    let mut total = 0;
    for i in 1..max {
        total += i;
        if value < total {
            return i;
        }
    }
    max
}

/// Sum of `count` independent [`integer`] draws from `[min, max)`.
pub fn sum(rng: &mut ChaChaRng, min: u64, max: u64, count: u32) -> u64 {
    (0..count).map(|_| integer(rng, min, max)).sum()
}

/// Random direction on the unit circle: uniform angle, `(cos θ, sin θ)`.
pub fn unit_vector(rng: &mut ChaChaRng) -> Vector2<f64> {
    let angle = rng.random::<f64>() * TAU;
    Vector2::new(angle.cos(), angle.sin())
}
