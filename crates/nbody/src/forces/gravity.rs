//! Direct all-pairs gravity (O(N²)).

use nalgebra::Vector2;

use crate::forces::{ForceModel, G};
use crate::state::SimState;

/// Direct O(N²) gravitational force: every body attracts every other with
/// `G·m / d²` along the separation vector.
///
/// The softening length defaults to zero, which means a coincident pair
/// divides by zero and floods the affected bodies with non-finite state.
/// That is deliberate: close encounters are not detected or recovered, and
/// whatever the arithmetic produces propagates into later frames.
pub struct DirectGravity {
    /// Optional softening length; 0 leaves singularities unguarded.
    pub softening: f64,
}

impl DirectGravity {
    /// Gravity with no softening.
    pub fn new() -> Self {
        Self { softening: 0.0 }
    }

    /// Gravity with the given softening length.
    pub fn with_softening(softening: f64) -> Self {
        Self { softening }
    }
}

impl Default for DirectGravity {
    fn default() -> Self {
        Self::new()
    }
}

impl ForceModel for DirectGravity {
    fn acceleration(&self, idx: usize, state: &SimState) -> Vector2<f64> {
        let body = &state.bodies[idx];
        let eps2 = self.softening * self.softening;

        state
            .bodies
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != idx)
            .map(|(_, other)| {
                let dr = other.position - body.position;
                let dist2 = dr.magnitude_squared() + eps2;
                let dist = dist2.sqrt();
                dr * (G * other.mass / (dist2 * dist))
            })
            .fold(Vector2::zeros(), |acc, a| acc + a)
    }

    fn potential_energy(&self, state: &SimState) -> f64 {
        let eps2 = self.softening * self.softening;

        state
            .bodies
            .iter()
            .enumerate()
            .flat_map(|(i, a)| {
                state.bodies[i + 1..].iter().map(move |b| {
                    let dist = ((a.position - b.position).magnitude_squared() + eps2).sqrt();
                    -G * a.mass * b.mass / dist
                })
            })
            .sum()
    }
}
