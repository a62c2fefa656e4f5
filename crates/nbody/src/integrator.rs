//! Time integration for the simulation working set.

use nalgebra::Vector2;

use crate::forces::ForceModel;
use crate::state::SimState;

/// Advances the state by fixed timesteps using a force model.
pub trait Integrator: Send + Sync {
    /// Advance the state by one timestep.
    fn step(&self, state: &mut SimState, dt: f64, force: &dyn ForceModel);

    /// Advance the state by `n_steps` timesteps and return the final time.
    fn integrate(
        &self,
        state: &mut SimState,
        dt: f64,
        n_steps: usize,
        force: &dyn ForceModel,
    ) -> f64 {
        for _ in 0..n_steps {
            self.step(state, dt, force);
        }
        state.time
    }
}

/// Explicit first-order integrator.
///
/// One step runs in two passes over the working set: accelerations are
/// evaluated at the current positions and every velocity advances first
/// (`v += a·dt`), then every position advances with its already-updated
/// velocity (`x += v·dt`). Velocities finish before any position changes.
///
/// First order in `dt` and not energy-conserving: over long runs total
/// energy drifts, visibly so for the 0.05-per-frame steps the animation
/// host uses. That growth is expected behavior and left uncorrected.
pub struct Euler;

impl Integrator for Euler {
    fn step(&self, state: &mut SimState, dt: f64, force: &dyn ForceModel) {
        let accelerations: Vec<Vector2<f64>> = (0..state.bodies.len())
            .map(|i| force.acceleration(i, state))
            .collect();

        state
            .bodies
            .iter_mut()
            .zip(accelerations.iter())
            .for_each(|(body, accel)| {
                body.velocity += accel * dt;
            });

        state.bodies.iter_mut().for_each(|body| {
            body.position += body.velocity * dt;
        });

        state.time += dt;
    }
}
