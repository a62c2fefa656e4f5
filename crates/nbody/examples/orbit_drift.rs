//! Single circular orbit under the explicit integrator.
//!
//! Shows the energy error the first-order scheme accumulates at the
//! animation host's 0.05 timestep. The drift is expected, not a bug.
//!
//! Run with: cargo run --package nbody --example orbit_drift

use nalgebra::{Point2, Vector2};
use nbody::forces::{DirectGravity, ForceModel};
use nbody::integrator::{Euler, Integrator};
use nbody::state::SimState;

fn main() {
    let mut state = SimState::new();

    // Heavy primary at the origin, light satellite on a circular orbit:
    // v = sqrt(m / r) with G = 1.
    let primary_mass: f64 = 10_000.0;
    let r: f64 = 100.0;
    let v = (primary_mass / r).sqrt();
    state.add_body(primary_mass, Point2::new(0.0, 0.0), Vector2::zeros());
    state.add_body(1.0, Point2::new(r, 0.0), Vector2::new(0.0, v));

    let force = DirectGravity::new();
    let initial_energy = state.kinetic_energy() + force.potential_energy(&state);

    println!("Circular orbit: r = {}, v = {:.3}", r, v);
    println!("Initial energy: {:.6}", initial_energy);
    println!();

    let dt = 0.05;
    let steps_per_report = 1_000;
    for _ in 0..10 {
        Euler.integrate(&mut state, dt, steps_per_report, &force);

        let energy = state.kinetic_energy() + force.potential_energy(&state);
        let error = (energy - initial_energy) / initial_energy.abs();
        let satellite = &state.bodies[1];
        println!(
            "t = {:7.1}  r = {:8.3}  energy error = {:+.3e}",
            state.time,
            satellite.distance_to(&state.bodies[0]),
            error
        );
    }
}
