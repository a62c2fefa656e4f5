//! Top-down position and velocity assignment.
//!
//! Children land on a random orbital phase with tangential velocity, then
//! the whole level is shifted so the subtree's barycenter and net momentum
//! coincide with the state the parent's pass assigned to this body. The same
//! correction runs at every depth, so nested subtrees compose without drift:
//! seen from outside, a subtree is a point mass.

use nalgebra::Vector2;
use rand_chacha::ChaChaRng;

use crate::body::Body;
use crate::sampling;

/// Converts relative orbit parameters into absolute positions and velocities
/// for the whole tree under `body`.
///
/// Each child draws its own orbital phase, so sibling phases are
/// independent; handedness is fixed (the velocity is the radial unit vector
/// rotated −90°).
pub fn compute_positions(body: &mut Body, rng: &mut ChaChaRng) {
    if body.children.is_empty() {
        return;
    }

    let origin = body.position;
    let base_velocity = body.velocity;

    for child in &mut body.children {
        let u = sampling::unit_vector(rng);
        child.position = origin + u * child.orbit_radius;
        child.velocity = base_velocity + Vector2::new(u.y, -u.x) * child.orbit_velocity;
    }

    // Re-center: the mass-weighted centroid of this body and its children
    // must equal the position the parent's pass assigned to this body.
    let mut weighted = body.position.coords * body.mass;
    for child in &body.children {
        weighted += child.position.coords * child.group_mass;
    }
    let barycenter = weighted / body.group_mass;

    let delta_pos = body.position.coords - barycenter;
    body.position += delta_pos;
    for child in &mut body.children {
        child.position += delta_pos;
    }

    // Same correction on velocities, preserving this body's momentum as the
    // subtree's net contribution seen from the parent level.
    let mut momentum = body.velocity * body.mass;
    for child in &body.children {
        momentum += child.velocity * child.group_mass;
    }

    let delta_vel = body.velocity - momentum / body.group_mass;
    body.velocity += delta_vel;
    for child in &mut body.children {
        child.velocity += delta_vel;
    }

    for child in &mut body.children {
        compute_positions(child, rng);
    }
}
