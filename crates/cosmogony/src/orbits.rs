//! Bottom-up orbit solving.
//!
//! Sibling orbits are spaced using a sphere-of-influence boundary: a child's
//! orbit must clear both the previous orbit and the separation at which the
//! parent's and the child's gravitational fields fall to the weaker of the
//! two border accelerations. Speeds are circular-orbit speeds around the
//! mass enclosed inside the orbit. G = 1 throughout.

use crate::body::Body;

/// Fractional margin applied beyond the minimum stable separation when
/// spacing consecutive orbits.
pub const ORBIT_SPACING: f64 = 1.5;

/// Solves orbit radius, circular speed, and influence acceleration for every
/// body in the tree, children before parents.
///
/// For each child in order:
/// the border acceleration is the weaker of the previous orbit's outer field
/// and the child's own influence field; the minimum stable separation is the
/// sum of the radii at which parent and child gravity each equal that
/// border; the child lands `ORBIT_SPACING` times the remaining gap beyond
/// the previous orbit, moving at the circular speed for the mass already
/// enclosed. The running border then advances to the outer edge of the
/// child's own sphere of influence, and whatever is left after the last
/// child becomes this body's `influence_accel`.
pub fn compute_orbits(body: &mut Body) {
    let surface_accel = body.mass / (body.radius * body.radius);

    if body.children.is_empty() {
        body.influence_accel = surface_accel;
        return;
    }

    let parent_mass = body.mass;
    let mut inner_mass = body.mass;
    let mut prev_radius = body.radius;
    let mut prev_border_accel = surface_accel;

    for child in &mut body.children {
        compute_orbits(child);

        let border_accel = prev_border_accel.min(child.influence_accel);
        let min_orbit_radius =
            (parent_mass / border_accel).sqrt() + (child.mass / border_accel).sqrt();
        child.orbit_radius = prev_radius + (min_orbit_radius - prev_radius) * ORBIT_SPACING;
        child.orbit_velocity = (inner_mass / child.orbit_radius).sqrt();

        inner_mass += child.group_mass;
        prev_radius = child.orbit_radius;
        prev_border_accel = influence_border_accel(parent_mass, child.mass, child.orbit_radius);
    }

    body.influence_accel = prev_border_accel;
}

/// Acceleration at the outer edge of a child's sphere of influence.
///
/// With the child on a circular orbit of radius `x2` around a primary of
/// mass `m1`, solves `(m2 − m1)x² + 2·m1·x2·x − m1·x2² = 0` for the point
/// beyond the orbit where the primary's and the child's pulls sit in a fixed
/// ratio, taking the `(−b − √(b²−4ac)) / 2a` root, and returns the primary's
/// acceleration `m1 / x²` there. That value bounds how tightly the next
/// sibling orbit can be packed.
///
/// The quadratic is left unguarded: `m2 == m1` zeroes the leading
/// coefficient (the root runs to −∞ and the returned acceleration to 0),
/// and `m2 > m1` can make the root non-physical. Tier-based partitioning
/// keeps children far lighter than their parents, so generated trees never
/// hit either case; hand-built ones can, and the degenerate values propagate
/// unchanged into subsequent orbit radii.
pub(crate) fn influence_border_accel(m1: f64, m2: f64, x2: f64) -> f64 {
    let a = m2 - m1;
    let b = 2.0 * m1 * x2;
    let c = -m1 * x2 * x2;
    let x = (-b - (b * b - 4.0 * a * c).sqrt()) / (2.0 * a);

    m1 / (x * x)
}
