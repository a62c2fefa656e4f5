//! The body tree: recursive mass partitioning across generation tiers.
//!
//! A system is a tree of [`Body`] nodes, one star owning planets owning
//! moons. [`Body::split`] partitions mass top-down; the orbit solver and the
//! placement pass then fill in the remaining fields. After those passes the
//! topology is immutable; only the simulation's flat copies of position and
//! velocity keep changing.

use nalgebra::{Point2, Vector2};
use rand_chacha::ChaChaRng;

use crate::sampling;

/// Mass denominator between a parent and one unit of child mass.
///
/// A child receives `integer(1, 8)` units of `parent.mass / TIER_FACTOR`,
/// i.e. between ~0.4% and ~2.7% of its parent. The root star's mass is
/// `TIER_FACTOR²` so that even two levels of partitioning leave moons with
/// mass comfortably above unity.
pub const TIER_FACTOR: f64 = 256.0;

/// Generation depth label controlling child counts and termination.
///
/// Tier decreases by exactly one per level: the root is a [`Tier::Star`],
/// its children are planets, their children are moons, and moons end the
/// recursion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tier {
    /// Terminal tier: never spawns children.
    Moon,
    Planet,
    Star,
}

impl Tier {
    /// How many children a body of this tier spawns.
    ///
    /// Stars host 3–6 planets (`sum(1, 3, 3)`); planets host a single moon
    /// one time in three (`2 − sawtooth(2)`); moons host nothing.
    pub fn child_count(self, rng: &mut ChaChaRng) -> u64 {
        match self {
            Tier::Moon => 0,
            Tier::Planet => 2 - sampling::sawtooth(rng, 2),
            Tier::Star => sampling::sum(rng, 1, 3, 3),
        }
    }

    /// The tier this tier's children belong to.
    fn below(self) -> Tier {
        match self {
            Tier::Star => Tier::Planet,
            _ => Tier::Moon,
        }
    }
}

/// One gravitating body and the subtree it exclusively owns.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    /// Own mass.
    pub mass: f64,
    /// Mass of this body plus all descendants.
    pub group_mass: f64,
    /// Physical radius, derived as `mass^(1/3)`; never set independently.
    pub radius: f64,
    /// Satellites, ordered innermost-first once orbits are solved.
    pub children: Vec<Body>,
    /// Gravitational acceleration at the outer edge of this body's zone of
    /// orbital stability; filled in bottom-up by the orbit solver.
    pub influence_accel: f64,
    /// Orbit radius relative to the immediate parent (0 for the root).
    pub orbit_radius: f64,
    /// Circular orbit speed relative to the immediate parent (0 for the root).
    pub orbit_velocity: f64,
    /// Absolute position, assigned top-down by the placement pass.
    pub position: Point2<f64>,
    /// Absolute velocity, assigned top-down by the placement pass.
    pub velocity: Vector2<f64>,
}

impl Body {
    /// Creates a childless body of the given mass, at rest at the origin.
    ///
    /// # Example
    /// ```
    /// let body = cosmogony::Body::new(8.0);
    /// assert_eq!(body.radius, 2.0);
    /// assert_eq!(body.group_mass, body.mass);
    /// ```
    pub fn new(mass: f64) -> Self {
        Body {
            mass,
            group_mass: mass,
            radius: mass.cbrt(),
            children: Vec::new(),
            influence_accel: 0.0,
            orbit_radius: 0.0,
            orbit_velocity: 0.0,
            position: Point2::origin(),
            velocity: Vector2::zeros(),
        }
    }

    /// Recursively partitions mass into children at the tier below.
    ///
    /// Each child receives a random fraction of this body's mass and then
    /// splits itself one tier further down. `group_mass` picks up every
    /// child's final subtree mass, so `group_mass == mass + Σ
    /// child.group_mass` holds across the whole tree once the call returns.
    pub fn split(&mut self, rng: &mut ChaChaRng, tier: Tier) {
        let extra_children = tier.child_count(rng);
        if extra_children == 0 {
            return;
        }

        for _ in 0..extra_children {
            let child_mass = sampling::integer(rng, 1, 8) as f64 * self.mass / TIER_FACTOR;
            let mut child = Body::new(child_mass);

            child.split(rng, tier.below());
            self.group_mass += child.group_mass;
            self.children.push(child);
        }
    }

    /// Pre-order traversal: self, then each child's traversal in order.
    ///
    /// This ordering is both the simulation's working set and the
    /// serialization order.
    pub fn all_bodies(&self) -> Vec<&Body> {
        let mut bodies = Vec::new();
        self.collect(&mut bodies);
        bodies
    }

    fn collect<'a>(&'a self, bodies: &mut Vec<&'a Body>) {
        bodies.push(self);
        for child in &self.children {
            child.collect(bodies);
        }
    }
}
