use nalgebra::{Point2, Vector2};

use crate::body::{Body, BodyId};

/// Complete state of the simulation at a given time.
///
/// Bodies are added once at startup and the set never changes afterwards:
/// indices and ids are stable for the life of the simulation, and only
/// positions and velocities mutate, one fixed step per frame.
#[derive(Debug, Clone)]
pub struct SimState {
    /// Elapsed simulated time (step count × timestep).
    pub time: f64,
    /// Flat working set, in insertion order.
    pub bodies: Vec<Body>,
    next_id: u32,
}

impl SimState {
    /// Creates an empty simulation at t = 0.
    pub fn new() -> Self {
        Self {
            time: 0.0,
            bodies: Vec::new(),
            next_id: 0,
        }
    }

    /// Appends a body and returns its id.
    ///
    /// The radius is derived from the mass; insertion order is the
    /// permanent index order.
    pub fn add_body(&mut self, mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> BodyId {
        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body::new(id, mass, position, velocity));
        id
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn total_mass(&self) -> f64 {
        self.bodies.iter().map(|b| b.mass).sum()
    }

    /// Net momentum of the working set. Useful for watching numerical
    /// drift: pairwise gravity preserves this up to rounding.
    pub fn total_momentum(&self) -> Vector2<f64> {
        self.bodies
            .iter()
            .map(|b| b.momentum())
            .fold(Vector2::zeros(), |acc, p| acc + p)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.bodies.iter().map(|b| b.kinetic_energy()).sum()
    }

    /// Largest distance of any body from the origin.
    pub fn max_origin_distance(&self) -> f64 {
        self.bodies
            .iter()
            .map(|b| b.origin_distance())
            .fold(0.0, f64::max)
    }
}

impl Default for SimState {
    fn default() -> Self {
        Self::new()
    }
}
