use nalgebra::{Point2, Vector2};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub u32);

/// One body of the flat simulation working set.
///
/// Everything is dimensionless with G = 1. The physical radius is derived
/// from the mass as `mass^(1/3)` and doubles as the render marker size; it
/// plays no role in the force computation.
#[derive(Debug, Clone, Copy)]
pub struct Body {
    pub id: BodyId,
    pub mass: f64,
    /// `mass^(1/3)`, derived at construction.
    pub radius: f64,
    pub position: Point2<f64>,
    pub velocity: Vector2<f64>,
}

impl Body {
    /// Creates a body, deriving the radius from the mass.
    pub fn new(id: BodyId, mass: f64, position: Point2<f64>, velocity: Vector2<f64>) -> Self {
        Body {
            id,
            mass,
            radius: mass.cbrt(),
            position,
            velocity,
        }
    }

    pub fn momentum(&self) -> Vector2<f64> {
        self.velocity * self.mass
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * self.velocity.magnitude_squared()
    }

    pub fn distance_to(&self, other: &Body) -> f64 {
        (self.position - other.position).magnitude()
    }

    /// Distance from the coordinate origin; the render host uses the
    /// maximum of these to size its viewport.
    pub fn origin_distance(&self) -> f64 {
        self.position.coords.magnitude()
    }
}
