//! Serializable snapshots of a generated body tree.

use serde::{Deserialize, Serialize};

use crate::body::Body;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Nested, wire-friendly copy of a [`Body`] subtree.
///
/// The field set and nesting are a stable contract for consumers expecting
/// a serialized system: `mass`, `groupMass`, `radius`, `orbitRadius`,
/// `orbitVelocity`, `posX`, `posY`, `velX`, `velY`, `children`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct BodySnapshot {
    pub mass: f64,
    pub group_mass: f64,
    pub radius: f64,
    pub orbit_radius: f64,
    pub orbit_velocity: f64,
    pub pos_x: f64,
    pub pos_y: f64,
    pub vel_x: f64,
    pub vel_y: f64,
    pub children: Vec<BodySnapshot>,
}

impl BodySnapshot {
    /// Renders the snapshot as indented JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl From<&Body> for BodySnapshot {
    fn from(body: &Body) -> Self {
        BodySnapshot {
            mass: body.mass,
            group_mass: body.group_mass,
            radius: body.radius,
            orbit_radius: body.orbit_radius,
            orbit_velocity: body.orbit_velocity,
            pos_x: body.position.x,
            pos_y: body.position.y,
            vel_x: body.velocity.x,
            vel_y: body.velocity.y,
            children: body.children.iter().map(BodySnapshot::from).collect(),
        }
    }
}
