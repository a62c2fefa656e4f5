//! Brute-force 2D N-body gravity in dimensionless G = 1 units.
//!
//! The working set is a flat, index-stable list of bodies built once at
//! startup ([`state::SimState`]); forces come from an all-pairs
//! [`forces::ForceModel`] and time advances through an explicit
//! [`integrator::Integrator`] driven one fixed step per host frame. Energy
//! is not conserved by the explicit scheme; the drift is part of the
//! simulation's observable behavior, not something this crate corrects.

pub mod body;
pub mod forces;
pub mod integrator;
pub mod state;

pub use body::{Body, BodyId};
pub use forces::{DirectGravity, ForceModel, G};
pub use integrator::{Euler, Integrator};
pub use state::SimState;

#[cfg(test)]
mod integrator_test;
