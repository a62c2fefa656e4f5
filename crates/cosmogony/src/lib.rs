//! Procedural generation of hierarchical gravitating systems.
//!
//! A system is a star owning planets owning moons, built in three passes:
//! recursive mass partitioning ([`body`]), bottom-up orbit solving against a
//! sphere-of-influence boundary ([`orbits`]), and top-down position/velocity
//! assignment with barycentric correction ([`placement`]). The solved tree
//! flattens, pre-order, into the per-body records the `nbody` crate
//! integrates and the render host draws.
//!
//! Generation is deterministic: every random draw goes through a
//! [`rand_chacha::ChaChaRng`] seeded from the system's UUID, so an id alone
//! reproduces the whole system.

pub mod body;
pub mod generation;
pub mod metadata;
pub mod orbits;
pub mod placement;
pub mod sampling;
pub mod snapshot;

pub use body::{Body, Tier, TIER_FACTOR};
pub use generation::{generate_system, generate_system_random, StellarSystem};
pub use metadata::SystemMetadata;
pub use orbits::{compute_orbits, ORBIT_SPACING};
pub use placement::compute_positions;
pub use snapshot::BodySnapshot;

#[cfg(test)]
mod body_test;
#[cfg(test)]
mod sampling_test;
