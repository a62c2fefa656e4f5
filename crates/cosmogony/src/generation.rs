//! Generation pipeline: build the tree, solve orbits, place bodies.

use rand::SeedableRng;
use rand_chacha::ChaChaRng;
use uuid::Uuid;

use crate::body::{Body, Tier, TIER_FACTOR};
use crate::metadata::SystemMetadata;
use crate::orbits::compute_orbits;
use crate::placement::compute_positions;
use crate::snapshot::BodySnapshot;

/// A fully generated system: identity plus the solved body tree.
#[derive(Debug, Clone, PartialEq)]
pub struct StellarSystem {
    pub metadata: SystemMetadata,
    pub root: Body,
}

impl StellarSystem {
    /// Flat pre-order view of every body, root first.
    pub fn bodies(&self) -> Vec<&Body> {
        self.root.all_bodies()
    }

    /// Total number of bodies, root included.
    pub fn body_count(&self) -> usize {
        self.bodies().len()
    }

    /// Nested snapshot of the whole tree.
    pub fn snapshot(&self) -> BodySnapshot {
        BodySnapshot::from(&self.root)
    }
}

/// Generates the system identified by `id`.
///
/// The RNG is seeded from the UUID, so the same id always reproduces the
/// same tree, the same orbits, and the same positions.
///
/// # Example
/// ```
/// use cosmogony::generate_system;
/// use uuid::Uuid;
///
/// let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
/// let a = generate_system(id);
/// let b = generate_system(id);
/// assert_eq!(a.snapshot(), b.snapshot());
/// ```
pub fn generate_system(id: Uuid) -> StellarSystem {
    let metadata = SystemMetadata::with_id(id);
    let mut rng = ChaChaRng::seed_from_u64(metadata.seed());

    let mut root = Body::new(TIER_FACTOR * TIER_FACTOR);
    root.split(&mut rng, Tier::Star);
    compute_orbits(&mut root);
    compute_positions(&mut root, &mut rng);

    StellarSystem { metadata, root }
}

/// Generates a system under a fresh random id.
pub fn generate_system_random() -> StellarSystem {
    generate_system(Uuid::new_v4())
}
