//! System identity: UUID-keyed metadata and RNG seed derivation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[cfg(feature = "tsify")]
use tsify_next::Tsify;

/// Identification for a generated system.
///
/// The UUID doubles as the RNG seed source, so the id alone reproduces the
/// entire system. UUIDs serialize as strings, which keeps snapshots safe for
/// JavaScript consumers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "tsify", derive(Tsify))]
#[cfg_attr(feature = "tsify", tsify(into_wasm_abi, from_wasm_abi))]
pub struct SystemMetadata {
    /// Unique identifier, also the RNG seed source.
    pub id: Uuid,

    /// Optional proper name for notable systems; most systems carry only
    /// the auto-derived `catalog_name()`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl SystemMetadata {
    /// Metadata under a fresh random UUID.
    pub fn new_random() -> Self {
        Self {
            id: Uuid::new_v4(),
            name: None,
        }
    }

    /// Metadata for a known UUID, e.g. a system being revisited.
    pub fn with_id(id: Uuid) -> Self {
        Self { id, name: None }
    }

    /// Attaches a proper name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Derives the u64 RNG seed from the first 8 bytes of the UUID.
    ///
    /// # Example
    /// ```
    /// use cosmogony::SystemMetadata;
    /// use uuid::Uuid;
    ///
    /// let id = Uuid::parse_str("550e8400-e29b-41d4-a716-446655440000").unwrap();
    /// let meta = SystemMetadata::with_id(id);
    /// assert_eq!(meta.seed(), SystemMetadata::with_id(id).seed());
    /// ```
    pub fn seed(&self) -> u64 {
        self.id.as_u64_pair().0
    }

    /// Short catalog designation: two letters and four digits, e.g.
    /// "KV-4729". Deterministic per UUID.
    pub fn catalog_name(&self) -> String {
        let bytes = self.id.as_bytes();
        let prefix1 = (bytes[0] % 26 + b'A') as char;
        let prefix2 = (bytes[1] % 26 + b'A') as char;
        let number = u16::from_le_bytes([bytes[2], bytes[3]]) % 10000;
        format!("{}{}-{:04}", prefix1, prefix2, number)
    }

    /// Proper name if set, catalog designation otherwise.
    pub fn display_name(&self) -> String {
        self.name.clone().unwrap_or_else(|| self.catalog_name())
    }
}
