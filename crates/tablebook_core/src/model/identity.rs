//! Persistence identity for row-backed entities.
//!
//! # Responsibility
//! - Encode the insert-vs-update decision as a type, not a runtime check.
//!
//! # Invariants
//! - `Persisted` ids are store-assigned and never change for an entity.
//! - The `New -> Persisted` transition is terminal; there is no way back.

use serde::{Deserialize, Serialize};

/// Save-path state for an entity backed by a single table row.
///
/// Serializes untagged so a persisted entity carries its plain numeric id
/// and an unsaved one carries `null`, matching the external schema naming.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Identity {
    /// Never persisted. Saving inserts a row and binds the generated id.
    New,
    /// Backed by the row with this id. Saving updates that row in place.
    Persisted(i64),
}

impl Identity {
    /// Returns the store-assigned id, or `None` before first save.
    pub fn id(&self) -> Option<i64> {
        match self {
            Self::New => None,
            Self::Persisted(id) => Some(*id),
        }
    }

    pub fn is_persisted(&self) -> bool {
        matches!(self, Self::Persisted(_))
    }
}

impl Default for Identity {
    fn default() -> Self {
        Self::New
    }
}
