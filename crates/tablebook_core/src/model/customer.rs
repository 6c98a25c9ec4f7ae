//! Customer domain model.
//!
//! # Responsibility
//! - Define the patron record persisted in the `customers` table.
//! - Provide the derived display name used by list and report views.
//!
//! # Invariants
//! - `identity` is `New` until the first successful save, `Persisted`
//!   forever after.
//! - Reservations belong to the reservation side of the store; a customer
//!   never owns or caches them.

use crate::model::identity::Identity;
use serde::{Deserialize, Serialize};

/// Store-assigned row id for a customer.
pub type CustomerId = i64;

/// Patron of the restaurant.
///
/// Field names serialize in camelCase to match the external schema naming;
/// `identity` surfaces as `id` (a number once persisted, `null` before).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    #[serde(rename = "id", default)]
    pub identity: Identity,
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl Customer {
    /// Creates a not-yet-persisted customer.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            identity: Identity::New,
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            notes: None,
        }
    }

    /// Creates a customer already bound to an existing row id.
    ///
    /// Used by read paths and by callers that track ids externally.
    pub fn with_id(
        id: CustomerId,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            identity: Identity::Persisted(id),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
            notes: None,
        }
    }

    /// Display name, computed and never stored.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
