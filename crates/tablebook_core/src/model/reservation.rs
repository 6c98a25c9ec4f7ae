//! Reservation domain model.
//!
//! # Responsibility
//! - Define the booking record persisted in the `reservations` table.
//!
//! # Invariants
//! - `customer_id` always references an existing customer row; the schema's
//!   foreign key is the enforcement point.
//! - `start_at` is a Unix epoch millisecond timestamp.

use crate::model::customer::CustomerId;
use crate::model::identity::Identity;
use serde::{Deserialize, Serialize};

/// Store-assigned row id for a reservation.
pub type ReservationId = i64;

/// Single table booking for one customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reservation {
    #[serde(rename = "id", default)]
    pub identity: Identity,
    pub customer_id: CustomerId,
    /// Booking time in epoch milliseconds.
    pub start_at: i64,
    pub num_guests: u32,
    pub notes: Option<String>,
}

impl Reservation {
    /// Creates a not-yet-persisted reservation for an existing customer.
    pub fn new(customer_id: CustomerId, start_at: i64, num_guests: u32) -> Self {
        Self {
            identity: Identity::New,
            customer_id,
            start_at,
            num_guests,
            notes: None,
        }
    }
}
