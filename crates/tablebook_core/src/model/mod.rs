//! Domain model for the customer directory.
//!
//! # Responsibility
//! - Define the canonical entities used by repositories and services.
//! - Make persistence state explicit instead of inferring it from field
//!   presence.
//!
//! # Invariants
//! - Every persisted entity carries a store-assigned integer row id.
//! - An entity without an id has never touched the store.

pub mod customer;
pub mod identity;
pub mod reservation;
