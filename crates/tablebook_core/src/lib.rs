//! Core customer directory for TableBook.
//! This crate is the single source of truth for customer and reservation
//! persistence.

pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod search;
pub mod service;

pub use logging::{default_log_level, init_logging};
pub use model::customer::{Customer, CustomerId};
pub use model::identity::Identity;
pub use model::reservation::{Reservation, ReservationId};
pub use repo::customer_repo::{
    CustomerRepository, RepoError, RepoResult, SqliteCustomerRepository,
};
pub use repo::reservation_repo::{ReservationRepository, SqliteReservationRepository};
pub use search::name_prefix::{derive_name_prefixes, NamePrefixes};
pub use service::customer_service::{CreateCustomerRequest, CustomerService};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
