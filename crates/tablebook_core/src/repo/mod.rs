//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts.
//! - Isolate SQLite query details from service orchestration.
//!
//! # Invariants
//! - Repositories never own the connection; callers inject it.
//! - Repository APIs return semantic errors (`NotFound`, `EmptyQuery`) in
//!   addition to DB transport errors.

pub mod customer_repo;
pub mod reservation_repo;
