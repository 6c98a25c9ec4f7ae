//! Name search entry points.
//!
//! # Responsibility
//! - Own the query-text shaping used by customer name search.
//! - Keep its quirks in one documented, unit-testable place.

pub mod name_prefix;
