//! Schema migration registry.
//!
//! Migration SQL is compiled into the binary with `include_str!` and keyed by
//! a strictly increasing version number. The version a database has reached
//! is mirrored to `PRAGMA user_version`; all pending steps run inside one
//! transaction, so a half-applied batch can never look complete.

use crate::db::{DbError, DbResult};
use rusqlite::Connection;

struct Migration {
    version: u32,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: 1,
        sql: include_str!("0001_customers.sql"),
    },
    Migration {
        version: 2,
        sql: include_str!("0002_reservations.sql"),
    },
];

/// Newest schema version this build knows how to produce.
pub fn latest_version() -> u32 {
    MIGRATIONS.last().map_or(0, |m| m.version)
}

/// Brings the connected database up to [`latest_version`].
///
/// A database stamped with a newer version than this build understands is
/// refused rather than written to.
pub fn apply_migrations(conn: &mut Connection) -> DbResult<()> {
    let current = conn.pragma_query_value(None, "user_version", |row| row.get::<_, u32>(0))?;

    if current > latest_version() {
        return Err(DbError::UnsupportedSchemaVersion {
            db_version: current,
            latest_supported: latest_version(),
        });
    }

    let pending: Vec<&Migration> = MIGRATIONS.iter().filter(|m| m.version > current).collect();
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for migration in pending {
        tx.execute_batch(migration.sql)?;
        tx.pragma_update(None, "user_version", migration.version)?;
    }
    tx.commit()?;

    Ok(())
}
