//! Reservation repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide the by-customer reservation query the customer side delegates
//!   to.
//! - Persist reservation rows with the same identity state machine as
//!   customers.
//!
//! # Invariants
//! - `reservations_for_customer` returns rows in `(start_at, id)` order.

use crate::model::customer::CustomerId;
use crate::model::identity::Identity;
use crate::model::reservation::{Reservation, ReservationId};
use crate::repo::customer_repo::RepoResult;
use rusqlite::{params, Connection, Row};

const RESERVATION_SELECT_SQL: &str = "SELECT
    id,
    customer_id,
    start_at,
    num_guests,
    notes
FROM reservations";

/// Repository interface for reservation operations.
pub trait ReservationRepository {
    /// All reservations for one customer, earliest first.
    fn reservations_for_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<Reservation>>;
    /// Inserts or updates depending on the record's [`Identity`] and returns
    /// the row id.
    fn save_reservation(&self, reservation: &mut Reservation) -> RepoResult<ReservationId>;
}

/// SQLite-backed reservation repository.
pub struct SqliteReservationRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteReservationRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ReservationRepository for SqliteReservationRepository<'_> {
    fn reservations_for_customer(&self, customer_id: CustomerId) -> RepoResult<Vec<Reservation>> {
        let mut stmt = self.conn.prepare(&format!(
            "{RESERVATION_SELECT_SQL}
             WHERE customer_id = ?1
             ORDER BY start_at, id;"
        ))?;

        let mut rows = stmt.query(params![customer_id])?;
        let mut reservations = Vec::new();
        while let Some(row) = rows.next()? {
            reservations.push(parse_reservation_row(row)?);
        }

        Ok(reservations)
    }

    fn save_reservation(&self, reservation: &mut Reservation) -> RepoResult<ReservationId> {
        match reservation.identity {
            Identity::New => {
                self.conn.execute(
                    "INSERT INTO reservations (customer_id, start_at, num_guests, notes)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        reservation.customer_id,
                        reservation.start_at,
                        reservation.num_guests,
                        reservation.notes,
                    ],
                )?;

                let id = self.conn.last_insert_rowid();
                reservation.identity = Identity::Persisted(id);
                Ok(id)
            }
            Identity::Persisted(id) => {
                self.conn.execute(
                    "UPDATE reservations
                     SET
                        customer_id = ?1,
                        start_at = ?2,
                        num_guests = ?3,
                        notes = ?4
                     WHERE id = ?5;",
                    params![
                        reservation.customer_id,
                        reservation.start_at,
                        reservation.num_guests,
                        reservation.notes,
                        id,
                    ],
                )?;

                Ok(id)
            }
        }
    }
}

fn parse_reservation_row(row: &Row<'_>) -> RepoResult<Reservation> {
    Ok(Reservation {
        identity: Identity::Persisted(row.get("id")?),
        customer_id: row.get("customer_id")?,
        start_at: row.get("start_at")?,
        num_guests: row.get("num_guests")?,
        notes: row.get("notes")?,
    })
}
