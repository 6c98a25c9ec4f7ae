//! Customer repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD, search and report APIs over the `customers` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Saving a `New` customer binds the generated row id onto the record.
//! - Saving a `Persisted` customer touches at most the row with its id.
//! - Row-to-entity mapping is explicit, column by column.

use crate::db::DbError;
use crate::model::customer::{Customer, CustomerId};
use crate::model::identity::Identity;
use crate::model::reservation::Reservation;
use crate::repo::reservation_repo::{ReservationRepository, SqliteReservationRepository};
use crate::search::name_prefix::derive_name_prefixes;
use log::debug;
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CUSTOMER_SELECT_SQL: &str = "SELECT
    id,
    first_name,
    last_name,
    phone,
    notes
FROM customers";

const BEST_CUSTOMERS_SQL: &str = "SELECT
    customers.id AS id,
    customers.first_name AS first_name,
    customers.last_name AS last_name,
    customers.phone AS phone,
    customers.notes AS notes
FROM customers
JOIN reservations ON reservations.customer_id = customers.id
GROUP BY customers.id
ORDER BY COUNT(*) DESC
LIMIT 10;";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for customer persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    NotFound(CustomerId),
    EmptyQuery,
    Db(DbError),
}

impl RepoError {
    /// HTTP-equivalent status for surfacing through a web layer.
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NotFound(_) => 404,
            Self::EmptyQuery => 400,
            Self::Db(_) => 500,
        }
    }
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(id) => write!(f, "no such customer: {id}"),
            Self::EmptyQuery => write!(f, "search query contains no name tokens"),
            Self::Db(err) => write!(f, "{err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::EmptyQuery => None,
            Self::Db(err) => Some(err),
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for customer operations.
pub trait CustomerRepository {
    /// Lists every customer ordered by last name, then first name.
    fn list_customers(&self) -> RepoResult<Vec<Customer>>;
    /// Gets one customer by id. Fails with [`RepoError::NotFound`] when the
    /// row does not exist.
    fn get_customer(&self, id: CustomerId) -> RepoResult<Customer>;
    /// Inserts or updates depending on the record's [`Identity`] and returns
    /// the row id. A `New` record is mutated to `Persisted` on success; an
    /// update whose row has vanished is a silent no-op.
    fn save_customer(&self, customer: &mut Customer) -> RepoResult<CustomerId>;
    /// Prefix-searches first and last name, ordered by id.
    fn search_by_name(&self, query: &str) -> RepoResult<Vec<Customer>>;
    /// Top 10 customers by reservation count, descending.
    fn best_customers(&self) -> RepoResult<Vec<Customer>>;
    /// Reservations belonging to the given customer, unmodified from the
    /// reservation side of the store.
    fn reservations_for(&self, customer: &Customer) -> RepoResult<Vec<Reservation>>;
}

/// SQLite-backed customer repository.
pub struct SqliteCustomerRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteCustomerRepository<'conn> {
    /// Constructs a repository from a migrated/ready connection.
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl CustomerRepository for SqliteCustomerRepository<'_> {
    fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} ORDER BY last_name, first_name;"))?;

        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn get_customer(&self, id: CustomerId) -> RepoResult<Customer> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CUSTOMER_SELECT_SQL} WHERE id = ?1;"))?;

        let mut rows = stmt.query(params![id])?;
        match rows.next()? {
            Some(row) => parse_customer_row(row),
            None => Err(RepoError::NotFound(id)),
        }
    }

    fn save_customer(&self, customer: &mut Customer) -> RepoResult<CustomerId> {
        match customer.identity {
            Identity::New => {
                self.conn.execute(
                    "INSERT INTO customers (first_name, last_name, phone, notes)
                     VALUES (?1, ?2, ?3, ?4);",
                    params![
                        customer.first_name,
                        customer.last_name,
                        customer.phone,
                        customer.notes,
                    ],
                )?;

                let id = self.conn.last_insert_rowid();
                customer.identity = Identity::Persisted(id);
                Ok(id)
            }
            Identity::Persisted(id) => {
                // Zero matched rows means the row is gone; callers asked to
                // persist, not to observe existence, so nothing is surfaced.
                self.conn.execute(
                    "UPDATE customers
                     SET
                        first_name = ?1,
                        last_name = ?2,
                        phone = ?3,
                        notes = ?4
                     WHERE id = ?5;",
                    params![
                        customer.first_name,
                        customer.last_name,
                        customer.phone,
                        customer.notes,
                        id,
                    ],
                )?;

                Ok(id)
            }
        }
    }

    fn search_by_name(&self, query: &str) -> RepoResult<Vec<Customer>> {
        let keys = derive_name_prefixes(query).ok_or(RepoError::EmptyQuery)?;

        let mut stmt = self.conn.prepare(&format!(
            "{CUSTOMER_SELECT_SQL}
             WHERE first_name LIKE ?1 OR last_name LIKE ?2
             ORDER BY id;"
        ))?;

        let mut rows = stmt.query(params![
            format!("{}%", keys.first),
            format!("{}%", keys.last),
        ])?;
        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        Ok(customers)
    }

    fn best_customers(&self) -> RepoResult<Vec<Customer>> {
        let mut stmt = self.conn.prepare(BEST_CUSTOMERS_SQL)?;

        let mut rows = stmt.query([])?;
        let mut customers = Vec::new();
        while let Some(row) = rows.next()? {
            customers.push(parse_customer_row(row)?);
        }

        debug!(
            "event=best_customers module=repo status=ok rows={}",
            customers.len()
        );

        Ok(customers)
    }

    fn reservations_for(&self, customer: &Customer) -> RepoResult<Vec<Reservation>> {
        match customer.identity {
            // An unsaved customer cannot have rows keyed to it yet.
            Identity::New => Ok(Vec::new()),
            Identity::Persisted(id) => {
                SqliteReservationRepository::new(self.conn).reservations_for_customer(id)
            }
        }
    }
}

fn parse_customer_row(row: &Row<'_>) -> RepoResult<Customer> {
    Ok(Customer {
        identity: Identity::Persisted(row.get("id")?),
        first_name: row.get("first_name")?,
        last_name: row.get("last_name")?,
        phone: row.get("phone")?,
        notes: row.get("notes")?,
    })
}
