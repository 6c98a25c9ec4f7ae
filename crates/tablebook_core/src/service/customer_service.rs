//! Customer use-case service.
//!
//! # Responsibility
//! - Provide stable entry points for request handlers.
//! - Delegate persistence to repository implementations.
//!
//! # Invariants
//! - Service APIs never bypass repository persistence contracts.
//! - Service layer remains storage-agnostic.

use crate::model::customer::{Customer, CustomerId};
use crate::model::reservation::Reservation;
use crate::repo::customer_repo::{CustomerRepository, RepoResult};

/// Use-case service wrapper for customer operations.
pub struct CustomerService<R: CustomerRepository> {
    repo: R,
}

/// Request model for registering a new customer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateCustomerRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone: Option<String>,
    pub notes: Option<String>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a service using the provided repository implementation.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Registers a new customer and returns the persisted record.
    ///
    /// # Contract
    /// - The returned record carries the store-assigned id.
    pub fn create_customer(&self, request: CreateCustomerRequest) -> RepoResult<Customer> {
        let mut customer = Customer::new(request.first_name, request.last_name);
        customer.phone = request.phone;
        customer.notes = request.notes;
        self.repo.save_customer(&mut customer)?;
        Ok(customer)
    }

    /// Saves a customer, inserting or updating based on its identity.
    pub fn save_customer(&self, customer: &mut Customer) -> RepoResult<CustomerId> {
        self.repo.save_customer(customer)
    }

    /// Gets one customer by id.
    pub fn get_customer(&self, id: CustomerId) -> RepoResult<Customer> {
        self.repo.get_customer(id)
    }

    /// Lists every customer in name order.
    pub fn list_customers(&self) -> RepoResult<Vec<Customer>> {
        self.repo.list_customers()
    }

    /// Prefix-searches customers by partial first/last name.
    pub fn search_customers(&self, query: &str) -> RepoResult<Vec<Customer>> {
        self.repo.search_by_name(query)
    }

    /// Top customers by reservation count.
    pub fn best_customers(&self) -> RepoResult<Vec<Customer>> {
        self.repo.best_customers()
    }

    /// Reservations belonging to the given customer.
    pub fn reservations_for(&self, customer: &Customer) -> RepoResult<Vec<Reservation>> {
        self.repo.reservations_for(customer)
    }
}
