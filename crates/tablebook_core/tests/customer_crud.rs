use tablebook_core::db::open_db_in_memory;
use tablebook_core::{
    CreateCustomerRequest, Customer, CustomerRepository, CustomerService, Identity, RepoError,
    SqliteCustomerRepository,
};

#[test]
fn save_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut customer = Customer::new("Alice", "Baker");
    customer.phone = Some("555-0100".to_string());
    customer.notes = Some("prefers the patio".to_string());
    let id = repo.save_customer(&mut customer).unwrap();

    let loaded = repo.get_customer(id).unwrap();
    assert_eq!(loaded.identity, Identity::Persisted(id));
    assert_eq!(loaded.first_name, "Alice");
    assert_eq!(loaded.last_name, "Baker");
    assert_eq!(loaded.phone.as_deref(), Some("555-0100"));
    assert_eq!(loaded.notes.as_deref(), Some("prefers the patio"));
}

#[test]
fn save_new_customer_binds_generated_id() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut customer = Customer::new("Bob", "Carter");
    assert_eq!(customer.identity.id(), None);

    let id = repo.save_customer(&mut customer).unwrap();
    assert!(id > 0);
    assert_eq!(customer.identity, Identity::Persisted(id));
}

#[test]
fn get_missing_customer_returns_not_found() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let err = repo.get_customer(42).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(42)));
    assert_eq!(err.status_code(), 404);
}

#[test]
fn save_persisted_customer_updates_only_its_row() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut first = Customer::new("Alice", "Baker");
    let mut second = Customer::new("Bob", "Carter");
    let first_id = repo.save_customer(&mut first).unwrap();
    let second_id = repo.save_customer(&mut second).unwrap();

    first.last_name = "Brewer".to_string();
    first.phone = Some("555-0199".to_string());
    let saved_id = repo.save_customer(&mut first).unwrap();
    assert_eq!(saved_id, first_id);

    let reloaded_first = repo.get_customer(first_id).unwrap();
    assert_eq!(reloaded_first.last_name, "Brewer");
    assert_eq!(reloaded_first.phone.as_deref(), Some("555-0199"));

    let reloaded_second = repo.get_customer(second_id).unwrap();
    assert_eq!(reloaded_second.first_name, "Bob");
    assert_eq!(reloaded_second.last_name, "Carter");
    assert_eq!(reloaded_second.phone, None);
}

#[test]
fn save_with_vanished_row_is_a_noop() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut ghost = Customer::with_id(999, "Nobody", "Home");
    let id = repo.save_customer(&mut ghost).unwrap();
    assert_eq!(id, 999);

    assert!(matches!(
        repo.get_customer(999).unwrap_err(),
        RepoError::NotFound(999)
    ));
    assert!(repo.list_customers().unwrap().is_empty());
}

#[test]
fn list_customers_sorted_by_last_then_first_name() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    for (first, last) in [
        ("Zoe", "Adams"),
        ("Alice", "Baker"),
        ("Bob", "Adams"),
        ("Carol", "Carter"),
    ] {
        let mut customer = Customer::new(first, last);
        repo.save_customer(&mut customer).unwrap();
    }

    let listed = repo.list_customers().unwrap();
    let names: Vec<String> = listed.iter().map(Customer::full_name).collect();
    assert_eq!(
        names,
        vec!["Bob Adams", "Zoe Adams", "Alice Baker", "Carol Carter"]
    );
}

#[test]
fn service_create_customer_returns_persisted_record() {
    let conn = open_db_in_memory().unwrap();
    let service = CustomerService::new(SqliteCustomerRepository::new(&conn));

    let created = service
        .create_customer(CreateCustomerRequest {
            first_name: "Dora".to_string(),
            last_name: "Ellis".to_string(),
            phone: None,
            notes: Some("gluten free".to_string()),
        })
        .unwrap();

    assert!(created.identity.is_persisted());
    let id = created.identity.id().unwrap();

    let loaded = service.get_customer(id).unwrap();
    assert_eq!(loaded, created);
}
