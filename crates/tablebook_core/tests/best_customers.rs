use rusqlite::Connection;
use tablebook_core::db::open_db_in_memory;
use tablebook_core::{
    Customer, CustomerId, CustomerRepository, Reservation, ReservationRepository,
    SqliteCustomerRepository, SqliteReservationRepository,
};

fn seed_customer(conn: &Connection, first: &str, last: &str) -> CustomerId {
    let mut customer = Customer::new(first, last);
    SqliteCustomerRepository::new(conn)
        .save_customer(&mut customer)
        .unwrap()
}

fn seed_reservations(conn: &Connection, customer_id: CustomerId, count: usize) {
    let repo = SqliteReservationRepository::new(conn);
    for offset in 0..count {
        let mut reservation =
            Reservation::new(customer_id, 1_700_000_000_000 + offset as i64 * 3_600_000, 2);
        repo.save_reservation(&mut reservation).unwrap();
    }
}

#[test]
fn ordered_by_descending_reservation_count() {
    let conn = open_db_in_memory().unwrap();
    let alice = seed_customer(&conn, "Alice", "Baker");
    let bob = seed_customer(&conn, "Bob", "Carter");
    seed_reservations(&conn, alice, 3);
    seed_reservations(&conn, bob, 1);

    let best = SqliteCustomerRepository::new(&conn).best_customers().unwrap();
    let names: Vec<String> = best.iter().map(Customer::full_name).collect();
    assert_eq!(names, vec!["Alice Baker", "Bob Carter"]);
}

#[test]
fn customers_without_reservations_never_appear() {
    let conn = open_db_in_memory().unwrap();
    let diner = seed_customer(&conn, "Dora", "Ellis");
    seed_customer(&conn, "Walk", "In");
    seed_reservations(&conn, diner, 1);

    let best = SqliteCustomerRepository::new(&conn).best_customers().unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].full_name(), "Dora Ellis");
}

#[test]
fn report_caps_at_ten_rows() {
    let conn = open_db_in_memory().unwrap();
    // Twelve customers with distinct counts 1..=12; the two lightest diners
    // must fall off the report.
    for count in 1..=12usize {
        let id = seed_customer(&conn, "Guest", &format!("Number{count:02}"));
        seed_reservations(&conn, id, count);
    }

    let best = SqliteCustomerRepository::new(&conn).best_customers().unwrap();
    assert_eq!(best.len(), 10);
    assert_eq!(best[0].last_name, "Number12");
    assert_eq!(best[9].last_name, "Number03");

    let reported: Vec<&str> = best.iter().map(|c| c.last_name.as_str()).collect();
    assert!(!reported.contains(&"Number01"));
    assert!(!reported.contains(&"Number02"));
}

#[test]
fn report_rows_carry_persisted_customer_fields() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteCustomerRepository::new(&conn);

    let mut customer = Customer::new("Alice", "Baker");
    customer.phone = Some("555-0100".to_string());
    let id = repo.save_customer(&mut customer).unwrap();
    seed_reservations(&conn, id, 2);

    let best = repo.best_customers().unwrap();
    assert_eq!(best.len(), 1);
    assert_eq!(best[0].identity.id(), Some(id));
    assert_eq!(best[0].phone.as_deref(), Some("555-0100"));
}
