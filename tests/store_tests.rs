// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendview::commands::users::add_user;
use spendview::db;
use spendview::models::{TransactionInput, TransactionPatch, TransactionType};
use spendview::session::Session;
use spendview::store::{SqliteStore, TransactionStore};

fn setup() -> (Connection, Session) {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let user = add_user(&conn, "alex@example.com").unwrap();
    (conn, Session::for_user(&user))
}

fn input(amount: &str, kind: TransactionType, category: &str, date: &str) -> TransactionInput {
    TransactionInput {
        amount: Decimal::from_str_exact(amount).unwrap(),
        description: format!("{} on {}", category, date),
        category: category.to_string(),
        r#type: kind,
        date: date.to_string(),
    }
}

#[test]
fn create_then_fetch_newest_first() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    store
        .create(&session, &input("85.75", TransactionType::Expense, "Food", "2023-06-15"))
        .unwrap();
    store
        .create(&session, &input("120.50", TransactionType::Expense, "Utilities", "2023-06-12"))
        .unwrap();
    store
        .create(&session, &input("2500.00", TransactionType::Income, "Salary", "2023-06-14"))
        .unwrap();

    let all = store.fetch_all(&session).unwrap();
    let dates: Vec<&str> = all.iter().map(|t| t.date.as_str()).collect();
    assert_eq!(dates, vec!["2023-06-15", "2023-06-14", "2023-06-12"]);
    assert_eq!(all[1].amount, Decimal::from_str_exact("2500.00").unwrap());
    assert_eq!(all[1].r#type, TransactionType::Income);
    assert!(all.iter().all(|t| t.user_id == session.user_id));
}

#[test]
fn create_trims_category_and_rejects_blank() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    let t = store
        .create(&session, &input("3", TransactionType::Expense, "  Coffee ", "2024-01-02"))
        .unwrap();
    assert_eq!(t.category.as_deref(), Some("Coffee"));

    let err = store
        .create(&session, &input("3", TransactionType::Expense, "   ", "2024-01-02"))
        .unwrap_err();
    assert!(err.to_string().contains("Category is required"));
}

#[test]
fn create_rejects_negative_amount_and_bad_date() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    let err = store
        .create(&session, &input("-1", TransactionType::Expense, "Food", "2024-01-02"))
        .unwrap_err();
    assert!(err.to_string().contains("must not be negative"));

    let err = store
        .create(&session, &input("1", TransactionType::Expense, "Food", "02/01/2024"))
        .unwrap_err();
    assert!(err.to_string().contains("Invalid date"));
    assert!(store.fetch_all(&session).unwrap().is_empty());
}

#[test]
fn create_and_update_reject_oversized_amount() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    let mut huge = input("1", TransactionType::Expense, "Food", "2024-01-02");
    huge.amount = Decimal::MAX;
    let err = store.create(&session, &huge).unwrap_err();
    assert!(err.to_string().contains("exceeds the maximum"));

    let at_limit = input("1000000000000000", TransactionType::Expense, "Food", "2024-01-02");
    let t = store.create(&session, &at_limit).unwrap();

    let patch = TransactionPatch {
        amount: Some(Decimal::from_str_exact("1000000000000000.01").unwrap()),
        ..Default::default()
    };
    assert!(store.update(&session, t.id, &patch).is_err());
    assert_eq!(store.fetch_all(&session).unwrap().len(), 1);
}

#[test]
fn update_changes_only_given_fields() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    let t = store
        .create(&session, &input("10", TransactionType::Expense, "Food", "2024-03-10"))
        .unwrap();
    let patch = TransactionPatch {
        amount: Some(Decimal::from_str_exact("12.34").unwrap()),
        category: Some(String::new()),
        ..Default::default()
    };
    let updated = store.update(&session, t.id, &patch).unwrap();
    assert_eq!(updated.amount, Decimal::from_str_exact("12.34").unwrap());
    assert_eq!(updated.category.as_deref(), Some("Other"));
    assert_eq!(updated.date, "2024-03-10");
    assert_eq!(updated.description, t.description);
}

#[test]
fn update_and_delete_unknown_id_fail() {
    let (conn, session) = setup();
    let store = SqliteStore::new(&conn);
    let patch = TransactionPatch {
        description: Some("x".into()),
        ..Default::default()
    };
    assert!(store.update(&session, 42, &patch).is_err());
    assert!(store.delete(&session, 42).is_err());
}

#[test]
fn sessions_only_see_their_own_transactions() {
    let (conn, alex) = setup();
    let sam = Session::for_user(&add_user(&conn, "sam@example.com").unwrap());
    let store = SqliteStore::new(&conn);
    let t = store
        .create(&alex, &input("5", TransactionType::Expense, "Food", "2024-01-01"))
        .unwrap();

    assert!(store.fetch_all(&sam).unwrap().is_empty());
    assert!(store.delete(&sam, t.id).is_err());
    store.delete(&alex, t.id).unwrap();
    assert!(store.fetch_all(&alex).unwrap().is_empty());
}

#[test]
fn legacy_rows_with_missing_category_still_load() {
    let (conn, session) = setup();
    conn.execute(
        "INSERT INTO transactions(user_id, amount, description, category, type, date) VALUES (?1, '7.5', '', NULL, 'expense', '2024-02-03T10:00:00')",
        [session.user_id],
    )
    .unwrap();
    let all = SqliteStore::new(&conn).fetch_all(&session).unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].category, None);
    assert_eq!(all[0].amount, Decimal::from_str_exact("7.5").unwrap());
}

#[test]
fn session_open_uses_default_user() {
    let (conn, session) = setup();
    assert!(Session::open(&conn, None).is_err());
    spendview::utils::set_default_user(&conn, "alex@example.com").unwrap();
    let opened = Session::open(&conn, None).unwrap();
    assert_eq!(opened, session);
    assert_eq!(opened.display_name(), "alex");

    let by_flag = Session::open(&conn, Some("  ALEX@example.com ")).unwrap();
    assert_eq!(by_flag.user_id, session.user_id);
    assert!(Session::open(&conn, Some("nobody@example.com")).is_err());
}

#[test]
fn add_user_rejects_malformed_email() {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    assert!(add_user(&conn, "not-an-email").is_err());
    assert!(add_user(&conn, "@example.com").is_err());
}

#[test]
fn add_user_reports_duplicate_email() {
    let (conn, _) = setup();
    let err = add_user(&conn, " Alex@Example.com ").unwrap_err();
    assert!(err.to_string().contains("User 'alex@example.com' already exists"));
}
