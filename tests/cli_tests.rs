// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rusqlite::Connection;
use rust_decimal::Decimal;
use spendview::commands::{config, dashboard, transactions, users::add_user};
use spendview::engine::Palette;
use spendview::session::Session;
use spendview::store::{SqliteStore, TransactionStore};
use spendview::{cli, db, utils};

fn setup() -> (Connection, Session) {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    let user = add_user(&conn, "jordan@example.com").unwrap();
    let session = Session::for_user(&user);
    for (amount, kind, category, date, description) in [
        ("85.75", "expense", "Food", "2023-06-15", "Grocery shopping"),
        ("2500.00", "income", "Salary", "2023-06-14", "Salary deposit"),
        ("120.50", "expense", "Utilities", "2023-06-12", "Electric bill"),
        ("65.30", "expense", "Dining", "2023-06-10", "Restaurant dinner"),
        ("350.00", "income", "Freelance", "2023-06-08", "Freelance payment"),
        ("40.00", "expense", "Food", "2023-05-31", "Market"),
    ] {
        conn.execute(
            "INSERT INTO transactions(user_id, amount, description, category, type, date) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            rusqlite::params![session.user_id, amount, description, category, kind, date],
        )
        .unwrap();
    }
    (conn, session)
}

fn run_tx(conn: &Connection, session: &Session, args: &[&str]) -> anyhow::Result<()> {
    let mut argv = vec!["spendview", "tx"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    if let Some(("tx", tx_m)) = matches.subcommand() {
        transactions::handle(conn, session, tx_m)
    } else {
        panic!("no tx subcommand");
    }
}

fn list_rows(conn: &Connection, session: &Session, args: &[&str]) -> Vec<transactions::TransactionRow> {
    let mut argv = vec!["spendview", "tx", "list"];
    argv.extend_from_slice(args);
    let matches = cli::build_cli().get_matches_from(argv);
    let Some(("tx", tx_m)) = matches.subcommand() else {
        panic!("no tx subcommand");
    };
    let Some(("list", list_m)) = tx_m.subcommand() else {
        panic!("no list subcommand");
    };
    transactions::query_rows(&SqliteStore::new(conn), session, list_m).unwrap()
}

#[test]
fn tx_add_trims_inputs() {
    let (conn, session) = setup();
    run_tx(
        &conn,
        &session,
        &[
            "add",
            "--amount",
            " 12.00 ",
            "--type",
            " Expense ",
            "--category",
            " Transport ",
            "--date",
            " 2023-07-01 ",
        ],
    )
    .unwrap();
    let all = SqliteStore::new(&conn).fetch_all(&session).unwrap();
    let t = &all[0];
    assert_eq!(t.date, "2023-07-01");
    assert_eq!(t.category.as_deref(), Some("Transport"));
    assert_eq!(t.amount, Decimal::from_str_exact("12.00").unwrap());
}

#[test]
fn tx_add_rejects_unknown_type() {
    let (conn, session) = setup();
    let err = run_tx(
        &conn,
        &session,
        &["add", "--amount", "1", "--type", "transfer", "--category", "X", "--date", "2023-07-01"],
    )
    .unwrap_err();
    assert!(err.to_string().contains("Invalid transaction type"));
}

#[test]
fn tx_list_filters_and_limits() {
    let (conn, session) = setup();
    assert_eq!(list_rows(&conn, &session, &[]).len(), 6);

    let expenses = list_rows(&conn, &session, &["--type", "expense"]);
    assert_eq!(expenses.len(), 4);

    let food = list_rows(&conn, &session, &["--category", "food"]);
    assert_eq!(food.len(), 2);

    let june = list_rows(&conn, &session, &["--month", "2023-06"]);
    assert_eq!(june.len(), 5);

    let search = list_rows(&conn, &session, &["--search", "BILL"]);
    assert_eq!(search.len(), 1);
    assert_eq!(search[0].description, "Electric bill");

    let limited = list_rows(&conn, &session, &["--limit", "2"]);
    assert_eq!(limited.len(), 2);
    assert_eq!(limited[0].date, "2023-06-15");
    assert_eq!(limited[0].amount, "85.75");
}

#[test]
fn tx_list_month_accepts_unpadded_month() {
    let (conn, session) = setup();
    let may = list_rows(&conn, &session, &["--month", "2023-5"]);
    assert_eq!(may.len(), 1);
    assert_eq!(may[0].date, "2023-05-31");
    assert_eq!(list_rows(&conn, &session, &["--month", "2023-6"]).len(), 5);
}

#[test]
fn tx_edit_and_rm_trim_id() {
    let (conn, session) = setup();
    let first = SqliteStore::new(&conn).fetch_all(&session).unwrap()[0].clone();
    let id = format!(" {} ", first.id);
    run_tx(&conn, &session, &["edit", "--id", &id, "--amount", "90"]).unwrap();
    let edited = SqliteStore::new(&conn).fetch_all(&session).unwrap()[0].clone();
    assert_eq!(edited.id, first.id);
    assert_eq!(edited.amount, Decimal::from(90));

    run_tx(&conn, &session, &["rm", "--id", &id]).unwrap();
    assert_eq!(SqliteStore::new(&conn).fetch_all(&session).unwrap().len(), 5);
}

#[test]
fn dashboard_builds_all_views_from_one_snapshot() {
    let (conn, session) = setup();
    let view = dashboard::build(&SqliteStore::new(&conn), &session, &Palette::dashboard(), 5).unwrap();
    assert_eq!(view.user, "jordan");
    assert_eq!(view.recent.len(), 5);
    assert_eq!(view.recent[0].description, "Grocery shopping");

    let summary = view.overview.summary;
    assert_eq!(summary.total_expenses, Decimal::from_str_exact("311.55").unwrap());
    assert_eq!(summary.total_income, Decimal::from_str_exact("2850.00").unwrap());
    assert_eq!(summary.current_balance, Decimal::from_str_exact("2538.45").unwrap());

    let names: Vec<&str> = view
        .overview
        .categories
        .slices()
        .iter()
        .map(|s| s.name.as_str())
        .collect();
    assert_eq!(names, vec!["Food", "Utilities", "Dining"]);
    assert_eq!(view.overview.categories.slices()[2].color.as_str(), "#FFCE56");

    assert_eq!(
        view.overview.trend.get("Jun"),
        Some(Decimal::from_str_exact("271.55").unwrap())
    );
    assert_eq!(
        view.overview.trend.get("May"),
        Some(Decimal::from_str_exact("40.00").unwrap())
    );
}

#[test]
fn dashboard_json_has_all_sections() {
    let (conn, session) = setup();
    let view = dashboard::build(&SqliteStore::new(&conn), &session, &Palette::report(), 2).unwrap();
    let v = serde_json::to_value(&view).unwrap();
    assert_eq!(v["user"], "jordan");
    assert_eq!(v["summary"]["total_expenses"], "311.55");
    assert_eq!(v["categories"][0]["name"], "Food");
    assert_eq!(v["categories"][0]["color"], "#FF6384");
    assert_eq!(v["trend"]["months"].as_array().unwrap().len(), 12);
    assert_eq!(v["trend"]["months"][5]["month"], "Jun");
    assert_eq!(v["recent"].as_array().unwrap().len(), 2);
}

#[test]
fn config_palette_set_and_reset() {
    let (conn, _) = setup();
    let matches = cli::build_cli().get_matches_from([
        "spendview",
        "config",
        "palette",
        "--colors",
        " #111111, #222222 ",
    ]);
    let Some(("config", config_m)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    config::handle(&conn, config_m).unwrap();
    let palette = utils::get_palette(&conn, Palette::dashboard()).unwrap();
    assert_eq!(palette.len(), 2);
    assert_eq!(palette.color_at(3).as_str(), "#222222");

    let matches = cli::build_cli().get_matches_from(["spendview", "config", "palette", "--reset"]);
    let Some(("config", config_m)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    config::handle(&conn, config_m).unwrap();
    assert_eq!(
        utils::get_palette(&conn, Palette::dashboard()).unwrap(),
        Palette::dashboard()
    );
}

#[test]
fn config_palette_rejects_bad_colors() {
    let (conn, _) = setup();
    for colors in ["red,#00FF00", " , "] {
        let matches = cli::build_cli().get_matches_from([
            "spendview", "config", "palette", "--colors", colors,
        ]);
        let Some(("config", config_m)) = matches.subcommand() else {
            panic!("config command not parsed");
        };
        assert!(config::handle(&conn, config_m).is_err(), "{}", colors);
    }
    assert!(utils::get_setting(&conn, "palette").unwrap().is_none());
}

#[test]
fn stored_empty_palette_is_an_error_not_a_default() {
    let (conn, _) = setup();
    utils::set_setting(&conn, "palette", "").unwrap();
    assert!(utils::get_palette(&conn, Palette::dashboard()).is_err());
}

#[test]
fn config_default_user_requires_known_user() {
    let (conn, _) = setup();
    let matches = cli::build_cli().get_matches_from([
        "spendview", "config", "default-user", "--email", "ghost@example.com",
    ]);
    let Some(("config", config_m)) = matches.subcommand() else {
        panic!("config command not parsed");
    };
    assert!(config::handle(&conn, config_m).is_err());
}

#[test]
fn global_user_flag_is_visible_to_subcommands() {
    let matches = cli::build_cli().get_matches_from([
        "spendview", "report", "summary", "--user", "jordan@example.com",
    ]);
    assert_eq!(
        matches.get_one::<String>("user").map(String::as_str),
        Some("jordan@example.com")
    );
}
