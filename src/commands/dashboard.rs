// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::reports::{category_rows, resolve_palette, summary_rows, trend_rows};
use super::transactions::{TransactionRow, transactions_table};
use crate::engine::{Overview, Palette};
use crate::session::Session;
use crate::store::{SqliteStore, TransactionStore};
use crate::utils::{maybe_print_json, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DashboardView {
    pub user: String,
    #[serde(flatten)]
    pub overview: Overview,
    pub recent: Vec<TransactionRow>,
}

pub fn build(
    store: &impl TransactionStore,
    session: &Session,
    palette: &Palette,
    recent: usize,
) -> Result<DashboardView> {
    let snapshot = store.fetch_all(session)?;
    Ok(DashboardView {
        user: session.display_name().to_string(),
        overview: Overview::from_snapshot(&snapshot, palette),
        recent: snapshot.iter().take(recent).map(TransactionRow::from).collect(),
    })
}

pub fn handle(conn: &Connection, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let palette = resolve_palette(conn, m, Palette::dashboard())?;
    let recent = *m.get_one::<usize>("recent").unwrap_or(&5);
    let view = build(&SqliteStore::new(conn), session, &palette, recent)?;
    if maybe_print_json(m.get_flag("json"), m.get_flag("jsonl"), &view)? {
        return Ok(());
    }

    println!("Welcome back, {}", view.user);
    println!("{}", pretty_table(&["", "Amount"], summary_rows(&view.overview.summary)));
    if view.overview.categories.is_empty() {
        println!("No expenses recorded yet");
    } else {
        println!(
            "{}",
            pretty_table(
                &["Category", "Spent", "Share", "Color"],
                category_rows(&view.overview.categories)
            )
        );
    }
    println!(
        "{}",
        pretty_table(&["Month", "Spent"], trend_rows(&view.overview.trend))
    );
    println!("{}", transactions_table(&view.recent));
    Ok(())
}
