// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{
    CategoryDistribution, MonthlyTrend, Palette, SummaryTotals, compute_category_distribution,
    compute_monthly_trend, compute_summary,
};
use crate::session::Session;
use crate::store::{SqliteStore, TransactionStore};
use crate::utils::{fmt_money, get_palette, maybe_print_json, parse_palette, pretty_table};
use anyhow::Result;
use rusqlite::Connection;
use rust_decimal::Decimal;

pub fn handle(conn: &Connection, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    match m.subcommand() {
        Some(("summary", sub)) => summary(&store, session, sub)?,
        Some(("categories", sub)) => categories(conn, &store, session, sub)?,
        Some(("trends", sub)) => trends(&store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let snapshot = store.fetch_all(session)?;
    let totals = compute_summary(&snapshot);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &totals)? {
        println!("{}", pretty_table(&["", "Amount"], summary_rows(&totals)));
    }
    Ok(())
}

fn categories(
    conn: &Connection,
    store: &impl TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<()> {
    let palette = resolve_palette(conn, sub, Palette::report())?;
    let snapshot = store.fetch_all(session)?;
    let dist = compute_category_distribution(&snapshot, &palette);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &dist)? {
        println!(
            "{}",
            pretty_table(&["Category", "Spent", "Share", "Color"], category_rows(&dist))
        );
    }
    Ok(())
}

fn trends(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let snapshot = store.fetch_all(session)?;
    let trend = compute_monthly_trend(&snapshot);
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &trend)? {
        println!("{}", pretty_table(&["Month", "Spent"], trend_rows(&trend)));
        if trend.skipped > 0 {
            println!("{} expense(s) with unreadable dates left out", trend.skipped);
        }
    }
    Ok(())
}

/// Palette from `--palette`, else the stored setting, else `fallback`.
pub(crate) fn resolve_palette(
    conn: &Connection,
    sub: &clap::ArgMatches,
    fallback: Palette,
) -> Result<Palette> {
    match sub.get_one::<String>("palette") {
        Some(raw) => parse_palette(raw),
        None => get_palette(conn, fallback),
    }
}

pub(crate) fn summary_rows(totals: &SummaryTotals) -> Vec<Vec<String>> {
    vec![
        vec!["Total Expenses".into(), fmt_money(&totals.total_expenses)],
        vec!["Total Income".into(), fmt_money(&totals.total_income)],
        vec!["Current Balance".into(), fmt_money(&totals.current_balance)],
    ]
}

pub(crate) fn category_rows(dist: &CategoryDistribution) -> Vec<Vec<String>> {
    dist.slices()
        .iter()
        .map(|s| {
            let share = dist
                .share(&s.name)
                .map(|f| format!("{:.0}%", (f * Decimal::ONE_HUNDRED).round()))
                .unwrap_or_else(|| "-".into());
            vec![
                s.name.clone(),
                fmt_money(&s.value),
                share,
                s.color.to_string(),
            ]
        })
        .collect()
}

pub(crate) fn trend_rows(trend: &MonthlyTrend) -> Vec<Vec<String>> {
    trend
        .months
        .iter()
        .map(|m| vec![m.month.to_string(), fmt_money(&m.amount)])
        .collect()
}
