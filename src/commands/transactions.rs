// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::{normalize_category, parse_calendar_date};
use crate::models::{Transaction, TransactionInput, TransactionPatch, TransactionType};
use crate::session::Session;
use crate::store::{SqliteStore, TransactionStore};
use crate::utils::{maybe_print_json, parse_decimal, parse_month, pretty_table};
use anyhow::{Context, Result};
use rusqlite::Connection;
use serde::Serialize;

pub fn handle(conn: &Connection, session: &Session, m: &clap::ArgMatches) -> Result<()> {
    let store = SqliteStore::new(conn);
    match m.subcommand() {
        Some(("add", sub)) => add(&store, session, sub)?,
        Some(("list", sub)) => list(&store, session, sub)?,
        Some(("edit", sub)) => edit(&store, session, sub)?,
        Some(("rm", sub)) => rm(&store, session, sub)?,
        _ => {}
    }
    Ok(())
}

fn add(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let input = TransactionInput {
        amount: parse_decimal(sub.get_one::<String>("amount").unwrap().trim())?,
        description: sub
            .get_one::<String>("description")
            .map(|s| s.trim().to_string())
            .unwrap_or_default(),
        category: sub.get_one::<String>("category").unwrap().to_string(),
        r#type: sub.get_one::<String>("type").unwrap().parse()?,
        date: sub.get_one::<String>("date").unwrap().trim().to_string(),
    };
    let t = store.create(session, &input)?;
    println!(
        "Recorded {} {} on {} in '{}' (id {})",
        t.r#type,
        t.amount,
        t.date,
        normalize_category(t.category.as_deref()),
        t.id
    );
    Ok(())
}

fn edit(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub)?;
    let patch = TransactionPatch {
        amount: sub
            .get_one::<String>("amount")
            .map(|s| parse_decimal(s.trim()))
            .transpose()?,
        description: sub.get_one::<String>("description").cloned(),
        category: sub.get_one::<String>("category").cloned(),
        r#type: sub
            .get_one::<String>("type")
            .map(|s| s.parse::<TransactionType>())
            .transpose()?,
        date: sub.get_one::<String>("date").cloned(),
    };
    let t = store.update(session, id, &patch)?;
    println!("Updated transaction {} ({} {} on {})", t.id, t.r#type, t.amount, t.date);
    Ok(())
}

fn rm(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let id = parse_id(sub)?;
    store.delete(session, id)?;
    println!("Removed transaction {}", id);
    Ok(())
}

fn parse_id(sub: &clap::ArgMatches) -> Result<i64> {
    let raw = sub.get_one::<String>("id").unwrap().trim();
    raw.parse::<i64>()
        .with_context(|| format!("Invalid transaction id '{}'", raw))
}

fn list(store: &impl TransactionStore, session: &Session, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(store, session, sub)?;
    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        println!("{}", transactions_table(&data));
    }
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct TransactionRow {
    pub id: i64,
    pub date: String,
    pub description: String,
    pub category: String,
    pub r#type: TransactionType,
    pub amount: String,
}

impl From<&Transaction> for TransactionRow {
    fn from(t: &Transaction) -> Self {
        TransactionRow {
            id: t.id,
            date: t.date.clone(),
            description: t.description.clone(),
            category: normalize_category(t.category.as_deref()),
            r#type: t.r#type,
            amount: format!("{:.2}", t.amount),
        }
    }
}

pub(crate) fn transactions_table(rows: &[TransactionRow]) -> comfy_table::Table {
    let data = rows
        .iter()
        .map(|r| {
            let sign = match r.r#type {
                TransactionType::Expense => "-",
                TransactionType::Income => "+",
            };
            vec![
                r.id.to_string(),
                r.date.clone(),
                r.description.clone(),
                r.category.clone(),
                r.r#type.to_string(),
                format!("{}${}", sign, r.amount),
            ]
        })
        .collect();
    pretty_table(
        &["Id", "Date", "Description", "Category", "Type", "Amount"],
        data,
    )
}

/// Narrowing applied to a fetched snapshot before listing.
#[derive(Debug, Clone, Default)]
pub struct TransactionFilter {
    pub kind: Option<TransactionType>,
    pub category: Option<String>,
    pub month: Option<String>, // YYYY-MM
    pub search: Option<String>,
    pub limit: Option<usize>,
}

impl TransactionFilter {
    pub fn from_matches(sub: &clap::ArgMatches) -> Result<Self> {
        let trimmed = |key: &str| {
            sub.get_one::<String>(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };
        Ok(TransactionFilter {
            kind: trimmed("type")
                .map(|s| s.parse::<TransactionType>())
                .transpose()?,
            category: trimmed("category"),
            month: trimmed("month").map(|m| parse_month(&m)).transpose()?,
            search: trimmed("search").map(|s| s.to_lowercase()),
            limit: sub.get_one::<usize>("limit").copied(),
        })
    }

    pub fn matches(&self, t: &Transaction) -> bool {
        if self.kind.is_some_and(|k| k != t.r#type) {
            return false;
        }
        let category = normalize_category(t.category.as_deref());
        if let Some(ref wanted) = self.category {
            if !category.eq_ignore_ascii_case(&normalize_category(Some(wanted))) {
                return false;
            }
        }
        if let Some(ref month) = self.month {
            let in_month = parse_calendar_date(&t.date)
                .map(|d| d.format("%Y-%m").to_string() == *month)
                .unwrap_or(false);
            if !in_month {
                return false;
            }
        }
        if let Some(ref needle) = self.search {
            let hay = format!("{} {}", t.description, category).to_lowercase();
            if !hay.contains(needle.as_str()) {
                return false;
            }
        }
        true
    }

    pub fn apply<'t>(&self, transactions: &'t [Transaction]) -> Vec<&'t Transaction> {
        let matching = transactions.iter().filter(|t| self.matches(t));
        match self.limit {
            Some(n) => matching.take(n).collect(),
            None => matching.collect(),
        }
    }
}

pub fn query_rows(
    store: &impl TransactionStore,
    session: &Session,
    sub: &clap::ArgMatches,
) -> Result<Vec<TransactionRow>> {
    let filter = TransactionFilter::from_matches(sub)?;
    let snapshot = store.fetch_all(session)?;
    Ok(filter
        .apply(&snapshot)
        .into_iter()
        .map(TransactionRow::from)
        .collect())
}

