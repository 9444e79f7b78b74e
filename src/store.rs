// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::normalize_category;
use crate::models::{Transaction, TransactionInput, TransactionPatch, TransactionType};
use crate::session::Session;
use crate::utils::parse_date;
use anyhow::{Context, Result, anyhow, bail};
use log::{debug, info};
use rusqlite::{Connection, OptionalExtension, Row, params};
use rust_decimal::Decimal;

/// Where transactions live. Every call is scoped to the session's user.
pub trait TransactionStore {
    /// All of the user's transactions, newest date first.
    fn fetch_all(&self, session: &Session) -> Result<Vec<Transaction>>;
    fn create(&self, session: &Session, input: &TransactionInput) -> Result<Transaction>;
    fn update(&self, session: &Session, id: i64, patch: &TransactionPatch) -> Result<Transaction>;
    fn delete(&self, session: &Session, id: i64) -> Result<()>;
}

pub struct SqliteStore<'a> {
    conn: &'a Connection,
}

const SELECT_COLUMNS: &str =
    "SELECT id, user_id, amount, description, category, type, date, created_at, updated_at FROM transactions";

impl<'a> SqliteStore<'a> {
    pub fn new(conn: &'a Connection) -> Self {
        SqliteStore { conn }
    }

    fn fetch_one(&self, session: &Session, id: i64) -> Result<Option<Transaction>> {
        let sql = format!("{} WHERE id=?1 AND user_id=?2", SELECT_COLUMNS);
        let raw = self
            .conn
            .query_row(&sql, params![id, session.user_id], RawRow::read)
            .optional()?;
        raw.map(RawRow::into_transaction).transpose()
    }
}

impl TransactionStore for SqliteStore<'_> {
    fn fetch_all(&self, session: &Session) -> Result<Vec<Transaction>> {
        let sql = format!(
            "{} WHERE user_id=?1 ORDER BY date DESC, id DESC",
            SELECT_COLUMNS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params![session.user_id])?;
        let mut data = Vec::new();
        while let Some(r) = rows.next()? {
            data.push(RawRow::read(r)?.into_transaction()?);
        }
        info!("Fetched {} transactions for {}", data.len(), session.email);
        Ok(data)
    }

    fn create(&self, session: &Session, input: &TransactionInput) -> Result<Transaction> {
        validate_amount(input.amount)?;
        if input.category.trim().is_empty() {
            bail!("Category is required");
        }
        let date = parse_date(input.date.trim())?;
        self.conn.execute(
            "INSERT INTO transactions(user_id, amount, description, category, type, date)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                session.user_id,
                input.amount.to_string(),
                input.description.trim(),
                normalize_category(Some(&input.category)),
                input.r#type.as_str(),
                date.to_string()
            ],
        )?;
        let id = self.conn.last_insert_rowid();
        debug!("Created transaction {} for {}", id, session.email);
        self.fetch_one(session, id)?
            .ok_or_else(|| anyhow!("Transaction {} vanished after insert", id))
    }

    fn update(&self, session: &Session, id: i64, patch: &TransactionPatch) -> Result<Transaction> {
        if patch.is_empty() {
            return self
                .fetch_one(session, id)?
                .ok_or_else(|| anyhow!("Transaction {} not found", id));
        }
        let mut sets: Vec<&str> = Vec::new();
        let mut values: Vec<String> = Vec::new();
        if let Some(amount) = patch.amount {
            validate_amount(amount)?;
            sets.push("amount=?");
            values.push(amount.to_string());
        }
        if let Some(ref description) = patch.description {
            sets.push("description=?");
            values.push(description.trim().to_string());
        }
        if let Some(ref category) = patch.category {
            sets.push("category=?");
            values.push(normalize_category(Some(category)));
        }
        if let Some(kind) = patch.r#type {
            sets.push("type=?");
            values.push(kind.as_str().to_string());
        }
        if let Some(ref date) = patch.date {
            sets.push("date=?");
            values.push(parse_date(date.trim())?.to_string());
        }
        let sql = format!(
            "UPDATE transactions SET {}, updated_at=datetime('now') WHERE id=? AND user_id=?",
            sets.join(", ")
        );
        let mut params_vec: Vec<&dyn rusqlite::ToSql> = values
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        params_vec.push(&id);
        params_vec.push(&session.user_id);
        let changed = self
            .conn
            .execute(&sql, rusqlite::params_from_iter(params_vec))?;
        if changed == 0 {
            bail!("Transaction {} not found", id);
        }
        debug!("Updated transaction {} for {}", id, session.email);
        self.fetch_one(session, id)?
            .ok_or_else(|| anyhow!("Transaction {} not found", id))
    }

    fn delete(&self, session: &Session, id: i64) -> Result<()> {
        let changed = self.conn.execute(
            "DELETE FROM transactions WHERE id=?1 AND user_id=?2",
            params![id, session.user_id],
        )?;
        if changed == 0 {
            bail!("Transaction {} not found", id);
        }
        debug!("Deleted transaction {} for {}", id, session.email);
        Ok(())
    }
}

/// Largest amount accepted for a single transaction, in whole currency units.
pub const MAX_AMOUNT: i64 = 1_000_000_000_000_000;

fn validate_amount(amount: Decimal) -> Result<()> {
    if amount < Decimal::ZERO {
        bail!("Amount must not be negative, got {}", amount);
    }
    if amount > Decimal::from(MAX_AMOUNT) {
        bail!("Amount {} exceeds the maximum of {}", amount, MAX_AMOUNT);
    }
    Ok(())
}

// Column values as stored; parsed outside the rusqlite row callback so
// failures carry context.
struct RawRow {
    id: i64,
    user_id: i64,
    amount: String,
    description: String,
    category: Option<String>,
    kind: String,
    date: String,
    created_at: Option<String>,
    updated_at: Option<String>,
}

impl RawRow {
    fn read(r: &Row<'_>) -> rusqlite::Result<RawRow> {
        Ok(RawRow {
            id: r.get(0)?,
            user_id: r.get(1)?,
            amount: r.get(2)?,
            description: r.get(3)?,
            category: r.get(4)?,
            kind: r.get(5)?,
            date: r.get(6)?,
            created_at: r.get(7)?,
            updated_at: r.get(8)?,
        })
    }

    fn into_transaction(self) -> Result<Transaction> {
        let amount = self
            .amount
            .parse::<Decimal>()
            .with_context(|| format!("Invalid amount '{}' in transaction {}", self.amount, self.id))?;
        let kind = self
            .kind
            .parse::<TransactionType>()
            .with_context(|| format!("Transaction {}", self.id))?;
        Ok(Transaction {
            id: self.id,
            user_id: self.user_id,
            amount,
            description: self.description,
            category: self.category,
            r#type: kind,
            date: self.date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
