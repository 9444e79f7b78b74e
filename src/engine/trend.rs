// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;

pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthlyAmount {
    pub month: &'static str,
    pub amount: Decimal,
}

/// Expense per calendar month, always `Jan..Dec`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MonthlyTrend {
    pub months: Vec<MonthlyAmount>,
    /// Expense records left out because their date could not be read.
    pub skipped: usize,
}

impl MonthlyTrend {
    fn empty() -> Self {
        MonthlyTrend {
            months: MONTH_LABELS
                .iter()
                .map(|&month| MonthlyAmount {
                    month,
                    amount: Decimal::ZERO,
                })
                .collect(),
            skipped: 0,
        }
    }

    pub fn get(&self, month: &str) -> Option<Decimal> {
        self.months
            .iter()
            .find(|m| m.month == month)
            .map(|m| m.amount)
    }

    pub fn total(&self) -> Decimal {
        self.months
            .iter()
            .fold(Decimal::ZERO, |acc, m| acc.saturating_add(m.amount))
    }
}

/// Read the calendar date a transaction was recorded on.
///
/// Only the date as written counts: a timestamp with an offset keeps the day
/// of that offset and is never shifted to UTC, so `2023-06-30T23:30:00-05:00`
/// stays in June.
pub fn parse_calendar_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(d);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        .map(|dt| dt.date())
}

pub fn compute_monthly_trend(transactions: &[Transaction]) -> MonthlyTrend {
    let mut trend = MonthlyTrend::empty();
    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        match parse_calendar_date(&t.date) {
            Some(date) => {
                let slot = &mut trend.months[date.month0() as usize].amount;
                *slot = slot.saturating_add(t.amount);
            }
            None => {
                warn!(
                    "Skipping transaction {} in monthly trend: unreadable date '{}'",
                    t.id, t.date
                );
                trend.skipped += 1;
            }
        }
    }
    trend
}
