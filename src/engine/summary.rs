// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;

/// Headline totals for a snapshot.
///
/// Sums saturate at `Decimal::MAX` instead of overflowing.
///
/// Comparison against a previous period is not part of this struct: there is
/// no history to compare with, so nothing is reported rather than a made-up
/// figure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct SummaryTotals {
    pub total_expenses: Decimal,
    pub total_income: Decimal,
    pub current_balance: Decimal,
}

pub fn compute_summary(transactions: &[Transaction]) -> SummaryTotals {
    let mut total_expenses = Decimal::ZERO;
    let mut total_income = Decimal::ZERO;
    for t in transactions {
        match t.r#type {
            TransactionType::Expense => total_expenses = total_expenses.saturating_add(t.amount),
            TransactionType::Income => total_income = total_income.saturating_add(t.amount),
        }
    }
    SummaryTotals {
        total_expenses,
        total_income,
        current_balance: total_income.saturating_sub(total_expenses),
    }
}
