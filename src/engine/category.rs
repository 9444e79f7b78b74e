// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::normalize::normalize_category;
use super::palette::{Color, Palette};
use crate::models::{Transaction, TransactionType};
use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySlice {
    pub name: String,
    pub value: Decimal,
    pub color: Color,
}

/// Expense totals per category, in the order each category first appears in
/// the snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(transparent)]
pub struct CategoryDistribution {
    slices: Vec<CategorySlice>,
}

impl CategoryDistribution {
    pub fn slices(&self) -> &[CategorySlice] {
        &self.slices
    }

    pub fn get(&self, name: &str) -> Option<&CategorySlice> {
        self.slices.iter().find(|s| s.name == name)
    }

    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn total(&self) -> Decimal {
        self.slices
            .iter()
            .fold(Decimal::ZERO, |acc, s| acc.saturating_add(s.value))
    }

    /// Fraction of total expense held by `name`, in `0..=1`.
    ///
    /// `None` for unknown categories or when nothing was spent at all.
    pub fn share(&self, name: &str) -> Option<Decimal> {
        let total = self.total();
        if total.is_zero() {
            return None;
        }
        self.get(name).map(|s| s.value / total)
    }
}

pub fn compute_category_distribution(
    transactions: &[Transaction],
    palette: &Palette,
) -> CategoryDistribution {
    let mut order: Vec<String> = Vec::new();
    let mut totals: HashMap<String, Decimal> = HashMap::new();

    for t in transactions
        .iter()
        .filter(|t| t.r#type == TransactionType::Expense)
    {
        let key = normalize_category(t.category.as_deref());
        match totals.get_mut(&key) {
            Some(sum) => *sum = sum.saturating_add(t.amount),
            None => {
                totals.insert(key.clone(), t.amount);
                order.push(key);
            }
        }
    }

    let slices = order
        .into_iter()
        .enumerate()
        .map(|(i, name)| {
            let value = totals.get(&name).copied().unwrap_or(Decimal::ZERO);
            CategorySlice {
                name,
                value,
                color: palette.color_at(i).clone(),
            }
        })
        .collect();
    CategoryDistribution { slices }
}
