// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Pure aggregation over a transaction snapshot.
//!
//! Nothing here performs I/O or keeps state between calls; each function
//! borrows the snapshot and returns a freshly built view.

pub mod category;
pub mod error;
pub mod normalize;
pub mod palette;
pub mod summary;
pub mod trend;

pub use category::{CategoryDistribution, CategorySlice, compute_category_distribution};
pub use error::EngineError;
pub use normalize::{OTHER_CATEGORY, normalize_category};
pub use palette::{Color, Palette};
pub use summary::{SummaryTotals, compute_summary};
pub use trend::{MONTH_LABELS, MonthlyAmount, MonthlyTrend, compute_monthly_trend, parse_calendar_date};

use crate::models::Transaction;
use serde::Serialize;

/// All three views derived from the same snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub summary: SummaryTotals,
    pub categories: CategoryDistribution,
    pub trend: MonthlyTrend,
}

impl Overview {
    pub fn from_snapshot(transactions: &[Transaction], palette: &Palette) -> Self {
        Overview {
            summary: compute_summary(transactions),
            categories: compute_category_distribution(transactions, palette),
            trend: compute_monthly_trend(transactions),
        }
    }
}
