// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

/// Label given to transactions without a usable category.
pub const OTHER_CATEGORY: &str = "Other";

/// Canonical category label for grouping and display.
///
/// Missing, empty and whitespace-only values become [`OTHER_CATEGORY`];
/// anything else is trimmed. Every place that groups or stores categories
/// goes through this function.
pub fn normalize_category(raw: Option<&str>) -> String {
    match raw.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => OTHER_CATEGORY.to_string(),
    }
}
