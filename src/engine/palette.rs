// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use super::error::EngineError;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static HEX_COLOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^#[0-9A-Fa-f]{6}$").expect("valid hex color pattern"));

pub const DASHBOARD_COLORS: [&str; 5] = ["#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF"];
pub const REPORT_COLORS: [&str; 6] = [
    "#FF6384", "#36A2EB", "#FFCE56", "#4BC0C0", "#9966FF", "#FF9F40",
];

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(String);

impl Color {
    pub fn parse(s: &str) -> Result<Self, EngineError> {
        let s = s.trim();
        if HEX_COLOR.is_match(s) {
            Ok(Color(s.to_uppercase()))
        } else {
            Err(EngineError::InvalidColor(s.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Non-empty, ordered list of chart colors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Color>,
}

impl Palette {
    pub fn new(colors: Vec<Color>) -> Result<Self, EngineError> {
        if colors.is_empty() {
            return Err(EngineError::EmptyPalette);
        }
        Ok(Palette { colors })
    }

    pub fn from_hex<S: AsRef<str>>(colors: &[S]) -> Result<Self, EngineError> {
        let parsed = colors
            .iter()
            .map(|c| Color::parse(c.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Palette::new(parsed)
    }

    pub fn dashboard() -> Self {
        Palette::builtin(&DASHBOARD_COLORS)
    }

    pub fn report() -> Self {
        Palette::builtin(&REPORT_COLORS)
    }

    fn builtin(colors: &[&str]) -> Self {
        Palette {
            colors: colors.iter().map(|c| Color(c.to_string())).collect(),
        }
    }

    /// Color for the `index`-th category, wrapping around the palette.
    pub fn color_at(&self, index: usize) -> &Color {
        &self.colors[index % self.colors.len()]
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn colors(&self) -> &[Color] {
        &self.colors
    }
}
