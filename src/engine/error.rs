// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Color palette is empty; at least one color is required")]
    EmptyPalette,
    #[error("Invalid color '{0}', expected #RRGGBB")]
    InvalidColor(String),
}
