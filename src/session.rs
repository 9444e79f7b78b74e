// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::User;
use crate::utils::get_default_user;
use anyhow::{Context, Result, anyhow};
use rusqlite::{Connection, OptionalExtension, params};

/// The signed-in user, passed explicitly to everything that reads or writes
/// that user's transactions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: i64,
    pub email: String,
}

impl Session {
    pub fn for_user(user: &User) -> Self {
        Session {
            user_id: user.id,
            email: user.email.clone(),
        }
    }

    /// Open a session for `email`, or for the configured default user when
    /// no email is given.
    pub fn open(conn: &Connection, email: Option<&str>) -> Result<Session> {
        let email = match email.map(str::trim).filter(|e| !e.is_empty()) {
            Some(e) => e.to_lowercase(),
            None => get_default_user(conn)?.ok_or_else(|| {
                anyhow!("No user selected; pass --user or run 'config default-user'")
            })?,
        };
        let id: Option<i64> = conn
            .query_row(
                "SELECT id FROM users WHERE email=?1",
                params![email],
                |r| r.get(0),
            )
            .optional()
            .with_context(|| format!("Look up user '{}'", email))?;
        let user_id = id.ok_or_else(|| anyhow!("User '{}' not found", email))?;
        Ok(Session { user_id, email })
    }

    /// Name used in greetings: the part of the email before `@`.
    pub fn display_name(&self) -> &str {
        match self.email.split('@').next() {
            Some(name) if !name.is_empty() => name,
            _ => "User",
        }
    }
}
