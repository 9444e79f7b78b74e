// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::User;
use crate::utils::pretty_table;
use anyhow::{Context, Result, bail};
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let email = sub.get_one::<String>("email").unwrap();
            let user = add_user(conn, email)?;
            println!("Added user '{}' (id {})", user.email, user.id);
        }
        Some(("list", _)) => {
            let data = list_users(conn)?
                .into_iter()
                .map(|u| vec![u.id.to_string(), u.email])
                .collect();
            println!("{}", pretty_table(&["Id", "Email"], data));
        }
        _ => {}
    }
    Ok(())
}

pub fn add_user(conn: &Connection, email: &str) -> Result<User> {
    let email = email.trim().to_lowercase();
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && !domain.is_empty() => {}
        _ => bail!("Invalid email '{}'", email),
    }
    conn.execute("INSERT INTO users(email) VALUES (?1)", params![email])
        .with_context(|| format!("User '{}' already exists", email))?;
    Ok(User {
        id: conn.last_insert_rowid(),
        email,
    })
}

pub fn list_users(conn: &Connection) -> Result<Vec<User>> {
    let mut stmt = conn.prepare("SELECT id, email FROM users ORDER BY email")?;
    let rows = stmt.query_map([], |r| {
        Ok(User {
            id: r.get(0)?,
            email: r.get(1)?,
        })
    })?;
    let mut data = Vec::new();
    for row in rows {
        data.push(row?);
    }
    Ok(data)
}
