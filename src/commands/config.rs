// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::engine::Palette;
use crate::utils::{
    clear_setting, get_default_user, get_palette, parse_palette, pretty_table, set_default_user,
    set_palette,
};
use anyhow::{Result, bail};
use rusqlite::{Connection, params};

pub fn handle(conn: &Connection, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("show", _)) => show(conn)?,
        Some(("palette", sub)) => {
            if sub.get_flag("reset") {
                clear_setting(conn, "palette")?;
                println!("Palette reset to built-in colors");
            } else {
                let palette = parse_palette(sub.get_one::<String>("colors").unwrap())?;
                set_palette(conn, &palette)?;
                println!("Palette set to {} color(s)", palette.len());
            }
        }
        Some(("default-user", sub)) => {
            let email = sub.get_one::<String>("email").unwrap().trim().to_lowercase();
            let exists: i64 = conn.query_row(
                "SELECT COUNT(*) FROM users WHERE email=?1",
                params![email],
                |r| r.get(0),
            )?;
            if exists == 0 {
                bail!("User '{}' not found", email);
            }
            set_default_user(conn, &email)?;
            println!("Default user set to {}", email);
        }
        _ => {}
    }
    Ok(())
}

fn show(conn: &Connection) -> Result<()> {
    let join = |p: &Palette| {
        p.colors()
            .iter()
            .map(|c| c.as_str())
            .collect::<Vec<_>>()
            .join(",")
    };
    let rows = vec![
        vec![
            "database".to_string(),
            crate::db::db_path()?.display().to_string(),
        ],
        vec![
            "default_user".to_string(),
            get_default_user(conn)?.unwrap_or_else(|| "(none)".into()),
        ],
        vec![
            "dashboard palette".to_string(),
            join(&get_palette(conn, Palette::dashboard())?),
        ],
        vec![
            "report palette".to_string(),
            join(&get_palette(conn, Palette::report())?),
        ],
    ];
    println!("{}", pretty_table(&["Setting", "Value"], rows));
    Ok(())
}
