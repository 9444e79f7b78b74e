// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use env_logger::Env;

use spendview::{cli, commands, db, session::Session};

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn")).init();

    let cli = cli::build_cli();
    let matches = cli.get_matches();

    let conn = db::open_or_init()?;
    let user = matches.get_one::<String>("user").map(String::as_str);

    match matches.subcommand() {
        Some(("init", _)) => {
            println!("Database initialized at {}", db::db_path()?.display());
        }
        Some(("user", sub)) => commands::users::handle(&conn, sub)?,
        Some(("config", sub)) => commands::config::handle(&conn, sub)?,
        Some(("tx", sub)) => {
            let session = Session::open(&conn, user)?;
            commands::transactions::handle(&conn, &session, sub)?
        }
        Some(("dashboard", sub)) => {
            let session = Session::open(&conn, user)?;
            commands::dashboard::handle(&conn, &session, sub)?
        }
        Some(("report", sub)) => {
            let session = Session::open(&conn, user)?;
            commands::reports::handle(&conn, &session, sub)?
        }
        _ => {
            cli::build_cli().print_help()?;
            println!();
        }
    }
    Ok(())
}
