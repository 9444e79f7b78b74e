// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn output_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .conflicts_with("jsonl")
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print one JSON object per line"),
    )
}

fn palette_arg() -> Arg {
    Arg::new("palette")
        .long("palette")
        .help("Comma-separated #RRGGBB colors for this run only")
}

pub fn build_cli() -> Command {
    Command::new("spendview")
        .about("Track expenses and income; summarize spending by category and month")
        .version(clap::crate_version!())
        .arg(
            Arg::new("user")
                .long("user")
                .global(true)
                .help("Email of the user to act as (defaults to config default-user)"),
        )
        .subcommand(Command::new("init").about("Create the database"))
        .subcommand(
            Command::new("user")
                .about("Manage local users")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("email").long("email").required(true)),
                )
                .subcommand(Command::new("list")),
        )
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(
                    Command::new("add")
                        .arg(Arg::new("amount").long("amount").required(true))
                        .arg(
                            Arg::new("type")
                                .long("type")
                                .default_value("expense")
                                .help("expense|income"),
                        )
                        .arg(Arg::new("category").long("category").required(true))
                        .arg(
                            Arg::new("date")
                                .long("date")
                                .required(true)
                                .help("YYYY-MM-DD"),
                        )
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(output_flags(
                    Command::new("list")
                        .arg(Arg::new("type").long("type").help("expense|income"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("month").long("month").help("YYYY-MM"))
                        .arg(
                            Arg::new("search")
                                .long("search")
                                .help("Match description or category"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize)),
                        ),
                ))
                .subcommand(
                    Command::new("edit")
                        .arg(
                            Arg::new("id")
                                .long("id")
                                .required(true)
                                .help("Transaction id"),
                        )
                        .arg(Arg::new("amount").long("amount"))
                        .arg(Arg::new("type").long("type"))
                        .arg(Arg::new("category").long("category"))
                        .arg(Arg::new("date").long("date"))
                        .arg(Arg::new("description").long("description")),
                )
                .subcommand(
                    Command::new("rm").arg(
                        Arg::new("id")
                            .long("id")
                            .required(true)
                            .help("Transaction id"),
                    ),
                ),
        )
        .subcommand(output_flags(
            Command::new("dashboard")
                .about("Summary, charts and recent transactions")
                .arg(palette_arg())
                .arg(
                    Arg::new("recent")
                        .long("recent")
                        .value_parser(value_parser!(usize))
                        .default_value("5"),
                ),
        ))
        .subcommand(
            Command::new("report")
                .about("Spending reports")
                .subcommand(output_flags(Command::new("summary")))
                .subcommand(output_flags(
                    Command::new("categories").arg(palette_arg()),
                ))
                .subcommand(output_flags(Command::new("trends"))),
        )
        .subcommand(
            Command::new("config")
                .about("Show or change settings")
                .subcommand(Command::new("show"))
                .subcommand(
                    Command::new("palette")
                        .arg(
                            Arg::new("colors")
                                .long("colors")
                                .required_unless_present("reset")
                                .help("Comma-separated #RRGGBB colors"),
                        )
                        .arg(
                            Arg::new("reset")
                                .long("reset")
                                .action(ArgAction::SetTrue)
                                .conflicts_with("colors"),
                        ),
                )
                .subcommand(
                    Command::new("default-user")
                        .arg(Arg::new("email").long("email").required(true)),
                ),
        )
}
