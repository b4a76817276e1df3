// Copyright (c) 2025 Cashbook Project.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{Arg, ArgAction, Command, value_parser};

fn with_json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print pretty JSON instead of a table"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print JSON Lines instead of a table"),
    )
}

fn tx_field_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("kind")
            .long("kind")
            .required(true)
            .help("cash-in or cash-out"),
    )
    .arg(
        Arg::new("amount")
            .long("amount")
            .required(true)
            .help("Positive decimal amount"),
    )
    .arg(
        Arg::new("description")
            .long("description")
            .required(true)
            .help("Non-empty label, up to 100 characters"),
    )
    .arg(
        Arg::new("date")
            .long("date")
            .required(true)
            .help("Transaction date, YYYY-MM-DD"),
    )
}

pub fn build_cli() -> Command {
    Command::new("cashbook")
        .about("Cashbook: personal cash-in/cash-out ledger")
        .version(clap::crate_version!())
        .subcommand(Command::new("init").about("Create the database if it does not exist"))
        .subcommand(
            Command::new("tx")
                .about("Record and browse transactions")
                .subcommand(tx_field_args(
                    Command::new("add").about("Record a new transaction"),
                ))
                .subcommand(with_json_flags(
                    Command::new("list")
                        .about("List transactions, newest first")
                        .arg(
                            Arg::new("month")
                                .long("month")
                                .help("Filter to a month, YYYY-MM (or 'all')"),
                        )
                        .arg(
                            Arg::new("kind")
                                .long("kind")
                                .help("Filter to cash-in or cash-out (or 'all')"),
                        )
                        .arg(
                            Arg::new("limit")
                                .long("limit")
                                .value_parser(value_parser!(usize))
                                .help("Show at most N rows"),
                        ),
                ))
                .subcommand(tx_field_args(
                    Command::new("edit")
                        .about("Replace every field of an existing transaction")
                        .arg(Arg::new("id").required(true).help("Transaction id")),
                ))
                .subcommand(
                    Command::new("rm")
                        .about("Delete a transaction by id")
                        .arg(Arg::new("id").required(true).help("Transaction id")),
                ),
        )
        .subcommand(with_json_flags(
            Command::new("months").about("Months present in the ledger, newest first"),
        ))
        .subcommand(with_json_flags(
            Command::new("summary")
                .about("Cash-in, cash-out, and net totals")
                .arg(
                    Arg::new("month")
                        .long("month")
                        .help("Restrict totals to a month, YYYY-MM (or 'all')"),
                ),
        ))
        .subcommand(Command::new("seed").about("Load the sample ledger"))
        .subcommand(
            Command::new("import")
                .about("Import records from files")
                .subcommand(
                    Command::new("transactions").about("Import transactions from CSV").arg(
                        Arg::new("path")
                            .long("path")
                            .required(true)
                            .help("CSV with kind,amount,description,date columns"),
                    ),
                ),
        )
        .subcommand(
            Command::new("export")
                .about("Export records to files")
                .subcommand(
                    Command::new("transactions")
                        .about("Export all transactions")
                        .arg(
                            Arg::new("format")
                                .long("format")
                                .default_value("csv")
                                .help("csv or json"),
                        )
                        .arg(
                            Arg::new("out")
                                .long("out")
                                .required(true)
                                .help("Output file path"),
                        ),
                ),
        )
        .subcommand(Command::new("doctor").about("Scan the database for malformed rows"))
}
