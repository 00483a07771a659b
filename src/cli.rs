// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use clap::{crate_version, value_parser, Arg, ArgAction, Command};

fn json_flags(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("json")
            .long("json")
            .action(ArgAction::SetTrue)
            .help("Print as pretty JSON"),
    )
    .arg(
        Arg::new("jsonl")
            .long("jsonl")
            .action(ArgAction::SetTrue)
            .help("Print as JSON lines"),
    )
}

pub fn build_cli() -> Command {
    Command::new("tallybook")
        .version(crate_version!())
        .about("Local personal-finance ledger: accounts, categories, transactions, reports")
        .subcommand(Command::new("init").about("Initialize the database"))
        .subcommand(account_cmd())
        .subcommand(category_cmd())
        .subcommand(tx_cmd())
        .subcommand(report_cmd())
        .subcommand(import_cmd())
        .subcommand(export_cmd())
        .subcommand(Command::new("seed").about("Load a small demo dataset"))
        .subcommand(Command::new("doctor").about("Scan the ledger for invariant violations"))
}

fn account_cmd() -> Command {
    Command::new("account")
        .about("Manage accounts")
        .subcommand(
            Command::new("add")
                .about("Add an account")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("type")
                        .long("type")
                        .default_value("checking")
                        .help("checking|savings|credit_card|cash|investment"),
                )
                .arg(Arg::new("balance").long("balance").default_value("0"))
                .arg(Arg::new("currency").long("currency").default_value("USD"))
                .arg(Arg::new("description").long("description")),
        )
        .subcommand(Command::new("list").about("List accounts"))
        .subcommand(
            Command::new("update")
                .about("Update an account")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(Arg::new("name").long("name"))
                .arg(Arg::new("description").long("description"))
                .arg(
                    Arg::new("active")
                        .long("active")
                        .value_parser(value_parser!(bool)),
                ),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete an account (refused while transactions reference it)")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn category_cmd() -> Command {
    Command::new("category")
        .about("Manage categories")
        .subcommand(
            Command::new("add")
                .about("Add a category")
                .arg(Arg::new("name").required(true))
                .arg(
                    Arg::new("kind")
                        .long("kind")
                        .default_value("expense")
                        .help("income|expense"),
                )
                .arg(
                    Arg::new("parent")
                        .long("parent")
                        .value_parser(value_parser!(i64))
                        .help("Parent category id"),
                )
                .arg(Arg::new("color").long("color").help("Hex color tag")),
        )
        .subcommand(Command::new("list").about("List categories with their parents"))
        .subcommand(
            Command::new("update")
                .about("Update a category")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64)))
                .arg(Arg::new("name").long("name"))
                .arg(
                    Arg::new("parent")
                        .long("parent")
                        .value_parser(value_parser!(i64)),
                )
                .arg(Arg::new("color").long("color")),
        )
        .subcommand(
            Command::new("rm")
                .about("Delete a category (refused while children or transactions reference it)")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn tx_args(cmd: Command) -> Command {
    cmd.arg(Arg::new("date").long("date").required(true))
        .arg(
            Arg::new("type")
                .long("type")
                .default_value("expense")
                .help("income|expense|transfer"),
        )
        .arg(Arg::new("amount").long("amount").required(true))
        .arg(Arg::new("category").long("category").required(true))
        .arg(
            Arg::new("from")
                .long("from")
                .required(true)
                .help("Source account name"),
        )
        .arg(
            Arg::new("to")
                .long("to")
                .help("Destination account name (transfers only)"),
        )
        .arg(Arg::new("description").long("description"))
        .arg(Arg::new("tags").long("tags").help("Comma-separated labels"))
}

fn tx_cmd() -> Command {
    Command::new("tx")
        .about("Manage transactions")
        .subcommand(tx_args(Command::new("add").about("Record a transaction")))
        .subcommand(json_flags(
            Command::new("list")
                .about("List transactions, newest first")
                .arg(Arg::new("from-date").long("from-date"))
                .arg(Arg::new("to-date").long("to-date"))
                .arg(Arg::new("type").long("type"))
                .arg(Arg::new("account").long("account"))
                .arg(
                    Arg::new("limit")
                        .long("limit")
                        .value_parser(value_parser!(usize)),
                ),
        ))
        .subcommand(tx_args(
            Command::new("update")
                .about("Replace a transaction; balances are re-adjusted by the delta")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        ))
        .subcommand(
            Command::new("rm")
                .about("Delete a transaction, reversing its balance effect")
                .arg(Arg::new("id").required(true).value_parser(value_parser!(i64))),
        )
}

fn report_cmd() -> Command {
    Command::new("report")
        .about("Financial reports")
        .subcommand(json_flags(
            Command::new("summary")
                .about("Monthly income/expense summary with category breakdown")
                .arg(Arg::new("year").required(true).value_parser(value_parser!(i32)))
                .arg(Arg::new("month").required(true).value_parser(value_parser!(u32))),
        ))
        .subcommand(json_flags(
            Command::new("balances")
                .about("Daily running balance over a date range")
                .arg(Arg::new("start").required(true))
                .arg(Arg::new("end").required(true)),
        ))
        .subcommand(json_flags(
            Command::new("compare")
                .about("Income vs expenses for each month of a year")
                .arg(Arg::new("year").required(true).value_parser(value_parser!(i32))),
        ))
        .subcommand(json_flags(
            Command::new("trends")
                .about("Income, expenses, and savings rate per month")
                .arg(
                    Arg::new("months")
                        .long("months")
                        .default_value("12")
                        .value_parser(value_parser!(u32)),
                ),
        ))
}

fn import_cmd() -> Command {
    Command::new("import")
        .about("Import CSV data")
        .subcommand(
            Command::new("transactions")
                .about("Import transactions from CSV")
                .arg(Arg::new("path").long("path").required(true)),
        )
        .subcommand(
            Command::new("accounts")
                .about("Import accounts from CSV")
                .arg(Arg::new("path").long("path").required(true)),
        )
}

fn export_cmd() -> Command {
    Command::new("export")
        .about("Export ledger data")
        .subcommand(
            Command::new("transactions")
                .about("Export transactions")
                .arg(Arg::new("format").long("format").default_value("csv"))
                .arg(Arg::new("out").long("out").required(true)),
        )
        .subcommand(
            Command::new("accounts")
                .about("Export accounts")
                .arg(Arg::new("format").long("format").default_value("csv"))
                .arg(Arg::new("out").long("out").required(true)),
        )
}
