// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::Result;
use serde_json::json;

use crate::store::Ledger;

pub fn handle(store: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => export_transactions(store, sub),
        Some(("accounts", sub)) => export_accounts(store, sub),
        _ => Ok(()),
    }
}

fn export_transactions(store: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let mut details = store.filtered_transactions(None, None, None, None)?;
    // Export oldest first.
    details.reverse();

    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record([
                "date",
                "type",
                "amount",
                "category",
                "from_account",
                "to_account",
                "description",
                "tags",
            ])?;
            for d in &details {
                let t = &d.transaction;
                wtr.write_record([
                    t.date.to_string(),
                    t.transaction_type.to_string(),
                    t.amount.to_string(),
                    d.category_name.clone(),
                    d.from_account_name.clone(),
                    d.to_account_name.clone().unwrap_or_default(),
                    t.description.clone().unwrap_or_default(),
                    t.tags.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = details
                .iter()
                .map(|d| {
                    let t = &d.transaction;
                    json!({
                        "date": t.date.to_string(),
                        "type": t.transaction_type.to_string(),
                        "amount": t.amount.to_string(),
                        "category": d.category_name,
                        "from_account": d.from_account_name,
                        "to_account": d.to_account_name,
                        "description": t.description,
                        "tags": t.tags,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported transactions to {}", out);
    Ok(())
}

fn export_accounts(store: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let fmt = sub.get_one::<String>("format").unwrap().to_lowercase();
    let out = sub.get_one::<String>("out").unwrap();

    let accounts = store.list_accounts()?;
    match fmt.as_str() {
        "csv" => {
            let mut wtr = csv::Writer::from_path(out)?;
            wtr.write_record(["name", "type", "balance", "currency", "description"])?;
            for a in &accounts {
                wtr.write_record([
                    a.name.clone(),
                    a.account_type.to_string(),
                    a.balance.to_string(),
                    a.currency.clone(),
                    a.description.clone().unwrap_or_default(),
                ])?;
            }
            wtr.flush()?;
        }
        "json" => {
            let items: Vec<_> = accounts
                .iter()
                .map(|a| {
                    json!({
                        "name": a.name,
                        "type": a.account_type.to_string(),
                        "balance": a.balance.to_string(),
                        "currency": a.currency,
                        "description": a.description,
                    })
                })
                .collect();
            std::fs::write(out, serde_json::to_string_pretty(&items)?)?;
        }
        _ => {
            eprintln!("Unknown format: {} (use csv|json)", fmt);
            return Ok(());
        }
    }
    println!("Exported accounts to {}", out);
    Ok(())
}
