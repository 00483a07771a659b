// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::models::{NewTransaction, TransactionType};
use crate::store::Ledger;
use crate::utils::{maybe_print_json, parse_amount, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let new = read_tx_args(store, sub)?;
            let tx = store.add_transaction(new)?;
            println!(
                "Recorded {} {} on {} (tx {})",
                tx.transaction_type, tx.amount, tx.date, tx.id
            );
        }
        Some(("list", sub)) => list(store, sub)?,
        Some(("update", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let new = read_tx_args(store, sub)?;
            let tx = store.update_transaction(id, new)?;
            println!("Updated tx {} ({} {})", tx.id, tx.transaction_type, tx.amount);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_transaction(id)?;
            println!("Removed tx {}", id);
        }
        _ => {}
    }
    Ok(())
}

fn read_tx_args(store: &Ledger, sub: &clap::ArgMatches) -> Result<NewTransaction> {
    let date = parse_date(sub.get_one::<String>("date").unwrap())?;
    let transaction_type: TransactionType = sub.get_one::<String>("type").unwrap().parse()?;
    let amount = parse_amount(sub.get_one::<String>("amount").unwrap())?;
    let category_id = store.category_id_by_name(sub.get_one::<String>("category").unwrap())?;
    let from_account_id = store.account_id_by_name(sub.get_one::<String>("from").unwrap())?;
    let to_account_id = match sub.get_one::<String>("to") {
        Some(name) => Some(store.account_id_by_name(name)?),
        None => None,
    };
    Ok(NewTransaction {
        transaction_type,
        amount,
        date,
        description: sub.get_one::<String>("description").cloned(),
        category_id,
        from_account_id,
        to_account_id,
        tags: sub.get_one::<String>("tags").cloned(),
    })
}

fn list(store: &Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");

    let from = match sub.get_one::<String>("from-date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let to = match sub.get_one::<String>("to-date") {
        Some(s) => Some(parse_date(s)?),
        None => None,
    };
    let type_filter = match sub.get_one::<String>("type") {
        Some(s) => Some(s.parse::<TransactionType>()?),
        None => None,
    };
    let account_filter = match sub.get_one::<String>("account") {
        Some(name) => Some(store.account_id_by_name(name)?),
        None => None,
    };

    let mut data = store.filtered_transactions(from, to, type_filter, account_filter)?;
    if let Some(limit) = sub.get_one::<usize>("limit") {
        data.truncate(*limit);
    }

    if !maybe_print_json(json_flag, jsonl_flag, &data)? {
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|d| {
                let t = &d.transaction;
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.transaction_type.to_string(),
                    format!("{:.2}", t.amount),
                    d.category_name.clone(),
                    d.from_account_name.clone(),
                    d.to_account_name.clone().unwrap_or_default(),
                    t.description.clone().unwrap_or_default(),
                ]
            })
            .collect();
        println!(
            "{}",
            pretty_table(
                &["Id", "Date", "Type", "Amount", "Category", "From", "To", "Description"],
                rows,
            )
        );
    }
    Ok(())
}
