// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Ledger;
use crate::utils::{fmt_money, parse_decimal, pretty_table};
use anyhow::Result;

pub fn handle(store: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => {
            let name = sub.get_one::<String>("name").unwrap();
            let typ = sub.get_one::<String>("type").unwrap().parse()?;
            let balance = parse_decimal(sub.get_one::<String>("balance").unwrap())?;
            let ccy = sub.get_one::<String>("currency").unwrap().to_uppercase();
            let description = sub.get_one::<String>("description").map(|s| s.as_str());
            let account = store.add_account(name, typ, balance, &ccy, description)?;
            println!(
                "Added account '{}' ({}, {})",
                account.name,
                account.account_type,
                fmt_money(&account.balance, &account.currency)
            );
        }
        Some(("list", _)) => {
            let mut data = Vec::new();
            for a in store.list_accounts()? {
                data.push(vec![
                    a.id.to_string(),
                    a.name,
                    a.account_type.to_string(),
                    format!("{:.2}", a.balance),
                    a.currency,
                    if a.is_active { "yes".into() } else { "no".into() },
                ]);
            }
            println!(
                "{}",
                pretty_table(&["Id", "Name", "Type", "Balance", "CCY", "Active"], data)
            );
        }
        Some(("update", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            let name = sub.get_one::<String>("name").map(|s| s.as_str());
            let description = sub.get_one::<String>("description").map(|s| s.as_str());
            let active = sub.get_one::<bool>("active").copied();
            let account = store.update_account(id, name, description, active)?;
            println!("Updated account '{}'", account.name);
        }
        Some(("rm", sub)) => {
            let id = *sub.get_one::<i64>("id").unwrap();
            store.delete_account(id)?;
            println!("Removed account {}", id);
        }
        _ => {}
    }
    Ok(())
}
