// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use csv::ReaderBuilder;

use crate::error::LedgerError;
use crate::models::{CategoryKind, NewTransaction, TransactionType};
use crate::store::Ledger;
use crate::utils::{parse_amount, parse_date, parse_decimal};

pub fn handle(store: &mut Ledger, m: &clap::ArgMatches) -> Result<()> {
    match m.subcommand() {
        Some(("transactions", sub)) => import_transactions(store, sub),
        Some(("accounts", sub)) => import_accounts(store, sub),
        _ => Ok(()),
    }
}

/// Columns: date, type, amount, category, from_account, to_account,
/// description, tags. Unknown categories are created as expense buckets;
/// accounts must already exist. Each row goes through the store so balances
/// stay consistent.
fn import_transactions(store: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let date_raw = rec.get(0).context("date missing")?.trim();
        let type_raw = rec.get(1).context("type missing")?.trim();
        let amount_raw = rec.get(2).context("amount missing")?.trim();
        let category = rec.get(3).context("category missing")?.trim();
        let from_account = rec.get(4).context("from_account missing")?.trim();
        let to_account = rec.get(5).map(str::trim).filter(|s| !s.is_empty());
        let description = rec
            .get(6)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        let tags = rec
            .get(7)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        let date =
            parse_date(date_raw).with_context(|| format!("Invalid date '{}'", date_raw))?;
        let transaction_type: TransactionType = type_raw.parse()?;
        let amount = parse_amount(amount_raw)
            .with_context(|| format!("Invalid amount '{}' on {}", amount_raw, date_raw))?;

        let category_id = get_or_create_category(store, category)?;
        let from_account_id = store.account_id_by_name(from_account)?;
        let to_account_id = match to_account {
            Some(name) => Some(store.account_id_by_name(name)?),
            None => None,
        };

        store.add_transaction(NewTransaction {
            transaction_type,
            amount,
            date,
            description,
            category_id,
            from_account_id,
            to_account_id,
            tags,
        })?;
        imported += 1;
    }
    println!("Imported {} transactions from {}", imported, path);
    Ok(())
}

/// Columns: name, type, balance, currency, description.
fn import_accounts(store: &mut Ledger, sub: &clap::ArgMatches) -> Result<()> {
    let path = sub.get_one::<String>("path").unwrap().trim();
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .with_context(|| format!("Open CSV {}", path))?;

    let mut imported = 0usize;
    for result in rdr.records() {
        let rec = result?;
        let name = rec.get(0).context("name missing")?.trim();
        let type_raw = rec.get(1).context("type missing")?.trim();
        let balance_raw = rec.get(2).context("balance missing")?.trim();
        let currency = rec.get(3).context("currency missing")?.trim();
        let description = rec.get(4).map(str::trim).filter(|s| !s.is_empty());

        let account_type = type_raw.parse()?;
        let balance = parse_decimal(balance_raw)
            .with_context(|| format!("Invalid balance '{}' for {}", balance_raw, name))?;
        store.add_account(name, account_type, balance, &currency.to_uppercase(), description)?;
        imported += 1;
    }
    println!("Imported {} accounts from {}", imported, path);
    Ok(())
}

fn get_or_create_category(store: &mut Ledger, name: &str) -> Result<i64> {
    match store.category_id_by_name(name) {
        Ok(id) => Ok(id),
        Err(LedgerError::NotFound { .. }) => {
            // Imported rows carry no kind; default new categories to expense.
            let category = store.add_category(name, CategoryKind::Expense, None, None)?;
            Ok(category.id)
        }
        Err(e) => Err(e.into()),
    }
}
