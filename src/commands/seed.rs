// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;

use crate::models::{AccountType, CategoryKind, NewTransaction, TransactionType};
use crate::store::Ledger;

/// Load a small deterministic demo dataset: three accounts, a category tree,
/// and three months of typical activity ending in the current month.
pub fn handle(store: &mut Ledger) -> Result<()> {
    let checking = store.add_account(
        "Demo Checking",
        AccountType::Checking,
        dec("2500"),
        "USD",
        Some("Seeded demo account"),
    )?;
    let savings = store.add_account(
        "Demo Savings",
        AccountType::Savings,
        dec("10000"),
        "USD",
        Some("Seeded demo account"),
    )?;
    store.add_account("Demo Cash", AccountType::Cash, dec("300"), "USD", None)?;

    let salary = store.add_category("Salary", CategoryKind::Income, None, Some("#2e7d32"))?;
    let rent = store.add_category("Rent", CategoryKind::Expense, None, Some("#c62828"))?;
    let groceries = store.add_category("Groceries", CategoryKind::Expense, None, None)?;
    let dining = store.add_category("Dining", CategoryKind::Expense, None, None)?;
    store.add_category("Coffee", CategoryKind::Expense, Some(dining.id), None)?;
    let transfers = store.add_category("Savings transfer", CategoryKind::Expense, None, None)?;

    let today = Utc::now().date_naive();
    let month_index = today.year() * 12 + today.month() as i32 - 1;
    for back in (0..3).rev() {
        let index = month_index - back;
        let year = index.div_euclid(12);
        let month = (index.rem_euclid(12) + 1) as u32;
        let day = |d: u32| {
            NaiveDate::from_ymd_opt(year, month, d)
                .with_context(|| format!("invalid demo date {}-{:02}-{:02}", year, month, d))
        };

        store.add_transaction(income(day(1)?, dec("4200"), salary.id, checking.id))?;
        store.add_transaction(expense(day(3)?, dec("1450"), rent.id, checking.id))?;
        store.add_transaction(expense(day(10)?, dec("182.45"), groceries.id, checking.id))?;
        store.add_transaction(expense(day(15)?, dec("64.30"), dining.id, checking.id))?;
        store.add_transaction(NewTransaction {
            transaction_type: TransactionType::Transfer,
            amount: dec("500"),
            date: day(20)?,
            description: Some("Monthly savings".into()),
            category_id: transfers.id,
            from_account_id: checking.id,
            to_account_id: Some(savings.id),
            tags: None,
        })?;
        store.add_transaction(expense(day(24)?, dec("167.80"), groceries.id, checking.id))?;
    }

    println!("Seeded demo accounts, categories, and three months of transactions");
    Ok(())
}

fn income(date: NaiveDate, amount: Decimal, category_id: i64, account_id: i64) -> NewTransaction {
    NewTransaction {
        transaction_type: TransactionType::Income,
        amount,
        date,
        description: None,
        category_id,
        from_account_id: account_id,
        to_account_id: None,
        tags: None,
    }
}

fn expense(date: NaiveDate, amount: Decimal, category_id: i64, account_id: i64) -> NewTransaction {
    NewTransaction {
        transaction_type: TransactionType::Expense,
        amount,
        date,
        description: None,
        category_id,
        from_account_id: account_id,
        to_account_id: None,
        tags: None,
    }
}

fn dec(s: &str) -> Decimal {
    s.parse().expect("literal decimal")
}
