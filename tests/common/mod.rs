// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use chrono::NaiveDate;
use rusqlite::Connection;
use rust_decimal::Decimal;

use tallybook::db;
use tallybook::models::{
    Account, AccountType, Category, CategoryKind, NewTransaction, TransactionType,
};
use tallybook::store::Ledger;

pub fn setup() -> Ledger {
    let conn = Connection::open_in_memory().unwrap();
    db::init_schema(&conn).unwrap();
    Ledger::new(conn)
}

pub fn d(s: &str) -> NaiveDate {
    s.parse().unwrap()
}

pub fn dec(s: &str) -> Decimal {
    s.parse().unwrap()
}

pub fn checking(store: &mut Ledger, name: &str, balance: &str) -> Account {
    store
        .add_account(name, AccountType::Checking, dec(balance), "USD", None)
        .unwrap()
}

pub fn category(store: &mut Ledger, name: &str, kind: CategoryKind) -> Category {
    store.add_category(name, kind, None, None).unwrap()
}

pub fn income(store: &mut Ledger, date: &str, amount: &str, category_id: i64, account_id: i64) {
    store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Income,
            amount: dec(amount),
            date: d(date),
            description: None,
            category_id,
            from_account_id: account_id,
            to_account_id: None,
            tags: None,
        })
        .unwrap();
}

pub fn expense(store: &mut Ledger, date: &str, amount: &str, category_id: i64, account_id: i64) {
    store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Expense,
            amount: dec(amount),
            date: d(date),
            description: None,
            category_id,
            from_account_id: account_id,
            to_account_id: None,
            tags: None,
        })
        .unwrap();
}

pub fn transfer(
    store: &mut Ledger,
    date: &str,
    amount: &str,
    category_id: i64,
    from_id: i64,
    to_id: i64,
) {
    store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Transfer,
            amount: dec(amount),
            date: d(date),
            description: None,
            category_id,
            from_account_id: from_id,
            to_account_id: Some(to_id),
            tags: None,
        })
        .unwrap();
}
