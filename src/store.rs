// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The ledger store: accounts, categories, and transactions over a single
//! SQLite connection.
//!
//! Read methods take `&self`; every mutation that touches a cached account
//! balance takes `&mut self` and runs inside one SQL transaction, so the
//! row insert/update/delete and the balance adjustment commit or roll back
//! together.
//!
//! Monetary sums are folded in Rust as `Decimal`. Amounts live in TEXT
//! columns and SQLite's SUM() would push them through binary floats.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension};
use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::{
    Account, AccountType, Category, CategoryKind, NewTransaction, Transaction, TransactionDetail,
    TransactionType,
};

const TX_COLS: &str = "t.id, t.type, t.amount, t.date, t.description, t.category_id, \
     t.from_account_id, t.to_account_id, t.tags, t.receipt_path, t.is_recurring, \
     t.recurring_interval, t.recurring_end_date, t.created_at, t.updated_at";

const ACCOUNT_COLS: &str =
    "id, name, type, balance, currency, is_active, description, created_at, updated_at";

const CATEGORY_COLS: &str = "id, name, kind, parent_id, color_code, created_at, updated_at";

pub struct Ledger {
    conn: Connection,
}

impl Ledger {
    pub fn new(conn: Connection) -> Self {
        Self { conn }
    }

    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    // ---- accounts ----

    pub fn add_account(
        &mut self,
        name: &str,
        account_type: AccountType,
        balance: Decimal,
        currency: &str,
        description: Option<&str>,
    ) -> Result<Account, LedgerError> {
        self.conn.execute(
            "INSERT INTO accounts(name, type, balance, currency, description)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                name,
                account_type.as_str(),
                balance.to_string(),
                currency,
                description
            ],
        )?;
        self.get_account(self.conn.last_insert_rowid())
    }

    pub fn get_account(&self, id: i64) -> Result<Account, LedgerError> {
        let sql = format!("SELECT {} FROM accounts WHERE id=?1", ACCOUNT_COLS);
        let raw = self
            .conn
            .query_row(&sql, params![id], read_account_row)
            .optional()?;
        raw.map(raw_to_account)
            .ok_or_else(|| LedgerError::not_found("account", id))?
    }

    pub fn account_id_by_name(&self, name: &str) -> Result<i64, LedgerError> {
        let id: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM accounts WHERE name=?1",
                params![name],
                |r| r.get(0),
            )
            .optional()?;
        id.ok_or_else(|| LedgerError::not_found("account", name))
    }

    pub fn list_accounts(&self) -> Result<Vec<Account>, LedgerError> {
        let sql = format!("SELECT {} FROM accounts ORDER BY name", ACCOUNT_COLS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], read_account_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(raw_to_account(row?)?);
        }
        Ok(out)
    }

    /// Sum of all cached account balances.
    pub fn total_balance(&self) -> Result<Decimal, LedgerError> {
        let mut total = Decimal::ZERO;
        for account in self.list_accounts()? {
            total += account.balance;
        }
        Ok(total)
    }

    pub fn update_account(
        &mut self,
        id: i64,
        name: Option<&str>,
        description: Option<&str>,
        is_active: Option<bool>,
    ) -> Result<Account, LedgerError> {
        let current = self.get_account(id)?;
        let name = name.unwrap_or(&current.name);
        let description = description.or(current.description.as_deref());
        let is_active = is_active.unwrap_or(current.is_active);
        self.conn.execute(
            "UPDATE accounts SET name=?1, description=?2, is_active=?3, updated_at=datetime('now')
             WHERE id=?4",
            params![name, description, is_active, id],
        )?;
        self.get_account(id)
    }

    pub fn delete_account(&mut self, id: i64) -> Result<(), LedgerError> {
        self.get_account(id)?;
        let referenced: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM transactions WHERE from_account_id=?1 OR to_account_id=?1 LIMIT 1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        if referenced.is_some() {
            return Err(LedgerError::AccountInUse(id));
        }
        self.conn
            .execute("DELETE FROM accounts WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- categories ----

    pub fn add_category(
        &mut self,
        name: &str,
        kind: CategoryKind,
        parent_id: Option<i64>,
        color_code: Option<&str>,
    ) -> Result<Category, LedgerError> {
        if let Some(parent) = parent_id {
            self.get_category(parent)?;
        }
        self.conn.execute(
            "INSERT INTO categories(name, kind, parent_id, color_code) VALUES (?1, ?2, ?3, ?4)",
            params![name, kind.as_str(), parent_id, color_code],
        )?;
        self.get_category(self.conn.last_insert_rowid())
    }

    pub fn get_category(&self, id: i64) -> Result<Category, LedgerError> {
        let sql = format!("SELECT {} FROM categories WHERE id=?1", CATEGORY_COLS);
        let raw = self
            .conn
            .query_row(&sql, params![id], read_category_row)
            .optional()?;
        raw.map(raw_to_category)
            .ok_or_else(|| LedgerError::not_found("category", id))?
    }

    pub fn category_id_by_name(&self, name: &str) -> Result<i64, LedgerError> {
        let id: Option<i64> = self
            .conn
            .query_row(
                "SELECT id FROM categories WHERE name=?1",
                params![name],
                |r| r.get(0),
            )
            .optional()?;
        id.ok_or_else(|| LedgerError::not_found("category", name))
    }

    pub fn list_categories(&self) -> Result<Vec<Category>, LedgerError> {
        let sql = format!("SELECT {} FROM categories ORDER BY name", CATEGORY_COLS);
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map([], read_category_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(raw_to_category(row?)?);
        }
        Ok(out)
    }

    /// Reverse index over `parent_id`: the direct children of a category.
    pub fn children_of(&self, id: i64) -> Result<Vec<Category>, LedgerError> {
        let sql = format!(
            "SELECT {} FROM categories WHERE parent_id=?1 ORDER BY name",
            CATEGORY_COLS
        );
        let mut stmt = self.conn.prepare(&sql)?;
        let rows = stmt.query_map(params![id], read_category_row)?;
        let mut out = Vec::new();
        for row in rows {
            out.push(raw_to_category(row?)?);
        }
        Ok(out)
    }

    pub fn update_category(
        &mut self,
        id: i64,
        name: Option<&str>,
        parent_id: Option<i64>,
        color_code: Option<&str>,
    ) -> Result<Category, LedgerError> {
        let current = self.get_category(id)?;
        if let Some(parent) = parent_id {
            if parent == id {
                return Err(LedgerError::invalid("category cannot be its own parent"));
            }
            self.get_category(parent)?;
        }
        let name = name.unwrap_or(&current.name);
        let parent_id = parent_id.or(current.parent_id);
        let color_code = color_code.or(current.color_code.as_deref());
        self.conn.execute(
            "UPDATE categories SET name=?1, parent_id=?2, color_code=?3, updated_at=datetime('now')
             WHERE id=?4",
            params![name, parent_id, color_code, id],
        )?;
        self.get_category(id)
    }

    pub fn delete_category(&mut self, id: i64) -> Result<(), LedgerError> {
        self.get_category(id)?;
        let has_children: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM categories WHERE parent_id=?1 LIMIT 1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        if has_children.is_some() {
            return Err(LedgerError::CategoryHasChildren(id));
        }
        let referenced: Option<i64> = self
            .conn
            .query_row(
                "SELECT 1 FROM transactions WHERE category_id=?1 LIMIT 1",
                params![id],
                |r| r.get(0),
            )
            .optional()?;
        if referenced.is_some() {
            return Err(LedgerError::CategoryInUse(id));
        }
        self.conn
            .execute("DELETE FROM categories WHERE id=?1", params![id])?;
        Ok(())
    }

    // ---- transactions ----

    /// Record a transaction and apply its balance effect atomically:
    /// income credits the from-account, expense debits it, transfer debits
    /// the from-account and credits the to-account.
    pub fn add_transaction(&mut self, new: NewTransaction) -> Result<Transaction, LedgerError> {
        validate_new(&new)?;
        let tx = self.conn.transaction()?;
        ensure_category(&tx, new.category_id)?;
        tx.execute(
            "INSERT INTO transactions(type, amount, date, description, category_id,
                                      from_account_id, to_account_id, tags)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
            params![
                new.transaction_type.as_str(),
                new.amount.to_string(),
                new.date.to_string(),
                new.description,
                new.category_id,
                new.from_account_id,
                new.to_account_id,
                new.tags
            ],
        )?;
        let id = tx.last_insert_rowid();
        apply_effect(
            &tx,
            new.transaction_type,
            new.amount,
            new.from_account_id,
            new.to_account_id,
            false,
        )?;
        tx.commit()?;
        self.get_transaction(id)
    }

    /// Replace a transaction. The old balance effect is reversed and the new
    /// one applied inside the same unit of work, so an amount change adjusts
    /// balances by the delta rather than reapplying the full amount.
    pub fn update_transaction(
        &mut self,
        id: i64,
        new: NewTransaction,
    ) -> Result<Transaction, LedgerError> {
        validate_new(&new)?;
        let old = self.get_transaction(id)?;
        let tx = self.conn.transaction()?;
        ensure_category(&tx, new.category_id)?;
        apply_effect(
            &tx,
            old.transaction_type,
            old.amount,
            old.from_account_id,
            old.to_account_id,
            true,
        )?;
        tx.execute(
            "UPDATE transactions SET type=?1, amount=?2, date=?3, description=?4,
                 category_id=?5, from_account_id=?6, to_account_id=?7, tags=?8,
                 updated_at=datetime('now')
             WHERE id=?9",
            params![
                new.transaction_type.as_str(),
                new.amount.to_string(),
                new.date.to_string(),
                new.description,
                new.category_id,
                new.from_account_id,
                new.to_account_id,
                new.tags,
                id
            ],
        )?;
        apply_effect(
            &tx,
            new.transaction_type,
            new.amount,
            new.from_account_id,
            new.to_account_id,
            false,
        )?;
        tx.commit()?;
        self.get_transaction(id)
    }

    /// Delete a transaction, reversing its balance effect.
    pub fn delete_transaction(&mut self, id: i64) -> Result<(), LedgerError> {
        let old = self.get_transaction(id)?;
        let tx = self.conn.transaction()?;
        apply_effect(
            &tx,
            old.transaction_type,
            old.amount,
            old.from_account_id,
            old.to_account_id,
            true,
        )?;
        tx.execute("DELETE FROM transactions WHERE id=?1", params![id])?;
        tx.commit()?;
        Ok(())
    }

    pub fn get_transaction(&self, id: i64) -> Result<Transaction, LedgerError> {
        let sql = format!("SELECT {} FROM transactions t WHERE t.id=?1", TX_COLS);
        let raw = self
            .conn
            .query_row(&sql, params![id], read_tx_row)
            .optional()?;
        raw.map(raw_to_transaction)
            .ok_or_else(|| LedgerError::not_found("transaction", id))?
    }

    /// Transactions matching the filters, newest first, with category and
    /// account names resolved in the same query. Inclusive date bounds;
    /// `None` means unbounded / no filter.
    pub fn filtered_transactions(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        type_filter: Option<TransactionType>,
        account_filter: Option<i64>,
    ) -> Result<Vec<TransactionDetail>, LedgerError> {
        let mut sql = format!(
            "SELECT {}, c.name, fa.name, ta.name FROM transactions t
             JOIN categories c ON t.category_id=c.id
             JOIN accounts fa ON t.from_account_id=fa.id
             LEFT JOIN accounts ta ON t.to_account_id=ta.id
             WHERE 1=1",
            TX_COLS
        );
        let mut params_vec: Vec<String> = Vec::new();
        push_filters(
            &mut sql,
            &mut params_vec,
            from,
            to,
            type_filter,
            account_filter,
        );
        sql.push_str(" ORDER BY t.date DESC, t.id DESC");

        let mut stmt = self.conn.prepare(&sql)?;
        let bound: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let rows = stmt.query_map(rusqlite::params_from_iter(bound), |r| {
            let raw = read_tx_row(r)?;
            let category_name: String = r.get(15)?;
            let from_account_name: String = r.get(16)?;
            let to_account_name: Option<String> = r.get(17)?;
            Ok((raw, category_name, from_account_name, to_account_name))
        })?;

        let mut out = Vec::new();
        for row in rows {
            let (raw, category_name, from_account_name, to_account_name) = row?;
            out.push(TransactionDetail {
                transaction: raw_to_transaction(raw)?,
                category_name,
                from_account_name,
                to_account_name,
            });
        }
        Ok(out)
    }

    /// The most recent `limit` transactions, newest first.
    pub fn recent_transactions(&self, limit: usize) -> Result<Vec<TransactionDetail>, LedgerError> {
        let mut all = self.filtered_transactions(None, None, None, None)?;
        all.truncate(limit);
        Ok(all)
    }

    /// Signed sum over matching transactions: income positive, expense
    /// negative. Without an account filter a transfer nets to zero; with one
    /// it counts -amount for the outgoing leg and +amount for the incoming.
    pub fn sum_signed_amounts(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        type_filter: Option<TransactionType>,
        account_filter: Option<i64>,
    ) -> Result<Decimal, LedgerError> {
        let mut sql = String::from(
            "SELECT t.type, t.amount, t.from_account_id, t.to_account_id
             FROM transactions t WHERE 1=1",
        );
        let mut params_vec: Vec<String> = Vec::new();
        push_filters(
            &mut sql,
            &mut params_vec,
            from,
            to,
            type_filter,
            account_filter,
        );

        let mut stmt = self.conn.prepare(&sql)?;
        let bound: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let rows = stmt.query_map(rusqlite::params_from_iter(bound), |r| {
            Ok((
                r.get::<_, String>(0)?,
                r.get::<_, String>(1)?,
                r.get::<_, i64>(2)?,
                r.get::<_, Option<i64>>(3)?,
            ))
        })?;

        let mut total = Decimal::ZERO;
        for row in rows {
            let (type_s, amount_s, from_id, to_id) = row?;
            let ttype: TransactionType = type_s.parse()?;
            let amount = parse_money(&amount_s)?;
            total += match account_filter {
                Some(account) => account_effect(ttype, amount, from_id, to_id, account),
                None => ttype.signed(amount),
            };
        }
        Ok(total)
    }

    /// Grouped sum of transaction amounts of the given kind within the
    /// range, keyed by category name. Only categories with at least one
    /// matching transaction appear.
    pub fn sum_by_category(
        &self,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
        kind: CategoryKind,
    ) -> Result<BTreeMap<String, Decimal>, LedgerError> {
        let mut sql = String::from(
            "SELECT c.name, t.amount FROM transactions t
             JOIN categories c ON t.category_id=c.id
             WHERE t.type=?",
        );
        let mut params_vec: Vec<String> = vec![kind.as_str().to_string()];
        if let Some(d) = from {
            sql.push_str(" AND t.date>=?");
            params_vec.push(d.to_string());
        }
        if let Some(d) = to {
            sql.push_str(" AND t.date<=?");
            params_vec.push(d.to_string());
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let bound: Vec<&dyn rusqlite::ToSql> = params_vec
            .iter()
            .map(|s| s as &dyn rusqlite::ToSql)
            .collect();
        let rows = stmt.query_map(rusqlite::params_from_iter(bound), |r| {
            Ok((r.get::<_, String>(0)?, r.get::<_, String>(1)?))
        })?;

        let mut grouped: BTreeMap<String, Decimal> = BTreeMap::new();
        for row in rows {
            let (name, amount_s) = row?;
            let amount = parse_money(&amount_s)?;
            *grouped.entry(name).or_insert(Decimal::ZERO) += amount;
        }
        Ok(grouped)
    }
}

fn account_effect(
    ttype: TransactionType,
    amount: Decimal,
    from_id: i64,
    to_id: Option<i64>,
    account: i64,
) -> Decimal {
    match ttype {
        TransactionType::Income if from_id == account => amount,
        TransactionType::Expense if from_id == account => -amount,
        TransactionType::Transfer => {
            let mut effect = Decimal::ZERO;
            if from_id == account {
                effect -= amount;
            }
            if to_id == Some(account) {
                effect += amount;
            }
            effect
        }
        _ => Decimal::ZERO,
    }
}

fn validate_new(new: &NewTransaction) -> Result<(), LedgerError> {
    if new.amount.is_sign_negative() {
        return Err(LedgerError::invalid(format!(
            "transaction amount must be a non-negative magnitude, got {}",
            new.amount
        )));
    }
    match new.transaction_type {
        TransactionType::Transfer => {
            let to = new.to_account_id.ok_or(LedgerError::MissingTransferAccount)?;
            if to == new.from_account_id {
                return Err(LedgerError::invalid(
                    "transfer source and destination accounts must differ",
                ));
            }
        }
        _ => {
            if new.to_account_id.is_some() {
                return Err(LedgerError::invalid(
                    "to-account is only valid on transfers",
                ));
            }
        }
    }
    Ok(())
}

fn ensure_category(conn: &Connection, id: i64) -> Result<(), LedgerError> {
    let found: Option<i64> = conn
        .query_row("SELECT 1 FROM categories WHERE id=?1", params![id], |r| {
            r.get(0)
        })
        .optional()?;
    found
        .map(|_| ())
        .ok_or_else(|| LedgerError::not_found("category", id))
}

fn account_balance(conn: &Connection, id: i64) -> Result<Decimal, LedgerError> {
    let s: Option<String> = conn
        .query_row(
            "SELECT balance FROM accounts WHERE id=?1",
            params![id],
            |r| r.get(0),
        )
        .optional()?;
    match s {
        Some(s) => parse_money(&s),
        None => Err(LedgerError::not_found("account", id)),
    }
}

fn shift_balance(conn: &Connection, id: i64, delta: Decimal) -> Result<(), LedgerError> {
    let balance = account_balance(conn, id)?;
    conn.execute(
        "UPDATE accounts SET balance=?1, updated_at=datetime('now') WHERE id=?2",
        params![(balance + delta).to_string(), id],
    )?;
    Ok(())
}

fn apply_effect(
    conn: &Connection,
    ttype: TransactionType,
    amount: Decimal,
    from_id: i64,
    to_id: Option<i64>,
    reverse: bool,
) -> Result<(), LedgerError> {
    let amount = if reverse { -amount } else { amount };
    match ttype {
        TransactionType::Income => shift_balance(conn, from_id, amount),
        TransactionType::Expense => shift_balance(conn, from_id, -amount),
        TransactionType::Transfer => {
            let dest = to_id.ok_or(LedgerError::MissingTransferAccount)?;
            shift_balance(conn, from_id, -amount)?;
            shift_balance(conn, dest, amount)
        }
    }
}

fn push_filters(
    sql: &mut String,
    params_vec: &mut Vec<String>,
    from: Option<NaiveDate>,
    to: Option<NaiveDate>,
    type_filter: Option<TransactionType>,
    account_filter: Option<i64>,
) {
    if let Some(d) = from {
        sql.push_str(" AND t.date>=?");
        params_vec.push(d.to_string());
    }
    if let Some(d) = to {
        sql.push_str(" AND t.date<=?");
        params_vec.push(d.to_string());
    }
    if let Some(t) = type_filter {
        sql.push_str(" AND t.type=?");
        params_vec.push(t.as_str().to_string());
    }
    if let Some(id) = account_filter {
        sql.push_str(" AND (t.from_account_id=? OR t.to_account_id=?)");
        params_vec.push(id.to_string());
        params_vec.push(id.to_string());
    }
}

fn parse_money(s: &str) -> Result<Decimal, LedgerError> {
    s.parse::<Decimal>()
        .map_err(|_| LedgerError::Corrupt(format!("invalid stored amount '{}'", s)))
}

fn parse_date_col(s: &str) -> Result<NaiveDate, LedgerError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| LedgerError::Corrupt(format!("invalid stored date '{}'", s)))
}

struct RawAccount {
    id: i64,
    name: String,
    account_type: String,
    balance: String,
    currency: String,
    is_active: bool,
    description: Option<String>,
    created_at: String,
    updated_at: String,
}

fn read_account_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawAccount> {
    Ok(RawAccount {
        id: r.get(0)?,
        name: r.get(1)?,
        account_type: r.get(2)?,
        balance: r.get(3)?,
        currency: r.get(4)?,
        is_active: r.get(5)?,
        description: r.get(6)?,
        created_at: r.get(7)?,
        updated_at: r.get(8)?,
    })
}

fn raw_to_account(raw: RawAccount) -> Result<Account, LedgerError> {
    Ok(Account {
        id: raw.id,
        name: raw.name,
        account_type: raw.account_type.parse()?,
        balance: parse_money(&raw.balance)?,
        currency: raw.currency,
        is_active: raw.is_active,
        description: raw.description,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    })
}

struct RawCategory {
    id: i64,
    name: String,
    kind: String,
    parent_id: Option<i64>,
    color_code: Option<String>,
    created_at: String,
    updated_at: String,
}

fn read_category_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawCategory> {
    Ok(RawCategory {
        id: r.get(0)?,
        name: r.get(1)?,
        kind: r.get(2)?,
        parent_id: r.get(3)?,
        color_code: r.get(4)?,
        created_at: r.get(5)?,
        updated_at: r.get(6)?,
    })
}

fn raw_to_category(raw: RawCategory) -> Result<Category, LedgerError> {
    Ok(Category {
        id: raw.id,
        name: raw.name,
        kind: raw.kind.parse()?,
        parent_id: raw.parent_id,
        color_code: raw.color_code,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    })
}

struct RawTransaction {
    id: i64,
    ttype: String,
    amount: String,
    date: String,
    description: Option<String>,
    category_id: i64,
    from_account_id: i64,
    to_account_id: Option<i64>,
    tags: Option<String>,
    receipt_path: Option<String>,
    is_recurring: bool,
    recurring_interval: Option<String>,
    recurring_end_date: Option<String>,
    created_at: String,
    updated_at: String,
}

fn read_tx_row(r: &rusqlite::Row<'_>) -> rusqlite::Result<RawTransaction> {
    Ok(RawTransaction {
        id: r.get(0)?,
        ttype: r.get(1)?,
        amount: r.get(2)?,
        date: r.get(3)?,
        description: r.get(4)?,
        category_id: r.get(5)?,
        from_account_id: r.get(6)?,
        to_account_id: r.get(7)?,
        tags: r.get(8)?,
        receipt_path: r.get(9)?,
        is_recurring: r.get(10)?,
        recurring_interval: r.get(11)?,
        recurring_end_date: r.get(12)?,
        created_at: r.get(13)?,
        updated_at: r.get(14)?,
    })
}

fn raw_to_transaction(raw: RawTransaction) -> Result<Transaction, LedgerError> {
    let recurring_end_date = match raw.recurring_end_date {
        Some(s) => Some(parse_date_col(&s)?),
        None => None,
    };
    Ok(Transaction {
        id: raw.id,
        transaction_type: raw.ttype.parse()?,
        amount: parse_money(&raw.amount)?,
        date: parse_date_col(&raw.date)?,
        description: raw.description,
        category_id: raw.category_id,
        from_account_id: raw.from_account_id,
        to_account_id: raw.to_account_id,
        tags: raw.tags,
        receipt_path: raw.receipt_path,
        is_recurring: raw.is_recurring,
        recurring_interval: raw.recurring_interval,
        recurring_end_date,
        created_at: raw.created_at,
        updated_at: raw.updated_at,
    })
}
