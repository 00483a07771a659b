// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::store::Ledger;
use crate::utils::pretty_table;
use anyhow::Result;

/// Scan the ledger for rows that violate the transaction invariants:
/// transfers without a destination leg, destinations on non-transfers,
/// negative magnitudes, self-transfers, and self-parented categories.
pub fn handle(store: &Ledger) -> Result<()> {
    let conn = store.conn();
    let mut rows = Vec::new();

    let mut stmt =
        conn.prepare("SELECT id FROM transactions WHERE type='transfer' AND to_account_id IS NULL")?;
    let mut cur = stmt.query([])?;
    while let Some(r) = cur.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["transfer_missing_destination".into(), format!("tx {}", id)]);
    }

    let mut stmt2 = conn
        .prepare("SELECT id FROM transactions WHERE type!='transfer' AND to_account_id IS NOT NULL")?;
    let mut cur2 = stmt2.query([])?;
    while let Some(r) = cur2.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["destination_on_non_transfer".into(), format!("tx {}", id)]);
    }

    let mut stmt3 = conn.prepare("SELECT id, amount FROM transactions WHERE amount LIKE '-%'")?;
    let mut cur3 = stmt3.query([])?;
    while let Some(r) = cur3.next()? {
        let id: i64 = r.get(0)?;
        let amount: String = r.get(1)?;
        rows.push(vec![
            "negative_magnitude".into(),
            format!("tx {} amount {}", id, amount),
        ]);
    }

    let mut stmt4 = conn.prepare(
        "SELECT id FROM transactions WHERE type='transfer' AND to_account_id=from_account_id",
    )?;
    let mut cur4 = stmt4.query([])?;
    while let Some(r) = cur4.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["self_transfer".into(), format!("tx {}", id)]);
    }

    let mut stmt5 = conn.prepare("SELECT id FROM categories WHERE parent_id=id")?;
    let mut cur5 = stmt5.query([])?;
    while let Some(r) = cur5.next()? {
        let id: i64 = r.get(0)?;
        rows.push(vec!["self_parented_category".into(), format!("category {}", id)]);
    }

    if rows.is_empty() {
        println!("doctor: no issues found");
    } else {
        println!("{}", pretty_table(&["Issue", "Detail"], rows));
    }
    Ok(())
}
