// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::*;
use tallybook::error::LedgerError;
use tallybook::models::{CategoryKind, NewTransaction, TransactionType};

#[test]
fn income_and_expense_move_the_balance() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "1000.00");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    income(&mut store, "2024-01-05", "2500.00", salary.id, acct.id);
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("3500.00"));

    expense(&mut store, "2024-01-06", "1450.00", rent.id, acct.id);
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("2050.00"));
}

#[test]
fn transfer_moves_money_between_legs() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "500.00");
    let moving = category(&mut store, "Moving money", CategoryKind::Expense);

    transfer(&mut store, "2024-02-01", "300.00", moving.id, a.id, b.id);
    assert_eq!(store.get_account(a.id).unwrap().balance, dec("700.00"));
    assert_eq!(store.get_account(b.id).unwrap().balance, dec("800.00"));
    assert_eq!(store.total_balance().unwrap(), dec("1500.00"));
}

#[test]
fn update_applies_the_delta_only() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "1000.00");
    let rent = category(&mut store, "Rent", CategoryKind::Expense);
    let tx = store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Expense,
            amount: dec("200.00"),
            date: d("2024-01-10"),
            description: None,
            category_id: rent.id,
            from_account_id: acct.id,
            to_account_id: None,
            tags: None,
        })
        .unwrap();
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("800.00"));

    store
        .update_transaction(
            tx.id,
            NewTransaction {
                transaction_type: TransactionType::Expense,
                amount: dec("350.00"),
                date: d("2024-01-10"),
                description: None,
                category_id: rent.id,
                from_account_id: acct.id,
                to_account_id: None,
                tags: None,
            },
        )
        .unwrap();
    // Old 200 reversed, new 350 applied: net 150 further down.
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("650.00"));
}

#[test]
fn update_can_change_type_and_account() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "0");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);
    let tx = store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Expense,
            amount: dec("100.00"),
            date: d("2024-01-10"),
            description: None,
            category_id: misc.id,
            from_account_id: a.id,
            to_account_id: None,
            tags: None,
        })
        .unwrap();

    store
        .update_transaction(
            tx.id,
            NewTransaction {
                transaction_type: TransactionType::Transfer,
                amount: dec("100.00"),
                date: d("2024-01-10"),
                description: None,
                category_id: misc.id,
                from_account_id: a.id,
                to_account_id: Some(b.id),
                tags: None,
            },
        )
        .unwrap();
    assert_eq!(store.get_account(a.id).unwrap().balance, dec("900.00"));
    assert_eq!(store.get_account(b.id).unwrap().balance, dec("100.00"));
}

#[test]
fn delete_reverses_the_effect() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "1000.00");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let tx = store
        .add_transaction(NewTransaction {
            transaction_type: TransactionType::Income,
            amount: dec("500.00"),
            date: d("2024-01-05"),
            description: None,
            category_id: salary.id,
            from_account_id: acct.id,
            to_account_id: None,
            tags: None,
        })
        .unwrap();
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("1500.00"));

    store.delete_transaction(tx.id).unwrap();
    assert_eq!(store.get_account(acct.id).unwrap().balance, dec("1000.00"));
    assert!(matches!(
        store.get_transaction(tx.id),
        Err(LedgerError::NotFound { .. })
    ));
}

#[test]
fn transfer_without_destination_is_rejected() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);

    let result = store.add_transaction(NewTransaction {
        transaction_type: TransactionType::Transfer,
        amount: dec("100.00"),
        date: d("2024-01-10"),
        description: None,
        category_id: misc.id,
        from_account_id: a.id,
        to_account_id: None,
        tags: None,
    });
    assert!(matches!(result, Err(LedgerError::MissingTransferAccount)));
    // Nothing was written.
    assert_eq!(store.get_account(a.id).unwrap().balance, dec("1000.00"));
    assert!(store.recent_transactions(10).unwrap().is_empty());
}

#[test]
fn self_transfer_is_rejected() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);

    let result = store.add_transaction(NewTransaction {
        transaction_type: TransactionType::Transfer,
        amount: dec("100.00"),
        date: d("2024-01-10"),
        description: None,
        category_id: misc.id,
        from_account_id: a.id,
        to_account_id: Some(a.id),
        tags: None,
    });
    assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
}

#[test]
fn destination_on_non_transfer_is_rejected() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "0");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);

    let result = store.add_transaction(NewTransaction {
        transaction_type: TransactionType::Expense,
        amount: dec("100.00"),
        date: d("2024-01-10"),
        description: None,
        category_id: misc.id,
        from_account_id: a.id,
        to_account_id: Some(b.id),
        tags: None,
    });
    assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
}

#[test]
fn negative_amount_is_rejected() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);

    let result = store.add_transaction(NewTransaction {
        transaction_type: TransactionType::Expense,
        amount: dec("-5.00"),
        date: d("2024-01-10"),
        description: None,
        category_id: misc.id,
        from_account_id: a.id,
        to_account_id: None,
        tags: None,
    });
    assert!(matches!(result, Err(LedgerError::InvalidArgument(_))));
}

#[test]
fn unknown_category_is_rejected() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");

    let result = store.add_transaction(NewTransaction {
        transaction_type: TransactionType::Expense,
        amount: dec("5.00"),
        date: d("2024-01-10"),
        description: None,
        category_id: 999,
        from_account_id: a.id,
        to_account_id: None,
        tags: None,
    });
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
    assert_eq!(store.get_account(a.id).unwrap().balance, dec("1000.00"));
}

#[test]
fn referenced_account_cannot_be_deleted() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "0");
    let misc = category(&mut store, "Misc", CategoryKind::Expense);
    transfer(&mut store, "2024-01-10", "50.00", misc.id, a.id, b.id);

    // Both legs count as references.
    assert!(matches!(
        store.delete_account(a.id),
        Err(LedgerError::AccountInUse(_))
    ));
    assert!(matches!(
        store.delete_account(b.id),
        Err(LedgerError::AccountInUse(_))
    ));

    let idle = checking(&mut store, "Idle", "0");
    store.delete_account(idle.id).unwrap();
}

#[test]
fn category_deletion_guards() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "1000.00");
    let dining = category(&mut store, "Dining", CategoryKind::Expense);
    let coffee = store
        .add_category("Coffee", CategoryKind::Expense, Some(dining.id), None)
        .unwrap();

    assert!(matches!(
        store.delete_category(dining.id),
        Err(LedgerError::CategoryHasChildren(_))
    ));

    expense(&mut store, "2024-01-10", "4.50", coffee.id, acct.id);
    assert!(matches!(
        store.delete_category(coffee.id),
        Err(LedgerError::CategoryInUse(_))
    ));

    let unused = category(&mut store, "Unused", CategoryKind::Expense);
    store.delete_category(unused.id).unwrap();
}

#[test]
fn category_update_preserves_unset_fields() {
    let mut store = setup();
    let dining = category(&mut store, "Dining", CategoryKind::Expense);
    let coffee = store
        .add_category("Coffee", CategoryKind::Expense, Some(dining.id), Some("#6f4e37"))
        .unwrap();

    let renamed = store
        .update_category(coffee.id, Some("Espresso"), None, None)
        .unwrap();
    assert_eq!(renamed.name, "Espresso");
    assert_eq!(renamed.parent_id, Some(dining.id));
    assert_eq!(renamed.color_code.as_deref(), Some("#6f4e37"));

    assert!(matches!(
        store.update_category(coffee.id, None, Some(coffee.id), None),
        Err(LedgerError::InvalidArgument(_))
    ));
    assert!(matches!(
        store.update_category(coffee.id, None, Some(404), None),
        Err(LedgerError::NotFound { .. })
    ));
}

#[test]
fn missing_parent_category_is_rejected() {
    let mut store = setup();
    let result = store.add_category("Orphan", CategoryKind::Expense, Some(404), None);
    assert!(matches!(result, Err(LedgerError::NotFound { .. })));
}

#[test]
fn children_of_lists_direct_children() {
    let mut store = setup();
    let dining = category(&mut store, "Dining", CategoryKind::Expense);
    store
        .add_category("Coffee", CategoryKind::Expense, Some(dining.id), None)
        .unwrap();
    store
        .add_category("Takeout", CategoryKind::Expense, Some(dining.id), None)
        .unwrap();
    category(&mut store, "Rent", CategoryKind::Expense);

    let children = store.children_of(dining.id).unwrap();
    let names: Vec<_> = children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["Coffee", "Takeout"]);
}

#[test]
fn filtered_list_is_newest_first_and_respects_filters() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    income(&mut store, "2024-01-05", "2500", salary.id, a.id);
    expense(&mut store, "2024-01-20", "1450", rent.id, a.id);
    expense(&mut store, "2024-02-02", "30", rent.id, a.id);
    transfer(&mut store, "2024-01-25", "200", rent.id, a.id, b.id);

    let all = store.filtered_transactions(None, None, None, None).unwrap();
    assert_eq!(all.len(), 4);
    let dates: Vec<_> = all.iter().map(|t| t.transaction.date).collect();
    assert_eq!(
        dates,
        [d("2024-02-02"), d("2024-01-25"), d("2024-01-20"), d("2024-01-05")]
    );

    let january = store
        .filtered_transactions(Some(d("2024-01-01")), Some(d("2024-01-31")), None, None)
        .unwrap();
    assert_eq!(january.len(), 3);

    let expenses = store
        .filtered_transactions(None, None, Some(TransactionType::Expense), None)
        .unwrap();
    assert_eq!(expenses.len(), 2);

    // The incoming transfer leg makes Savings a match.
    let on_savings = store
        .filtered_transactions(None, None, None, Some(b.id))
        .unwrap();
    assert_eq!(on_savings.len(), 1);
    assert_eq!(on_savings[0].to_account_name.as_deref(), Some("Savings"));
    assert_eq!(on_savings[0].category_name, "Rent");
}

#[test]
fn recent_transactions_truncates() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    for day in 1..=5 {
        income(&mut store, &format!("2024-01-{:02}", day), "10", salary.id, a.id);
    }
    let recent = store.recent_transactions(3).unwrap();
    assert_eq!(recent.len(), 3);
    assert_eq!(recent[0].transaction.date, d("2024-01-05"));
}

#[test]
fn per_account_sum_counts_transfer_legs() {
    let mut store = setup();
    let a = checking(&mut store, "Checking", "1000.00");
    let b = checking(&mut store, "Savings", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let moving = category(&mut store, "Moving money", CategoryKind::Expense);

    income(&mut store, "2024-01-05", "2000", salary.id, a.id);
    transfer(&mut store, "2024-01-10", "500", moving.id, a.id, b.id);

    let on_a = store.sum_signed_amounts(None, None, None, Some(a.id)).unwrap();
    assert_eq!(on_a, dec("1500"));
    let on_b = store.sum_signed_amounts(None, None, None, Some(b.id)).unwrap();
    assert_eq!(on_b, dec("500"));
    // Ledger-wide the transfer nets to zero.
    let total = store.sum_signed_amounts(None, None, None, None).unwrap();
    assert_eq!(total, dec("2000"));
}

#[test]
fn lookup_by_name() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);

    assert_eq!(store.account_id_by_name("Main").unwrap(), acct.id);
    assert_eq!(store.category_id_by_name("Salary").unwrap(), salary.id);
    assert!(matches!(
        store.account_id_by_name("Nope"),
        Err(LedgerError::NotFound { .. })
    ));
}

#[test]
fn account_update_preserves_unset_fields() {
    let mut store = setup();
    let acct = store
        .add_account(
            "Main",
            tallybook::models::AccountType::Checking,
            dec("100"),
            "USD",
            Some("daily driver"),
        )
        .unwrap();

    let renamed = store
        .update_account(acct.id, Some("Primary"), None, None)
        .unwrap();
    assert_eq!(renamed.name, "Primary");
    assert_eq!(renamed.description.as_deref(), Some("daily driver"));
    assert!(renamed.is_active);

    let archived = store.update_account(acct.id, None, None, Some(false)).unwrap();
    assert_eq!(archived.name, "Primary");
    assert!(!archived.is_active);
}
