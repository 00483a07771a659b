// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

mod common;

use common::*;
use tallybook::models::CategoryKind;
use tallybook::reports::Reports;

#[test]
fn twelve_months_back_spans_the_year_boundary() {
    let mut store = setup();
    checking(&mut store, "Main", "0");

    let points = Reports::new(&store)
        .trends_from(d("2024-06-15"), 12)
        .unwrap();
    assert_eq!(points.len(), 12);
    assert_eq!(points.first().unwrap().period_start, d("2023-07-01"));
    assert_eq!(points.last().unwrap().period_start, d("2024-06-01"));
    for pair in points.windows(2) {
        assert!(pair[0].period_start < pair[1].period_start);
    }
}

#[test]
fn savings_rate_is_net_over_income() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    income(&mut store, "2024-03-01", "1000.00", salary.id, acct.id);
    expense(&mut store, "2024-03-05", "250.00", rent.id, acct.id);

    let points = Reports::new(&store).trends_from(d("2024-03-20"), 1).unwrap();
    assert_eq!(points.len(), 1);
    let p = &points[0];
    assert_eq!(p.income, dec("1000.00"));
    assert_eq!(p.expenses, dec("250.00"));
    assert_eq!(p.savings_rate, dec("75.00"));
}

#[test]
fn zero_income_month_reports_zero_rate() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "500");
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    expense(&mut store, "2024-03-05", "250.00", rent.id, acct.id);

    let points = Reports::new(&store).trends_from(d("2024-03-20"), 1).unwrap();
    assert_eq!(points[0].savings_rate, dec("0"));
}

#[test]
fn rate_is_rounded_to_two_places() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    // net 100 over income 300 is one third: 33.33 after rounding.
    income(&mut store, "2024-03-01", "300", salary.id, acct.id);
    expense(&mut store, "2024-03-05", "200", rent.id, acct.id);

    let points = Reports::new(&store).trends_from(d("2024-03-20"), 1).unwrap();
    assert_eq!(points[0].savings_rate, dec("33.33"));
}

#[test]
fn zero_months_back_is_empty() {
    let store = setup();
    let points = Reports::new(&store).trends_from(d("2024-03-20"), 0).unwrap();
    assert!(points.is_empty());
}

#[test]
fn out_of_window_activity_is_excluded() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);

    income(&mut store, "2024-01-15", "999", salary.id, acct.id);
    income(&mut store, "2024-04-15", "100", salary.id, acct.id);

    // Two months anchored in May: April and May only.
    let points = Reports::new(&store).trends_from(d("2024-05-10"), 2).unwrap();
    assert_eq!(points.len(), 2);
    assert_eq!(points[0].period_start, d("2024-04-01"));
    assert_eq!(points[0].income, dec("100"));
    assert_eq!(points[1].period_start, d("2024-05-01"));
    assert_eq!(points[1].income, dec("0"));
}

#[test]
fn comparison_covers_all_twelve_months() {
    let mut store = setup();
    let acct = checking(&mut store, "Main", "0");
    let salary = category(&mut store, "Salary", CategoryKind::Income);
    let rent = category(&mut store, "Rent", CategoryKind::Expense);

    income(&mut store, "2024-01-05", "3000", salary.id, acct.id);
    expense(&mut store, "2024-12-20", "450", rent.id, acct.id);
    // A different year must not bleed in.
    income(&mut store, "2023-06-05", "8888", salary.id, acct.id);

    let rows = Reports::new(&store).monthly_comparison(2024).unwrap();
    assert_eq!(rows.len(), 12);
    assert_eq!(rows[0].month, "Jan");
    assert_eq!(rows[11].month, "Dec");
    assert_eq!(rows[0].income, dec("3000"));
    assert_eq!(rows[5].income, dec("0"));
    assert_eq!(rows[11].expenses, dec("450"));
}
