// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::reports::Reports;
use crate::store::Ledger;
use crate::utils::{maybe_print_json, parse_date, pretty_table};
use anyhow::Result;

pub fn handle(store: &Ledger, m: &clap::ArgMatches) -> Result<()> {
    let engine = Reports::new(store);
    match m.subcommand() {
        Some(("summary", sub)) => summary(&engine, sub)?,
        Some(("balances", sub)) => balances(&engine, sub)?,
        Some(("compare", sub)) => compare(&engine, sub)?,
        Some(("trends", sub)) => trends(&engine, sub)?,
        _ => {}
    }
    Ok(())
}

fn summary(engine: &Reports, sub: &clap::ArgMatches) -> Result<()> {
    let year = *sub.get_one::<i32>("year").unwrap();
    let month = *sub.get_one::<u32>("month").unwrap();
    let s = engine.monthly_summary(year, month)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &s)? {
        return Ok(());
    }
    println!(
        "{}",
        pretty_table(
            &["Income", "Expenses", "Net savings"],
            vec![vec![
                format!("{:.2}", s.total_income),
                format!("{:.2}", s.total_expenses),
                format!("{:.2}", s.net_savings),
            ]],
        )
    );
    if !s.expense_by_category.is_empty() {
        let rows = s
            .expense_by_category
            .iter()
            .map(|(name, total)| vec![name.clone(), format!("{:.2}", total)])
            .collect();
        println!("{}", pretty_table(&["Category", "Spent"], rows));
    }
    Ok(())
}

fn balances(engine: &Reports, sub: &clap::ArgMatches) -> Result<()> {
    let start = parse_date(sub.get_one::<String>("start").unwrap())?;
    let end = parse_date(sub.get_one::<String>("end").unwrap())?;
    let series = engine.daily_balances(start, end)?;
    let data: Vec<Vec<String>> = series
        .iter()
        .map(|(date, balance)| vec![date.to_string(), format!("{:.2}", balance)])
        .collect();
    if !maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &series)? {
        println!("{}", pretty_table(&["Date", "Balance"], data));
    }
    Ok(())
}

fn compare(engine: &Reports, sub: &clap::ArgMatches) -> Result<()> {
    let year = *sub.get_one::<i32>("year").unwrap();
    let months = engine.monthly_comparison(year)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &months)? {
        return Ok(());
    }
    let rows = months
        .iter()
        .map(|m| {
            vec![
                m.month.clone(),
                format!("{:.2}", m.income),
                format!("{:.2}", m.expenses),
            ]
        })
        .collect();
    println!("{}", pretty_table(&["Month", "Income", "Expenses"], rows));
    Ok(())
}

fn trends(engine: &Reports, sub: &clap::ArgMatches) -> Result<()> {
    let months = *sub.get_one::<u32>("months").unwrap();
    let points = engine.trends(months)?;
    if maybe_print_json(sub.get_flag("json"), sub.get_flag("jsonl"), &points)? {
        return Ok(());
    }
    let rows = points
        .iter()
        .map(|p| {
            vec![
                p.period_start.format("%Y-%m").to_string(),
                format!("{:.2}", p.income),
                format!("{:.2}", p.expenses),
                format!("{}%", p.savings_rate),
            ]
        })
        .collect();
    println!(
        "{}",
        pretty_table(&["Month", "Income", "Expenses", "Savings rate"], rows)
    );
    Ok(())
}
