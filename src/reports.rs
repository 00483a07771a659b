// Copyright (c) 2025 Tallybook contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The report engine: monthly summaries, daily running balances, yearly
//! income/expense comparison, and multi-month trend series.
//!
//! `Reports` borrows the ledger immutably, so report computation cannot
//! write. All money stays `Decimal` end to end; the presentation layer owns
//! formatting.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::LedgerError;
use crate::models::{CategoryKind, TransactionType};
use crate::store::Ledger;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlySummary {
    pub year: i32,
    pub month: u32,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub net_savings: Decimal,
    /// Expense totals keyed by category name; only categories with at least
    /// one matching transaction appear.
    pub expense_by_category: BTreeMap<String, Decimal>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MonthlyComparison {
    /// Short month name, e.g. "Jan".
    pub month: String,
    pub income: Decimal,
    pub expenses: Decimal,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendPoint {
    pub period_start: NaiveDate,
    pub income: Decimal,
    pub expenses: Decimal,
    /// Net savings over income as a percentage, 0 when there is no income.
    /// Rounded to 2 decimal places for display; never passes through f64.
    pub savings_rate: Decimal,
}

pub struct Reports<'a> {
    ledger: &'a Ledger,
}

impl<'a> Reports<'a> {
    pub fn new(ledger: &'a Ledger) -> Self {
        Self { ledger }
    }

    /// Income, expense, and net totals for one calendar month, with the
    /// expense breakdown by category. A month with no transactions yields
    /// zero totals and an empty breakdown.
    pub fn monthly_summary(&self, year: i32, month: u32) -> Result<MonthlySummary, LedgerError> {
        let (first, last) = month_bounds(year, month)?;
        let total_income = self.ledger.sum_signed_amounts(
            Some(first),
            Some(last),
            Some(TransactionType::Income),
            None,
        )?;
        let total_expenses = -self.ledger.sum_signed_amounts(
            Some(first),
            Some(last),
            Some(TransactionType::Expense),
            None,
        )?;
        let expense_by_category =
            self.ledger
                .sum_by_category(Some(first), Some(last), CategoryKind::Expense)?;
        Ok(MonthlySummary {
            year,
            month,
            total_income,
            total_expenses,
            net_savings: total_income - total_expenses,
            expense_by_category,
        })
    }

    /// End-of-day running balance across all accounts for every day in
    /// `[start, end]`, ascending.
    ///
    /// The cached account balances already reflect every applied
    /// transaction, so `balance(d) = total_balance - signed_sum(date > d)`.
    /// Transactions dated exactly on `end` belong to the per-day walk; the
    /// future correction covers strictly later dates only. The range is
    /// fetched once and bucketed per day rather than queried per day.
    pub fn daily_balances(
        &self,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<BTreeMap<NaiveDate, Decimal>, LedgerError> {
        if start > end {
            return Err(LedgerError::invalid(format!(
                "start date {} is after end date {}",
                start, end
            )));
        }

        let total = self.ledger.total_balance()?;
        let future = match end.succ_opt() {
            Some(after_end) => self
                .ledger
                .sum_signed_amounts(Some(after_end), None, None, None)?,
            None => Decimal::ZERO,
        };

        let mut per_day: BTreeMap<NaiveDate, Decimal> = BTreeMap::new();
        for detail in self
            .ledger
            .filtered_transactions(Some(start), Some(end), None, None)?
        {
            let t = &detail.transaction;
            *per_day.entry(t.date).or_insert(Decimal::ZERO) +=
                t.transaction_type.signed(t.amount);
        }
        let after_start: Decimal = per_day
            .iter()
            .filter(|(d, _)| **d > start)
            .map(|(_, v)| *v)
            .sum();

        // balance(start) includes transactions dated on start.
        let mut running = total - future - after_start;
        let mut balances = BTreeMap::new();
        let mut day = start;
        loop {
            balances.insert(day, running);
            if day == end {
                break;
            }
            day = day
                .succ_opt()
                .ok_or_else(|| LedgerError::invalid("date range exceeds calendar bounds"))?;
            running += per_day.get(&day).copied().unwrap_or(Decimal::ZERO);
        }
        Ok(balances)
    }

    /// Income vs expenses for each of the twelve months of `year`.
    pub fn monthly_comparison(&self, year: i32) -> Result<Vec<MonthlyComparison>, LedgerError> {
        let mut months = Vec::with_capacity(12);
        for month in 1..=12 {
            let summary = self.monthly_summary(year, month)?;
            let label = first_of_month(year, month)?.format("%b").to_string();
            months.push(MonthlyComparison {
                month: label,
                income: summary.total_income,
                expenses: summary.total_expenses,
            });
        }
        Ok(months)
    }

    /// Trend series for the last `months_back` calendar months, ending with
    /// the current month. Exactly `months_back` points, chronological.
    pub fn trends(&self, months_back: u32) -> Result<Vec<TrendPoint>, LedgerError> {
        self.trends_from(Utc::now().date_naive(), months_back)
    }

    /// As `trends`, anchored at an explicit date. Steps whole calendar
    /// months backward from the anchor's month, never fixed 30-day windows.
    pub fn trends_from(
        &self,
        anchor: NaiveDate,
        months_back: u32,
    ) -> Result<Vec<TrendPoint>, LedgerError> {
        let mut points = Vec::with_capacity(months_back as usize);
        if months_back == 0 {
            return Ok(points);
        }
        let anchor_index = anchor.year() * 12 + anchor.month() as i32 - 1;
        let oldest_index = anchor_index - (months_back as i32 - 1);
        for index in oldest_index..=anchor_index {
            let year = index.div_euclid(12);
            let month = (index.rem_euclid(12) + 1) as u32;
            let summary = self.monthly_summary(year, month)?;
            let savings_rate = if summary.total_income.is_zero() {
                Decimal::ZERO
            } else {
                (summary.net_savings / summary.total_income * Decimal::ONE_HUNDRED).round_dp(2)
            };
            points.push(TrendPoint {
                period_start: first_of_month(year, month)?,
                income: summary.total_income,
                expenses: summary.total_expenses,
                savings_rate,
            });
        }
        Ok(points)
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, LedgerError> {
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| LedgerError::invalid(format!("invalid month {}-{:02}", year, month)))
}

/// Inclusive first/last day of a calendar month; rejects month outside 1-12.
fn month_bounds(year: i32, month: u32) -> Result<(NaiveDate, NaiveDate), LedgerError> {
    let first = first_of_month(year, month)?;
    let next_first = if month == 12 {
        first_of_month(year + 1, 1)?
    } else {
        first_of_month(year, month + 1)?
    };
    let last = next_first
        .pred_opt()
        .ok_or_else(|| LedgerError::invalid(format!("invalid month {}-{:02}", year, month)))?;
    Ok((first, last))
}
