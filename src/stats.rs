// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! Derived statistics over the ledger and budget map.
//!
//! Everything here is a pure function of its arguments. A [`StatsSnapshot`]
//! is rebuilt on every query and never stored.
//!
//! Sums and ratios saturate at the `Decimal` range instead of overflowing.

use std::collections::BTreeMap;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Serialize;

use crate::budget::BudgetMap;
use crate::models::Transaction;

/// Length of the trailing expense window, today included.
pub const TREND_DAYS: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetComparison {
    pub spent: Decimal,
    pub budget: Decimal,
    pub remaining: Decimal,
    /// `None` when the budget is zero.
    pub percentage: Option<Decimal>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrendPoint {
    pub date: NaiveDate,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatsSnapshot {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub expenses_by_category: BTreeMap<String, Decimal>,
    pub budget_comparison: BTreeMap<String, BudgetComparison>,
    pub daily_trend: Vec<TrendPoint>,
}

pub fn compute(transactions: &[Transaction], budgets: &BudgetMap, today: NaiveDate) -> StatsSnapshot {
    let mut total_income = Decimal::ZERO;
    let mut total_expense = Decimal::ZERO;
    let mut expenses_by_category: BTreeMap<String, Decimal> = BTreeMap::new();

    for t in transactions {
        if t.is_income() {
            total_income = total_income.saturating_add(t.amount);
        } else {
            total_expense = total_expense.saturating_add(t.amount);
            let sum = expenses_by_category
                .entry(t.category.clone())
                .or_insert(Decimal::ZERO);
            *sum = sum.saturating_add(t.amount);
        }
    }

    let budget_comparison = budgets
        .iter()
        .map(|(category, budget)| {
            let spent = expenses_by_category
                .get(category)
                .copied()
                .unwrap_or(Decimal::ZERO);
            (category.to_string(), compare(spent, budget))
        })
        .collect();

    StatsSnapshot {
        total_income,
        total_expense,
        balance: total_income.saturating_sub(total_expense),
        expenses_by_category,
        budget_comparison,
        daily_trend: daily_trend(transactions, today),
    }
}

pub fn compare(spent: Decimal, budget: Decimal) -> BudgetComparison {
    BudgetComparison {
        spent,
        budget,
        remaining: budget.saturating_sub(spent),
        percentage: percentage(spent, budget),
    }
}

/// `spent / budget * 100` rounded to a whole number, halves toward +inf.
/// `None` only when the budget is zero.
pub fn percentage(spent: Decimal, budget: Decimal) -> Option<Decimal> {
    if budget.is_zero() {
        return None;
    }
    let raw = ratio_percent(spent, budget);
    Some(raw.checked_add(Decimal::new(5, 1)).unwrap_or(raw).floor())
}

/// `part * 100 / whole`, clamped to `Decimal::MIN..=Decimal::MAX`.
/// `whole` must be non-zero.
pub fn ratio_percent(part: Decimal, whole: Decimal) -> Decimal {
    let r = match part.checked_mul(Decimal::ONE_HUNDRED) {
        Some(scaled) => scaled.checked_div(whole),
        None => part
            .checked_div(whole)
            .map(|q| q.saturating_mul(Decimal::ONE_HUNDRED)),
    };
    r.unwrap_or(if part.is_sign_negative() != whole.is_sign_negative() {
        Decimal::MIN
    } else {
        Decimal::MAX
    })
}

pub fn daily_trend(transactions: &[Transaction], today: NaiveDate) -> Vec<TrendPoint> {
    let start = today - Duration::days(TREND_DAYS - 1);
    let mut points: Vec<TrendPoint> = (0..TREND_DAYS)
        .map(|i| TrendPoint {
            date: start + Duration::days(i),
            amount: Decimal::ZERO,
        })
        .collect();

    for t in transactions.iter().filter(|t| t.is_expense()) {
        if t.date < start || t.date > today {
            continue;
        }
        let idx = (t.date - start).num_days() as usize;
        points[idx].amount = points[idx].amount.saturating_add(t.amount);
    }
    points
}
