// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::HashMap;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::Transaction;
use crate::stats::{ratio_percent, BudgetComparison, StatsSnapshot};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum BudgetStatus {
    Ok,
    Caution,
    Over,
    ZeroBudget,
}

impl BudgetStatus {
    pub fn classify(c: &BudgetComparison, caution_percent: Decimal) -> Self {
        match c.percentage {
            None => BudgetStatus::ZeroBudget,
            Some(p) if p > Decimal::ONE_HUNDRED => BudgetStatus::Over,
            Some(p) if p > caution_percent => BudgetStatus::Caution,
            Some(_) => BudgetStatus::Ok,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetStatus::Ok => "ok",
            BudgetStatus::Caution => "caution",
            BudgetStatus::Over => "over",
            BudgetStatus::ZeroBudget => "zero-budget",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryAmount {
    pub category: String,
    pub amount: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetAlert {
    pub category: String,
    pub percentage: Decimal,
    pub over: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Insights {
    pub transaction_count: usize,
    /// Percent of income kept, one decimal place.
    pub savings_rate: Decimal,
    pub top_categories: Vec<CategoryAmount>,
    pub budget_alerts: Vec<BudgetAlert>,
    pub average_expense: Decimal,
    pub most_active_category: Option<String>,
}

const TOP_N: usize = 3;

pub fn analyze(
    transactions: &[Transaction],
    snapshot: &StatsSnapshot,
    caution_percent: Decimal,
) -> Insights {
    let savings_rate = if snapshot.total_income > Decimal::ZERO {
        ratio_percent(snapshot.balance, snapshot.total_income).round_dp(1)
    } else {
        Decimal::ZERO
    };

    let mut top: Vec<CategoryAmount> = snapshot
        .expenses_by_category
        .iter()
        .map(|(category, amount)| CategoryAmount {
            category: category.clone(),
            amount: *amount,
        })
        .collect();
    // stable: equal amounts stay in name order
    top.sort_by(|a, b| b.amount.cmp(&a.amount));
    top.truncate(TOP_N);

    let budget_alerts = snapshot
        .budget_comparison
        .iter()
        .filter_map(|(category, c)| {
            let p = c.percentage?;
            (p > caution_percent).then(|| BudgetAlert {
                category: category.clone(),
                percentage: p,
                over: p > Decimal::ONE_HUNDRED,
            })
        })
        .collect();

    let expense_count = transactions.iter().filter(|t| t.is_expense()).count();
    let average_expense = snapshot
        .total_expense
        .checked_div(Decimal::from(expense_count.max(1)))
        .unwrap_or(snapshot.total_expense)
        .round_dp(2);

    Insights {
        transaction_count: transactions.len(),
        savings_rate,
        top_categories: top,
        budget_alerts,
        average_expense,
        most_active_category: most_active(transactions),
    }
}

/// Category with the most expense entries; ties go to the one seen first.
fn most_active(transactions: &[Transaction]) -> Option<String> {
    let mut counts: HashMap<&str, (usize, usize)> = HashMap::new();
    for (pos, t) in transactions.iter().filter(|t| t.is_expense()).enumerate() {
        counts.entry(t.category.as_str()).or_insert((0, pos)).0 += 1;
    }
    counts
        .into_iter()
        .max_by(|a, b| a.1.0.cmp(&b.1.0).then(b.1.1.cmp(&a.1.1)))
        .map(|(c, _)| c.to_string())
}
