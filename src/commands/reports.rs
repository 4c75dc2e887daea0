// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::session::Session;
use crate::stats::ratio_percent;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    match m.subcommand() {
        Some(("by-category", sub)) => by_category(session, sub, out)?,
        Some(("trend", sub)) => trend(session, sub, out)?,
        Some(("budget", sub)) => crate::commands::budgets::report(session, sub, out)?,
        Some(("insights", sub)) => insights(session, sub, out)?,
        _ => {}
    }
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Overview {
    pub total_income: Decimal,
    pub total_expense: Decimal,
    pub balance: Decimal,
    pub transaction_count: usize,
}

pub fn overview_of(session: &Session) -> Overview {
    let s = session.stats();
    Overview {
        total_income: s.total_income,
        total_expense: s.total_expense,
        balance: s.balance,
        transaction_count: session.ledger().len(),
    }
}

pub fn overview(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let o = overview_of(session);
    if !maybe_print_json(out, json_flag, jsonl_flag, &o)? {
        let ccy = &session.settings().currency;
        let rows = vec![
            vec!["Income".to_string(), fmt_money(&o.total_income, ccy)],
            vec!["Expense".to_string(), fmt_money(&o.total_expense, ccy)],
            vec!["Balance".to_string(), fmt_money(&o.balance, ccy)],
            vec!["Transactions".to_string(), o.transaction_count.to_string()],
        ];
        writeln!(out, "{}", pretty_table(&["Metric", "Value"], rows))?;
    }
    Ok(())
}

fn by_category(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = session.stats();
    if maybe_print_json(out, json_flag, jsonl_flag, &snapshot.expenses_by_category)? {
        return Ok(());
    }
    let ccy = &session.settings().currency;
    let mut items: Vec<_> = snapshot.expenses_by_category.iter().collect();
    items.sort_by(|a, b| b.1.cmp(a.1));
    let rows = items
        .into_iter()
        .map(|(cat, amt)| {
            let share = if snapshot.total_expense.is_zero() {
                Decimal::ZERO
            } else {
                ratio_percent(*amt, snapshot.total_expense).round_dp(1)
            };
            vec![cat.clone(), fmt_money(amt, ccy), format!("{:.1}%", share)]
        })
        .collect();
    writeln!(out, "{}", pretty_table(&["Category", "Spent", "Share"], rows))?;
    Ok(())
}

fn trend(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let snapshot = session.stats();
    if !maybe_print_json(out, json_flag, jsonl_flag, &snapshot.daily_trend)? {
        let ccy = &session.settings().currency;
        let rows = snapshot
            .daily_trend
            .iter()
            .map(|p| vec![p.date.format("%m-%d").to_string(), fmt_money(&p.amount, ccy)])
            .collect();
        writeln!(out, "{}", pretty_table(&["Day", "Spent"], rows))?;
    }
    Ok(())
}

fn insights(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let i = session.insights();
    if maybe_print_json(out, json_flag, jsonl_flag, &i)? {
        return Ok(());
    }
    let ccy = &session.settings().currency;
    let mut rows = vec![
        vec!["Transactions".to_string(), i.transaction_count.to_string()],
        vec!["Savings rate".to_string(), format!("{}%", i.savings_rate)],
        vec!["Average expense".to_string(), fmt_money(&i.average_expense, ccy)],
        vec![
            "Most active category".to_string(),
            i.most_active_category.clone().unwrap_or_else(|| "none".into()),
        ],
    ];
    for (n, c) in i.top_categories.iter().enumerate() {
        rows.push(vec![
            format!("Top {}", n + 1),
            format!("{}: {}", c.category, fmt_money(&c.amount, ccy)),
        ]);
    }
    if session.budgets().is_empty() {
        rows.push(vec!["Budget".to_string(), "no budgets set".to_string()]);
    }
    for a in &i.budget_alerts {
        let mut note = format!("{}: {}% used", a.category, a.percentage);
        if a.over {
            note.push_str(" (over!)");
        }
        rows.push(vec!["Budget alert".to_string(), note]);
    }
    writeln!(out, "{}", pretty_table(&["Insight", "Value"], rows))?;
    Ok(())
}
