// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::insights::BudgetStatus;
use crate::session::Session;
use crate::utils::{fmt_money, fmt_percent, maybe_print_json, pretty_table};

pub fn handle(session: &mut Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    match m.subcommand() {
        Some(("set", sub)) => set(session, sub, out)?,
        Some(("list", sub)) => report(session, sub, out)?,
        _ => {}
    }
    Ok(())
}

fn set(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let cat = sub.get_one::<String>("category").map(String::as_str).unwrap_or("");
    let amount = sub.get_one::<String>("amount").map(String::as_str).unwrap_or("");
    session.set_budget(cat, amount)?;
    let cat = cat.trim();
    let stored = session.budgets().get(cat).unwrap_or(Decimal::ZERO);
    writeln!(
        out,
        "Budget set for {} = {}",
        cat,
        fmt_money(&stored, &session.settings().currency)
    )?;
    Ok(())
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BudgetRow {
    pub category: String,
    pub budget: Decimal,
    pub spent: Decimal,
    pub remaining: Decimal,
    pub percentage: Option<Decimal>,
    pub status: BudgetStatus,
}

/// Budget-vs-actual for every budgeted category, in name order.
pub fn budget_rows(session: &Session) -> Vec<BudgetRow> {
    let caution = session.settings().caution_percent;
    session
        .stats()
        .budget_comparison
        .into_iter()
        .map(|(category, c)| BudgetRow {
            status: BudgetStatus::classify(&c, caution),
            category,
            budget: c.budget,
            spent: c.spent,
            remaining: c.remaining,
            percentage: c.percentage,
        })
        .collect()
}

pub fn report(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = budget_rows(session);
    if !maybe_print_json(out, json_flag, jsonl_flag, &data)? {
        let ccy = &session.settings().currency;
        let rows = data
            .iter()
            .map(|r| {
                vec![
                    r.category.clone(),
                    fmt_money(&r.budget, ccy),
                    fmt_money(&r.spent, ccy),
                    fmt_money(&r.remaining, ccy),
                    fmt_percent(r.percentage),
                    r.status.as_str().to_string(),
                ]
            })
            .collect();
        writeln!(
            out,
            "{}",
            pretty_table(
                &["Category", "Budget", "Spent", "Remaining", "Used", "Status"],
                rows
            )
        )?;
    }
    Ok(())
}
