// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;

use crate::models::{Transaction, TransactionDraft, TxKind};
use crate::session::Session;
use crate::utils::{fmt_money, maybe_print_json, pretty_table};

pub fn handle(session: &mut Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub, out)?,
        Some(("rm", sub)) => rm(session, sub, out)?,
        Some(("list", sub)) => list(session, sub, out)?,
        _ => {}
    }
    Ok(())
}

fn arg<'a>(sub: &'a clap::ArgMatches, name: &str) -> &'a str {
    sub.get_one::<String>(name).map(String::as_str).unwrap_or("")
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<TransactionDraft> {
    let kind: TxKind = arg(sub, "type").parse()?;
    let mut draft = TransactionDraft::new(kind, arg(sub, "amount"), arg(sub, "category"))
        .description(arg(sub, "desc"));
    if let Some(date) = sub.get_one::<String>("date") {
        draft = draft.on(date.as_str());
    }
    Ok(draft)
}

fn add(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let draft = draft_from(sub)?;
    let ccy = session.settings().currency.clone();
    let tx = session.add_transaction(&draft)?;
    writeln!(
        out,
        "Recorded {} #{}: {} in '{}' on {}",
        tx.kind,
        tx.id,
        fmt_money(&tx.amount, &ccy),
        tx.category,
        tx.date
    )?;
    Ok(())
}

fn rm(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap_or(&0);
    if session.delete_transaction(id) {
        writeln!(out, "Removed transaction #{}", id)?;
    } else {
        writeln!(out, "No transaction #{}", id)?;
    }
    Ok(())
}

fn list(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub);
    if !maybe_print_json(out, json_flag, jsonl_flag, &data)? {
        let ccy = &session.settings().currency;
        let rows: Vec<Vec<String>> = data
            .iter()
            .map(|t| {
                vec![
                    t.id.to_string(),
                    t.date.to_string(),
                    t.kind.to_string(),
                    t.category.clone(),
                    fmt_money(&t.amount, ccy),
                    t.description.clone(),
                ]
            })
            .collect();
        writeln!(
            out,
            "{}",
            pretty_table(&["ID", "Date", "Type", "Category", "Amount", "Description"], rows)
        )?;
    }
    Ok(())
}

/// Rows for `tx list`: `--all`, `--limit N`, or the configured recent count.
pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Vec<Transaction> {
    let limit = if sub.get_flag("all") {
        usize::MAX
    } else {
        sub.get_one::<usize>("limit")
            .copied()
            .unwrap_or(session.settings().recent_limit)
    };
    session
        .ledger()
        .recent(limit)
        .into_iter()
        .cloned()
        .collect()
}
