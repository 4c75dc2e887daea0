// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;

use crate::models::{Memo, MemoCategory, MemoDraft};
use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};

pub fn handle(session: &mut Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    match m.subcommand() {
        Some(("add", sub)) => add(session, sub, out)?,
        Some(("rm", sub)) => rm(session, sub, out)?,
        Some(("list", sub)) => list(session, sub, out)?,
        _ => {}
    }
    Ok(())
}

pub fn draft_from(sub: &clap::ArgMatches) -> Result<MemoDraft> {
    let title = sub.get_one::<String>("title").map(String::as_str).unwrap_or("");
    let content = sub.get_one::<String>("content").map(String::as_str).unwrap_or("");
    let category: MemoCategory = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<MemoCategory>())
        .transpose()?
        .unwrap_or_default();
    let mut draft = MemoDraft::new(title, content).category(category);
    if let Some(date) = sub.get_one::<String>("date") {
        draft = draft.on(date.as_str());
    }
    Ok(draft)
}

fn add(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let draft = draft_from(sub)?;
    let memo = session.add_memo(&draft)?;
    writeln!(
        out,
        "Saved memo #{} '{}' [{}]",
        memo.id,
        memo.title,
        memo.category.label()
    )?;
    Ok(())
}

fn rm(session: &mut Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let id = *sub.get_one::<i64>("id").unwrap_or(&0);
    if session.delete_memo(id) {
        writeln!(out, "Removed memo #{}", id)?;
    } else {
        writeln!(out, "No memo #{}", id)?;
    }
    Ok(())
}

pub fn query_rows(session: &Session, sub: &clap::ArgMatches) -> Result<Vec<Memo>> {
    let filter: Option<MemoCategory> = sub
        .get_one::<String>("category")
        .map(|s| s.parse::<MemoCategory>())
        .transpose()?;
    let memos = session.memos();
    Ok(match filter {
        Some(c) => memos.by_category(c).cloned().collect(),
        None => memos.all().to_vec(),
    })
}

fn list(session: &Session, sub: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let json_flag = sub.get_flag("json");
    let jsonl_flag = sub.get_flag("jsonl");
    let data = query_rows(session, sub)?;
    if maybe_print_json(out, json_flag, jsonl_flag, &data)? {
        return Ok(());
    }
    if data.is_empty() {
        writeln!(out, "No memos yet")?;
        return Ok(());
    }
    let rows = data
        .iter()
        .map(|m| {
            vec![
                m.id.to_string(),
                m.date.to_string(),
                m.category.label().to_string(),
                m.title.clone(),
                m.content.clone(),
            ]
        })
        .collect();
    writeln!(
        out,
        "{}",
        pretty_table(&["ID", "Date", "Category", "Title", "Content"], rows)
    )?;
    Ok(())
}
