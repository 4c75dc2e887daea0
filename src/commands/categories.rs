// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::Result;
use serde::Serialize;

use crate::session::Session;
use crate::utils::{maybe_print_json, pretty_table};

#[derive(Debug, Clone, Serialize)]
pub struct CategoryRow {
    pub r#type: &'static str,
    pub name: String,
}

/// Suggested labels from settings. Any other label is still accepted.
pub fn handle(session: &Session, m: &clap::ArgMatches, out: &mut dyn Write) -> Result<()> {
    let s = session.settings();
    let data: Vec<CategoryRow> = s
        .expense_categories
        .iter()
        .map(|n| ("expense", n))
        .chain(s.income_categories.iter().map(|n| ("income", n)))
        .map(|(t, n)| CategoryRow {
            r#type: t,
            name: n.clone(),
        })
        .collect();
    if !maybe_print_json(out, m.get_flag("json"), m.get_flag("jsonl"), &data)? {
        let rows = data
            .iter()
            .map(|r| vec![r.r#type.to_string(), r.name.clone()])
            .collect();
        writeln!(out, "{}", pretty_table(&["Type", "Category"], rows))?;
    }
    Ok(())
}
