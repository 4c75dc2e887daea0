// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::NaiveDate;
use comfy_table::{presets::UTF8_FULL, Cell, Table};
use rust_decimal::Decimal;

/// Strict `YYYY-MM-DD`; month and day must be zero-padded.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    let t = s.trim();
    if t.len() != 10 {
        anyhow::bail!("Invalid date '{}', expected YYYY-MM-DD", s);
    }
    NaiveDate::parse_from_str(t, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}', expected YYYY-MM-DD", s))
}

pub fn fmt_money(d: &Decimal, ccy: &str) -> String {
    format!("{} {:.2}", ccy, d.round_dp(2))
}

pub fn fmt_percent(p: Option<Decimal>) -> String {
    match p {
        Some(p) => format!("{}%", p),
        None => "n/a".to_string(),
    }
}

pub fn pretty_table(headers: &[&str], rows: Vec<Vec<String>>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_FULL);
    t.set_header(headers.iter().map(|h| Cell::new(*h)));
    for r in rows {
        t.add_row(r.into_iter().map(Cell::new));
    }
    t
}

pub fn maybe_print_json<T: serde::Serialize>(
    out: &mut dyn Write,
    json_flag: bool,
    jsonl_flag: bool,
    v: &T,
) -> Result<bool> {
    if json_flag {
        writeln!(out, "{}", serde_json::to_string_pretty(v)?)?;
        return Ok(true);
    }
    if jsonl_flag {
        // If v is an array, stream each element; else stream single line
        let val = serde_json::to_value(v)?;
        if let Some(arr) = val.as_array() {
            for item in arr {
                writeln!(out, "{}", serde_json::to_string(item)?)?;
            }
        } else {
            writeln!(out, "{}", serde_json::to_string(&val)?)?;
        }
        return Ok(true);
    }
    Ok(false)
}

/// Split a session line into words with shell quoting rules.
pub fn split_line(line: &str) -> Result<Vec<String>> {
    shell_words::split(line).context("Unterminated quote")
}
