// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The single owner of all in-memory state.
//!
//! A `Session` holds the ledger, the budget map and the memo log for the
//! lifetime of one process. Mutations go through its methods; statistics are
//! derived on demand. `execute_line` and `run` drive it from text commands.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};

use crate::budget::BudgetMap;
use crate::clock::Clock;
use crate::config::Settings;
use crate::error::Rejected;
use crate::insights::{self, Insights};
use crate::ledger::Ledger;
use crate::memos::MemoLog;
use crate::models::{Memo, MemoDraft, Transaction, TransactionDraft};
use crate::stats::{self, StatsSnapshot};
use crate::{cli, commands, utils};

/// What the caller should do after a line has been executed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

#[derive(Debug, Clone)]
pub struct Session {
    settings: Settings,
    clock: Clock,
    ledger: Ledger,
    budgets: BudgetMap,
    memos: MemoLog,
}

impl Session {
    pub fn new(settings: Settings, clock: Clock) -> Self {
        Self {
            settings,
            clock,
            ledger: Ledger::new(),
            budgets: BudgetMap::new(),
            memos: MemoLog::new(),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn clock(&self) -> &Clock {
        &self.clock
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn budgets(&self) -> &BudgetMap {
        &self.budgets
    }

    pub fn memos(&self) -> &MemoLog {
        &self.memos
    }

    pub fn add_transaction(&mut self, draft: &TransactionDraft) -> Result<&Transaction, Rejected> {
        self.ledger
            .add(draft, &self.clock, self.settings.negative_amounts)
    }

    pub fn delete_transaction(&mut self, id: i64) -> bool {
        self.ledger.delete(id)
    }

    pub fn set_budget(&mut self, category: &str, amount: &str) -> Result<(), Rejected> {
        self.budgets.set(category, amount).map(|_| ())
    }

    pub fn add_memo(&mut self, draft: &MemoDraft) -> Result<&Memo, Rejected> {
        self.memos.add(draft, &self.clock)
    }

    pub fn delete_memo(&mut self, id: i64) -> bool {
        self.memos.delete(id)
    }

    pub fn stats(&self) -> StatsSnapshot {
        stats::compute(self.ledger.all(), &self.budgets, self.clock.today())
    }

    pub fn insights(&self) -> Insights {
        let snapshot = self.stats();
        insights::analyze(self.ledger.all(), &snapshot, self.settings.caution_percent)
    }

    /// Parse and run one command line. Rejections and command errors are
    /// reported on `out`; only write failures on `out` come back as `Err`.
    pub fn execute_line(&mut self, line: &str, out: &mut dyn Write) -> Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        let words = match utils::split_line(line) {
            Ok(w) => w,
            Err(e) => {
                writeln!(out, "error: {:#}", e)?;
                return Ok(Flow::Continue);
            }
        };
        let matches = match cli::build_session_cli().try_get_matches_from(&words) {
            Ok(m) => m,
            Err(e) => {
                write!(out, "{}", e)?;
                return Ok(Flow::Continue);
            }
        };

        let res = match matches.subcommand() {
            Some(("quit", _)) | Some(("exit", _)) => return Ok(Flow::Quit),
            Some(("help", _)) => {
                writeln!(out, "{}", cli::build_session_cli().render_help())?;
                Ok(())
            }
            Some(("tx", sub)) => commands::transactions::handle(self, sub, out),
            Some(("budget", sub)) => commands::budgets::handle(self, sub, out),
            Some(("memo", sub)) => commands::memos::handle(self, sub, out),
            Some(("stats", sub)) => commands::reports::overview(self, sub, out),
            Some(("report", sub)) => commands::reports::handle(self, sub, out),
            Some(("categories", sub)) => commands::categories::handle(self, sub, out),
            _ => Ok(()),
        };

        if let Err(e) = res {
            if let Some(r) = e.downcast_ref::<Rejected>() {
                tracing::info!(reason = %r, "input rejected");
                writeln!(out, "rejected: {}", r)?;
            } else if let Some(io) = e.downcast_ref::<std::io::Error>() {
                return Err(anyhow::anyhow!("output failed: {}", io));
            } else {
                writeln!(out, "error: {:#}", e)?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Read commands until end of input or `quit`.
    pub fn run<R: BufRead>(&mut self, input: R, out: &mut dyn Write, prompt: bool) -> Result<()> {
        tracing::info!(today = %self.clock.today(), "session started");
        let mut lines = input.lines();
        loop {
            if prompt {
                write!(out, "moneynote> ")?;
                out.flush()?;
            }
            let Some(line) = lines.next() else { break };
            let line = line.context("Read command line")?;
            if self.execute_line(&line, out)? == Flow::Quit {
                break;
            }
        }
        tracing::info!(
            transactions = self.ledger.len(),
            budgets = self.budgets.len(),
            memos = self.memos.len(),
            "session ended"
        );
        Ok(())
    }
}
