// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TxKind {
    Expense,
    Income,
}

impl TxKind {
    pub const NAMES: [&'static str; 2] = ["expense", "income"];

    pub fn as_str(&self) -> &'static str {
        match self {
            TxKind::Expense => "expense",
            TxKind::Income => "income",
        }
    }
}

impl fmt::Display for TxKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TxKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "expense" => Ok(TxKind::Expense),
            "income" => Ok(TxKind::Income),
            other => Err(anyhow::anyhow!(
                "Unknown transaction type '{}', expected expense or income",
                other
            )),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: TxKind,
    pub amount: Decimal,
    pub category: String,
    pub description: String,
    pub date: NaiveDate,
}

impl Transaction {
    pub fn is_expense(&self) -> bool {
        self.kind == TxKind::Expense
    }

    pub fn is_income(&self) -> bool {
        self.kind == TxKind::Income
    }
}

/// Raw form values for a new transaction, validated by `Ledger::add`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionDraft {
    pub kind: TxKind,
    pub amount: String,
    pub category: String,
    pub description: String,
    /// `None` means today.
    pub date: Option<String>,
}

impl TransactionDraft {
    pub fn new(kind: TxKind, amount: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            kind,
            amount: amount.into(),
            category: category.into(),
            description: String::new(),
            date: None,
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemoCategory {
    #[default]
    General,
    Expense,
    Income,
    Budget,
    Goal,
    Insight,
}

impl MemoCategory {
    pub const ALL: [MemoCategory; 6] = [
        MemoCategory::General,
        MemoCategory::Expense,
        MemoCategory::Income,
        MemoCategory::Budget,
        MemoCategory::Goal,
        MemoCategory::Insight,
    ];

    pub const NAMES: [&'static str; 6] = ["general", "expense", "income", "budget", "goal", "insight"];

    pub fn as_str(&self) -> &'static str {
        match self {
            MemoCategory::General => "general",
            MemoCategory::Expense => "expense",
            MemoCategory::Income => "income",
            MemoCategory::Budget => "budget",
            MemoCategory::Goal => "goal",
            MemoCategory::Insight => "insight",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemoCategory::General => "General analysis",
            MemoCategory::Expense => "Expense analysis",
            MemoCategory::Income => "Income analysis",
            MemoCategory::Budget => "Budget analysis",
            MemoCategory::Goal => "Goal setting",
            MemoCategory::Insight => "Insight",
        }
    }
}

impl fmt::Display for MemoCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MemoCategory {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim().to_lowercase();
        MemoCategory::NAMES
            .iter()
            .position(|n| *n == s)
            .map(|i| MemoCategory::ALL[i])
            .ok_or_else(|| anyhow::anyhow!("Unknown memo category '{}'", s))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Memo {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub category: MemoCategory,
    pub date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MemoDraft {
    pub title: String,
    pub content: String,
    pub category: MemoCategory,
    pub date: Option<String>,
}

impl MemoDraft {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            category: MemoCategory::default(),
            date: None,
        }
    }

    pub fn category(mut self, category: MemoCategory) -> Self {
        self.category = category;
        self
    }

    pub fn on(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}
