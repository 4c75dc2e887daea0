// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Moneynote", "moneynote"));

/// What `Ledger::add` does with an amount below zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NegativeAmounts {
    /// Record as entered.
    #[default]
    Accept,
    Reject,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Display code printed next to amounts.
    pub currency: String,
    /// Rows shown by `tx list` without `--limit`.
    pub recent_limit: usize,
    /// Budget usage above this percentage is reported as a caution.
    pub caution_percent: Decimal,
    pub negative_amounts: NegativeAmounts,
    /// Default tracing filter, overridden by `--log-level` and `RUST_LOG`.
    pub log_level: String,
    pub expense_categories: Vec<String>,
    pub income_categories: Vec<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            currency: "KRW".to_string(),
            recent_limit: 10,
            caution_percent: Decimal::from(80),
            negative_amounts: NegativeAmounts::default(),
            log_level: "warn".to_string(),
            expense_categories: [
                "Food",
                "Transport",
                "Shopping",
                "Medical",
                "Culture",
                "Education",
                "Housing",
                "Other",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            income_categories: ["Salary", "Side job", "Investment", "Other income"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific config dir")?;
    Ok(proj.config_dir().join("config.toml"))
}

impl Settings {
    pub fn from_toml(raw: &str) -> Result<Self> {
        let s: Settings = toml::from_str(raw).context("Invalid settings")?;
        s.validate()?;
        Ok(s)
    }

    /// Load from `explicit` if given (it must exist), otherwise from the
    /// platform config dir, falling back to defaults when no file is there.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(p) => p.to_path_buf(),
            None => {
                let p = config_path()?;
                if !p.exists() {
                    tracing::debug!(path = %p.display(), "no config file, using defaults");
                    return Ok(Self::default());
                }
                p
            }
        };
        let raw = fs::read_to_string(&path)
            .with_context(|| format!("Read config at {}", path.display()))?;
        let s = Self::from_toml(&raw).with_context(|| format!("Load config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(s)
    }

    fn validate(&self) -> Result<()> {
        if self.currency.trim().is_empty() {
            anyhow::bail!("currency must not be empty");
        }
        if self.recent_limit == 0 {
            anyhow::bail!("recent_limit must be at least 1");
        }
        if self.caution_percent.is_sign_negative() {
            anyhow::bail!("caution_percent must not be negative");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_file_keeps_other_defaults() {
        let s = Settings::from_toml("currency = \"USD\"\nnegative_amounts = \"reject\"\n").unwrap();
        assert_eq!(s.currency, "USD");
        assert_eq!(s.negative_amounts, NegativeAmounts::Reject);
        assert_eq!(s.recent_limit, 10);
        assert_eq!(s.expense_categories.len(), 8);
    }

    #[test]
    fn rejects_zero_recent_limit() {
        let err = Settings::from_toml("recent_limit = 0").unwrap_err();
        assert!(err.to_string().contains("recent_limit"));
    }

    #[test]
    fn caution_percent_reads_as_number() {
        let s = Settings::from_toml("caution_percent = 90").unwrap();
        assert_eq!(s.caution_percent, Decimal::from(90));
    }
}
