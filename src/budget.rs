// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::Rejected;

/// Category label to budgeted amount. Labels are free-form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BudgetMap {
    amounts: BTreeMap<String, Decimal>,
}

impl BudgetMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Upsert from raw form values. Returns the previous amount, if any.
    pub fn set(&mut self, category: &str, amount: &str) -> Result<Option<Decimal>, Rejected> {
        let category = category.trim();
        if category.is_empty() {
            return Err(Rejected::EmptyCategory);
        }
        let raw = amount.trim();
        if raw.is_empty() {
            return Err(Rejected::EmptyAmount);
        }
        let amount = raw
            .parse::<Decimal>()
            .map_err(|_| Rejected::InvalidAmount(raw.to_string()))?;
        let prev = self.amounts.insert(category.to_string(), amount);
        tracing::debug!(category, %amount, replaced = prev.is_some(), "budget set");
        Ok(prev)
    }

    pub fn get(&self, category: &str) -> Option<Decimal> {
        self.amounts.get(category).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, Decimal)> {
        self.amounts.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.amounts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.amounts.is_empty()
    }
}
