// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use rust_decimal::Decimal;

use crate::clock::{Clock, IdSource};
use crate::config::NegativeAmounts;
use crate::error::Rejected;
use crate::models::{Transaction, TransactionDraft};

/// Transactions in insertion order.
#[derive(Debug, Clone, Default)]
pub struct Ledger {
    items: Vec<Transaction>,
    ids: IdSource,
}

impl Ledger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(
        &mut self,
        draft: &TransactionDraft,
        clock: &Clock,
        negatives: NegativeAmounts,
    ) -> Result<&Transaction, Rejected> {
        let raw_amount = draft.amount.trim();
        if raw_amount.is_empty() {
            return Err(Rejected::EmptyAmount);
        }
        let category = draft.category.trim();
        if category.is_empty() {
            return Err(Rejected::EmptyCategory);
        }
        let amount = raw_amount
            .parse::<Decimal>()
            .map_err(|_| Rejected::InvalidAmount(raw_amount.to_string()))?;
        if amount.is_sign_negative() && !amount.is_zero() {
            match negatives {
                NegativeAmounts::Reject => {
                    return Err(Rejected::NegativeAmount(amount.to_string()));
                }
                NegativeAmounts::Accept => {
                    tracing::warn!(%amount, kind = %draft.kind, "recording negative amount as entered");
                }
            }
        }
        let date = match draft.date.as_deref() {
            Some(raw) => crate::utils::parse_date(raw)
                .map_err(|_| Rejected::InvalidDate(raw.to_string()))?,
            None => clock.today(),
        };

        let tx = Transaction {
            id: self.ids.next(clock),
            kind: draft.kind,
            amount,
            category: category.to_string(),
            description: draft.description.trim().to_string(),
            date,
        };
        tracing::debug!(id = tx.id, kind = %tx.kind, amount = %tx.amount, category = %tx.category, "transaction added");
        self.items.push(tx);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Returns whether anything was removed.
    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        let removed = self.items.len() != before;
        tracing::debug!(id, removed, "transaction delete");
        removed
    }

    pub fn get(&self, id: i64) -> Option<&Transaction> {
        self.items.iter().find(|t| t.id == id)
    }

    pub fn all(&self) -> &[Transaction] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Newest date first; same-day entries keep insertion order.
    pub fn recent(&self, limit: usize) -> Vec<&Transaction> {
        let mut v: Vec<&Transaction> = self.items.iter().collect();
        v.sort_by(|a, b| b.date.cmp(&a.date));
        v.truncate(limit);
        v
    }
}
