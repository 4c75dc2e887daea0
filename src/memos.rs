// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use crate::clock::{Clock, IdSource};
use crate::error::Rejected;
use crate::models::{Memo, MemoCategory, MemoDraft};

/// Analysis notes, newest first.
#[derive(Debug, Clone, Default)]
pub struct MemoLog {
    items: Vec<Memo>,
    ids: IdSource,
}

impl MemoLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, draft: &MemoDraft, clock: &Clock) -> Result<&Memo, Rejected> {
        let title = draft.title.trim();
        if title.is_empty() {
            return Err(Rejected::EmptyTitle);
        }
        let content = draft.content.trim();
        if content.is_empty() {
            return Err(Rejected::EmptyContent);
        }
        let date = match draft.date.as_deref() {
            Some(raw) => crate::utils::parse_date(raw)
                .map_err(|_| Rejected::InvalidDate(raw.to_string()))?,
            None => clock.today(),
        };
        let memo = Memo {
            id: self.ids.next(clock),
            title: title.to_string(),
            content: content.to_string(),
            category: draft.category,
            date,
            created_at: clock.now(),
        };
        tracing::debug!(id = memo.id, category = %memo.category, "memo added");
        self.items.insert(0, memo);
        Ok(&self.items[0])
    }

    pub fn delete(&mut self, id: i64) -> bool {
        let before = self.items.len();
        self.items.retain(|m| m.id != id);
        let removed = self.items.len() != before;
        tracing::debug!(id, removed, "memo delete");
        removed
    }

    pub fn all(&self) -> &[Memo] {
        &self.items
    }

    pub fn by_category(&self, category: MemoCategory) -> impl Iterator<Item = &Memo> {
        self.items.iter().filter(move |m| m.category == category)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
