// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::{DateTime, NaiveDate, Utc};

/// Source of "today" and "now" for a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Clock {
    #[default]
    System,
    /// Pinned to midnight UTC of the given day; used by scripts and tests.
    Fixed(NaiveDate),
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Utc::now().date_naive(),
            Clock::Fixed(d) => *d,
        }
    }

    pub fn now(&self) -> DateTime<Utc> {
        match self {
            Clock::System => Utc::now(),
            Clock::Fixed(d) => d.and_time(chrono::NaiveTime::MIN).and_utc(),
        }
    }
}

/// Time-based ids that stay strictly increasing even when two records are
/// created within the same millisecond.
#[derive(Debug, Clone, Default)]
pub struct IdSource {
    last: i64,
}

impl IdSource {
    pub fn next(&mut self, clock: &Clock) -> i64 {
        let id = clock.now().timestamp_millis().max(self.last + 1);
        self.last = id;
        id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_clock_ids_are_distinct() {
        let clock = Clock::Fixed(NaiveDate::from_ymd_opt(2025, 8, 15).unwrap());
        let mut ids = IdSource::default();
        let a = ids.next(&clock);
        let b = ids.next(&clock);
        let c = ids.next(&clock);
        assert!(a < b && b < c);
        assert_eq!(a, clock.now().timestamp_millis());
    }

    #[test]
    fn system_clock_ids_increase() {
        let mut ids = IdSource::default();
        let first = ids.next(&Clock::System);
        assert!(ids.next(&Clock::System) > first);
    }
}
