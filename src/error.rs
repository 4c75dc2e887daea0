// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use thiserror::Error;

/// Why an add/set operation refused to touch session state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejected {
    #[error("amount is required")]
    EmptyAmount,
    #[error("invalid amount '{0}'")]
    InvalidAmount(String),
    #[error("negative amount {0} not allowed by policy")]
    NegativeAmount(String),
    #[error("category is required")]
    EmptyCategory,
    #[error("invalid date '{0}', expected YYYY-MM-DD")]
    InvalidDate(String),
    #[error("memo title is required")]
    EmptyTitle,
    #[error("memo content is required")]
    EmptyContent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_input() {
        assert_eq!(
            Rejected::InvalidAmount("12x".into()).to_string(),
            "invalid amount '12x'"
        );
        assert_eq!(
            Rejected::InvalidDate("2025-13-01".into()).to_string(),
            "invalid date '2025-13-01', expected YYYY-MM-DD"
        );
    }
}
