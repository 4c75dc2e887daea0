// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use std::io::Write;

use moneynote::config::{NegativeAmounts, Settings};
use rust_decimal::Decimal;
use tempfile::NamedTempFile;

#[test]
fn load_explicit_file() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(
        f,
        r#"
currency = "USD"
recent_limit = 5
caution_percent = 75
negative_amounts = "reject"
expense_categories = ["Rent", "Groceries"]
"#
    )
    .unwrap();
    let s = Settings::load(Some(f.path())).unwrap();
    assert_eq!(s.currency, "USD");
    assert_eq!(s.recent_limit, 5);
    assert_eq!(s.caution_percent, Decimal::from(75));
    assert_eq!(s.negative_amounts, NegativeAmounts::Reject);
    assert_eq!(s.expense_categories, vec!["Rent", "Groceries"]);
    assert_eq!(s.income_categories, Settings::default().income_categories);
}

#[test]
fn missing_explicit_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Settings::load(Some(dir.path().join("nope.toml").as_path())).unwrap_err();
    assert!(err.to_string().contains("Read config"));
}

#[test]
fn malformed_file_names_the_path() {
    let mut f = NamedTempFile::new().unwrap();
    writeln!(f, "recent_limit = \"ten\"").unwrap();
    let err = Settings::load(Some(f.path())).unwrap_err();
    assert!(format!("{:#}", err).contains("Load config"));
}
