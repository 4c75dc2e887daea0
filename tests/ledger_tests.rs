// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneynote::clock::Clock;
use moneynote::config::NegativeAmounts;
use moneynote::error::Rejected;
use moneynote::ledger::Ledger;
use moneynote::models::{TransactionDraft, TxKind};
use rust_decimal::Decimal;

fn clock() -> Clock {
    Clock::Fixed(NaiveDate::from_ymd_opt(2025, 1, 31).unwrap())
}

fn expense(amount: &str, cat: &str) -> TransactionDraft {
    TransactionDraft::new(TxKind::Expense, amount, cat)
}

#[test]
fn add_assigns_increasing_ids_and_today() {
    let mut l = Ledger::new();
    let a = l.add(&expense("5", "Food"), &clock(), NegativeAmounts::Accept).unwrap().id;
    let b = l.add(&expense("6", "Food"), &clock(), NegativeAmounts::Accept).unwrap().id;
    assert!(b > a);
    assert_eq!(l.get(a).unwrap().date, clock().today());
    assert_eq!(l.len(), 2);
}

#[test]
fn add_rejects_missing_fields_without_mutating() {
    let mut l = Ledger::new();
    let c = clock();
    assert_eq!(
        l.add(&expense("", "Food"), &c, NegativeAmounts::Accept).unwrap_err(),
        Rejected::EmptyAmount
    );
    assert_eq!(
        l.add(&expense("10", "  "), &c, NegativeAmounts::Accept).unwrap_err(),
        Rejected::EmptyCategory
    );
    assert_eq!(
        l.add(&expense("1O", "Food"), &c, NegativeAmounts::Accept).unwrap_err(),
        Rejected::InvalidAmount("1O".into())
    );
    assert_eq!(
        l.add(&expense("10", "Food").on("2025-02-30"), &c, NegativeAmounts::Accept)
            .unwrap_err(),
        Rejected::InvalidDate("2025-02-30".into())
    );
    assert_eq!(
        l.add(&expense("10", "Food").on("2025-8-1"), &c, NegativeAmounts::Accept)
            .unwrap_err(),
        Rejected::InvalidDate("2025-8-1".into())
    );
    assert!(l.is_empty());
}

#[test]
fn zero_amount_is_accepted() {
    let mut l = Ledger::new();
    let t = l.add(&expense("0", "Food"), &clock(), NegativeAmounts::Reject).unwrap();
    assert_eq!(t.amount, Decimal::ZERO);
}

#[test]
fn negative_amount_follows_policy() {
    let mut l = Ledger::new();
    let t = l
        .add(&expense("-12.5", "Food"), &clock(), NegativeAmounts::Accept)
        .unwrap();
    assert_eq!(t.amount, Decimal::new(-125, 1));
    assert_eq!(
        l.add(&expense("-3", "Food"), &clock(), NegativeAmounts::Reject)
            .unwrap_err(),
        Rejected::NegativeAmount("-3".into())
    );
    assert_eq!(l.len(), 1);
}

#[test]
fn delete_unknown_id_is_a_noop() {
    let mut l = Ledger::new();
    let id = l.add(&expense("5", "Food"), &clock(), NegativeAmounts::Accept).unwrap().id;
    assert!(!l.delete(id + 1000));
    assert_eq!(l.len(), 1);
    assert!(l.delete(id));
    assert!(!l.delete(id));
    assert!(l.is_empty());
}

#[test]
fn recent_sorts_by_date_desc_with_stable_ties() {
    let mut l = Ledger::new();
    let c = clock();
    let mut ids = Vec::new();
    for (date, cat) in [
        ("2025-01-10", "A"),
        ("2025-01-20", "B"),
        ("2025-01-10", "C"),
        ("2025-01-05", "D"),
        ("2025-01-20", "E"),
    ] {
        ids.push(
            l.add(&expense("1", cat).on(date), &c, NegativeAmounts::Accept)
                .unwrap()
                .id,
        );
    }
    let cats: Vec<&str> = l.recent(10).iter().map(|t| t.category.as_str()).collect();
    assert_eq!(cats, vec!["B", "E", "A", "C", "D"]);
    assert_eq!(l.recent(2).len(), 2);
    // insertion order is untouched
    assert_eq!(l.all()[0].category, "A");
}

#[test]
fn recent_truncates_to_ten() {
    let mut l = Ledger::new();
    for day in 1..=15 {
        let date = format!("2025-01-{:02}", day);
        l.add(&expense("1", "Food").on(date), &clock(), NegativeAmounts::Accept)
            .unwrap();
    }
    let recent = l.recent(10);
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0].date.to_string(), "2025-01-15");
    assert_eq!(recent[9].date.to_string(), "2025-01-06");
}

#[test]
fn text_fields_are_trimmed() {
    let mut l = Ledger::new();
    let t = l
        .add(
            &expense(" 8.25 ", " Food ").description("  lunch "),
            &clock(),
            NegativeAmounts::Accept,
        )
        .unwrap();
    assert_eq!(t.category, "Food");
    assert_eq!(t.description, "lunch");
    assert_eq!(t.amount, Decimal::new(825, 2));
}
