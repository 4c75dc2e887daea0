// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use chrono::NaiveDate;
use moneynote::clock::Clock;
use moneynote::error::Rejected;
use moneynote::memos::MemoLog;
use moneynote::models::{MemoCategory, MemoDraft};

fn clock() -> Clock {
    Clock::Fixed(NaiveDate::from_ymd_opt(2025, 8, 1).unwrap())
}

fn setup() -> MemoLog {
    let mut log = MemoLog::new();
    log.add(&MemoDraft::new("Dining", "Eat in twice a week"), &clock())
        .unwrap();
    log.add(
        &MemoDraft::new("Goal", "Save 20% of salary").category(MemoCategory::Goal),
        &clock(),
    )
    .unwrap();
    log
}

#[test]
fn newest_memo_comes_first() {
    let log = setup();
    let titles: Vec<&str> = log.all().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Goal", "Dining"]);
    assert_eq!(log.all()[1].category, MemoCategory::General);
    assert_eq!(log.all()[0].date, clock().today());
    assert_eq!(log.all()[0].created_at, clock().now());
}

#[test]
fn add_then_delete_restores_list() {
    let mut log = setup();
    let before = log.all().to_vec();
    let id = log
        .add(&MemoDraft::new("Temp", "scratch").on("2025-07-30"), &clock())
        .unwrap()
        .id;
    assert_eq!(log.len(), 3);
    assert!(log.delete(id));
    assert_eq!(log.all(), before.as_slice());
}

#[test]
fn delete_middle_keeps_order() {
    let mut log = setup();
    let id = log
        .add(&MemoDraft::new("Third", "c"), &clock())
        .unwrap()
        .id;
    let middle = log.all()[1].id;
    assert!(log.delete(middle));
    let titles: Vec<&str> = log.all().iter().map(|m| m.title.as_str()).collect();
    assert_eq!(titles, vec!["Third", "Dining"]);
    assert!(!log.delete(middle));
    assert_eq!(log.all()[0].id, id);
}

#[test]
fn blank_title_or_content_is_rejected() {
    let mut log = setup();
    assert_eq!(
        log.add(&MemoDraft::new(" ", "body"), &clock()).unwrap_err(),
        Rejected::EmptyTitle
    );
    assert_eq!(
        log.add(&MemoDraft::new("title", ""), &clock()).unwrap_err(),
        Rejected::EmptyContent
    );
    assert_eq!(
        log.add(&MemoDraft::new("t", "c").on("yesterday"), &clock())
            .unwrap_err(),
        Rejected::InvalidDate("yesterday".into())
    );
    assert_eq!(log.len(), 2);
}

#[test]
fn filter_by_category() {
    let log = setup();
    let goals: Vec<_> = log.by_category(MemoCategory::Goal).collect();
    assert_eq!(goals.len(), 1);
    assert_eq!(goals[0].title, "Goal");
    assert_eq!(log.by_category(MemoCategory::Insight).count(), 0);
}
