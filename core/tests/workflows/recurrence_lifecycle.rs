// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Recurrence workflow tests across store cycles.

use agenda_core::{Error, IdAllocator, Ledger, RecurrenceRequest, RecurrenceUnit};

use crate::common::{RecordBuilder, appointment, assert_bodies, assert_numbered, setup_temp_store};

#[test]
fn recurrence_group_survives_a_save_and_reload() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let store = temp.store();
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![appointment("2024/01/15 9:00~2024/01/15 10:00 rent")]);
    store.save(&mut ledger, &mut ids).unwrap();

    // Act
    let mut outcome = store.load().unwrap();
    let request = RecurrenceRequest::new(RecurrenceUnit::Month, 2).unwrap();
    let added = outcome.ledger.repeat(1, request, &mut outcome.ids).unwrap();
    store.save(&mut outcome.ledger, &mut outcome.ids).unwrap();

    // Assert
    assert_eq!(added.len(), 2);
    let reloaded = store.load().unwrap();
    assert_bodies(&reloaded.ledger, &["rent", "rent", "rent"]);
    assert_numbered(&reloaded.ledger);

    let base = reloaded.ledger.get(1).unwrap();
    assert!(base.is_recurrence_base());
    assert_eq!(base.id(), 1);
    assert_eq!(base.recurrence(), Some(request));
    for member in &reloaded.ledger.appointments()[1..] {
        assert!(member.is_recurrence_member());
        assert_eq!(member.group_id(), 1);
        assert!(member.recurrence().is_none());
        assert!(member.id() > 1);
    }
}

#[test]
fn recurrence_month_end_skips_short_months() {
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![appointment("2024/01/31 18:00~2024/01/31 19:00 report")]);
    let request = RecurrenceRequest::new(RecurrenceUnit::Month, 2).unwrap();

    let added = ledger.repeat(1, request, &mut ids).unwrap();

    assert_eq!(added.len(), 1);
    assert_eq!(
        added[0].interval().to_string(),
        "2024/03/31 18:00~2024/03/31 19:00"
    );
}

#[test]
fn recurrence_yearly_leap_day() {
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![appointment("2024/02/29 9:00~2024/02/29 10:00 leap")]);
    let request = RecurrenceRequest::new(RecurrenceUnit::Year, 8).unwrap();

    let added = ledger.repeat(1, request, &mut ids).unwrap();

    let years: Vec<u16> = added
        .iter()
        .map(|a| a.interval().start().date().year().get())
        .collect();
    assert_eq!(years, [2028, 2032]);
}

#[test]
fn recurrence_delete_member_is_rejected_until_base_goes() {
    // Arrange: a group stored on disk plus one unrelated record
    let temp = setup_temp_store().unwrap();
    let lines = [
        RecordBuilder::new(1).group(1).recurrence("YEAR", 1).body("base").line(),
        RecordBuilder::new(2)
            .group(1)
            .span([2025, 3, 5, 9, 0], [2025, 3, 5, 10, 0])
            .body("member")
            .line(),
        RecordBuilder::new(3)
            .span([2024, 6, 1, 9, 0], [2024, 6, 1, 10, 0])
            .body("other")
            .line(),
    ];
    temp.write(&(lines.join("\n") + "\n")).unwrap();
    let store = temp.store();

    // Act & Assert: the member cannot go alone
    let mut outcome = store.load().unwrap();
    assert_bodies(&outcome.ledger, &["base", "other", "member"]);
    match outcome.ledger.delete(3) {
        Err(Error::Recurrence(msg)) => assert!(msg.contains("appointment 1"), "{msg}"),
        other => panic!("expected a recurrence error, got {other:?}"),
    }
    assert_eq!(outcome.ledger.len(), 3);

    // Deleting the base takes the whole group in one save
    let removed = outcome.ledger.delete(1).unwrap();
    assert_eq!(removed.len(), 2);
    store.save(&mut outcome.ledger, &mut outcome.ids).unwrap();

    let reloaded = store.load().unwrap();
    assert_bodies(&reloaded.ledger, &["other"]);
}

#[test]
fn recurrence_conflict_rejects_batch_atomically() {
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![
        appointment("2024/01/10 9:00~2024/01/10 10:00 weekly sync"),
        appointment("2024/02/10 9:30~2024/02/10 11:00 offsite"),
    ]);
    let request = RecurrenceRequest::new(RecurrenceUnit::Month, 6).unwrap();

    let err = ledger.repeat(1, request, &mut ids).unwrap_err();

    match err {
        Error::Overlap { conflicts } => {
            assert_eq!(conflicts.len(), 1);
            assert_eq!(conflicts[0].body().as_str(), "offsite");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(ledger.len(), 2);
    assert!(!ledger.get(1).unwrap().in_group());
}

#[test]
fn recurrence_of_overlapping_base_ignores_conflicts() {
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![
        appointment("2024/01/10 9:00~2024/01/10 10:00 flexible").with_allow_overlap(true),
        appointment("2024/02/10 9:30~2024/02/10 11:00 offsite"),
    ]);
    let request = RecurrenceRequest::new(RecurrenceUnit::Month, 2).unwrap();

    let added = ledger.repeat(1, request, &mut ids).unwrap();

    assert_eq!(added.len(), 2);
    assert!(added.iter().all(|a| a.allow_overlap()));
}
