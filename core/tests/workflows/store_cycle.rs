// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Store load/save workflow tests.

use agenda_core::{Body, Error, IdAllocator, Ledger};

use crate::common::{RecordBuilder, appointment, assert_bodies, assert_numbered, setup_temp_store};

#[test]
fn store_missing_file_loads_empty() {
    // Arrange
    let temp = setup_temp_store().unwrap();

    // Act
    let outcome = temp.store().load().unwrap();

    // Assert
    assert!(outcome.ledger.is_empty());
    assert!(outcome.rejected.is_empty());
    assert_eq!(outcome.ids, IdAllocator::new());
}

#[test]
fn store_prepare_creates_the_file_once() {
    let temp = setup_temp_store().unwrap();
    let store = temp.store();

    assert!(store.prepare().unwrap());
    assert!(temp.store_path.exists());
    assert!(!store.prepare().unwrap());
    assert_eq!(temp.read().unwrap(), "");
}

#[test]
fn store_round_trip_preserves_appointments() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let store = temp.store();
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::default();
    ledger
        .add(appointment("2024/03/06 9:00~2024/03/06 10:00 later"))
        .unwrap();
    ledger
        .add(appointment("2024/03/05 9:00~2024/03/05 10:00 tab\tinside").with_allow_overlap(true))
        .unwrap();
    ledger
        .add(appointment("2024/03/07 23:00~2024/03/08 1:00"))
        .unwrap();

    // Act
    store.save(&mut ledger, &mut ids).unwrap();
    let outcome = store.load().unwrap();

    // Assert
    assert!(outcome.rejected.is_empty());
    assert_eq!(outcome.ids.last(), 3);
    assert_bodies(&outcome.ledger, &["tab\tinside", "later", ""]);
    assert_numbered(&outcome.ledger);
    for (saved, loaded) in ledger.appointments().iter().zip(outcome.ledger.appointments()) {
        assert_eq!(saved.interval(), loaded.interval());
        assert_eq!(saved.body(), loaded.body());
        assert_eq!(saved.allow_overlap(), loaded.allow_overlap());
        assert_eq!(saved.recurrence(), loaded.recurrence());
        assert_eq!(saved.id(), loaded.id());
    }
    assert!(temp.read().unwrap().ends_with('\n'));
}

#[test]
fn store_assigns_ids_after_the_largest_stored() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let lines = [
        RecordBuilder::new(4).body("four").line(),
        RecordBuilder::new(9)
            .span([2024, 3, 6, 9, 0], [2024, 3, 6, 10, 0])
            .body("nine")
            .line(),
    ];
    temp.write(&format!("{}\n\n{}\n", lines[0], lines[1])).unwrap();
    let store = temp.store();

    // Act
    let mut outcome = store.load().unwrap();
    outcome
        .ledger
        .add(appointment("2024/03/07 9:00~2024/03/07 10:00 new"))
        .unwrap();
    store.save(&mut outcome.ledger, &mut outcome.ids).unwrap();

    // Assert
    let reloaded = store.load().unwrap();
    let ids: Vec<u64> = reloaded.ledger.appointments().iter().map(|a| a.id()).collect();
    assert_eq!(ids, [4, 9, 10]);
    assert_eq!(reloaded.ids.last(), 10);
}

#[test]
fn store_skips_malformed_lines_and_reports_them() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let good = RecordBuilder::new(1).body("ok").line();
    let bad_date = RecordBuilder::new(2)
        .span([2024, 2, 30, 9, 0], [2024, 3, 1, 10, 0])
        .line();
    temp.write(&format!("{good}\nnot a record\n{bad_date}\n"))
        .unwrap();

    // Act
    let outcome = temp.store().load().unwrap();

    // Assert
    assert_bodies(&outcome.ledger, &["ok"]);
    let lines: Vec<usize> = outcome
        .rejected
        .iter()
        .map(|e| match e {
            Error::StoreRecord { line, .. } => *line,
            other => panic!("unexpected error: {other}"),
        })
        .collect();
    assert_eq!(lines, [2, 3]);
    // Rejected identifiers are not observed.
    assert_eq!(outcome.ids.last(), 1);
}

#[test]
fn store_edit_cycle_changes_body_and_deletes() {
    // Arrange
    let temp = setup_temp_store().unwrap();
    let store = temp.store();
    let mut ids = IdAllocator::new();
    let mut ledger = Ledger::new(vec![
        appointment("2024/03/05 9:00~2024/03/05 10:00 a"),
        appointment("2024/03/06 9:00~2024/03/06 10:00 b"),
    ]);
    store.save(&mut ledger, &mut ids).unwrap();

    // Act: one reload per command, as the session does
    let mut outcome = store.load().unwrap();
    outcome
        .ledger
        .change_body(2, Body::new("renamed").unwrap())
        .unwrap();
    store.save(&mut outcome.ledger, &mut outcome.ids).unwrap();

    let mut outcome = store.load().unwrap();
    outcome.ledger.delete(1).unwrap();
    store.save(&mut outcome.ledger, &mut outcome.ids).unwrap();

    // Assert
    let outcome = store.load().unwrap();
    assert_bodies(&outcome.ledger, &["renamed"]);
    assert_eq!(outcome.ledger.get(1).unwrap().id(), 2);
}
