// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Custom assertion helpers for integration tests.

use agenda_core::Ledger;

/// Asserts the bodies of the ledger's appointments, in display order.
///
/// # Panics
///
/// Panics if the bodies differ from `expected`.
pub fn assert_bodies(ledger: &Ledger, expected: &[&str]) {
    let bodies: Vec<&str> = ledger
        .appointments()
        .iter()
        .map(|a| a.body().as_str())
        .collect();
    assert_eq!(bodies, expected, "Body order mismatch");
}

/// Asserts that display numbers run from 1 without gaps.
///
/// # Panics
///
/// Panics on the first appointment whose number is off.
pub fn assert_numbered(ledger: &Ledger) {
    for (i, appointment) in ledger.appointments().iter().enumerate() {
        assert_eq!(
            appointment.display_number(),
            i + 1,
            "Display number mismatch for {appointment}"
        );
    }
}
