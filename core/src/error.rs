// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io;

use crate::Appointment;

/// Errors produced by the ledger core.
///
/// Every variant except [`Error::Io`] is recoverable: the caller reports it and
/// leaves the in-memory collection untouched.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The input does not have the expected lexical shape.
    #[error("Invalid {what}: {expected} (input: {input:?})")]
    Format {
        /// The kind of value being parsed
        what: &'static str,
        /// Description of the accepted shapes
        expected: &'static str,
        /// The offending input
        input: String,
    },

    /// A numeric value falls outside the bounds of its scalar.
    #[error("{what} must be between {min} and {max}, got {value}")]
    Range {
        /// The kind of value being parsed
        what: &'static str,
        /// The parsed value
        value: u32,
        /// Inclusive lower bound
        min: u32,
        /// Inclusive upper bound
        max: u32,
    },

    /// Syntactically valid, but not a day of the Gregorian calendar.
    #[error("{year:04}/{month:02}/{day:02} is not a date of the Gregorian calendar")]
    Calendar {
        /// Year component
        year: u16,
        /// Month component
        month: u8,
        /// Day component
        day: u8,
    },

    /// The end of an interval is not after its start.
    #[error("The start of an interval must be earlier than its end (input: {input:?})")]
    Order {
        /// The offending input
        input: String,
    },

    /// The appointment collides with already stored appointments.
    #[error("Overlaps with {} existing appointment(s)", .conflicts.len())]
    Overlap {
        /// The colliding records, as they were stored
        conflicts: Vec<Appointment>,
    },

    /// Invalid recurrence unit or count, or a recurrence that cannot apply.
    #[error("Invalid recurrence: {0}")]
    Recurrence(String),

    /// A persisted line could not be decoded.
    #[error("Malformed record at line {line}: {reason}")]
    StoreRecord {
        /// 1-based line number in the store file
        line: usize,
        /// Why the line was rejected
        reason: String,
    },

    /// No appointment carries the given display number.
    #[error("No appointment is numbered {0}")]
    NotFound(usize),

    /// Reading or writing the store failed.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
