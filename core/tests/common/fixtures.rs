// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Test data factories for integration tests.
//!
//! This module provides helper functions to create configurations,
//! appointments and raw store records.

use std::path::Path;

use agenda_core::{Appointment, Config};

/// Creates a test configuration pointing at the given store file.
#[must_use]
pub fn test_config(store_path: &Path) -> Config {
    Config {
        store_path: store_path.to_path_buf(),
    }
}

/// Parses an appointment entry, panicking on invalid input.
///
/// # Example
///
/// ```ignore
/// let a = appointment("2024/03/05 9:00~2024/03/05 10:00 dentist");
/// ```
#[must_use]
pub fn appointment(entry: &str) -> Appointment {
    entry
        .parse()
        .unwrap_or_else(|e| panic!("invalid fixture {entry:?}: {e}"))
}

/// Builds raw store lines field by field.
#[derive(Debug, Clone)]
pub struct RecordBuilder {
    allow_overlap: bool,
    id: u64,
    group_id: u64,
    recurrence: Option<(&'static str, u32)>,
    start: [u32; 5],
    end: [u32; 5],
    body: String,
}

impl RecordBuilder {
    /// A one-hour record on 2024/03/05 from 09:00.
    pub fn new(id: u64) -> Self {
        Self {
            allow_overlap: false,
            id,
            group_id: 0,
            recurrence: None,
            start: [2024, 3, 5, 9, 0],
            end: [2024, 3, 5, 10, 0],
            body: String::new(),
        }
    }

    #[allow(dead_code)]
    pub fn allow_overlap(mut self) -> Self {
        self.allow_overlap = true;
        self
    }

    #[allow(dead_code)]
    pub fn group(mut self, group_id: u64) -> Self {
        self.group_id = group_id;
        self
    }

    #[allow(dead_code)]
    pub fn recurrence(mut self, unit: &'static str, count: u32) -> Self {
        self.recurrence = Some((unit, count));
        self
    }

    pub fn span(mut self, start: [u32; 5], end: [u32; 5]) -> Self {
        self.start = start;
        self.end = end;
        self
    }

    pub fn body(mut self, body: &str) -> Self {
        self.body = body.to_string();
        self
    }

    /// The record line, without a line break.
    pub fn line(&self) -> String {
        let (unit, count) = self.recurrence.unwrap_or(("-", 0));
        let join = |v: &[u32; 5]| v.map(|n| n.to_string()).join("\t");
        format!(
            "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
            u8::from(self.allow_overlap),
            self.id,
            self.group_id,
            unit,
            count,
            join(&self.start),
            join(&self.end),
            self.body
        )
    }
}
