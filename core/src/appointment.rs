// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::datetime::util::{split_blank_once, trim_blank};
use crate::{Error, IdAllocator, Instant, Interval, RecurrenceRequest};

/// Free text attached to an appointment. Single line, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Body(String);

impl Body {
    pub fn new(text: impl Into<String>) -> Result<Self, Error> {
        let text = text.into();
        if text.contains(['\n', '\r']) {
            return Err(Error::Format {
                what: "body",
                expected: "a body must fit on one line",
                input: text,
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromStr for Body {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(trim_blank(s))
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A scheduled appointment.
///
/// Parsed from `<date> <time>~<date> <time> [body]`, for example
/// `2024/03/05 9:00~2024/03/05 10:00 dentist`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Appointment {
    id: u64,
    group_id: u64,
    recurrence: Option<RecurrenceRequest>,
    allow_overlap: bool,
    interval: Interval,
    body: Body,
    display_number: usize,
}

impl Appointment {
    pub fn new(interval: Interval, body: Body) -> Self {
        Self {
            id: 0,
            group_id: 0,
            recurrence: None,
            allow_overlap: false,
            interval,
            body,
            display_number: 0,
        }
    }

    /// Rebuilds an appointment from its persisted fields.
    pub(crate) fn restore(
        id: u64,
        group_id: u64,
        recurrence: Option<RecurrenceRequest>,
        allow_overlap: bool,
        interval: Interval,
        body: Body,
    ) -> Self {
        Self {
            id,
            group_id,
            recurrence,
            allow_overlap,
            interval,
            body,
            display_number: 0,
        }
    }

    /// Marks the appointment as allowed to overlap others.
    pub fn with_allow_overlap(mut self, allow_overlap: bool) -> Self {
        self.allow_overlap = allow_overlap;
        self
    }

    /// Persistent identifier, 0 until first saved.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Identifier of the recurrence base, 0 outside any group.
    pub fn group_id(&self) -> u64 {
        self.group_id
    }

    /// The recurrence this appointment heads, if it is a base.
    pub fn recurrence(&self) -> Option<RecurrenceRequest> {
        self.recurrence
    }

    pub fn allow_overlap(&self) -> bool {
        self.allow_overlap
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn body(&self) -> &Body {
        &self.body
    }

    /// 1-based rank in the sorted collection. Never persisted.
    pub fn display_number(&self) -> usize {
        self.display_number
    }

    pub fn in_group(&self) -> bool {
        self.group_id != 0
    }

    pub fn is_recurrence_base(&self) -> bool {
        self.in_group() && self.group_id == self.id
    }

    pub fn is_recurrence_member(&self) -> bool {
        self.in_group() && self.group_id != self.id
    }

    /// Whether the two appointments may not both be kept.
    ///
    /// An appointment that allows overlap never conflicts.
    pub fn is_conflict(&self, other: &Appointment) -> bool {
        !self.allow_overlap && !other.allow_overlap && self.interval.overlaps(&other.interval)
    }

    /// Collection order: start, then end, then identifier.
    pub fn sort_key(&self) -> (Instant, Instant, u64) {
        (self.interval.start(), self.interval.end(), self.id)
    }

    pub(crate) fn set_interval(&mut self, interval: Interval) {
        self.interval = interval;
    }

    pub(crate) fn set_body(&mut self, body: Body) {
        self.body = body;
    }

    pub(crate) fn set_display_number(&mut self, display_number: usize) {
        self.display_number = display_number;
    }

    /// Assigns an identifier if there is none yet.
    pub(crate) fn ensure_id(&mut self, ids: &mut IdAllocator) -> u64 {
        if self.id == 0 {
            self.id = ids.next_id();
        }
        self.id
    }

    pub(crate) fn start_group(&mut self, recurrence: RecurrenceRequest) {
        self.group_id = self.id;
        self.recurrence = Some(recurrence);
    }

    /// A new member of this appointment's group at another interval.
    pub(crate) fn derive_occurrence(&self, interval: Interval) -> Self {
        Self {
            id: 0,
            group_id: self.id,
            recurrence: None,
            allow_overlap: self.allow_overlap,
            interval,
            body: self.body.clone(),
            display_number: 0,
        }
    }
}

impl FromStr for Appointment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = trim_blank(s);
        let format_error = || Error::Format {
            what: "appointment",
            expected: "an appointment starts with <date> <time>~<date> <time>",
            input: s.to_string(),
        };

        let (date, rest) = split_blank_once(s).ok_or_else(format_error)?;
        let (middle, rest) = split_blank_once(rest).ok_or_else(format_error)?;
        let (time, body) = split_blank_once(rest).unwrap_or((rest, ""));
        if time.is_empty() {
            return Err(format_error());
        }

        let interval = format!("{date} {middle} {time}").parse()?;
        Ok(Self::new(interval, body.parse()?))
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.allow_overlap { '*' } else { '-' };
        write!(f, "{} {} {}", self.display_number, marker, self.interval)?;
        if !self.body.is_empty() {
            write!(f, " \t {}", self.body)?;
        }
        Ok(())
    }
}
