// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::datetime::util::trim_blank;
use crate::{Appointment, Date, Error, IdAllocator, Interval, Year};

/// The step between two occurrences of a recurring appointment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecurrenceUnit {
    Month,
    Year,
}

impl RecurrenceUnit {
    /// The persisted spelling of the unit.
    pub const fn as_str(&self) -> &'static str {
        match self {
            RecurrenceUnit::Month => "MONTH",
            RecurrenceUnit::Year => "YEAR",
        }
    }

    /// Number of months advanced per occurrence.
    pub const fn step(&self) -> u32 {
        match self {
            RecurrenceUnit::Month => 1,
            RecurrenceUnit::Year => 12,
        }
    }
}

impl FromStr for RecurrenceUnit {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match trim_blank(s) {
            "MONTH" | "month" | "m" | "월" | "개월" => Ok(RecurrenceUnit::Month),
            "YEAR" | "year" | "y" | "년" => Ok(RecurrenceUnit::Year),
            other => Err(Error::Recurrence(format!(
                "unknown unit {other:?}, expected month (m, 월, 개월) or year (y, 년)"
            ))),
        }
    }
}

impl fmt::Display for RecurrenceUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Repeat an appointment `count` times, one `unit` apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RecurrenceRequest {
    unit: RecurrenceUnit,
    count: u32,
}

impl RecurrenceRequest {
    pub const MAX_COUNT: u32 = 999_999;

    pub fn new(unit: RecurrenceUnit, count: u32) -> Result<Self, Error> {
        if (1..=Self::MAX_COUNT).contains(&count) {
            Ok(Self { unit, count })
        } else {
            Err(Error::Recurrence(format!(
                "count must be between 1 and {}, got {count}",
                Self::MAX_COUNT
            )))
        }
    }

    /// Parses the unit and count given as separate words.
    pub fn parse(unit: &str, count: &str) -> Result<Self, Error> {
        let unit = unit.parse()?;
        let count = trim_blank(count);
        let count = count
            .parse()
            .map_err(|_| Error::Recurrence(format!("count must be a whole number, got {count:?}")))?;
        Self::new(unit, count)
    }

    pub const fn unit(&self) -> RecurrenceUnit {
        self.unit
    }

    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether the first occurrence would start strictly after `interval` ends.
    ///
    /// Only the start is stepped; its time of day is kept and the result is
    /// compared with the unshifted end. Calendar validity is not checked here.
    pub fn can_repeat(&self, interval: &Interval) -> bool {
        let (year, month, day) = advance_date(ymd(interval.start().date()), self.unit.step());
        let start = interval.start().time();
        let end = interval.end();
        let stepped = (
            year,
            month,
            u32::from(day),
            u32::from(start.hour().get()),
            u32::from(start.minute().get()),
        );
        let end = (
            u32::from(end.date().year().get()),
            u32::from(end.date().month().get()),
            u32::from(end.date().day().get()),
            u32::from(end.time().hour().get()),
            u32::from(end.time().minute().get()),
        );
        stepped > end
    }

    /// Materializes the occurrences following `base`.
    ///
    /// The base receives an identifier if it has none, and is stamped as the
    /// head of its group when at least one occurrence is produced. Steps that
    /// land on a day missing from the month are skipped but still count.
    /// Generation stops once the year would pass 9999.
    pub fn repeat_schedules(&self, base: &mut Appointment, ids: &mut IdAllocator) -> Vec<Appointment> {
        if !self.can_repeat(base.interval()) {
            return Vec::new();
        }
        base.ensure_id(ids);

        let step = self.unit.step();
        let interval = *base.interval();
        let mut start = ymd(interval.start().date());
        let mut end = ymd(interval.end().date());
        let mut occurrences = Vec::new();
        for _ in 0..self.count {
            start = advance_date(start, step);
            end = advance_date(end, step);
            if end.0 > u32::from(Year::MAX.get()) {
                tracing::debug!(year = end.0, "recurrence passed the last supported year");
                break;
            }

            let (Some(start_date), Some(end_date)) = (to_date(start), to_date(end)) else {
                tracing::debug!(?start, ?end, "skipping occurrence on a missing day");
                continue;
            };
            match interval.with_dates(start_date, end_date) {
                Ok(interval) => occurrences.push(base.derive_occurrence(interval)),
                Err(err) => tracing::debug!(%err, "skipping occurrence"),
            }
        }

        if !occurrences.is_empty() {
            base.start_group(*self);
        }
        occurrences
    }
}

impl fmt::Display for RecurrenceRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} x{}", self.unit, self.count)
    }
}

/// Advances `(year, month, day)` by `step` months, leaving the day untouched.
pub fn advance_date((year, month, day): (u32, u32, u8), step: u32) -> (u32, u32, u8) {
    let mut year = year;
    let mut month = month + step;
    while month > 12 {
        month -= 12;
        year += 1;
    }
    (year, month, day)
}

fn ymd(date: Date) -> (u32, u32, u8) {
    (
        u32::from(date.year().get()),
        u32::from(date.month().get()),
        date.day().get(),
    )
}

fn to_date((year, month, day): (u32, u32, u8)) -> Option<Date> {
    let year = u16::try_from(year).ok()?;
    let month = u8::try_from(month).ok()?;
    Date::from_ymd(year, month, day).ok()
}
