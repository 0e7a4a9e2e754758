// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use crate::datetime::util::trim_blank;
use crate::{Date, Error, Instant, Time};

/// A closed span of time, `<start>~<end>`, whose start is strictly before its end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Interval {
    start: Instant,
    end: Instant,
}

impl Interval {
    /// Creates an interval, rejecting empty and reversed spans.
    pub fn new(start: Instant, end: Instant) -> Result<Self, Error> {
        if start < end {
            Ok(Self { start, end })
        } else {
            Err(Error::Order {
                input: format!("{start}~{end}"),
            })
        }
    }

    /// From the first minute of `first` to the last minute of `last`.
    pub(crate) fn whole_days(first: Date, last: Date) -> Self {
        debug_assert!(first <= last);
        Self {
            start: Instant::new(first, Time::START_OF_DAY),
            end: Instant::new(last, Time::END_OF_DAY),
        }
    }

    pub const fn start(&self) -> Instant {
        self.start
    }

    pub const fn end(&self) -> Instant {
        self.end
    }

    /// The same times of day on other dates.
    pub fn with_dates(&self, start: Date, end: Date) -> Result<Self, Error> {
        Self::new(self.start.with_date(start), self.end.with_date(end))
    }

    /// Whether two intervals share at least one instant.
    ///
    /// Both ends are inclusive, so an interval ending at 10:00 overlaps one
    /// starting at 10:00.
    pub fn overlaps(&self, other: &Interval) -> bool {
        let (first, second) = if self.start <= other.start {
            (self, other)
        } else {
            (other, self)
        };
        first.start == second.start || first.end >= second.start
    }
}

impl FromStr for Interval {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = trim_blank(s);
        let Some((start, end)) = s.split_once('~') else {
            return Err(Error::Format {
                what: "interval",
                expected: "a start and an end joined by '~', such as 2024/03/05 9:00~2024/03/05 10:00",
                input: s.to_string(),
            });
        };

        let (start, end): (Instant, Instant) = (start.parse()?, end.parse()?);
        Self::new(start, end).map_err(|_| Error::Order {
            input: s.to_string(),
        })
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}~{}", self.start, self.end)
    }
}
