// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr};

use jiff::civil;

use crate::datetime::util::trim_blank;
use crate::{Date, Error, Time};

/// A point in local wall-clock time, `<date> <time>`.
///
/// Instants order chronologically: by date first, then by time of day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Instant {
    date: Date,
    time: Time,
}

impl Instant {
    pub const fn new(date: Date, time: Time) -> Self {
        Self { date, time }
    }

    pub const fn date(&self) -> Date {
        self.date
    }

    pub const fn time(&self) -> Time {
        self.time
    }

    /// The same time of day on another date.
    pub const fn with_date(&self, date: Date) -> Self {
        Self::new(date, self.time)
    }

    /// Converts to `jiff::civil::DateTime`.
    pub fn civil(&self) -> civil::DateTime {
        self.date.civil().at(
            self.time.hour().get() as i8,
            self.time.minute().get() as i8,
            0,
            0,
        )
    }
}

impl FromStr for Instant {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = trim_blank(s);
        let Some((date, time)) = s.split_once(' ') else {
            return Err(Error::Format {
                what: "date and time",
                expected: "a date and a time separated by one space, such as 2024/03/05 9:30",
                input: s.to_string(),
            });
        };
        Ok(Self::new(date.parse()?, time.parse()?))
    }
}

impl fmt::Display for Instant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.date, self.time)
    }
}
