// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;

use crate::datetime::util::{HOUR_MARKER, MINUTE_MARKER, is_digits, trim_blank};
use crate::{Error, Hour, Minute};

/// A time of day with minute precision.
///
/// Accepted forms, tried in order: `9:30`, `9시30분`, `9시`, `930` / `0930`,
/// and finally a bare hour such as `9`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time {
    hour: Hour,
    minute: Minute,
}

impl Time {
    /// Midnight, the first minute of a day.
    pub const START_OF_DAY: Self = Self::new(Hour::MIN, Minute::MIN);

    /// 23:59, the last minute of a day.
    pub const END_OF_DAY: Self = Self::new(Hour::MAX, Minute::MAX);

    pub const fn new(hour: Hour, minute: Minute) -> Self {
        Self { hour, minute }
    }

    /// Creates a time from plain integers.
    pub fn from_hm(hour: u8, minute: u8) -> Result<Self, Error> {
        Ok(Self::new(Hour::new(hour)?, Minute::new(minute)?))
    }

    pub const fn hour(&self) -> Hour {
        self.hour
    }

    pub const fn minute(&self) -> Minute {
        self.minute
    }
}

impl FromStr for Time {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type Rule = fn(&str) -> Option<Result<Time, Error>>;
        const RULES: [Rule; 4] = [colon, hour_minute_marked, hour_marked, digit_block];

        let s = trim_blank(s);
        RULES
            .iter()
            .find_map(|rule| rule(s))
            .unwrap_or_else(|| Ok(Self::new(s.parse()?, Minute::MIN)))
    }
}

impl fmt::Display for Time {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.hour, self.minute)
    }
}

fn parts(hour: &str, minute: &str) -> Result<Time, Error> {
    Ok(Time::new(hour.parse()?, minute.parse()?))
}

/// `H:M`
fn colon(s: &str) -> Option<Result<Time, Error>> {
    s.split_once(':').map(|(hour, minute)| parts(hour, minute))
}

/// `H시M분`
fn hour_minute_marked(s: &str) -> Option<Result<Time, Error>> {
    if !(s.contains(HOUR_MARKER) && s.contains(MINUTE_MARKER)) {
        return None;
    }

    const RE: &str = r"^([0-9]{1,2})시([0-9]{1,2})분$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    Some(match re.captures(s) {
        Some(captures) => parts(&captures[1], &captures[2]),
        None => Err(Error::Format {
            what: "time",
            expected: "with both markers, a time is written as 9시30분",
            input: s.to_string(),
        }),
    })
}

/// `H시`, on the hour.
fn hour_marked(s: &str) -> Option<Result<Time, Error>> {
    if !s.contains(HOUR_MARKER) {
        return None;
    }

    const RE: &str = r"^([0-9]{1,2})시$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    Some(match re.captures(s) {
        Some(captures) => parts(&captures[1], "0"),
        None => Err(Error::Format {
            what: "time",
            expected: "with the hour marker only, a time is written as 9시",
            input: s.to_string(),
        }),
    })
}

/// `HMM` or `HHMM`, the last two digits being the minute.
fn digit_block(s: &str) -> Option<Result<Time, Error>> {
    if s.len() < 3 || !is_digits(s, 4) {
        return None;
    }

    let (hour, minute) = s.split_at(s.len() - 2);
    Some(parts(hour, minute))
}
