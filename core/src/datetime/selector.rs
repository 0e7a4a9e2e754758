// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use regex::Regex;

use crate::datetime::util::{DATE_SEPARATORS, DAY_MARKER, MONTH_MARKER, YEAR_MARKER, trim_blank};
use crate::{Date, Error, Interval, Month, Year};

/// A coarse period used for searching: a whole day, month or year.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selector {
    Day(Date),
    Month(Year, Month),
    Year(Year),
}

impl Selector {
    /// The period as an interval from its first to its last minute.
    pub fn interval(&self) -> Interval {
        match *self {
            Selector::Day(date) => Interval::whole_days(date, date),
            Selector::Month(year, month) => Interval::whole_days(
                Date::first_of_month(year, month),
                Date::last_of_month(year, month),
            ),
            Selector::Year(year) => Interval::whole_days(
                Date::first_of_month(year, Month::MIN),
                Date::last_of_month(year, Month::MAX),
            ),
        }
    }
}

impl FromStr for Selector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type Rule = fn(&str) -> Option<Result<Selector, Error>>;
        const RULES: [Rule; 3] = [day, month, year];

        let s = trim_blank(s);
        RULES.iter().find_map(|rule| rule(s)).unwrap_or_else(|| {
            Err(Error::Format {
                what: "period",
                expected: "a period is a year (2024), a month (2024/03, 2024년3월) or a date",
                input: s.to_string(),
            })
        })
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::Day(date) => write!(f, "{date}"),
            Selector::Month(year, month) => write!(f, "{year}/{month}"),
            Selector::Year(year) => write!(f, "{year}"),
        }
    }
}

fn day(s: &str) -> Option<Result<Selector, Error>> {
    let all_markers = s.contains(YEAR_MARKER) && s.contains(MONTH_MARKER) && s.contains(DAY_MARKER);
    if s.split(DATE_SEPARATORS).count() == 3 || all_markers {
        Some(s.parse().map(Selector::Day))
    } else {
        None
    }
}

fn month(s: &str) -> Option<Result<Selector, Error>> {
    let parts: Vec<&str> = s.split(DATE_SEPARATORS).collect();
    if let [year, month] = parts.as_slice() {
        return Some(year_month(year, month));
    }
    if !(s.contains(YEAR_MARKER) && s.contains(MONTH_MARKER)) {
        return None;
    }

    const RE: &str = r"^([0-9]{1,4})년([0-9]{1,2})월$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    Some(match re.captures(s) {
        Some(captures) => year_month(&captures[1], &captures[2]),
        None => Err(Error::Format {
            what: "period",
            expected: "a month is written as 2024년3월",
            input: s.to_string(),
        }),
    })
}

fn year(s: &str) -> Option<Result<Selector, Error>> {
    if s.contains(DATE_SEPARATORS) || s.contains(MONTH_MARKER) {
        return None;
    }
    Some(s.parse().map(Selector::Year))
}

fn year_month(year: &str, month: &str) -> Result<Selector, Error> {
    Ok(Selector::Month(year.parse()?, month.parse()?))
}
