// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{fmt, str::FromStr, sync::OnceLock};

use jiff::civil;
use regex::Regex;

use crate::datetime::util::{DATE_SEPARATORS, DAY_MARKER, MONTH_MARKER, YEAR_MARKER, trim_blank};
use crate::{Day, Error, Month, Year};

/// A day of the proleptic Gregorian calendar.
///
/// Accepted forms, tried in order:
/// - `2024/3/5`, `2024-03-05` or any mix of `-` and `/`;
/// - `2024년3월5일`, without any blanks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date {
    year: Year,
    month: Month,
    day: Day,
}

impl Date {
    /// Creates a date, checking that the day exists in that month.
    pub fn new(year: Year, month: Month, day: Day) -> Result<Self, Error> {
        match civil::Date::new(year.get() as i16, month.get() as i8, day.get() as i8) {
            Ok(_) => Ok(Self { year, month, day }),
            Err(_) => Err(Error::Calendar {
                year: year.get(),
                month: month.get(),
                day: day.get(),
            }),
        }
    }

    /// Creates a date from plain integers.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self, Error> {
        Self::new(Year::new(year)?, Month::new(month)?, Day::new(day)?)
    }

    /// The first day of the given month.
    pub fn first_of_month(year: Year, month: Month) -> Self {
        Self {
            year,
            month,
            day: Day::MIN,
        }
    }

    /// The last day of the given month, leap years included.
    pub fn last_of_month(year: Year, month: Month) -> Self {
        let days = Self::first_of_month(year, month).civil().days_in_month();
        Self {
            year,
            month,
            day: Day::from_valid(days as u8),
        }
    }

    pub fn year(&self) -> Year {
        self.year
    }

    pub fn month(&self) -> Month {
        self.month
    }

    pub fn day(&self) -> Day {
        self.day
    }

    /// Converts to `jiff::civil::Date`.
    pub fn civil(&self) -> civil::Date {
        civil::date(
            self.year.get() as i16,
            self.month.get() as i8,
            self.day.get() as i8,
        )
    }
}

impl FromStr for Date {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        type Rule = fn(&str) -> Option<Result<(Year, Month, Day), Error>>;
        const RULES: [Rule; 2] = [separated, unit_marked];

        let s = trim_blank(s);
        let (year, month, day) = RULES
            .iter()
            .find_map(|rule| rule(s))
            .unwrap_or_else(|| {
                Err(Error::Format {
                    what: "date",
                    expected: "a date needs a separator (-, /) or all of the 년, 월, 일 markers",
                    input: s.to_string(),
                })
            })?;

        Self::new(year, month, day)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.year, self.month, self.day)
    }
}

/// `<year><sep><month><sep><day>` where `<sep>` is `-` or `/`.
fn separated(s: &str) -> Option<Result<(Year, Month, Day), Error>> {
    if !s.contains(DATE_SEPARATORS) {
        return None;
    }

    let parts: Vec<&str> = s.split(DATE_SEPARATORS).collect();
    Some(match parts.as_slice() {
        [year, month, day] => triple(year, month, day),
        _ => Err(Error::Format {
            what: "date",
            expected: "a date with separators has exactly three parts: year, month and day",
            input: s.to_string(),
        }),
    })
}

/// `<year>년<month>월<day>일`, no blanks allowed.
fn unit_marked(s: &str) -> Option<Result<(Year, Month, Day), Error>> {
    if !(s.contains(YEAR_MARKER) && s.contains(MONTH_MARKER) && s.contains(DAY_MARKER)) {
        return None;
    }

    const RE: &str = r"^([0-9]{1,4})년([0-9]{1,2})월([0-9]{1,2})일$";
    static REGEX: OnceLock<Regex> = OnceLock::new();
    let re = REGEX.get_or_init(|| Regex::new(RE).unwrap());
    Some(match re.captures(s) {
        Some(captures) => triple(&captures[1], &captures[2], &captures[3]),
        None => Err(Error::Format {
            what: "date",
            expected: "without separators, year, month and day are written in order as 2024년3월5일",
            input: s.to_string(),
        }),
    })
}

fn triple(year: &str, month: &str, day: &str) -> Result<(Year, Month, Day), Error> {
    Ok((year.parse()?, month.parse()?, day.parse()?))
}
