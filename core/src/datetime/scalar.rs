// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Bounded scalar components of dates and times.

use std::{fmt, str::FromStr};

use crate::Error;
use crate::datetime::util::{
    DAY_MARKER, HOUR_MARKER, MINUTE_MARKER, MONTH_MARKER, YEAR_MARKER, is_digits, strip_marker,
    trim_blank,
};

macro_rules! scalar {
    (
        $(#[$meta:meta])*
        $name:ident($repr:ty) {
            what: $what:literal,
            marker: $marker:expr,
            digits: $digits:literal,
            range: $min:literal..=$max:literal,
            width: $width:literal,
            expected: $expected:literal $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($repr);

        impl $name {
            /// The smallest accepted value.
            pub const MIN: Self = Self($min);

            /// The largest accepted value.
            pub const MAX: Self = Self($max);

            /// Creates the value, checking its bounds.
            pub fn new(value: $repr) -> Result<Self, Error> {
                Self::checked(u32::from(value))
            }

            /// The wrapped integer.
            pub const fn get(self) -> $repr {
                self.0
            }

            fn checked(value: u32) -> Result<Self, Error> {
                if ($min..=$max).contains(&value) {
                    Ok(Self(value as $repr))
                } else {
                    Err(Error::Range {
                        what: $what,
                        value,
                        min: $min,
                        max: $max,
                    })
                }
            }
        }

        impl FromStr for $name {
            type Err = Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let digits = strip_marker(trim_blank(s), $marker);
                let format_error = || Error::Format {
                    what: $what,
                    expected: $expected,
                    input: s.to_string(),
                };

                if !is_digits(digits, $digits) {
                    return Err(format_error());
                }
                let value: u32 = digits.parse().map_err(|_| format_error())?;
                Self::checked(value)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:0width$}", self.0, width = $width)
            }
        }
    };
}

scalar! {
    /// Calendar year, 1 to 9999.
    Year(u16) {
        what: "year",
        marker: YEAR_MARKER,
        digits: 4,
        range: 1..=9999,
        width: 4,
        expected: "a year is 1 to 4 digits, optionally followed by '년'",
    }
}

scalar! {
    /// Month of the year, 1 to 12.
    Month(u8) {
        what: "month",
        marker: MONTH_MARKER,
        digits: 2,
        range: 1..=12,
        width: 2,
        expected: "a month is 1 or 2 digits, optionally followed by '월'",
    }
}

scalar! {
    /// Day of the month, 1 to 31.
    ///
    /// Whether the day exists in a given month is checked by [`crate::Date`].
    Day(u8) {
        what: "day",
        marker: DAY_MARKER,
        digits: 2,
        range: 1..=31,
        width: 2,
        expected: "a day is 1 or 2 digits, optionally followed by '일'",
    }
}

impl Day {
    /// Wraps a day count taken from the calendar, always within `1..=31`.
    pub(crate) fn from_valid(value: u8) -> Self {
        debug_assert!((1..=31).contains(&value));
        Self(value)
    }
}

scalar! {
    /// Hour of the day, 0 to 23.
    Hour(u8) {
        what: "hour",
        marker: HOUR_MARKER,
        digits: 2,
        range: 0..=23,
        width: 2,
        expected: "an hour is 1 or 2 digits, optionally followed by '시'",
    }
}

scalar! {
    /// Minute of the hour, 0 to 59.
    Minute(u8) {
        what: "minute",
        marker: MINUTE_MARKER,
        digits: 2,
        range: 0..=59,
        width: 2,
        expected: "a minute is 1 or 2 digits, optionally followed by '분'",
    }
}
