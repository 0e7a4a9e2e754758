// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

pub const YEAR_MARKER: char = '년';
pub const MONTH_MARKER: char = '월';
pub const DAY_MARKER: char = '일';
pub const HOUR_MARKER: char = '시';
pub const MINUTE_MARKER: char = '분';

/// Separators accepted between the components of a date.
pub const DATE_SEPARATORS: [char; 2] = ['-', '/'];

/// Blank characters, excluding line breaks.
///
/// NOTE: line breaks must survive trimming so that multi-line input can still
/// be detected and rejected when a body is built.
pub const fn is_blank(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\x0b' | '\x0c')
}

/// Trims leading and trailing blanks, keeping line breaks.
pub fn trim_blank(s: &str) -> &str {
    s.trim_matches(is_blank)
}

/// Splits once on the first run of blanks.
pub fn split_blank_once(s: &str) -> Option<(&str, &str)> {
    let start = s.find(is_blank)?;
    let rest = &s[start..];
    let end = rest.find(|c| !is_blank(c)).unwrap_or(rest.len());
    Some((&s[..start], &rest[end..]))
}

/// Removes one trailing unit marker if present.
pub fn strip_marker(s: &str, marker: char) -> &str {
    s.strip_suffix(marker).unwrap_or(s)
}

/// Whether the string consists of `1..=max` ASCII digits.
pub fn is_digits(s: &str, max: usize) -> bool {
    (1..=max).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}
