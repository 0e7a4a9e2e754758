// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use agenda_core::{split_blank_once, trim_blank};

/// The verbs understood by the interactive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Add,
    View,
    Search,
    Reschedule,
    Change,
    Delete,
    Repeat,
    Help,
    Quit,
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Add,
        Verb::View,
        Verb::Search,
        Verb::Reschedule,
        Verb::Change,
        Verb::Delete,
        Verb::Repeat,
        Verb::Help,
        Verb::Quit,
    ];

    /// Every spelling that selects this verb.
    #[rustfmt::skip]
    pub const fn aliases(self) -> &'static [&'static str] {
        match self {
            Verb::Add        => &["추가", "ㅊㄱ", "add", "a", "+"],
            Verb::View       => &["열람", "ㅇㄹ", "view", "v", "#"],
            Verb::Search     => &["검색", "ㄱㅅ", "search", "s", "/"],
            Verb::Reschedule => &["조정", "ㅈㅈ", "reschedule", "r", "!"],
            Verb::Change     => &["변경", "ㅂㄱ", "change", "c", "@"],
            Verb::Delete     => &["삭제", "ㅅㅈ", "delete", "d", "-"],
            Verb::Repeat     => &["반복", "ㅂㅂ", "repeat", "p", "%"],
            Verb::Help       => &["도움말", "ㄷㅇ", "help", "h", "?"],
            Verb::Quit       => &["종료", "ㅈㄹ", "quit", "q", "."],
        }
    }

    /// The canonical English name.
    pub const fn name(self) -> &'static str {
        self.aliases()[2]
    }

    /// Shape of the argument, empty for verbs that take none.
    pub const fn usage(self) -> &'static str {
        match self {
            Verb::Add => "<date> <time>~<date> <time> [body]",
            Verb::Search => "<year> | <year>/<month> | <year>/<month>/<day>",
            Verb::Reschedule => "<number> <date> <time>~<date> <time>",
            Verb::Change => "<number> [body]",
            Verb::Delete => "<number>",
            Verb::Repeat => "<number> <month|year> <count>",
            Verb::View | Verb::Help | Verb::Quit => "",
        }
    }

    pub const fn about(self) -> &'static str {
        match self {
            Verb::Add => "Add an appointment",
            Verb::View => "List every appointment",
            Verb::Search => "List appointments within a year, month or day",
            Verb::Reschedule => "Move an appointment to another time",
            Verb::Change => "Replace the body of an appointment",
            Verb::Delete => "Delete an appointment, or a whole recurrence from its first one",
            Verb::Repeat => "Repeat an appointment monthly or yearly",
            Verb::Help => "Show this help",
            Verb::Quit => "Quit",
        }
    }

    /// Whether the verb rewrites the store.
    pub const fn mutates(self) -> bool {
        matches!(
            self,
            Verb::Add | Verb::Reschedule | Verb::Change | Verb::Delete | Verb::Repeat
        )
    }

    pub fn lookup(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|verb| verb.aliases().iter().any(|alias| *alias == word))
    }
}

/// A command line split into its verb and the trailing argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandLine<'a> {
    pub verb: &'a str,
    pub arg: &'a str,
}

impl<'a> CommandLine<'a> {
    /// Splits on the first run of blanks. `None` for a blank line.
    pub fn split(line: &'a str) -> Option<Self> {
        let line = trim_blank(line);
        if line.is_empty() {
            return None;
        }
        let (verb, arg) = split_blank_once(line).unwrap_or((line, ""));
        Some(Self { verb, arg })
    }
}
