// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{BufRead, Write};

use agenda_core::{
    Appointment, Body, Error as CoreError, Interval, RecurrenceRequest, Selector,
    split_blank_once,
};
use colored::Colorize;

use crate::command::Verb;
use crate::formatter::AppointmentFormatter;
use crate::session::Session;

type Result = std::result::Result<(), Box<dyn Error>>;

pub fn add<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    if arg.is_empty() {
        return usage(session, Verb::Add);
    }

    let appointment: Appointment = arg.parse()?;
    let number = match session.ledger.add(appointment.clone()) {
        Ok(number) => number,
        Err(CoreError::Overlap { conflicts }) => {
            report_conflicts(session, &conflicts)?;
            if !session.ask("Add it anyway, allowing overlap?", false)? {
                return Ok(());
            }
            session.ledger.add(appointment.with_allow_overlap(true))?
        }
        Err(e) => return Err(e.into()),
    };

    session.save()?;
    tracing::debug!(number, "added appointment");
    writeln!(session.output, "Added as appointment {}", number.to_string().bold())?;
    Ok(())
}

pub fn view<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result {
    if session.ledger.is_empty() {
        writeln!(session.output, "No appointments")?;
        return Ok(());
    }

    let formatter = AppointmentFormatter::new();
    writeln!(session.output, "{}", formatter.format(session.ledger.appointments()))?;
    Ok(())
}

pub fn search<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    if arg.is_empty() {
        return usage(session, Verb::Search);
    }

    let selector: Selector = arg.parse()?;
    let found = session.ledger.select(&selector);
    if found.is_empty() {
        writeln!(session.output, "No appointments in {selector}")?;
        return Ok(());
    }

    let formatter = AppointmentFormatter::new();
    writeln!(session.output, "{}", formatter.format(&found))?;
    Ok(())
}

pub fn reschedule<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    let Some((number, interval)) = split_blank_once(arg) else {
        return usage(session, Verb::Reschedule);
    };

    let number = display_number(number)?;
    let interval: Interval = interval.parse()?;
    let moved = match session.ledger.reschedule(number, interval) {
        Ok(moved) => moved,
        Err(CoreError::Overlap { conflicts }) => return report_conflicts(session, &conflicts),
        Err(e) => return Err(e.into()),
    };

    session.save()?;
    writeln!(
        session.output,
        "Rescheduled, now appointment {}",
        moved.to_string().bold()
    )?;
    Ok(())
}

pub fn change<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    if arg.is_empty() {
        return usage(session, Verb::Change);
    }

    let (number, body) = split_blank_once(arg).unwrap_or((arg, ""));
    let number = display_number(number)?;
    let body: Body = body.parse()?;
    session.ledger.change_body(number, body)?;

    session.save()?;
    writeln!(session.output, "Changed appointment {}", number.to_string().bold())?;
    Ok(())
}

pub fn delete<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    if arg.is_empty() {
        return usage(session, Verb::Delete);
    }

    let number = display_number(arg)?;
    let group = session.ledger.group_of(number)?;
    if session.ledger.get(number)?.is_recurrence_base() && group.len() > 1 {
        let question = format!(
            "Appointment {number} starts a recurrence, delete it with its {} other occurrence(s)?",
            group.len() - 1
        );
        if !session.ask(&question, true)? {
            return Ok(());
        }
    }

    let removed = session.ledger.delete(number)?;
    session.save()?;
    writeln!(session.output, "Deleted {} appointment(s)", removed.len())?;
    Ok(())
}

pub fn repeat<R: BufRead, W: Write>(session: &mut Session<R, W>, arg: &str) -> Result {
    let Some((number, rest)) = split_blank_once(arg) else {
        return usage(session, Verb::Repeat);
    };
    let Some((unit, count)) = split_blank_once(rest) else {
        return usage(session, Verb::Repeat);
    };

    let number = display_number(number)?;
    let request = RecurrenceRequest::parse(unit, count)?;

    let mut ledger = session.ledger.clone();
    let mut ids = session.ids;
    let occurrences = match ledger.repeat(number, request, &mut ids) {
        Ok(occurrences) => occurrences,
        Err(CoreError::Overlap { conflicts }) => return report_conflicts(session, &conflicts),
        Err(e) => return Err(e.into()),
    };
    if occurrences.is_empty() {
        writeln!(
            session.output,
            "No occurrence of appointment {number} falls on a valid date"
        )?;
        return Ok(());
    }

    let formatter = AppointmentFormatter::new().with_prefix("+");
    writeln!(session.output, "{}", formatter.format(&occurrences))?;
    let question = format!("Create {} occurrence(s)?", occurrences.len());
    if !session.ask(&question, true)? {
        return Ok(());
    }

    session.ledger = ledger;
    session.ids = ids;
    session.save()?;
    writeln!(
        session.output,
        "Repeated appointment {number} {} time(s)",
        occurrences.len()
    )?;
    Ok(())
}

pub fn help<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result {
    for verb in Verb::ALL {
        writeln!(
            session.output,
            "{:<12} {:<32} {}",
            verb.name().bold(),
            verb.aliases().join(" "),
            verb.about()
        )?;
        if !verb.usage().is_empty() {
            writeln!(session.output, "{:<12} {}", "", verb.usage().dimmed())?;
        }
    }
    Ok(())
}

fn usage<R: BufRead, W: Write>(session: &mut Session<R, W>, verb: Verb) -> Result {
    writeln!(session.output, "Usage: {} {}", verb.name(), verb.usage())?;
    Ok(())
}

fn report_conflicts<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    conflicts: &[Appointment],
) -> Result {
    let error = CoreError::Overlap {
        conflicts: conflicts.to_vec(),
    };
    session.report(&error)?;
    let formatter = AppointmentFormatter::new().with_prefix("->");
    writeln!(session.output, "{}", formatter.format(conflicts))?;
    Ok(())
}

/// Reads the number shown in front of an appointment.
fn display_number(token: &str) -> std::result::Result<usize, Box<dyn Error>> {
    let positive = || format!("Appointment number must be a positive integer, got {token}");
    if let Ok(n) = token.parse::<i64>() {
        return usize::try_from(n)
            .ok()
            .filter(|n| *n > 0)
            .ok_or_else(|| positive().into());
    }
    if token.parse::<f64>().is_ok() && !token.chars().any(char::is_alphabetic) {
        return Err(positive().into());
    }
    Err(format!("Appointment number must not contain letters, got {token}").into())
}
