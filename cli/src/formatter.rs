// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::borrow::Borrow;
use std::fmt;

use agenda_core::Appointment;
use colored::Colorize;

/// Renders appointments as `<number> <marker> <start>~<end>`, followed by
/// ` \t <body>` when there is a body.
///
/// The marker is `*` for appointments allowed to overlap, `-` otherwise.
#[derive(Debug, Default, Clone, Copy)]
pub struct AppointmentFormatter {
    prefix: Option<&'static str>,
}

impl AppointmentFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Puts a marker such as `->` in front of every line.
    pub fn with_prefix(mut self, prefix: &'static str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn format<'a, A>(&'a self, appointments: &'a [A]) -> Display<'a, A>
    where
        A: Borrow<Appointment>,
    {
        Display {
            appointments,
            formatter: self,
        }
    }

    fn write_line(&self, f: &mut fmt::Formatter<'_>, appointment: &Appointment) -> fmt::Result {
        if let Some(prefix) = self.prefix {
            write!(f, "{} ", prefix.red())?;
        }

        let marker = match appointment.allow_overlap() {
            true => "*".yellow(),
            false => "-".normal(),
        };
        write!(
            f,
            "{} {} {}",
            appointment.display_number().to_string().bold(),
            marker,
            appointment.interval().to_string().cyan(),
        )?;

        if !appointment.body().is_empty() {
            write!(f, " \t {}", appointment.body())?;
        }
        Ok(())
    }
}

#[derive(Debug)]
pub struct Display<'a, A> {
    appointments: &'a [A],
    formatter: &'a AppointmentFormatter,
}

impl<A: Borrow<Appointment>> fmt::Display for Display<'_, A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, appointment) in self.appointments.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            self.formatter.write_line(f, appointment.borrow())?;
        }
        Ok(())
    }
}
