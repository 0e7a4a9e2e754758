// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Flat-file persistence.
//!
//! One appointment per line, 16 tab-separated fields:
//!
//! ```text
//! allow_overlap id group_id unit count
//! start_year start_month start_day start_hour start_minute
//! end_year end_month end_day end_hour end_minute body
//! ```
//!
//! `allow_overlap` is `0` or `1` and `unit` is `-`, `MONTH` or `YEAR`. The body
//! comes last and may itself contain tabs.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::{
    Appointment, Body, Date, Day, Error, Hour, IdAllocator, Instant, Interval, Ledger, Minute,
    Month, RecurrenceRequest, RecurrenceUnit, Time, Year,
};

const FIELD_COUNT: usize = 16;

/// What a load produced.
#[derive(Debug)]
pub struct LoadOutcome {
    /// The decoded appointments, sorted and numbered.
    pub ledger: Ledger,
    /// Allocator seeded with the largest stored identifier.
    pub ids: IdAllocator,
    /// Lines that could not be decoded and were skipped.
    pub rejected: Vec<Error>,
}

/// The appointment store file.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Makes sure the store file exists and can be read and written.
    ///
    /// Returns `true` if the file had to be created.
    pub fn prepare(&self) -> Result<bool, Error> {
        let created = !self.path.exists();
        if created {
            if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            tracing::info!(path = %self.path.display(), "creating store file");
        }

        OpenOptions::new()
            .read(true)
            .append(true)
            .create(true)
            .open(&self.path)?;
        Ok(created)
    }

    /// Reads every record, skipping and reporting the malformed ones.
    ///
    /// A missing file is an empty store. Lines that are not valid UTF-8 are
    /// rejected one by one like any other malformed line.
    pub fn load(&self) -> Result<LoadOutcome, Error> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };

        let mut appointments = Vec::new();
        let mut rejected = Vec::new();
        let mut ids = IdAllocator::new();
        for (i, line) in content.split(|b| *b == b'\n').enumerate() {
            let line = line.strip_suffix(b"\r").unwrap_or(line);
            if line.is_empty() {
                continue;
            }
            let decoded = std::str::from_utf8(line)
                .map_err(|e| e.to_string())
                .and_then(|line| decode_record(line).map_err(|e| e.to_string()));
            match decoded {
                Ok(appointment) => {
                    ids.observe(appointment.id());
                    appointments.push(appointment);
                }
                Err(reason) => {
                    tracing::warn!(line = i + 1, %reason, "skipping malformed record");
                    rejected.push(Error::StoreRecord {
                        line: i + 1,
                        reason,
                    });
                }
            }
        }

        tracing::debug!(count = appointments.len(), last_id = ids.last(), "loaded store");
        Ok(LoadOutcome {
            ledger: Ledger::new(appointments),
            ids,
            rejected,
        })
    }

    /// Assigns missing identifiers, then rewrites the whole file.
    pub fn save(&self, ledger: &mut Ledger, ids: &mut IdAllocator) -> Result<(), Error> {
        ledger.assign_ids(ids);
        ledger.reorder();

        let mut content = String::new();
        for appointment in ledger.appointments() {
            content.push_str(&encode_record(appointment));
            content.push('\n');
        }

        let mut tmp = self.path.clone().into_os_string();
        tmp.push(".tmp");
        let tmp = PathBuf::from(tmp);
        fs::write(&tmp, content)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(count = ledger.len(), path = %self.path.display(), "saved store");
        Ok(())
    }
}

/// Encodes one appointment as a record line, without the line break.
pub fn encode_record(appointment: &Appointment) -> String {
    let (unit, count) = match appointment.recurrence() {
        Some(recurrence) => (recurrence.unit().as_str(), recurrence.count()),
        None => ("-", 0),
    };

    let (start, end) = (appointment.interval().start(), appointment.interval().end());
    format!(
        "{}\t{}\t{}\t{}\t{}\t{}\t{}\t{}",
        u8::from(appointment.allow_overlap()),
        appointment.id(),
        appointment.group_id(),
        unit,
        count,
        instant_fields(&start),
        instant_fields(&end),
        appointment.body(),
    )
}

fn instant_fields(instant: &Instant) -> String {
    let (date, time) = (instant.date(), instant.time());
    format!(
        "{}\t{}\t{}\t{}\t{}",
        date.year().get(),
        date.month().get(),
        date.day().get(),
        time.hour().get(),
        time.minute().get(),
    )
}

/// Decodes one record line.
pub fn decode_record(line: &str) -> Result<Appointment, Error> {
    let fields: Vec<&str> = line.splitn(FIELD_COUNT, '\t').collect();
    let [
        allow_overlap,
        id,
        group_id,
        unit,
        count,
        start @ ..,
    ] = fields.as_slice()
    else {
        return Err(field_count_error(line));
    };
    let [s_year, s_month, s_day, s_hour, s_minute, e_year, e_month, e_day, e_hour, e_minute, body] =
        start
    else {
        return Err(field_count_error(line));
    };

    let allow_overlap = match *allow_overlap {
        "0" => false,
        "1" => true,
        other => {
            return Err(Error::Format {
                what: "overlap flag",
                expected: "0 or 1",
                input: other.to_string(),
            });
        }
    };
    let id: u64 = number(id, "identifier")?;
    let group_id: u64 = number(group_id, "group identifier")?;
    let count: u32 = number(count, "recurrence count")?;
    let recurrence = match *unit {
        "-" => None,
        unit => Some(RecurrenceRequest::new(RecurrenceUnit::from_str(unit)?, count)?),
    };

    let start = instant([s_year, s_month, s_day, s_hour, s_minute])?;
    let end = instant([e_year, e_month, e_day, e_hour, e_minute])?;
    let interval = Interval::new(start, end)?;
    let body = Body::new(*body)?;

    Ok(Appointment::restore(id, group_id, recurrence, allow_overlap, interval, body))
}

fn instant([year, month, day, hour, minute]: [&&str; 5]) -> Result<Instant, Error> {
    let date = Date::new(Year::from_str(year)?, Month::from_str(month)?, Day::from_str(day)?)?;
    let time = Time::new(Hour::from_str(hour)?, Minute::from_str(minute)?);
    Ok(Instant::new(date, time))
}

fn number<T: FromStr>(field: &str, what: &'static str) -> Result<T, Error> {
    field.parse().map_err(|_| Error::Format {
        what,
        expected: "a non-negative whole number",
        input: field.to_string(),
    })
}

fn field_count_error(line: &str) -> Error {
    Error::Format {
        what: "record",
        expected: "a record has 16 tab-separated fields",
        input: line.to_string(),
    }
}
