// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Core of a personal appointment ledger: a grammar for free-form dates and
//! times, conflict and recurrence rules, and a flat-file store.

mod appointment;
mod config;
mod datetime;
mod error;
mod id;
mod ledger;
mod recurrence;
mod store;

pub use crate::appointment::{Appointment, Body};
pub use crate::config::{APP_NAME, Config, DEFAULT_STORE_PATH, expand_path, get_config_dir};
pub use crate::datetime::{
    Date, Day, Hour, Instant, Interval, Minute, Month, Selector, Time, Year, is_blank,
    split_blank_once, trim_blank,
};
pub use crate::error::Error;
pub use crate::id::IdAllocator;
pub use crate::ledger::Ledger;
pub use crate::recurrence::{RecurrenceRequest, RecurrenceUnit, advance_date};
pub use crate::store::{LoadOutcome, Store, decode_record, encode_record};
