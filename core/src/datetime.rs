// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! The temporal grammar: scalar components, dates, times, instants, intervals
//! and coarse search periods.

mod date;
mod instant;
mod interval;
mod scalar;
mod selector;
mod time;
pub(crate) mod util;

pub use date::Date;
pub use instant::Instant;
pub use interval::Interval;
pub use scalar::{Day, Hour, Minute, Month, Year};
pub use selector::Selector;
pub use time::Time;
pub use util::{is_blank, split_blank_once, trim_blank};
