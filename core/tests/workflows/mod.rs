// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! End-to-end workflow tests for the agenda-core crate.
//!
//! These tests run full load-modify-save cycles against a real store file,
//! the way one interactive command does.

mod config_driven;
mod recurrence_lifecycle;
mod store_cycle;
