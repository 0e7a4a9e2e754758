// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Interactive front end of the agenda ledger: argument parsing, config
//! discovery and the command prompt.

mod cli;
mod cmd_appointment;
mod cmd_generate_completion;
mod command;
mod config;
mod formatter;
mod prompt;
mod session;

pub use crate::{
    cli::{Cli, Commands, run},
    cmd_generate_completion::{CmdGenerateCompletion, Shell},
    command::{CommandLine, Verb},
    config::{Config, parse_config},
    formatter::AppointmentFormatter,
    session::{Flow, Session},
};
