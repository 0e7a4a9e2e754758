// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! agenda - a personal appointment ledger for the terminal

use agenda_cli::run;
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    run()
}
