// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::io::{self, BufRead, Write};

use colored::Colorize;

const ACCEPT: &[&str] = &["y", "yes", "ㅇ"];

/// Asks a yes/no question on the session streams.
///
/// Only `y`, `yes` or `ㅇ` accept; anything else, end of input included, declines.
pub fn confirm(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> io::Result<bool> {
    write!(output, "{} {} ", question, "[y/N]".dimmed())?;
    output.flush()?;

    let mut answer = String::new();
    if input.read_line(&mut answer)? == 0 {
        writeln!(output)?;
        return Ok(false);
    }

    let answer = answer.trim().to_lowercase();
    Ok(ACCEPT.iter().any(|a| *a == answer))
}
