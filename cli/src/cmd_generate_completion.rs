// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, io};

use clap::{ArgMatches, Command, ValueEnum, arg, value_parser};
use clap_complete::{Generator, generate};
use clap_complete_nushell::Nushell;

use crate::Cli;

/// Prints a completion script for `agenda`.
///
/// The script covers the options and the command verbs accepted for a
/// single run, e.g. `agenda repeat 1 month 3`.
#[derive(Debug, Clone, Copy)]
pub struct CmdGenerateCompletion {
    pub shell: Shell,
}

impl CmdGenerateCompletion {
    pub const NAME: &str = "generate-completion";

    pub fn command() -> Command {
        Command::new(Self::NAME)
            .about("Print a completion script covering options and command verbs")
            .hide(true)
            .arg(arg!(shell: <SHELL> "Target shell").value_parser(value_parser!(Shell)))
    }

    pub fn from(matches: &ArgMatches) -> Result<Self, Box<dyn Error>> {
        let shell = matches
            .get_one::<Shell>("shell")
            .copied()
            .ok_or("a shell is required")?;
        Ok(Self { shell })
    }

    pub fn run(self) -> Result<(), Box<dyn Error>> {
        tracing::debug!(shell = ?self.shell, "writing completion script");
        self.write_script(&mut io::stdout().lock());
        Ok(())
    }

    pub fn write_script(self, out: &mut impl io::Write) {
        match self.shell.builtin() {
            Some(shell) => write_with(shell, out),
            None => write_with(Nushell, out),
        }
    }
}

fn write_with(generator: impl Generator, out: &mut impl io::Write) {
    let mut cmd = Cli::command();
    let bin = cmd.get_name().to_string();
    generate(generator, &mut cmd, bin, out);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Elvish,
    Fish,
    Nushell,
    #[clap(name = "powershell")]
    #[allow(clippy::enum_variant_names)]
    PowerShell,
    Zsh,
}

impl Shell {
    /// The generator shipped with `clap_complete`, `None` for nushell.
    fn builtin(self) -> Option<clap_complete::Shell> {
        use clap_complete::Shell as Builtin;
        match self {
            Shell::Bash => Some(Builtin::Bash),
            Shell::Elvish => Some(Builtin::Elvish),
            Shell::Fish => Some(Builtin::Fish),
            Shell::PowerShell => Some(Builtin::PowerShell),
            Shell::Zsh => Some(Builtin::Zsh),
            Shell::Nushell => None,
        }
    }
}
