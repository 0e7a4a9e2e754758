// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::error::Error;
use std::io::{self, BufRead, Write};

use agenda_core::{IdAllocator, Ledger, Store};
use colored::Colorize;

use crate::cmd_appointment;
use crate::command::{CommandLine, Verb};
use crate::config::Config;
use crate::prompt::confirm;

const PROMPT: &str = ">>> ";

/// Whether the loop goes on after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// An interactive session over one store file.
///
/// Every command reloads the store first and saves it after a change, so the
/// file is the only state that outlives a command.
#[derive(Debug)]
pub struct Session<R, W> {
    pub(crate) store: Store,
    pub(crate) config: Config,
    pub(crate) input: R,
    pub(crate) output: W,
    pub(crate) ledger: Ledger,
    pub(crate) ids: IdAllocator,
    loaded: bool,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(store: Store, config: Config, input: R, output: W) -> Self {
        Self {
            store,
            config,
            input,
            output,
            ledger: Ledger::default(),
            ids: IdAllocator::default(),
            loaded: false,
        }
    }

    /// Creates the store file when needed, then opens a session on it.
    pub fn open(store: Store, config: Config, input: R, mut output: W) -> Result<Self, Box<dyn Error>> {
        let created = store
            .prepare()
            .map_err(|e| format!("Cannot access data file {}: {}", store.path().display(), e))?;
        if created {
            writeln!(output, "Data file not found, creating a new one: {}", store.path().display())?;
        }
        Ok(Self::new(store, config, input, output))
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Reads and runs commands until `quit` or the end of input.
    pub fn run(&mut self) -> Result<(), Box<dyn Error>> {
        loop {
            if let Err(e) = self.reload() {
                self.report(&*e)?;
            }

            write!(self.output, "{PROMPT}")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output)?;
                break;
            }

            if self.execute(&line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Loads the store and runs a single command line.
    pub fn run_once(&mut self, line: &str) -> Result<(), Box<dyn Error>> {
        if let Err(e) = self.reload() {
            self.report(&*e)?;
        }
        self.execute(line)?;
        Ok(())
    }

    /// Runs one command line against the loaded ledger.
    ///
    /// Command failures are reported on the output. Only a broken output
    /// stream is returned as an error.
    pub fn execute(&mut self, line: &str) -> io::Result<Flow> {
        let line = line.trim_end_matches(['\n', '\r']);
        let Some(CommandLine { verb, arg }) = CommandLine::split(line) else {
            return Ok(Flow::Continue);
        };
        let Some(verb) = Verb::lookup(verb) else {
            writeln!(self.output, "Enter a valid command, or `help` to list them")?;
            return Ok(Flow::Continue);
        };

        if verb.mutates() && !self.loaded {
            let e: Box<dyn Error> = format!(
                "{} could not be read, refusing to change it",
                self.store.path().display()
            )
            .into();
            self.report(&*e)?;
            return Ok(Flow::Continue);
        }

        tracing::debug!(verb = verb.name(), arg, "dispatching command");
        let result = match verb {
            Verb::Add => cmd_appointment::add(self, arg),
            Verb::View => cmd_appointment::view(self),
            Verb::Search => cmd_appointment::search(self, arg),
            Verb::Reschedule => cmd_appointment::reschedule(self, arg),
            Verb::Change => cmd_appointment::change(self, arg),
            Verb::Delete => cmd_appointment::delete(self, arg),
            Verb::Repeat => cmd_appointment::repeat(self, arg),
            Verb::Help => cmd_appointment::help(self),
            Verb::Quit => return Ok(Flow::Quit),
        };
        if let Err(e) = result {
            self.report(&*e)?;
        }
        Ok(Flow::Continue)
    }

    /// Replaces the in-memory ledger with the store content.
    ///
    /// Until a reload succeeds, commands that would rewrite the store are
    /// refused.
    pub fn reload(&mut self) -> Result<(), Box<dyn Error>> {
        self.loaded = false;
        let outcome = self.store.load()?;
        for rejected in &outcome.rejected {
            writeln!(self.output, "{} {}", "Warning:".yellow(), rejected)?;
        }
        self.ledger = outcome.ledger;
        self.ids = outcome.ids;
        self.loaded = true;
        Ok(())
    }

    pub(crate) fn save(&mut self) -> Result<(), Box<dyn Error>> {
        if !self.loaded {
            return Err(format!("{} was not read, not saving", self.store.path().display()).into());
        }
        self.store
            .save(&mut self.ledger, &mut self.ids)
            .map_err(|e| format!("Failed to save {}: {}", self.store.path().display(), e))?;
        Ok(())
    }

    /// Asks the user, or answers `unattended` when prompts are disabled.
    pub(crate) fn ask(&mut self, question: &str, unattended: bool) -> io::Result<bool> {
        if !self.config.confirm {
            return Ok(unattended);
        }
        confirm(&mut self.input, &mut self.output, question)
    }

    pub(crate) fn report(&mut self, e: &dyn Error) -> io::Result<()> {
        writeln!(self.output, "{} {}", "Error:".red(), e)
    }
}
