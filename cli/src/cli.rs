// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::{error::Error, ffi::OsString, io, path::PathBuf};

use agenda_core::{APP_NAME, Store};
use clap::builder::{PossibleValue, PossibleValuesParser, styling};
use clap::{ArgMatches, Command, ValueHint, arg, crate_version, value_parser};
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use crate::cmd_generate_completion::CmdGenerateCompletion;
use crate::command::Verb;
use crate::config::parse_config;
use crate::session::Session;

const AGENDA_LOG_ENV: &str = "AGENDA_LOG";

/// Run the agenda command-line interface.
pub fn run() -> Result<(), Box<dyn Error>> {
    init_tracing();
    match Cli::parse() {
        Ok(cli) => {
            if let Err(e) = cli.run() {
                println!("{} {}", "Error:".red(), e);
                std::process::exit(1);
            }
        }
        Err(e) => println!("{} {}", "Error:".red(), e),
    };
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(AGENDA_LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Command-line interface
#[derive(Debug)]
pub struct Cli {
    /// Path to the configuration file
    pub config: Option<PathBuf>,

    /// Path to the store file, overriding the configuration
    pub store: Option<PathBuf>,

    /// The command to execute
    pub command: Commands,
}

impl Cli {
    /// Create the command-line interface
    pub fn command() -> Command {
        const STYLES: styling::Styles = styling::Styles::styled()
            .header(styling::AnsiColor::Green.on_default().bold())
            .usage(styling::AnsiColor::Green.on_default().bold())
            .literal(styling::AnsiColor::Blue.on_default().bold())
            .placeholder(styling::AnsiColor::Cyan.on_default());

        Command::new(APP_NAME)
            .about("Keep your appointments in a plain text ledger, written the way you say them.")
            .author("Zexin Yuan <aim@yzx9.xyz>")
            .version(crate_version!())
            .styles(STYLES)
            .subcommand_required(false) // start the prompt by default
            .arg_required_else_help(false)
            .args_conflicts_with_subcommands(true)
            .arg(
                arg!(-c --config [CONFIG] "Path to the configuration file")
                    .long_help(
                        "\
Path to the configuration file. Defaults to $XDG_CONFIG_HOME/agenda/config.toml on Linux and MacOS, \
%LOCALAPPDATA%/agenda/config.toml on Windows. Built-in defaults apply when no file exists.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(-s --store [STORE] "Path to the appointment store file")
                    .long_help(
                        "\
Path to the appointment store file, overriding `core.store_path` of the configuration. \
The file is created when missing.",
                    )
                    .value_parser(value_parser!(PathBuf))
                    .value_hint(ValueHint::FilePath),
            )
            .arg(
                arg!(verb: [VERB] "Run a single command instead of the prompt")
                    .value_parser(PossibleValuesParser::new(one_shot_verbs())),
            )
            .arg(
                arg!(args: [ARGS]... "Argument of the command, as typed at the prompt")
                    .trailing_var_arg(true)
                    .allow_hyphen_values(true),
            )
            .subcommand(CmdGenerateCompletion::command())
    }

    /// Parse the command-line arguments
    pub fn parse() -> Result<Self, Box<dyn Error>> {
        let commands = Self::command();
        let matches = commands.get_matches();
        Self::from(matches)
    }

    /// Parse the specified arguments
    pub fn try_parse_from<I, T>(args: I) -> Result<Self, Box<dyn Error>>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let commands = Self::command();
        let matches = commands.try_get_matches_from(args)?;
        Self::from(matches)
    }

    /// Create a CLI instance from the `ArgMatches`
    pub fn from(matches: ArgMatches) -> Result<Self, Box<dyn Error>> {
        use Commands::*;
        let command = match matches.subcommand() {
            Some((CmdGenerateCompletion::NAME, matches)) => {
                GenerateCompletion(CmdGenerateCompletion::from(matches)?)
            }
            Some((name, _)) => return Err(format!("unknown command: {name}").into()),
            None => match matches.get_one::<String>("verb") {
                Some(verb) => {
                    let mut line = verb.clone();
                    for arg in matches.get_many::<String>("args").into_iter().flatten() {
                        line.push(' ');
                        line.push_str(arg);
                    }
                    Once(line)
                }
                None => Prompt,
            },
        };

        let config = matches.get_one("config").cloned();
        let store = matches.get_one("store").cloned();
        Ok(Cli {
            config,
            store,
            command,
        })
    }

    /// Run the command
    pub fn run(self) -> Result<(), Box<dyn Error>> {
        match self.command {
            Commands::Prompt => run_session(self.config, self.store, None),
            Commands::Once(line) => run_session(self.config, self.store, Some(line)),
            Commands::GenerateCompletion(a) => a.run(),
        }
    }
}

/// The commands available in the CLI
#[derive(Debug, Clone)]
pub enum Commands {
    /// Start the interactive prompt
    Prompt,

    /// Run one command line, e.g. `add 2024/03/05 9:00~2024/03/05 10:00 dentist`
    Once(String),

    /// Generate shell completion
    GenerateCompletion(CmdGenerateCompletion),
}

/// Verbs accepted on the command line. Every spelling of the prompt works.
fn one_shot_verbs() -> Vec<PossibleValue> {
    Verb::ALL
        .into_iter()
        .filter(|verb| !matches!(verb, Verb::Help | Verb::Quit))
        .map(|verb| {
            let name = verb.name();
            PossibleValue::new(name)
                .help(verb.about())
                .aliases(verb.aliases().iter().copied().filter(move |alias| *alias != name))
        })
        .collect()
}

fn run_session(
    config: Option<PathBuf>,
    store: Option<PathBuf>,
    line: Option<String>,
) -> Result<(), Box<dyn Error>> {
    tracing::debug!("parsing configuration...");
    let (mut core_config, config) = parse_config(config)?;
    if let Some(store) = store {
        core_config.store_path = store;
    }
    core_config.normalize()?;

    if !config.color {
        colored::control::set_override(false);
    }

    let store = Store::new(core_config.store_path);
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();
    let mut session = Session::open(store, config, stdin, stdout)?;
    match line {
        Some(line) => session.run_once(&line),
        None => session.run(),
    }
}
