//! Command line interface.
//!
//! Parses the `ip`, `nw` and `range` subcommands and turns each into the
//! lines to print. Nothing here writes to stdout so it can be tested.

use crate::error::Error;
use crate::models::{Address, Network};
use crate::output::{range_lines, AddressReport, NetworkReport};
use crate::processing::summarize_range;
use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

pub const BIN_NAME: &str = "ipinfo";

const EXAMPLES: &str = "Examples:
  ipinfo range 192.168.0.0 192.168.0.255
  ipinfo ip 192.168.1.1
  ipinfo nw 192.168.0.0/24";

#[derive(Parser, Debug)]
#[command(name = BIN_NAME, version)]
#[command(about = "Inspect IPv4/IPv6 addresses, networks and ranges", long_about = None)]
#[command(after_help = EXAMPLES)]
pub struct Cli {
    /// More log output on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print the report as JSON
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get information about a given IP address. Example: 192.168.1.1
    Ip {
        /// IPv4 or IPv6 address
        address: Option<String>,
    },
    /// Get information about a given IP network. Example: 192.168.0.0/24
    Nw {
        /// Mask off host bits instead of rejecting them
        #[arg(long)]
        loose: bool,
        /// IPv4 or IPv6 network, as address/prefixlen or address/netmask
        network: Option<String>,
    },
    /// Generate IP networks from two IP addresses. Example: 192.168.0.0 192.168.0.255
    Range {
        /// First IPv4 or IPv6 address
        first: Option<String>,
        /// Last IPv4 or IPv6 address
        last: Option<String>,
    },
}

impl Commands {
    fn name(&self) -> &'static str {
        match self {
            Commands::Ip { .. } => "ip",
            Commands::Nw { .. } => "nw",
            Commands::Range { .. } => "range",
        }
    }
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        crate::logging::level_from_flags(self.verbose, self.quiet)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Kernel(#[from] Error),

    #[error("'{0}'? range needs a second address")]
    MissingLast(String),

    #[error("cannot render JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// What the shell should print. A hint means an argument was missing,
/// which is not an error.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    Report(Vec<String>),
    Hint(String),
}

fn hint(command: Option<&Commands>) -> Outcome {
    match command {
        Some(cmd) => Outcome::Hint(format!("See: {BIN_NAME} {} --help", cmd.name())),
        None => Outcome::Hint(format!("See: {BIN_NAME} --help")),
    }
}

pub fn run(cli: &Cli) -> Result<Outcome, CliError> {
    let command = match &cli.command {
        Some(command) => command,
        None => return Ok(hint(None)),
    };
    log::info!("#Start {}", command.name().on_blue());

    match command {
        Commands::Ip { address: None }
        | Commands::Nw { network: None, .. }
        | Commands::Range { first: None, .. } => Ok(hint(Some(command))),

        Commands::Ip {
            address: Some(text),
        } => {
            let report = AddressReport::new(&Address::parse(text)?);
            render(cli.json, &report, || report.lines())
        }

        Commands::Nw {
            loose,
            network: Some(text),
        } => {
            let network = if *loose {
                Network::parse_truncating(text)?
            } else {
                Network::parse(text)?
            };
            let report = NetworkReport::new(&network)?;
            render(cli.json, &report, || report.lines())
        }

        Commands::Range {
            first: Some(first),
            last: None,
        } => Err(CliError::MissingLast(first.clone())),

        Commands::Range {
            first: Some(first),
            last: Some(last),
        } => {
            let blocks = summarize_range(Address::parse(first)?, Address::parse(last)?)?;
            render(cli.json, &blocks, || range_lines(&blocks))
        }
    }
}

fn render<T, F>(json: bool, value: &T, text: F) -> Result<Outcome, CliError>
where
    T: serde::Serialize,
    F: FnOnce() -> Vec<String>,
{
    if json {
        Ok(Outcome::Report(vec![serde_json::to_string_pretty(value)?]))
    } else {
        Ok(Outcome::Report(text()))
    }
}
