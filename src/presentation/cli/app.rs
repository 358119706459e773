use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::application::config::Overrides;

/// smartlog: S.M.A.R.T. disk health reporter
///
/// Queries every disk with smartctl, classifies the attributes that predict
/// failure and logs a leveled report to the terminal and a persistent file.
#[derive(Parser, Debug)]
#[command(name = "smartlog")]
#[command(version, about, long_about)]
pub struct Cli {
    /// Subcommand to execute (defaults to `scan`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to custom config file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Show INFO messages on the terminal
    #[arg(short, long, global = true, env = "SMARTLOG_VERBOSE", value_parser = FalseyValueParser::new())]
    pub verbose: bool,

    /// Show DEBUG messages on the terminal
    #[arg(short, long, global = true, env = "SMARTLOG_DEBUG", value_parser = FalseyValueParser::new())]
    pub debug: bool,

    /// Show TRACE messages on the terminal
    #[arg(long, global = true, env = "SMARTLOG_TRACE", value_parser = FalseyValueParser::new())]
    pub trace: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "SMARTLOG_NO_COLOR", value_parser = FalseyValueParser::new())]
    pub no_color: bool,

    /// Append the persistent log to this file instead of the configured one
    #[arg(long, global = true, env = "SMARTLOG_LOG_FILE")]
    pub log_file: Option<String>,
}

/// Available commands
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Report on every disk
    #[command(alias = "s")]
    Scan {
        /// Report on this device only (repeatable); replaces enumeration
        #[arg(long = "device", value_name = "PATH")]
        devices: Vec<String>,

        /// Print the assessments as JSON instead of the terminal report
        #[arg(long)]
        json: bool,
    },

    /// List the devices a scan would query
    #[command(alias = "d")]
    Devices,

    /// Print the effective configuration
    #[command(alias = "c")]
    Config {
        /// Write the default config file instead
        #[arg(long)]
        init: bool,
    },
}

impl Cli {
    /// Settings that take precedence over the config file.
    #[must_use]
    pub fn overrides(&self) -> Overrides {
        let devices = match &self.command {
            Some(Commands::Scan { devices, .. }) => devices.clone(),
            _ => Vec::new(),
        };
        Overrides {
            trace: self.trace,
            debug: self.debug,
            verbose: self.verbose,
            no_color: self.no_color,
            log_file: self.log_file.clone(),
            devices,
        }
    }
}
