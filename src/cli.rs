//! CLI argument parsing for the hours review tool.

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use rust_decimal::Decimal;

use crate::api::ReviewQuery;
use crate::calculation::RoundingMode;
use crate::config::{ConfigLoader, ReviewConfig};
use crate::error::ReviewResult;

/// Default address for `serve`.
pub const DEFAULT_ADDR: &str = "127.0.0.1:3000";

/// Command line interface.
#[derive(Parser, Debug)]
#[command(name = "hours-review")]
#[command(version)]
#[command(about = "Review daily worked hours from a payroll time-tracking export", long_about = None)]
pub struct Cli {
    /// Enable trace-level logging on stderr
    #[arg(long, global = true)]
    pub debug: bool,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print the daily totals and report for an export as JSON
    Report(ReportArgs),
    /// Write the cleaned detail rows with an Hours column as CSV
    Export(ExportArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
}

/// Arguments for `report`.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// CSV export to review
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Minimum hours threshold
    #[arg(long, value_name = "HOURS")]
    pub minimum_hours: Option<Decimal>,

    /// Overtime hours threshold
    #[arg(long, value_name = "HOURS")]
    pub overtime_hours: Option<Decimal>,

    /// Rounding for daily totals (none, 15min, 30min, hour)
    #[arg(long, value_name = "MODE")]
    pub rounding: Option<RoundingMode>,

    /// Leave "Travel Time" entries out of worked hours
    #[arg(long)]
    pub exclude_travel: bool,
}

impl ReportArgs {
    /// Resolves the settings for this run: file (or defaults), then flags.
    pub fn review_config(&self) -> ReviewResult<ReviewConfig> {
        let base = load_config(self.config.as_ref())?;
        let overrides = ReviewQuery {
            minimum_hours: self.minimum_hours,
            overtime_hours: self.overtime_hours,
            rounding: self.rounding,
            include_travel_time: self.exclude_travel.then_some(false),
        };
        overrides.apply(&base)
    }
}

/// Arguments for `export`.
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// CSV export to clean
    #[arg(value_name = "CSV")]
    pub input: PathBuf,

    /// YAML configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Keep only this technician (repeatable)
    #[arg(short, long = "technician", value_name = "NAME")]
    pub technicians: Vec<String>,

    /// Leave "Travel Time" rows out
    #[arg(long)]
    pub exclude_travel: bool,

    /// Output file (stdout when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
}

impl ExportArgs {
    /// Resolves the settings for this run.
    pub fn review_config(&self) -> ReviewResult<ReviewConfig> {
        let mut config = load_config(self.config.as_ref())?;
        if self.exclude_travel {
            config.include_travel_time = false;
        }
        Ok(config)
    }

    /// The technician filter; no `--technician` flags keeps everyone.
    pub fn technician_filter(&self) -> Option<&[String]> {
        if self.technicians.is_empty() {
            None
        } else {
            Some(self.technicians.as_slice())
        }
    }
}

/// Arguments for `serve`.
#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, default_value = DEFAULT_ADDR)]
    pub addr: SocketAddr,

    /// YAML configuration file with the server defaults
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl ServeArgs {
    /// The server defaults.
    pub fn review_config(&self) -> ReviewResult<ReviewConfig> {
        load_config(self.config.as_ref())
    }
}

fn load_config(path: Option<&PathBuf>) -> ReviewResult<ReviewConfig> {
    match path {
        Some(path) => Ok(ConfigLoader::load(path)?.into_config()),
        None => Ok(ReviewConfig::default()),
    }
}
