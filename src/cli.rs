use chrono::NaiveDate;
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::model::{parse_date_arg, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human readable table
    Table,
    /// JSON document
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "userdash")]
#[command(about = "Browse, filter and moderate a directory of users", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Configuration file (defaults to .userdash.toml discovery)
    #[arg(long, global = true, env = "USERDASH_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive dashboard
    Browse {
        /// JSON dataset of user records
        #[arg(short, long)]
        data: Option<PathBuf>,
    },

    /// Print one page of users after filtering and sorting
    List(ListArgs),

    /// Print the summary cards
    Summary {
        /// JSON dataset of user records
        #[arg(short, long)]
        data: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "table")]
        format: OutputFormat,

        /// ASCII output without colors
        #[arg(long)]
        plain: bool,
    },

    /// Write a default .userdash.toml in the current directory
    Init {
        /// Overwrite an existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct ListArgs {
    /// JSON dataset of user records
    #[arg(short, long)]
    pub data: Option<PathBuf>,

    /// Only users with this status (ACTIVE, INVITED, BLOCKED)
    #[arg(long, value_parser = parse_status)]
    pub status: Option<Status>,

    /// Case-insensitive substring of the user name
    #[arg(long)]
    pub name: Option<String>,

    /// Earliest start date, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub from: Option<NaiveDate>,

    /// Latest start date, inclusive (YYYY-MM-DD)
    #[arg(long, value_parser = parse_date)]
    pub to: Option<NaiveDate>,

    /// Sort key: name, email, startDate, invitedBy, status or date
    #[arg(long)]
    pub sort: Option<String>,

    /// Sort descending
    #[arg(long, requires = "sort")]
    pub desc: bool,

    /// Page to print, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Reveal the whole dataset instead of the initial batch
    #[arg(long)]
    pub all: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// ASCII output without colors
    #[arg(long)]
    pub plain: bool,
}

fn parse_status(s: &str) -> Result<Status, String> {
    s.parse::<Status>().map_err(|e| e.to_string())
}

fn parse_date(s: &str) -> Result<NaiveDate, String> {
    parse_date_arg(s).map_err(|e| e.to_string())
}
