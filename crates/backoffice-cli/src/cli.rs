//! CLI argument definitions for the backoffice console.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "backoffice",
    version,
    about = "Backoffice console - role-aware navigation and collection browsing",
    long_about = "Administration console core for the agriculture, gamification and\n\
                  education modules. Resolves which modules a role may open and\n\
                  browses record collections with search and pagination."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Registry TOML overriding the built-in role/project registry.
    #[arg(long = "registry", value_name = "PATH", global = true)]
    pub registry: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Resolve module access for a role and print its menu.
    Modules(ModulesArgs),

    /// List the configured roles and their flags.
    Roles,

    /// Browse a JSON array of records with search and pagination.
    Browse(BrowseArgs),
}

#[derive(Parser)]
pub struct ModulesArgs {
    /// Role to resolve (e.g. ADMIN, USER, EST, PROFESOR).
    #[arg(value_name = "ROLE")]
    pub role: String,

    /// Also render each reachable module's dashboard surface.
    #[arg(long = "dashboards")]
    pub dashboards: bool,
}

#[derive(Parser)]
pub struct BrowseArgs {
    /// Path to a JSON file containing an array of records.
    #[arg(value_name = "DATA")]
    pub data: PathBuf,

    /// Substring to search for (case-insensitive).
    #[arg(long = "search", value_name = "TERM")]
    pub search: Option<String>,

    /// Comma-separated field names the search inspects. Empty disables
    /// filtering.
    #[arg(long = "fields", value_name = "FIELDS", value_delimiter = ',')]
    pub fields: Vec<String>,

    /// Page to show. Out-of-range pages clamp to the nearest valid page.
    #[arg(long = "page", default_value_t = 1, allow_negative_numbers = true)]
    pub page: i64,

    /// Records per page (must be at least 1).
    #[arg(
        long = "page-size",
        default_value_t = 10,
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub page_size: u64,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
