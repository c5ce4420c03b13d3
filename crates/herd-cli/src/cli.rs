//! CLI argument definitions for the herd stall tracker.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use herd_model::StallKind;

#[derive(Parser)]
#[command(
    name = "herd",
    version,
    about = "Herd stall tracker - match stall ear-tags against the herd export",
    long_about = "Track which animal stands in which stall.\n\n\
                  Ear-tags are entered per layout (14 individual pens, 6 group boxes \
                  with 3 places each), matched against the registry's CSV export, and \
                  shown with age and projected slaughter date."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Directory for state and settings (default: per-user application directories).
    #[arg(long = "data-dir", value_name = "DIR", env = "HERD_DATA_DIR", global = true)]
    pub data_dir: Option<PathBuf>,

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

    /// Include ear-tag values in log output.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Enter the ear-tags of a layout, one line per place.
    Enter(EnterArgs),

    /// Match the entered ear-tags against a herd export.
    Update(UpdateArgs),

    /// Show the stall map.
    Show(ShowArgs),

    /// Show or change the slaughter age.
    SlaughterAge(SlaughterAgeArgs),

    /// List the stall layouts and their places.
    Layouts,
}

#[derive(Parser)]
pub struct EnterArgs {
    /// Layout to fill.
    #[arg(value_enum)]
    pub layout: LayoutArg,

    /// File with one ear-tag per line (reads stdin when omitted).
    ///
    /// Blank lines are ignored; write "frei", "leer" or "keine Kuh" for empty places.
    #[arg(value_name = "FILE")]
    pub file: Option<PathBuf>,
}

#[derive(Parser)]
pub struct UpdateArgs {
    /// Layout to update.
    #[arg(value_enum)]
    pub layout: LayoutArg,

    /// Herd export CSV (relative names are also looked up in the last used folder).
    #[arg(value_name = "DATASET")]
    pub dataset: PathBuf,
}

#[derive(Parser)]
pub struct ShowArgs {
    /// Layout to show (both when omitted).
    #[arg(value_enum)]
    pub layout: Option<LayoutArg>,

    /// Print the stored results as JSON.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Parser)]
pub struct SlaughterAgeArgs {
    /// New slaughter age in months (1-24); prints the current value when omitted.
    #[arg(value_name = "MONTHS")]
    pub months: Option<u32>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum LayoutArg {
    /// The 14 individual pens.
    Pens,
    /// The 6 group boxes with 3 places each.
    Boxes,
}

impl From<LayoutArg> for StallKind {
    fn from(value: LayoutArg) -> Self {
        match value {
            LayoutArg::Pens => StallKind::IndividualPens,
            LayoutArg::Boxes => StallKind::GroupBoxes,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
