//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::config::LogFormat;

/// Pocket calculator with a clickable terminal keypad
#[derive(Parser, Debug)]
#[command(name = "pocketcalc")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (errors only)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Log line format
    #[arg(long, value_enum, default_value_t = LogFormat::Text, global = true)]
    pub log_format: LogFormat,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive calculator
    Tui(TuiArgs),

    /// Replay keystrokes and print the display
    ///
    /// Keys follow the keyboard bindings: digits, `.`, `+ - * /`, `=`,
    /// `c`/`C` to clear, `%`, and `n` to toggle the sign. Whitespace is skipped.
    Eval(EvalArgs),

    /// Print the key bindings
    Keys,
}

/// Arguments for the tui command
#[derive(Parser, Debug, Default)]
pub struct TuiArgs {
    /// Write logs to this file (logging is off otherwise)
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

/// Arguments for the eval command
#[derive(Parser, Debug, Default)]
pub struct EvalArgs {
    /// Keystrokes, e.g. "3+4*2="
    #[arg(allow_hyphen_values = true)]
    pub keys: String,

    /// Print the final state as JSON
    #[arg(long)]
    pub json: bool,

    /// Print the display after every key
    #[arg(long)]
    pub trace: bool,
}

/// Color argument
#[derive(ValueEnum, Clone, Debug, Default)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}
