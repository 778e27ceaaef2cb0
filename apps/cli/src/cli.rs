//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Check sign-up form fields the way the form does on focus loss and submit.
#[derive(Parser, Debug)]
#[command(name = "formcheck", version, about, long_about = None, propagate_version = true)]
pub struct Cli {
    /// Policy file (TOML). Defaults to `formcheck.toml` when present.
    #[arg(short, long, global = true, env = "FORMCHECK_CONFIG", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Result format on stdout.
    #[arg(short, long, value_enum, global = true, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Log format on stderr.
    #[arg(
        long,
        value_enum,
        global = true,
        env = "FORMCHECK_LOG_FORMAT",
        default_value_t = LogFormat::Compact
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Check a single field.
    Check {
        #[command(subcommand)]
        field: CheckField,

        /// List every failing rule instead of the first one.
        #[arg(long, global = true)]
        all: bool,
    },

    /// Evaluate the whole form and accept or reject it.
    Submit(SubmitArgs),
}

#[derive(Subcommand, Debug, Clone)]
pub enum CheckField {
    /// Check an email address.
    Email { value: String },
    /// Check a password.
    Password { value: String },
    /// Check a phone number.
    Phone { value: String },
    /// Check an age; non-numeric input counts as missing.
    Age { value: String },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SubmitArgs {
    #[arg(long, default_value = "")]
    pub email: String,

    #[arg(long, default_value = "")]
    pub password: String,

    #[arg(long, default_value = "")]
    pub phone: String,

    /// Age as entered; non-numeric input counts as missing.
    #[arg(long, default_value = "")]
    pub age: String,

    /// List every failing rule instead of the first one per field.
    #[arg(long)]
    pub all: bool,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}
