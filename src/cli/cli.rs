use std::path::PathBuf;

use clap::Parser;

use crate::application::data::{ColorChoice, LogLevel};

/// Manage an in-memory tree of directories with CREATE, LIST, MOVE and DELETE commands.
#[derive(Parser, Debug, Clone)]
#[command(version)]
pub struct Cli {
    /// File with one command per line; starts an interactive prompt when omitted
    pub script: Option<PathBuf>,

    #[clap(long, short, default_value = "warn", value_enum)]
    pub log_level: LogLevel,

    /// Color error messages
    #[clap(long, default_value = "auto", value_enum)]
    pub color: ColorChoice,
}
