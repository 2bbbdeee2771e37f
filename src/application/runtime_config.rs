use std::path::PathBuf;

use crate::cli::Cli;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuntimeConfig {
    /// Batch file to run; interactive mode when absent.
    pub script: Option<PathBuf>,
    pub color: bool,
}

impl From<Cli> for RuntimeConfig {
    fn from(cli: Cli) -> Self {
        Self {
            script: cli.script,
            color: cli.color.enabled(),
        }
    }
}
