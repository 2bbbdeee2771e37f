use std::fmt::Display;
use std::io::{self, Write};

use colored::Colorize;
use snafu::{ResultExt, Snafu};
use tracing::{debug, info};

use crate::interpreter::Command;
use crate::namespace::{NamespaceError, NamespaceTree};

/// Runs commands against a single namespace tree and writes their output to a sink.
///
/// Failed commands are reported on the sink and never stop the interpreter.
pub struct Interpreter<W: Write> {
    tree: NamespaceTree,
    output: W,
    color: bool,
}

impl<W: Write> Interpreter<W> {
    pub fn new(output: W, color: bool) -> Self {
        Self {
            tree: NamespaceTree::new(),
            output,
            color,
        }
    }

    pub fn output_mut(&mut self) -> &mut W {
        &mut self.output
    }

    /// Parses and runs one line of input.
    ///
    /// Only a failure to write to the output is returned as an error.
    pub fn execute_line(&mut self, line: &str) -> Result<(), InterpreterError> {
        let command = match Command::parse(line) {
            Ok(command) => command,
            Err(err) => {
                debug!("Rejected line {:?}: {}", line, err);
                return self.report(err);
            }
        };

        if let Err(err) = self.execute(&command)? {
            info!("{} failed: {}", command, err);
            self.report(err)?;
        }

        Ok(())
    }

    /// Echoes and runs `command`. The outer error is an output failure, the inner one
    /// a namespace error to be reported.
    fn execute(
        &mut self,
        command: &Command,
    ) -> Result<Result<(), NamespaceError>, InterpreterError> {
        writeln!(self.output, "{command}").context(OutputSnafu)?;

        let outcome = match command {
            Command::Create { path } => {
                self.tree.create(path);
                Ok(())
            }
            Command::List => {
                for entry in self.tree.list() {
                    writeln!(self.output, "{entry}").context(OutputSnafu)?;
                }
                Ok(())
            }
            Command::Move {
                source,
                destination,
            } => self.tree.move_node(source, destination),
            Command::Delete { path } => self.tree.delete(path),
        };

        Ok(outcome)
    }

    fn report(&mut self, message: impl Display) -> Result<(), InterpreterError> {
        let message = message.to_string();
        let written = if self.color {
            writeln!(self.output, "{}", message.red())
        } else {
            writeln!(self.output, "{message}")
        };
        written.context(OutputSnafu)
    }
}

#[cfg(test)]
impl<W: Write> Interpreter<W> {
    pub(crate) fn tree(&self) -> &NamespaceTree {
        &self.tree
    }

    pub(crate) fn into_output(self) -> W {
        self.output
    }
}

#[derive(Debug, Snafu)]
pub enum InterpreterError {
    #[snafu(display("Failed to write interpreter output"))]
    OutputError { source: io::Error },
}
