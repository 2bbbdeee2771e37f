use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::string::FromUtf8Error;

use snafu::Snafu;
use snafu::prelude::*;
use tracing::{debug, info};

use crate::application::RuntimeConfig;
use crate::interpreter::{Interpreter, InterpreterError};

const BANNER: &str = "Enter commands: CREATE, LIST, MOVE, DELETE. Type 'QUIT' to exit.";
const PROMPT: &str = "Enter command >>> ";
const QUIT: &str = "QUIT";

pub struct Application;

impl Application {
    pub async fn run(app_config: impl Into<RuntimeConfig>) -> Result<(), ApplicationError> {
        let app_config: RuntimeConfig = app_config.into();
        debug!("Runtime config: {:?}", app_config);

        if app_config.color {
            colored::control::set_override(true);
        }

        let mut interpreter = Interpreter::new(io::stdout().lock(), app_config.color);
        match app_config.script.as_deref() {
            Some(script) => Self::run_script(script, &mut interpreter).await,
            None => Self::run_interactive(io::stdin().lock(), &mut interpreter),
        }
    }

    /// Runs every non-blank line of `script` in order.
    pub async fn run_script<W: Write>(
        script: &Path,
        interpreter: &mut Interpreter<W>,
    ) -> Result<(), ApplicationError> {
        info!("Running commands from {}", script.display());
        let bytes = compio::fs::read(script)
            .await
            .context(ScriptReadSnafu { path: script })?;
        let contents = String::from_utf8(bytes).context(ScriptEncodingSnafu { path: script })?;

        let mut executed = 0usize;
        for line in contents.lines().filter(|line| !line.trim().is_empty()) {
            interpreter.execute_line(line).context(InterpreterSnafu)?;
            executed += 1;
        }

        debug!("Executed {} lines from {}", executed, script.display());
        Ok(())
    }

    /// Prompts for commands on `input` until `QUIT` or end of input.
    ///
    /// An empty line prints the banner again.
    pub fn run_interactive<R: BufRead, W: Write>(
        mut input: R,
        interpreter: &mut Interpreter<W>,
    ) -> Result<(), ApplicationError> {
        Self::write_banner(interpreter)?;

        let mut line = String::new();
        loop {
            let output = interpreter.output_mut();
            write!(output, "{PROMPT}").context(PromptSnafu)?;
            output.flush().context(PromptSnafu)?;

            line.clear();
            if input.read_line(&mut line).context(InputSnafu)? == 0 {
                debug!("Reached end of input");
                writeln!(interpreter.output_mut()).context(PromptSnafu)?;
                break;
            }

            match line.trim() {
                QUIT => break,
                "" => Self::write_banner(interpreter)?,
                command => interpreter.execute_line(command).context(InterpreterSnafu)?,
            }
        }

        info!("Interactive session ended");
        Ok(())
    }

    fn write_banner<W: Write>(interpreter: &mut Interpreter<W>) -> Result<(), ApplicationError> {
        writeln!(interpreter.output_mut(), "{BANNER}").context(PromptSnafu)
    }
}

#[derive(Debug, Snafu)]
pub enum ApplicationError {
    #[snafu(display("Failed to read the command file: {}", path.display()))]
    ScriptReadError { path: PathBuf, source: io::Error },
    #[snafu(display("Command file {} is not valid UTF-8", path.display()))]
    ScriptEncodingError {
        path: PathBuf,
        source: FromUtf8Error,
    },
    #[snafu(display("Failed to read a command from stdin"))]
    InputError { source: io::Error },
    #[snafu(display("Failed to write the prompt"))]
    PromptError { source: io::Error },
    #[snafu(display("Critical failure encountered while running commands"))]
    InterpreterError { source: InterpreterError },
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;
    use tempfile::NamedTempFile;

    fn script_with(contents: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(contents).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    fn output_of(interpreter: Interpreter<Vec<u8>>) -> String {
        String::from_utf8(interpreter.into_output()).expect("Output should be UTF-8")
    }

    #[compio::test]
    async fn script_runs_every_line() {
        let script = script_with(
            b"CREATE fruits\nCREATE fruits/apples\nCREATE vegetables\n\nMOVE fruits/apples vegetables\nLIST\n",
        );
        let mut interpreter = Interpreter::new(Vec::new(), false);

        Application::run_script(script.path(), &mut interpreter)
            .await
            .expect("Script should run");

        assert_eq!(
            output_of(interpreter),
            "CREATE fruits\n\
             CREATE fruits/apples\n\
             CREATE vegetables\n\
             MOVE fruits/apples vegetables\n\
             LIST\n\
             fruits\n\
             vegetables\n  apples\n"
        );
    }

    #[compio::test]
    async fn script_continues_after_failed_commands() {
        let script = script_with(b"DELETE fruits\r\nFOO bar\r\nCREATE grains\r\nLIST");
        let mut interpreter = Interpreter::new(Vec::new(), false);

        Application::run_script(script.path(), &mut interpreter)
            .await
            .expect("Script should run");

        assert_eq!(
            output_of(interpreter),
            "DELETE fruits\n\
             Cannot delete fruits - fruits does not exist\n\
             Cannot perform command - FOO does not exist\n\
             CREATE grains\n\
             LIST\n\
             grains\n"
        );
    }

    #[compio::test]
    async fn missing_script_is_fatal() {
        let mut interpreter = Interpreter::new(Vec::new(), false);
        let result =
            Application::run_script(Path::new("/this/path/does/not/exist.txt"), &mut interpreter)
                .await;

        match result {
            Err(ApplicationError::ScriptReadError { path, .. }) => {
                assert_eq!(path, Path::new("/this/path/does/not/exist.txt"));
            }
            other => panic!("Expected ScriptReadError, got {other:?}"),
        }
    }

    #[compio::test]
    async fn non_utf8_script_is_fatal() {
        let script = script_with(&[0x43, 0xff, 0xfe, 0x0a]);
        let mut interpreter = Interpreter::new(Vec::new(), false);

        let result = Application::run_script(script.path(), &mut interpreter).await;

        assert!(matches!(
            result,
            Err(ApplicationError::ScriptEncodingError { .. })
        ));
    }

    #[test]
    fn interactive_session_stops_at_quit() {
        let input: &[u8] = b"CREATE fruits\nLIST\nQUIT\nCREATE vegetables\n";
        let mut interpreter = Interpreter::new(Vec::new(), false);

        Application::run_interactive(input, &mut interpreter).expect("Session should run");

        assert!(!interpreter.tree().contains("vegetables"));
        assert_eq!(
            output_of(interpreter),
            format!("{BANNER}\n{PROMPT}CREATE fruits\n{PROMPT}LIST\nfruits\n{PROMPT}")
        );
    }

    #[test]
    fn interactive_session_repeats_banner_on_empty_line() {
        let input: &[u8] = b"\nQUIT\n";
        let mut interpreter = Interpreter::new(Vec::new(), false);

        Application::run_interactive(input, &mut interpreter).expect("Session should run");

        assert_eq!(
            output_of(interpreter),
            format!("{BANNER}\n{PROMPT}{BANNER}\n{PROMPT}")
        );
    }

    #[rstest]
    #[case(b"CREATE a/b" as &[u8])]
    #[case(b"CREATE a/b\n" as &[u8])]
    fn interactive_session_ends_at_end_of_input(#[case] input: &[u8]) {
        let mut interpreter = Interpreter::new(Vec::new(), false);

        Application::run_interactive(input, &mut interpreter).expect("Session should run");

        assert!(interpreter.tree().contains("a/b"));
        assert!(output_of(interpreter).ends_with(&format!("{PROMPT}\n")));
    }
}
