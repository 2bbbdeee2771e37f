use derive_more::Display;
use snafu::Snafu;

/// A single parsed line of input.
///
/// Displays as the echo line printed before the command runs.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum Command {
    #[display("CREATE {path}")]
    Create { path: String },
    #[display("LIST")]
    List,
    #[display("MOVE {source} {destination}")]
    Move { source: String, destination: String },
    #[display("DELETE {path}")]
    Delete { path: String },
}

impl Command {
    pub fn parse(line: &str) -> Result<Self, CommandParseError> {
        let mut tokens = line.split_whitespace();
        let Some(operation) = tokens.next() else {
            return EmptyLineSnafu.fail();
        };
        let args: Vec<&str> = tokens.collect();

        let command = match (operation, args.as_slice()) {
            ("CREATE", [path]) => Command::Create {
                path: path.to_string(),
            },
            ("LIST", []) => Command::List,
            ("MOVE", [source, destination]) => Command::Move {
                source: source.to_string(),
                destination: destination.to_string(),
            },
            ("DELETE", [path]) => Command::Delete {
                path: path.to_string(),
            },
            ("CREATE" | "LIST" | "MOVE" | "DELETE", _) => {
                return WrongAritySnafu {
                    operation,
                    expected: Self::arity(operation),
                    found: args.len(),
                }
                .fail();
            }
            _ => return UnknownOperationSnafu { operation }.fail(),
        };

        Ok(command)
    }

    fn arity(operation: &str) -> usize {
        match operation {
            "LIST" => 0,
            "MOVE" => 2,
            _ => 1,
        }
    }
}

#[derive(Debug, Snafu)]
pub enum CommandParseError {
    #[snafu(display("Cannot perform command - empty line"))]
    EmptyLine,
    #[snafu(display("Cannot perform command - {} does not exist", operation))]
    UnknownOperation { operation: String },
    #[snafu(display(
        "Cannot perform command - {} takes {} argument(s) but {} were given",
        operation,
        expected,
        found
    ))]
    WrongArity {
        operation: String,
        expected: usize,
        found: usize,
    },
}
