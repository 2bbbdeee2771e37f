//! Line-oriented command interpreter driving a [`crate::namespace::NamespaceTree`].

mod command;
mod interpreter;

pub use command::Command;
pub use interpreter::{Interpreter, InterpreterError};
