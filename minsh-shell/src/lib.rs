//! Driver for the minsh interpreter: argument parsing, configuration, logging and the
//! read-eval loop that feeds tokenized lines to [`minsh_core::Interpreter`].

pub mod args;
pub mod config;
pub mod entry;
mod error;
pub mod events;
pub mod interactive;
pub mod productinfo;
pub mod tokenizer;

pub use error::ShellError;
