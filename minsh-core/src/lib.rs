//! Command-dispatch core of the minsh interpreter. Takes a single pre-tokenized command line,
//! classifies its shape and runs it as a foreground command, a background command, a two-stage
//! pipeline, or a command whose standard output is redirected to a file.
//!
//! The caller owns the read-eval loop: it calls [`Interpreter::on_startup`] once, then
//! [`Interpreter::dispatch`] for every line, and finally [`Interpreter::on_shutdown`].

#[cfg(not(unix))]
compile_error!("minsh-core relies on fork/exec and only supports Unix-like platforms");

mod commands;
mod error;
mod interp;
mod launcher;
mod pipeline;
mod processes;
mod redirect;
mod shape;
mod signals;
mod sys;
pub mod trace_categories;

pub use error::Error;
pub use interp::{DispatchStatus, Interpreter};
pub use shape::{BACKGROUND_OPERATOR, CommandShape, PIPE_OPERATOR, REDIRECT_OPERATOR};
pub use signals::SignalPolicy;
