use std::io::Write;

use crate::shape::CommandShape;
use crate::signals::SignalPolicy;
use crate::{error, launcher, pipeline, redirect, trace_categories};

/// Outcome of dispatching one command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchStatus {
    /// The command was started (and, unless it runs in the background, waited for).
    Success,
    /// The interpreter failed to run the command; the failure was reported on standard error.
    Failure,
}

impl DispatchStatus {
    /// Returns whether the dispatch succeeded.
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// Returns the status as a process exit code.
    pub const fn exit_code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::Failure => 1,
        }
    }
}

/// The command-dispatch core. Receives tokenized command lines from a caller that owns the
/// read-eval loop, and runs each one to completion (or into the background).
#[derive(Clone, Debug, Default)]
pub struct Interpreter {
    signals: SignalPolicy,
}

impl Interpreter {
    /// Returns an interpreter whose signal policy has not been installed yet.
    pub const fn new() -> Self {
        Self {
            signals: SignalPolicy::new(),
        }
    }

    /// Returns the interpreter's signal policy.
    pub const fn signal_policy(&self) -> &SignalPolicy {
        &self.signals
    }

    /// Prepares the calling process to act as the interpreter. Must be called once, before
    /// the first command is dispatched.
    pub fn on_startup(&mut self) -> Result<(), error::Error> {
        self.signals.install()
    }

    /// Runs one command line, reporting any failure on standard error. Never terminates the
    /// calling process.
    ///
    /// # Arguments
    ///
    /// * `tokens` - The tokens of the command line; the slice length is the token count.
    pub fn dispatch<S: AsRef<str>>(&self, tokens: &[S]) -> DispatchStatus {
        match self.try_dispatch(tokens) {
            Ok(()) => DispatchStatus::Success,
            Err(err) => {
                let _ = writeln!(std::io::stderr(), "error: {err}");
                DispatchStatus::Failure
            }
        }
    }

    /// Runs one command line, returning any failure to the caller instead of reporting it.
    ///
    /// An empty command line is a successful no-op. Failures inside a child before its
    /// program starts (missing program, unopenable redirection target) are reported by the
    /// child and do not count as failures here. A `|` with nothing on one side is rejected
    /// with [`error::Error::MissingCommand`] before anything is spawned.
    pub fn try_dispatch<S: AsRef<str>>(&self, tokens: &[S]) -> Result<(), error::Error> {
        if tokens.is_empty() {
            return Ok(());
        }

        let shape = CommandShape::classify(tokens);
        tracing::debug!(
            target: trace_categories::COMMANDS,
            "dispatching {shape:?}: {:?}",
            tokens.iter().map(|t| t.as_ref()).collect::<Vec<&str>>()
        );

        match shape {
            CommandShape::Simple => launcher::run_foreground(&self.signals, tokens),
            CommandShape::Background => launcher::run_background(&self.signals, tokens),
            CommandShape::Pipeline { split_index } => {
                pipeline::run_pipeline(&self.signals, tokens, split_index)
            }
            CommandShape::Redirect { target_path_index } => {
                redirect::run_redirect(&self.signals, tokens, target_path_index)
            }
        }
    }

    /// Releases the interpreter. No cleanup is required; returns the success exit code.
    pub const fn on_shutdown(&mut self) -> u8 {
        0
    }
}
