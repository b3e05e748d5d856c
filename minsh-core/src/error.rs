use nix::errno::Errno;

use crate::sys;

/// Monolithic error type for failures observed by the interpreter itself.
///
/// Failures that happen inside a spawned child before its image is replaced are not
/// represented here; see [`ChildFailure`].
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The process-creation primitive itself failed.
    #[error("failed to create child process: {0}")]
    SpawnFailure(Errno),

    /// An anonymous pipe could not be created.
    #[error("failed to create pipe: {0}")]
    PipeCreationFailure(Errno),

    /// Waiting for a child failed for a reason other than the child already being gone or
    /// the wait being interrupted.
    #[error("failed to wait for child process: {0}")]
    WaitFailure(Errno),

    /// The interpreter's own signal dispositions could not be configured.
    #[error("failed to configure signal disposition: {0}")]
    SignalPolicyFailure(Errno),

    /// A command, or one side of a pipeline, has no tokens to execute.
    #[error("missing command")]
    MissingCommand,

    /// A token cannot be handed to the program being executed.
    #[error("argument contains an embedded NUL byte: {0:?}")]
    InvalidArgument(String),
}

/// The step a child was performing when it failed before image replacement.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChildAction {
    /// Restoring a signal disposition to its default.
    SignalReset,
    /// Duplicating a descriptor onto a standard stream.
    Duplicate,
    /// Opening the redirection target.
    Open,
    /// Replacing the process image.
    Exec,
}

impl ChildAction {
    const fn describe(self) -> &'static str {
        match self {
            Self::SignalReset => "signal reset",
            Self::Duplicate => "dup2",
            Self::Open => "open",
            Self::Exec => "exec",
        }
    }
}

/// A failure inside a forked child. Reported by the child and never propagated back to the
/// parent. Holds only borrowed data so that reporting it does not allocate.
#[derive(Debug)]
pub(crate) struct ChildFailure<'a> {
    action: ChildAction,
    subject: &'a [u8],
    errno: Errno,
}

impl<'a> ChildFailure<'a> {
    pub(crate) const fn new(action: ChildAction, subject: &'a [u8], errno: Errno) -> Self {
        Self {
            action,
            subject,
            errno,
        }
    }

    #[cfg(test)]
    pub(crate) const fn action(&self) -> ChildAction {
        self.action
    }

    /// Writes `<subject>: <action> failed: <reason>` to standard error.
    pub(crate) fn report(&self) {
        sys::fd::write_stderr(&[
            self.subject,
            b": ",
            self.action.describe().as_bytes(),
            b" failed: ",
            self.errno.desc().as_bytes(),
            b"\n",
        ]);
    }
}
