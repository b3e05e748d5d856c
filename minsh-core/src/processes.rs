//! Process management

use std::convert::Infallible;

use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::WaitStatus;

use crate::error::{self, ChildFailure};
use crate::sys::process::ProcessId;
use crate::{sys, trace_categories};

/// Tracks a spawned child until it is reaped or deliberately released.
#[derive(Debug)]
#[must_use]
pub(crate) struct ChildProcess {
    pid: ProcessId,
}

/// What waiting for a child observed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum WaitOutcome {
    /// The child exited with the given status.
    Exited(i32),
    /// The child was terminated by the given signal.
    Signaled(Signal),
    /// The wait reported that the child is not waitable (already reclaimed, e.g. because
    /// child-termination notifications are ignored) or was interrupted.
    Untracked(Errno),
}

impl ChildProcess {
    /// Spawns a child that runs `child_main`; see [`sys::process::spawn`].
    pub(crate) fn spawn<'a, F>(child_main: F) -> Result<Self, error::Error>
    where
        F: FnOnce() -> Result<Infallible, ChildFailure<'a>>,
    {
        let pid = sys::process::spawn(child_main)?;
        tracing::debug!(target: trace_categories::JOBS, "spawned child {pid}");
        Ok(Self { pid })
    }

    /// Blocks until the process terminates.
    pub(crate) fn wait(self) -> Result<WaitOutcome, error::Error> {
        let outcome = loop {
            match sys::process::wait_for(self.pid) {
                Ok(WaitStatus::Exited(_, code)) => break WaitOutcome::Exited(code),
                Ok(WaitStatus::Signaled(_, signal, _)) => break WaitOutcome::Signaled(signal),
                Ok(_) => (),
                Err(errno) if is_tolerated_wait_error(errno) => {
                    break WaitOutcome::Untracked(errno);
                }
                Err(errno) => return Err(error::Error::WaitFailure(errno)),
            }
        };

        tracing::debug!(target: trace_categories::JOBS, "child {}: {outcome:?}", self.pid);
        Ok(outcome)
    }

    /// Releases the process without waiting for it. Its exit status is left to the
    /// platform to reclaim.
    pub(crate) fn detach(self) {
        tracing::debug!(target: trace_categories::JOBS, "child {} left running", self.pid);
    }
}

/// "No such child" and "interrupted" are treated as a completed wait.
const fn is_tolerated_wait_error(errno: Errno) -> bool {
    matches!(errno, Errno::ECHILD | Errno::EINTR)
}
