//! Signal disposition policy for the interpreter and the children it spawns.

use nix::sys::signal::Signal;

use crate::error::{self, ChildAction, ChildFailure};
use crate::{sys, trace_categories};

/// How a spawned child relates to the interpreter's controlling terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum ChildRole {
    /// Runs while the interpreter waits; must die on an interactive interrupt.
    Foreground,
    /// Runs unwaited; keeps whatever interrupt disposition it inherited.
    Background,
}

/// Process-wide signal dispositions of the interpreter.
///
/// Once installed, the interpreter ignores child-termination notifications, so that
/// background children are reclaimed by the platform without being waited for, and ignores
/// the interactive interrupt, so that an interrupt typed at the terminal does not kill the
/// interpreter. Every spawn path calls back into the policy in the child to restore the
/// dispositions the command it runs should see.
#[derive(Clone, Debug, Default)]
pub struct SignalPolicy {
    installed: bool,
}

impl SignalPolicy {
    /// Returns a policy that has not yet changed any disposition.
    pub const fn new() -> Self {
        Self { installed: false }
    }

    /// Configures the calling process's dispositions. Installing more than once is harmless.
    pub fn install(&mut self) -> Result<(), error::Error> {
        sys::signal::ignore(Signal::SIGCHLD).map_err(error::Error::SignalPolicyFailure)?;
        sys::signal::ignore(Signal::SIGINT).map_err(error::Error::SignalPolicyFailure)?;

        tracing::debug!(target: trace_categories::SIGNALS, "ignoring SIGCHLD and SIGINT");

        self.installed = true;
        Ok(())
    }

    /// Returns whether [`Self::install`] has succeeded.
    pub const fn is_installed(&self) -> bool {
        self.installed
    }

    /// Child side: restores the dispositions a child in `role` needs before exec.
    ///
    /// An ignored disposition survives exec, so SIGCHLD is always reset. SIGINT is reset for
    /// foreground children only; background children stay immune to terminal interrupts.
    #[expect(clippy::unused_self)]
    pub(crate) fn prepare_child(&self, role: ChildRole) -> Result<(), ChildFailure<'static>> {
        reset(Signal::SIGCHLD, b"SIGCHLD")?;
        if role == ChildRole::Foreground {
            reset(Signal::SIGINT, b"SIGINT")?;
        }
        Ok(())
    }
}

fn reset(signal: Signal, name: &'static [u8]) -> Result<(), ChildFailure<'static>> {
    sys::signal::reset_to_default(signal)
        .map_err(|errno| ChildFailure::new(ChildAction::SignalReset, name, errno))
}
