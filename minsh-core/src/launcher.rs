//! Launching a single command in the foreground or background.

use crate::commands::ExecArgs;
use crate::error;
use crate::processes::ChildProcess;
use crate::signals::{ChildRole, SignalPolicy};

/// Runs `tokens` as one command and blocks until it terminates.
pub(crate) fn run_foreground<S: AsRef<str>>(
    signals: &SignalPolicy,
    tokens: &[S],
) -> Result<(), error::Error> {
    let args = ExecArgs::new(tokens)?;

    let child = ChildProcess::spawn(|| {
        signals.prepare_child(ChildRole::Foreground)?;
        args.exec()
    })?;

    child.wait()?;
    Ok(())
}

/// Runs `tokens` without their trailing `&` token and returns as soon as the child exists.
pub(crate) fn run_background<S: AsRef<str>>(
    signals: &SignalPolicy,
    tokens: &[S],
) -> Result<(), error::Error> {
    let (_, command) = tokens.split_last().ok_or(error::Error::MissingCommand)?;
    let args = ExecArgs::new(command)?;

    let child = ChildProcess::spawn(|| {
        signals.prepare_child(ChildRole::Background)?;
        args.exec()
    })?;

    child.detach();
    Ok(())
}
