use nix::errno::Errno;
use nix::sys::signal::{SaFlags, SigAction, SigHandler, SigSet, Signal};

/// Sets the disposition of `signal` to ignored for the calling process.
pub(crate) fn ignore(signal: Signal) -> Result<(), Errno> {
    set_disposition(signal, SigHandler::SigIgn)
}

/// Restores the platform default disposition of `signal` for the calling process.
pub(crate) fn reset_to_default(signal: Signal) -> Result<(), Errno> {
    set_disposition(signal, SigHandler::SigDfl)
}

fn set_disposition(signal: Signal, handler: SigHandler) -> Result<(), Errno> {
    let action = SigAction::new(handler, SaFlags::empty(), SigSet::empty());

    // SAFETY:
    // Only SIG_IGN or SIG_DFL are installed here; no handler function runs in signal context.
    unsafe { nix::sys::signal::sigaction(signal, &action) }?;
    Ok(())
}
