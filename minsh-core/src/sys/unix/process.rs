//! Process creation, image replacement and reaping.

use std::convert::Infallible;
use std::ffi::{CStr, CString};

use nix::errno::Errno;
use nix::sys::wait::WaitStatus;
use nix::unistd::ForkResult;

use crate::error::{self, ChildFailure};

pub(crate) type ProcessId = nix::unistd::Pid;

/// Exit status of a child that fails before its image is replaced.
pub(crate) const CHILD_SETUP_FAILURE_EXIT_CODE: i32 = 1;

/// Creates a child process.
///
/// `child_main` runs only in the new process. It either replaces the process image, in which
/// case it never returns, or returns the failure that prevented it from doing so; the child
/// then reports that failure and exits. The calling process receives the child's ID.
pub(crate) fn spawn<'a, F>(child_main: F) -> Result<ProcessId, error::Error>
where
    F: FnOnce() -> Result<Infallible, ChildFailure<'a>>,
{
    // SAFETY:
    // In the child, control flow is confined to `child_main` (descriptor and signal setup
    // followed by exec) and then `_exit`; it never returns into the caller.
    match unsafe { nix::unistd::fork() } {
        Ok(ForkResult::Parent { child }) => Ok(child),
        Ok(ForkResult::Child) => {
            let failure = match child_main() {
                Ok(never) => match never {},
                Err(failure) => failure,
            };

            failure.report();
            exit_child(CHILD_SETUP_FAILURE_EXIT_CODE)
        }
        Err(errno) => Err(error::Error::SpawnFailure(errno)),
    }
}

/// Replaces the current process image with `program`, searched for in `PATH`. Returns only
/// on failure.
pub(crate) fn replace_image(program: &CStr, argv: &[CString]) -> Errno {
    match nix::unistd::execvp(program, argv) {
        Ok(never) => match never {},
        Err(errno) => errno,
    }
}

/// Blocks until the child identified by `pid` changes state.
pub(crate) fn wait_for(pid: ProcessId) -> Result<WaitStatus, Errno> {
    nix::sys::wait::waitpid(pid, None)
}

fn exit_child(code: i32) -> ! {
    // SAFETY:
    // `_exit` ends the forked child without running at-exit handlers or flushing stdio
    // buffers inherited from the parent.
    unsafe { nix::libc::_exit(code) }
}
