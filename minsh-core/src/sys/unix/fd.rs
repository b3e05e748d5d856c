//! File descriptor utilities.

use std::ffi::CStr;
use std::os::fd::{AsFd, AsRawFd, FromRawFd, OwnedFd, RawFd};

use nix::errno::Errno;

/// Descriptor number of standard input.
pub(crate) const STDIN: RawFd = nix::libc::STDIN_FILENO;
/// Descriptor number of standard output.
pub(crate) const STDOUT: RawFd = nix::libc::STDOUT_FILENO;

/// Creation mode for redirection targets, before the umask is applied.
pub(crate) const REDIRECT_CREATE_MODE: nix::libc::mode_t = 0o777;

/// Creates an anonymous pipe, returning its read end and write end. Where the platform
/// allows it both ends are close-on-exec; duplicating an end onto a standard stream yields
/// a descriptor without that flag.
pub(crate) fn pipe() -> Result<(OwnedFd, OwnedFd), Errno> {
    #[cfg(any(target_os = "linux", target_os = "android", target_os = "freebsd"))]
    {
        nix::unistd::pipe2(nix::fcntl::OFlag::O_CLOEXEC)
    }
    #[cfg(not(any(target_os = "linux", target_os = "android", target_os = "freebsd")))]
    {
        nix::unistd::pipe()
    }
}

/// Makes descriptor `target` refer to the same open file description as `fd`.
pub(crate) fn duplicate_onto(fd: impl AsFd, target: RawFd) -> Result<(), Errno> {
    let source = fd.as_fd().as_raw_fd();

    // SAFETY:
    // dup2 only rewrites an entry in this process's descriptor table. `source` is borrowed
    // from a live descriptor for the duration of the call.
    let result = unsafe { nix::libc::dup2(source, target) };
    Errno::result(result).map(drop)
}

/// Opens `path` write-only, creating it if absent and truncating it if present.
pub(crate) fn open_truncated(path: &CStr, mode: nix::libc::mode_t) -> Result<OwnedFd, Errno> {
    let flags = nix::libc::O_WRONLY | nix::libc::O_CREAT | nix::libc::O_TRUNC;

    // SAFETY:
    // `path` is a valid NUL-terminated string that outlives the call.
    let raw_fd = unsafe { nix::libc::open(path.as_ptr(), flags, nix::libc::c_uint::from(mode)) };
    let raw_fd = Errno::result(raw_fd)?;

    // SAFETY:
    // `open` just returned this descriptor; nothing else owns it.
    Ok(unsafe { OwnedFd::from_raw_fd(raw_fd) })
}

/// Closes the descriptor number held by `fd` without consuming the owner.
///
/// Only for use in a forked child that is about to exec or `_exit`: the owner's destructor
/// never runs there, so the descriptor is not closed twice.
pub(crate) fn close_in_child(fd: &impl AsRawFd) {
    // SAFETY:
    // Closing a descriptor number has no memory-safety impact; see above for why the owner
    // never observes the closed descriptor.
    let _ = unsafe { nix::libc::close(fd.as_raw_fd()) };
}

/// Writes each of `parts` to standard error. Neither allocates nor takes the standard
/// error lock, so it is usable in a forked child.
pub(crate) fn write_stderr(parts: &[&[u8]]) {
    let stderr = std::io::stderr();
    for part in parts {
        let _ = nix::unistd::write(stderr.as_fd(), part);
    }
}
