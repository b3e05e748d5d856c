//! Platform abstraction facilities

#[cfg(unix)]
pub(crate) mod unix;
#[cfg(unix)]
pub(crate) use unix as platform;

pub(crate) use platform::fd;
pub(crate) use platform::process;
pub(crate) use platform::signal;
