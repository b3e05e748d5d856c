pub(crate) mod fd;
pub(crate) mod process;
pub(crate) mod signal;
