//! Trace utilities

/// Trace category for command classification and execution.
pub const COMMANDS: &str = "commands";
/// Trace category for spawned children and their reaping.
pub const JOBS: &str = "jobs";
/// Trace category for signal disposition changes.
pub const SIGNALS: &str = "signals";
