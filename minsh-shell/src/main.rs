//! Implements the command-line interface for the `minsh` interpreter.

/// Main entry point for the `minsh` interpreter.
fn main() {
    minsh_shell::entry::run();
}
