//! Output redirection to a file.

use crate::commands::{self, ExecArgs};
use crate::error::{self, ChildAction, ChildFailure};
use crate::processes::ChildProcess;
use crate::signals::{ChildRole, SignalPolicy};
use crate::sys;

/// Runs the tokens before the `>` that precedes `target_path_index`, with standard output
/// sent to the file named by the token at `target_path_index`, and blocks until it
/// terminates. The file is created if absent and truncated if present.
pub(crate) fn run_redirect<S: AsRef<str>>(
    signals: &SignalPolicy,
    tokens: &[S],
    target_path_index: usize,
) -> Result<(), error::Error> {
    let command = target_path_index
        .checked_sub(1)
        .and_then(|operator_index| tokens.get(..operator_index))
        .ok_or(error::Error::MissingCommand)?;
    let target = tokens
        .get(target_path_index)
        .ok_or(error::Error::MissingCommand)?;

    let args = ExecArgs::new(command)?;
    let target = commands::to_c_string(target.as_ref())?;

    let child = ChildProcess::spawn(|| {
        signals.prepare_child(ChildRole::Foreground)?;

        let file = sys::fd::open_truncated(&target, sys::fd::REDIRECT_CREATE_MODE)
            .map_err(|errno| ChildFailure::new(ChildAction::Open, target.to_bytes(), errno))?;
        sys::fd::duplicate_onto(&file, sys::fd::STDOUT)
            .map_err(|errno| ChildFailure::new(ChildAction::Duplicate, target.to_bytes(), errno))?;
        drop(file);

        args.exec()
    })?;

    child.wait()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn run(tokens: &[&str]) -> Result<(), error::Error> {
        run_redirect(&SignalPolicy::new(), tokens, tokens.len() - 1)
    }

    #[test]
    fn creates_target_with_command_output() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        let out_str = out.display().to_string();

        run(&["echo", "hi", ">", out_str.as_str()])?;

        assert_eq!(std::fs::read_to_string(&out)?, "hi\n");
        Ok(())
    }

    #[test]
    fn truncates_existing_target() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("out.txt");
        std::fs::write(&out, "previous contents that are much longer\n")?;
        let out_str = out.display().to_string();

        run(&["printf", "%s", "x", ">", out_str.as_str()])?;

        assert_eq!(std::fs::read_to_string(&out)?, "x");
        Ok(())
    }

    #[test]
    fn unopenable_target_fails_only_in_child() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let out = dir.path().join("missing-dir").join("out.txt");
        let out_str = out.display().to_string();

        run(&["echo", "hi", ">", out_str.as_str()])?;

        assert!(!out.exists());
        Ok(())
    }

    #[test]
    fn nul_in_target_is_rejected() {
        assert!(matches!(
            run(&["echo", "hi", ">", "bad\0path"]),
            Err(error::Error::InvalidArgument(_))
        ));
    }
}
