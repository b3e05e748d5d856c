//! Argument vectors handed to image replacement.

use std::convert::Infallible;
use std::ffi::{CStr, CString};

use crate::error::{self, ChildAction, ChildFailure};
use crate::sys;

/// A command's tokens converted ahead of time into C strings, so that a freshly forked child
/// can exec them without building anything itself.
#[derive(Debug)]
pub(crate) struct ExecArgs {
    argv: Vec<CString>,
}

impl ExecArgs {
    /// Prepares `tokens` for execution. The first token names the program.
    pub(crate) fn new<S: AsRef<str>>(tokens: &[S]) -> Result<Self, error::Error> {
        if tokens.is_empty() {
            return Err(error::Error::MissingCommand);
        }

        let argv = tokens
            .iter()
            .map(|token| to_c_string(token.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { argv })
    }

    /// Returns the name of the program to execute.
    pub(crate) fn program(&self) -> &CStr {
        // `new` rejects empty token lists.
        self.argv.first().map_or(c"", |arg| arg.as_c_str())
    }

    /// Replaces the current process image with this command. Only returns on failure.
    pub(crate) fn exec(&self) -> Result<Infallible, ChildFailure<'_>> {
        let errno = sys::process::replace_image(self.program(), &self.argv);
        Err(ChildFailure::new(
            ChildAction::Exec,
            self.program().to_bytes(),
            errno,
        ))
    }
}

/// Converts a token into a C string, rejecting embedded NUL bytes.
pub(crate) fn to_c_string(token: &str) -> Result<CString, error::Error> {
    CString::new(token).map_err(|_| error::Error::InvalidArgument(token.to_owned()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn program_is_first_token() -> anyhow::Result<()> {
        let args = ExecArgs::new(&["wc", "-l"])?;
        assert_eq!(args.program(), c"wc");
        assert_eq!(args.argv.len(), 2);
        Ok(())
    }

    #[test]
    fn empty_tokens_are_rejected() {
        let tokens: [&str; 0] = [];
        assert!(matches!(
            ExecArgs::new(&tokens),
            Err(error::Error::MissingCommand)
        ));
    }

    #[test]
    fn nul_bytes_are_rejected() {
        let result = ExecArgs::new(&["echo", "a\0b"]);
        assert!(matches!(result, Err(error::Error::InvalidArgument(arg)) if arg == "a\0b"));
    }

    #[test]
    fn exec_of_missing_program_returns_failure() -> anyhow::Result<()> {
        let args = ExecArgs::new(&["/nonexistent/minsh-test/missing-program"])?;
        let Err(failure) = args.exec();
        assert_eq!(failure.action(), ChildAction::Exec);
        Ok(())
    }
}
