//! Two-stage pipelines.

use std::os::fd::OwnedFd;

use crate::commands::ExecArgs;
use crate::error::{self, ChildAction, ChildFailure};
use crate::processes::ChildProcess;
use crate::signals::{ChildRole, SignalPolicy};
use crate::{sys, trace_categories};

/// Both ends of an anonymous pipe, as held by the interpreter between spawning the writer
/// and the reader. Dropping it closes both ends.
struct PipeEndpoints {
    reader: OwnedFd,
    writer: OwnedFd,
}

impl PipeEndpoints {
    fn new() -> Result<Self, error::Error> {
        let (reader, writer) = sys::fd::pipe().map_err(error::Error::PipeCreationFailure)?;
        Ok(Self { reader, writer })
    }

    /// Child side: makes the write end the standard output, then closes both originals.
    fn connect_writer(&self) -> Result<(), ChildFailure<'static>> {
        sys::fd::duplicate_onto(&self.writer, sys::fd::STDOUT)
            .map_err(|errno| ChildFailure::new(ChildAction::Duplicate, b"pipe", errno))?;
        self.close_in_child();
        Ok(())
    }

    /// Child side: makes the read end the standard input, then closes both originals.
    fn connect_reader(&self) -> Result<(), ChildFailure<'static>> {
        sys::fd::duplicate_onto(&self.reader, sys::fd::STDIN)
            .map_err(|errno| ChildFailure::new(ChildAction::Duplicate, b"pipe", errno))?;
        self.close_in_child();
        Ok(())
    }

    fn close_in_child(&self) {
        sys::fd::close_in_child(&self.reader);
        sys::fd::close_in_child(&self.writer);
    }
}

/// Runs the tokens before `split_index` with their output piped into the tokens after it,
/// and blocks until both have terminated.
pub(crate) fn run_pipeline<S: AsRef<str>>(
    signals: &SignalPolicy,
    tokens: &[S],
    split_index: usize,
) -> Result<(), error::Error> {
    let (left, right) = split_at_pipe(tokens, split_index)?;
    let writer_args = ExecArgs::new(left)?;
    let reader_args = ExecArgs::new(right)?;

    let pipe = PipeEndpoints::new()?;

    let writer = ChildProcess::spawn(|| {
        signals.prepare_child(ChildRole::Foreground)?;
        pipe.connect_writer()?;
        writer_args.exec()
    })?;

    let reader = ChildProcess::spawn(|| {
        signals.prepare_child(ChildRole::Foreground)?;
        pipe.connect_reader()?;
        reader_args.exec()
    });

    // The interpreter takes part in neither direction. Closing its write end is what lets
    // the reader see end-of-stream.
    drop(pipe);

    let reader = match reader {
        Ok(reader) => reader,
        Err(err) => {
            // With no reader left the writer terminates on its own; reap it before bailing.
            if let Err(wait_err) = writer.wait() {
                tracing::debug!(target: trace_categories::JOBS, "abandoned writer: {wait_err}");
            }
            return Err(err);
        }
    };

    let writer_result = writer.wait();
    let reader_result = reader.wait();

    writer_result?;
    reader_result?;

    Ok(())
}

/// Splits `tokens` around the `|` at `split_index`. Neither side may be empty.
fn split_at_pipe<S>(tokens: &[S], split_index: usize) -> Result<(&[S], &[S]), error::Error> {
    let (left, rest) = tokens
        .split_at_checked(split_index)
        .ok_or(error::Error::MissingCommand)?;
    let (_, right) = rest.split_first().ok_or(error::Error::MissingCommand)?;

    if left.is_empty() || right.is_empty() {
        return Err(error::Error::MissingCommand);
    }

    Ok((left, right))
}
