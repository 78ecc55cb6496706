//! `SimOutputObserver<W>` bridges `SimObserver` to an `OutputWriter`.

use rat_sim::{SimObserver, Trajectory};

use crate::row::{StepRow, SummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`SimObserver`] that writes every finished trajectory to an
/// [`OutputWriter`].
///
/// Errors from the writer are stored internally because `SimObserver` methods
/// have no return value.  After `generate` returns, check for errors with
/// [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    written:    usize,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, written: 0, last_error: None }
    }

    /// Take the stored write error (if any).  Returns `None` if all writes
    /// succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Trajectories written so far.
    pub fn written(&self) -> usize {
        self.written
    }

    /// Unwrap the inner writer.
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_trajectory_end(&mut self, trajectory: &Trajectory) {
        let result = self
            .writer
            .write_steps(&StepRow::from_trajectory(trajectory))
            .and_then(|()| self.writer.write_summary(&SummaryRow::from(trajectory)));
        if result.is_ok() {
            self.written += 1;
        }
        self.store_err(result);
    }

    fn on_batch_end(&mut self, _trajectories: &[Trajectory]) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
