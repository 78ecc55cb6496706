//! The `OutputWriter` trait implemented by all backend writers.

use crate::{OutputResult, StepRow, SummaryRow};

/// Trait implemented by trajectory writers.
///
/// Errors are stored by [`SimOutputObserver`](crate::SimOutputObserver) and
/// retrieved with its `take_error`.
pub trait OutputWriter {
    /// Write the per-step rows of one trajectory.
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()>;

    /// Write one trajectory summary row.
    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()>;

    /// Flush all underlying file handles.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
