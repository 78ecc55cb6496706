//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `trajectory_steps.csv`
//! - `trajectory_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, StepRow, SummaryRow};

/// Writes trajectories to two CSV files.
pub struct CsvWriter {
    steps:     Writer<File>,
    summaries: Writer<File>,
}

impl CsvWriter {
    /// Create the two CSV files in `dir` (which must exist) and write the
    /// header rows.  Existing files are truncated.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut steps = Writer::from_path(dir.join("trajectory_steps.csv"))?;
        steps.write_record([
            "trajectory_id", "step", "x", "y", "vx", "vy", "heading", "speed", "turn",
        ])?;

        let mut summaries = Writer::from_path(dir.join("trajectory_summaries.csv"))?;
        summaries.write_record(["trajectory_id", "steps", "path_length", "mean_speed"])?;

        Ok(Self { steps, summaries })
    }
}

impl OutputWriter for CsvWriter {
    fn write_steps(&mut self, rows: &[StepRow]) -> OutputResult<()> {
        for row in rows {
            self.steps.write_record(&[
                row.trajectory_id.to_string(),
                row.step.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.vx.to_string(),
                row.vy.to_string(),
                row.heading.to_string(),
                row.speed.to_string(),
                row.turn.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_summary(&mut self, row: &SummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.trajectory_id.to_string(),
            row.steps.to_string(),
            row.path_length.to_string(),
            row.mean_speed.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        self.steps.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
