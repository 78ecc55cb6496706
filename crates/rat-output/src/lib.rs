//! `rat-output` — trajectory output writers for the ratsim simulator.
//!
//! | Backend | Files created                                              |
//! |---------|------------------------------------------------------------|
//! | CSV     | `trajectory_steps.csv`, `trajectory_summaries.csv`         |
//!
//! Writers implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `rat_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use rat_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output")).unwrap();
//! let mut obs = SimOutputObserver::new(writer);
//! batch.generate(&arena, &mut obs).unwrap();
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{StepRow, SummaryRow};
pub use writer::OutputWriter;
