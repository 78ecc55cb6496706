//! Batch observer trait for progress reporting and data collection.

use rat_core::{Point, TrajectoryId};

use crate::Trajectory;

/// Callbacks invoked by [`Batch::generate`][crate::Batch::generate].
///
/// All methods have default no-op implementations so implementors only need to
/// override what they care about.
///
/// Callbacks always arrive in trajectory-id order, one trajectory at a time,
/// even when the batch was generated in parallel.
///
/// # Example: progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { every: u32 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_trajectory_end(&mut self, t: &Trajectory) {
///         if t.id.0 % self.every == 0 {
///             println!("{}: {:.2} m", t.id, t.path_length());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called before the steps of a trajectory, with its start pose.
    fn on_trajectory_start(&mut self, _id: TrajectoryId, _start: Point, _heading: f64) {}

    /// Called once per step (`step` counts from 1).
    fn on_step(&mut self, _id: TrajectoryId, _step: usize, _position: Point, _heading: f64) {}

    /// Called with the complete trajectory after its last step.
    fn on_trajectory_end(&mut self, _trajectory: &Trajectory) {}

    /// Called once after every trajectory of the batch has been reported.
    fn on_batch_end(&mut self, _trajectories: &[Trajectory]) {}
}

/// A [`SimObserver`] that does nothing.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}

/// Replay one finished trajectory through `observer`.
pub(crate) fn notify<O: SimObserver>(observer: &mut O, trajectory: &Trajectory) {
    let id = trajectory.id;
    let samples = trajectory.positions.iter().zip(&trajectory.headings);
    for (step, (&position, &heading)) in samples.enumerate() {
        if step == 0 {
            observer.on_trajectory_start(id, position, heading);
        } else {
            observer.on_step(id, step, position, heading);
        }
    }
    observer.on_trajectory_end(trajectory);
}
