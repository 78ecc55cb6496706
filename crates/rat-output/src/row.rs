//! Plain data row types written by output backends.

use rat_sim::Trajectory;

/// One sample of one trajectory.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepRow {
    pub trajectory_id: u32,
    /// 0 is the start pose.
    pub step:          u32,
    pub x:             f64,
    pub y:             f64,
    pub vx:            f64,
    pub vy:            f64,
    pub heading:       f64,
    pub speed:         f64,
    pub turn:          f64,
}

impl StepRow {
    /// All rows of `trajectory`, in step order.
    pub fn from_trajectory(trajectory: &Trajectory) -> Vec<StepRow> {
        (0..trajectory.len())
            .map(|i| StepRow {
                trajectory_id: trajectory.id.0,
                step:          i as u32,
                x:             trajectory.positions[i].x,
                y:             trajectory.positions[i].y,
                vx:            trajectory.velocities[i].x,
                vy:            trajectory.velocities[i].y,
                heading:       trajectory.headings[i],
                speed:         trajectory.speeds[i],
                turn:          trajectory.turns[i],
            })
            .collect()
    }
}

/// Whole-trajectory statistics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SummaryRow {
    pub trajectory_id: u32,
    pub steps:         u32,
    pub path_length:   f64,
    pub mean_speed:    f64,
}

impl From<&Trajectory> for SummaryRow {
    fn from(t: &Trajectory) -> Self {
        SummaryRow {
            trajectory_id: t.id.0,
            steps:         t.steps() as u32,
            path_length:   t.path_length(),
            mean_speed:    t.mean_speed(),
        }
    }
}
