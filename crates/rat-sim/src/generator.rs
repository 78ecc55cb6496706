//! Endless stream of trajectories from one environment.

use rat_core::{MotionConfig, SimConfig, TrajectoryId};
use rat_spatial::Environment;

use crate::trajectory::generate_one;
use crate::{SimResult, Trajectory};

/// Produces trajectories one at a time, each from a freshly reset agent with
/// a random start pose.
///
/// Trajectory `k` (counting from 0) is identical to trajectory `k` of a
/// [`Batch`](crate::Batch) built from the same config.
///
/// ```rust
/// use rat_core::{Point, SimConfig};
/// use rat_sim::TrajectoryGenerator;
/// use rat_spatial::Arena;
///
/// let config = SimConfig::default();
/// let arena = Arena::rectangle(Point::ZERO, Point::new(2.2, 2.2), config.soft_boundary).unwrap();
/// let mut traj = TrajectoryGenerator::new(&arena, &config).unwrap();
/// let first = traj.next_trajectory().unwrap();
/// assert_eq!(first.len(), config.seq_len + 1);
/// ```
pub struct TrajectoryGenerator<'e, E: Environment> {
    env: &'e E,
    motion: MotionConfig,
    seed: u64,
    seq_len: usize,
    next_id: u32,
}

impl<'e, E: Environment> TrajectoryGenerator<'e, E> {
    /// Validates `config` up front so a bad boundary mode fails here rather
    /// than on the first trajectory.
    pub fn new(env: &'e E, config: &SimConfig) -> SimResult<Self> {
        config.validate()?;
        Ok(Self {
            env,
            motion: config.motion.clone(),
            seed: config.seed,
            seq_len: config.seq_len,
            next_id: 0,
        })
    }

    /// Generate the next trajectory.
    pub fn next_trajectory(&mut self) -> SimResult<Trajectory> {
        let id = TrajectoryId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        generate_one(self.env, &self.motion, self.seed, id, self.seq_len)
    }

    pub fn seq_len(&self) -> usize {
        self.seq_len
    }
}

impl<E: Environment> Iterator for TrajectoryGenerator<'_, E> {
    type Item = SimResult<Trajectory>;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_trajectory())
    }
}
