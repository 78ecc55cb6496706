//! Fluent builder for a [`Batch`] of independent trajectories.

use rat_core::{SimConfig, TrajectoryId};
use rat_spatial::Environment;

use crate::observer::notify;
use crate::trajectory::generate_one;
use crate::{SimError, SimObserver, SimResult, Trajectory};

/// Fluent builder for [`Batch`].
///
/// # Optional inputs (have defaults)
///
/// | Method           | Default               |
/// |------------------|-----------------------|
/// | `.batch_size(n)` | `config.batch_size`   |
/// | `.seq_len(n)`    | `config.seq_len`      |
/// | `.first_id(id)`  | `TrajectoryId(0)`     |
///
/// # Example
///
/// ```rust,ignore
/// let batch = BatchBuilder::new(config).batch_size(256).build()?;
/// let trajectories = batch.generate(&arena, &mut NoopObserver)?;
/// ```
pub struct BatchBuilder {
    config: SimConfig,
    first_id: u32,
}

impl BatchBuilder {
    pub fn new(config: SimConfig) -> Self {
        Self { config, first_id: 0 }
    }

    pub fn batch_size(mut self, n: usize) -> Self {
        self.config.batch_size = n;
        self
    }

    pub fn seq_len(mut self, n: usize) -> Self {
        self.config.seq_len = n;
        self
    }

    /// Id of the first trajectory.  Consecutive batches with disjoint id
    /// ranges never repeat a trajectory.
    pub fn first_id(mut self, id: TrajectoryId) -> Self {
        self.first_id = id.0;
        self
    }

    /// Validate the configuration and return a ready-to-run [`Batch`].
    pub fn build(self) -> SimResult<Batch> {
        self.config.validate()?;
        let last = self.first_id as u64 + self.config.batch_size as u64;
        if last > u32::MAX as u64 {
            return Err(SimError::Config(format!(
                "trajectory ids {}..{last} overflow u32",
                self.first_id
            )));
        }
        Ok(Batch { config: self.config, first_id: self.first_id })
    }
}

// ── Batch ─────────────────────────────────────────────────────────────────────

/// A validated batch job.  Reusable: every call to
/// [`generate`](Self::generate) returns the same trajectories.
pub struct Batch {
    config: SimConfig,
    first_id: u32,
}

impl Batch {
    /// Generate `batch_size` trajectories in `env`, then report them to
    /// `observer` in id order.
    ///
    /// With the `parallel` Cargo feature, trajectories are generated on
    /// Rayon's thread pool (or a dedicated pool when `num_threads` is set).
    pub fn generate<E: Environment, O: SimObserver>(
        &self,
        env: &E,
        observer: &mut O,
    ) -> SimResult<Vec<Trajectory>> {
        let trajectories = self.generate_all(env)?;
        for trajectory in &trajectories {
            notify(observer, trajectory);
        }
        observer.on_batch_end(&trajectories);
        Ok(trajectories)
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn batch_size(&self) -> usize {
        self.config.batch_size
    }

    pub fn seq_len(&self) -> usize {
        self.config.seq_len
    }

    fn ids(&self) -> impl Iterator<Item = TrajectoryId> + use<> {
        let first = self.first_id;
        (0..self.config.batch_size as u32).map(move |i| TrajectoryId(first + i))
    }

    #[cfg(not(feature = "parallel"))]
    fn generate_all<E: Environment>(&self, env: &E) -> SimResult<Vec<Trajectory>> {
        let c = &self.config;
        self.ids()
            .map(|id| generate_one(env, &c.motion, c.seed, id, c.seq_len))
            .collect()
    }

    #[cfg(feature = "parallel")]
    fn generate_all<E: Environment>(&self, env: &E) -> SimResult<Vec<Trajectory>> {
        use rayon::prelude::*;

        let c = &self.config;
        let ids: Vec<TrajectoryId> = self.ids().collect();
        let run = || {
            ids.par_iter()
                .map(|&id| generate_one(env, &c.motion, c.seed, id, c.seq_len))
                .collect::<SimResult<Vec<_>>>()
        };

        match c.num_threads {
            Some(n) => rayon::ThreadPoolBuilder::new()
                .num_threads(n)
                .build()
                .map_err(|e| SimError::Config(e.to_string()))?
                .install(run),
            None => run(),
        }
    }
}
