//! A finished trajectory and the routine that produces one.

use rat_agent::AgentBuilder;
use rat_core::{AgentId, MotionConfig, Point, TrajectoryId};
use rat_spatial::Environment;

use crate::{SimError, SimResult};

/// One simulated run: `steps() + 1` aligned samples, index 0 being the
/// start pose.
#[derive(Clone, Debug, PartialEq)]
pub struct Trajectory {
    pub id: TrajectoryId,
    /// Integration step the trajectory was generated with.
    pub dt: f64,
    pub positions: Vec<Point>,
    pub velocities: Vec<Point>,
    pub headings: Vec<f64>,
    pub speeds: Vec<f64>,
    pub turns: Vec<f64>,
}

impl Trajectory {
    /// Number of samples (`steps + 1`).
    pub fn len(&self) -> usize {
        self.headings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headings.is_empty()
    }

    pub fn steps(&self) -> usize {
        self.len().saturating_sub(1)
    }

    /// Total distance travelled.
    pub fn path_length(&self) -> f64 {
        self.positions.windows(2).map(|w| w[0].distance(w[1])).sum()
    }

    /// Average speed over the whole run, in distance per second.
    pub fn mean_speed(&self) -> f64 {
        match self.steps() {
            0 => 0.0,
            n => self.path_length() / (n as f64 * self.dt),
        }
    }
}

/// Build the agent for trajectory `id`, walk `seq_len` steps, and collect
/// its histories.
///
/// The agent's RNG is seeded from `(seed, id)` alone, so the result does not
/// depend on which thread runs it or in what order.
pub(crate) fn generate_one<E: Environment>(
    env: &E,
    motion: &MotionConfig,
    seed: u64,
    id: TrajectoryId,
    seq_len: usize,
) -> SimResult<Trajectory> {
    let wrap = |source| SimError::Agent { trajectory: id.0, source };

    let mut agent = AgentBuilder::new(motion.clone())
        .id(AgentId(id.0))
        .seed(seed)
        .build(env)
        .map_err(wrap)?;
    for _ in 0..seq_len {
        agent.step(env).map_err(wrap)?;
    }

    Ok(Trajectory {
        id,
        dt: motion.dt,
        velocities: agent.velocities().to_vec(),
        positions: agent.positions().to_vec(),
        headings: agent.headings().to_vec(),
        speeds: agent.speeds().to_vec(),
        turns: agent.turns().to_vec(),
    })
}
