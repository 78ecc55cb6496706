//! The `Agent`, a boundary-aware random walker.
//!
//! # Step
//!
//! 1. Draw a raw `(speed, turn)` from the [`MotionSampler`].
//! 2. Let the environment correct it for the current pose
//!    ([`Environment::avoid_walls`]).
//! 3. `heading ← (heading + turn) mod 2π`; append speed, turn and heading.
//!
//! Positions are never stored by `step` itself; they are integrated from
//! the histories by the [`HistoryCache`]s when first read.

use rat_core::{AgentId, AgentRng, MotionConfig, Point, TAU, wrap_angle};
use rat_spatial::{BoundaryPolicy, Environment};

use crate::history::{HistoryCache, velocity};
use crate::{AgentError, AgentResult, MotionSampler};

/// A simulated rat.  Build with [`AgentBuilder`](crate::AgentBuilder).
///
/// All histories have the same length, `steps() + 1`; index 0 is the pose
/// set by the last reset, with zero speed and zero turn.
#[derive(Clone, Debug)]
pub struct Agent {
    id: AgentId,
    config: MotionConfig,
    policy: BoundaryPolicy,
    sampler: MotionSampler,
    rng: AgentRng,

    headings: Vec<f64>,
    speeds: Vec<f64>,
    turns: Vec<f64>,
    start: Point,

    velocities: HistoryCache<Point>,
    positions: HistoryCache<Point>,
}

impl Agent {
    /// Assemble an agent with empty histories.  Callers must `reset` before
    /// stepping; [`AgentBuilder::build`](crate::AgentBuilder::build) does.
    pub(crate) fn new(
        id: AgentId,
        config: MotionConfig,
        policy: BoundaryPolicy,
        sampler: MotionSampler,
        rng: AgentRng,
    ) -> Self {
        Self {
            id,
            config,
            policy,
            sampler,
            rng,
            headings: Vec::new(),
            speeds: Vec::new(),
            turns: Vec::new(),
            start: Point::ZERO,
            velocities: HistoryCache::new(),
            positions: HistoryCache::new(),
        }
    }

    // ── Simulation ────────────────────────────────────────────────────────

    /// Advance one step.  Returns the corrected speed and the new heading.
    pub fn step<E: Environment>(&mut self, env: &E) -> AgentResult<(f64, f64)> {
        let (speed, turn) = self.sampler.sample(&mut self.rng);
        let pos = self.position();
        let heading = self.heading();

        let (speed, turn) = env.avoid_walls(self.policy, pos, heading, speed, turn)?;
        let heading = wrap_angle(heading + turn);

        self.headings.push(heading);
        self.speeds.push(speed);
        self.turns.push(turn);
        Ok((speed, heading))
    }

    /// Truncate every history to its initial entry.
    ///
    /// A missing `heading` is drawn uniformly from `[0, 2π)` and a missing
    /// `position` uniformly from the environment, both from the agent's own
    /// RNG.  An explicit position must lie inside the environment.
    pub fn reset<E: Environment>(
        &mut self,
        env: &E,
        heading: Option<f64>,
        position: Option<Point>,
    ) -> AgentResult<()> {
        let heading = match heading {
            Some(h) => wrap_angle(h),
            None => self.rng.gen_range(0.0..TAU),
        };
        let start = match position {
            Some(p) if env.inside_environment(p) => p,
            Some(p) => return Err(AgentError::OutsideEnvironment(p)),
            None => env
                .sample_uniform(1, &mut self.rng)?
                .pop()
                .ok_or(AgentError::NoStartPosition)?,
        };

        self.headings.clear();
        self.speeds.clear();
        self.turns.clear();
        self.velocities.clear();
        self.positions.clear();

        self.headings.push(heading);
        self.speeds.push(0.0);
        self.turns.push(0.0);
        self.start = start;
        Ok(())
    }

    // ── Derived histories ─────────────────────────────────────────────────

    /// Bring both caches up to the current history length.
    fn sync(&mut self) {
        let (headings, speeds) = (&self.headings, &self.speeds);
        let velocities = self
            .velocities
            .extend_to(headings.len(), |i, _| velocity(headings[i], speeds[i]));

        let start = self.start;
        self.positions.extend_to(velocities.len(), |i, prev| match prev {
            Some(p) => p + velocities[i],
            None => start,
        });
    }

    /// Per-step displacement vectors, `steps() + 1` long.
    pub fn velocities(&mut self) -> &[Point] {
        self.sync();
        self.velocities.as_slice()
    }

    /// Positions, `steps() + 1` long; the first is the start position.
    pub fn positions(&mut self) -> &[Point] {
        self.sync();
        self.positions.as_slice()
    }

    /// Current position.
    pub fn position(&mut self) -> Point {
        self.sync();
        self.positions.last().unwrap_or(self.start)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn config(&self) -> &MotionConfig {
        &self.config
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Position set by the last reset.
    pub fn start(&self) -> Point {
        self.start
    }

    /// Current heading in `[0, 2π)`.
    pub fn heading(&self) -> f64 {
        self.headings.last().copied().unwrap_or(0.0)
    }

    pub fn headings(&self) -> &[f64] {
        &self.headings
    }

    pub fn speeds(&self) -> &[f64] {
        &self.speeds
    }

    pub fn turns(&self) -> &[f64] {
        &self.turns
    }

    /// Steps taken since the last reset.
    pub fn steps(&self) -> usize {
        self.headings.len().saturating_sub(1)
    }
}
