//! Fluent builder for a ready-to-step [`Agent`].
//!
//! # Usage
//!
//! ```rust
//! use rat_agent::AgentBuilder;
//! use rat_core::{AgentId, MotionConfig, Point};
//! use rat_spatial::Arena;
//!
//! let arena = Arena::rectangle(Point::ZERO, Point::new(2.2, 2.2), 0.3).unwrap();
//! let mut agent = AgentBuilder::new(MotionConfig::default())
//!     .id(AgentId(7))
//!     .seed(42)
//!     .position(Point::new(1.1, 1.1))
//!     .build(&arena)
//!     .unwrap();
//!
//! agent.step(&arena).unwrap();
//! assert_eq!(agent.positions().len(), 2);
//! ```

use rat_core::{AgentId, AgentRng, MotionConfig, Point};
use rat_spatial::{BoundaryPolicy, Environment};

use crate::{Agent, AgentResult, MotionSampler};

/// Fluent builder for [`Agent`].
///
/// Configuration is validated in [`build`](Self::build), so a bad
/// `boundary_mode` or a non-positive `dt` fails before the first step.
pub struct AgentBuilder {
    config: MotionConfig,
    id: AgentId,
    seed: u64,
    heading: Option<f64>,
    position: Option<Point>,
}

impl AgentBuilder {
    pub fn new(config: MotionConfig) -> Self {
        Self {
            config,
            id: AgentId(0),
            seed: 0,
            heading: None,
            position: None,
        }
    }

    /// Agent id; mixed into the RNG seed.
    pub fn id(mut self, id: AgentId) -> Self {
        self.id = id;
        self
    }

    /// Global seed shared by every agent of a run.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Initial heading.  Drawn uniformly if not set.
    pub fn heading(mut self, heading: f64) -> Self {
        self.heading = Some(heading);
        self
    }

    /// Initial position.  Sampled from the environment if not set.
    pub fn position(mut self, position: Point) -> Self {
        self.position = Some(position);
        self
    }

    /// Validate the configuration and reset the agent into `env`.
    pub fn build<E: Environment>(self, env: &E) -> AgentResult<Agent> {
        let mode = self.config.validate()?;
        let sampler = MotionSampler::new(&self.config)?;
        let rng = AgentRng::new(self.seed, self.id);

        let mut agent = Agent::new(self.id, self.config, BoundaryPolicy::from(mode), sampler, rng);
        agent.reset(env, self.heading, self.position)?;
        Ok(agent)
    }
}
