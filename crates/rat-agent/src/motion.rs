//! Stochastic motion draws.
//!
//! Forward speed is Rayleigh distributed with scale `b`; `rand_distr` has no
//! Rayleigh type, but Rayleigh(σ) is exactly Weibull(scale = σ·√2, shape = 2).
//! Rotational velocity is Gaussian `N(mu, turn_angle)`.  Both are multiplied
//! by `dt` to give per-step increments.

use rand::Rng;
use rand_distr::{Distribution, Normal, Weibull};

use rat_core::{CoreError, MotionConfig};

use crate::AgentResult;

/// Draws raw `(speed, turn)` pairs, before any boundary correction.
#[derive(Clone, Debug)]
pub struct MotionSampler {
    /// `None` when `b == 0`: the agent never moves.
    speed: Option<Weibull<f64>>,
    turn: Normal<f64>,
    dt: f64,
}

impl MotionSampler {
    /// The config is assumed validated (see [`MotionConfig::validate`]).
    pub fn new(config: &MotionConfig) -> AgentResult<Self> {
        let speed = if config.b > 0.0 {
            let scale = config.b * std::f64::consts::SQRT_2;
            Some(
                Weibull::new(scale, 2.0)
                    .map_err(|e| CoreError::Config(format!("speed distribution: {e:?}")))?,
            )
        } else {
            None
        };
        let turn = Normal::new(config.mu, config.turn_angle)
            .map_err(|e| CoreError::Config(format!("turn distribution: {e:?}")))?;
        Ok(Self { speed, turn, dt: config.dt })
    }

    /// One `(speed, turn)` draw, already scaled by `dt`.
    ///
    /// Speed is drawn first, then turn; the order is part of the
    /// reproducibility contract for a given seed.
    #[inline]
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let speed = self.speed.as_ref().map_or(0.0, |d| d.sample(rng));
        let turn = self.turn.sample(rng);
        (speed * self.dt, turn * self.dt)
    }

    pub fn dt(&self) -> f64 {
        self.dt
    }
}
