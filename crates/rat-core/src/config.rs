//! Simulation configuration.
//!
//! # Defaults
//!
//! The motion defaults are the Sorscher et al. constants used by the
//! rat-simulator reference runs:
//!
//! | Knob            | Default        | Meaning                                  |
//! |-----------------|----------------|------------------------------------------|
//! | `dt`            | 0.02 s         | integration step                         |
//! | `turn_angle`    | 11.52 rad/s    | std-dev of rotational velocity           |
//! | `b`             | 0.13·2π m/s    | Rayleigh scale of forward speed          |
//! | `mu`            | 0              | turn bias                                |
//! | `soft_boundary` | 0.3 m          | distance at which walls start repelling  |
//! | `boundary_mode` | `"zenos"`      | wall-avoidance policy                    |

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, CoreResult};

// ── BoundaryMode ──────────────────────────────────────────────────────────────

/// Which wall-avoidance policy an agent uses near boundaries.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum BoundaryMode {
    /// Reflect the turn away from the wall and cap speed at half the
    /// distance to the crash point.
    #[default]
    Zenos,
    /// Snap the turn by ±90° and quarter the speed when heading into a wall.
    Sorschers,
}

impl FromStr for BoundaryMode {
    type Err = CoreError;

    fn from_str(s: &str) -> CoreResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "zenos" => Ok(BoundaryMode::Zenos),
            "sorschers" => Ok(BoundaryMode::Sorschers),
            _ => Err(CoreError::UnknownPolicy(s.to_owned())),
        }
    }
}

impl fmt::Display for BoundaryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoundaryMode::Zenos => "zenos",
            BoundaryMode::Sorschers => "sorschers",
        })
    }
}

// ── MotionConfig ──────────────────────────────────────────────────────────────

/// Per-agent random-walk parameters.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MotionConfig {
    /// Integration step in seconds.
    pub dt: f64,
    /// Standard deviation of the rotational velocity (rad/s).
    pub turn_angle: f64,
    /// Rayleigh scale of the forward speed (m/s).
    pub b: f64,
    /// Turn bias (rad/s).
    pub mu: f64,
    /// Boundary policy name.  Kept as a string so configuration files can
    /// carry it verbatim; parsed (and rejected if unknown) when an agent is
    /// built.
    pub boundary_mode: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            dt:            0.02,
            turn_angle:    5.76 * 2.0,
            b:             0.13 * 2.0 * std::f64::consts::PI,
            mu:            0.0,
            boundary_mode: BoundaryMode::Zenos.to_string(),
        }
    }
}

impl MotionConfig {
    /// Check numeric ranges and parse the boundary mode.
    pub fn validate(&self) -> CoreResult<BoundaryMode> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(CoreError::Config(format!("dt must be positive, got {}", self.dt)));
        }
        if !(self.b.is_finite() && self.b >= 0.0) {
            return Err(CoreError::Config(format!("b must be non-negative, got {}", self.b)));
        }
        if !(self.turn_angle.is_finite() && self.turn_angle >= 0.0) {
            return Err(CoreError::Config(format!(
                "turn_angle must be non-negative, got {}",
                self.turn_angle
            )));
        }
        if !self.mu.is_finite() {
            return Err(CoreError::Config(format!("mu must be finite, got {}", self.mu)));
        }
        self.boundary_mode.parse()
    }
}

// ── SimConfig ─────────────────────────────────────────────────────────────────

/// Top-level run configuration.
///
/// Typically loaded from a JSON file by the application crate and passed to
/// the batch runner.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SimConfig {
    /// Random-walk parameters shared by every agent in the run.
    pub motion: MotionConfig,

    /// Distance from a wall at which repulsion activates.
    pub soft_boundary: f64,

    /// Steps per trajectory.  Each trajectory holds `seq_len + 1` samples.
    pub seq_len: usize,

    /// Trajectories per batch.
    pub batch_size: usize,

    /// Master RNG seed.  The same seed always produces identical batches.
    pub seed: u64,

    /// Worker thread count passed to Rayon.  `None` uses all logical cores.
    pub num_threads: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            motion:        MotionConfig::default(),
            soft_boundary: 0.3,
            seq_len:       20,
            batch_size:    64,
            seed:          42,
            num_threads:   None,
        }
    }
}

impl SimConfig {
    /// Validate every knob; returns the parsed boundary mode.
    pub fn validate(&self) -> CoreResult<BoundaryMode> {
        if !(self.soft_boundary.is_finite() && self.soft_boundary > 0.0) {
            return Err(CoreError::Config(format!(
                "soft_boundary must be positive, got {}",
                self.soft_boundary
            )));
        }
        if self.num_threads == Some(0) {
            return Err(CoreError::Config("num_threads must be at least 1".into()));
        }
        self.motion.validate()
    }
}
