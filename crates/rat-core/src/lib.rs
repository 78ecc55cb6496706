//! `rat-core` — foundational types for the `ratsim` trajectory simulator.
//!
//! This crate is a dependency of every other `rat-*` crate.  It has no
//! `rat-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `AgentId`, `WallId`, `TrajectoryId`                   |
//! | [`point`]       | `Point` — 2-D position / direction vector             |
//! | [`config`]      | `SimConfig`, `MotionConfig`, `BoundaryMode`           |
//! | [`rng`]         | `AgentRng`: per-trajectory seeded `SmallRng`          |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod config;
pub mod error;
pub mod ids;
pub mod point;
pub mod rng;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::{BoundaryMode, MotionConfig, SimConfig};
pub use error::{CoreError, CoreResult};
pub use ids::{AgentId, TrajectoryId, WallId};
pub use point::Point;
pub use rng::AgentRng;

/// Full turn in radians; headings are wrapped to `[0, TAU)`.
pub const TAU: f64 = std::f64::consts::TAU;

/// Wrap an angle into `[0, 2π)`.
#[inline]
pub fn wrap_angle(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(TAU);
    // rem_euclid can round up to exactly TAU for tiny negative inputs.
    if wrapped >= TAU { 0.0 } else { wrapped }
}
