//! `rat-agent` — the simulated rat.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`motion`]      | `MotionSampler` — Rayleigh speed / Gaussian turn draws    |
//! | [`history`]     | `HistoryCache`, `derive_velocities`, `derive_positions`   |
//! | [`agent`]       | `Agent` — step / reset / history accessors                |
//! | [`builder`]     | `AgentBuilder` (fluent construction, fail-fast checks)    |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |
//!
//! # State model
//!
//! The canonical state of an agent is three parallel histories: headings,
//! speeds and turns, each of length `steps + 1`.  Velocities and positions
//! are derived from them plus the start position and cached; the caches only
//! ever integrate the suffix appended since they were last read.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Propagates serde derives to `rat-core` types.              |

pub mod agent;
pub mod builder;
pub mod error;
pub mod history;
pub mod motion;


pub use agent::Agent;
pub use builder::AgentBuilder;
pub use error::{AgentError, AgentResult};
pub use history::{HistoryCache, derive_positions, derive_velocities};
pub use motion::MotionSampler;
