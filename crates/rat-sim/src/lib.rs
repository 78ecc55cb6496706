//! `rat-sim` — trajectory generation for the ratsim simulator.
//!
//! # Generation model
//!
//! ```text
//! for id in first_id .. first_id + batch_size:
//!   ① Build   — fresh Agent, RNG seeded from (seed, id)
//!   ② Reset   — random heading, start position sampled from the environment
//!   ③ Walk    — seq_len × Agent::step (boundary policy applied every step)
//!   ④ Collect — positions, velocities, headings, speeds, turns
//! then, in id order: observer callbacks for every trajectory, on_batch_end
//! ```
//!
//! Every trajectory is independent and the environment is only ever read,
//! so batches parallelise trivially.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                 |
//! |------------|--------------------------------------------------------|
//! | `parallel` | Runs step ③ on Rayon's thread pool.                    |
//! | `serde`    | Propagates serde derives to `rat-core` types.          |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use rat_core::{Point, SimConfig};
//! use rat_sim::{BatchBuilder, NoopObserver};
//! use rat_spatial::Arena;
//!
//! let config = SimConfig::default();
//! let arena = Arena::rectangle(Point::ZERO, Point::new(2.2, 2.2), config.soft_boundary)?;
//! let batch = BatchBuilder::new(config).batch_size(128).build()?;
//! let trajectories = batch.generate(&arena, &mut NoopObserver)?;
//! ```

pub mod builder;
pub mod error;
pub mod generator;
pub mod observer;
pub mod trajectory;


pub use builder::{Batch, BatchBuilder};
pub use error::{SimError, SimResult};
pub use generator::TrajectoryGenerator;
pub use observer::{NoopObserver, SimObserver};
pub use trajectory::Trajectory;
