//! `rat-spatial` — the geometric environment engine.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`geometry`]    | `intersect`, `projection_rejection`, `ParamRange`         |
//! | [`wall`]        | `Wall` — directed segment + intersection bookkeeping      |
//! | [`arena`]       | `Arena` (walls + R-tree), `ArenaBuilder`, `CrashPoint`    |
//! | [`open_field`]  | `OpenField` — wall-free sampling box                      |
//! | [`environment`] | `Environment` trait shared by `Arena` and `OpenField`     |
//! | [`policy`]      | `BoundaryPolicy` (`Zenos`, `Sorschers`)                   |
//! | [`loader`]      | `load_walls_csv`, `load_walls_reader`                     |
//! | [`error`]       | `SpatialError`, `SpatialResult<T>`                        |
//!
//! # Sharing
//!
//! An `Arena` is immutable once built.  It is `Send + Sync`, so any number of
//! agents (one per Rayon worker) can query it through `&Arena` at once.

pub mod arena;
pub mod environment;
pub mod error;
pub mod geometry;
pub mod loader;
pub mod open_field;
pub mod policy;
pub mod wall;

#[cfg(test)]
mod tests;

pub use arena::{Arena, ArenaBuilder, Boundary, CrashPoint};
pub use environment::Environment;
pub use error::{SpatialError, SpatialResult};
pub use geometry::{GEOM_TOL, Intersection, ParamRange, intersect, projection_rejection};
pub use loader::{load_walls_csv, load_walls_reader};
pub use open_field::OpenField;
pub use policy::BoundaryPolicy;
pub use wall::Wall;
