//! Spatial-subsystem error type.

use thiserror::Error;

use rat_core::Point;

/// Errors produced by `rat-spatial`.
///
/// Parallel segments are not an error: [`intersect`](crate::intersect)
/// reports them as `None`.  The variants here are configuration mistakes and
/// broken invariants that must reach the caller.
#[derive(Debug, Error)]
pub enum SpatialError {
    #[error("walls {a:?} and {b:?} cross mid-segment at {point}; walls may only meet at end points")]
    WallsCross { a: String, b: String, point: Point },

    #[error("wall {0:?} has a zero-length or non-finite slope")]
    DegenerateWall(String),

    #[error("wall {0:?} has an empty or non-finite parameter range")]
    InvalidRange(String),

    #[error("border wall {0:?} has a free end point; the boundary is not closed")]
    OpenBoundary(String),

    #[error("environment has fewer than three border walls")]
    NoBorder,

    #[error("border walls enclose no area")]
    EmptyInterior,

    #[error("soft boundary must be positive and finite, got {0}")]
    InvalidSoftBoundary(f64),

    #[error("no wall ahead of {pos} along {direction}; position is outside the environment")]
    NoCrashPoint { pos: Point, direction: Point },

    #[error("rejection sampling gave up after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type SpatialResult<T> = Result<T, SpatialError>;
