//! Wall-free environment.

use rand::Rng;

use rat_core::Point;

use crate::{BoundaryPolicy, Environment, SpatialResult};

/// An unbounded field.  `low`/`high` only define where start positions are
/// sampled; the agent is free to wander beyond them.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct OpenField {
    pub low: Point,
    pub high: Point,
}

impl OpenField {
    pub fn new(low: Point, high: Point) -> Self {
        Self { low, high }
    }
}

impl Default for OpenField {
    fn default() -> Self {
        Self::new(Point::ZERO, Point::new(2.2, 2.2))
    }
}

impl Environment for OpenField {
    fn sample_uniform<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> SpatialResult<Vec<Point>> {
        Ok((0..n)
            .map(|_| {
                Point::new(
                    self.low.x + (self.high.x - self.low.x) * rng.r#gen::<f64>(),
                    self.low.y + (self.high.y - self.low.y) * rng.r#gen::<f64>(),
                )
            })
            .collect())
    }

    fn inside_environment(&self, _pos: Point) -> bool {
        true
    }

    /// No walls to avoid: the sampled pair is returned as is.
    fn avoid_walls(
        &self,
        _policy: BoundaryPolicy,
        _pos: Point,
        _heading: f64,
        speed: f64,
        turn: f64,
    ) -> SpatialResult<(f64, f64)> {
        Ok((speed, turn))
    }
}
