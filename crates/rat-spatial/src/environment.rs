//! The `Environment` trait: what an agent needs from the world it moves in.

use rand::Rng;

use rat_core::Point;

use crate::{BoundaryPolicy, SpatialResult};

/// Capability interface shared by every environment variant.
///
/// Agents and the trajectory generator are generic over `E: Environment` and
/// never look at walls directly; the walled geometry is reached only through
/// [`avoid_walls`](Self::avoid_walls).
///
/// # Thread safety
///
/// Environments are read-only once built and are shared by reference across
/// Rayon workers, so implementations must be `Send + Sync`.
pub trait Environment: Send + Sync {
    /// Draw `n` points uniformly from the interior.
    fn sample_uniform<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> SpatialResult<Vec<Point>>;

    /// Whether `pos` lies inside (or on the boundary of) the environment.
    fn inside_environment(&self, pos: Point) -> bool;

    /// Correct a freshly sampled `(speed, turn)` for the agent at `pos`
    /// facing `heading`.  Returns the corrected pair.
    fn avoid_walls(
        &self,
        policy: BoundaryPolicy,
        pos: Point,
        heading: f64,
        speed: f64,
        turn: f64,
    ) -> SpatialResult<(f64, f64)>;
}
