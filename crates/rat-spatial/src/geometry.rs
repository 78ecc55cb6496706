//! Line-segment primitives.
//!
//! A segment is written parametrically as `u + t·v` with `t` restricted to a
//! [`ParamRange`].  Walls use `[0, 1]`, forward rays use `[0, +∞)`.

use rat_core::Point;

/// Absolute tolerance for parameter-range membership and point coincidence.
pub const GEOM_TOL: f64 = 1e-9;

/// `|v1 × v2| / (|v1|·|v2|)` below this is treated as parallel.
const PARALLEL_TOL: f64 = 1e-12;

// ── ParamRange ────────────────────────────────────────────────────────────────

/// Closed interval `[lo, hi]` constraining a segment parameter.
#[derive(Copy, Clone, Debug, PartialEq)]
#[derive(serde::Serialize, serde::Deserialize)]
pub struct ParamRange {
    pub lo: f64,
    pub hi: f64,
}

impl ParamRange {
    /// `[0, 1]`: the whole segment from bias to `bias + slope`.
    pub const UNIT: ParamRange = ParamRange { lo: 0.0, hi: 1.0 };

    /// `[0, +∞)`: a ray cast forward from the bias point.
    pub const FORWARD: ParamRange = ParamRange { lo: 0.0, hi: f64::INFINITY };

    /// The whole infinite line.
    pub const UNBOUNDED: ParamRange = ParamRange { lo: f64::NEG_INFINITY, hi: f64::INFINITY };

    #[inline]
    pub const fn new(lo: f64, hi: f64) -> Self {
        Self { lo, hi }
    }

    /// Closed membership with [`GEOM_TOL`] slack on both ends.
    #[inline]
    pub fn contains(&self, t: f64) -> bool {
        t >= self.lo - GEOM_TOL && t <= self.hi + GEOM_TOL
    }

    /// Midpoint of a finite range.
    #[inline]
    pub fn mid(&self) -> f64 {
        0.5 * (self.lo + self.hi)
    }

    /// `lo < hi`, both finite.
    #[inline]
    pub fn is_proper(&self) -> bool {
        self.lo.is_finite() && self.hi.is_finite() && self.lo < self.hi
    }
}

impl Default for ParamRange {
    fn default() -> Self {
        Self::UNIT
    }
}

// ── intersect ─────────────────────────────────────────────────────────────────

/// Solution of a segment/segment intersection.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Intersection {
    /// `u1 + t1·v1`.
    pub point: Point,
    /// Parameter along the first segment.
    pub t1: f64,
    /// Parameter along the second segment.
    pub t2: f64,
    /// `t1 ∈ range1 && t2 ∈ range2`.
    pub valid: bool,
}

/// Intersect the lines `u1 + t1·v1` and `u2 + t2·v2`.
///
/// Solves `t1·v1 − t2·v2 = u2 − u1` by Cramer's rule.  Returns `None` when
/// the directions are (nearly) parallel or either is zero; otherwise the
/// intersection of the infinite lines together with whether both parameters
/// fall inside their ranges.
pub fn intersect(
    u1: Point,
    v1: Point,
    u2: Point,
    v2: Point,
    range1: ParamRange,
    range2: ParamRange,
) -> Option<Intersection> {
    let det = v1.cross(v2);
    let scale = v1.norm() * v2.norm();
    if !(det.abs() > PARALLEL_TOL * scale) {
        return None;
    }

    let w = u2 - u1;
    let t1 = w.cross(v2) / det;
    let t2 = w.cross(v1) / det;

    Some(Intersection {
        point: u1 + v1 * t1,
        t1,
        t2,
        valid: range1.contains(t1) && range2.contains(t2),
    })
}

// ── projection / rejection ────────────────────────────────────────────────────

/// Split `u` into the part parallel to `v` and the orthogonal remainder.
///
/// Returns `(proj, rej)` with `proj = (u·v / v·v)·v` and `rej = u − proj`.
/// `v` must be non-zero; walls with a zero slope never make it past
/// [`ArenaBuilder::build`](crate::ArenaBuilder::build).
#[inline]
pub fn projection_rejection(u: Point, v: Point) -> (Point, Point) {
    debug_assert!(!v.is_zero(), "projection onto the zero vector");
    let proj = v * (u.dot(v) / v.dot(v));
    (proj, u - proj)
}
