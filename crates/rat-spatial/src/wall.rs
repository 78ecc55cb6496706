//! Directed wall segments and their intersection bookkeeping.

use rustc_hash::FxHashMap;

use rat_core::{Point, WallId};

use crate::geometry::{GEOM_TOL, ParamRange, intersect};
use crate::{SpatialError, SpatialResult};

/// A wall: the segment `bias + t·slope` for `t ∈ t_range`.
///
/// Walls live in an [`Arena`](crate::Arena)'s flat `Vec<Wall>` and refer to
/// each other only by [`WallId`].  The `intersects` map is filled in by the
/// builder as each wall is registered and never changes afterwards.
#[derive(Clone, Debug)]
pub struct Wall {
    pub id: WallId,
    pub name: String,
    /// Segment start.
    pub bias: Point,
    /// Direction `end − start` (not normalised).
    pub slope: Point,
    pub t_range: ParamRange,
    /// Part of the outer boundary rather than an interior obstacle.
    pub border: bool,
    intersects: FxHashMap<WallId, Point>,
}

impl Wall {
    pub fn new(
        id: WallId,
        name: impl Into<String>,
        bias: Point,
        slope: Point,
        t_range: ParamRange,
        border: bool,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bias,
            slope,
            t_range,
            border,
            intersects: FxHashMap::default(),
        }
    }

    /// Start of the segment (`t = t_range.lo`).
    #[inline]
    pub fn start(&self) -> Point {
        self.bias + self.slope * self.t_range.lo
    }

    /// End of the segment (`t = t_range.hi`).
    #[inline]
    pub fn end(&self) -> Point {
        self.bias + self.slope * self.t_range.hi
    }

    #[inline]
    pub fn midpoint(&self) -> Point {
        self.bias + self.slope * self.t_range.mid()
    }

    #[inline]
    pub fn is_border(&self) -> bool {
        self.border
    }

    /// Intersection points with neighbouring walls, keyed by neighbour id.
    pub fn intersects(&self) -> &FxHashMap<WallId, Point> {
        &self.intersects
    }

    /// The two unit normals `(−dy, dx)/|v|` and its negation.
    ///
    /// Neither is preferred; callers pick the one facing the interior.
    pub fn normals(&self) -> (Point, Point) {
        let n = self.slope.perp() / self.slope.norm();
        (n, -n)
    }

    /// Whether the start / end point coincides with a recorded intersection.
    pub fn is_corner(&self) -> (bool, bool) {
        let (start, end) = (self.start(), self.end());
        self.intersects.values().fold((false, false), |(s, e), p| {
            (s || p.approx_eq(start, GEOM_TOL), e || p.approx_eq(end, GEOM_TOL))
        })
    }

    /// Where `self` meets `other`, if anywhere.
    ///
    /// Walls may only touch at an end point of at least one of them.  A
    /// crossing strictly inside both segments is a construction error.
    pub fn intersection_with(&self, other: &Wall) -> SpatialResult<Option<Point>> {
        let Some(hit) = intersect(
            self.bias, self.slope, other.bias, other.slope, self.t_range, other.t_range,
        ) else {
            return Ok(None);
        };
        if !hit.valid {
            return Ok(None);
        }

        let at_end_point = [self.start(), self.end(), other.start(), other.end()]
            .iter()
            .any(|p| p.approx_eq(hit.point, GEOM_TOL));

        if !at_end_point {
            return Err(SpatialError::WallsCross {
                a:     self.name.clone(),
                b:     other.name.clone(),
                point: hit.point,
            });
        }
        Ok(Some(hit.point))
    }

    /// Record a symmetric intersection between two walls.
    pub(crate) fn link(a: &mut Wall, b: &mut Wall, point: Point) {
        a.intersects.insert(b.id, point);
        b.intersects.insert(a.id, point);
    }
}
