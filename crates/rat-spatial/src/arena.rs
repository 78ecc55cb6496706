//! Walled environment and its builder.
//!
//! # Data layout
//!
//! Walls are stored in a flat `Vec<Wall>` indexed by [`WallId`].  Wall-to-wall
//! adjacency is recorded by id inside each wall's `intersects` map, so there
//! are no references between walls and the whole arena is plain owned data.
//!
//! # Spatial index
//!
//! An R-tree (via `rstar`) holds the bounding box of every wall.  Soft
//! boundary repulsion only ever involves walls within `soft_boundary` of the
//! agent, so [`Arena::wall_rejection`] asks the tree for walls whose box meets
//! the square of half-width `soft_boundary` around the position and skips the
//! rest.  Ray casting ([`Arena::crash_point`]) is unbounded and scans every
//! wall.

use rand::Rng;
use rstar::{AABB, RTree, RTreeObject};

use rat_core::{Point, WallId};

use crate::geometry::{GEOM_TOL, ParamRange, intersect, projection_rejection};
use crate::{BoundaryPolicy, Environment, SpatialError, SpatialResult, Wall};

/// Rejection-sampling budget per requested point in polygonal arenas.
const MAX_ATTEMPTS_PER_SAMPLE: usize = 10_000;

/// Offset used to probe which side of a wall is inside the environment.
const NUDGE: f64 = 1e-6;

// ── R-tree wall entry ─────────────────────────────────────────────────────────

/// Entry stored in the R-tree: a wall's axis-aligned bounding box.
#[derive(Clone, Debug)]
struct WallEntry {
    lo: [f64; 2],
    hi: [f64; 2],
    id: WallId,
}

impl RTreeObject for WallEntry {
    type Envelope = AABB<[f64; 2]>;
    fn envelope(&self) -> Self::Envelope {
        AABB::from_corners(self.lo, self.hi)
    }
}

// ── Boundary / CrashPoint ─────────────────────────────────────────────────────

/// Shape of the outer boundary; selects the membership and sampling strategy.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Boundary {
    /// Axis-aligned box `[origin, extent]`: bounds check, direct sampling.
    Rectangle,
    /// Arbitrary simple polygon: crossing-number test, rejection sampling.
    Polygon,
}

/// Nearest wall hit by a forward ray.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct CrashPoint {
    pub point: Point,
    pub wall: WallId,
    /// Euclidean distance from the ray origin to `point`.
    pub distance: f64,
}

// ── Arena ─────────────────────────────────────────────────────────────────────

/// A bounded 2-D environment made of walls.
///
/// Do not construct directly; use [`Arena::rectangle`] or [`ArenaBuilder`].
pub struct Arena {
    /// Lower-left corner of the bounding box.
    origin: Point,
    /// Upper-right corner of the bounding box.
    extent: Point,
    soft_boundary: f64,
    walls: Vec<Wall>,
    boundary: Boundary,
    index: RTree<WallEntry>,
    /// Interior-facing unit normal per wall; `None` when both sides are open.
    inward: Vec<Option<Point>>,
}

impl Arena {
    /// The rectangular board `[origin, extent]` bounded by four border walls
    /// (left, top, right, bottom).
    pub fn rectangle(origin: Point, extent: Point, soft_boundary: f64) -> SpatialResult<Self> {
        ArenaBuilder::new(soft_boundary).rectangle(origin, extent).build()
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn extent(&self) -> Point {
        self.extent
    }

    pub fn soft_boundary(&self) -> f64 {
        self.soft_boundary
    }

    pub fn boundary(&self) -> Boundary {
        self.boundary
    }

    pub fn walls(&self) -> &[Wall] {
        &self.walls
    }

    #[inline]
    pub fn wall(&self, id: WallId) -> &Wall {
        &self.walls[id.index()]
    }

    pub fn wall_by_name(&self, name: &str) -> Option<&Wall> {
        self.walls.iter().find(|w| w.name == name)
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Unit normal of wall `id` pointing into the environment.
    ///
    /// `None` for interior obstacles, which have free space on both sides.
    pub fn inward_normal(&self, id: WallId) -> Option<Point> {
        self.inward[id.index()]
    }

    // ── Geometry queries ──────────────────────────────────────────────────

    /// Cast a ray from `pos` along `direction` and return the nearest wall hit.
    ///
    /// Only the sign of `direction` matters, not its length.  A position
    /// inside a closed arena always hits something; `NoCrashPoint` means the
    /// position has escaped or the direction is zero.
    ///
    /// A position lying on a wall does not crash into that wall when the ray
    /// heads into the environment, only when it heads out.
    pub fn crash_point(&self, pos: Point, direction: Point) -> SpatialResult<CrashPoint> {
        let mut nearest: Option<CrashPoint> = None;
        for wall in &self.walls {
            let Some(hit) = intersect(
                pos, direction, wall.bias, wall.slope, ParamRange::FORWARD, wall.t_range,
            ) else {
                continue;
            };
            if !hit.valid {
                continue;
            }
            let distance = pos.distance(hit.point);
            if distance <= GEOM_TOL && self.leaves_wall(wall, direction) {
                continue;
            }
            if nearest.is_none_or(|n| distance < n.distance) {
                nearest = Some(CrashPoint { point: hit.point, wall: wall.id, distance });
            }
        }
        nearest.ok_or(SpatialError::NoCrashPoint { pos, direction })
    }

    /// Escape direction: the sum of unit vectors pointing from every wall
    /// within `soft_boundary` of `pos` towards `pos`.
    ///
    /// A wall only counts when the foot of the perpendicular from `pos` lies
    /// on the segment.  A wall the position lies on contributes its inward
    /// normal instead.  Returns the zero vector when nothing is close.
    pub fn wall_rejection(&self, pos: Point) -> Point {
        let reach = self.soft_boundary + GEOM_TOL;
        let query = AABB::from_corners([pos.x - reach, pos.y - reach], [pos.x + reach, pos.y + reach]);

        // Fixed wall order keeps the floating-point sum reproducible.
        let mut candidates: Vec<WallId> = self
            .index
            .locate_in_envelope_intersecting(&query)
            .map(|e| e.id)
            .collect();
        candidates.sort_unstable();

        let mut ed = Point::ZERO;
        for id in candidates {
            let wall = self.wall(id);
            let (proj, rej) = projection_rejection(pos - wall.bias, wall.slope);

            let along = proj.dot(wall.slope);
            let len2 = wall.slope.norm_squared();
            if !(along >= wall.t_range.lo * len2 && along <= wall.t_range.hi * len2) {
                continue;
            }

            let d = rej.norm();
            if d <= GEOM_TOL {
                if let Some(n) = self.inward_normal(id) {
                    ed += n;
                }
            } else if d <= self.soft_boundary {
                ed += rej / d;
            }
        }
        ed
    }

    /// Evenly spaced `res_x × res_y` grid over the bounding box, row-major
    /// (x varies fastest).
    pub fn grid(&self, res_x: usize, res_y: usize) -> Vec<Point> {
        let xs = linspace(self.origin.x, self.extent.x, res_x);
        let ys = linspace(self.origin.y, self.extent.y, res_y);
        ys.iter()
            .flat_map(|&y| xs.iter().map(move |&x| Point::new(x, y)))
            .collect()
    }

    // ── Membership helpers ────────────────────────────────────────────────

    /// Whether `direction`, cast from a point on `wall`, moves off it into
    /// free space.
    fn leaves_wall(&self, wall: &Wall, direction: Point) -> bool {
        match self.inward_normal(wall.id) {
            Some(n) => direction.dot(n) > 0.0,
            None => !wall.border,
        }
    }

    /// Probe both sides of the wall's midpoint.
    fn interior_side(&self, wall: &Wall) -> Option<Point> {
        let mid = wall.midpoint();
        let (n, m) = wall.normals();
        match (self.inside_environment(mid + n * NUDGE), self.inside_environment(mid + m * NUDGE)) {
            (true, false) => Some(n),
            (false, true) => Some(m),
            _ => None,
        }
    }

    fn on_border(&self, pos: Point) -> bool {
        self.walls
            .iter()
            .filter(|w| w.border)
            .any(|w| segment_distance(pos, w.start(), w.end()) <= GEOM_TOL)
    }

    /// Even-odd crossing count of a +x ray against the border walls.
    fn crossing_inside(&self, pos: Point) -> bool {
        let mut inside = false;
        for wall in self.walls.iter().filter(|w| w.border) {
            let (a, b) = (wall.start(), wall.end());
            if (a.y > pos.y) != (b.y > pos.y) {
                let x_cross = a.x + (pos.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if pos.x < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl Environment for Arena {
    fn sample_uniform<R: Rng + ?Sized>(&self, n: usize, rng: &mut R) -> SpatialResult<Vec<Point>> {
        let box_point = |rng: &mut R| {
            Point::new(
                rng.gen_range(self.origin.x..self.extent.x),
                rng.gen_range(self.origin.y..self.extent.y),
            )
        };

        match self.boundary {
            Boundary::Rectangle => Ok((0..n).map(|_| box_point(&mut *rng)).collect()),
            Boundary::Polygon => {
                let budget = n.saturating_mul(MAX_ATTEMPTS_PER_SAMPLE);
                let mut points = Vec::with_capacity(n);
                let mut attempts = 0;
                while points.len() < n {
                    if attempts >= budget {
                        return Err(SpatialError::SamplingExhausted { attempts });
                    }
                    attempts += 1;
                    let p = box_point(&mut *rng);
                    if self.inside_environment(p) {
                        points.push(p);
                    }
                }
                Ok(points)
            }
        }
    }

    /// Points exactly on a border wall count as inside.
    fn inside_environment(&self, pos: Point) -> bool {
        match self.boundary {
            Boundary::Rectangle => {
                pos.x >= self.origin.x
                    && pos.y >= self.origin.y
                    && pos.x <= self.extent.x
                    && pos.y <= self.extent.y
            }
            Boundary::Polygon => self.on_border(pos) || self.crossing_inside(pos),
        }
    }

    fn avoid_walls(
        &self,
        policy: BoundaryPolicy,
        pos: Point,
        heading: f64,
        speed: f64,
        turn: f64,
    ) -> SpatialResult<(f64, f64)> {
        policy.apply(self, pos, heading, speed, turn)
    }
}

// ── ArenaBuilder ──────────────────────────────────────────────────────────────

/// Construct an [`Arena`] wall by wall, then call [`build`](Self::build).
///
/// # Example
///
/// ```
/// use rat_core::Point;
/// use rat_spatial::{ArenaBuilder, ParamRange};
///
/// // Unit square with an interior partition hanging from the top wall.
/// let arena = ArenaBuilder::new(0.1)
///     .rectangle(Point::new(0.0, 0.0), Point::new(1.0, 1.0))
///     .add_wall("partition", Point::new(0.5, 1.0), Point::new(0.0, -0.5), ParamRange::UNIT)
///     .build()
///     .unwrap();
/// assert_eq!(arena.wall_count(), 5);
/// ```
pub struct ArenaBuilder {
    soft_boundary: f64,
    walls: Vec<RawWall>,
    rect: Option<(Point, Point)>,
}

struct RawWall {
    name: String,
    bias: Point,
    slope: Point,
    t_range: ParamRange,
    border: bool,
}

impl ArenaBuilder {
    pub fn new(soft_boundary: f64) -> Self {
        Self { soft_boundary, walls: Vec::new(), rect: None }
    }

    /// Add the four border walls of the box `[origin, extent]` and use the
    /// fast rectangle membership test.
    pub fn rectangle(mut self, origin: Point, extent: Point) -> Self {
        let w = extent.x - origin.x;
        let h = extent.y - origin.y;
        self = self
            .add_border_wall("border_wall1", origin, Point::new(0.0, h), ParamRange::UNIT)
            .add_border_wall("border_wall2", Point::new(origin.x, extent.y), Point::new(w, 0.0), ParamRange::UNIT)
            .add_border_wall("border_wall3", Point::new(extent.x, origin.y), Point::new(0.0, h), ParamRange::UNIT)
            .add_border_wall("border_wall4", origin, Point::new(w, 0.0), ParamRange::UNIT);
        self.rect = Some((origin, extent));
        self
    }

    /// Add one border wall per edge of the closed polygon `vertices`.
    pub fn polygon(mut self, vertices: &[Point]) -> Self {
        let n = vertices.len();
        for i in 0..n {
            let a = vertices[i];
            let b = vertices[(i + 1) % n];
            let name = format!("border_wall{}", self.walls.len() + 1);
            self = self.add_border_wall(name, a, b - a, ParamRange::UNIT);
        }
        self
    }

    /// Add an interior obstacle wall.
    pub fn add_wall(self, name: impl Into<String>, bias: Point, slope: Point, t_range: ParamRange) -> Self {
        self.push(name.into(), bias, slope, t_range, false)
    }

    /// Add a wall that forms part of the outer boundary.
    pub fn add_border_wall(
        self,
        name: impl Into<String>,
        bias: Point,
        slope: Point,
        t_range: ParamRange,
    ) -> Self {
        self.push(name.into(), bias, slope, t_range, true)
    }

    fn push(mut self, name: String, bias: Point, slope: Point, t_range: ParamRange, border: bool) -> Self {
        self.walls.push(RawWall { name, bias, slope, t_range, border });
        self
    }

    pub fn wall_count(&self) -> usize {
        self.walls.len()
    }

    /// Validate every wall, record pairwise intersections, and index the walls.
    ///
    /// Time complexity: O(W²) for intersection bookkeeping plus O(W log W)
    /// for the R-tree bulk load.
    pub fn build(self) -> SpatialResult<Arena> {
        if !(self.soft_boundary.is_finite() && self.soft_boundary > 0.0) {
            return Err(SpatialError::InvalidSoftBoundary(self.soft_boundary));
        }

        // ── Per-wall validation ───────────────────────────────────────────
        let mut walls: Vec<Wall> = Vec::with_capacity(self.walls.len());
        for (i, raw) in self.walls.into_iter().enumerate() {
            if !raw.bias.is_finite() || !raw.slope.is_finite() || raw.slope.is_zero() {
                return Err(SpatialError::DegenerateWall(raw.name));
            }
            if !raw.t_range.is_proper() {
                return Err(SpatialError::InvalidRange(raw.name));
            }
            let id = WallId(i as u32);
            walls.push(Wall::new(id, raw.name, raw.bias, raw.slope, raw.t_range, raw.border));
        }

        // ── Intersection bookkeeping: each wall against all earlier ones ──
        for i in 1..walls.len() {
            let (earlier, rest) = walls.split_at_mut(i);
            let new_wall = &mut rest[0];
            for wall in earlier.iter_mut() {
                if let Some(point) = wall.intersection_with(new_wall)? {
                    Wall::link(wall, new_wall, point);
                }
            }
        }

        // ── Boundary must be closed ───────────────────────────────────────
        let border: Vec<&Wall> = walls.iter().filter(|w| w.border).collect();
        if border.len() < 3 {
            return Err(SpatialError::NoBorder);
        }
        for wall in &border {
            if wall.is_corner() != (true, true) {
                return Err(SpatialError::OpenBoundary(wall.name.clone()));
            }
        }

        let (origin, extent, boundary) = match self.rect {
            Some((origin, extent)) => (origin, extent, Boundary::Rectangle),
            None => {
                let mut lo = Point::new(f64::INFINITY, f64::INFINITY);
                let mut hi = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
                for p in border.iter().flat_map(|w| [w.start(), w.end()]) {
                    lo = Point::new(lo.x.min(p.x), lo.y.min(p.y));
                    hi = Point::new(hi.x.max(p.x), hi.y.max(p.y));
                }
                (lo, hi, Boundary::Polygon)
            }
        };
        if !(extent.x > origin.x && extent.y > origin.y) {
            return Err(SpatialError::EmptyInterior);
        }

        // Bulk-load R-tree for O(W log W) construction (faster than W inserts).
        let entries: Vec<WallEntry> = walls
            .iter()
            .map(|w| {
                let (a, b) = (w.start(), w.end());
                WallEntry {
                    lo: [a.x.min(b.x), a.y.min(b.y)],
                    hi: [a.x.max(b.x), a.y.max(b.y)],
                    id: w.id,
                }
            })
            .collect();
        let index = RTree::bulk_load(entries);

        let mut arena = Arena {
            origin,
            extent,
            soft_boundary: self.soft_boundary,
            walls,
            boundary,
            index,
            inward: Vec::new(),
        };
        let inward = arena.walls.iter().map(|w| arena.interior_side(w)).collect();
        arena.inward = inward;
        Ok(arena)
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Distance from `p` to the closed segment `[a, b]`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let ab = b - a;
    let len2 = ab.norm_squared();
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = ((p - a).dot(ab) / len2).clamp(0.0, 1.0);
    p.distance(a + ab * t)
}

fn linspace(lo: f64, hi: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![lo],
        _ => (0..n).map(|i| lo + (hi - lo) * i as f64 / (n - 1) as f64).collect(),
    }
}
