//! Boundary-avoidance policies.
//!
//! Both policies share one contract: given the agent's pose and a raw
//! `(speed, turn)` sample, return a corrected `(speed, turn)`.  They differ in
//! how hard they steer:
//!
//! - **Zenos** reflects the turn away from nearby walls and caps the speed at
//!   half the distance to the wall straight ahead.  The cap halves the
//!   remaining gap every step, so the agent slows asymptotically and can
//!   never cross a wall.
//! - **Sorschers** leaves the sample alone unless the next heading points
//!   into a nearby wall, in which case it turns by exactly ±90° and quarters
//!   the speed.

use std::f64::consts::FRAC_PI_2;

use rat_core::{BoundaryMode, Point};

use crate::{Arena, SpatialResult};

/// Inset used to pull an escaped position back inside the bounding box
/// before computing the escape direction.
const CLIP_MARGIN: f64 = 1e-6;

/// Selectable wall-avoidance strategy.  See the module docs.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum BoundaryPolicy {
    #[default]
    Zenos,
    Sorschers,
}

impl From<BoundaryMode> for BoundaryPolicy {
    fn from(mode: BoundaryMode) -> Self {
        match mode {
            BoundaryMode::Zenos => BoundaryPolicy::Zenos,
            BoundaryMode::Sorschers => BoundaryPolicy::Sorschers,
        }
    }
}

impl BoundaryPolicy {
    /// Correct `(speed, turn)` for an agent at `pos` facing `heading`.
    pub fn apply(
        self,
        arena: &Arena,
        pos: Point,
        heading: f64,
        speed: f64,
        turn: f64,
    ) -> SpatialResult<(f64, f64)> {
        match self {
            BoundaryPolicy::Zenos => zenos(arena, pos, heading, speed, turn),
            BoundaryPolicy::Sorschers => Ok(sorschers(arena, pos, heading, speed, turn)),
        }
    }
}

fn zenos(arena: &Arena, pos: Point, heading: f64, speed: f64, turn: f64) -> SpatialResult<(f64, f64)> {
    let ed = arena.wall_rejection(pos);
    if ed.is_zero() {
        return Ok((speed, turn));
    }

    // Keep whichever turn direction escapes the walls more.
    let score_p = ed.dot(Point::from_angle(heading + turn));
    let score_n = ed.dot(Point::from_angle(heading - turn));
    let turn = if score_n > score_p { -turn } else { turn };

    let crash = arena.crash_point(pos, Point::from_angle(heading + turn))?;
    Ok((speed.min(crash.distance / 2.0), turn))
}

fn sorschers(arena: &Arena, pos: Point, heading: f64, speed: f64, turn: f64) -> (f64, f64) {
    let margin = Point::new(CLIP_MARGIN, CLIP_MARGIN);
    let clipped = pos.clamp(arena.origin() + margin, arena.extent() - margin);

    let ed = arena.wall_rejection(clipped);
    if ed.is_zero() {
        return (speed, turn);
    }

    // Only intervene when the next heading runs further into the wall.
    if Point::from_angle(heading + turn).dot(ed) >= 0.0 {
        return (speed, turn);
    }

    // Ties go to the positive (counter-clockwise) rotation.
    let snap = if ed.dot(Point::from_angle(heading + FRAC_PI_2)) >= 0.0 {
        FRAC_PI_2
    } else {
        -FRAC_PI_2
    };
    (speed / 4.0, snap)
}
