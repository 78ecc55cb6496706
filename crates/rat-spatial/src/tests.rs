//! Unit tests for rat-spatial.
//!
//! All tests use hand-built arenas so they run without any wall file.

#[cfg(test)]
mod helpers {
    use rat_core::Point;
    use crate::Arena;

    /// The reference board: `[0, 2.2] × [0, 2.2]`, soft boundary 0.3.
    pub fn box22() -> Arena {
        Arena::rectangle(Point::ZERO, Point::new(2.2, 2.2), 0.3).unwrap()
    }

    /// Distance from `p` to the segment of wall `w`.
    pub fn dist_to_wall(p: Point, w: &crate::Wall) -> f64 {
        let (a, b) = (w.start(), w.end());
        let ab = b - a;
        let t = ((p - a).dot(ab) / ab.norm_squared()).clamp(0.0, 1.0);
        p.distance(a + ab * t)
    }
}

// ── Geometry primitives ───────────────────────────────────────────────────────

#[cfg(test)]
mod geometry {
    use approx::assert_relative_eq;
    use rat_core::Point;

    use crate::{ParamRange, intersect, projection_rejection};

    #[test]
    fn shared_endpoint_is_valid() {
        // Left wall meets top wall at (0, 2.2).
        let hit = intersect(
            Point::new(0.0, 0.0), Point::new(0.0, 2.2),
            Point::new(0.0, 2.2), Point::new(2.2, 0.0),
            ParamRange::UNIT, ParamRange::UNIT,
        )
        .unwrap();
        assert!(hit.valid);
        assert_eq!(hit.point, Point::new(0.0, 2.2));
        assert_relative_eq!(hit.t1, 1.0);
        assert_relative_eq!(hit.t2, 0.0);
    }

    #[test]
    fn parallel_walls_do_not_intersect() {
        let hit = intersect(
            Point::new(0.0, 0.0), Point::new(0.0, 2.2),
            Point::new(2.2, 0.0), Point::new(0.0, 2.2),
            ParamRange::UNIT, ParamRange::UNIT,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn nearly_parallel_within_tolerance_is_singular() {
        let hit = intersect(
            Point::ZERO, Point::new(1.0, 0.0),
            Point::new(0.0, 1.0), Point::new(1.0, 1e-15),
            ParamRange::UNBOUNDED, ParamRange::UNBOUNDED,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn slightly_skewed_lines_still_solve() {
        let hit = intersect(
            Point::ZERO, Point::new(1.0, 0.0),
            Point::new(0.0, 1.0), Point::new(1.0, 1e-3),
            ParamRange::UNBOUNDED, ParamRange::UNBOUNDED,
        )
        .unwrap();
        // y = 1 + 1e-3·t2 = 0  →  t2 = −1000, x = −1000.
        assert_relative_eq!(hit.t2, -1000.0, epsilon = 1e-6);
        assert_relative_eq!(hit.point.x, -1000.0, epsilon = 1e-6);
        assert!(hit.valid);
    }

    #[test]
    fn out_of_range_is_reported_invalid() {
        let hit = intersect(
            Point::ZERO, Point::new(1.0, 0.0),
            Point::new(2.0, -1.0), Point::new(0.0, 1.0),
            ParamRange::UNIT, ParamRange::UNIT,
        )
        .unwrap();
        assert!(!hit.valid);
        assert_relative_eq!(hit.point.x, 2.0);
        assert_relative_eq!(hit.point.y, 0.0);
    }

    #[test]
    fn forward_range_rejects_rays_behind() {
        let hit = intersect(
            Point::new(1.0, 1.0), Point::new(-1.0, 0.0),
            Point::new(2.2, 0.0), Point::new(0.0, 2.2),
            ParamRange::FORWARD, ParamRange::UNIT,
        )
        .unwrap();
        assert!(hit.t1 < 0.0);
        assert!(!hit.valid);
    }

    #[test]
    fn projection_and_rejection_split() {
        let (proj, rej) = projection_rejection(Point::new(1.0, 2.0), Point::new(2.0, 0.0));
        assert_eq!(proj, Point::new(1.0, 0.0));
        assert_eq!(rej, Point::new(0.0, 2.0));
        assert_eq!(proj.dot(rej), 0.0);
    }
}

// ── Walls ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod walls {
    use approx::assert_relative_eq;
    use rat_core::Point;

    use crate::{ArenaBuilder, ParamRange, SpatialError};

    #[test]
    fn rectangle_walls_are_all_corners() {
        let arena = super::helpers::box22();
        assert_eq!(arena.wall_count(), 4);
        for wall in arena.walls() {
            assert!(wall.is_border());
            assert_eq!(wall.is_corner(), (true, true), "{}", wall.name);
            assert_eq!(wall.intersects().len(), 2, "{}", wall.name);
        }
    }

    #[test]
    fn intersections_are_symmetric() {
        let arena = super::helpers::box22();
        for wall in arena.walls() {
            for (other, point) in wall.intersects() {
                assert_eq!(arena.wall(*other).intersects().get(&wall.id), Some(point));
            }
        }
    }

    #[test]
    fn end_follows_slope_and_range() {
        let arena = super::helpers::box22();
        let top = arena.wall_by_name("border_wall2").unwrap();
        assert_eq!(top.bias, Point::new(0.0, 2.2));
        assert_eq!(top.end(), Point::new(2.2, 2.2));
        assert_eq!(top.midpoint(), Point::new(1.1, 2.2));
    }

    #[test]
    fn normals_are_unit_and_opposite() {
        let arena = super::helpers::box22();
        let left = arena.wall_by_name("border_wall1").unwrap();
        let (n1, n2) = left.normals();
        assert_eq!(n1, Point::new(-1.0, 0.0));
        assert_eq!(n2, Point::new(1.0, 0.0));

        let diag = ArenaBuilder::new(0.2)
            .polygon(&[Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)])
            .build()
            .unwrap();
        let hyp = &diag.walls()[1];
        let (n1, n2) = hyp.normals();
        assert_relative_eq!(n1.norm(), 1.0, epsilon = 1e-12);
        assert_relative_eq!(n1.dot(hyp.slope), 0.0, epsilon = 1e-12);
        assert_eq!(n1, -n2);
    }

    #[test]
    fn t_junction_is_allowed() {
        let arena = ArenaBuilder::new(0.1)
            .rectangle(Point::ZERO, Point::new(1.0, 1.0))
            .add_wall("partition", Point::new(0.5, 1.0), Point::new(0.0, -0.5), ParamRange::UNIT)
            .build()
            .unwrap();
        let partition = arena.wall_by_name("partition").unwrap();
        assert!(!partition.is_border());
        assert_eq!(partition.is_corner(), (true, false));
        let top = arena.wall_by_name("border_wall2").unwrap();
        assert!(top.intersects().values().any(|p| p.approx_eq(Point::new(0.5, 1.0), 1e-12)));
    }

    #[test]
    fn mid_segment_crossing_is_rejected() {
        let result = ArenaBuilder::new(0.1)
            .rectangle(Point::ZERO, Point::new(2.0, 2.0))
            .add_wall("a", Point::new(0.5, 1.0), Point::new(1.0, 0.0), ParamRange::UNIT)
            .add_wall("b", Point::new(1.0, 0.5), Point::new(0.0, 1.0), ParamRange::UNIT)
            .build();
        match result {
            Err(SpatialError::WallsCross { a, b, point }) => {
                assert_eq!((a.as_str(), b.as_str()), ("a", "b"));
                assert!(point.approx_eq(Point::new(1.0, 1.0), 1e-12));
            }
            other => panic!("expected WallsCross, got {:?}", other.err()),
        }
    }

    #[test]
    fn zero_slope_is_rejected() {
        let result = ArenaBuilder::new(0.1)
            .rectangle(Point::ZERO, Point::new(1.0, 1.0))
            .add_wall("dot", Point::new(0.5, 0.5), Point::ZERO, ParamRange::UNIT)
            .build();
        assert!(matches!(result, Err(SpatialError::DegenerateWall(n)) if n == "dot"));
    }

    #[test]
    fn empty_range_is_rejected() {
        let result = ArenaBuilder::new(0.1)
            .rectangle(Point::ZERO, Point::new(1.0, 1.0))
            .add_wall("flat", Point::new(0.5, 0.5), Point::new(0.1, 0.0), ParamRange::new(1.0, 1.0))
            .build();
        assert!(matches!(result, Err(SpatialError::InvalidRange(_))));
    }
}

// ── Arena construction ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use rat_core::Point;

    use crate::{Arena, ArenaBuilder, Boundary, ParamRange, SpatialError};

    #[test]
    fn open_boundary_is_rejected() {
        let result = ArenaBuilder::new(0.3)
            .add_border_wall("a", Point::new(0.0, 0.0), Point::new(1.0, 0.0), ParamRange::UNIT)
            .add_border_wall("b", Point::new(1.0, 0.0), Point::new(-1.0, 1.0), ParamRange::UNIT)
            .add_border_wall("c", Point::new(0.0, 1.0), Point::new(0.0, -0.5), ParamRange::UNIT)
            .build();
        assert!(matches!(result, Err(SpatialError::OpenBoundary(_))));
    }

    #[test]
    fn obstacles_only_has_no_border() {
        let result = ArenaBuilder::new(0.3)
            .add_wall("a", Point::new(0.0, 0.0), Point::new(1.0, 0.0), ParamRange::UNIT)
            .build();
        assert!(matches!(result, Err(SpatialError::NoBorder)));
    }

    #[test]
    fn soft_boundary_must_be_positive() {
        let result = Arena::rectangle(Point::ZERO, Point::new(1.0, 1.0), 0.0);
        assert!(matches!(result, Err(SpatialError::InvalidSoftBoundary(_))));
    }

    #[test]
    fn inverted_rectangle_has_no_interior() {
        let result = Arena::rectangle(Point::new(1.0, 1.0), Point::ZERO, 0.1);
        assert!(result.is_err());
    }

    #[test]
    fn rectangle_metadata() {
        let arena = super::helpers::box22();
        assert_eq!(arena.boundary(), Boundary::Rectangle);
        assert_eq!(arena.origin(), Point::ZERO);
        assert_eq!(arena.extent(), Point::new(2.2, 2.2));
        assert_eq!(arena.soft_boundary(), 0.3);
    }

    #[test]
    fn grid_covers_bounding_box() {
        let arena = super::helpers::box22();
        let grid = arena.grid(3, 2);
        assert_eq!(grid.len(), 6);
        assert_eq!(grid[0], Point::new(0.0, 0.0));
        assert_eq!(grid[1], Point::new(1.1, 0.0));
        assert_eq!(grid[2], Point::new(2.2, 0.0));
        assert_eq!(grid[5], Point::new(2.2, 2.2));
        assert!(arena.grid(0, 4).is_empty());
    }
}

// ── Rectangle queries ─────────────────────────────────────────────────────────

#[cfg(test)]
mod rectangle {
    use approx::assert_relative_eq;
    use rand::rngs::SmallRng;
    use rand::{Rng, SeedableRng};
    use rat_core::Point;

    use crate::{Environment, ParamRange, SpatialError, intersect};

    #[test]
    fn crash_point_scenario() {
        let arena = super::helpers::box22();
        let crash = arena.crash_point(Point::new(1.0, 1.0), Point::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(crash.point.x, 2.2, epsilon = 1e-12);
        assert_relative_eq!(crash.point.y, 1.0, epsilon = 1e-12);
        assert_relative_eq!(crash.distance, 1.2, epsilon = 1e-12);
        let wall = arena.wall(crash.wall);
        assert!(wall.is_border());
        assert_eq!(wall.name, "border_wall3");
    }

    #[test]
    fn crash_point_ignores_direction_magnitude() {
        let arena = super::helpers::box22();
        let a = arena.crash_point(Point::new(1.0, 1.0), Point::new(1.0, 0.0)).unwrap();
        let b = arena.crash_point(Point::new(1.0, 1.0), Point::new(7.5, 0.0)).unwrap();
        assert!(a.point.approx_eq(b.point, 1e-12));
        assert_eq!(a.wall, b.wall);
    }

    #[test]
    fn crash_point_is_nearest_forward_hit() {
        let arena = super::helpers::box22();
        let mut rng = SmallRng::seed_from_u64(11);
        for _ in 0..500 {
            let pos = Point::new(rng.gen_range(0.01..2.19), rng.gen_range(0.01..2.19));
            let dir = Point::from_angle(rng.gen_range(0.0..std::f64::consts::TAU));
            let crash = arena.crash_point(pos, dir).unwrap();

            assert!(super::helpers::dist_to_wall(crash.point, arena.wall(crash.wall)) < 1e-9);
            assert!((crash.point - pos).dot(dir) >= -1e-12);
            for wall in arena.walls() {
                if let Some(hit) = intersect(pos, dir, wall.bias, wall.slope, ParamRange::FORWARD, wall.t_range) {
                    if hit.valid {
                        assert!(pos.distance(hit.point) >= crash.distance - 1e-12);
                    }
                }
            }
        }
    }

    #[test]
    fn crash_point_outside_is_an_error() {
        let arena = super::helpers::box22();
        let result = arena.crash_point(Point::new(3.0, 1.0), Point::new(1.0, 0.0));
        assert!(matches!(result, Err(SpatialError::NoCrashPoint { .. })));
        let result = arena.crash_point(Point::new(1.0, 1.0), Point::ZERO);
        assert!(matches!(result, Err(SpatialError::NoCrashPoint { .. })));
    }

    #[test]
    fn rejection_is_zero_away_from_walls() {
        let arena = super::helpers::box22();
        assert!(arena.wall_rejection(Point::new(1.1, 1.1)).is_zero());

        let mut rng = SmallRng::seed_from_u64(5);
        for _ in 0..500 {
            let pos = Point::new(rng.gen_range(0.31..1.89), rng.gen_range(0.31..1.89));
            assert!(arena.wall_rejection(pos).is_zero(), "{pos}");
        }
    }

    #[test]
    fn rejection_points_away_from_near_wall() {
        let arena = super::helpers::box22();
        let ed = arena.wall_rejection(Point::new(0.1, 1.1));
        assert!(ed.approx_eq(Point::new(1.0, 0.0), 1e-9));

        let ed = arena.wall_rejection(Point::new(1.1, 2.0));
        assert!(ed.approx_eq(Point::new(0.0, -1.0), 1e-9));
    }

    #[test]
    fn rejection_sums_in_corners() {
        let arena = super::helpers::box22();
        let ed = arena.wall_rejection(Point::new(0.1, 0.2));
        assert!(ed.approx_eq(Point::new(1.0, 1.0), 1e-9));
    }

    #[test]
    fn rejection_skips_walls_beyond_their_ends() {
        let arena = crate::ArenaBuilder::new(0.3)
            .rectangle(Point::ZERO, Point::new(4.0, 4.0))
            .add_wall("pillar", Point::new(2.0, 1.0), Point::new(0.0, 1.0), ParamRange::UNIT)
            .build()
            .unwrap();
        // Beside the pillar: repelled along +x.
        let ed = arena.wall_rejection(Point::new(2.1, 1.5));
        assert!(ed.approx_eq(Point::new(1.0, 0.0), 1e-9));
        // Past its top end: the perpendicular foot misses the segment.
        assert!(arena.wall_rejection(Point::new(2.1, 2.2)).is_zero());
    }

    #[test]
    fn rejection_on_a_wall_is_its_inward_normal() {
        let arena = super::helpers::box22();
        let cases = [
            (Point::new(0.0, 1.1), Point::new(1.0, 0.0)),
            (Point::new(1.1, 2.2), Point::new(0.0, -1.0)),
            (Point::new(2.2, 1.1), Point::new(-1.0, 0.0)),
            (Point::new(1.1, 0.0), Point::new(0.0, 1.0)),
            (Point::new(0.0, 0.0), Point::new(1.0, 1.0)),
            (Point::new(2.2, 2.2), Point::new(-1.0, -1.0)),
        ];
        for (pos, expected) in cases {
            let ed = arena.wall_rejection(pos);
            assert!(ed.approx_eq(expected, 1e-12), "{pos}: {ed}");
        }
    }

    #[test]
    fn border_normals_face_inward() {
        let arena = super::helpers::box22();
        let left = arena.wall_by_name("border_wall1").unwrap();
        assert_eq!(arena.inward_normal(left.id), Some(Point::new(1.0, 0.0)));
        let top = arena.wall_by_name("border_wall2").unwrap();
        assert!(arena.inward_normal(top.id).unwrap().approx_eq(Point::new(0.0, -1.0), 1e-12));
    }

    #[test]
    fn crash_from_a_wall_depends_on_direction() {
        let arena = super::helpers::box22();
        let start = Point::new(0.0, 1.1);

        // Into the box: the wall underfoot is ignored.
        let crash = arena.crash_point(start, Point::new(1.0, 0.0)).unwrap();
        assert_eq!(arena.wall(crash.wall).name, "border_wall3");
        assert_relative_eq!(crash.distance, 2.2, epsilon = 1e-12);

        // Out of the box: blocked immediately.
        let crash = arena.crash_point(start, Point::new(-1.0, 0.5)).unwrap();
        assert_eq!(arena.wall(crash.wall).name, "border_wall1");
        assert_eq!(crash.distance, 0.0);
    }

    #[test]
    fn crash_from_a_corner() {
        let arena = super::helpers::box22();
        let crash = arena.crash_point(Point::ZERO, Point::new(1.0, 1.0)).unwrap();
        assert!(crash.point.approx_eq(Point::new(2.2, 2.2), 1e-12));
        assert_relative_eq!(crash.distance, 2.2 * 2f64.sqrt(), epsilon = 1e-12);

        let crash = arena.crash_point(Point::ZERO, Point::new(0.4, -0.9)).unwrap();
        assert_eq!(crash.distance, 0.0);
    }

    #[test]
    fn interior_wall_can_be_left_either_way() {
        let arena = crate::ArenaBuilder::new(0.3)
            .rectangle(Point::ZERO, Point::new(4.0, 4.0))
            .add_wall("pillar", Point::new(2.0, 1.0), Point::new(0.0, 1.0), ParamRange::UNIT)
            .build()
            .unwrap();
        let pillar = arena.wall_by_name("pillar").unwrap();
        assert_eq!(arena.inward_normal(pillar.id), None);

        let on_pillar = Point::new(2.0, 1.5);
        assert!(arena.wall_rejection(on_pillar).is_zero());
        for (dir, distance) in [(Point::new(1.0, 0.0), 2.0), (Point::new(-1.0, 0.0), 2.0)] {
            let crash = arena.crash_point(on_pillar, dir).unwrap();
            assert!(arena.wall(crash.wall).is_border());
            assert_relative_eq!(crash.distance, distance, epsilon = 1e-12);
        }
    }

    #[test]
    fn inside_is_inclusive_of_border() {
        let arena = super::helpers::box22();
        assert!(arena.inside_environment(Point::new(0.0, 0.0)));
        assert!(arena.inside_environment(Point::new(2.2, 1.0)));
        assert!(arena.inside_environment(Point::new(1.0, 1.0)));
        assert!(!arena.inside_environment(Point::new(2.2001, 1.0)));
        assert!(!arena.inside_environment(Point::new(1.0, -1e-9)));
    }

    #[test]
    fn uniform_samples_stay_in_box() {
        let arena = super::helpers::box22();
        let mut rng = SmallRng::seed_from_u64(42);
        let points = arena.sample_uniform(1000, &mut rng).unwrap();
        assert_eq!(points.len(), 1000);
        for p in &points {
            assert!(0.0 <= p.x && p.x <= 2.2 && 0.0 <= p.y && p.y <= 2.2, "{p}");
        }
        // Roughly uniform: both halves get a fair share.
        let left = points.iter().filter(|p| p.x < 1.1).count();
        assert!((350..650).contains(&left), "left = {left}");
    }
}

// ── Polygonal arenas ──────────────────────────────────────────────────────────

#[cfg(test)]
mod polygon {
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;
    use rat_core::Point;

    use crate::{Arena, ArenaBuilder, Boundary, Environment};

    fn triangle() -> Arena {
        ArenaBuilder::new(0.2)
            .polygon(&[Point::new(0.0, 0.0), Point::new(2.0, 0.0), Point::new(0.0, 2.0)])
            .build()
            .unwrap()
    }

    fn l_shape() -> Arena {
        ArenaBuilder::new(0.2)
            .polygon(&[
                Point::new(0.0, 0.0),
                Point::new(2.0, 0.0),
                Point::new(2.0, 1.0),
                Point::new(1.0, 1.0),
                Point::new(1.0, 2.0),
                Point::new(0.0, 2.0),
            ])
            .build()
            .unwrap()
    }

    #[test]
    fn triangle_membership() {
        let arena = triangle();
        assert_eq!(arena.boundary(), Boundary::Polygon);
        assert_eq!(arena.extent(), Point::new(2.0, 2.0));
        assert!(arena.inside_environment(Point::new(0.5, 0.5)));
        assert!(arena.inside_environment(Point::new(1.0, 1.0))); // on the hypotenuse
        assert!(arena.inside_environment(Point::new(0.0, 1.0))); // on the left edge
        assert!(!arena.inside_environment(Point::new(1.5, 1.5)));
        assert!(!arena.inside_environment(Point::new(-0.1, 0.5)));
    }

    #[test]
    fn l_shape_membership() {
        let arena = l_shape();
        assert!(arena.inside_environment(Point::new(0.5, 1.5)));
        assert!(arena.inside_environment(Point::new(1.5, 0.5)));
        assert!(!arena.inside_environment(Point::new(1.5, 1.5)));
    }

    #[test]
    fn polygon_sampling_is_rejection_based() {
        let arena = triangle();
        let mut rng = SmallRng::seed_from_u64(3);
        let points = arena.sample_uniform(500, &mut rng).unwrap();
        assert_eq!(points.len(), 500);
        for p in points {
            assert!(p.x + p.y <= 2.0 + 1e-12, "{p}");
            assert!(arena.inside_environment(p));
        }
    }

    #[test]
    fn crash_into_hypotenuse() {
        let arena = triangle();
        let crash = arena.crash_point(Point::new(0.5, 0.5), Point::new(1.0, 1.0)).unwrap();
        assert!(crash.point.approx_eq(Point::new(1.0, 1.0), 1e-12));
        assert_relative_eq!(crash.distance, 0.5f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn on_hypotenuse_faces_the_origin() {
        let arena = triangle();
        let on_edge = Point::new(1.0, 1.0);
        let ed = arena.wall_rejection(on_edge);
        let inward = Point::new(-1.0, -1.0) / 2f64.sqrt();
        assert!(ed.approx_eq(inward, 1e-12), "{ed}");

        let crash = arena.crash_point(on_edge, Point::new(-1.0, -1.0)).unwrap();
        assert!(crash.point.approx_eq(Point::ZERO, 1e-12));
        assert_relative_eq!(crash.distance, 2f64.sqrt(), epsilon = 1e-12);
        let crash = arena.crash_point(on_edge, Point::new(1.0, 1.0)).unwrap();
        assert_eq!(crash.distance, 0.0);
    }

    #[test]
    fn crash_into_inner_corner_wall() {
        let arena = l_shape();
        let crash = arena.crash_point(Point::new(0.5, 1.5), Point::new(1.0, 0.0)).unwrap();
        assert!(crash.point.approx_eq(Point::new(1.0, 1.5), 1e-12));
        assert_relative_eq!(crash.distance, 0.5, epsilon = 1e-12);
    }
}

// ── Boundary policies ─────────────────────────────────────────────────────────

#[cfg(test)]
mod policy {
    use std::f64::consts::{FRAC_PI_2, PI};

    use approx::assert_relative_eq;
    use rat_core::{BoundaryMode, Point};

    use crate::{BoundaryPolicy, Environment, OpenField};

    #[test]
    fn mode_maps_to_policy() {
        assert_eq!(BoundaryPolicy::from(BoundaryMode::Zenos), BoundaryPolicy::Zenos);
        assert_eq!(BoundaryPolicy::from(BoundaryMode::Sorschers), BoundaryPolicy::Sorschers);
    }

    #[test]
    fn zenos_leaves_open_floor_alone() {
        let arena = super::helpers::box22();
        let out = arena
            .avoid_walls(BoundaryPolicy::Zenos, Point::new(1.1, 1.1), 0.3, 0.05, 0.1)
            .unwrap();
        assert_eq!(out, (0.05, 0.1));
    }

    #[test]
    fn zenos_reflects_turn_away_from_wall() {
        let arena = super::helpers::box22();
        // Near the left wall facing +y; turning left (+) would head into it.
        let (speed, turn) = arena
            .avoid_walls(BoundaryPolicy::Zenos, Point::new(0.1, 1.1), FRAC_PI_2, 0.05, 0.3)
            .unwrap();
        assert_eq!(turn, -0.3);
        assert_eq!(speed, 0.05);
    }

    #[test]
    fn zenos_caps_speed_at_half_the_gap() {
        let arena = super::helpers::box22();
        let (speed, turn) = arena
            .avoid_walls(BoundaryPolicy::Zenos, Point::new(0.1, 1.1), PI, 1.0, 0.0)
            .unwrap();
        assert_eq!(turn, 0.0);
        assert_relative_eq!(speed, 0.05, epsilon = 1e-9);
    }

    #[test]
    fn zenos_on_a_wall_cannot_step_through_it() {
        let arena = super::helpers::box22();
        for (pos, heading) in [
            (Point::new(0.0, 1.1), PI),
            (Point::new(1.1, 2.2), FRAC_PI_2),
            (Point::new(2.2, 1.1), 0.0),
            (Point::new(1.1, 0.0), -FRAC_PI_2),
            (Point::new(0.0, 0.0), -3.0 * PI / 4.0),
        ] {
            let (speed, turn) = arena.avoid_walls(BoundaryPolicy::Zenos, pos, heading, 0.05, 0.3).unwrap();
            assert_eq!(speed, 0.0, "{pos}");
            assert_eq!(turn.abs(), 0.3);
        }
    }

    #[test]
    fn zenos_on_a_wall_moves_off_it() {
        let arena = super::helpers::box22();
        let out = arena
            .avoid_walls(BoundaryPolicy::Zenos, Point::new(0.0, 1.1), 0.0, 0.05, 0.1)
            .unwrap();
        assert_eq!(out, (0.05, 0.1));
    }

    #[test]
    fn sorschers_on_a_wall() {
        let arena = super::helpers::box22();
        let (speed, turn) = arena
            .avoid_walls(BoundaryPolicy::Sorschers, Point::new(0.0, 1.1), PI - 0.3, 0.08, 0.1)
            .unwrap();
        assert_relative_eq!(speed, 0.02, epsilon = 1e-15);
        assert_eq!(turn, -FRAC_PI_2);
    }

    #[test]
    fn sorschers_snaps_and_quarters_speed() {
        let arena = super::helpers::box22();
        let (speed, turn) = arena
            .avoid_walls(BoundaryPolicy::Sorschers, Point::new(0.1, 1.1), PI - 0.3, 0.08, 0.1)
            .unwrap();
        assert_relative_eq!(speed, 0.02, epsilon = 1e-15);
        assert_eq!(turn, -FRAC_PI_2);
        // The new heading runs along the wall, away from it.
        assert!(Point::from_angle(PI - 0.3 + turn).x > 0.0);
    }

    #[test]
    fn sorschers_ignores_headings_leaving_the_wall() {
        let arena = super::helpers::box22();
        let out = arena
            .avoid_walls(BoundaryPolicy::Sorschers, Point::new(0.1, 1.1), 0.0, 0.08, 0.1)
            .unwrap();
        assert_eq!(out, (0.08, 0.1));
    }

    #[test]
    fn sorschers_clips_escaped_positions() {
        let arena = super::helpers::box22();
        let (speed, _) = arena
            .avoid_walls(BoundaryPolicy::Sorschers, Point::new(-0.05, 1.1), PI - 0.3, 0.08, 0.0)
            .unwrap();
        assert_relative_eq!(speed, 0.02, epsilon = 1e-15);
    }

    #[test]
    fn open_field_never_corrects() {
        let field = OpenField::default();
        for policy in [BoundaryPolicy::Zenos, BoundaryPolicy::Sorschers] {
            let out = field.avoid_walls(policy, Point::new(-5.0, 0.0), PI, 0.3, 0.2).unwrap();
            assert_eq!(out, (0.3, 0.2));
        }
        assert!(field.inside_environment(Point::new(1e6, -1e6)));
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use approx::assert_relative_eq;
    use rat_core::Point;

    use crate::{Boundary, Environment, SpatialError, load_walls_reader};

    const BOX_CSV: &str = "\
name,bias_x,bias_y,slope_x,slope_y,t_min,t_max,border\n\
border_wall1,0,0,0,2.2,0,1,true\n\
border_wall2,0,2.2,2.2,0,0,1,true\n\
border_wall3,2.2,0,0,2.2,0,1,true\n\
border_wall4,0,0,2.2,0,0,1,true\n\
pillar,1.1,0,0,0.5,,,\n\
";

    #[test]
    fn loads_box_with_pillar() {
        let arena = load_walls_reader(Cursor::new(BOX_CSV), 0.3).unwrap();
        assert_eq!(arena.wall_count(), 5);
        assert_eq!(arena.boundary(), Boundary::Polygon);

        let pillar = arena.wall_by_name("pillar").unwrap();
        assert!(!pillar.is_border());
        assert_eq!(pillar.end(), Point::new(1.1, 0.5));
        assert_eq!(pillar.is_corner(), (true, false));

        assert!(arena.inside_environment(Point::new(1.0, 1.0)));
        assert!(!arena.inside_environment(Point::new(3.0, 1.0)));
        let crash = arena.crash_point(Point::new(1.0, 1.0), Point::new(1.0, 0.0)).unwrap();
        assert_relative_eq!(crash.distance, 1.2, epsilon = 1e-12);
    }

    #[test]
    fn bad_number_is_a_parse_error() {
        let csv = "name,bias_x,bias_y,slope_x,slope_y,t_min,t_max,border\nw,abc,0,1,0,0,1,true\n";
        let result = load_walls_reader(Cursor::new(csv), 0.3);
        assert!(matches!(result, Err(SpatialError::Parse(_))));
    }

    #[test]
    fn header_only_is_a_parse_error() {
        let csv = "name,bias_x,bias_y,slope_x,slope_y,t_min,t_max,border\n";
        let result = load_walls_reader(Cursor::new(csv), 0.3);
        assert!(matches!(result, Err(SpatialError::Parse(_))));
    }
}
