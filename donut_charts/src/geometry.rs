// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure geometry for wedges, label anchors and cube faces.
//!
//! Angles are in degrees. 0° points due east and positive angles sweep clockwise in y-down
//! screen coordinates, which is also `kurbo`'s convention once converted to radians.
//!
//! Nothing in this module holds state; every function can be tested with literal coordinates.

use kurbo::{Arc, BezPath, Point, Shape, Vec2};

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

/// Curve flattening tolerance used when converting arcs into cubic segments.
pub const ARC_TOLERANCE: f64 = 0.1;

/// Normalizes an angle in degrees into `[0, 360)`.
pub fn normalize_degrees(degrees: f64) -> f64 {
    let r = degrees % 360.0;
    let r = if r < 0.0 { r + 360.0 } else { r };
    // `-1e-20 + 360.0` rounds to 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// Builds a closed pie wedge: move to `center`, line to the arc start, arc, close.
///
/// `start_angle + span_angle` may exceed 360; the arc simply continues around.
pub fn wedge_path(center: Point, radius: f64, start_angle: f64, span_angle: f64) -> BezPath {
    let arc = Arc {
        center,
        radii: Vec2::new(radius, radius),
        start_angle: start_angle.to_radians(),
        sweep_angle: span_angle.to_radians(),
        x_rotation: 0.0,
    };
    let mut path = BezPath::new();
    path.move_to(center);
    path.line_to(point_on_circle(center, start_angle, 2.0 * radius, 1.0));
    for el in arc.append_iter(ARC_TOLERANCE) {
        path.push(el);
    }
    path.close_path();
    path
}

/// Returns the point on the ray from `center` at `angle`, at `diameter / 2 * distance_fraction`.
///
/// Labels use a fraction of about `0.5` (mid-wedge) or `1.15` (outside the pie).
pub fn point_on_circle(center: Point, angle: f64, diameter: f64, distance_fraction: f64) -> Point {
    let radius = diameter * 0.5 * distance_fraction;
    center + Vec2::from_angle(angle.to_radians()) * radius
}

/// A donut wedge: an angular range of a circle with a circular hole cut out of its center.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Wedge {
    /// Center of the donut.
    pub center: Point,
    /// Outer radius.
    pub radius: f64,
    /// Radius of the center hole; points at or inside it never hit.
    pub hole_radius: f64,
    /// Start angle in degrees.
    pub start_angle: f64,
    /// Angular width in degrees.
    pub span_angle: f64,
}

impl Wedge {
    /// Creates a wedge without a hole.
    pub fn new(center: Point, radius: f64, start_angle: f64, span_angle: f64) -> Self {
        Self {
            center,
            radius,
            hole_radius: 0.0,
            start_angle,
            span_angle,
        }
    }

    /// Sets the hole radius.
    pub fn with_hole(mut self, hole_radius: f64) -> Self {
        self.hole_radius = hole_radius;
        self
    }

    /// Angle through the middle of the wedge.
    pub fn mid_angle(&self) -> f64 {
        self.start_angle + self.span_angle * 0.5
    }

    /// The fillable wedge path (see [`wedge_path`]).
    ///
    /// The hole is not part of the path; painters clip it out.
    pub fn path(&self) -> BezPath {
        wedge_path(self.center, self.radius, self.start_angle, self.span_angle)
    }

    /// Hit-tests `point` against this wedge.
    pub fn contains(&self, point: Point) -> bool {
        contains(self, point)
    }
}

/// Hit-tests `point` against `wedge`.
///
/// The angular test is the winding test of [`Wedge::path`]; points inside the hole or beyond the
/// outer radius are rejected before it.
pub fn contains(wedge: &Wedge, point: Point) -> bool {
    if wedge.span_angle <= 0.0 {
        return false;
    }
    let distance = wedge.center.distance(point);
    if distance <= wedge.hole_radius || distance > wedge.radius {
        return false;
    }
    if wedge.span_angle >= 360.0 {
        return true;
    }
    wedge.path().contains(point)
}

/// A quadrilateral face, vertices in drawing order.
pub type Quad = [Point; 4];

/// The three visible faces of a pseudo-3-D bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CubeFaces {
    /// Face towards the viewer.
    pub front: Quad,
    /// Right-hand face, receding by `depth`.
    pub side: Quad,
    /// Top face.
    pub top: Quad,
}

impl CubeFaces {
    /// Returns the faces moved by `offset`.
    pub fn translate(&self, offset: Vec2) -> Self {
        let shift = |q: &Quad| q.map(|p| p + offset);
        Self {
            front: shift(&self.front),
            side: shift(&self.side),
            top: shift(&self.top),
        }
    }

    /// Faces in back-to-front paint order.
    pub fn paint_order(&self) -> [&Quad; 3] {
        [&self.side, &self.front, &self.top]
    }
}

/// Computes the faces of a bar at `(x, y)` with the given extent and receding `depth`.
///
/// `y` insets the bar from both the top and the bottom of a `height`-tall box. The vertex order
/// of every face is fixed; renderers rely on it for consistent fills.
pub fn cube_faces(x: f64, y: f64, width: f64, height: f64, depth: f64) -> CubeFaces {
    let front = [
        Point::new(x, height - y),
        Point::new(x, depth + y),
        Point::new(x + width, y + depth),
        Point::new(x + width, height - y),
    ];
    let side = [
        Point::new(x + width, height - y),
        Point::new(x + width, y + depth),
        Point::new(width + depth - x, y),
        Point::new(width + depth - x, height - depth - y),
    ];
    let top = [
        Point::new(x, depth + y),
        Point::new(depth - (x / 2.0).floor(), y),
        Point::new(width + depth - x, y),
        Point::new(x + width, y + depth),
    ];
    CubeFaces { front, side, top }
}

/// Builds a closed path through `points`.
pub fn polygon_path(points: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = points.iter();
    if let Some(first) = iter.next() {
        path.move_to(*first);
        for p in iter {
            path.line_to(*p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
mod tests {
    extern crate std;

    use std::vec::Vec;

    use super::*;

    const C: Point = Point::new(100.0, 100.0);

    fn assert_point_close(a: Point, b: Point) {
        let eps = 1e-9;
        assert!((a.x - b.x).abs() <= eps, "x {a:?} != {b:?}");
        assert!((a.y - b.y).abs() <= eps, "y {a:?} != {b:?}");
    }

    #[test]
    fn normalize_wraps_into_range() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-360.0), 0.0);
        let tiny = normalize_degrees(-1e-20);
        assert!((0.0..360.0).contains(&tiny), "got {tiny}");
    }

    #[test]
    fn point_on_circle_follows_clockwise_screen_convention() {
        assert_point_close(point_on_circle(C, 0.0, 100.0, 1.0), Point::new(150.0, 100.0));
        assert_point_close(point_on_circle(C, 90.0, 100.0, 1.0), Point::new(100.0, 150.0));
        assert_point_close(point_on_circle(C, 180.0, 100.0, 0.5), Point::new(75.0, 100.0));
        assert_point_close(point_on_circle(C, 270.0, 100.0, 1.15), Point::new(100.0, 42.5));
    }

    #[test]
    fn wedge_midpoint_is_inside_for_many_angles() {
        for start in (0..36).map(|i| f64::from(i) * 17.0) {
            for span in [5.0, 45.0, 90.0, 179.0, 270.0, 359.0] {
                let wedge = Wedge::new(C, 80.0, start, span).with_hole(8.0);
                let mid = point_on_circle(C, wedge.mid_angle(), 160.0, 0.5);
                assert!(wedge.contains(mid), "mid of {start}+{span} should hit");
            }
        }
    }

    #[test]
    fn hole_and_outside_never_hit() {
        let wedge = Wedge::new(C, 80.0, 10.0, 120.0).with_hole(8.0);
        let mid = wedge.mid_angle();
        // 0.05 of a 160 diameter is 4, inside the hole.
        assert!(!wedge.contains(point_on_circle(C, mid, 160.0, 0.05)));
        assert!(!wedge.contains(C));
        assert!(!wedge.contains(point_on_circle(C, mid, 160.0, 1.01)));
        assert!(wedge.contains(point_on_circle(C, mid, 160.0, 0.99)));
    }

    #[test]
    fn points_outside_the_angular_range_miss() {
        let wedge = Wedge::new(C, 80.0, 0.0, 90.0);
        assert!(wedge.contains(point_on_circle(C, 45.0, 160.0, 0.5)));
        assert!(!wedge.contains(point_on_circle(C, 135.0, 160.0, 0.5)));
        assert!(!wedge.contains(point_on_circle(C, 300.0, 160.0, 0.5)));
    }

    #[test]
    fn accumulated_angles_past_360_still_hit() {
        // A slice laid out after others can start beyond a full turn.
        let wedge = Wedge::new(C, 80.0, 350.0, 40.0);
        assert!(wedge.contains(point_on_circle(C, 10.0, 160.0, 0.5)));
        assert!(wedge.contains(point_on_circle(C, 355.0, 160.0, 0.5)));
        assert!(!wedge.contains(point_on_circle(C, 40.0, 160.0, 0.5)));
    }

    #[test]
    fn full_circle_and_empty_wedges() {
        let full = Wedge::new(C, 80.0, 0.0, 360.0).with_hole(8.0);
        for angle in [0.0, 90.0, 181.0, 300.0] {
            assert!(full.contains(point_on_circle(C, angle, 160.0, 0.5)));
        }
        let empty = Wedge::new(C, 80.0, 0.0, 0.0);
        assert!(!empty.contains(point_on_circle(C, 0.0, 160.0, 0.5)));
    }

    #[test]
    fn wedge_path_starts_at_center_and_closes() {
        let path = wedge_path(C, 50.0, 0.0, 90.0);
        let els: Vec<_> = path.elements().to_vec();
        assert_eq!(els.first(), Some(&kurbo::PathEl::MoveTo(C)));
        assert_eq!(els.last(), Some(&kurbo::PathEl::ClosePath));
        let bbox = path.bounding_box();
        assert!((bbox.x0 - 100.0).abs() < 1e-6 && (bbox.y0 - 100.0).abs() < 1e-6);
        assert!((bbox.x1 - 150.0).abs() < 1e-6 && (bbox.y1 - 150.0).abs() < 1e-6);
    }

    #[test]
    fn cube_faces_match_fixed_vertex_order() {
        let faces = cube_faces(2.0, 2.0, 60.0, 300.0, 40.0);
        let p = Point::new;
        assert_eq!(
            faces.front,
            [p(2.0, 298.0), p(2.0, 42.0), p(62.0, 42.0), p(62.0, 298.0)]
        );
        assert_eq!(
            faces.side,
            [p(62.0, 298.0), p(62.0, 42.0), p(98.0, 2.0), p(98.0, 258.0)]
        );
        assert_eq!(
            faces.top,
            [p(2.0, 42.0), p(39.0, 2.0), p(98.0, 2.0), p(62.0, 42.0)]
        );
    }

    #[test]
    fn front_and_side_share_exactly_one_edge() {
        let (x, y, w, h, d) = (2.0, 2.0, 60.0, 300.0, 40.0);
        let faces = cube_faces(x, y, w, h, d);
        let a = Point::new(x + w, h - y);
        let b = Point::new(x + w, y + d);
        let shared: Vec<_> = faces
            .front
            .iter()
            .filter(|v| faces.side.contains(v))
            .copied()
            .collect();
        assert_eq!(shared, [b, a]);
        // Front and top share the upper front edge.
        assert!(faces.top.contains(&faces.front[1]) && faces.top.contains(&faces.front[2]));
    }

    #[test]
    fn translate_moves_every_vertex() {
        let faces = cube_faces(0.0, 0.0, 10.0, 20.0, 4.0).translate(Vec2::new(5.0, 7.0));
        assert_eq!(faces.front[0], Point::new(5.0, 27.0));
        assert_eq!(faces.top[1], Point::new(9.0, 7.0));
    }

    #[test]
    fn polygon_path_is_closed() {
        let path = polygon_path(&cube_faces(2.0, 2.0, 60.0, 300.0, 40.0).front);
        assert_eq!(path.elements().len(), 5);
        assert!(polygon_path(&[]).elements().is_empty());
    }
}
