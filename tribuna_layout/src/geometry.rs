// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared geometry helpers.
//!
//! Everything here works in y-down screen coordinates, so an angle of `3π/2`
//! points up and angles increase clockwise on screen.

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Affine, BezPath, Circle, Point, Rect, RoundedRect, Shape, Vec2};

/// Slack used when turning a length ratio into a whole count, so `10.0 / 1.0`
/// computed as `9.999999999999998` still yields 10.
const COUNT_EPSILON: f64 = 1e-9;

/// Number of whole `unit`s that fit in `length`.
///
/// Returns 0 for non-positive or non-finite inputs.
pub fn whole_count(length: f64, unit: f64) -> usize {
    if !(length.is_finite() && unit.is_finite()) || length <= 0.0 || unit <= 0.0 {
        return 0;
    }
    let count = (length / unit + COUNT_EPSILON).floor();
    count as usize
}

/// Point on a circle of `radius` around `center` at `angle` radians.
pub fn arc_point(center: Point, radius: f64, angle: f64) -> Point {
    center + Vec2::new(radius * angle.cos(), radius * angle.sin())
}

/// A rounded rectangle outline.
pub fn rounded_rect_path(rect: Rect, radius: f64, tolerance: f64) -> BezPath {
    RoundedRect::from_rect(rect, radius)
        .path_elements(tolerance)
        .collect()
}

/// The region between two radii and two angles.
///
/// `sweep` is measured from `start_angle`, positive values run clockwise on screen.
pub fn annulus_sector_path(
    center: Point,
    outer_radius: f64,
    inner_radius: f64,
    start_angle: f64,
    sweep: f64,
    tolerance: f64,
) -> BezPath {
    Circle::new(center, outer_radius)
        .segment(inner_radius, start_angle, sweep)
        .path_elements(tolerance)
        .collect()
}

/// Rotation by `angle` radians about `center`.
pub fn rotate_about(angle: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * Affine::rotate(angle) * Affine::translate(-c)
}

/// Uniform scale by `factor` about `center`.
pub fn scale_about(factor: f64, center: Point) -> Affine {
    let c = center.to_vec2();
    Affine::translate(c) * Affine::scale(factor) * Affine::translate(-c)
}

/// Returns `true` if `inner` lies within `outer`, allowing `epsilon` of slack on every side.
pub fn rect_contains_rect(outer: Rect, inner: Rect, epsilon: f64) -> bool {
    inner.x0 >= outer.x0 - epsilon
        && inner.y0 >= outer.y0 - epsilon
        && inner.x1 <= outer.x1 + epsilon
        && inner.y1 <= outer.y1 + epsilon
}

/// Area shared by two rectangles (zero when they only touch or are disjoint).
pub fn overlap_area(a: Rect, b: Rect) -> f64 {
    let w = (a.x1.min(b.x1) - a.x0.max(b.x0)).max(0.0);
    let h = (a.y1.min(b.y1) - a.y0.max(b.y0)).max(0.0);
    w * h
}

/// Returns `true` if the closed path contains `point` (non-zero winding).
pub fn path_contains(path: &BezPath, point: Point) -> bool {
    path.contains(point)
}

#[cfg(test)]
mod tests {
    extern crate std;

    use core::f64::consts::{FRAC_PI_2, PI};

    use super::*;

    #[test]
    fn whole_count_tolerates_rounding() {
        let unit = 50.0 / 3.0 * 0.1;
        assert_eq!(whole_count(50.0 / 3.0, unit), 10);
        assert_eq!(whole_count(24.9, 25.0), 0);
        assert_eq!(whole_count(-3.0, 1.0), 0);
        assert_eq!(whole_count(3.0, 0.0), 0);
        assert_eq!(whole_count(f64::NAN, 1.0), 0);
    }

    #[test]
    fn arc_point_uses_screen_angles() {
        let up = arc_point(Point::new(10.0, 10.0), 5.0, 3.0 * FRAC_PI_2);
        assert!((up.x - 10.0).abs() < 1e-9);
        assert!((up.y - 5.0).abs() < 1e-9);
        let left = arc_point(Point::ZERO, 2.0, PI);
        assert!((left.x + 2.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_about_keeps_center_fixed() {
        let center = Point::new(3.0, 4.0);
        let moved = rotate_about(1.234, center) * center;
        assert!((moved - center).hypot() < 1e-9);
        let p = rotate_about(FRAC_PI_2, Point::ZERO) * Point::new(1.0, 0.0);
        assert!((p.x).abs() < 1e-9 && (p.y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn scale_about_keeps_center_fixed() {
        let center = Point::new(100.0, 50.0);
        let m = scale_about(4.0, center);
        assert!((m * center - center).hypot() < 1e-9);
        let p = m * Point::new(101.0, 50.0);
        assert!((p.x - 104.0).abs() < 1e-9);
    }

    #[test]
    fn annulus_sector_contains_its_midpoint() {
        let center = Point::new(50.0, 50.0);
        let path = annulus_sector_path(center, 40.0, 20.0, PI, FRAC_PI_2, 0.1);
        let mid = arc_point(center, 30.0, PI + FRAC_PI_2 / 2.0);
        assert!(path_contains(&path, mid));
        assert!(!path_contains(&path, center));
        let bounds = path.bounding_box();
        assert!(bounds.x1 <= center.x + 1e-6);
        assert!(bounds.y1 <= center.y + 1e-6);
    }

    #[test]
    fn overlap_area_is_zero_for_touching_rects() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(10.0, 0.0, 20.0, 10.0);
        assert_eq!(overlap_area(a, b), 0.0);
        assert!((overlap_area(a, Rect::new(5.0, 5.0, 15.0, 15.0)) - 25.0).abs() < 1e-9);
        assert!(rect_contains_rect(a, Rect::new(1.0, 1.0, 10.0 + 1e-7, 9.0), 1e-6));
    }
}
