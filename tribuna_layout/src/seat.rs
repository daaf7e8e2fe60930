// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seat generation.
//!
//! Straight tribunes get a rectangular grid of seats, arc tribunes a polar grid
//! (rows by radius, columns by angle). Every seat is the same silhouette, drawn
//! once in a unit square and then rotated about its own center and placed.

extern crate alloc;

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use crate::float::FloatExt;

use kurbo::{Affine, BezPath, Point, Rect, RoundedRect, Shape};

use crate::geometry::{arc_point, rotate_about, whole_count};
use crate::tribune::TribuneId;

/// Silhouette extents inside the unit square. Everything stays within
/// `[MARGIN, 1 - MARGIN]`, i.e. inside the square's inscribed circle, so any
/// rotation keeps the seat inside its cell.
const MARGIN: f64 = 0.15;
/// Bottom edge of the back-rest.
const BACK_BOTTOM: f64 = 0.4;
/// Right edge of the back-rest before skewing.
const BACK_RIGHT: f64 = 0.55;
/// Top edge of the seat pan.
const PAN_TOP: f64 = 0.5;
/// Back-rest skew angle.
const BACK_SKEW: f64 = core::f64::consts::FRAC_PI_4;
/// Corner radius of both parts.
const CORNER: f64 = 1.0 / 15.0;
/// Flattening tolerance in unit space.
const UNIT_TOLERANCE: f64 = 1e-3;

/// Stable identity of a seat: its tribune plus generation order inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SeatId {
    /// Owning tribune.
    pub tribune: TribuneId,
    /// Position in the tribune's seat list.
    pub index: usize,
}

/// A single seat.
#[derive(Clone, Debug, PartialEq)]
pub struct Seat {
    /// Identity.
    pub id: SeatId,
    /// Closed outline in chart coordinates.
    pub boundary: BezPath,
    /// Cached bounding box of `boundary`.
    pub bounds: Rect,
    /// Center of the seat cell.
    pub center: Point,
    /// Rotation in radians; the back-rest points away from the field.
    pub rotation: f64,
}

/// The seat silhouette in the unit square: a back-rest parallelogram skewed at
/// 45 degrees above a seat pan, both with rounded corners. At rotation 0 the
/// back-rest is on top.
pub fn seat_silhouette() -> BezPath {
    let skew = BACK_SKEW.tan();
    // x' = x + (BACK_BOTTOM - y) * skew, so the bottom edge stays put and the
    // top edge leans right.
    let lean = Affine::new([1.0, 0.0, -skew, 1.0, BACK_BOTTOM * skew, 0.0]);
    let back = RoundedRect::new(MARGIN, MARGIN, BACK_RIGHT, BACK_BOTTOM, CORNER);
    let pan = RoundedRect::new(MARGIN, PAN_TOP, 1.0 - MARGIN, 1.0 - MARGIN, CORNER);

    let mut path = BezPath::new();
    path.extend(
        back.path_elements(UNIT_TOLERANCE)
            .map(|el| lean * el),
    );
    path.extend(pan.path_elements(UNIT_TOLERANCE));
    path
}

/// Places silhouettes into seat cells.
#[derive(Clone, Debug)]
pub struct SeatGenerator {
    seat_size: f64,
    arc_padding: f64,
    silhouette: BezPath,
}

impl SeatGenerator {
    /// Creates a generator for square seats of side `seat_size`.
    ///
    /// `arc_padding` is the tiling unit of polar rows as a multiple of `seat_size`.
    pub fn new(seat_size: f64, arc_padding: f64) -> Self {
        Self {
            seat_size,
            arc_padding,
            silhouette: seat_silhouette(),
        }
    }

    /// Side length of one seat cell.
    pub fn seat_size(&self) -> f64 {
        self.seat_size
    }

    /// A seat occupying the square cell `cell`, rotated by `rotation` about its center.
    pub fn seat(&self, id: SeatId, cell: Rect, rotation: f64) -> Seat {
        let placement = Affine::translate(cell.origin().to_vec2())
            * Affine::scale(cell.width())
            * rotate_about(rotation, Point::new(0.5, 0.5));
        let mut boundary = self.silhouette.clone();
        boundary.apply_affine(placement);
        let bounds = boundary.bounding_box();
        Seat {
            id,
            boundary,
            bounds,
            center: cell.center(),
            rotation,
        }
    }

    /// Rectangular grid filling `rect`; the remainder in each axis becomes even spacing.
    pub fn grid(&self, tribune: TribuneId, rect: Rect, rotation: f64) -> Vec<Seat> {
        let size = self.seat_size;
        let columns = whole_count(rect.width(), size);
        let rows = whole_count(rect.height(), size);
        if columns == 0 || rows == 0 {
            return Vec::new();
        }
        let spacing_h = (rect.width() - size * columns as f64) / columns as f64;
        let spacing_v = (rect.height() - size * rows as f64) / rows as f64;

        let mut seats = Vec::with_capacity(columns * rows);
        for column in 0..columns {
            for row in 0..rows {
                let x = rect.x0 + spacing_h / 2.0 + (spacing_h + size) * column as f64;
                let y = rect.y0 + spacing_v / 2.0 + (spacing_v + size) * row as f64;
                let cell = Rect::new(x, y, x + size, y + size);
                let id = SeatId {
                    tribune,
                    index: seats.len(),
                };
                seats.push(self.seat(id, cell, rotation));
            }
        }
        seats
    }

    /// Polar grid inside an arc tribune.
    ///
    /// Rows run inward from `outer_radius`, `depth` deep in total. Each row is tiled
    /// with as many seats as fit at its radius, evenly spaced between
    /// `start_angle` and `start_angle + sweep`. Seats face the arc's center.
    pub fn polar(
        &self,
        tribune: TribuneId,
        center: Point,
        outer_radius: f64,
        depth: f64,
        start_angle: f64,
        sweep: f64,
    ) -> Vec<Seat> {
        let size = self.seat_size;
        let rows = whole_count(depth, size);
        if rows == 0 {
            return Vec::new();
        }
        let row_gap = (depth - size * rows as f64) / rows as f64;

        let mut seats = Vec::new();
        for row in 0..rows {
            let radius = outer_radius - row_gap / 2.0 - size / 2.0 - (row_gap + size) * row as f64;
            if radius <= size / 2.0 {
                break;
            }
            let arc_length = sweep.abs() * radius;
            let count = whole_count(arc_length, size * self.arc_padding);
            if count == 0 {
                continue;
            }
            let spacing = (arc_length - size * count as f64) / count as f64;
            let seat_angle = size / radius;
            let spacing_angle = spacing / radius;

            let mut angle = start_angle + spacing_angle / 2.0 + seat_angle / 2.0;
            for _ in 0..count {
                let seat_center = arc_point(center, radius, angle);
                let cell = Rect::from_center_size(seat_center, (size, size));
                let id = SeatId {
                    tribune,
                    index: seats.len(),
                };
                seats.push(self.seat(id, cell, angle + core::f64::consts::FRAC_PI_2));
                angle += spacing_angle + seat_angle;
            }
        }
        seats
    }
}
