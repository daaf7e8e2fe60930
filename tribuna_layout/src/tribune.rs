// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tribune generation for a single sector.
//!
//! The straight part of each of the four sector edges is tiled with rectangular
//! tribunes; each rounded corner is tiled with arc tribunes (annulus sectors).
//! Generation order is: straight top/bottom pairs, straight left/right pairs,
//! then the corners clockwise from the top-left.

extern crate alloc;

use alloc::vec::Vec;

use core::f64::consts::{FRAC_PI_2, PI};

use kurbo::{BezPath, Point, Rect, Shape};

use crate::geometry::{annulus_sector_path, whole_count};
use crate::seat::{Seat, SeatGenerator};
use crate::sector::Sector;
use crate::spec::StadiumSpec;

/// Stable identity of a tribune: its sector plus generation order inside it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TribuneId {
    /// Owning sector index.
    pub sector: usize,
    /// Position in the sector's tribune list.
    pub index: usize,
}

/// Which straight sector edge a rectangular tribune sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Edge {
    /// Upper edge.
    Top,
    /// Right edge.
    Right,
    /// Lower edge.
    Bottom,
    /// Left edge.
    Left,
}

impl Edge {
    /// Rotation shared by every seat on this edge, so seat backs face away from the field.
    pub fn seat_rotation(self) -> f64 {
        match self {
            Self::Top => 0.0,
            Self::Right => FRAC_PI_2,
            Self::Bottom => PI,
            Self::Left => 3.0 * FRAC_PI_2,
        }
    }

    /// Returns `true` for the left and right edges, whose tribunes are turned 90 degrees.
    pub fn is_vertical(self) -> bool {
        matches!(self, Self::Left | Self::Right)
    }
}

/// Shape of a tribune.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TribuneKind {
    /// A rectangle along a straight edge.
    Straight {
        /// Tribune rectangle.
        rect: Rect,
        /// Edge the tribune sits on.
        edge: Edge,
    },
    /// An annulus sector in a rounded corner.
    Arc {
        /// Center of the corner arc.
        center: Point,
        /// Outer radius.
        outer_radius: f64,
        /// Inner radius (`outer_radius` minus the tribune depth).
        inner_radius: f64,
        /// Start angle in radians.
        start_angle: f64,
        /// Angular extent in radians.
        sweep: f64,
    },
}

impl TribuneKind {
    /// Returns `true` for arc tribunes.
    pub fn is_arc(&self) -> bool {
        matches!(self, Self::Arc { .. })
    }
}

/// A block of seats.
#[derive(Clone, Debug, PartialEq)]
pub struct Tribune {
    /// Identity.
    pub id: TribuneId,
    /// Shape parameters.
    pub kind: TribuneKind,
    /// Closed outline used for drawing and precise hit-testing.
    pub boundary: BezPath,
    /// Cached bounding box of `boundary`.
    pub bounds: Rect,
    /// Seats in generation order.
    pub seats: Vec<Seat>,
}

impl Tribune {
    /// Looks up a seat by its index.
    pub fn seat(&self, index: usize) -> Option<&Seat> {
        self.seats.get(index)
    }
}

/// Computes the tribunes of one sector.
#[derive(Clone, Debug)]
pub struct TribuneGenerator<'a> {
    spec: &'a StadiumSpec,
    seats: SeatGenerator,
}

impl<'a> TribuneGenerator<'a> {
    /// Creates a generator for sectors of `spec`.
    pub fn new(spec: &'a StadiumSpec) -> Self {
        Self {
            spec,
            seats: SeatGenerator::new(spec.seat_size(), spec.arc_seat_padding),
        }
    }

    /// Straight tribunes followed by arc tribunes.
    pub fn generate(&self, sector: &Sector) -> Vec<Tribune> {
        let mut tribunes = Vec::new();
        self.straight_tribunes(sector, &mut tribunes);
        self.arc_tribunes(sector, &mut tribunes);
        tribunes
    }

    /// Tiles the straight part of each edge. Top/bottom and left/right rows mirror each other.
    fn straight_tribunes(&self, sector: &Sector, out: &mut Vec<Tribune>) {
        let rect = sector.bounds;
        let corner = sector.corner_radius;
        let inset = self.spec.edge_inset();
        let size = self.spec.tribune_size(sector.index);

        let segment_h = rect.width() - 2.0 * corner;
        let count_h = whole_count(segment_h, size.width);
        if count_h > 0 {
            let spacing = (segment_h - size.width * count_h as f64) / count_h as f64;
            for i in 0..count_h {
                let x = rect.x0 + corner + spacing / 2.0 + (size.width + spacing) * i as f64;
                let top = Rect::new(
                    x,
                    rect.y0 + inset,
                    x + size.width,
                    rect.y0 + inset + size.height,
                );
                let bottom = Rect::new(
                    x,
                    rect.y1 - inset - size.height,
                    x + size.width,
                    rect.y1 - inset,
                );
                out.push(self.straight(sector.index, out.len(), top, Edge::Top));
                out.push(self.straight(sector.index, out.len(), bottom, Edge::Bottom));
            }
        }

        let segment_v = rect.height() - 2.0 * corner;
        let count_v = whole_count(segment_v, size.width);
        if count_v > 0 {
            let spacing = (segment_v - size.width * count_v as f64) / count_v as f64;
            for i in 0..count_v {
                let y = rect.y0 + corner + spacing / 2.0 + (size.width + spacing) * i as f64;
                let left = Rect::new(
                    rect.x0 + inset,
                    y,
                    rect.x0 + inset + size.height,
                    y + size.width,
                );
                let right = Rect::new(
                    rect.x1 - inset - size.height,
                    y,
                    rect.x1 - inset,
                    y + size.width,
                );
                out.push(self.straight(sector.index, out.len(), left, Edge::Left));
                out.push(self.straight(sector.index, out.len(), right, Edge::Right));
            }
        }
    }

    fn straight(&self, sector: usize, index: usize, rect: Rect, edge: Edge) -> Tribune {
        let id = TribuneId { sector, index };
        let mut boundary = BezPath::new();
        boundary.move_to((rect.x0, rect.y0));
        boundary.line_to((rect.x1, rect.y0));
        boundary.line_to((rect.x1, rect.y1));
        boundary.line_to((rect.x0, rect.y1));
        boundary.close_path();
        Tribune {
            id,
            kind: TribuneKind::Straight { rect, edge },
            boundary,
            bounds: rect,
            seats: self.seats.grid(id, rect, edge.seat_rotation()),
        }
    }

    /// Tiles each quarter-circle corner with arc tribunes.
    ///
    /// The count leaves `count + 1` equal gaps so the end tribunes keep clear of the
    /// straight rows.
    fn arc_tribunes(&self, sector: &Sector, out: &mut Vec<Tribune>) {
        let rect = sector.bounds;
        let corner = sector.corner_radius;
        let size = self.spec.tribune_size(sector.index);
        let outer_radius = corner - self.spec.edge_inset();
        let inner_radius = outer_radius - size.height;
        if inner_radius <= 0.0 {
            return;
        }

        let arc_length = FRAC_PI_2 * outer_radius;
        let count = whole_count(arc_length, size.width * self.spec.arc_tribune_padding);
        if count == 0 {
            return;
        }
        let spacing = (arc_length - size.width * count as f64) / (count + 1) as f64;
        let angle = size.width / outer_radius;
        let spacing_angle = spacing / outer_radius;

        let corners = [
            (PI, Point::new(rect.x0 + corner, rect.y0 + corner)),
            (3.0 * FRAC_PI_2, Point::new(rect.x1 - corner, rect.y0 + corner)),
            (2.0 * PI, Point::new(rect.x1 - corner, rect.y1 - corner)),
            (5.0 * FRAC_PI_2, Point::new(rect.x0 + corner, rect.y1 - corner)),
        ];
        for (base_angle, center) in corners {
            let mut previous = base_angle;
            for _ in 0..count {
                let start_angle = previous + spacing_angle;
                let id = TribuneId {
                    sector: sector.index,
                    index: out.len(),
                };
                let boundary = annulus_sector_path(
                    center,
                    outer_radius,
                    inner_radius,
                    start_angle,
                    angle,
                    self.spec.tolerance,
                );
                let bounds = boundary.bounding_box();
                let seats = self.seats.polar(
                    id,
                    center,
                    outer_radius,
                    size.height,
                    start_angle,
                    angle,
                );
                out.push(Tribune {
                    id,
                    kind: TribuneKind::Arc {
                        center,
                        outer_radius,
                        inner_radius,
                        start_angle,
                        sweep: angle,
                    },
                    boundary,
                    bounds,
                    seats,
                });
                previous = start_angle + angle;
            }
        }
    }
}
