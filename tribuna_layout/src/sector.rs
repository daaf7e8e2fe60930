// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Nested sector rectangles and the playing field.
//!
//! Sectors are concentric rounded rectangles centered on the canvas. Each one
//! is [`StadiumSpec::sector_step`] narrower and shorter than the previous, and
//! its height is additionally divided by the width-to-height ratio so the bowl
//! is elongated. The field sits inside the innermost sector.

use kurbo::{BezPath, Circle, Point, Rect, Shape};
use smallvec::SmallVec;

use crate::geometry::rounded_rect_path;
use crate::spec::StadiumSpec;

/// One concentric ring of the stadium.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sector {
    /// Ring number, 0 is the outermost.
    pub index: usize,
    /// Outer bounds of the ring.
    pub bounds: Rect,
    /// Radius of the four rounded corners.
    pub corner_radius: f64,
}

impl Sector {
    /// Rounded-rectangle outline of the sector.
    pub fn outline(&self, tolerance: f64) -> BezPath {
        rounded_rect_path(self.bounds, self.corner_radius, tolerance)
    }
}

/// The rectangle in the middle of the stadium.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PlayingField {
    /// Field bounds.
    pub rect: Rect,
}

impl PlayingField {
    /// Field markings: the boundary, a center line and a center circle.
    pub fn path(&self, tolerance: f64) -> BezPath {
        let rect = self.rect;
        let mut path = BezPath::new();
        path.move_to((rect.x0, rect.y0));
        path.line_to((rect.x1, rect.y0));
        path.line_to((rect.x1, rect.y1));
        path.line_to((rect.x0, rect.y1));
        path.close_path();
        let mid_x = rect.center().x;
        path.move_to((mid_x, rect.y0));
        path.line_to((mid_x, rect.y1));
        if rect.width() > 0.0 {
            let circle = Circle::new(rect.center(), rect.width() / 8.0);
            path.extend(circle.path_elements(tolerance));
        }
        path
    }

    /// Returns `true` if the field is degenerate (nothing was laid out).
    pub fn is_empty(&self) -> bool {
        self.rect.width() <= 0.0 || self.rect.height() <= 0.0
    }
}

/// Output of the sector layout pass.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectorLayout {
    /// Sectors from the outermost inward.
    pub sectors: SmallVec<[Sector; 4]>,
    /// Field derived from the innermost sector.
    pub field: PlayingField,
}

impl SectorLayout {
    /// Computes the nested sector rectangles for `spec`.
    ///
    /// An invalid spec yields no sectors and a zero-size field.
    pub fn compute(spec: &StadiumSpec) -> Self {
        if spec.validate().is_err() {
            return Self::default();
        }

        let width = spec.canvas_size;
        let step = spec.sector_step();
        let center = Point::new(width / 2.0, width / 2.0);

        let mut sectors = SmallVec::new();
        for index in 0..spec.sector_count {
            let shrink = step * index as f64;
            let sector_w = width - shrink;
            let sector_h = width / spec.width_to_height_ratio - shrink;
            if sector_w <= 0.0 || sector_h <= 0.0 {
                break;
            }
            let bounds = Rect::from_center_size(center, (sector_w, sector_h));
            sectors.push(Sector {
                index,
                bounds,
                corner_radius: sector_w * spec.corner_fraction,
            });
        }

        let field = sectors
            .last()
            .map(|innermost: &Sector| {
                let r = innermost.bounds;
                let dx = r.width() * spec.field_inset;
                let dy = r.height() * spec.field_inset;
                PlayingField {
                    rect: Rect::new(r.x0 + dx, r.y0 + dy, r.x1 - dx, r.y1 - dy),
                }
            })
            .unwrap_or_default();

        Self { sectors, field }
    }
}
