// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Topology parameters for a generated stadium.

use kurbo::Size;

/// Largest sector count [`StadiumSpec::validate`] accepts.
pub const MAX_SECTOR_COUNT: usize = 64;

/// Errors reported by [`StadiumSpec::validate`].
///
/// Layout generation never fails on these: an invalid spec produces an empty,
/// never-ready graph. The error exists so hosts can explain why.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum SpecError {
    /// The sector count is zero.
    #[error("sector count must be positive")]
    NoSectors,
    /// The sector count exceeds [`MAX_SECTOR_COUNT`].
    #[error("sector count {0} exceeds the maximum of {MAX_SECTOR_COUNT}")]
    TooManySectors(usize),
    /// The canvas size is zero, negative or not finite.
    #[error("canvas size must be positive and finite, got {0}")]
    InvalidCanvasSize(f64),
    /// A tuning parameter is out of range.
    #[error("parameter `{name}` is out of range: {value}")]
    InvalidParameter {
        /// Field name of the offending parameter.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Inputs to the stadium generator.
///
/// The canvas is square (`canvas_size` × `canvas_size`). Sector `0` is the
/// outermost ring; every following sector shrinks by [`StadiumSpec::sector_step`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StadiumSpec {
    /// Number of concentric sectors.
    pub sector_count: usize,
    /// Side length of the square canvas.
    pub canvas_size: f64,
    /// Outer width divided by outer height; values above 1 give an elongated bowl.
    pub width_to_height_ratio: f64,
    /// The `k` in `sector_step = canvas_size / (sector_count * k)`.
    pub sector_step_divisor: f64,
    /// Tribune depth as a fraction of the sector step.
    pub tribune_height_fraction: f64,
    /// Base tribune width as a multiple of the tribune depth.
    pub tribune_aspect: f64,
    /// Rounded-corner radius as a fraction of the sector width.
    pub corner_fraction: f64,
    /// Seat side length as a fraction of the tribune depth.
    pub seat_size_fraction: f64,
    /// Tiling unit of arc tribunes, as a multiple of the tribune width.
    pub arc_tribune_padding: f64,
    /// Tiling unit of arc seats, as a multiple of the seat size.
    pub arc_seat_padding: f64,
    /// Inset of the playing field on each side of the innermost sector, as a fraction.
    pub field_inset: f64,
    /// Curve flattening tolerance used when converting shapes to paths.
    pub tolerance: f64,
}

impl Default for StadiumSpec {
    fn default() -> Self {
        Self {
            sector_count: 4,
            canvas_size: 400.0,
            width_to_height_ratio: 1.3,
            sector_step_divisor: 2.0,
            tribune_height_fraction: 1.0 / 3.0,
            tribune_aspect: 1.5,
            corner_fraction: 0.25,
            seat_size_fraction: 0.1,
            arc_tribune_padding: 1.2,
            arc_seat_padding: 1.1,
            field_inset: 0.25,
            tolerance: 0.1,
        }
    }
}

impl StadiumSpec {
    /// Creates a spec with default tuning for the given topology.
    pub fn new(sector_count: usize, canvas_size: f64) -> Self {
        Self {
            sector_count,
            canvas_size,
            ..Self::default()
        }
    }

    /// Sets the width-to-height ratio of the bowl.
    pub fn with_width_to_height_ratio(mut self, ratio: f64) -> Self {
        self.width_to_height_ratio = ratio;
        self
    }

    /// Sets the sector step divisor `k`.
    pub fn with_sector_step_divisor(mut self, k: f64) -> Self {
        self.sector_step_divisor = k;
        self
    }

    /// Sets the seat size as a fraction of the tribune depth.
    pub fn with_seat_size_fraction(mut self, fraction: f64) -> Self {
        self.seat_size_fraction = fraction;
        self
    }

    /// Sets the curve flattening tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Checks that the spec describes a drawable stadium.
    pub fn validate(&self) -> Result<(), SpecError> {
        if self.sector_count == 0 {
            return Err(SpecError::NoSectors);
        }
        if self.sector_count > MAX_SECTOR_COUNT {
            return Err(SpecError::TooManySectors(self.sector_count));
        }
        if !(self.canvas_size.is_finite() && self.canvas_size > 0.0) {
            return Err(SpecError::InvalidCanvasSize(self.canvas_size));
        }
        let positive = [
            ("width_to_height_ratio", self.width_to_height_ratio),
            ("sector_step_divisor", self.sector_step_divisor),
            ("tribune_height_fraction", self.tribune_height_fraction),
            ("tribune_aspect", self.tribune_aspect),
            ("corner_fraction", self.corner_fraction),
            ("seat_size_fraction", self.seat_size_fraction),
            ("arc_tribune_padding", self.arc_tribune_padding),
            ("arc_seat_padding", self.arc_seat_padding),
            ("tolerance", self.tolerance),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(SpecError::InvalidParameter { name, value });
            }
        }
        if !(0.0..0.5).contains(&self.field_inset) {
            return Err(SpecError::InvalidParameter {
                name: "field_inset",
                value: self.field_inset,
            });
        }
        Ok(())
    }

    /// How much each sector shrinks relative to the previous one.
    pub fn sector_step(&self) -> f64 {
        self.canvas_size / (self.sector_count as f64 * self.sector_step_divisor)
    }

    /// Depth of every tribune (radial extent).
    pub fn tribune_height(&self) -> f64 {
        self.sector_step() * self.tribune_height_fraction
    }

    /// Tribune footprint for a sector: outer sectors get wider tribunes.
    ///
    /// The width loses `base / (2N)` per sector index.
    pub fn tribune_size(&self, index: usize) -> Size {
        let height = self.tribune_height();
        let base = height * self.tribune_aspect;
        let shrink = base / (2.0 * self.sector_count as f64);
        Size::new(base - shrink * index as f64, height)
    }

    /// Gap between a sector's edge and its tribunes.
    pub fn edge_inset(&self) -> f64 {
        (self.sector_step() / 2.0 - self.tribune_height()) / 2.0
    }

    /// Side length of a single seat.
    pub fn seat_size(&self) -> f64 {
        self.tribune_height() * self.seat_size_fraction
    }
}
