// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Paint for chart draw items.

use peniko::Brush;
use peniko::color::palette::css;

/// A solid stroke.
#[derive(Clone, Debug, PartialEq)]
pub struct StrokeStyle {
    /// Stroke paint.
    pub brush: Brush,
    /// Stroke width in chart coordinates.
    pub stroke_width: f64,
}

impl StrokeStyle {
    /// Convenience for a solid stroke.
    pub fn solid(brush: impl Into<Brush>, stroke_width: f64) -> Self {
        Self {
            brush: brush.into(),
            stroke_width,
        }
    }
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self::solid(css::WHITE, 1.0)
    }
}

/// Colors used when building a [`ChartFrame`](crate::ChartFrame).
#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    /// Playing field fill.
    pub field: Brush,
    /// Field markings and sector outlines.
    pub lines: StrokeStyle,
    /// Tribune fill.
    pub tribune: Brush,
    /// Tribune outline.
    pub tribune_outline: StrokeStyle,
    /// Fill of the focused tribune.
    pub selected_tribune: Brush,
    /// Seat fill.
    pub seat: Brush,
    /// Fill of selected seats.
    pub selected_seat: Brush,
    /// Seat outline.
    pub seat_outline: StrokeStyle,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            field: css::GREEN.into(),
            lines: StrokeStyle::default(),
            tribune: css::BLUE.into(),
            tribune_outline: StrokeStyle::default(),
            selected_tribune: css::WHITE.into(),
            seat: css::BLUE.into(),
            selected_seat: css::GREEN.into(),
            seat_outline: StrokeStyle::solid(css::BLACK, 0.05),
        }
    }
}
