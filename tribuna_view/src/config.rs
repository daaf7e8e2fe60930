// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Chart tuning.

use core::f64::consts::FRAC_PI_2;

use tribuna_layout::{HitTestMode, StadiumSpec};

use crate::animation::Easing;
use crate::style::Palette;

/// Everything a [`SeatingChart`](crate::SeatingChart) needs besides events.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartConfig {
    /// Stadium topology and geometry tuning.
    pub stadium: StadiumSpec,
    /// Overview zoom; the committed zoom never goes below it.
    pub base_zoom: f64,
    /// Zoom used when a tribune is focused.
    pub focus_zoom: f64,
    /// Length of the zoom phase in seconds.
    pub zoom_duration: f64,
    /// Length of the focus (selection swap) phase in seconds.
    pub focus_duration: f64,
    /// Length of the one-time reveal once the layout is ready.
    pub reveal_duration: f64,
    /// Rotation of the whole chart before any gesture, in radians.
    pub initial_rotation: f64,
    /// Easing of every chart animation.
    pub easing: Easing,
    /// Tribune hit-testing strategy.
    pub hit_test: HitTestMode,
    /// Paint for the frame.
    pub palette: Palette,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            stadium: StadiumSpec::default(),
            base_zoom: 1.25,
            focus_zoom: 25.0,
            zoom_duration: 0.7,
            focus_duration: 0.3,
            reveal_duration: 1.0,
            initial_rotation: FRAC_PI_2,
            easing: Easing::EaseInOut,
            hit_test: HitTestMode::BoundingBox,
            palette: Palette::default(),
        }
    }
}

impl ChartConfig {
    /// Default tuning for `sector_count` sectors on a `canvas_size` canvas.
    pub fn new(sector_count: usize, canvas_size: f64) -> Self {
        Self {
            stadium: StadiumSpec::new(sector_count, canvas_size),
            ..Self::default()
        }
    }

    /// Sets the stadium spec.
    pub fn with_stadium(mut self, stadium: StadiumSpec) -> Self {
        self.stadium = stadium;
        self
    }

    /// Sets the base and focus zoom levels.
    pub fn with_zoom(mut self, base_zoom: f64, focus_zoom: f64) -> Self {
        self.base_zoom = base_zoom;
        self.focus_zoom = focus_zoom;
        self
    }

    /// Sets the zoom and focus phase lengths.
    pub fn with_durations(mut self, zoom_duration: f64, focus_duration: f64) -> Self {
        self.zoom_duration = zoom_duration;
        self.focus_duration = focus_duration;
        self
    }

    /// Sets the initial rotation.
    pub fn with_initial_rotation(mut self, rotation: f64) -> Self {
        self.initial_rotation = rotation;
        self
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the hit-test mode.
    pub fn with_hit_test(mut self, mode: HitTestMode) -> Self {
        self.hit_test = mode;
        self
    }

    /// Sets the palette.
    pub fn with_palette(mut self, palette: Palette) -> Self {
        self.palette = palette;
        self
    }
}
