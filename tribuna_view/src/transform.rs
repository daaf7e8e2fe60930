// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Committed plus live pan/zoom/rotation.
//!
//! Gestures report cumulative values since they began. While a gesture runs
//! its value is kept as a live delta on top of the committed transform; when it
//! ends the delta is folded in and reset to identity.

use kurbo::{Affine, Point, Vec2};
use tribuna_layout::{rotate_about, scale_about};

use crate::animation::{Animated, Transition};

/// Lifecycle of a continuous gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GesturePhase {
    /// The gesture started.
    Began,
    /// The gesture's cumulative value changed.
    Changed,
    /// The gesture finished; its value is committed.
    Ended,
    /// The gesture was interrupted; its value is discarded.
    Cancelled,
}

/// Pan/zoom/rotation state of the chart view.
#[derive(Clone, Debug, PartialEq)]
pub struct GestureTransform {
    base_zoom: f64,
    pan: Animated<Vec2>,
    zoom: Animated<f64>,
    rotation: f64,
    live_drag: Vec2,
    live_pinch: f64,
    live_rotation: f64,
}

impl GestureTransform {
    /// Starts at `base_zoom`, no pan, and `rotation` radians.
    pub fn new(base_zoom: f64, rotation: f64) -> Self {
        Self {
            base_zoom,
            pan: Animated::new(Vec2::ZERO),
            zoom: Animated::new(base_zoom),
            rotation,
            live_drag: Vec2::ZERO,
            live_pinch: 1.0,
            live_rotation: 0.0,
        }
    }

    /// The zoom floor.
    pub fn base_zoom(&self) -> f64 {
        self.base_zoom
    }

    /// Committed zoom at `now` (may be mid-animation).
    pub fn committed_zoom(&self, now: f64) -> f64 {
        self.zoom.value_at(now)
    }

    /// Zoom the committed value is settling toward.
    pub fn target_zoom(&self) -> f64 {
        self.zoom.target()
    }

    /// Committed pan at `now`.
    pub fn committed_pan(&self, now: f64) -> Vec2 {
        self.pan.value_at(now)
    }

    /// Committed rotation in radians.
    pub fn committed_rotation(&self) -> f64 {
        self.rotation
    }

    /// Returns `true` while any gesture holds a non-identity live delta.
    pub fn has_live_gesture(&self) -> bool {
        self.live_drag != Vec2::ZERO || self.live_pinch != 1.0 || self.live_rotation != 0.0
    }

    /// Applies a drag gesture update. `translation` is cumulative since `Began`.
    pub fn drag(&mut self, translation: Vec2, phase: GesturePhase, now: f64) {
        let valid = translation.is_finite();
        match phase {
            GesturePhase::Began | GesturePhase::Changed => {
                if valid {
                    self.live_drag = translation;
                }
            }
            GesturePhase::Ended => {
                let delta = if valid { translation } else { self.live_drag };
                let pan = self.pan.value_at(now) + delta;
                self.pan.set(pan);
                self.live_drag = Vec2::ZERO;
                #[cfg(feature = "tracing")]
                tracing::debug!(x = pan.x, y = pan.y, "pan committed");
            }
            GesturePhase::Cancelled => self.live_drag = Vec2::ZERO,
        }
    }

    /// Applies a pinch gesture update. `factor` is cumulative since `Began`.
    ///
    /// Non-finite or non-positive factors are ignored. The committed zoom never
    /// drops below the base zoom.
    pub fn pinch(&mut self, factor: f64, phase: GesturePhase, now: f64) {
        let valid = factor.is_finite() && factor > 0.0;
        match phase {
            GesturePhase::Began | GesturePhase::Changed => {
                if valid {
                    self.live_pinch = factor;
                }
            }
            GesturePhase::Ended => {
                let factor = if valid { factor } else { self.live_pinch };
                let zoom = self.zoom.value_at(now) * factor;
                let clamped = zoom.max(self.base_zoom);
                #[cfg(feature = "tracing")]
                if clamped != zoom {
                    tracing::debug!(zoom, floor = self.base_zoom, "zoom clamped");
                }
                self.zoom.set(clamped);
                self.live_pinch = 1.0;
            }
            GesturePhase::Cancelled => self.live_pinch = 1.0,
        }
    }

    /// Applies a rotation gesture update. `angle` is cumulative since `Began`.
    pub fn rotate(&mut self, angle: f64, phase: GesturePhase) {
        let valid = angle.is_finite();
        match phase {
            GesturePhase::Began | GesturePhase::Changed => {
                if valid {
                    self.live_rotation = angle;
                }
            }
            GesturePhase::Ended => {
                self.rotation += if valid { angle } else { self.live_rotation };
                self.live_rotation = 0.0;
            }
            GesturePhase::Cancelled => self.live_rotation = 0.0,
        }
    }

    /// Animates the committed zoom toward `zoom` (floored at the base zoom).
    pub fn zoom_to(&mut self, zoom: f64, transition: Transition) {
        if zoom.is_finite() {
            self.zoom.animate_to(zoom.max(self.base_zoom), transition);
        }
    }

    /// Animates the committed pan toward `pan`.
    pub fn pan_to(&mut self, pan: Vec2, transition: Transition) {
        if pan.is_finite() {
            self.pan.animate_to(pan, transition);
        }
    }

    /// The composed view matrix at `now`.
    ///
    /// Scale and rotation both pivot on `anchor`, then the pan is applied.
    /// Live gesture deltas are included.
    pub fn matrix(&self, now: f64, anchor: Point) -> Affine {
        let zoom = self.zoom.value_at(now) * self.live_pinch;
        let rotation = self.rotation + self.live_rotation;
        let pan = self.pan.value_at(now) + self.live_drag;
        Affine::translate(pan) * rotate_about(rotation, anchor) * scale_about(zoom, anchor)
    }
}
