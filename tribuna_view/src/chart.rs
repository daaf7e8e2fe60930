// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The interactive seating chart.
//!
//! [`SeatingChart`] owns the layout, the selection and the view transform, and
//! is driven entirely by the host: configuration, pointer events and a clock.
//! After any call the host can ask for a fresh [`ChartFrame`].

use kurbo::{Affine, Point, Vec2};
use tribuna_layout::{HitTester, LayoutBuilder, LayoutGraph, SeatId, TribuneId, tribune_contains};

use crate::animation::{Animated, AnimationPhase, AnimationSequencer, Transition};
use crate::config::ChartConfig;
use crate::frame::{ChartFrame, FrameInputs, build_frame};
use crate::selection::{CENTER_ANCHOR, SeatToggle, SelectionState};
use crate::transform::{GesturePhase, GestureTransform};

/// Mutable chart state touched by animation phases.
#[derive(Clone, Debug)]
pub struct ChartState {
    /// Selection and focus.
    pub selection: SelectionState,
    /// View transform.
    pub transform: GestureTransform,
    /// Visible fraction of the whole chart, for the one-time reveal.
    pub chart_reveal: Animated<f64>,
}

impl ChartState {
    fn new(config: &ChartConfig) -> Self {
        Self {
            selection: SelectionState::new(),
            transform: GestureTransform::new(config.base_zoom, config.initial_rotation),
            chart_reveal: Animated::new(0.0),
        }
    }
}

/// What a tap did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TapOutcome {
    /// The chart is not ready; nothing happened.
    Ignored,
    /// Nothing was hit; nothing changed.
    Miss,
    /// A tribune gained focus.
    TribuneSelected(TribuneId),
    /// The focused tribune was selected again and is losing focus.
    TribuneDeselected(TribuneId),
    /// A seat of the focused tribune was toggled.
    SeatToggled {
        /// The seat.
        seat: SeatId,
        /// Whether it was added or removed.
        toggle: SeatToggle,
    },
}

/// An interactive stadium seating chart.
#[derive(Debug)]
pub struct SeatingChart {
    config: ChartConfig,
    builder: LayoutBuilder,
    state: ChartState,
    sequencer: AnimationSequencer<ChartState>,
    now: f64,
    revealed: bool,
}

impl SeatingChart {
    /// Creates a chart and computes its layout. The layout is committed on the
    /// first clock advance.
    pub fn new(config: ChartConfig) -> Self {
        let mut builder = LayoutBuilder::new(config.stadium);
        builder.request_all();
        Self {
            state: ChartState::new(&config),
            config,
            builder,
            sequencer: AnimationSequencer::new(),
            now: 0.0,
            revealed: false,
        }
    }

    /// Rebuilds the layout for a new topology and resets the interaction state.
    pub fn configure(&mut self, sector_count: usize, canvas_size: f64) {
        self.config.stadium.sector_count = sector_count;
        self.config.stadium.canvas_size = canvas_size;
        #[cfg(feature = "tracing")]
        tracing::debug!(sector_count, canvas_size, "chart configured");
        self.builder = LayoutBuilder::new(self.config.stadium);
        self.builder.request_all();
        self.sequencer.cancel();
        self.state = ChartState::new(&self.config);
        self.revealed = false;
    }

    /// The active configuration.
    pub fn config(&self) -> &ChartConfig {
        &self.config
    }

    /// The committed layout.
    pub fn graph(&self) -> &LayoutGraph {
        self.builder.graph()
    }

    /// Current interaction state.
    pub fn state(&self) -> &ChartState {
        &self.state
    }

    /// The selection.
    pub fn selection(&self) -> &SelectionState {
        &self.state.selection
    }

    /// Current clock value.
    pub fn now(&self) -> f64 {
        self.now
    }

    /// Returns `true` once every sector is committed.
    pub fn is_ready(&self) -> bool {
        self.builder.is_ready()
    }

    /// Returns `true` while a delayed animation phase is outstanding.
    pub fn is_animating(&self) -> bool {
        self.sequencer.has_pending()
    }

    /// Advances the clock to `now` (seconds).
    ///
    /// Commits pending layout, starts the one-time reveal once the layout is
    /// ready, and fires due animation phases. Time never runs backwards; earlier
    /// values are ignored.
    pub fn advance_to(&mut self, now: f64) {
        if now.is_finite() && now > self.now {
            self.now = now;
        }
        self.builder.flush();
        if !self.revealed && self.builder.is_ready() {
            self.revealed = true;
            #[cfg(feature = "tracing")]
            tracing::info!(
                tribunes = self.builder.graph().tribune_count(),
                "layout ready, revealing chart"
            );
            let transition =
                Transition::new(self.now, self.config.reveal_duration, self.config.easing);
            self.state.chart_reveal.animate_to(1.0, transition);
        }
        self.sequencer.advance(&mut self.state, self.now);
    }

    /// Advances the clock by `dt` seconds.
    pub fn tick(&mut self, dt: f64) {
        if dt.is_finite() && dt >= 0.0 {
            self.advance_to(self.now + dt);
        }
    }

    /// Handles a tap at `point` in chart (pre-transform) coordinates.
    ///
    /// A tap on a seat of the focused tribune toggles that seat. Any other tap
    /// on a tribune focuses it, or unfocuses it if it is already focused.
    /// Misses change nothing.
    pub fn on_tap(&mut self, point: Point) -> TapOutcome {
        if !self.builder.is_ready() {
            return TapOutcome::Ignored;
        }
        let outcome = self.route_tap(point);
        #[cfg(feature = "tracing")]
        tracing::debug!(x = point.x, y = point.y, ?outcome, "tap routed");
        outcome
    }

    fn route_tap(&mut self, point: Point) -> TapOutcome {
        let graph = self.builder.graph();
        let tester = HitTester::new(graph, self.config.hit_test);

        // Inside the focused tribune: a seat, or the tribune itself.
        let inside = self
            .state
            .selection
            .selected_tribune()
            .and_then(|id| graph.tribune(id))
            .filter(|tribune| tribune_contains(tribune, point))
            .map(|tribune| (tribune.id, tester.find_seat(point, tribune).map(|s| s.id)));
        let hit = match inside {
            Some((_, Some(seat))) => {
                return match self.state.selection.toggle_seat(seat) {
                    Some(toggle) => TapOutcome::SeatToggled { seat, toggle },
                    None => TapOutcome::Miss,
                };
            }
            Some((focused, None)) => Some(focused),
            None => tester.find_tribune(point).map(|t| t.id),
        };
        match hit {
            Some(hit) => self.toggle_focus(hit, point),
            None => TapOutcome::Miss,
        }
    }

    /// Focuses `tribune`, or leaves it if it is already focused.
    ///
    /// Zooms toward the tribune's center. Taps use [`SeatingChart::on_tap`] instead,
    /// which zooms toward the tap.
    pub fn select_tribune(&mut self, tribune: TribuneId) -> TapOutcome {
        if !self.builder.is_ready() {
            return TapOutcome::Ignored;
        }
        let Some(anchor) = self.graph().tribune(tribune).map(|t| t.bounds.center()) else {
            return TapOutcome::Miss;
        };
        self.toggle_focus(tribune, anchor)
    }

    fn toggle_focus(&mut self, tribune: TribuneId, point: Point) -> TapOutcome {
        if self.state.selection.selected_tribune() == Some(tribune) {
            self.unfocus();
            TapOutcome::TribuneDeselected(tribune)
        } else {
            self.focus(tribune, point);
            TapOutcome::TribuneSelected(tribune)
        }
    }

    /// Focus first, zoom second.
    fn focus(&mut self, tribune: TribuneId, point: Point) {
        let size = self.config.stadium.canvas_size;
        let anchor = Point::new(point.x / size, point.y / size);
        let focus_zoom = self.config.focus_zoom;

        let zoom = AnimationPhase::new(
            self.config.zoom_duration,
            move |s: &mut ChartState, tr| {
                s.transform.zoom_to(focus_zoom, tr);
                s.selection.seats_reveal.animate_to(1.0, tr);
                s.selection.set_zoomed_in(true);
            },
        )
        .with_easing(self.config.easing);
        let focus = AnimationPhase::new(
            self.config.focus_duration,
            move |s: &mut ChartState, tr| {
                s.selection.select_tribune(Some(tribune));
                s.selection.zoom_anchor.animate_to(anchor, tr);
                s.transform.pan_to(Vec2::ZERO, tr);
            },
        )
        .with_easing(self.config.easing);

        self.state.selection.seats_reveal.set(0.0);
        self.sequencer.link(&mut self.state, self.now, zoom, focus, true);
    }

    /// Zoom out and hide seats first, then drop the selection.
    fn unfocus(&mut self) {
        let base_zoom = self.config.base_zoom;

        let zoom_out = AnimationPhase::new(
            self.config.zoom_duration,
            move |s: &mut ChartState, tr| {
                s.transform.zoom_to(base_zoom, tr);
                s.selection.seats_reveal.animate_to(0.0, tr);
                s.selection.set_zoomed_in(false);
            },
        )
        .with_easing(self.config.easing);
        let clear = AnimationPhase::new(
            self.config.focus_duration,
            |s: &mut ChartState, tr| {
                s.selection.clear();
                s.selection.zoom_anchor.animate_to(CENTER_ANCHOR, tr);
                s.transform.pan_to(Vec2::ZERO, tr);
            },
        )
        .with_easing(self.config.easing);

        self.state.selection.seats_reveal.set(1.0);
        self.sequencer.link(&mut self.state, self.now, zoom_out, clear, false);
    }

    /// Resets zoom, pan and selection in one animation. Rotation is kept.
    pub fn on_background_tap(&mut self) {
        self.sequencer.cancel();
        let base_zoom = self.config.base_zoom;
        let reset = AnimationPhase::new(
            self.config.zoom_duration,
            move |s: &mut ChartState, tr| {
                s.transform.zoom_to(base_zoom, tr);
                s.transform.pan_to(Vec2::ZERO, tr);
                s.selection.clear();
                s.selection.zoom_anchor.animate_to(CENTER_ANCHOR, tr);
                s.selection.seats_reveal.animate_to(0.0, tr);
                s.selection.set_zoomed_in(false);
            },
        )
        .with_easing(self.config.easing);
        self.sequencer.run(&mut self.state, self.now, reset);
        #[cfg(feature = "tracing")]
        tracing::debug!("background tap reset");
    }

    /// Leaves the focused state when zoomed past the base zoom.
    ///
    /// Returns `true` if the exit animation started.
    pub fn zoom_out(&mut self) -> bool {
        if self.state.transform.target_zoom() > self.config.base_zoom {
            self.unfocus();
            true
        } else {
            false
        }
    }

    /// Drag gesture update; `translation` is cumulative since the gesture began.
    pub fn on_drag(&mut self, translation: Vec2, phase: GesturePhase) {
        self.state.transform.drag(translation, phase, self.now);
    }

    /// Pinch gesture update; `factor` is cumulative since the gesture began.
    pub fn on_pinch(&mut self, factor: f64, phase: GesturePhase) {
        self.state.transform.pinch(factor, phase, self.now);
        if phase == GesturePhase::Ended {
            let zoomed_in = self.state.transform.target_zoom() > self.config.base_zoom;
            self.state.selection.set_zoomed_in(zoomed_in);
        }
    }

    /// Rotation gesture update; `angle` is cumulative since the gesture began.
    pub fn on_rotate(&mut self, angle: f64, phase: GesturePhase) {
        self.state.transform.rotate(angle, phase);
    }

    /// The chart-to-screen transform at the current time.
    pub fn transform(&self) -> Affine {
        let size = self.config.stadium.canvas_size;
        let unit = self.state.selection.zoom_anchor.value_at(self.now);
        let anchor = Point::new(unit.x * size, unit.y * size);
        self.state.transform.matrix(self.now, anchor)
    }

    /// Maps a screen point back into chart coordinates.
    pub fn screen_to_chart(&self, point: Point) -> Point {
        let transform = self.transform();
        if transform.determinant().abs() < f64::EPSILON {
            return point;
        }
        transform.inverse() * point
    }

    /// The display list at the current time.
    pub fn frame(&self) -> ChartFrame {
        build_frame(FrameInputs {
            graph: self.builder.graph(),
            selection: &self.state.selection,
            palette: &self.config.palette,
            transform: self.transform(),
            chart_reveal: self.state.chart_reveal.value_at(self.now),
            seats_reveal: self.state.selection.seats_reveal.value_at(self.now),
        })
    }
}
