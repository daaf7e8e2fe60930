// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for gestures and selection.
//!
//! 1. The committed zoom never drops below the base zoom, whatever pinches arrive.
//! 2. Invalid gesture magnitudes never make the transform non-finite.
//! 3. Seat toggles are pairwise: toggling a seat twice restores the selection.
//! 4. Focusing a tribune and leaving it again clears the selection.
//! 5. The selection always satisfies its invariant against the layout.
//! 6. Selecting the same tribune twice drops the focus and every seat.

use kurbo::{Point, Vec2};
use tribuna_layout::TribuneId;
use tribuna_view::{
    ChartConfig, GesturePhase, GestureTransform, SeatToggle, SeatingChart, TapOutcome,
};

use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

const BASE_ZOOM: f64 = 1.25;

fn phase() -> impl Strategy<Value = GesturePhase> {
    prop_oneof![
        Just(GesturePhase::Began),
        Just(GesturePhase::Changed),
        Just(GesturePhase::Ended),
        Just(GesturePhase::Cancelled),
    ]
}

fn any_factor() -> impl Strategy<Value = f64> {
    prop_oneof![
        4 => 0.01f64..50.0,
        1 => Just(0.0),
        1 => Just(-1.0),
        1 => Just(f64::NAN),
        1 => Just(f64::INFINITY),
    ]
}

fn ready_chart() -> SeatingChart {
    let mut chart = SeatingChart::new(ChartConfig::new(4, 400.0));
    chart.advance_to(0.0);
    chart
}

/// Centers of the straight tribunes; a tap there always hits that tribune.
fn straight_centers(chart: &SeatingChart) -> Vec<Point> {
    chart
        .graph()
        .tribunes()
        .filter(|t| !t.kind.is_arc())
        .map(|t| t.bounds.center())
        .collect()
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Zoom floor and finiteness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn committed_zoom_respects_the_floor(
        steps in proptest::collection::vec((any_factor(), phase()), 0..40),
    ) {
        let mut transform = GestureTransform::new(BASE_ZOOM, 0.0);
        for (i, (factor, phase)) in steps.into_iter().enumerate() {
            let now = i as f64 * 0.1;
            transform.pinch(factor, phase, now);
            let zoom = transform.committed_zoom(now);
            prop_assert!(zoom.is_finite());
            prop_assert!(zoom >= BASE_ZOOM, "zoom {} fell below the floor", zoom);
        }
    }

    #[test]
    fn invalid_drags_and_rotations_are_ignored(
        steps in proptest::collection::vec(
            (prop_oneof![Just(f64::NAN), Just(f64::INFINITY), -100.0f64..100.0], phase()),
            0..40,
        ),
    ) {
        let mut transform = GestureTransform::new(BASE_ZOOM, 0.0);
        for (value, phase) in steps {
            transform.drag(Vec2::new(value, 1.0), phase, 0.0);
            transform.rotate(value, phase);
        }
        let m = transform.matrix(0.0, Point::new(200.0, 200.0));
        prop_assert!(m.is_finite());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3-6. Selection
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn seat_toggles_are_pairwise(
        tribune_pick in any::<prop::sample::Index>(),
        seat_picks in proptest::collection::vec(any::<prop::sample::Index>(), 1..12),
    ) {
        let mut chart = ready_chart();
        let centers = straight_centers(&chart);
        let target = centers[tribune_pick.index(centers.len())];
        let TapOutcome::TribuneSelected(id) = chart.on_tap(target) else {
            panic!("tribune center did not select it");
        };
        chart.advance_to(1.0);

        let seats: Vec<Point> = chart
            .graph()
            .tribune(id)
            .map(|t| t.seats.iter().map(|s| s.bounds.center()).collect())
            .unwrap_or_default();
        prop_assume!(!seats.is_empty());

        let picks: Vec<Point> = seat_picks.iter().map(|p| seats[p.index(seats.len())]).collect();
        let mut added = 0usize;
        for at in &picks {
            match chart.on_tap(*at) {
                TapOutcome::SeatToggled { toggle: SeatToggle::Added, .. } => added += 1,
                TapOutcome::SeatToggled { toggle: SeatToggle::Removed, .. } => added -= 1,
                other => prop_assert!(false, "unexpected outcome {:?}", other),
            }
            prop_assert_eq!(chart.selection().selected_count(), added);
            prop_assert!(chart.selection().is_consistent(chart.graph()));
        }
        // Replaying the same taps undoes them.
        for at in picks.iter().rev() {
            chart.on_tap(*at);
        }
        prop_assert_eq!(chart.selection().selected_count(), 0);
        prop_assert_eq!(chart.selection().selected_tribune(), Some(id));
    }

    #[test]
    fn focus_then_leave_clears_selection(
        tribune_pick in any::<prop::sample::Index>(),
        toggles in 0usize..5,
    ) {
        let mut chart = ready_chart();
        let centers = straight_centers(&chart);
        let target = centers[tribune_pick.index(centers.len())];
        prop_assert!(matches!(chart.on_tap(target), TapOutcome::TribuneSelected(_)));
        chart.advance_to(1.0);
        let seats: Vec<Point> = chart
            .selection()
            .selected_tribune()
            .and_then(|id| chart.graph().tribune(id))
            .map(|t| t.seats.iter().take(toggles).map(|s| s.bounds.center()).collect())
            .unwrap_or_default();
        for at in seats {
            chart.on_tap(at);
        }

        prop_assert!(chart.zoom_out());
        chart.advance_to(2.0);
        prop_assert_eq!(chart.selection().selected_tribune(), None);
        prop_assert_eq!(chart.selection().selected_count(), 0);
        prop_assert!(!chart.selection().zoomed_in());
        prop_assert!(chart.selection().is_consistent(chart.graph()));
    }

    #[test]
    fn selecting_a_tribune_twice_drops_it(
        tribune_pick in any::<prop::sample::Index>(),
        toggles in 0usize..4,
    ) {
        let mut chart = ready_chart();
        let ids: Vec<TribuneId> = chart
            .graph()
            .tribunes()
            .filter(|t| !t.kind.is_arc())
            .map(|t| t.id)
            .collect();
        let id = ids[tribune_pick.index(ids.len())];
        prop_assert_eq!(chart.select_tribune(id), TapOutcome::TribuneSelected(id));
        chart.advance_to(1.0);
        let seats: Vec<Point> = chart
            .graph()
            .tribune(id)
            .map(|t| t.seats.iter().take(toggles).map(|s| s.bounds.center()).collect())
            .unwrap_or_default();
        for at in seats {
            chart.on_tap(at);
        }

        prop_assert_eq!(chart.select_tribune(id), TapOutcome::TribuneDeselected(id));
        chart.advance_to(2.0);
        prop_assert_eq!(chart.selection().selected_tribune(), None);
        prop_assert_eq!(chart.selection().selected_count(), 0);
    }
}
