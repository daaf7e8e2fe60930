// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property-based invariant tests for stadium layout generation.
//!
//! 1. Layout is deterministic for a given spec.
//! 2. No tribune overlaps the playing field.
//! 3. Tribunes do not overlap each other.
//! 4. Every tribune stays inside its sector and every seat inside its tribune.
//! 5. Tapping a seat's center finds that seat.
//! 6. Ids match positions.

use tribuna_layout::{
    HitTestMode, HitTester, LayoutGraph, StadiumSpec, Tribune, TribuneKind, arc_point,
    overlap_area, path_contains, rect_contains_rect,
};

use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

fn spec_strategy() -> impl Strategy<Value = StadiumSpec> {
    (2usize..=8, 200.0f64..800.0).prop_map(|(n, size)| StadiumSpec::new(n, size))
}

fn arc_midpoint(tribune: &Tribune) -> Option<kurbo::Point> {
    match tribune.kind {
        TribuneKind::Arc {
            center,
            outer_radius,
            inner_radius,
            start_angle,
            sweep,
        } => Some(arc_point(
            center,
            (outer_radius + inner_radius) / 2.0,
            start_angle + sweep / 2.0,
        )),
        TribuneKind::Straight { .. } => None,
    }
}

fn config() -> ProptestConfig {
    ProptestConfig::with_cases(16)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(config())]

    #[test]
    fn layout_is_deterministic(spec in spec_strategy()) {
        let a = LayoutGraph::build(spec);
        let b = LayoutGraph::build(spec);
        prop_assert_eq!(a.sectors(), b.sectors());
        prop_assert_eq!(a.field(), b.field());
        let ta: Vec<_> = a.tribunes().collect();
        let tb: Vec<_> = b.tribunes().collect();
        prop_assert_eq!(ta, tb);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2-3. Disjointness
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(config())]

    #[test]
    fn tribunes_avoid_the_field(spec in spec_strategy()) {
        let graph = LayoutGraph::build(spec);
        let field = graph.field().rect;
        for tribune in graph.tribunes() {
            prop_assert!(
                overlap_area(tribune.bounds, field) < 1e-9,
                "{:?} overlaps the field",
                tribune.id
            );
        }
    }

    #[test]
    fn tribunes_do_not_overlap(spec in spec_strategy()) {
        let graph = LayoutGraph::build(spec);
        let tribunes: Vec<_> = graph.tribunes().collect();
        for (i, a) in tribunes.iter().enumerate() {
            for b in &tribunes[i + 1..] {
                match (a.kind, b.kind) {
                    (
                        TribuneKind::Arc { center: ca, start_angle: sa, sweep: wa, .. },
                        TribuneKind::Arc { center: cb, start_angle: sb, sweep: wb, .. },
                    ) if ca == cb => {
                        prop_assert!(sa + wa <= sb || sb + wb <= sa, "{:?} / {:?}", a.id, b.id);
                    }
                    (TribuneKind::Arc { .. }, TribuneKind::Arc { .. }) => {
                        // Arc boxes of neighboring sectors can intersect; the shapes must not.
                        let (ma, mb) = (arc_midpoint(a), arc_midpoint(b));
                        prop_assert!(!ma.is_some_and(|p| path_contains(&b.boundary, p)));
                        prop_assert!(!mb.is_some_and(|p| path_contains(&a.boundary, p)));
                    }
                    _ => {
                        prop_assert!(
                            overlap_area(a.bounds, b.bounds) < 1e-9,
                            "{:?} overlaps {:?}",
                            a.id,
                            b.id
                        );
                    }
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Containment
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(config())]

    #[test]
    fn everything_nests(spec in spec_strategy()) {
        let graph = LayoutGraph::build(spec);
        let eps = spec.tolerance;
        for tribune in graph.tribunes() {
            let sector = graph.sectors()[tribune.id.sector];
            prop_assert!(rect_contains_rect(sector.bounds, tribune.bounds, eps));
            for seat in &tribune.seats {
                prop_assert!(
                    rect_contains_rect(tribune.bounds, seat.bounds, eps),
                    "{:?} escapes its tribune",
                    seat.id
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5-6. Hit-testing and ids
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #![proptest_config(config())]

    #[test]
    fn seat_centers_resolve_to_their_seat(spec in spec_strategy()) {
        let graph = LayoutGraph::build(spec);
        let tester = HitTester::new(&graph, HitTestMode::BoundingBox);
        for tribune in graph.tribunes() {
            for seat in &tribune.seats {
                let hit = tester.find_seat(seat.bounds.center(), tribune);
                prop_assert_eq!(hit.map(|s| s.id), Some(seat.id));
            }
        }
    }

    #[test]
    fn ids_match_positions(spec in spec_strategy()) {
        let graph = LayoutGraph::build(spec);
        prop_assert!(graph.is_ready());
        for sector in graph.sectors() {
            let tribunes = graph.sector_tribunes(sector.index).unwrap_or_default();
            for (index, tribune) in tribunes.iter().enumerate() {
                prop_assert_eq!(tribune.id.sector, sector.index);
                prop_assert_eq!(tribune.id.index, index);
                for (seat_index, seat) in tribune.seats.iter().enumerate() {
                    prop_assert_eq!(seat.id.tribune, tribune.id);
                    prop_assert_eq!(seat.id.index, seat_index);
                }
            }
        }
    }
}
