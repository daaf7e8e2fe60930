// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selected tribune and seats, plus the focus state that travels with them.

use hashbrown::HashSet;
use kurbo::Point;
use tribuna_layout::{LayoutGraph, SeatId, TribuneId, rect_contains_rect};

use crate::animation::Animated;

/// Anchor used when nothing is focused: the middle of the chart.
pub const CENTER_ANCHOR: Point = Point::new(0.5, 0.5);

/// What a seat toggle did.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeatToggle {
    /// The seat was added to the selection.
    Added,
    /// The seat was removed from the selection.
    Removed,
}

/// The user's current selection.
///
/// Seats can only be selected inside the selected tribune; changing or
/// clearing the tribune clears them.
#[derive(Clone, Debug)]
pub struct SelectionState {
    selected_tribune: Option<TribuneId>,
    selected_seats: HashSet<SeatId>,
    /// Zoom anchor as a unit fraction of the canvas.
    pub zoom_anchor: Animated<Point>,
    /// Visible fraction of the selected tribune's seats, 0 (hidden) to 1.
    pub seats_reveal: Animated<f64>,
    zoomed_in: bool,
}

impl Default for SelectionState {
    fn default() -> Self {
        Self {
            selected_tribune: None,
            selected_seats: HashSet::new(),
            zoom_anchor: Animated::new(CENTER_ANCHOR),
            seats_reveal: Animated::new(0.0),
            zoomed_in: false,
        }
    }
}

impl SelectionState {
    /// Nothing selected, anchor centered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The focused tribune.
    pub fn selected_tribune(&self) -> Option<TribuneId> {
        self.selected_tribune
    }

    /// Selected seats, in no particular order.
    pub fn selected_seats(&self) -> impl Iterator<Item = SeatId> + '_ {
        self.selected_seats.iter().copied()
    }

    /// Returns `true` if `seat` is selected.
    pub fn is_seat_selected(&self, seat: SeatId) -> bool {
        self.selected_seats.contains(&seat)
    }

    /// Number of selected seats.
    pub fn selected_count(&self) -> usize {
        self.selected_seats.len()
    }

    /// Whether the view is zoomed past its base zoom.
    pub fn zoomed_in(&self) -> bool {
        self.zoomed_in
    }

    /// Records whether the view is zoomed past its base zoom.
    pub fn set_zoomed_in(&mut self, zoomed_in: bool) {
        self.zoomed_in = zoomed_in;
    }

    /// Focuses `tribune` (or nothing). Seats are cleared when the tribune changes.
    pub fn select_tribune(&mut self, tribune: Option<TribuneId>) {
        if self.selected_tribune != tribune {
            self.selected_seats.clear();
        }
        self.selected_tribune = tribune;
    }

    /// Focuses `tribune`, or drops the focus if it is already focused.
    ///
    /// Returns the tribune focused afterwards.
    pub fn toggle_tribune(&mut self, tribune: TribuneId) -> Option<TribuneId> {
        if self.selected_tribune == Some(tribune) {
            self.clear();
        } else {
            self.select_tribune(Some(tribune));
        }
        self.selected_tribune
    }

    /// Clears the tribune and every seat.
    pub fn clear(&mut self) {
        self.select_tribune(None);
    }

    /// Adds `seat` if absent, removes it if present.
    ///
    /// Returns `None` (and changes nothing) if the seat is not in the selected tribune.
    pub fn toggle_seat(&mut self, seat: SeatId) -> Option<SeatToggle> {
        if self.selected_tribune != Some(seat.tribune) {
            return None;
        }
        if self.selected_seats.remove(&seat) {
            Some(SeatToggle::Removed)
        } else {
            self.selected_seats.insert(seat);
            Some(SeatToggle::Added)
        }
    }

    /// Checks the selection invariant against `graph`: seats are selected only
    /// within a selected tribune, and each lies within that tribune's bounds.
    pub fn is_consistent(&self, graph: &LayoutGraph) -> bool {
        let Some(tribune_id) = self.selected_tribune else {
            return self.selected_seats.is_empty();
        };
        let Some(tribune) = graph.tribune(tribune_id) else {
            return self.selected_seats.is_empty();
        };
        let eps = graph.spec().tolerance;
        self.selected_seats.iter().all(|id| {
            id.tribune == tribune_id
                && graph
                    .seat(*id)
                    .is_some_and(|seat| rect_contains_rect(tribune.bounds, seat.bounds, eps))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribuna_layout::StadiumSpec;

    fn seat(tribune: TribuneId, index: usize) -> SeatId {
        SeatId { tribune, index }
    }

    #[test]
    fn toggling_is_pairwise() {
        let graph = LayoutGraph::build(StadiumSpec::new(4, 400.0));
        let t = graph.tribunes().next().expect("tribune").id;
        let mut state = SelectionState::new();
        state.select_tribune(Some(t));
        assert_eq!(state.toggle_seat(seat(t, 3)), Some(SeatToggle::Added));
        assert_eq!(state.toggle_seat(seat(t, 4)), Some(SeatToggle::Added));
        assert_eq!(state.selected_count(), 2);
        assert!(state.is_consistent(&graph));
        assert_eq!(state.toggle_seat(seat(t, 3)), Some(SeatToggle::Removed));
        assert_eq!(state.selected_count(), 1);
        assert!(state.is_seat_selected(seat(t, 4)));
    }

    #[test]
    fn seats_outside_the_selected_tribune_are_rejected() {
        let a = TribuneId {
            sector: 0,
            index: 0,
        };
        let b = TribuneId {
            sector: 0,
            index: 1,
        };
        let mut state = SelectionState::new();
        assert_eq!(state.toggle_seat(seat(a, 0)), None);
        state.select_tribune(Some(a));
        assert_eq!(state.toggle_seat(seat(b, 0)), None);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn selecting_the_same_tribune_twice_drops_it() {
        let t = TribuneId {
            sector: 0,
            index: 0,
        };
        let mut state = SelectionState::new();
        assert_eq!(state.toggle_tribune(t), Some(t));
        state.toggle_seat(seat(t, 1));
        assert_eq!(state.selected_count(), 1);
        assert_eq!(state.toggle_tribune(t), None);
        assert_eq!(state.selected_tribune(), None);
        assert_eq!(state.selected_count(), 0);
    }

    #[test]
    fn switching_tribunes_clears_seats() {
        let a = TribuneId {
            sector: 1,
            index: 2,
        };
        let b = TribuneId {
            sector: 2,
            index: 0,
        };
        let mut state = SelectionState::new();
        state.select_tribune(Some(a));
        state.toggle_seat(seat(a, 0));
        state.select_tribune(Some(a));
        assert_eq!(state.selected_count(), 1);
        state.select_tribune(Some(b));
        assert_eq!(state.selected_count(), 0);
        state.toggle_seat(seat(b, 0));
        state.clear();
        assert_eq!(state.selected_tribune(), None);
        assert_eq!(state.selected_count(), 0);
    }
}
