// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The display list handed to renderers.

extern crate alloc;

use alloc::vec::Vec;

use kurbo::{Affine, BezPath};
use peniko::Brush;
use tribuna_layout::{LayoutGraph, SeatId, TribuneId};

use crate::selection::SelectionState;
use crate::style::{Palette, StrokeStyle};
use crate::z_order;

/// What a draw item depicts.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DrawKind {
    /// The playing field fill.
    Field,
    /// Field boundary, center line and center circle.
    FieldMarkings,
    /// A sector outline.
    SectorOutline(usize),
    /// A tribune.
    Tribune(TribuneId),
    /// A seat of the focused tribune.
    Seat(SeatId),
}

/// One path with paint, in chart coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawItem {
    /// What the item depicts.
    pub kind: DrawKind,
    /// Geometry in chart (pre-transform) coordinates.
    pub path: BezPath,
    /// Fill paint, if filled.
    pub fill: Option<Brush>,
    /// Stroke, if stroked.
    pub stroke: Option<StrokeStyle>,
    /// Visible fraction of the item, 0 to 1, for reveal animations.
    pub reveal: f64,
    /// Paint order, see [`z_order`](crate::z_order).
    pub z_index: i32,
}

/// Everything a renderer needs for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartFrame {
    /// Chart-to-screen transform.
    pub transform: Affine,
    /// Draw items sorted by `z_index`.
    pub items: Vec<DrawItem>,
    /// Whether every sector is laid out.
    pub ready: bool,
    /// Number of selected seats.
    pub selected_count: usize,
    /// Whether the view is zoomed past its base zoom.
    pub zoomed_in: bool,
}

impl ChartFrame {
    /// Items of one kind of layer, e.g. all seats.
    pub fn items_at(&self, z_index: i32) -> impl Iterator<Item = &DrawItem> + '_ {
        self.items.iter().filter(move |item| item.z_index == z_index)
    }
}

pub(crate) struct FrameInputs<'a> {
    pub(crate) graph: &'a LayoutGraph,
    pub(crate) selection: &'a SelectionState,
    pub(crate) palette: &'a Palette,
    pub(crate) transform: Affine,
    pub(crate) chart_reveal: f64,
    pub(crate) seats_reveal: f64,
}

pub(crate) fn build_frame(inputs: FrameInputs<'_>) -> ChartFrame {
    let FrameInputs {
        graph,
        selection,
        palette,
        transform,
        chart_reveal,
        seats_reveal,
    } = inputs;
    let tolerance = graph.spec().tolerance;
    let mut items = Vec::new();

    let field = graph.field();
    if !field.is_empty() {
        let rect = field.rect;
        let mut fill = BezPath::new();
        fill.move_to((rect.x0, rect.y0));
        fill.line_to((rect.x1, rect.y0));
        fill.line_to((rect.x1, rect.y1));
        fill.line_to((rect.x0, rect.y1));
        fill.close_path();
        items.push(DrawItem {
            kind: DrawKind::Field,
            path: fill,
            fill: Some(palette.field.clone()),
            stroke: None,
            reveal: chart_reveal,
            z_index: z_order::FIELD,
        });
        items.push(DrawItem {
            kind: DrawKind::FieldMarkings,
            path: field.path(tolerance),
            fill: None,
            stroke: Some(palette.lines.clone()),
            reveal: chart_reveal,
            z_index: z_order::FIELD_MARKINGS,
        });
    }

    for sector in graph.sectors() {
        items.push(DrawItem {
            kind: DrawKind::SectorOutline(sector.index),
            path: sector.outline(tolerance),
            fill: None,
            stroke: Some(palette.lines.clone()),
            reveal: chart_reveal,
            z_index: z_order::SECTOR_OUTLINES,
        });
    }

    let selected = selection.selected_tribune();
    for tribune in graph.tribunes() {
        let focused = selected == Some(tribune.id);
        items.push(DrawItem {
            kind: DrawKind::Tribune(tribune.id),
            path: tribune.boundary.clone(),
            fill: Some(if focused {
                palette.selected_tribune.clone()
            } else {
                palette.tribune.clone()
            }),
            stroke: Some(palette.tribune_outline.clone()),
            reveal: chart_reveal,
            z_index: if focused {
                z_order::SELECTED_TRIBUNE
            } else {
                z_order::TRIBUNES
            },
        });
    }

    if let Some(tribune) = selected.and_then(|id| graph.tribune(id)) {
        for seat in &tribune.seats {
            let fill = if selection.is_seat_selected(seat.id) {
                palette.selected_seat.clone()
            } else {
                palette.seat.clone()
            };
            items.push(DrawItem {
                kind: DrawKind::Seat(seat.id),
                path: seat.boundary.clone(),
                fill: Some(fill),
                stroke: Some(palette.seat_outline.clone()),
                reveal: seats_reveal,
                z_index: z_order::SEATS,
            });
        }
    }

    // Stable, so generation order survives within a layer.
    items.sort_by_key(|item| item.z_index);

    ChartFrame {
        transform,
        items,
        ready: graph.is_ready(),
        selected_count: selection.selected_count(),
        zoomed_in: selection.zoomed_in(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tribuna_layout::StadiumSpec;

    fn frame_for(selection: &SelectionState, graph: &LayoutGraph) -> ChartFrame {
        build_frame(FrameInputs {
            graph,
            selection,
            palette: &Palette::default(),
            transform: Affine::IDENTITY,
            chart_reveal: 1.0,
            seats_reveal: 0.5,
        })
    }

    #[test]
    fn items_are_layered() {
        let graph = LayoutGraph::build(StadiumSpec::new(3, 300.0));
        let frame = frame_for(&SelectionState::new(), &graph);
        assert!(frame.ready);
        assert!(frame.items.windows(2).all(|w| w[0].z_index <= w[1].z_index));
        assert_eq!(frame.items_at(z_order::SECTOR_OUTLINES).count(), 3);
        assert_eq!(
            frame.items_at(z_order::TRIBUNES).count(),
            graph.tribune_count()
        );
        assert_eq!(frame.items_at(z_order::SEATS).count(), 0);
        let outline = Palette::default().tribune_outline;
        assert!(
            frame
                .items_at(z_order::TRIBUNES)
                .all(|item| item.stroke.as_ref() == Some(&outline))
        );
    }

    #[test]
    fn focused_tribune_shows_its_seats() {
        let graph = LayoutGraph::build(StadiumSpec::new(3, 300.0));
        let tribune = graph.tribunes().nth(2).expect("tribune");
        let mut selection = SelectionState::new();
        selection.select_tribune(Some(tribune.id));
        selection.toggle_seat(tribune.seats[0].id);

        let frame = frame_for(&selection, &graph);
        let palette = Palette::default();
        let seats: Vec<_> = frame.items_at(z_order::SEATS).collect();
        assert_eq!(seats.len(), tribune.seats.len());
        assert_eq!(seats[0].fill.as_ref(), Some(&palette.selected_seat));
        assert_eq!(seats[1].fill.as_ref(), Some(&palette.seat));
        assert!(seats.iter().all(|s| s.reveal == 0.5));
        assert_eq!(frame.items_at(z_order::SELECTED_TRIBUNE).count(), 1);
        assert_eq!(frame.selected_count, 1);
    }

    #[test]
    fn empty_graph_draws_nothing() {
        let graph = LayoutGraph::build(StadiumSpec::new(0, 300.0));
        let frame = frame_for(&SelectionState::new(), &graph);
        assert!(!frame.ready);
        assert!(frame.items.is_empty());
    }
}
