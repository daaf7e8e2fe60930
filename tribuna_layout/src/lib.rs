// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Procedural stadium seating geometry.
//!
//! Given a [`StadiumSpec`] (sector count and canvas size plus tuning), this crate
//! generates:
//! - **Sectors**: concentric rounded rectangles, outermost first, with the
//!   playing field inside the innermost one.
//! - **Tribunes**: rectangular blocks along each straight sector edge and
//!   annulus-sector blocks in each rounded corner.
//! - **Seats**: a fixed silhouette tiled over every tribune, rotated so the
//!   back-rest faces away from the field.
//!
//! Everything is plain geometry in canvas coordinates (y-down). Layout is
//! deterministic: the same spec always yields the same [`LayoutGraph`], and
//! tribune and seat ids are stable across builds.
//!
//! ```
//! use tribuna_layout::{HitTestMode, HitTester, LayoutGraph, StadiumSpec};
//!
//! let graph = LayoutGraph::build(StadiumSpec::new(4, 400.0));
//! assert!(graph.is_ready());
//!
//! let tribune = graph.tribunes().next().unwrap();
//! let hit = HitTester::new(&graph, HitTestMode::BoundingBox)
//!     .find_tribune(tribune.bounds.center());
//! assert_eq!(hit.map(|t| t.id), Some(tribune.id));
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

#[cfg(not(feature = "std"))]
mod float;
mod geometry;
mod graph;
mod seat;
mod sector;
mod spec;
mod tribune;

pub use geometry::{
    annulus_sector_path, arc_point, overlap_area, path_contains, rect_contains_rect,
    rotate_about, rounded_rect_path, scale_about, whole_count,
};
pub use graph::{LayoutBuilder, LayoutGraph};
pub use hit_test::{HitTestMode, HitTester, tribune_contains};
pub use seat::{Seat, SeatGenerator, SeatId, seat_silhouette};
pub use sector::{PlayingField, Sector, SectorLayout};
pub use spec::{MAX_SECTOR_COUNT, SpecError, StadiumSpec};
pub use tribune::{Edge, Tribune, TribuneGenerator, TribuneId, TribuneKind};
