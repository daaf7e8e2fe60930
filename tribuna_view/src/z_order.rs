// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Z-order conventions for chart draw items.
//!
//! Renderers should sort by `(z_index, position in the frame)`; frames are
//! emitted already in that order.

/// Playing field fill.
pub const FIELD: i32 = -20;
/// Field markings drawn over the fill.
pub const FIELD_MARKINGS: i32 = -10;
/// Sector outlines.
pub const SECTOR_OUTLINES: i32 = 0;
/// Tribune fills.
pub const TRIBUNES: i32 = 10;
/// The focused tribune, above its neighbors.
pub const SELECTED_TRIBUNE: i32 = 20;
/// Seats of the focused tribune.
pub const SEATS: i32 = 30;
