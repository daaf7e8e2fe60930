// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Interactive seating chart on top of `tribuna_layout`.
//!
//! - **Selection**: taps focus a tribune or toggle seats inside the focused one.
//! - **View transform**: committed pan/zoom/rotation plus live gesture deltas,
//!   composed into one matrix with the zoom anchored at the focus point.
//! - **Linked animations**: two timed phases run back to back in either order.
//!   A generation counter drops the delayed half when a newer interaction
//!   supersedes it.
//! - **Frames**: a z-ordered display list of paths and paint for renderers.
//!
//! The host owns the clock and the event loop:
//!
//! ```
//! use kurbo::Point;
//! use tribuna_view::{ChartConfig, SeatingChart, TapOutcome};
//!
//! let mut chart = SeatingChart::new(ChartConfig::new(4, 400.0));
//! chart.advance_to(0.0);
//! assert!(chart.is_ready());
//!
//! // The middle of the canvas is the playing field.
//! assert_eq!(chart.on_tap(Point::new(200.0, 200.0)), TapOutcome::Miss);
//! ```

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod animation;
mod chart;
mod config;
mod frame;
mod selection;
mod style;
mod transform;
pub mod z_order;

pub use animation::{
    Animatable, Animated, AnimationPhase, AnimationSequencer, Easing, Transition,
};
pub use chart::{ChartState, SeatingChart, TapOutcome};
pub use config::ChartConfig;
pub use frame::{ChartFrame, DrawItem, DrawKind};
pub use selection::{CENTER_ANCHOR, SeatToggle, SelectionState};
pub use style::{Palette, StrokeStyle};
pub use transform::{GesturePhase, GestureTransform};
