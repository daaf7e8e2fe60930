// Copyright 2025 the Tribuna Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Time-based value interpolation and the linked two-phase animation sequencer.
//!
//! Time is a host clock in seconds. Nothing here sleeps or spawns: values are
//! sampled with an explicit `now`, and delayed phases fire from
//! [`AnimationSequencer::advance`].

extern crate alloc;

use alloc::boxed::Box;
use core::fmt;

use kurbo::{Point, Vec2};
use smallvec::SmallVec;

/// Easing curve applied to normalized progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Easing {
    /// Constant speed.
    Linear,
    /// Accelerating.
    EaseIn,
    /// Decelerating.
    EaseOut,
    /// Accelerating then decelerating.
    #[default]
    EaseInOut,
}

impl Easing {
    /// Maps progress in `[0, 1]` to eased progress in `[0, 1]`. Input is clamped.
    pub fn apply(self, t: f64) -> f64 {
        let t = if t.is_nan() { 1.0 } else { t.clamp(0.0, 1.0) };
        match self {
            Self::Linear => t,
            Self::EaseIn => t * t * t,
            Self::EaseOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::EaseInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
        }
    }
}

/// A timed transition: when it starts, how long it runs and how it eases.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Start time in seconds.
    pub start: f64,
    /// Length in seconds. Zero (or anything not positive) means "jump".
    pub duration: f64,
    /// Progress curve.
    pub easing: Easing,
}

impl Transition {
    /// Creates a transition.
    pub fn new(start: f64, duration: f64, easing: Easing) -> Self {
        Self {
            start,
            duration,
            easing,
        }
    }

    /// A transition that completes the moment it starts.
    pub fn immediate(at: f64) -> Self {
        Self::new(at, 0.0, Easing::Linear)
    }

    /// Time at which the transition completes.
    pub fn end(&self) -> f64 {
        self.start + self.duration.max(0.0)
    }

    /// Eased progress at `now`: 0 before the start, 1 from the end onward.
    pub fn progress(&self, now: f64) -> f64 {
        if now < self.start {
            return 0.0;
        }
        if !(self.duration.is_finite() && self.duration > 0.0) {
            return 1.0;
        }
        self.easing.apply((now - self.start) / self.duration)
    }
}

/// Values that can be interpolated.
pub trait Animatable: Copy {
    /// Linear interpolation; `t = 0` gives `self`, `t = 1` gives `other`.
    fn interpolate(self, other: Self, t: f64) -> Self;
}

impl Animatable for f64 {
    fn interpolate(self, other: Self, t: f64) -> Self {
        self + (other - self) * t
    }
}

impl Animatable for Point {
    fn interpolate(self, other: Self, t: f64) -> Self {
        self.lerp(other, t)
    }
}

impl Animatable for Vec2 {
    fn interpolate(self, other: Self, t: f64) -> Self {
        self.lerp(other, t)
    }
}

/// A value moving from `from` to `to` over a [`Transition`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Animated<T> {
    from: T,
    to: T,
    transition: Transition,
}

impl<T: Animatable> Animated<T> {
    /// A settled value.
    pub fn new(value: T) -> Self {
        Self {
            from: value,
            to: value,
            transition: Transition::immediate(f64::NEG_INFINITY),
        }
    }

    /// The value at `now`.
    pub fn value_at(&self, now: f64) -> T {
        self.from.interpolate(self.to, self.transition.progress(now))
    }

    /// The value the animation is heading to.
    pub fn target(&self) -> T {
        self.to
    }

    /// Jumps to `value`, dropping any running transition.
    pub fn set(&mut self, value: T) {
        *self = Self::new(value);
    }

    /// Starts animating toward `value`, continuing from wherever the current
    /// animation is at the new transition's start.
    pub fn animate_to(&mut self, value: T, transition: Transition) {
        self.from = self.value_at(transition.start);
        self.to = value;
        self.transition = transition;
    }

    /// Returns `true` once the running transition has completed.
    pub fn is_settled(&self, now: f64) -> bool {
        now >= self.transition.end()
    }
}

/// One half of a linked animation: a duration and a state mutation.
///
/// The mutation receives the [`Transition`] it runs under, so it can start
/// [`Animated`] values with matching timing.
pub struct AnimationPhase<S> {
    duration: f64,
    easing: Easing,
    mutate: Box<dyn FnOnce(&mut S, Transition)>,
}

impl<S> fmt::Debug for AnimationPhase<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationPhase")
            .field("duration", &self.duration)
            .field("easing", &self.easing)
            .finish_non_exhaustive()
    }
}

impl<S> AnimationPhase<S> {
    /// Creates a phase with ease-in-out timing.
    pub fn new(duration: f64, mutate: impl FnOnce(&mut S, Transition) + 'static) -> Self {
        Self {
            duration: if duration.is_finite() {
                duration.max(0.0)
            } else {
                0.0
            },
            easing: Easing::EaseInOut,
            mutate: Box::new(mutate),
        }
    }

    /// Sets the easing curve.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Phase length in seconds.
    pub fn duration(&self) -> f64 {
        self.duration
    }

    fn apply(self, state: &mut S, start: f64) {
        let transition = Transition::new(start, self.duration, self.easing);
        (self.mutate)(state, transition);
    }
}

struct ScheduledPhase<S> {
    generation: u64,
    deadline: f64,
    phase: AnimationPhase<S>,
}

/// Runs linked phase pairs and guards their delayed halves with a generation counter.
///
/// Every [`AnimationSequencer::link`] (and [`AnimationSequencer::cancel`]) starts
/// a new generation. A delayed phase fires only if the generation it was
/// scheduled under is still current, so a newer selection always wins over a
/// half-finished older one.
pub struct AnimationSequencer<S> {
    generation: u64,
    pending: SmallVec<[ScheduledPhase<S>; 2]>,
}

impl<S> fmt::Debug for AnimationSequencer<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnimationSequencer")
            .field("generation", &self.generation)
            .field("pending", &self.pending.len())
            .finish()
    }
}

impl<S> Default for AnimationSequencer<S> {
    fn default() -> Self {
        Self {
            generation: 0,
            pending: SmallVec::new(),
        }
    }
}

impl<S> AnimationSequencer<S> {
    /// Creates an idle sequencer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns `true` if a delayed phase is still waiting to fire.
    pub fn has_pending(&self) -> bool {
        self.pending.iter().any(|p| p.generation == self.generation)
    }

    /// Runs two phases back to back.
    ///
    /// With `reverse == false`, `first` is applied at `now` and `second` at
    /// `now + first.duration()`. With `reverse == true` the order flips: `second`
    /// runs at `now` and `first` after `second.duration()`.
    ///
    /// Returns the generation of this link.
    pub fn link(
        &mut self,
        state: &mut S,
        now: f64,
        first: AnimationPhase<S>,
        second: AnimationPhase<S>,
        reverse: bool,
    ) -> u64 {
        let (lead, trail) = if reverse {
            (second, first)
        } else {
            (first, second)
        };
        self.generation += 1;
        let deadline = now + lead.duration;
        #[cfg(feature = "tracing")]
        tracing::debug!(
            generation = self.generation,
            deadline,
            reverse,
            "linked animation scheduled"
        );
        lead.apply(state, now);
        self.pending.push(ScheduledPhase {
            generation: self.generation,
            deadline,
            phase: trail,
        });
        self.generation
    }

    /// Applies a single phase at `now`.
    ///
    /// The generation is left alone, so a pending linked phase still fires. Call
    /// [`AnimationSequencer::cancel`] first to drop it.
    pub fn run(&mut self, state: &mut S, now: f64, phase: AnimationPhase<S>) {
        phase.apply(state, now);
    }

    /// Invalidates every delayed phase.
    pub fn cancel(&mut self) {
        self.generation += 1;
        #[cfg(feature = "tracing")]
        if !self.pending.is_empty() {
            tracing::debug!(
                generation = self.generation,
                dropped = self.pending.len(),
                "pending phases cancelled"
            );
        }
        self.pending.clear();
    }

    /// Fires every delayed phase whose deadline is at or before `now`.
    ///
    /// Phases start at their deadline, not at `now`, so a late tick does not
    /// shift the animation timeline. Stale phases are dropped. Returns the number
    /// of phases applied.
    pub fn advance(&mut self, state: &mut S, now: f64) -> usize {
        let mut fired = 0;
        loop {
            let due = self
                .pending
                .iter()
                .enumerate()
                .filter(|(_, p)| p.deadline <= now)
                .min_by(|(_, a), (_, b)| a.deadline.total_cmp(&b.deadline))
                .map(|(i, _)| i);
            let Some(index) = due else {
                break;
            };
            let scheduled = self.pending.remove(index);
            if scheduled.generation != self.generation {
                #[cfg(feature = "tracing")]
                tracing::debug!(
                    scheduled = scheduled.generation,
                    current = self.generation,
                    "stale phase dropped"
                );
                continue;
            }
            scheduled.phase.apply(state, scheduled.deadline);
            fired += 1;
        }
        fired
    }
}
