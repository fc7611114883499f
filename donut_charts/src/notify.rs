// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Change notification between a chart and its host.
//!
//! The chart never calls back into the host. It records what happened in a [`Notifier`]:
//! a single "needs redraw" flag plus an ordered queue of [`ChartEvent`]s. The host drains both
//! after delivering input or advancing animations, and decides when to paint.

extern crate alloc;

use alloc::string::String;
use alloc::vec::Vec;

/// Notifications a host may subscribe to.
#[derive(Clone, Debug, PartialEq)]
pub enum ChartEvent {
    /// The pointer entered a slice.
    SliceEntered {
        /// Slice label.
        name: String,
    },
    /// The pointer left a slice.
    SliceLeft {
        /// Slice label.
        name: String,
    },
    /// A slice was clicked.
    SliceClicked {
        /// Slice label.
        name: String,
        /// The slice's share of the total, `0..=100`.
        percentage: f64,
    },
    /// The chart rotation changed (already normalized to `[0, 360)`).
    RotationChanged(f64),
}

/// Pending redraw request and event queue.
#[derive(Clone, Debug, Default)]
pub struct Notifier {
    redraw: bool,
    events: Vec<ChartEvent>,
}

impl Notifier {
    /// Creates an empty notifier.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the chart as needing a repaint.
    pub fn request_redraw(&mut self) {
        self.redraw = true;
    }

    /// Queues an event.
    pub fn emit(&mut self, event: ChartEvent) {
        log::trace!("chart event: {event:?}");
        self.events.push(event);
    }

    /// Returns whether a repaint is pending without clearing it.
    pub fn needs_redraw(&self) -> bool {
        self.redraw
    }

    /// Returns and clears the pending repaint request.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw)
    }

    /// Removes and returns queued events, oldest first.
    pub fn drain_events(&mut self) -> Vec<ChartEvent> {
        core::mem::take(&mut self.events)
    }
}

/// A value whose changes request a redraw.
///
/// Setting an equal value is a no-op; a different value bumps [`Observable::revision`] and
/// requests a redraw through the supplied [`Notifier`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Observable<T> {
    value: T,
    revision: u64,
}

impl<T: PartialEq> Observable<T> {
    /// Wraps an initial value.
    pub fn new(value: T) -> Self {
        Self { value, revision: 0 }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Replaces the value, returning `true` if it changed.
    pub fn set(&mut self, value: T, notifier: &mut Notifier) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.revision = self.revision.wrapping_add(1);
        notifier.request_redraw();
        true
    }

    /// Number of changes applied so far.
    pub fn revision(&self) -> u64 {
        self.revision
    }
}

impl<T: Copy> Observable<T> {
    /// Current value by copy.
    pub fn value(&self) -> T {
        self.value
    }
}
