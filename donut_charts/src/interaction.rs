// Copyright 2026 the Donut Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hover/press state machine.
//!
//! The machine is fed synchronously by pointer events that the chart has already hit-tested.
//! It only decides *what* happened; the chart turns [`Effect`]s into animations and events.

use smallvec::SmallVec;

use crate::slice_model::SliceId;

/// Pointer state of one chart.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum InteractionState {
    /// The pointer is over no slice.
    #[default]
    Idle,
    /// The pointer is over a slice.
    Hovering(SliceId),
    /// A slice was just pressed.
    ///
    /// This state is transient: it is reported by [`Interaction::pointer_pressed`] and the
    /// machine immediately settles back into its hover state.
    Pressed(SliceId),
}

/// Something the chart must react to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Effect {
    /// The pointer left a slice; start its reverse hover animation.
    Leave(SliceId),
    /// The pointer entered a slice; start its hover animation.
    Enter(SliceId),
    /// A slice was clicked.
    Click(SliceId),
}

/// Effects of one pointer event, in the order they must be applied.
pub type Effects = SmallVec<[Effect; 2]>;

/// The per-chart hover/press state machine.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Interaction {
    hovered: Option<SliceId>,
}

impl Interaction {
    /// Creates an idle machine.
    pub fn new() -> Self {
        Self::default()
    }

    /// Settled state.
    pub fn state(&self) -> InteractionState {
        match self.hovered {
            Some(id) => InteractionState::Hovering(id),
            None => InteractionState::Idle,
        }
    }

    /// The slice under the pointer, if any.
    pub fn hovered(&self) -> Option<SliceId> {
        self.hovered
    }

    /// Handles a pointer move onto `hit`.
    ///
    /// Crossing directly from one slice to another yields `Leave(old)` strictly before
    /// `Enter(new)`; at most one slice is ever hovered.
    pub fn pointer_moved(&mut self, hit: Option<SliceId>) -> Effects {
        let mut effects = Effects::new();
        if hit == self.hovered {
            return effects;
        }
        if let Some(old) = self.hovered {
            effects.push(Effect::Leave(old));
        }
        if let Some(new) = hit {
            effects.push(Effect::Enter(new));
        }
        self.hovered = hit;
        effects
    }

    /// Handles a press on `hit`.
    ///
    /// Returns the transient [`InteractionState::Pressed`] state and a click effect when a
    /// slice was hit. The hover state is left as it was.
    pub fn pointer_pressed(&self, hit: Option<SliceId>) -> (InteractionState, Effects) {
        let mut effects = Effects::new();
        match hit {
            Some(id) => {
                effects.push(Effect::Click(id));
                (InteractionState::Pressed(id), effects)
            }
            None => (self.state(), effects),
        }
    }

    /// Forgets the hovered slice without emitting effects (slices were rebuilt).
    pub fn reset(&mut self) {
        self.hovered = None;
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use super::*;

    const A: SliceId = SliceId(0);
    const B: SliceId = SliceId(1);

    #[test]
    fn enter_and_leave() {
        let mut m = Interaction::new();
        assert_eq!(m.pointer_moved(Some(A)).as_slice(), [Effect::Enter(A)]);
        assert_eq!(m.state(), InteractionState::Hovering(A));
        assert!(m.pointer_moved(Some(A)).is_empty(), "moving within a slice is silent");
        assert_eq!(m.pointer_moved(None).as_slice(), [Effect::Leave(A)]);
        assert_eq!(m.state(), InteractionState::Idle);
        assert!(m.pointer_moved(None).is_empty());
    }

    #[test]
    fn crossing_slices_leaves_before_entering() {
        let mut m = Interaction::new();
        m.pointer_moved(Some(A));
        assert_eq!(
            m.pointer_moved(Some(B)).as_slice(),
            [Effect::Leave(A), Effect::Enter(B)]
        );
        assert_eq!(m.hovered(), Some(B));
    }

    #[test]
    fn press_is_transient() {
        let mut m = Interaction::new();
        m.pointer_moved(Some(A));
        let (state, effects) = m.pointer_pressed(Some(A));
        assert_eq!(state, InteractionState::Pressed(A));
        assert_eq!(effects.as_slice(), [Effect::Click(A)]);
        assert_eq!(m.state(), InteractionState::Hovering(A));

        let (state, effects) = m.pointer_pressed(None);
        assert_eq!(state, InteractionState::Hovering(A));
        assert!(effects.is_empty());
    }

    #[test]
    fn reset_goes_idle_silently() {
        let mut m = Interaction::new();
        m.pointer_moved(Some(B));
        m.reset();
        assert_eq!(m.state(), InteractionState::Idle);
        assert_eq!(m.pointer_moved(Some(B)).as_slice(), [Effect::Enter(B)]);
    }
}
