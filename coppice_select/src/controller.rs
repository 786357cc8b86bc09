// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The selection state machine.
//!
//! [`SelectionController`] owns a [`SelectState`] and advances it in response
//! to abstract [`Intent`]s and direct pointer operations. Every operation is
//! a synchronous, atomic transition: it consumes the current state together
//! with a read-only [`OptionRegistry`] snapshot and commits the next state
//! (plus an optional outward [`SelectionChanged`] effect) before returning.

use alloc::string::String;

use crate::registry::OptionRegistry;
use crate::state::SelectState;

/// An abstract user action, decoupled from the physical input that produced it.
///
/// Intents are typically produced by `coppice_keymap` from raw key
/// identifiers, but a host is free to synthesize them directly (for example
/// from gesture recognizers or test drivers).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Intent {
    /// Reveal the list if closed, conceal it if open.
    OpenOrToggle,
    /// Move the highlight toward the end of the list, opening first if closed.
    MoveNext,
    /// Move the highlight toward the start of the list.
    MovePrev,
    /// Conceal the list without committing anything.
    Dismiss,
    /// Commit the highlighted option if open, otherwise open the list.
    ConfirmOrOpen,
    /// Conceal the list because focus is leaving the widget.
    CloseOnLeave,
}

/// Outward effect emitted when a selection is committed.
///
/// Emitted exactly once per successful selection; rejected selection attempts
/// (out-of-range or disabled indices) produce no effect. The host forwards
/// `value` to its change handler.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionChanged {
    /// Index of the newly selected option.
    pub index: usize,
    /// The selected option's value.
    pub value: String,
}

/// State machine for a single-select widget.
///
/// The controller is the exclusive owner of its [`SelectState`]. It has no
/// internal concurrency and no suspension points; callers feed it one event
/// at a time and observe the committed state between events.
///
/// ```
/// use coppice_select::{Intent, OptionDef, OptionRegistry, SelectionController};
///
/// let registry = OptionRegistry::build([
///     OptionDef::new("red", "Red"),
///     OptionDef::new("green", "Green"),
/// ]);
/// let mut controller = SelectionController::new();
///
/// // The first Down-arrow both opens the list and seeds the highlight.
/// controller.apply(Intent::MoveNext, &registry);
/// assert!(controller.state().open);
/// assert_eq!(controller.state().highlighted, Some(0));
///
/// // Enter commits the highlighted option and closes atomically.
/// let changed = controller.apply(Intent::ConfirmOrOpen, &registry).unwrap();
/// assert_eq!(changed.value, "red");
/// assert!(!controller.state().open);
/// assert_eq!(controller.state().selected, Some(0));
/// ```
#[derive(Clone, Debug, Default)]
pub struct SelectionController {
    state: SelectState,
}

impl SelectionController {
    /// Creates a controller in the initial closed state with no selection.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: SelectState::closed(),
        }
    }

    /// Creates a controller with a pre-resolved initial selection.
    ///
    /// `selected` must be a valid index in the registry the controller will
    /// be driven against; initial-value resolution in
    /// [`Select`](crate::Select) guarantees this.
    #[must_use]
    pub fn with_selection(selected: Option<usize>) -> Self {
        Self {
            state: SelectState::with_selection(selected),
        }
    }

    /// The current committed state.
    #[must_use]
    pub fn state(&self) -> SelectState {
        self.state
    }

    /// Applies an abstract intent, returning the selection effect if one fired.
    pub fn apply(
        &mut self,
        intent: Intent,
        registry: &OptionRegistry,
    ) -> Option<SelectionChanged> {
        match intent {
            Intent::OpenOrToggle => {
                self.toggle();
                None
            }
            Intent::MoveNext => {
                self.move_next(registry);
                None
            }
            Intent::MovePrev => {
                self.move_prev();
                None
            }
            Intent::Dismiss => {
                self.dismiss();
                None
            }
            Intent::ConfirmOrOpen => self.confirm_or_open(registry),
            Intent::CloseOnLeave => {
                self.close_on_leave();
                None
            }
        }
    }

    /// Flips the open flag; selection and highlight are untouched.
    pub fn toggle(&mut self) {
        self.state.open = !self.state.open;
    }

    /// Conceals the list, leaving indices unchanged.
    ///
    /// Idempotent: dismissing a closed widget is a no-op.
    pub fn dismiss(&mut self) {
        self.state.open = false;
    }

    /// Moves the highlight toward the end of the list.
    ///
    /// While closed this also opens the list, so the first Down-arrow press
    /// both reveals the options and seeds a sensible highlight. Movement
    /// clamps at the last index; it never wraps. Disabled options are not
    /// skipped: they stay reachable so their state can be announced.
    pub fn move_next(&mut self, registry: &OptionRegistry) {
        self.state.open = true;
        if registry.is_empty() {
            return;
        }
        let last = registry.len() - 1;
        self.state.highlighted = Some(match self.state.highlighted {
            None => 0,
            Some(h) => h.saturating_add(1).min(last),
        });
    }

    /// Moves the highlight toward the start of the list.
    ///
    /// Clamps at index 0, never wraps, and never opens a closed list. With no
    /// highlight there is nothing to move from, so this is a no-op.
    pub fn move_prev(&mut self) {
        if let Some(h) = self.state.highlighted {
            self.state.highlighted = Some(h.saturating_sub(1));
        }
    }

    /// Commits the highlight if open; opens with the first option highlighted
    /// if closed.
    pub fn confirm_or_open(&mut self, registry: &OptionRegistry) -> Option<SelectionChanged> {
        if self.state.open {
            let highlighted = self.state.highlighted?;
            self.select(highlighted, registry)
        } else {
            self.state.open = true;
            self.state.highlighted = (!registry.is_empty()).then_some(0);
            None
        }
    }

    /// Commits a selection by index.
    ///
    /// On a valid, enabled index this sets the selection, clears the
    /// highlight, and closes the list as one transition, returning the
    /// [`SelectionChanged`] effect. Out-of-range or disabled indices leave
    /// the state untouched and return `None`; stale indices from
    /// hover/keyboard races must not raise.
    pub fn select(
        &mut self,
        index: usize,
        registry: &OptionRegistry,
    ) -> Option<SelectionChanged> {
        let option = registry.get(index)?;
        if option.disabled {
            return None;
        }
        self.state = SelectState {
            open: false,
            selected: Some(index),
            highlighted: None,
        };
        Some(SelectionChanged {
            index,
            value: option.value.clone(),
        })
    }

    /// Sets the highlight directly, as pointer hover does.
    ///
    /// No open/close side effect and no clamping arithmetic; out-of-range
    /// indices are ignored.
    pub fn hover(&mut self, index: usize, registry: &OptionRegistry) {
        if index < registry.len() {
            self.state.highlighted = Some(index);
        }
    }

    /// Dismisses in response to a pointer interaction outside the widget.
    pub fn close_on_outside(&mut self) {
        self.dismiss();
    }

    /// Dismisses because keyboard focus is leaving the widget (Tab).
    ///
    /// Leaving never commits the highlight; it only conceals the list.
    pub fn close_on_leave(&mut self) {
        self.dismiss();
    }

    /// Replaces the selection after a registry swap.
    ///
    /// The old index space is meaningless against a new registry, so the
    /// highlight is cleared; `selected` is the old selection's value
    /// re-resolved against the new snapshot (or `None` when the value is
    /// gone). The open flag is preserved.
    pub fn retarget(&mut self, selected: Option<usize>) {
        self.state.selected = selected;
        self.state.highlighted = None;
    }
}
