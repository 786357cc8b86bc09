// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The observable state of a single-select widget.

/// Snapshot of a select widget's interaction state.
///
/// This is the only mutable entity in the core. It is owned by
/// [`SelectionController`](crate::SelectionController) and changes exclusively
/// through that controller's operations, each of which is a single atomic
/// transition: a view never observes a half-applied state (for example
/// `open == true` with a freshly committed selection).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectState {
    /// Whether the option list is revealed.
    pub open: bool,
    /// Index of the committed selection, if any.
    ///
    /// When `Some`, always a valid index in the registry the state was
    /// produced against.
    pub selected: Option<usize>,
    /// Index of the keyboard-focused option.
    ///
    /// Meaningful only while `open` is `true`; a closed widget may retain a
    /// stale highlight, which views must ignore. Use
    /// [`effective_highlight`](Self::effective_highlight) to read the
    /// highlight with that convention applied.
    pub highlighted: Option<usize>,
}

impl SelectState {
    /// The initial state: closed, nothing selected, nothing highlighted.
    #[must_use]
    pub const fn closed() -> Self {
        Self {
            open: false,
            selected: None,
            highlighted: None,
        }
    }

    /// A closed state with a pre-resolved selection.
    #[must_use]
    pub const fn with_selection(selected: Option<usize>) -> Self {
        Self {
            open: false,
            selected,
            highlighted: None,
        }
    }

    /// The highlight a view should treat as current: `None` while closed.
    #[must_use]
    pub fn effective_highlight(&self) -> Option<usize> {
        if self.open { self.highlighted } else { None }
    }

    /// Returns `true` if `index` is the committed selection.
    #[must_use]
    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    /// Returns `true` if `index` is the current highlight of an open list.
    #[must_use]
    pub fn is_highlighted(&self, index: usize) -> bool {
        self.effective_highlight() == Some(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn closed_state_has_no_selection_or_highlight() {
        let state = SelectState::closed();
        assert!(!state.open);
        assert_eq!(state.selected, None);
        assert_eq!(state.highlighted, None);
        assert_eq!(state, SelectState::default());
    }

    #[test]
    fn highlight_is_ignored_while_closed() {
        let state = SelectState {
            open: false,
            selected: None,
            highlighted: Some(2),
        };
        assert_eq!(state.effective_highlight(), None);
        assert!(!state.is_highlighted(2));

        let open = SelectState {
            open: true,
            ..state
        };
        assert_eq!(open.effective_highlight(), Some(2));
        assert!(open.is_highlighted(2));
    }

    #[test]
    fn selection_queries() {
        let state = SelectState::with_selection(Some(1));
        assert!(state.is_selected(1));
        assert!(!state.is_selected(0));
    }
}
