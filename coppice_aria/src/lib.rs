// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice ARIA: derives the attribute contract a view must render.
//!
//! `coppice_select` owns behavior; this crate owns the mapping from a
//! [`SelectState`] to the ARIA single-select "menu" pattern. It produces
//! plain data — ids, roles, attribute lists, trigger content — that any
//! rendering stack (DOM, TUI, immediate mode) can translate into its own
//! markup. Nothing here renders or mutates.
//!
//! The contract, per widget part:
//!
//! - **trigger**: `role="button"`, `aria-haspopup="true"`, and
//!   `aria-expanded="true"` only while open. When closed the attribute is
//!   omitted entirely — ARIA recommends omission over `"false"` here.
//! - **list**: `role="menu"` with a generated unique id; the trigger's
//!   content span points at it via `aria-controls`.
//! - **option**: `role="menuitemradio"`, `aria-checked="true"` only when
//!   selected, `aria-disabled="true"` only when disabled, `tabindex` `"0"`
//!   when highlighted else `"-1"`, and a per-option id derived from the
//!   widget id and the option index.
//!
//! ```rust
//! use coppice_aria::{WidgetId, option_attrs, trigger_attrs};
//! use coppice_select::{OptionDef, OptionRegistry, SelectState};
//!
//! let registry = OptionRegistry::build([OptionDef::new("a", "Ant")]);
//! let widget = WidgetId::next();
//!
//! let closed = SelectState::closed();
//! assert!(trigger_attrs(closed).aria_expanded.is_none());
//!
//! let open = SelectState { open: true, selected: None, highlighted: Some(0) };
//! assert_eq!(trigger_attrs(open).aria_expanded, Some(true));
//!
//! let attrs = option_attrs(widget, open, registry.get(0).unwrap());
//! assert_eq!(attrs.tab_index, 0);
//! assert_eq!(attrs.aria_label, "Ant");
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

use alloc::format;
use alloc::string::{String, ToString};
use core::sync::atomic::{AtomicU64, Ordering};

use coppice_select::{Config, IndexedOption, OptionRegistry, SelectState};
use smallvec::SmallVec;

/// A single rendered attribute.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    /// Attribute name.
    pub name: &'static str,
    /// Attribute value, already stringified.
    pub value: String,
}

impl Attr {
    fn new(name: &'static str, value: impl Into<String>) -> Self {
        Self {
            name,
            value: value.into(),
        }
    }
}

/// Flattened attribute list, inline-allocated for the common small case.
pub type AttrList = SmallVec<[Attr; 8]>;

/// Unique identifier for one widget instance.
///
/// Used to namespace the generated list and option element ids, so several
/// selects can live in one document without colliding.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct WidgetId(u64);

static NEXT_WIDGET_ID: AtomicU64 = AtomicU64::new(1);

impl WidgetId {
    /// Allocates the next process-unique widget id.
    #[must_use]
    pub fn next() -> Self {
        Self(NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The id of the widget's list element.
    #[must_use]
    pub fn list_id(self) -> String {
        format!("coppice-select-{}", self.0)
    }

    /// The id of the option element at `index`.
    #[must_use]
    pub fn option_id(self, index: usize) -> String {
        format!("coppice-select-{}-option-{index}", self.0)
    }
}

/// Attributes of the trigger button.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerAttrs {
    /// Always `"button"`.
    pub role: &'static str,
    /// Always `true`: the trigger reveals a popup.
    pub aria_haspopup: bool,
    /// `Some(true)` while the list is open; `None` (omitted) while closed.
    pub aria_expanded: Option<bool>,
    /// The trigger itself is always in the tab order.
    pub tab_index: i32,
}

impl TriggerAttrs {
    /// Flattens into name/value pairs, applying the omission rules.
    #[must_use]
    pub fn attrs(&self) -> AttrList {
        let mut out = AttrList::new();
        out.push(Attr::new("role", self.role));
        out.push(Attr::new("aria-haspopup", bool_value(self.aria_haspopup)));
        if let Some(expanded) = self.aria_expanded {
            out.push(Attr::new("aria-expanded", bool_value(expanded)));
        }
        out.push(Attr::new("tabindex", self.tab_index.to_string()));
        out
    }
}

/// Attributes of the list container.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListAttrs {
    /// Generated unique element id.
    pub id: String,
    /// Always `"menu"`.
    pub role: &'static str,
}

impl ListAttrs {
    /// Flattens into name/value pairs.
    #[must_use]
    pub fn attrs(&self) -> AttrList {
        let mut out = AttrList::new();
        out.push(Attr::new("id", self.id.clone()));
        out.push(Attr::new("role", self.role));
        out
    }
}

/// Attributes of a single option element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionAttrs {
    /// Generated unique element id.
    pub id: String,
    /// Always `"menuitemradio"`.
    pub role: &'static str,
    /// `Some(true)` when this option is the committed selection; `None`
    /// (omitted) otherwise.
    pub aria_checked: Option<bool>,
    /// `Some(true)` when the option is disabled; `None` (omitted) otherwise.
    pub aria_disabled: Option<bool>,
    /// Accessible name: the option label, falling back to its value when
    /// the label is empty.
    pub aria_label: String,
    /// `0` when highlighted, `-1` otherwise, so only the current option is
    /// focusable.
    pub tab_index: i32,
    /// Whether the view should render the selection-indicator decoration
    /// (presentational, `aria-hidden` in markup terms).
    pub selected_marker: bool,
}

impl OptionAttrs {
    /// Flattens into name/value pairs, applying the omission rules.
    #[must_use]
    pub fn attrs(&self) -> AttrList {
        let mut out = AttrList::new();
        out.push(Attr::new("id", self.id.clone()));
        out.push(Attr::new("role", self.role));
        if let Some(checked) = self.aria_checked {
            out.push(Attr::new("aria-checked", bool_value(checked)));
        }
        if let Some(disabled) = self.aria_disabled {
            out.push(Attr::new("aria-disabled", bool_value(disabled)));
        }
        out.push(Attr::new("aria-label", self.aria_label.clone()));
        out.push(Attr::new("tabindex", self.tab_index.to_string()));
        out
    }
}

/// What the trigger button displays.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TriggerContent {
    /// The selected option's label, or the placeholder text when nothing is
    /// selected.
    pub text: String,
    /// Raw disclosure-indicator markup, inserted unescaped by the view.
    pub indicator_markup: String,
    /// List element id the content span references via `aria-controls`.
    pub aria_controls: String,
}

/// Derives the trigger attributes from the current state.
#[must_use]
pub fn trigger_attrs(state: SelectState) -> TriggerAttrs {
    TriggerAttrs {
        role: "button",
        aria_haspopup: true,
        aria_expanded: state.open.then_some(true),
        tab_index: 0,
    }
}

/// Derives the list-container attributes for a widget instance.
#[must_use]
pub fn list_attrs(widget: WidgetId) -> ListAttrs {
    ListAttrs {
        id: widget.list_id(),
        role: "menu",
    }
}

/// Derives the attributes of one option from the current state.
#[must_use]
pub fn option_attrs(widget: WidgetId, state: SelectState, option: &IndexedOption) -> OptionAttrs {
    let selected = state.is_selected(option.index);
    OptionAttrs {
        id: widget.option_id(option.index),
        role: "menuitemradio",
        aria_checked: selected.then_some(true),
        aria_disabled: option.disabled.then_some(true),
        aria_label: if option.label.is_empty() {
            option.value.clone()
        } else {
            option.label.clone()
        },
        tab_index: if state.is_highlighted(option.index) {
            0
        } else {
            -1
        },
        selected_marker: selected,
    }
}

/// Derives the trigger content from configuration, options, and state.
#[must_use]
pub fn trigger_content(
    widget: WidgetId,
    config: &Config,
    registry: &OptionRegistry,
    state: SelectState,
) -> TriggerContent {
    let text = state
        .selected
        .and_then(|i| registry.get(i))
        .map_or_else(|| config.placeholder_text.clone(), |opt| opt.label.clone());
    TriggerContent {
        text,
        indicator_markup: config.indicator_markup.clone(),
        aria_controls: widget.list_id(),
    }
}

fn bool_value(value: bool) -> &'static str {
    if value { "true" } else { "false" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use coppice_select::OptionDef;

    fn registry() -> OptionRegistry {
        OptionRegistry::build(vec![
            OptionDef::new("a", "Ant"),
            OptionDef::new("b", "Bee").disabled(),
            OptionDef::new("c", ""),
        ])
    }

    fn names(attrs: &AttrList) -> Vec<&'static str> {
        attrs.iter().map(|a| a.name).collect()
    }

    #[test]
    fn widget_ids_are_unique_and_namespaced() {
        let a = WidgetId::next();
        let b = WidgetId::next();
        assert_ne!(a, b);
        assert_ne!(a.list_id(), b.list_id());
        assert!(a.option_id(3).starts_with(a.list_id().as_str()));
        assert_ne!(a.option_id(0), a.option_id(1));
    }

    #[test]
    fn aria_expanded_is_omitted_while_closed() {
        let closed = trigger_attrs(SelectState::closed());
        assert_eq!(closed.aria_expanded, None);
        assert!(!names(&closed.attrs()).contains(&"aria-expanded"));

        let open = trigger_attrs(SelectState {
            open: true,
            selected: None,
            highlighted: None,
        });
        assert_eq!(open.aria_expanded, Some(true));
        let flat = open.attrs();
        let expanded = flat.iter().find(|a| a.name == "aria-expanded").unwrap();
        assert_eq!(expanded.value, "true");
    }

    #[test]
    fn trigger_is_a_popup_button() {
        let attrs = trigger_attrs(SelectState::closed());
        assert_eq!(attrs.role, "button");
        assert!(attrs.aria_haspopup);
        assert_eq!(attrs.tab_index, 0);
    }

    #[test]
    fn list_is_a_menu_with_the_widget_id() {
        let widget = WidgetId::next();
        let attrs = list_attrs(widget);
        assert_eq!(attrs.role, "menu");
        assert_eq!(attrs.id, widget.list_id());
    }

    #[test]
    fn option_checked_and_disabled_are_omission_based() {
        let widget = WidgetId::next();
        let registry = registry();
        let state = SelectState {
            open: true,
            selected: Some(0),
            highlighted: Some(1),
        };

        let ant = option_attrs(widget, state, registry.get(0).unwrap());
        assert_eq!(ant.role, "menuitemradio");
        assert_eq!(ant.aria_checked, Some(true));
        assert_eq!(ant.aria_disabled, None);
        assert!(ant.selected_marker);
        assert!(!names(&ant.attrs()).contains(&"aria-disabled"));

        let bee = option_attrs(widget, state, registry.get(1).unwrap());
        assert_eq!(bee.aria_checked, None);
        assert_eq!(bee.aria_disabled, Some(true));
        assert!(!bee.selected_marker);
        assert!(!names(&bee.attrs()).contains(&"aria-checked"));
    }

    #[test]
    fn only_the_highlighted_option_is_focusable() {
        let widget = WidgetId::next();
        let registry = registry();
        let state = SelectState {
            open: true,
            selected: None,
            highlighted: Some(1),
        };
        assert_eq!(option_attrs(widget, state, registry.get(0).unwrap()).tab_index, -1);
        assert_eq!(option_attrs(widget, state, registry.get(1).unwrap()).tab_index, 0);
    }

    #[test]
    fn stale_highlight_is_not_focusable_while_closed() {
        let widget = WidgetId::next();
        let registry = registry();
        let state = SelectState {
            open: false,
            selected: None,
            highlighted: Some(1),
        };
        assert_eq!(option_attrs(widget, state, registry.get(1).unwrap()).tab_index, -1);
    }

    #[test]
    fn aria_label_falls_back_to_the_value() {
        let widget = WidgetId::next();
        let registry = registry();
        let state = SelectState::closed();
        assert_eq!(
            option_attrs(widget, state, registry.get(0).unwrap()).aria_label,
            "Ant"
        );
        assert_eq!(
            option_attrs(widget, state, registry.get(2).unwrap()).aria_label,
            "c"
        );
    }

    #[test]
    fn trigger_content_shows_placeholder_then_selection() {
        let widget = WidgetId::next();
        let registry = registry();
        let config = Config::new().with_label("Bugs");

        let empty = trigger_content(widget, &config, &registry, SelectState::closed());
        assert_eq!(empty.text, "Please choose...");
        assert_eq!(empty.indicator_markup, coppice_select::DEFAULT_INDICATOR);
        assert_eq!(empty.aria_controls, widget.list_id());

        let picked = trigger_content(
            widget,
            &config,
            &registry,
            SelectState::with_selection(Some(0)),
        );
        assert_eq!(picked.text, "Ant");
    }

    #[test]
    fn custom_placeholder_and_indicator_pass_through() {
        let widget = WidgetId::next();
        let registry = registry();
        let config = Config::new()
            .with_label("Bugs")
            .with_placeholder_text("Pick a bug")
            .with_indicator_markup("<svg/>");

        let content = trigger_content(widget, &config, &registry, SelectState::closed());
        assert_eq!(content.text, "Pick a bug");
        assert_eq!(content.indicator_markup, "<svg/>");
    }
}
