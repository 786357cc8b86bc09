// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget shell: configuration, registry, and controller in one place.

use alloc::string::String;

use crate::config::{Config, ConfigDiagnostic};
use crate::controller::{Intent, SelectionChanged, SelectionController};
use crate::registry::{IndexedOption, OptionDef, OptionRegistry};
use crate::state::SelectState;

/// A headless single-select widget.
///
/// `Select` owns the pieces a view adapter drives: the read-only [`Config`],
/// the current [`OptionRegistry`] snapshot, and the [`SelectionController`].
/// Construction validates the configuration (non-fatally) and resolves
/// `initial_value` against the freshly built registry; an unmatched initial
/// value silently yields no selection.
///
/// All entry points are synchronous and atomic. Operations that can commit a
/// selection return the [`SelectionChanged`] effect for the host to forward
/// to its change handler; everything else returns nothing.
#[derive(Clone, Debug)]
pub struct Select {
    config: Config,
    registry: OptionRegistry,
    controller: SelectionController,
    diagnostic: Option<ConfigDiagnostic>,
}

impl Select {
    /// Builds a select from a configuration and an ordered option list.
    pub fn new(config: Config, options: impl IntoIterator<Item = OptionDef>) -> Self {
        let diagnostic = config.validate();
        let registry = OptionRegistry::build(options);
        let selected = config
            .initial_value
            .as_deref()
            .and_then(|value| registry.find_by_value(value))
            .map(|opt| opt.index);
        Self {
            config,
            registry,
            controller: SelectionController::with_selection(selected),
            diagnostic,
        }
    }

    /// The host-supplied configuration.
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// The current option snapshot.
    #[must_use]
    pub fn registry(&self) -> &OptionRegistry {
        &self.registry
    }

    /// The current committed state.
    #[must_use]
    pub fn state(&self) -> SelectState {
        self.controller.state()
    }

    /// The configuration diagnostic captured at construction, if any.
    #[must_use]
    pub fn diagnostic(&self) -> Option<ConfigDiagnostic> {
        self.diagnostic
    }

    /// The committed selection, if any.
    #[must_use]
    pub fn selected_option(&self) -> Option<&IndexedOption> {
        self.controller
            .state()
            .selected
            .and_then(|i| self.registry.get(i))
    }

    /// The committed selection's value, if any.
    #[must_use]
    pub fn selected_value(&self) -> Option<&str> {
        self.selected_option().map(|opt| opt.value.as_str())
    }

    /// Applies an abstract intent from the keymap or the host.
    pub fn apply(&mut self, intent: Intent) -> Option<SelectionChanged> {
        self.controller.apply(intent, &self.registry)
    }

    /// Pointer press on the trigger: toggles the list.
    pub fn press_trigger(&mut self) {
        self.controller.toggle();
    }

    /// Pointer hover over an option: highlights it directly.
    pub fn hover_option(&mut self, index: usize) {
        self.controller.hover(index, &self.registry);
    }

    /// Pointer click on an option: commits it if enabled.
    pub fn click_option(&mut self, index: usize) -> Option<SelectionChanged> {
        self.controller.select(index, &self.registry)
    }

    /// Outside-interaction signal: dismisses an open list.
    pub fn dismiss_outside(&mut self) {
        self.controller.close_on_outside();
    }

    /// Replaces the option list with a fresh snapshot.
    ///
    /// Indices computed against the old snapshot are meaningless afterwards,
    /// so the highlight is cleared and the selection is re-resolved by value:
    /// it survives (possibly at a new index) when the new list still contains
    /// the selected value and is cleared when it does not.
    pub fn set_options(&mut self, options: impl IntoIterator<Item = OptionDef>) {
        let previous: Option<String> = self
            .selected_option()
            .map(|opt| opt.value.clone());
        self.registry = OptionRegistry::build(options);
        let selected = previous
            .as_deref()
            .and_then(|value| self.registry.find_by_value(value))
            .map(|opt| opt.index);
        self.controller.retarget(selected);
    }
}
