// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Indexed registry over host-supplied option definitions.

use alloc::string::String;
use alloc::vec::Vec;

use hashbrown::HashMap;

/// A host-supplied option definition.
///
/// Definitions are immutable for the lifetime of a registry build. The
/// `value` is the datum reported to the host when the option is selected;
/// the `label` is the content a view renders for it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionDef {
    /// Value reported to the host on selection.
    pub value: String,
    /// Visible content for this option.
    pub label: String,
    /// Whether the option can be selected.
    ///
    /// Disabled options remain visible and reachable by highlight so that
    /// assistive technology can announce their state; only selection is
    /// rejected.
    pub disabled: bool,
}

impl OptionDef {
    /// Creates an enabled definition with the given value and label.
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            disabled: false,
        }
    }

    /// Marks this definition as disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }
}

/// An option with its registry-assigned index.
///
/// Indices are 0-based, contiguous, assigned in definition order, and stable
/// for the lifetime of the build that produced them. A rebuild is a fresh
/// index space; no identity carries over.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedOption {
    /// Position of this option in the definition order.
    pub index: usize,
    /// Value reported to the host on selection.
    pub value: String,
    /// Visible content for this option.
    pub label: String,
    /// Whether the option can be selected.
    pub disabled: bool,
}

/// An immutable, indexed view over an ordered list of option definitions.
///
/// The registry supports lookup by index and by value. Duplicate values are
/// permitted and never deduplicated; value lookup resolves ties to the
/// earliest index, which is what determines initial-value resolution.
///
/// A registry is treated as an immutable snapshot once built. When the host's
/// option list changes, build a new registry and re-validate any outstanding
/// indices against it (see [`Select::set_options`](crate::Select::set_options)).
#[derive(Clone, Debug, Default)]
pub struct OptionRegistry {
    options: Vec<IndexedOption>,
    by_value: HashMap<String, usize>,
}

impl OptionRegistry {
    /// Builds a registry, assigning each definition its position as index.
    ///
    /// Disabled definitions are indexed like any other; the registry does not
    /// filter them.
    pub fn build(defs: impl IntoIterator<Item = OptionDef>) -> Self {
        let mut options = Vec::new();
        let mut by_value = HashMap::new();
        for (index, def) in defs.into_iter().enumerate() {
            // First occurrence wins for duplicate values.
            by_value.entry(def.value.clone()).or_insert(index);
            options.push(IndexedOption {
                index,
                value: def.value,
                label: def.label,
                disabled: def.disabled,
            });
        }
        Self { options, by_value }
    }

    /// Number of options in this registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// Returns `true` if the registry holds no options.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }

    /// Looks an option up by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&IndexedOption> {
        self.options.get(index)
    }

    /// Looks an option up by value.
    ///
    /// With duplicate values, the lowest-index match is returned.
    #[must_use]
    pub fn find_by_value(&self, value: &str) -> Option<&IndexedOption> {
        self.by_value.get(value).map(|&i| &self.options[i])
    }

    /// Returns `true` if `index` refers to an option that may be selected.
    #[must_use]
    pub fn is_selectable(&self, index: usize) -> bool {
        self.get(index).is_some_and(|opt| !opt.disabled)
    }

    /// Iterates over the options in index order.
    pub fn iter(&self) -> impl Iterator<Item = &IndexedOption> {
        self.options.iter()
    }
}
