// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host-supplied configuration and its one-shot validation.

use alloc::string::{String, ToString};
use core::fmt;

/// Placeholder shown by the trigger while nothing is selected.
pub const DEFAULT_PLACEHOLDER: &str = "Please choose...";

/// Default disclosure indicator: a down-caret glyph entity.
pub const DEFAULT_INDICATOR: &str = "&#x25be;";

/// Configuration for a select widget.
///
/// Set once at construction and read-only for the controller afterwards;
/// the widget's mutable state lives exclusively in
/// [`SelectState`](crate::SelectState).
///
/// Exactly one of `label` and `labelled_by` is expected, giving the trigger
/// an accessible name either directly or by reference to an external label
/// element. Supplying neither is a non-fatal diagnostic, reported by
/// [`validate`](Self::validate) and never a construction failure.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// Accessible name for the trigger.
    pub label: Option<String>,
    /// Id reference to an external label element.
    pub labelled_by: Option<String>,
    /// Trigger text while nothing is selected.
    pub placeholder_text: String,
    /// Raw markup for the disclosure affix.
    ///
    /// Trusted as-is: the view inserts it unescaped, so it must come from
    /// the application, never from user input.
    pub indicator_markup: String,
    /// Value to resolve into the initial selection, matched against option
    /// values at construction only. An unmatched value silently yields no
    /// initial selection.
    pub initial_value: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            label: None,
            labelled_by: None,
            placeholder_text: DEFAULT_PLACEHOLDER.to_string(),
            indicator_markup: DEFAULT_INDICATOR.to_string(),
            initial_value: None,
        }
    }
}

impl Config {
    /// Creates a configuration with all defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the accessible name of the trigger.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Points the accessible name at an external label element id.
    #[must_use]
    pub fn with_labelled_by(mut self, id: impl Into<String>) -> Self {
        self.labelled_by = Some(id.into());
        self
    }

    /// Replaces the placeholder text.
    #[must_use]
    pub fn with_placeholder_text(mut self, text: impl Into<String>) -> Self {
        self.placeholder_text = text.into();
        self
    }

    /// Replaces the disclosure indicator markup.
    #[must_use]
    pub fn with_indicator_markup(mut self, markup: impl Into<String>) -> Self {
        self.indicator_markup = markup.into();
        self
    }

    /// Sets the value resolved into the initial selection.
    #[must_use]
    pub fn with_initial_value(mut self, value: impl Into<String>) -> Self {
        self.initial_value = Some(value.into());
        self
    }

    /// Validates the configuration, returning a diagnostic when it is
    /// missing an accessible name.
    ///
    /// Advisory only: a diagnostic never blocks construction or alters
    /// runtime behavior.
    #[must_use]
    pub fn validate(&self) -> Option<ConfigDiagnostic> {
        if self.label.is_none() && self.labelled_by.is_none() {
            Some(ConfigDiagnostic::MissingAccessibleName)
        } else {
            None
        }
    }
}

/// Non-fatal configuration problem surfaced to the host.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ConfigDiagnostic {
    /// Neither `label` nor `labelled_by` was supplied, so assistive
    /// technology has no accessible name for the trigger.
    MissingAccessibleName,
}

impl ConfigDiagnostic {
    /// Human-readable description for developer-facing reporting.
    #[must_use]
    pub fn message(&self) -> &'static str {
        match self {
            Self::MissingAccessibleName => {
                "one of `label` or `labelled_by` must be specified for an accessible name"
            }
        }
    }
}

impl fmt::Display for ConfigDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = Config::new();
        assert_eq!(config.placeholder_text, "Please choose...");
        assert_eq!(config.indicator_markup, DEFAULT_INDICATOR);
        assert_eq!(config.label, None);
        assert_eq!(config.labelled_by, None);
        assert_eq!(config.initial_value, None);
    }

    #[test]
    fn missing_accessible_name_is_diagnosed() {
        let config = Config::new();
        assert_eq!(
            config.validate(),
            Some(ConfigDiagnostic::MissingAccessibleName)
        );
    }

    #[test]
    fn either_naming_field_satisfies_validation() {
        assert!(Config::new().with_label("Fruit").validate().is_none());
        assert!(
            Config::new()
                .with_labelled_by("fruit-label")
                .validate()
                .is_none()
        );
        // Both present is tolerated; only absence of both is diagnosed.
        assert!(
            Config::new()
                .with_label("Fruit")
                .with_labelled_by("fruit-label")
                .validate()
                .is_none()
        );
    }

    #[test]
    fn diagnostic_formats_its_message() {
        let diag = ConfigDiagnostic::MissingAccessibleName;
        assert_eq!(alloc::format!("{diag}"), diag.message());
    }
}
