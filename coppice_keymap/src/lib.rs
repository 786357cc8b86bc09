// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Keymap: pure key → intent mapping for the select core.
//!
//! Raw keyboard input reaches a select widget as physical key identifiers;
//! the state machine in `coppice_select` consumes abstract
//! [`Intent`]s. This crate is the stateless stage in between:
//!
//! - [`Key`] names the physical keys the widget cares about (plus nearby
//!   keys it deliberately leaves alone).
//! - [`intent_for`] maps a key to its intent, or `None` for keys outside
//!   the widget's vocabulary.
//! - [`disposition`] tells the host what to do with the raw event: a mapped
//!   key's default behavior must be suppressed (arrow keys scroll, Space
//!   pages down — all of which would fight the widget), while an unmapped
//!   key's default behavior must be left untouched.
//!
//! The mapping itself:
//!
//! | key | intent |
//! |---|---|
//! | Down arrow | [`Intent::MoveNext`] |
//! | Up arrow | [`Intent::MovePrev`] |
//! | Escape | [`Intent::Dismiss`] |
//! | Space, Enter | [`Intent::ConfirmOrOpen`] |
//! | Tab | [`Intent::CloseOnLeave`] |
//! | anything else | none |
//!
//! ```rust
//! use coppice_keymap::{Disposition, Key, disposition, intent_for};
//! use coppice_select::Intent;
//!
//! assert_eq!(intent_for(Key::ArrowDown), Some(Intent::MoveNext));
//! assert_eq!(intent_for(Key::Home), None);
//!
//! assert_eq!(disposition(Key::Enter), Disposition::Handled);
//! assert_eq!(disposition(Key::ArrowLeft), Disposition::Propagate);
//! ```
//!
//! [`Key::from_key_code`] and [`Key::from_name`] translate the two common
//! encodings of browser keyboard events (legacy `keyCode` numbers and
//! `KeyboardEvent.key` names); hosts with their own key types can match into
//! [`Key`] directly.
//!
//! This crate is `no_std`.

#![no_std]

use coppice_select::Intent;

/// A physical key identifier, as delivered by the host's event source.
///
/// Only keys in the neighborhood of select-widget interaction are named;
/// everything the host cannot express as a `Key` is by definition unmapped
/// and should propagate.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Down arrow.
    ArrowDown,
    /// Up arrow.
    ArrowUp,
    /// Left arrow (unmapped; propagates).
    ArrowLeft,
    /// Right arrow (unmapped; propagates).
    ArrowRight,
    /// Escape.
    Escape,
    /// Space bar.
    Space,
    /// Enter / Return.
    Enter,
    /// Tab.
    Tab,
    /// Home (unmapped; propagates).
    Home,
    /// End (unmapped; propagates).
    End,
}

impl Key {
    /// Translates a legacy DOM `keyCode` into a [`Key`].
    ///
    /// Returns `None` for codes outside the named set; such events should
    /// propagate untouched.
    #[must_use]
    pub fn from_key_code(code: u32) -> Option<Self> {
        match code {
            9 => Some(Self::Tab),
            13 => Some(Self::Enter),
            27 => Some(Self::Escape),
            32 => Some(Self::Space),
            35 => Some(Self::End),
            36 => Some(Self::Home),
            37 => Some(Self::ArrowLeft),
            38 => Some(Self::ArrowUp),
            39 => Some(Self::ArrowRight),
            40 => Some(Self::ArrowDown),
            _ => None,
        }
    }

    /// Translates a `KeyboardEvent.key` name into a [`Key`].
    ///
    /// Accepts both `" "` and the legacy `"Spacebar"` spelling for the space
    /// bar. Returns `None` for names outside the named set.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Tab" => Some(Self::Tab),
            "Enter" => Some(Self::Enter),
            "Escape" => Some(Self::Escape),
            " " | "Spacebar" => Some(Self::Space),
            "End" => Some(Self::End),
            "Home" => Some(Self::Home),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowUp" => Some(Self::ArrowUp),
            "ArrowRight" => Some(Self::ArrowRight),
            "ArrowDown" => Some(Self::ArrowDown),
            _ => None,
        }
    }
}

/// What the host should do with the raw key event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Disposition {
    /// The key belongs to the widget: feed its intent to the controller and
    /// suppress the event's default behavior.
    Handled,
    /// The key is not in the map: leave the event's default behavior alone.
    Propagate,
}

/// Maps a key to the intent it produces, if any.
///
/// Stateless: whether an intent actually changes anything (for example
/// [`Intent::Dismiss`] on a closed list) is the controller's concern.
#[must_use]
pub fn intent_for(key: Key) -> Option<Intent> {
    match key {
        Key::ArrowDown => Some(Intent::MoveNext),
        Key::ArrowUp => Some(Intent::MovePrev),
        Key::Escape => Some(Intent::Dismiss),
        Key::Space | Key::Enter => Some(Intent::ConfirmOrOpen),
        Key::Tab => Some(Intent::CloseOnLeave),
        Key::ArrowLeft | Key::ArrowRight | Key::Home | Key::End => None,
    }
}

/// Reports whether a key's default behavior should be suppressed.
///
/// Exactly the keys with an intent are handled; everything else propagates.
#[must_use]
pub fn disposition(key: Key) -> Disposition {
    if intent_for(key).is_some() {
        Disposition::Handled
    } else {
        Disposition::Propagate
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mapped_keys_produce_their_intents() {
        assert_eq!(intent_for(Key::ArrowDown), Some(Intent::MoveNext));
        assert_eq!(intent_for(Key::ArrowUp), Some(Intent::MovePrev));
        assert_eq!(intent_for(Key::Escape), Some(Intent::Dismiss));
        assert_eq!(intent_for(Key::Space), Some(Intent::ConfirmOrOpen));
        assert_eq!(intent_for(Key::Enter), Some(Intent::ConfirmOrOpen));
        assert_eq!(intent_for(Key::Tab), Some(Intent::CloseOnLeave));
    }

    #[test]
    fn unmapped_keys_produce_nothing() {
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Home, Key::End] {
            assert_eq!(intent_for(key), None, "{key:?} should be unmapped");
        }
    }

    #[test]
    fn disposition_follows_the_map() {
        // Every mapped key is handled; every unmapped key propagates.
        for key in [
            Key::ArrowDown,
            Key::ArrowUp,
            Key::Escape,
            Key::Space,
            Key::Enter,
            Key::Tab,
        ] {
            assert_eq!(disposition(key), Disposition::Handled, "{key:?}");
        }
        for key in [Key::ArrowLeft, Key::ArrowRight, Key::Home, Key::End] {
            assert_eq!(disposition(key), Disposition::Propagate, "{key:?}");
        }
    }

    #[test]
    fn legacy_key_codes_round_trip() {
        assert_eq!(Key::from_key_code(40), Some(Key::ArrowDown));
        assert_eq!(Key::from_key_code(38), Some(Key::ArrowUp));
        assert_eq!(Key::from_key_code(27), Some(Key::Escape));
        assert_eq!(Key::from_key_code(32), Some(Key::Space));
        assert_eq!(Key::from_key_code(13), Some(Key::Enter));
        assert_eq!(Key::from_key_code(9), Some(Key::Tab));
        // A letter key: unnamed, so it propagates by construction.
        assert_eq!(Key::from_key_code(65), None);
    }

    #[test]
    fn dom_key_names_translate() {
        assert_eq!(Key::from_name("ArrowDown"), Some(Key::ArrowDown));
        assert_eq!(Key::from_name(" "), Some(Key::Space));
        assert_eq!(Key::from_name("Spacebar"), Some(Key::Space));
        assert_eq!(Key::from_name("F1"), None);
        assert_eq!(Key::from_name("a"), None);
    }
}
