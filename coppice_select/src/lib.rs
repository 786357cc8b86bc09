// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Coppice Select: headless interaction core for an accessible single-select.
//!
//! This crate models the behavior of a dropdown/select widget — a single
//! trigger revealing a list of mutually exclusive options, fully operable by
//! keyboard — without rendering anything. It is the state machine and option
//! bookkeeping behind the ARIA single-select "menu" pattern; view adapters
//! (see `coppice_aria`) translate its state into markup and attributes.
//!
//! The core pieces are:
//!
//! - [`OptionRegistry`]: a stable, indexed snapshot over host-supplied
//!   [`OptionDef`]s, with lookup by index and by value (earliest index wins
//!   on duplicate values).
//! - [`SelectState`]: the `{open, selected, highlighted}` triple, the only
//!   mutable entity in the core.
//! - [`SelectionController`]: consumes [`Intent`]s and pointer signals and
//!   commits atomic state transitions, emitting a [`SelectionChanged`]
//!   effect when a selection lands.
//! - [`Config`] and [`ConfigDiagnostic`]: read-only host configuration with
//!   one-shot, non-fatal validation of the accessible-name requirement.
//! - [`DismissWatcher`]: scoped outside-interaction detection over
//!   [`kurbo::Rect`] bounds, active only while the list is open.
//! - [`Select`]: the shell combining all of the above, including
//!   initial-value resolution and registry swaps that re-validate stale
//!   indices.
//!
//! ## Minimal example
//!
//! Drive a select entirely from intents, headlessly:
//!
//! ```rust
//! use coppice_select::{Config, Intent, OptionDef, Select};
//!
//! let mut select = Select::new(
//!     Config::new().with_label("Fruit").with_initial_value("pear"),
//!     [
//!         OptionDef::new("apple", "Apple"),
//!         OptionDef::new("pear", "Pear"),
//!         OptionDef::new("plum", "Plum").disabled(),
//!     ],
//! );
//!
//! // The initial value resolved against the registry.
//! assert_eq!(select.state().selected, Some(1));
//!
//! // Down-arrow opens the list and seeds the highlight.
//! select.apply(Intent::MoveNext);
//! assert!(select.state().open);
//! assert_eq!(select.state().highlighted, Some(0));
//!
//! // Enter commits the highlight and closes in one transition.
//! let changed = select.apply(Intent::ConfirmOrOpen).unwrap();
//! assert_eq!(changed.value, "apple");
//! assert!(!select.state().open);
//! ```
//!
//! ## Design notes
//!
//! - Disabled options are indexed and reachable by highlight so assistive
//!   technology can announce them, but selection on them is rejected
//!   silently. Highlight movement clamps at both ends and never wraps.
//! - Operations never panic on stale input: out-of-range or disabled
//!   indices from hover/keyboard races are silent no-ops.
//! - Change notification is an effect value returned from the operation
//!   that caused it, not a stored callback, so the machine stays trivially
//!   testable; hosts wire the returned [`SelectionChanged`] to whatever
//!   callback mechanism they use.
//! - Everything is single threaded and synchronous. Events are processed in
//!   arrival order and each transition is fully committed, effect included,
//!   before the next event is considered.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for dependencies such as `kurbo`.
//! - `libm`: enables `no_std` + `alloc` builds that rely on `libm` for
//!   floating-point math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod controller;
mod outside;
mod registry;
mod select;
mod state;

pub use config::{Config, ConfigDiagnostic, DEFAULT_INDICATOR, DEFAULT_PLACEHOLDER};
pub use controller::{Intent, SelectionChanged, SelectionController};
pub use outside::{ActivationGuard, DismissWatcher, OutsideHit};
pub use registry::{IndexedOption, OptionDef, OptionRegistry};
pub use select::Select;
pub use state::SelectState;
