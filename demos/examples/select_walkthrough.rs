// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tour of the headless select: keymap → controller → attributes.
//!
//! This example plays both roles around the core: it feeds raw input in (key
//! codes and pointer positions, as a real event source would) and renders the
//! resulting state out (as the attribute lists a DOM adapter would write).
//!
//! Run:
//! - `cargo run -p coppice_examples --example select_walkthrough`

use coppice_aria::{WidgetId, list_attrs, option_attrs, trigger_attrs, trigger_content};
use coppice_keymap::{Disposition, Key, disposition, intent_for};
use coppice_select::{Config, DismissWatcher, OptionDef, OutsideHit, Select, SelectionChanged};
use kurbo::{Point, Rect};

/// Feed one raw key event through the keymap into the select, the way a view
/// adapter's key handler would.
fn press(select: &mut Select, key_code: u32) -> Option<SelectionChanged> {
    let key = Key::from_key_code(key_code)?;
    if disposition(key) == Disposition::Propagate {
        // Not ours: the host lets the event's default behavior run.
        return None;
    }
    let intent = intent_for(key).expect("handled keys always map to an intent");
    select.apply(intent)
}

fn print_state(select: &Select, widget: WidgetId) {
    let state = select.state();
    println!("  trigger: {:?}", trigger_attrs(state).attrs());
    let content = trigger_content(widget, select.config(), select.registry(), state);
    println!("  label:   {:?} {}", content.text, content.indicator_markup);
    if state.open {
        println!("  list:    {:?}", list_attrs(widget).attrs());
        for option in select.registry().iter() {
            println!("    {:?}", option_attrs(widget, state, option).attrs());
        }
    }
}

fn main() {
    let mut select = Select::new(
        Config::new().with_label("Fruit").with_initial_value("pear"),
        [
            OptionDef::new("apple", "Apple"),
            OptionDef::new("pear", "Pear"),
            OptionDef::new("plum", "Plum").disabled(),
            OptionDef::new("fig", "Fig"),
        ],
    );
    if let Some(diag) = select.diagnostic() {
        eprintln!("config warning: {diag}");
    }

    let widget = WidgetId::next();
    let mut watcher = DismissWatcher::new(Rect::new(10.0, 10.0, 210.0, 42.0));

    println!("initial state (initial_value resolved to Pear):");
    print_state(&select, widget);

    // Keyboard walkthrough: Down opens and highlights, Down again walks,
    // Enter commits.
    println!("\npress ArrowDown (keyCode 40):");
    press(&mut select, 40);
    print_state(&select, widget);

    // The list is open now: start outside-dismiss detection.
    watcher.activate();

    println!("\npress ArrowDown twice more (the disabled Plum stays reachable):");
    press(&mut select, 40);
    press(&mut select, 40);
    print_state(&select, widget);

    println!("\npress Enter on the disabled Plum (selection is rejected):");
    assert!(press(&mut select, 13).is_none());
    assert!(select.state().open);

    println!("press ArrowDown then Enter to commit Fig:");
    press(&mut select, 40);
    if let Some(changed) = press(&mut select, 13) {
        // This is where a host invokes its on_change callback.
        println!("  on_change fired: {:?} (index {})", changed.value, changed.index);
    }
    watcher.deactivate();
    print_state(&select, widget);

    // Pointer walkthrough: open via the trigger, then a press outside the
    // widget bounds dismisses without changing the selection.
    println!("\nclick the trigger, then click at (500, 300):");
    select.press_trigger();
    watcher.activate();
    match watcher.pointer_down(Point::new(500.0, 300.0)) {
        OutsideHit::Dismiss => select.dismiss_outside(),
        OutsideHit::Inside | OutsideHit::Inactive => {}
    }
    watcher.deactivate();
    print_state(&select, widget);
    println!("  selection survived: {:?}", select.selected_value());

    // Unmapped keys propagate; nothing changes.
    println!("\npress the letter A (keyCode 65): {:?}", press(&mut select, 65));

    // Swapping options re-resolves the selection by value.
    println!("\nswap the option list (Fig first, Plum gone):");
    select.set_options([
        OptionDef::new("fig", "Fig"),
        OptionDef::new("pear", "Pear"),
    ]);
    println!(
        "  selected is still {:?}, now at index {:?}",
        select.selected_value(),
        select.state().selected
    );
}
