// Copyright 2026 the Coppice Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Outside-interaction dismissal.
//!
//! An open select closes when the pointer goes down anywhere outside the
//! widget's rendered bounds. The low-level event source (a global pointer
//! listener, a capture phase hook, a winit event loop, …) is the host's
//! business; this module only decides, given the widget bounds and a pointer
//! position, whether that press counts as an outside interaction.
//!
//! Detection is scoped: it is meaningful only while the list is open, so the
//! watcher must be activated when the widget opens and deactivated when it
//! closes or is torn down. [`DismissWatcher::activation`] expresses that
//! scope as an RAII guard, guaranteeing release on every exit path.

use kurbo::{Point, Rect};

/// Verdict for a pointer-down observed by a [`DismissWatcher`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OutsideHit {
    /// The press landed outside the widget while detection was active:
    /// the open list should be dismissed.
    Dismiss,
    /// The press landed inside the widget's bounds; not an outside
    /// interaction.
    Inside,
    /// Detection is not active (the list is closed); the press is ignored.
    Inactive,
}

/// Decides whether pointer presses should dismiss an open select.
///
/// The watcher holds the widget's rendered bounds (in whatever coordinate
/// space the host delivers pointer positions in) and an active flag that
/// tracks the open state of the list.
///
/// ```
/// use coppice_select::{DismissWatcher, OutsideHit};
/// use kurbo::{Point, Rect};
///
/// let mut watcher = DismissWatcher::new(Rect::new(10.0, 10.0, 110.0, 40.0));
///
/// // Closed list: nothing to dismiss.
/// assert_eq!(watcher.pointer_down(Point::new(500.0, 500.0)), OutsideHit::Inactive);
///
/// {
///     let watcher = watcher.activation();
///     assert_eq!(watcher.pointer_down(Point::new(50.0, 20.0)), OutsideHit::Inside);
///     assert_eq!(watcher.pointer_down(Point::new(500.0, 500.0)), OutsideHit::Dismiss);
/// } // guard dropped: detection released
///
/// assert!(!watcher.is_active());
/// ```
#[derive(Clone, Debug)]
pub struct DismissWatcher {
    bounds: Rect,
    active: bool,
}

impl DismissWatcher {
    /// Creates an inactive watcher over the given widget bounds.
    #[must_use]
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            active: false,
        }
    }

    /// The widget bounds presses are tested against.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Updates the widget bounds after a layout change.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Starts outside-interaction detection (the list opened).
    pub fn activate(&mut self) {
        self.active = true;
    }

    /// Stops outside-interaction detection (the list closed or the widget
    /// was torn down).
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Returns `true` while detection is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Activates detection for the lifetime of the returned guard.
    ///
    /// Dropping the guard deactivates the watcher, so detection cannot
    /// outlive the scope that needed it.
    pub fn activation(&mut self) -> ActivationGuard<'_> {
        self.activate();
        ActivationGuard { watcher: self }
    }

    /// Classifies a pointer-down at `position`.
    #[must_use]
    pub fn pointer_down(&self, position: Point) -> OutsideHit {
        if !self.active {
            OutsideHit::Inactive
        } else if self.bounds.contains(position) {
            OutsideHit::Inside
        } else {
            OutsideHit::Dismiss
        }
    }
}

/// RAII scope for outside-interaction detection.
///
/// Created by [`DismissWatcher::activation`]; deactivates the watcher when
/// dropped.
#[derive(Debug)]
pub struct ActivationGuard<'a> {
    watcher: &'a mut DismissWatcher,
}

impl ActivationGuard<'_> {
    /// Classifies a pointer-down at `position` while detection is active.
    #[must_use]
    pub fn pointer_down(&self, position: Point) -> OutsideHit {
        self.watcher.pointer_down(position)
    }
}

impl Drop for ActivationGuard<'_> {
    fn drop(&mut self) {
        self.watcher.deactivate();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: Rect = Rect::new(0.0, 0.0, 100.0, 30.0);

    #[test]
    fn inactive_watcher_ignores_all_presses() {
        let watcher = DismissWatcher::new(BOUNDS);
        assert_eq!(
            watcher.pointer_down(Point::new(500.0, 500.0)),
            OutsideHit::Inactive
        );
        assert_eq!(
            watcher.pointer_down(Point::new(10.0, 10.0)),
            OutsideHit::Inactive
        );
    }

    #[test]
    fn active_watcher_distinguishes_inside_from_outside() {
        let mut watcher = DismissWatcher::new(BOUNDS);
        watcher.activate();
        assert_eq!(
            watcher.pointer_down(Point::new(10.0, 10.0)),
            OutsideHit::Inside
        );
        assert_eq!(
            watcher.pointer_down(Point::new(101.0, 10.0)),
            OutsideHit::Dismiss
        );
    }

    #[test]
    fn deactivate_releases_detection() {
        let mut watcher = DismissWatcher::new(BOUNDS);
        watcher.activate();
        watcher.deactivate();
        assert_eq!(
            watcher.pointer_down(Point::new(500.0, 500.0)),
            OutsideHit::Inactive
        );
    }

    #[test]
    fn activation_guard_releases_on_drop() {
        let mut watcher = DismissWatcher::new(BOUNDS);
        {
            let guard = watcher.activation();
            assert_eq!(
                guard.pointer_down(Point::new(-5.0, -5.0)),
                OutsideHit::Dismiss
            );
        }
        assert!(!watcher.is_active());
    }

    #[test]
    fn bounds_can_track_layout_changes() {
        let mut watcher = DismissWatcher::new(BOUNDS);
        watcher.activate();
        watcher.set_bounds(Rect::new(200.0, 200.0, 300.0, 230.0));
        assert_eq!(
            watcher.pointer_down(Point::new(10.0, 10.0)),
            OutsideHit::Dismiss
        );
        assert_eq!(
            watcher.pointer_down(Point::new(250.0, 210.0)),
            OutsideHit::Inside
        );
    }
}
