//! Bindings Module - Per-role event binding records
//!
//! The host-facing event surface, grouped by role. Each navigation
//! target produces its own typed record of callbacks wired to one
//! engine instance:
//!
//! - **Reference** - the control that anchors the popup
//! - **Floating** - the popup container
//! - **Item** - one list item
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::bindings::{bindings, NavigationTarget, TargetBindings};
//! use popup_nav::events::KeyboardEvent;
//!
//! if let TargetBindings::Floating(floating) = bindings(&engine, NavigationTarget::Floating) {
//!     (floating.on_key_down)(&KeyboardEvent::new("ArrowDown"));
//! }
//! ```

use std::rc::Rc;

use crate::events::{KeyboardEvent, PointerAction, PointerEvent};
use crate::state::NavigationEngine;

// =============================================================================
// TARGETS
// =============================================================================

/// The role an element plays for one navigation engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavigationTarget {
    /// The reference control that anchors the popup.
    Reference,
    /// The popup container.
    Floating,
    /// One list item, by index.
    Item(usize),
}

/// The binding record for a target, one variant per role.
pub enum TargetBindings {
    Reference(ReferenceBindings),
    Floating(FloatingBindings),
    Item(ItemBindings),
}

// =============================================================================
// BINDING RECORDS
// =============================================================================

/// Handlers for the reference control.
#[derive(Clone)]
pub struct ReferenceBindings {
    /// Records the last navigation key, requests a popup open on an
    /// arrow key when configured, forwards cross-axis-open keys for
    /// nested submenus. Returns true when consumed.
    pub on_key_down: Rc<dyn Fn(&KeyboardEvent) -> bool>,
}

/// Handlers for the popup container.
#[derive(Clone)]
pub struct FloatingBindings {
    /// The main keyboard navigation entry. Returns true when consumed.
    pub on_key_down: Rc<dyn Fn(&KeyboardEvent) -> bool>,
    /// Pointer movement over the container clears leave suppression.
    pub on_pointer_move: Rc<dyn Fn(&PointerEvent)>,
    /// Focus left the container; true = it moved to a reverse-tab
    /// guard, which clears the active index.
    pub on_blur: Rc<dyn Fn(bool)>,
}

/// Handlers for one list item.
#[derive(Clone)]
pub struct ItemBindings {
    /// The item received host focus.
    pub on_focus: Rc<dyn Fn()>,
    /// Pointer events on the item: move highlights (when hover
    /// highlighting is enabled), leave clears per the suppression
    /// rules, click re-focuses the item.
    pub on_pointer: Rc<dyn Fn(&PointerEvent)>,
}

// =============================================================================
// CONSTRUCTION
// =============================================================================

/// Bindings for the reference control.
pub fn reference_bindings(engine: &Rc<NavigationEngine>) -> ReferenceBindings {
    let keydown_engine = engine.clone();
    ReferenceBindings {
        on_key_down: Rc::new(move |event| keydown_engine.reference_key_down(event)),
    }
}

/// Bindings for the popup container.
pub fn floating_bindings(engine: &Rc<NavigationEngine>) -> FloatingBindings {
    let keydown_engine = engine.clone();
    let pointer_engine = engine.clone();
    let blur_engine = engine.clone();

    FloatingBindings {
        on_key_down: Rc::new(move |event| keydown_engine.floating_key_down(event)),
        on_pointer_move: Rc::new(move |event| {
            if event.action == PointerAction::Move {
                pointer_engine.floating_pointer_move();
            }
        }),
        on_blur: Rc::new(move |to_guard| blur_engine.floating_blur(to_guard)),
    }
}

/// Bindings for one list item.
pub fn item_bindings(engine: &Rc<NavigationEngine>, index: usize) -> ItemBindings {
    let focus_engine = engine.clone();
    let pointer_engine = engine.clone();

    ItemBindings {
        on_focus: Rc::new(move || focus_engine.item_focus(index)),
        on_pointer: Rc::new(move |event| match event.action {
            PointerAction::Move => pointer_engine.item_pointer_move(index),
            PointerAction::Leave => pointer_engine.item_pointer_leave(),
            PointerAction::Click => pointer_engine.item_click(index),
            // Pointer-down focus stealing is resolved by the one-frame
            // focus deferral, not handled here.
            PointerAction::Down => {}
        }),
    }
}

/// Bindings for any target.
pub fn bindings(engine: &Rc<NavigationEngine>, target: NavigationTarget) -> TargetBindings {
    match target {
        NavigationTarget::Reference => TargetBindings::Reference(reference_bindings(engine)),
        NavigationTarget::Floating => TargetBindings::Floating(floating_bindings(engine)),
        NavigationTarget::Item(index) => TargetBindings::Item(item_bindings(engine, index)),
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list::NavigableList;
    use crate::types::NavConfig;

    fn engine() -> Rc<NavigationEngine> {
        let engine = NavigationEngine::new(NavConfig::default());
        engine.set_list(NavigableList::with_len(5));
        engine
    }

    #[test]
    fn test_floating_keydown_navigates() {
        let engine = engine();
        engine.set_open(true);

        let floating = floating_bindings(&engine);
        let consumed = (floating.on_key_down)(&KeyboardEvent::new("ArrowDown"));

        assert!(consumed);
        assert_eq!(engine.active_index(), Some(0));
    }

    #[test]
    fn test_item_pointer_roundtrip() {
        let engine = engine();
        engine.set_open(true);

        let floating = floating_bindings(&engine);
        let item = item_bindings(&engine, 2);

        (floating.on_pointer_move)(&PointerEvent::moved());
        (item.on_pointer)(&PointerEvent::moved());
        assert_eq!(engine.active_index(), Some(2));

        (item.on_pointer)(&PointerEvent::leave());
        assert_eq!(engine.active_index(), None);
    }

    #[test]
    fn test_item_focus_binding() {
        let engine = engine();
        engine.set_open(true);

        let item = item_bindings(&engine, 4);
        (item.on_focus)();
        assert_eq!(engine.active_index(), Some(4));
    }

    #[test]
    fn test_bindings_dispatch_by_target() {
        let engine = engine();

        assert!(matches!(
            bindings(&engine, NavigationTarget::Reference),
            TargetBindings::Reference(_)
        ));
        assert!(matches!(
            bindings(&engine, NavigationTarget::Floating),
            TargetBindings::Floating(_)
        ));
        assert!(matches!(
            bindings(&engine, NavigationTarget::Item(1)),
            TargetBindings::Item(_)
        ));
    }
}
