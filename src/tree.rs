//! Popup Tree - Parent/child popup registry
//!
//! The explicit collaborator for the nested-submenu relation. Engines
//! hold a parent [`PopupId`] and query this registry for the parent's
//! container focus handle; they never walk or own the tree themselves.
//!
//! # API
//!
//! - `allocate_id` - mint a fresh popup id
//! - `register(id, node)` - add a popup, returns cleanup function
//! - `parent_of(id)` - parent link lookup
//! - `focus_container(id)` - invoke a popup's container focus handle
//! - `focus_within(id)` - is host focus currently inside the popup
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::tree::{self, PopupNode};
//! use std::rc::Rc;
//!
//! let id = tree::allocate_id();
//! let cleanup = tree::register(id, PopupNode {
//!     parent: None,
//!     focus_container: Rc::new(|| { /* focus the container */ }),
//!     focus_within: Rc::new(|| false),
//! });
//!
//! // On unmount:
//! cleanup();
//! ```

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// =============================================================================
// TYPES
// =============================================================================

/// Identifier of one popup in the tree.
pub type PopupId = u64;

/// One registered popup.
#[derive(Clone)]
pub struct PopupNode {
    /// Parent popup, if this is a nested submenu.
    pub parent: Option<PopupId>,
    /// Moves host focus to this popup's container.
    pub focus_container: Rc<dyn Fn()>,
    /// Reports whether host focus is currently inside this popup.
    pub focus_within: Rc<dyn Fn() -> bool>,
}

// =============================================================================
// REGISTRY
// =============================================================================

thread_local! {
    static TREE: RefCell<HashMap<PopupId, PopupNode>> = RefCell::new(HashMap::new());
    static NEXT_ID: Cell<PopupId> = const { Cell::new(0) };
}

/// Mint a fresh popup id.
pub fn allocate_id() -> PopupId {
    NEXT_ID.with(|next| {
        let id = next.get();
        next.set(id + 1);
        id
    })
}

/// Register a popup node. Returns a cleanup function that removes it.
pub fn register(id: PopupId, node: PopupNode) -> impl FnOnce() {
    TREE.with(|tree| {
        tree.borrow_mut().insert(id, node);
    });

    move || {
        TREE.with(|tree| {
            tree.borrow_mut().remove(&id);
        });
    }
}

/// Parent link of a registered popup.
pub fn parent_of(id: PopupId) -> Option<PopupId> {
    TREE.with(|tree| tree.borrow().get(&id).and_then(|node| node.parent))
}

/// Move host focus to a popup's container.
/// Returns false when the popup is not registered.
pub fn focus_container(id: PopupId) -> bool {
    let handle = TREE.with(|tree| tree.borrow().get(&id).map(|node| node.focus_container.clone()));
    match handle {
        Some(focus) => {
            focus();
            true
        }
        None => false,
    }
}

/// Is host focus currently inside a popup?
/// Returns false when the popup is not registered.
pub fn focus_within(id: PopupId) -> bool {
    let handle = TREE.with(|tree| tree.borrow().get(&id).map(|node| node.focus_within.clone()));
    match handle {
        Some(within) => within(),
        None => false,
    }
}

/// Clear the registry (for testing).
pub fn reset_tree() {
    TREE.with(|tree| tree.borrow_mut().clear());
    NEXT_ID.with(|next| next.set(0));
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    fn setup() {
        reset_tree();
    }

    fn node(parent: Option<PopupId>, focused: Rc<Cell<bool>>) -> PopupNode {
        let focused_clone = focused.clone();
        PopupNode {
            parent,
            focus_container: Rc::new(move || focused_clone.set(true)),
            focus_within: Rc::new(move || focused.get()),
        }
    }

    #[test]
    fn test_allocate_distinct_ids() {
        setup();

        let a = allocate_id();
        let b = allocate_id();
        assert_ne!(a, b);
    }

    #[test]
    fn test_register_and_lookup() {
        setup();

        let parent_id = allocate_id();
        let child_id = allocate_id();
        let focused = Rc::new(Cell::new(false));

        let _p = register(parent_id, node(None, focused.clone()));
        let _c = register(child_id, node(Some(parent_id), Rc::new(Cell::new(false))));

        assert_eq!(parent_of(child_id), Some(parent_id));
        assert_eq!(parent_of(parent_id), None);

        assert!(focus_container(parent_id));
        assert!(focused.get());
        assert!(focus_within(parent_id));
    }

    #[test]
    fn test_cleanup_removes_node() {
        setup();

        let id = allocate_id();
        let cleanup = register(id, node(None, Rc::new(Cell::new(false))));

        assert!(focus_container(id));
        cleanup();
        assert!(!focus_container(id));
        assert!(!focus_within(id));
    }

    #[test]
    fn test_unknown_id_is_inert() {
        setup();

        assert_eq!(parent_of(99), None);
        assert!(!focus_container(99));
        assert!(!focus_within(99));
    }
}
