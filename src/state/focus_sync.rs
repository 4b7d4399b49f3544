//! Focus Synchronizer - Applying navigation decisions as host focus
//!
//! Turns active-index decisions into the visible focus effect, one
//! rendering frame later. The deferral exists so a pointer-down's
//! default focus-stealing behavior resolves before the engine applies
//! its own decision; scheduling always replaces any pending apply, so
//! at most one is outstanding.
//!
//! The host side is a struct of callbacks ([`FocusHooks`]): moving real
//! focus to an item or the container, updating the active-descendant
//! reference in virtual mode, reporting focus containment, and relaying
//! open/close requests to the popup's open-state owner.
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::state::{FocusHooks, FocusSync};
//! use std::rc::Rc;
//!
//! let sync = FocusSync::new();
//! sync.set_hooks(FocusHooks {
//!     focus_item: Some(Rc::new(|index| println!("focus item {index}"))),
//!     ..Default::default()
//! });
//!
//! sync.apply_later(false, Some((2, None)));
//! // ... next rendering frame ...
//! sync.flush();
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::schedule::FrameSlot;
use crate::tree::{self, PopupId};

// =============================================================================
// FOCUS HOOKS
// =============================================================================

/// Host callbacks the synchronizer drives.
///
/// Uses Rc<dyn Fn> for handlers to allow cloning callbacks into the
/// deferred apply task.
#[derive(Clone, Default)]
pub struct FocusHooks {
    /// Move host focus to an item, without scrolling the page.
    pub focus_item: Option<Rc<dyn Fn(usize)>>,
    /// Move host focus to the popup container.
    pub focus_container: Option<Rc<dyn Fn()>>,
    /// Update the active-descendant reference (virtual focus mode).
    pub set_active_descendant: Option<Rc<dyn Fn(Option<String>)>>,
    /// Is host focus currently inside this popup?
    pub focus_within: Option<Rc<dyn Fn() -> bool>>,
    /// Ask the open-state owner to open (true) or close (false).
    pub request_open: Option<Rc<dyn Fn(bool)>>,
}

// =============================================================================
// FOCUS SYNC
// =============================================================================

/// The deferred-apply half of a navigation engine.
#[derive(Default)]
pub struct FocusSync {
    frame: FrameSlot,
    hooks: RefCell<FocusHooks>,
}

impl FocusSync {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the host callbacks.
    pub fn set_hooks(&self, hooks: FocusHooks) {
        self.hooks.replace(hooks);
    }

    /// Snapshot of the current host callbacks.
    pub fn hooks(&self) -> FocusHooks {
        self.hooks.borrow().clone()
    }

    /// Relay an open/close request to the popup's open-state owner.
    pub fn request_open(&self, open: bool) {
        let hook = self.hooks.borrow().request_open.clone();
        if let Some(request) = hook {
            request(open);
        }
    }

    /// Schedule the focus effect for the next rendering frame.
    ///
    /// `target` is the active item as (index, id handle), or None to
    /// re-apply focus to nothing. Replaces any pending apply. The hooks
    /// are captured at schedule time.
    pub fn apply_later(&self, virtual_focus: bool, target: Option<(usize, Option<String>)>) {
        let hooks = self.hooks.borrow().clone();
        self.frame
            .schedule(move || apply_now(&hooks, virtual_focus, target));
    }

    /// Drop any pending focus apply.
    pub fn cancel_pending(&self) {
        self.frame.cancel();
    }

    /// Is a focus apply waiting for the next frame?
    pub fn has_pending(&self) -> bool {
        self.frame.is_pending()
    }

    /// Run the pending focus apply, if any. Called once per rendering
    /// frame by the host.
    pub fn flush(&self) {
        self.frame.flush();
    }
}

fn apply_now(hooks: &FocusHooks, virtual_focus: bool, target: Option<(usize, Option<String>)>) {
    if virtual_focus {
        // Host focus stays on the container; only the logical
        // active-descendant reference moves.
        if let Some(set) = &hooks.set_active_descendant {
            set(target.and_then(|(_, id)| id));
        }
        return;
    }

    match target {
        Some((index, _)) => {
            if let Some(focus) = &hooks.focus_item {
                focus(index);
            }
        }
        None => {
            if let Some(focus) = &hooks.focus_container {
                focus();
            }
        }
    }
}

// =============================================================================
// NESTED SUBMENU CLOSE
// =============================================================================

/// After a child submenu closed, return real focus to the parent popup
/// container unless host focus is already inside the parent. Arrow-key
/// navigation then keeps working once the pointer leaves the child.
pub fn return_focus_to_parent(parent: PopupId) {
    if !tree::focus_within(parent) {
        tree::focus_container(parent);
    }
}

// =============================================================================
// TESTS
// =============================================================================
