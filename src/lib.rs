//! # popup-nav
//!
//! Reactive keyboard and pointer navigation for floating popups.
//!
//! Built on [spark-signals](https://github.com/RLabs-Inc/spark-signals) for
//! fine-grained reactivity.
//!
//! ## Architecture
//!
//! One [`state::NavigationEngine`] per popup list (menu, listbox, combobox,
//! nested submenu). Input events flow through per-role bindings into pure
//! index transitions, and focus effects are applied one frame later:
//!
//! ```text
//! key/pointer event → Key Classifier / Hover Coordinator
//!                   → Linear or Grid Navigator (pure transition)
//!                   → navigation-changed notification (synchronous)
//!                   → Focus Synchronizer → frame slot → focus effect
//! ```
//!
//! The engine decides which item index is active. It does not decide
//! whether the popup is open (that is relayed through an open-request
//! callback), does not render, and does not trap Tab cycling.
//!
//! ## Modules
//!
//! - [`types`] - Orientation, focus modes, `NavConfig` + validation
//! - [`list`] - Item slots, disabled sets, the uniform usability check
//! - [`resolver`] - Nearest usable index computation
//! - [`keys`] - Key-to-intent classification
//! - [`nav`] - Linear and grid index transitions
//! - [`state`] - The engine, focus synchronizer, and hover coordinator
//! - [`schedule`] - Single-slot deferred-task frame queue
//! - [`tree`] - Parent/child popup registry
//! - [`bindings`] - Per-role event binding records
//! - [`aria`] - Active-descendant / orientation attribute surface
//! - [`input`] - crossterm event conversion for TUI hosts

pub mod aria;
pub mod bindings;
pub mod events;
pub mod input;
pub mod keys;
pub mod list;
pub mod nav;
pub mod resolver;
pub mod schedule;
pub mod state;
pub mod tree;
pub mod types;

// Re-export commonly used items

pub use types::{ConfigWarning, FocusMode, NavConfig, OpenFocus, Orientation};

pub use list::{DisabledSet, ItemSlot, NavigableList};

pub use resolver::{in_bounds, max_index, min_index, resolve, Direction};

pub use keys::{
    classify, is_activation_key, is_cross_axis_close_key, is_cross_axis_open_key,
    is_main_axis_key, is_move_to_end_key, is_move_to_start_key, KeyClass,
};

pub use nav::{GridContext, LinearContext};

pub use state::{
    return_focus_to_parent, FocusHooks, FocusSync, HoverState, NavigateCallback,
    NavigationEngine,
};

pub use schedule::FrameSlot;

pub use tree::{allocate_id, PopupId, PopupNode};

pub use bindings::{
    bindings, floating_bindings, item_bindings, reference_bindings, FloatingBindings,
    ItemBindings, NavigationTarget, ReferenceBindings, TargetBindings,
};

pub use aria::{aria_props, AriaProps};

pub use events::{KeyState, KeyboardEvent, Modifiers, PointerAction, PointerEvent};
