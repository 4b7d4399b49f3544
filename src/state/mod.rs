//! State Module - Engine state and focus synchronization
//!
//! The stateful half of the crate:
//!
//! - **Navigation** - per-instance active-index state machine
//! - **Focus sync** - deferred real/virtual focus application
//! - **Hover** - pointer-leave suppression against keyboard navigation

mod focus_sync;
mod hover;
mod navigation;

pub use focus_sync::{return_focus_to_parent, FocusHooks, FocusSync};
pub use hover::HoverState;
pub use navigation::{NavigateCallback, NavigationEngine};
