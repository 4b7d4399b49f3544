//! ARIA Surface - Active-descendant and orientation attributes
//!
//! The attribute values a virtual-focus host mirrors onto the popup
//! container. Computed from the engine's current state; recompute after
//! every navigation notification.

use crate::state::NavigationEngine;
use crate::types::Orientation;

// =============================================================================
// ARIA PROPS
// =============================================================================

/// Attribute values for the popup container.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AriaProps {
    /// Id of the active item, when virtual focus mode has an active
    /// in-bounds index while the popup is open.
    pub active_descendant: Option<String>,
    /// Mirrors the configured orientation; omitted for Both.
    pub orientation: Option<&'static str>,
}

/// Compute the ARIA surface for an engine's current state.
pub fn aria_props(engine: &NavigationEngine) -> AriaProps {
    let config = engine.config();

    let orientation = match config.orientation {
        Orientation::Vertical => Some("vertical"),
        Orientation::Horizontal => Some("horizontal"),
        Orientation::Both => None,
    };

    let active_descendant = if config.virtual_focus && engine.is_open() {
        engine.active_item_id()
    } else {
        None
    };

    AriaProps {
        active_descendant,
        orientation,
    }
}

// =============================================================================
// TESTS
// =============================================================================
