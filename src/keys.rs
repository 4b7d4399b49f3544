//! Key Classifier - Mapping keys to navigation intents
//!
//! Pure predicates from (key, orientation, text-direction) to semantic
//! navigation intents. Keys use the same string vocabulary as the
//! keyboard events ("ArrowDown", "Home", "Enter", ...).
//!
//! # API
//!
//! - `classify` - full `KeyClass` flag set for a key
//! - `is_main_axis_key` - does this arrow traverse the list
//! - `is_move_to_end_key` / `is_move_to_start_key` - traversal direction
//! - `is_cross_axis_open_key` / `is_cross_axis_close_key` - nested submenus
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::keys::{classify, KeyClass, ARROW_DOWN};
//! use popup_nav::types::Orientation;
//!
//! let class = classify(ARROW_DOWN, Orientation::Vertical, false);
//! assert!(class.contains(KeyClass::MOVE_TO_END));
//! ```

use bitflags::bitflags;

use crate::types::Orientation;

// =============================================================================
// KEY CONSTANTS
// =============================================================================

pub const ARROW_UP: &str = "ArrowUp";
pub const ARROW_DOWN: &str = "ArrowDown";
pub const ARROW_LEFT: &str = "ArrowLeft";
pub const ARROW_RIGHT: &str = "ArrowRight";
pub const HOME: &str = "Home";
pub const END: &str = "End";
pub const ENTER: &str = "Enter";
pub const SPACE: &str = " ";

// =============================================================================
// KEY CLASS
// =============================================================================

bitflags! {
    /// Semantic classes a key can carry for a given orientation and
    /// text direction.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
    pub struct KeyClass: u8 {
        /// Traverses the list along the main axis.
        const MAIN_AXIS = 1 << 0;
        /// Moves toward the end of the main axis.
        const MOVE_TO_END = 1 << 1;
        /// Moves toward the start of the main axis.
        const MOVE_TO_START = 1 << 2;
        /// Opens a nested submenu.
        const CROSS_OPEN = 1 << 3;
        /// Closes a nested submenu.
        const CROSS_CLOSE = 1 << 4;
        /// Activates the current item (Enter, Space, synthetic empty key).
        const ACTIVATION = 1 << 5;
        /// Jumps to a list boundary (Home/End).
        const EDGE = 1 << 6;
    }
}

// =============================================================================
// PREDICATES
// =============================================================================

/// Activation keys share the move-to-end boundary-reset behavior.
/// The empty string is the synthetic key used for programmatic opens.
pub fn is_activation_key(key: &str) -> bool {
    matches!(key, ENTER | SPACE | "")
}

/// Does this arrow traverse the list for the given orientation?
pub fn is_main_axis_key(key: &str, orientation: Orientation) -> bool {
    match key {
        ARROW_UP | ARROW_DOWN => orientation.has_vertical(),
        ARROW_LEFT | ARROW_RIGHT => orientation.has_horizontal(),
        _ => false,
    }
}

/// The forward main-axis arrow, or an activation key.
///
/// Down for vertical; Right for horizontal, mirrored to Left under RTL.
pub fn is_move_to_end_key(key: &str, orientation: Orientation, rtl: bool) -> bool {
    if is_activation_key(key) {
        return true;
    }
    match key {
        ARROW_DOWN => orientation.has_vertical(),
        ARROW_RIGHT => orientation.has_horizontal() && !rtl,
        ARROW_LEFT => orientation.has_horizontal() && rtl,
        _ => false,
    }
}

/// The backward main-axis arrow.
pub fn is_move_to_start_key(key: &str, orientation: Orientation, rtl: bool) -> bool {
    match key {
        ARROW_UP => orientation.has_vertical(),
        ARROW_LEFT => orientation.has_horizontal() && !rtl,
        ARROW_RIGHT => orientation.has_horizontal() && rtl,
        _ => false,
    }
}

/// The arrow that opens a nested submenu.
///
/// Orientation Both never classifies cross-axis keys; every arrow is
/// main-axis-eligible there.
pub fn is_cross_axis_open_key(key: &str, orientation: Orientation, rtl: bool) -> bool {
    match orientation {
        Orientation::Vertical => key == if rtl { ARROW_LEFT } else { ARROW_RIGHT },
        Orientation::Horizontal => key == ARROW_DOWN,
        Orientation::Both => false,
    }
}

/// The arrow that closes a nested submenu.
pub fn is_cross_axis_close_key(key: &str, orientation: Orientation, rtl: bool) -> bool {
    match orientation {
        Orientation::Vertical => key == if rtl { ARROW_RIGHT } else { ARROW_LEFT },
        Orientation::Horizontal => key == ARROW_UP,
        Orientation::Both => false,
    }
}

/// Full class set for a key under the given orientation and direction.
pub fn classify(key: &str, orientation: Orientation, rtl: bool) -> KeyClass {
    let mut class = KeyClass::empty();

    if is_main_axis_key(key, orientation) {
        class |= KeyClass::MAIN_AXIS;
    }
    if is_move_to_end_key(key, orientation, rtl) {
        class |= KeyClass::MOVE_TO_END;
    }
    if is_move_to_start_key(key, orientation, rtl) {
        class |= KeyClass::MOVE_TO_START;
    }
    if is_cross_axis_open_key(key, orientation, rtl) {
        class |= KeyClass::CROSS_OPEN;
    }
    if is_cross_axis_close_key(key, orientation, rtl) {
        class |= KeyClass::CROSS_CLOSE;
    }
    if is_activation_key(key) {
        class |= KeyClass::ACTIVATION;
    }
    if matches!(key, HOME | END) {
        class |= KeyClass::EDGE;
    }

    class
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_axis_vertical() {
        assert!(is_main_axis_key(ARROW_UP, Orientation::Vertical));
        assert!(is_main_axis_key(ARROW_DOWN, Orientation::Vertical));
        assert!(!is_main_axis_key(ARROW_LEFT, Orientation::Vertical));
        assert!(!is_main_axis_key(ARROW_RIGHT, Orientation::Vertical));
    }

    #[test]
    fn test_main_axis_both_accepts_all_arrows() {
        for key in [ARROW_UP, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT] {
            assert!(is_main_axis_key(key, Orientation::Both));
        }
    }

    #[test]
    fn test_move_to_end_vertical() {
        assert!(is_move_to_end_key(ARROW_DOWN, Orientation::Vertical, false));
        assert!(!is_move_to_end_key(ARROW_UP, Orientation::Vertical, false));
    }

    #[test]
    fn test_activation_counts_as_end() {
        assert!(is_move_to_end_key(ENTER, Orientation::Vertical, false));
        assert!(is_move_to_end_key(SPACE, Orientation::Horizontal, false));
        assert!(is_move_to_end_key("", Orientation::Vertical, true));
    }

    #[test]
    fn test_rtl_mirrors_horizontal_end_key() {
        assert!(is_move_to_end_key(ARROW_RIGHT, Orientation::Horizontal, false));
        assert!(!is_move_to_end_key(ARROW_RIGHT, Orientation::Horizontal, true));

        assert!(is_move_to_end_key(ARROW_LEFT, Orientation::Horizontal, true));
        assert!(!is_move_to_end_key(ARROW_LEFT, Orientation::Horizontal, false));

        // Start keys mirror the other way.
        assert!(is_move_to_start_key(ARROW_LEFT, Orientation::Horizontal, false));
        assert!(is_move_to_start_key(ARROW_RIGHT, Orientation::Horizontal, true));
    }

    #[test]
    fn test_cross_axis_vertical() {
        assert!(is_cross_axis_open_key(ARROW_RIGHT, Orientation::Vertical, false));
        assert!(is_cross_axis_close_key(ARROW_LEFT, Orientation::Vertical, false));
    }

    #[test]
    fn test_rtl_mirrors_cross_axis() {
        assert!(is_cross_axis_open_key(ARROW_LEFT, Orientation::Vertical, true));
        assert!(is_cross_axis_close_key(ARROW_RIGHT, Orientation::Vertical, true));

        assert!(!is_cross_axis_open_key(ARROW_RIGHT, Orientation::Vertical, true));
        assert!(!is_cross_axis_close_key(ARROW_LEFT, Orientation::Vertical, true));
    }

    #[test]
    fn test_cross_axis_horizontal() {
        assert!(is_cross_axis_open_key(ARROW_DOWN, Orientation::Horizontal, false));
        assert!(is_cross_axis_close_key(ARROW_UP, Orientation::Horizontal, false));
    }

    #[test]
    fn test_cross_axis_none_for_both() {
        for key in [ARROW_UP, ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT] {
            assert!(!is_cross_axis_open_key(key, Orientation::Both, false));
            assert!(!is_cross_axis_close_key(key, Orientation::Both, false));
        }
    }

    #[test]
    fn test_classify_flags() {
        let class = classify(ARROW_DOWN, Orientation::Vertical, false);
        assert!(class.contains(KeyClass::MAIN_AXIS));
        assert!(class.contains(KeyClass::MOVE_TO_END));
        assert!(!class.contains(KeyClass::MOVE_TO_START));

        let class = classify(HOME, Orientation::Vertical, false);
        assert_eq!(class, KeyClass::EDGE);

        let class = classify(ENTER, Orientation::Vertical, false);
        assert!(class.contains(KeyClass::ACTIVATION));
        assert!(class.contains(KeyClass::MOVE_TO_END));
    }
}
