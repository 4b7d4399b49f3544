//! Event Types - Keyboard and pointer event vocabulary
//!
//! The input vocabulary the bindings consume. Keyboard events carry a
//! DOM-style string key ("a", "Enter", "ArrowUp"); pointer events carry
//! an action kind. Neither owns coordinates: targets are resolved by the
//! host (bindings are registered per role and per item).
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::events::{KeyboardEvent, PointerEvent};
//!
//! let key = KeyboardEvent::new("ArrowDown");
//! let hover = PointerEvent::moved();
//! ```

// =============================================================================
// MODIFIERS
// =============================================================================

/// Keyboard modifier state
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Modifiers {
    pub ctrl: bool,
    pub alt: bool,
    pub shift: bool,
    pub meta: bool,
}

impl Modifiers {
    /// Create empty modifiers
    pub fn none() -> Self {
        Self::default()
    }

    /// Create modifiers with ctrl
    pub fn ctrl() -> Self {
        Self { ctrl: true, ..Self::default() }
    }

    /// Create modifiers with alt
    pub fn alt() -> Self {
        Self { alt: true, ..Self::default() }
    }

    /// Create modifiers with shift
    pub fn shift() -> Self {
        Self { shift: true, ..Self::default() }
    }
}

// =============================================================================
// KEYBOARD EVENTS
// =============================================================================

/// Key event state (press, repeat, release)
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KeyState {
    #[default]
    Press,
    Repeat,
    Release,
}

/// Keyboard event
#[derive(Clone, Debug, PartialEq)]
pub struct KeyboardEvent {
    /// The key that was pressed (e.g., "a", "Enter", "ArrowUp")
    pub key: String,
    /// Modifier keys state
    pub modifiers: Modifiers,
    /// Press/repeat/release state
    pub state: KeyState,
}

impl KeyboardEvent {
    /// Create a simple key press event
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            modifiers: Modifiers::default(),
            state: KeyState::Press,
        }
    }

    /// Create a key press with modifiers
    pub fn with_modifiers(key: impl Into<String>, modifiers: Modifiers) -> Self {
        Self {
            key: key.into(),
            modifiers,
            state: KeyState::Press,
        }
    }

    /// Check if this is a press event
    pub fn is_press(&self) -> bool {
        self.state == KeyState::Press
    }
}

// =============================================================================
// POINTER EVENTS
// =============================================================================

/// Pointer action type
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerAction {
    /// Pointer moved over the target.
    Move,
    /// Pointer left the target.
    Leave,
    /// Button pressed on the target.
    Down,
    /// Press and release on the same target.
    Click,
}

/// Pointer event
#[derive(Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Action type
    pub action: PointerAction,
    /// Modifier keys state
    pub modifiers: Modifiers,
}

impl PointerEvent {
    /// Create a pointer event for an action
    pub fn new(action: PointerAction) -> Self {
        Self {
            action,
            modifiers: Modifiers::default(),
        }
    }

    /// Create a pointer move event
    pub fn moved() -> Self {
        Self::new(PointerAction::Move)
    }

    /// Create a pointer leave event
    pub fn leave() -> Self {
        Self::new(PointerAction::Leave)
    }

    /// Create a pointer down event
    pub fn down() -> Self {
        Self::new(PointerAction::Down)
    }

    /// Create a click event
    pub fn click() -> Self {
        Self::new(PointerAction::Click)
    }
}

// =============================================================================
// TESTS
// =============================================================================
