//! Hover State - Pointer-leave suppression
//!
//! Arbitrates pointer-driven highlighting against in-flight keyboard
//! navigation. Every key press (any key, not just navigation keys) arms
//! suppression; only pointer movement over the popup container itself
//! disarms it. A pointer-leave while suppressed is ignored, so a
//! momentary leave caused by keyboard-driven scrolling never erases a
//! keyboard selection.

use std::cell::Cell;

// =============================================================================
// HOVER STATE
// =============================================================================

/// Per-engine pointer/keyboard arbitration state.
#[derive(Default)]
pub struct HoverState {
    suppress_leave: Cell<bool>,
}

impl HoverState {
    pub fn new() -> Self {
        Self::default()
    }

    /// A key was pressed: suppress the next pointer-leave.
    pub fn note_key_press(&self) {
        self.suppress_leave.set(true);
    }

    /// The pointer moved over the popup container: leaves are genuine
    /// mouse exits again.
    pub fn note_container_pointer_move(&self) {
        self.suppress_leave.set(false);
    }

    /// Should a pointer-leave be ignored right now?
    pub fn leave_suppressed(&self) -> bool {
        self.suppress_leave.get()
    }
}

// =============================================================================
// TESTS
// =============================================================================
