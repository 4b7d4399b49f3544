//! Core Types - Orientation, focus modes, and engine configuration
//!
//! Configuration for a navigation engine instance:
//!
//! - `Orientation` - which arrow axis traverses the list
//! - `OpenFocus` - whether opening the popup focuses an item
//! - `FocusMode` - real focus vs. active-descendant tracking
//! - `NavConfig` - the full option surface, with non-fatal validation
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::types::{NavConfig, Orientation};
//!
//! let config = NavConfig {
//!     loops: true,
//!     orientation: Orientation::Vertical,
//!     ..Default::default()
//! };
//!
//! for warning in config.validate() {
//!     eprintln!("{warning}");
//! }
//! ```

use thiserror::Error;

use crate::tree::PopupId;

// =============================================================================
// ORIENTATION
// =============================================================================

/// The arrow-key axis treated as primary traversal.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Orientation {
    /// Up/Down traverse the list.
    #[default]
    Vertical,
    /// Left/Right traverse the list.
    Horizontal,
    /// Every arrow is traversal-eligible (required for grid mode).
    Both,
}

impl Orientation {
    /// Does the vertical arrow pair traverse?
    pub fn has_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }

    /// Does the horizontal arrow pair traverse?
    pub fn has_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }
}

// =============================================================================
// FOCUS POLICIES
// =============================================================================

/// Whether opening the popup should focus an item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OpenFocus {
    /// Always focus an item on open.
    Always,
    /// Never focus an item on open.
    Never,
    /// Focus only when the open was driven by a key press.
    #[default]
    Auto,
}

/// How the active item receives focus.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FocusMode {
    /// Host focus moves to the active item.
    #[default]
    Real,
    /// Host focus stays on the popup container; an active-descendant
    /// reference tracks the logical selection.
    Virtual,
}

// =============================================================================
// CONFIG
// =============================================================================

/// Configuration for one navigation engine instance.
///
/// All options have conservative defaults; a plain `NavConfig::default()`
/// yields a vertical, non-looping, real-focus list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavConfig {
    /// Turn the whole engine on/off.
    pub enabled: bool,
    /// Pre-selection synced as the active index on open.
    pub selected_index: Option<usize>,
    /// Whether opening the popup focuses an item.
    pub focus_item_on_open: OpenFocus,
    /// Pointer movement over an item highlights it.
    pub focus_item_on_hover: bool,
    /// An arrow key on the reference requests a popup open.
    pub open_on_arrow_key_down: bool,
    /// Extra disabled indices layered over per-slot disabled flags.
    pub disabled_indices: Option<Vec<usize>>,
    /// Let the active selection pass through "nothing focused" once per
    /// wraparound lap. Only meaningful with `loops` and `virtual_focus`.
    pub allow_escape: bool,
    /// Wrap from the last item to the first and back.
    pub loops: bool,
    /// This list is a nested submenu (cross-axis keys open/close it).
    pub nested: bool,
    /// Mirror horizontal keys for right-to-left text direction.
    pub rtl: bool,
    /// Track the active item logically instead of moving host focus.
    pub virtual_focus: bool,
    /// Primary traversal axis.
    pub orientation: Orientation,
    /// Column count; values above 1 switch the engine to grid mode.
    pub cols: usize,
    /// Parent popup in the popup tree (for nested submenus).
    pub parent: Option<PopupId>,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            selected_index: None,
            focus_item_on_open: OpenFocus::Auto,
            focus_item_on_hover: true,
            open_on_arrow_key_down: true,
            disabled_indices: None,
            allow_escape: false,
            loops: false,
            nested: false,
            rtl: false,
            virtual_focus: false,
            orientation: Orientation::Vertical,
            cols: 1,
            parent: None,
        }
    }
}

impl NavConfig {
    /// The focus mode this configuration selects.
    pub fn focus_mode(&self) -> FocusMode {
        if self.virtual_focus {
            FocusMode::Virtual
        } else {
            FocusMode::Real
        }
    }

    /// Is grid mode active (more than one column)?
    pub fn is_grid(&self) -> bool {
        self.cols > 1
    }

    /// Is the escape policy in effect?
    ///
    /// `allow_escape` degrades to plain wrapping unless `loops` and
    /// `virtual_focus` are both set.
    pub fn escape_enabled(&self) -> bool {
        self.allow_escape && self.loops && self.virtual_focus
    }

    /// Check the configuration for non-fatal problems.
    ///
    /// The engine logs each returned warning and then degrades gracefully;
    /// nothing here is an error.
    pub fn validate(&self) -> Vec<ConfigWarning> {
        let mut warnings = Vec::new();

        if self.allow_escape && !(self.loops && self.virtual_focus) {
            warnings.push(ConfigWarning::EscapeRequiresLoopedVirtual);
        }

        if self.cols > 1 && self.orientation != Orientation::Both {
            warnings.push(ConfigWarning::GridNeedsBothAxes { cols: self.cols });
        }

        warnings
    }
}

// =============================================================================
// CONFIG WARNINGS
// =============================================================================

/// Non-fatal configuration problems.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigWarning {
    /// `allow_escape` set without `loops` and `virtual_focus`.
    #[error("allow_escape requires loops and virtual_focus; escape behavior is disabled")]
    EscapeRequiresLoopedVirtual,

    /// Grid column count with a single-axis orientation.
    #[error("cols = {cols} with a single-axis orientation; only the configured axis responds")]
    GridNeedsBothAxes { cols: usize },
}

// =============================================================================
// TESTS
// =============================================================================
