//! Navigation Engine - Per-instance active-index state machine
//!
//! One engine instance per popup list. The engine owns the navigation
//! state (active index signal, open flag, last navigation key, pending
//! focus apply) and exposes the event entry points the bindings call:
//!
//! - `reference_key_down` / `floating_key_down` - keyboard navigation
//! - `item_pointer_move` / `item_pointer_leave` / `item_focus` /
//!   `item_click` - pointer-driven highlighting
//! - `set_open` - popup lifecycle edges
//! - `sync_active` - external active-index changes (contents changed)
//! - `flush_frame` - run the deferred focus apply
//!
//! The navigation-changed notification fires synchronously inside each
//! event; the focus effect is applied one rendering frame later through
//! the focus synchronizer. Logical active index and visible focus are
//! therefore eventually consistent, never atomically consistent.
//!
//! # Example
//!
//! ```ignore
//! use popup_nav::state::NavigationEngine;
//! use popup_nav::types::NavConfig;
//! use popup_nav::list::NavigableList;
//! use popup_nav::events::KeyboardEvent;
//!
//! let engine = NavigationEngine::new(NavConfig {
//!     loops: true,
//!     ..Default::default()
//! });
//! engine.set_list(NavigableList::with_len(5));
//! engine.on_navigate(|index| println!("active: {index:?}"));
//!
//! engine.set_open(true);
//! engine.floating_key_down(&KeyboardEvent::new("ArrowDown"));
//! engine.flush_frame();
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::events::KeyboardEvent;
use crate::keys::{self, KeyClass};
use crate::list::{DisabledSet, ItemSlot, NavigableList};
use crate::nav::{grid, linear, GridContext, LinearContext};
use crate::resolver;
use crate::tree::{self, PopupId};
use crate::types::{NavConfig, OpenFocus};

use super::focus_sync::{self, FocusHooks, FocusSync};
use super::hover::HoverState;

// =============================================================================
// TYPES
// =============================================================================

/// Navigation-changed callback: the new active index, or None.
pub type NavigateCallback = Rc<dyn Fn(Option<usize>)>;

// =============================================================================
// ENGINE
// =============================================================================

/// The per-popup navigation engine.
///
/// State is instance-owned; nothing is shared across engines except the
/// read-only popup-tree relation used for nested-submenu focus return.
pub struct NavigationEngine {
    id: PopupId,
    config: RefCell<NavConfig>,
    list: RefCell<NavigableList>,
    /// Active index sentinel domain: -1 none, len escaped.
    active: Signal<i32>,
    open: Signal<bool>,
    last_key: RefCell<Option<String>>,
    /// Was the most recent input a key press (for OpenFocus::Auto)?
    key_was_last_input: Cell<bool>,
    /// Has the current open session already settled once?
    had_open: Cell<bool>,
    hover: HoverState,
    sync: FocusSync,
    on_navigate: RefCell<Option<NavigateCallback>>,
}

impl NavigationEngine {
    /// Create an engine. Configuration warnings are logged, never fatal.
    pub fn new(config: NavConfig) -> Rc<Self> {
        log_warnings(&config);

        let initial = config
            .selected_index
            .map(|index| index as i32)
            .unwrap_or(-1);

        Rc::new(Self {
            id: tree::allocate_id(),
            config: RefCell::new(config),
            list: RefCell::new(NavigableList::new()),
            active: signal(initial),
            open: signal(false),
            last_key: RefCell::new(None),
            key_was_last_input: Cell::new(false),
            had_open: Cell::new(false),
            hover: HoverState::new(),
            sync: FocusSync::new(),
            on_navigate: RefCell::new(None),
        })
    }

    /// This engine's popup id in the popup tree.
    pub fn id(&self) -> PopupId {
        self.id
    }

    // -------------------------------------------------------------------------
    // Configuration and collaborators
    // -------------------------------------------------------------------------

    /// Replace the configuration. Disabling the engine cancels any
    /// pending focus apply.
    pub fn set_config(&self, config: NavConfig) {
        log_warnings(&config);
        let disabling = self.config.borrow().enabled && !config.enabled;
        self.config.replace(config);
        if disabling {
            self.sync.cancel_pending();
        }
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> NavConfig {
        self.config.borrow().clone()
    }

    /// Replace the item list. Read at event time, never captured earlier.
    pub fn set_list(&self, list: NavigableList) {
        self.list.replace(list);
    }

    /// Replace one item slot, growing the list if needed.
    pub fn set_slot(&self, index: usize, slot: ItemSlot) {
        self.list.borrow_mut().set_slot(index, slot);
    }

    /// Replace the host focus callbacks.
    pub fn set_hooks(&self, hooks: FocusHooks) {
        self.sync.set_hooks(hooks);
    }

    /// Set the navigation-changed callback.
    pub fn on_navigate<F>(&self, callback: F)
    where
        F: Fn(Option<usize>) + 'static,
    {
        self.on_navigate.replace(Some(Rc::new(callback)));
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    /// The active item index, None while nothing (or the escape
    /// sentinel) is active.
    pub fn active_index(&self) -> Option<usize> {
        let raw = self.active.get() as isize;
        if resolver::in_bounds(&self.list.borrow(), raw) {
            Some(raw as usize)
        } else {
            None
        }
    }

    /// The raw active signal (sentinel domain: -1 none, len escaped).
    pub fn active_signal(&self) -> Signal<i32> {
        self.active.clone()
    }

    /// Id handle of the active item, if any.
    pub fn active_item_id(&self) -> Option<String> {
        self.active_index()
            .and_then(|index| self.list.borrow().id(index).map(str::to_string))
    }

    /// Is the popup open?
    pub fn is_open(&self) -> bool {
        self.open.get()
    }

    /// The open-state signal.
    pub fn open_signal(&self) -> Signal<bool> {
        self.open.clone()
    }

    /// Is a focus apply waiting for the next frame?
    pub fn has_pending_focus(&self) -> bool {
        self.sync.has_pending()
    }

    /// Run the deferred focus apply, if any. Call once per rendering
    /// frame.
    pub fn flush_frame(&self) {
        self.sync.flush();
    }

    // -------------------------------------------------------------------------
    // Popup lifecycle
    // -------------------------------------------------------------------------

    /// Drive an open/close transition. Idempotent: repeating the current
    /// state is a no-op.
    pub fn set_open(&self, open: bool) {
        if self.open.get() == open {
            return;
        }
        self.open.set(open);
        if open {
            self.handle_open();
        } else {
            self.handle_close();
        }
    }

    fn handle_open(&self) {
        let cfg = self.config.borrow().clone();
        if !cfg.enabled {
            self.had_open.set(true);
            return;
        }

        let focus_on_open = match cfg.focus_item_on_open {
            OpenFocus::Always => true,
            OpenFocus::Never => false,
            OpenFocus::Auto => self.key_was_last_input.get(),
        };

        if let Some(selected) = cfg.selected_index {
            // Pre-selection notifies immediately, before any deferred
            // focus work.
            self.commit(selected as isize, focus_on_open);
        } else if focus_on_open {
            let raw = {
                let list = self.list.borrow();
                let disabled = DisabledSet::from(cfg.disabled_indices.clone());
                let ctx = LinearContext {
                    list: &list,
                    disabled: &disabled,
                    orientation: cfg.orientation,
                    rtl: cfg.rtl,
                    loops: cfg.loops,
                    escape: cfg.escape_enabled(),
                };
                linear::opening_index(&ctx, self.last_key.borrow().as_deref(), cfg.nested)
            };
            self.commit(raw, true);
        }

        // The opening key has settled.
        self.last_key.replace(None);
        self.had_open.set(true);
    }

    fn handle_close(&self) {
        // The navigation callback may legitimately change once closed;
        // preserve the identity from before the transition for this one
        // notification.
        let callback = self.on_navigate.borrow().clone();

        self.sync.cancel_pending();
        self.active.set(-1);
        self.last_key.replace(None);
        self.had_open.set(false);

        if let Some(callback) = callback {
            callback(None);
        }

        let cfg = self.config.borrow().clone();
        if cfg.nested {
            if let Some(parent) = cfg.parent {
                focus_sync::return_focus_to_parent(parent);
            }
        }
    }

    /// External active-index change while open (e.g. list contents
    /// changed under an open popup).
    pub fn sync_active(&self, index: Option<usize>) {
        if !self.open.get() {
            return;
        }
        match index {
            Some(index) => self.commit(index as isize, true),
            None => {
                let cfg = self.config.borrow().clone();
                if cfg.selected_index.is_none() && self.had_open.get() {
                    // Contents changed under an open popup: reset and
                    // re-apply focus to nothing.
                    self.commit(-1, true);
                }
            }
        }
    }

    // -------------------------------------------------------------------------
    // Keyboard entry points
    // -------------------------------------------------------------------------

    /// Key down on the reference control.
    ///
    /// Records the last navigation key for the opening rule, requests a
    /// popup open on an arrow key when configured, and forwards
    /// cross-axis-open keys for nested submenus. Returns true when the
    /// event was consumed.
    pub fn reference_key_down(&self, event: &KeyboardEvent) -> bool {
        self.hover.note_key_press();
        self.key_was_last_input.set(true);
        if !event.is_press() {
            return false;
        }

        let cfg = self.config.borrow().clone();
        if !cfg.enabled {
            return false;
        }

        let class = keys::classify(&event.key, cfg.orientation, cfg.rtl);
        if class.intersects(
            KeyClass::MAIN_AXIS | KeyClass::EDGE | KeyClass::ACTIVATION | KeyClass::CROSS_OPEN,
        ) {
            self.last_key.replace(Some(event.key.clone()));
        }

        if cfg.nested && class.contains(KeyClass::CROSS_OPEN) {
            self.sync.request_open(true);
            return true;
        }

        if cfg.open_on_arrow_key_down && !self.open.get() && class.contains(KeyClass::MAIN_AXIS) {
            self.sync.request_open(true);
            return true;
        }

        false
    }

    /// Key down on the popup container: the main navigation entry.
    /// Returns true when the event was consumed.
    pub fn floating_key_down(&self, event: &KeyboardEvent) -> bool {
        // Any key press suppresses the next pointer-leave.
        self.hover.note_key_press();
        self.key_was_last_input.set(true);
        if !event.is_press() {
            return false;
        }

        let cfg = self.config.borrow().clone();
        if !cfg.enabled {
            return false;
        }
        self.last_key.replace(Some(event.key.clone()));

        if cfg.nested && keys::is_cross_axis_close_key(&event.key, cfg.orientation, cfg.rtl) {
            self.sync.request_open(false);
            return true;
        }

        let class = keys::classify(&event.key, cfg.orientation, cfg.rtl);
        if !class.intersects(KeyClass::MAIN_AXIS | KeyClass::EDGE) {
            return false;
        }

        let raw = {
            let list = self.list.borrow();
            let disabled = DisabledSet::from(cfg.disabled_indices.clone());
            let current = self.active.get() as isize;
            next_for_key(&cfg, &list, &disabled, current, &event.key)
        };
        self.commit(raw, true);
        true
    }

    // -------------------------------------------------------------------------
    // Pointer entry points
    // -------------------------------------------------------------------------

    /// Pointer moved over the popup container: pointer-leaves are
    /// genuine mouse exits again.
    pub fn floating_pointer_move(&self) {
        self.key_was_last_input.set(false);
        self.hover.note_container_pointer_move();
    }

    /// Focus left the popup container. `to_guard` is true when focus
    /// moved to a guard element signaling "left backward via
    /// reverse-tab"; that clears the active index.
    pub fn floating_blur(&self, to_guard: bool) {
        if !to_guard {
            return;
        }
        if !self.config.borrow().enabled {
            return;
        }
        self.commit(-1, false);
    }

    /// Pointer moved over an item: hover-driven highlight.
    pub fn item_pointer_move(&self, index: usize) {
        self.key_was_last_input.set(false);
        let cfg = self.config.borrow().clone();
        if !cfg.enabled || !cfg.focus_item_on_hover || !self.open.get() {
            return;
        }
        self.commit(index as isize, true);
    }

    /// Pointer left an item. Ignored while a key press has suppression
    /// armed; otherwise clears the highlight and returns real focus to
    /// the container (virtual mode only clears the logical index).
    pub fn item_pointer_leave(&self) {
        self.key_was_last_input.set(false);
        let cfg = self.config.borrow().clone();
        if !cfg.enabled || !cfg.focus_item_on_hover || !self.open.get() {
            return;
        }
        if self.hover.leave_suppressed() {
            return;
        }
        self.commit(-1, true);
    }

    /// An item received host focus.
    pub fn item_focus(&self, index: usize) {
        if !self.config.borrow().enabled {
            return;
        }
        // Focus is already on the item; track and notify only.
        self.commit(index as isize, false);
    }

    /// An item was clicked. Re-focuses the clicked item, compensating
    /// for platforms where click does not imply focus.
    pub fn item_click(&self, index: usize) {
        self.key_was_last_input.set(false);
        if !self.config.borrow().enabled {
            return;
        }
        self.commit(index as isize, true);
    }

    // -------------------------------------------------------------------------
    // Commit
    // -------------------------------------------------------------------------

    /// Settle a raw index: store it, notify synchronously, and (when
    /// `apply` and the popup is open) schedule the focus effect.
    fn commit(&self, raw: isize, apply: bool) {
        let len = self.list.borrow().len() as isize;
        let raw = raw.clamp(-1, len);
        self.active.set(raw as i32);

        let external = if raw >= 0 && raw < len {
            Some(raw as usize)
        } else {
            None
        };

        let callback = self.on_navigate.borrow().clone();
        if let Some(callback) = callback {
            callback(external);
        }

        if apply && self.open.get() {
            let virtual_focus = self.config.borrow().virtual_focus;
            let target = external.map(|index| {
                let id = self.list.borrow().id(index).map(str::to_string);
                (index, id)
            });
            self.sync.apply_later(virtual_focus, target);
        }
    }
}

// =============================================================================
// KEY TRANSITION DISPATCH
// =============================================================================

/// Route one navigation key through the linear or grid navigator.
fn next_for_key(
    cfg: &NavConfig,
    list: &NavigableList,
    disabled: &DisabledSet,
    current: isize,
    key: &str,
) -> isize {
    if !cfg.is_grid() {
        let ctx = LinearContext {
            list,
            disabled,
            orientation: cfg.orientation,
            rtl: cfg.rtl,
            loops: cfg.loops,
            escape: cfg.escape_enabled(),
        };
        return linear::next_index(&ctx, current, key);
    }

    if key == keys::HOME {
        return resolver::min_index(list, disabled);
    }
    if key == keys::END {
        return resolver::max_index(list, disabled);
    }

    // Entry from "nothing active" (or the escape sentinel) is boundary
    // entry, not grid arithmetic.
    if !resolver::in_bounds(list, current) {
        return if keys::is_move_to_end_key(key, cfg.orientation, cfg.rtl) {
            resolver::min_index(list, disabled)
        } else {
            resolver::max_index(list, disabled)
        };
    }

    let ctx = GridContext {
        list,
        disabled,
        orientation: cfg.orientation,
        rtl: cfg.rtl,
        loops: cfg.loops,
        cols: cfg.cols,
    };
    grid::next_index(&ctx, current, key)
}

fn log_warnings(config: &NavConfig) {
    for warning in config.validate() {
        log::warn!("popup-nav: {warning}");
    }
}

// =============================================================================
// TESTS
// =============================================================================
