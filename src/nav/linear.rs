//! Linear Navigator - 1-D index transitions
//!
//! The index state machine for a flat list. States: no-selection (-1),
//! valid (0..len-1), escaped (len, reachable only under the escape
//! policy). Transitions are pure: (context, current, key) -> next index.
//!
//! The escape policy lets the active selection pass through "nothing
//! focused" exactly once per wraparound lap: moving forward past the
//! last item parks at the escaped sentinel (len) before wrapping to the
//! first; moving backward past the first parks at -1 before wrapping to
//! the last.

use crate::keys::{self, END, HOME};
use crate::list::{DisabledSet, NavigableList};
use crate::resolver::{self, Direction};
use crate::types::Orientation;

// =============================================================================
// CONTEXT
// =============================================================================

/// Snapshot of everything a linear transition reads.
///
/// Built fresh per input event so the transition always sees the
/// latest list and disabled state.
pub struct LinearContext<'a> {
    pub list: &'a NavigableList,
    pub disabled: &'a DisabledSet,
    pub orientation: Orientation,
    pub rtl: bool,
    pub loops: bool,
    /// Escape policy, already resolved (`allow_escape && loops && virtual`).
    pub escape: bool,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Compute the next index for a key press.
///
/// Keys that carry no linear intent leave the index unchanged. The
/// result may be out of bounds (all-disabled list, escape sentinel);
/// callers must branch on boundedness before treating it as an item.
pub fn next_index(ctx: &LinearContext, current: isize, key: &str) -> isize {
    if key == HOME {
        return resolver::min_index(ctx.list, ctx.disabled);
    }
    if key == END {
        return resolver::max_index(ctx.list, ctx.disabled);
    }

    let to_end = keys::is_move_to_end_key(key, ctx.orientation, ctx.rtl);
    let to_start = keys::is_move_to_start_key(key, ctx.orientation, ctx.rtl);
    if !to_end && !to_start {
        return current;
    }

    // Nothing active (or escaped backward): enter at the boundary the
    // key is moving away from.
    if current == -1 {
        return if to_end {
            resolver::min_index(ctx.list, ctx.disabled)
        } else {
            resolver::max_index(ctx.list, ctx.disabled)
        };
    }

    if to_end {
        move_forward(ctx, current)
    } else {
        move_backward(ctx, current)
    }
}

/// Initial index for a freshly opened popup with nothing active.
///
/// `min` when the triggering key was a move-to-end-type key, when no
/// key is known, or when the list is a nested submenu; `max` otherwise
/// (an ArrowUp-style open starts at the bottom).
pub fn opening_index(ctx: &LinearContext, last_key: Option<&str>, nested: bool) -> isize {
    let from_start = match last_key {
        None => true,
        Some(key) => keys::is_move_to_end_key(key, ctx.orientation, ctx.rtl),
    };

    if from_start || nested {
        resolver::min_index(ctx.list, ctx.disabled)
    } else {
        resolver::max_index(ctx.list, ctx.disabled)
    }
}

fn move_forward(ctx: &LinearContext, current: isize) -> isize {
    let max = resolver::max_index(ctx.list, ctx.disabled);

    if !ctx.loops {
        let stepped = resolver::resolve(ctx.list, ctx.disabled, current, Direction::Forward, 1);
        return stepped.min(max);
    }

    if current >= max {
        let len = ctx.list.len() as isize;
        if ctx.escape && current != len {
            return len;
        }
        return resolver::min_index(ctx.list, ctx.disabled);
    }

    resolver::resolve(ctx.list, ctx.disabled, current, Direction::Forward, 1)
}

fn move_backward(ctx: &LinearContext, current: isize) -> isize {
    let min = resolver::min_index(ctx.list, ctx.disabled);

    if !ctx.loops {
        let stepped = resolver::resolve(ctx.list, ctx.disabled, current, Direction::Backward, 1);
        return stepped.max(min);
    }

    if current <= min {
        if ctx.escape && current != -1 {
            return -1;
        }
        return resolver::max_index(ctx.list, ctx.disabled);
    }

    resolver::resolve(ctx.list, ctx.disabled, current, Direction::Backward, 1)
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP, ENTER};

    fn ctx<'a>(
        list: &'a NavigableList,
        disabled: &'a DisabledSet,
        loops: bool,
        escape: bool,
    ) -> LinearContext<'a> {
        LinearContext {
            list,
            disabled,
            orientation: Orientation::Vertical,
            rtl: false,
            loops,
            escape,
        }
    }

    #[test]
    fn test_home_end_jump_to_usable_edges() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::from_indices(vec![0, 4]);
        let ctx = ctx(&list, &disabled, false, false);

        assert_eq!(next_index(&ctx, 2, HOME), 1);
        assert_eq!(next_index(&ctx, 2, END), 3);
    }

    #[test]
    fn test_loop_wraps_both_ways() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, true, false);

        assert_eq!(next_index(&ctx, 4, ARROW_DOWN), 0);
        assert_eq!(next_index(&ctx, 0, ARROW_UP), 4);
    }

    #[test]
    fn test_no_loop_clamps_at_edges() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, false, false);

        assert_eq!(next_index(&ctx, 4, ARROW_DOWN), 4);
        assert_eq!(next_index(&ctx, 0, ARROW_UP), 0);
    }

    #[test]
    fn test_steps_skip_disabled() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::from_indices(vec![2]);
        let ctx = ctx(&list, &disabled, false, false);

        assert_eq!(next_index(&ctx, 1, ARROW_DOWN), 3);
        assert_eq!(next_index(&ctx, 3, ARROW_UP), 1);
    }

    #[test]
    fn test_wrap_past_disabled_tail() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::from_indices(vec![3, 4]);
        let ctx = ctx(&list, &disabled, true, false);

        // 2 is the effective max, so down wraps from it.
        assert_eq!(next_index(&ctx, 2, ARROW_DOWN), 0);
    }

    #[test]
    fn test_nothing_active_enters_at_boundary() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, false, false);

        assert_eq!(next_index(&ctx, -1, ARROW_DOWN), 0);
        assert_eq!(next_index(&ctx, -1, ARROW_UP), 4);
        assert_eq!(next_index(&ctx, -1, ENTER), 0);
    }

    #[test]
    fn test_escape_lap_forward() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, true, true);

        // From the last item the selection parks at the sentinel once,
        // then the next press wraps to the first item.
        let escaped = next_index(&ctx, 4, ARROW_DOWN);
        assert_eq!(escaped, 5);

        let wrapped = next_index(&ctx, escaped, ARROW_DOWN);
        assert_eq!(wrapped, 0);
    }

    #[test]
    fn test_escape_lap_backward() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, true, true);

        let escaped = next_index(&ctx, 0, ARROW_UP);
        assert_eq!(escaped, -1);

        let wrapped = next_index(&ctx, escaped, ARROW_UP);
        assert_eq!(wrapped, 4);
    }

    #[test]
    fn test_horizontal_rtl_swaps_arrows() {
        let list = NavigableList::with_len(3);
        let disabled = DisabledSet::none();
        let ctx = LinearContext {
            list: &list,
            disabled: &disabled,
            orientation: Orientation::Horizontal,
            rtl: true,
            loops: false,
            escape: false,
        };

        assert_eq!(next_index(&ctx, 0, ARROW_LEFT), 1);
        assert_eq!(next_index(&ctx, 1, ARROW_RIGHT), 0);
    }

    #[test]
    fn test_foreign_key_is_inert() {
        let list = NavigableList::with_len(3);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, true, false);

        assert_eq!(next_index(&ctx, 1, "a"), 1);
        assert_eq!(next_index(&ctx, 1, ARROW_LEFT), 1);
    }

    #[test]
    fn test_all_disabled_resolves_out_of_bounds() {
        let list = NavigableList::with_len(3);
        let disabled = DisabledSet::from_indices(vec![0, 1, 2]);
        let ctx = ctx(&list, &disabled, false, false);

        let next = next_index(&ctx, -1, ARROW_DOWN);
        assert!(!resolver::in_bounds(&list, next));
    }

    #[test]
    fn test_opening_index_rule() {
        let list = NavigableList::with_len(5);
        let disabled = DisabledSet::none();
        let ctx = ctx(&list, &disabled, false, false);

        // End-type key, unknown key, or nested submenu start at the top.
        assert_eq!(opening_index(&ctx, Some(ARROW_DOWN), false), 0);
        assert_eq!(opening_index(&ctx, Some(ENTER), false), 0);
        assert_eq!(opening_index(&ctx, None, false), 0);
        assert_eq!(opening_index(&ctx, Some(ARROW_UP), true), 0);

        // An ArrowUp-style open starts at the bottom.
        assert_eq!(opening_index(&ctx, Some(ARROW_UP), false), 4);
    }
}
