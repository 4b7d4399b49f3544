//! Grid Navigator - 2-D index transitions
//!
//! Layers row/column arithmetic over the index resolver. A column count
//! C splits the index space into rows of C: Up/Down step by C, Left/
//! Right step by 1 but never leave their row. Wraparound (when looping)
//! is column-aligned vertically and row-local horizontally.
//!
//! Row identity takes precedence over raw index arithmetic: any result
//! landing on a different row than the start is rejected and the
//! previous index kept.
//!
//! Four-direction mode needs orientation Both; with a single-axis
//! orientation only the configured axis responds (warned at validate
//! time, non-fatal).

use crate::keys::{ARROW_DOWN, ARROW_LEFT, ARROW_RIGHT, ARROW_UP};
use crate::list::{DisabledSet, NavigableList};
use crate::resolver::{self, Direction};
use crate::types::Orientation;

// =============================================================================
// CONTEXT
// =============================================================================

/// Snapshot of everything a grid transition reads.
pub struct GridContext<'a> {
    pub list: &'a NavigableList,
    pub disabled: &'a DisabledSet,
    pub orientation: Orientation,
    pub rtl: bool,
    pub loops: bool,
    /// Column count; at least 2 in grid mode.
    pub cols: usize,
}

// =============================================================================
// TRANSITIONS
// =============================================================================

/// Compute the next index for a key press on a grid.
///
/// `current` must be a valid index; entry from "nothing active" is the
/// engine's opening rule, not grid arithmetic. Non-arrow keys and
/// arrows off the configured axis leave the index unchanged.
pub fn next_index(ctx: &GridContext, current: isize, key: &str) -> isize {
    if !resolver::in_bounds(ctx.list, current) {
        return current;
    }

    // Horizontal arrows mirror under RTL: "forward in the row" is the
    // arrow pointing toward the text-direction end.
    let (row_forward, row_backward) = if ctx.rtl {
        (ARROW_LEFT, ARROW_RIGHT)
    } else {
        (ARROW_RIGHT, ARROW_LEFT)
    };

    if key == ARROW_DOWN && ctx.orientation.has_vertical() {
        vertical_step(ctx, current, Direction::Forward)
    } else if key == ARROW_UP && ctx.orientation.has_vertical() {
        vertical_step(ctx, current, Direction::Backward)
    } else if key == row_forward && ctx.orientation.has_horizontal() {
        horizontal_step(ctx, current, Direction::Forward)
    } else if key == row_backward && ctx.orientation.has_horizontal() {
        horizontal_step(ctx, current, Direction::Backward)
    } else {
        current
    }
}

fn vertical_step(ctx: &GridContext, current: isize, direction: Direction) -> isize {
    let stepped = resolver::resolve(ctx.list, ctx.disabled, current, direction, ctx.cols);
    if resolver::in_bounds(ctx.list, stepped) {
        return stepped;
    }
    if !ctx.loops {
        return current;
    }
    column_wrap(ctx, current, direction)
}

/// Column-aligned wraparound: land on the nearest usable cell in the
/// same column at the opposite row-end; if that column has none, fall
/// back to the nearest earlier usable index; else clamp.
fn column_wrap(ctx: &GridContext, current: isize, direction: Direction) -> isize {
    let cols = ctx.cols as isize;
    let len = ctx.list.len() as isize;
    let col = current % cols;

    // Cell at the opposite row-end of the same column.
    let extreme = match direction {
        Direction::Forward => col,
        Direction::Backward => col + ((len - 1 - col) / cols) * cols,
    };

    // Scan the column from the opposite end back toward the start cell.
    let delta = match direction {
        Direction::Forward => cols,
        Direction::Backward => -cols,
    };
    let mut candidate = extreme;
    while candidate != current && candidate >= 0 && candidate < len {
        if ctx.list.is_usable(ctx.disabled, candidate) {
            return candidate;
        }
        candidate += delta;
    }

    // No usable cell in the exact column: nearest earlier index.
    let fallback = resolver::resolve(ctx.list, ctx.disabled, extreme, Direction::Backward, 1);
    if resolver::in_bounds(ctx.list, fallback) {
        fallback
    } else {
        current
    }
}

fn horizontal_step(ctx: &GridContext, current: isize, direction: Direction) -> isize {
    let cols = ctx.cols as isize;
    let row = current / cols;

    let stepped = resolver::resolve(ctx.list, ctx.disabled, current, direction, 1);
    if resolver::in_bounds(ctx.list, stepped) && stepped / cols == row {
        return stepped;
    }
    if !ctx.loops {
        return current;
    }

    // Wrap to the opposite end of the same row, skipping unusable cells
    // inward from that end.
    let len = ctx.list.len() as isize;
    let row_start = row * cols;
    let row_end = (row_start + cols - 1).min(len - 1);

    let target = match direction {
        Direction::Forward => {
            resolver::resolve(ctx.list, ctx.disabled, row_start - 1, Direction::Forward, 1)
        }
        Direction::Backward => {
            resolver::resolve(ctx.list, ctx.disabled, row_end + 1, Direction::Backward, 1)
        }
    };

    if resolver::in_bounds(ctx.list, target) && target / cols == row {
        target
    } else {
        current
    }
}

// =============================================================================
// TESTS
// =============================================================================
