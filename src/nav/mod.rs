//! Navigator Module - Index transition logic
//!
//! Pure transition functions from (context, current index, key) to the
//! next index:
//!
//! - **Linear** - 1-D traversal (loop, escape, clamp)
//! - **Grid** - 2-D traversal with row/column arithmetic

pub mod grid;
pub mod linear;

pub use grid::GridContext;
pub use linear::LinearContext;
