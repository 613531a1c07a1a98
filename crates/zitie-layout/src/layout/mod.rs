//! Layout calculation modules for practice sheets
//!
//! This module handles the geometric calculations behind pagination:
//! - Page capacity (how many cells fit, with degenerate-geometry clamping)
//! - Cell placement (where each cell of a page sits on the sheet)

mod capacity;
mod placement;
mod types;

pub use capacity::*;
pub use placement::*;
pub use types::*;
