//! Per-cell guide patterns
//!
//! This module turns a grid style into vector primitives:
//! - Typed primitives (line, rectangle, circle) with their strokes
//! - The per-style rule table

mod generator;
mod types;

pub use generator::*;
pub use types::*;
