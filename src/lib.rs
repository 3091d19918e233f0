//! Conway's Game of Life on a fixed-size toroidal grid.
//!
//! The engine owns a packed LSB-first bit buffer (8 cells per byte) and
//! exposes it zero-copy through [`TorusGrid::raw_cells`] so a renderer can
//! read cell state without per-cell calls. Stepping is double-buffered:
//! each generation is computed from a snapshot of the previous one.

#![warn(clippy::all, clippy::cargo)]

mod error;
mod grid;
mod pattern;

pub use error::{GridError, GridResult};
pub use grid::TorusGrid;
pub use pattern::Pattern;
