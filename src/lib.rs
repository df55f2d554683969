//! **wallmaze** is a perfect maze generation and rendering library.
//!
//! A generated maze is a spanning tree over a rows x columns grid: exactly one
//! route exists between any two cells. The output is a per-cell wall layout
//! where every side of every cell is resolved to a passage or a blocking wall,
//! ready for a renderer to consume.

pub mod cells;
pub mod errors;
pub mod generators;
pub mod grid;
pub mod grid_displays;
pub mod renderers;
pub mod units;
pub mod visits;
