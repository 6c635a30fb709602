#![allow(clippy::missing_const_for_fn)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::doc_markdown)]
//! Header layout engine for headgrid.
//!
//! Turns a tree of grouped columns into the rows of a table header: which cell
//! goes in which row, how many columns and rows each cell covers, and which
//! cell closes each row.
//!
//! # Pipeline
//!
//! - **Depth scan** ([`scan_depth`]): finds the header depth and flattens the
//!   leaf columns with their keys and width styles.
//! - **Grid build** ([`build_grid`]): places every visible node in the row for
//!   its depth, sums group spans and collapses leaves covered by a spanning
//!   neighbour.
//! - **Facade** ([`compute_header_layout`], [`HeaderLayoutEngine`]): runs both
//!   passes, optionally memoized per tree through a [`LayoutCache`].

mod cache;
mod engine;
mod grid;
mod layout;
mod scan;

pub use cache::LayoutCache;
pub use engine::HeaderLayoutEngine;
pub use grid::{build_grid, RowItem};
pub use layout::{compute_header_layout, compute_header_layout_with, HeaderLayout};
pub use scan::{scan_depth, ColItem, DepthScan};
