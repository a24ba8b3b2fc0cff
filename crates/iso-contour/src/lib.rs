//! Isoline extraction on regular sample grids.
//!
//! Extraction runs in two stages:
//! - [`GridScanner`] walks the grid once, row by row, and emits for every level
//!   the dual-grid [`Edge`]s where two adjacent defined samples straddle it.
//! - [`ChainBuilder`] joins each level's unordered edges into node chains,
//!   split into open chains and closed loops, which [`extract_isolines`]
//!   turns into midpoint polylines.
//!
//! Points produced here sit at the middle of the section between two samples.
//! Subsample accuracy is a separate refinement step working from
//! [`CrossingSection`].
//!
//! Helpers for curves and stitching:
//! - [`find_curve_crossings`] reports where a parametric curve crosses levels.
//! - [`nearest_chain_ends`] and [`stitch_points`] attach extra points to the
//!   closest chain ends.

mod assemble;
mod chain;
mod curve;
mod ends;
mod levels;
mod scan;
mod section;
mod structure;

pub use assemble::{
    IsolineConfig, build_level_chains, chain_polyline, corner_polyline, extract_grid_isolines,
    extract_isolines, midpoint_polyline,
};
pub use chain::{ChainBuilder, InconsistentChain};
pub use curve::find_curve_crossings;
pub use ends::{
    ChainEnd, END_PROXIMITY, EndSide, append_at_end, nearest_chain_ends, stitch_points,
};
pub use levels::LevelIndex;
pub use scan::{Edge, GridScanner};
pub use section::{Axis, CrossingSection};
pub use structure::{LevelIsolines, LevelResult, LevelStructure, NodeChains};
