use log::{debug, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use iso_core::{Error, GridField, NodeCodec, NodeId, Point2d, Polyline2d, ScalarField};

use crate::chain::ChainBuilder;
use crate::levels::LevelIndex;
use crate::scan::{Edge, GridScanner};
use crate::structure::{LevelResult, NodeChains};

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct IsolineConfig {
    /// Bits per axis of the corner packing; grids may span up to
    /// `2^axis_bits - 1` samples per axis.
    pub axis_bits: u32,
}

impl Default for IsolineConfig {
    fn default() -> Self {
        Self {
            axis_bits: NodeCodec::DEFAULT_AXIS_BITS,
        }
    }
}

/// Extracts the isolines of `field` over `[0, width) x [0, height)` for every
/// level of the ascending `levels`.
///
/// The outer error covers problems detected before scanning (codec width,
/// grid extent). Each level then succeeds or fails on its own.
pub fn extract_isolines<F>(
    field: &F,
    levels: &[f64],
    width: usize,
    height: usize,
    cfg: &IsolineConfig,
) -> Result<Vec<LevelResult>, Error>
where
    F: ScalarField + ?Sized,
{
    let codec = NodeCodec::new(cfg.axis_bits)?;
    let index = LevelIndex::new(levels);
    let mut scanner = GridScanner::new(codec);
    let level_edges = scanner.scan(field, &index, width, height)?;

    debug!(
        "isolines: {}x{} grid, {} levels, {} edges",
        width,
        height,
        levels.len(),
        level_edges.iter().map(Vec::len).sum::<usize>()
    );

    #[cfg(feature = "parallel")]
    {
        Ok(level_edges
            .par_iter()
            .enumerate()
            .map(|(level, edges)| assemble_level(&codec, level, edges))
            .collect())
    }
    #[cfg(not(feature = "parallel"))]
    {
        Ok(level_edges
            .iter()
            .enumerate()
            .map(|(level, edges)| assemble_level(&codec, level, edges))
            .collect())
    }
}

/// [`extract_isolines`] over the full extent of a dense field.
pub fn extract_grid_isolines(
    field: &GridField,
    levels: &[f64],
    cfg: &IsolineConfig,
) -> Result<Vec<LevelResult>, Error> {
    extract_isolines(field, levels, field.width(), field.height(), cfg)
}

/// Reconstructs the node chains of one level's edges.
pub fn build_level_chains(level: usize, edges: &[Edge]) -> Result<NodeChains, Error> {
    ChainBuilder::from_edges(edges.iter().map(|e| (e.a, e.b)))
        .map_err(|e| Error::ChainInconsistency {
            level,
            node: e.node,
        })
}

fn assemble_level(codec: &NodeCodec, level: usize, edges: &[Edge]) -> LevelResult {
    let chains = build_level_chains(level, edges).inspect_err(|e| warn!("isolines: {e}"))?;

    debug!(
        "isolines: level {} -> {} open, {} closed",
        level,
        chains.opened.len(),
        chains.closed.len()
    );

    Ok(chains.map(|nodes, closed| chain_polyline(codec, &nodes, closed)))
}

/// Corner coordinates of a node chain.
pub fn corner_polyline(codec: &NodeCodec, nodes: &[NodeId]) -> Polyline2d {
    Polyline2d::new(nodes.iter().map(|&id| codec.corner_point(id)).collect())
}

/// Replaces each pair of consecutive points with its midpoint. A closed
/// input stays closed: the first midpoint is repeated at the end.
pub fn midpoint_polyline(corners: &Polyline2d, closed: bool) -> Polyline2d {
    let mut points: Vec<Point2d> = corners
        .points
        .windows(2)
        .map(|w| w[0].midpoint(w[1]))
        .collect();

    if closed {
        if let Some(&first) = points.first() {
            points.push(first);
        }
    }

    Polyline2d::new(points)
}

pub fn chain_polyline(codec: &NodeCodec, nodes: &[NodeId], closed: bool) -> Polyline2d {
    midpoint_polyline(&corner_polyline(codec, nodes), closed)
}
