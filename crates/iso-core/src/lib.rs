//! Foundational primitives for isoline extraction.
//!
//! ## Sampling Coordinates
//! A [`ScalarField`] is sampled at integer points `(x, y)` with
//! `0 <= x < width` and `0 <= y < height`; `None` marks a domain gap.
//! Geometry uses the same frame: sample `(x, y)` sits at `Point2d { x, y }`.
//!
//! ## Grid Nodes
//! Isoline segments are expressed on the dual grid. Every sample owns four
//! cell corners at `(x ± 0.5, y ± 0.5)`; [`NodeCodec`] packs a corner into a
//! [`NodeId`] with a fixed number of bits per axis and rejects grids that do
//! not fit instead of aliasing ids.

mod error;
mod field;
mod geom;
mod grid;

pub use error::Error;
pub use field::{ContinuousField, GridField, ScalarField};
pub use geom::{Point2d, Polyline2d, Vec2d};
pub use grid::{Corner, NodeCodec, NodeId};
