//! Sub-sample refinement of coarse isoline points.
//!
//! A coarse point from `iso-contour` sits halfway between two adjacent
//! samples. [`CrossingSection`](iso_contour::CrossingSection) turns it into a
//! one-dimensional problem on `t ∈ [0, 1]`, and a [`PointRefiner`] solves
//! `f(t) = level` on that bracket.
//!
//! Refinement is independent of extraction: a failure is reported for the
//! level it happened on and never touches the coarse polylines.

mod method;
mod refine;

pub use method::{PointRefiner, RefineMethod};
pub use refine::{refine_isolines, refine_point, refine_polyline};
