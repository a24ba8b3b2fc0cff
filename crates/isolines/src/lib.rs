//! Umbrella crate for the isoline workspace.
//!
//! Re-exports the field and geometry primitives, the extraction pipeline and
//! the refinement strategies, so a typical caller needs a single dependency:
//!
//! ```
//! use isolines::{GridField, IsolineConfig, RefineMethod, extract_grid_isolines, refine_isolines};
//!
//! let field = GridField::from_fn(8, 8, |x, y| Some((x + y) as f64));
//! let levels = [3.5, 7.5];
//! let coarse = extract_grid_isolines(&field, &levels, &IsolineConfig::default())?;
//! let fine = refine_isolines(&field, &levels, &coarse, &RefineMethod::Linear)?;
//! assert_eq!(fine.len(), 2);
//! # Ok::<(), isolines::Error>(())
//! ```

pub use iso_contour::*;
pub use iso_core::*;
pub use iso_refine::*;
