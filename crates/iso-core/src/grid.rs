use core::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Error;
use crate::geom::Point2d;

/// Key of one grid-cell corner, packed as `cy << axis_bits | cx`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct NodeId(pub u64);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Corner of the cell around a sample point.
///
/// ```text
/// 0 1
/// 2 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Corner {
    #[inline]
    fn offset(self) -> (usize, usize) {
        let n = self as usize;
        (n & 1, (n >> 1) & 1)
    }
}

/// Fixed-width bit packing of corner coordinates.
///
/// Corner coordinates of a `width x height` sample grid run over
/// `0..=width` and `0..=height`, so a codec with `axis_bits` bits accepts
/// grids up to `2^axis_bits - 1` samples per axis. Larger grids are rejected
/// by [`NodeCodec::check_extent`] rather than aliased.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeCodec {
    axis_bits: u32,
}

impl Default for NodeCodec {
    fn default() -> Self {
        Self {
            axis_bits: Self::DEFAULT_AXIS_BITS,
        }
    }
}

impl NodeCodec {
    pub const DEFAULT_AXIS_BITS: u32 = 16;
    pub const MAX_AXIS_BITS: u32 = 31;

    pub fn new(axis_bits: u32) -> Result<Self, Error> {
        if axis_bits == 0 || axis_bits > Self::MAX_AXIS_BITS {
            return Err(Error::InvalidAxisBits { bits: axis_bits });
        }
        Ok(Self { axis_bits })
    }

    pub fn axis_bits(&self) -> u32 {
        self.axis_bits
    }

    /// Largest accepted sample count per axis.
    pub fn max_extent(&self) -> usize {
        (1_usize << self.axis_bits) - 1
    }

    pub fn check_extent(&self, width: usize, height: usize) -> Result<(), Error> {
        let max_extent = self.max_extent();
        if width > max_extent || height > max_extent {
            return Err(Error::GridTooLarge {
                width,
                height,
                max_extent,
            });
        }
        Ok(())
    }

    /// Node at `corner` of the sample `(x, y)`. Callers must have validated
    /// the grid with [`NodeCodec::check_extent`].
    #[inline]
    pub fn encode(&self, x: usize, y: usize, corner: Corner) -> NodeId {
        let (dx, dy) = corner.offset();
        let cx = (x + dx) as u64;
        let cy = (y + dy) as u64;
        debug_assert!(cx <= self.mask() && cy <= self.mask());
        NodeId((cy << self.axis_bits) | cx)
    }

    #[inline]
    pub fn decode(&self, id: NodeId) -> (usize, usize) {
        let cx = id.0 & self.mask();
        let cy = id.0 >> self.axis_bits;
        (cx as usize, cy as usize)
    }

    /// Geometric position of a corner: half a sample up and left of the
    /// sample that owns it as its top-left corner.
    #[inline]
    pub fn corner_point(&self, id: NodeId) -> Point2d {
        let (cx, cy) = self.decode(id);
        Point2d::new(cx as f64 - 0.5, cy as f64 - 0.5)
    }

    #[inline]
    fn mask(&self) -> u64 {
        (1_u64 << self.axis_bits) - 1
    }
}
