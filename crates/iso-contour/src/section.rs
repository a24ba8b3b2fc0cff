use iso_core::{Error, Point2d};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Section along a row: `y` is fixed, `x` varies.
    Horizontal,
    /// Section along a column: `x` is fixed, `y` varies.
    Vertical,
}

/// Segment between two adjacent samples that a coarse isoline point lies on.
///
/// `t = 0` is the sample at `lo`, `t = 1` the sample at `lo + 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrossingSection {
    pub axis: Axis,
    pub fixed: i64,
    pub lo: i64,
}

impl CrossingSection {
    /// Recovers the section of a coarse point: one coordinate is an integer
    /// (the fixed axis), the other a half-integer between two samples.
    pub fn from_midpoint(p: Point2d) -> Result<Self, Error> {
        let is_int = |v: f64| v.is_finite() && v.fract() == 0.0;
        if is_int(p.y) && p.x.is_finite() && !is_int(p.x) {
            Ok(Self {
                axis: Axis::Horizontal,
                fixed: p.y as i64,
                lo: p.x.floor() as i64,
            })
        } else if is_int(p.x) && p.y.is_finite() && !is_int(p.y) {
            Ok(Self {
                axis: Axis::Vertical,
                fixed: p.x as i64,
                lo: p.y.floor() as i64,
            })
        } else {
            Err(Error::NotOnSection { x: p.x, y: p.y })
        }
    }

    pub fn point_at(&self, t: f64) -> Point2d {
        let s = self.lo as f64 + t;
        let f = self.fixed as f64;
        match self.axis {
            Axis::Horizontal => Point2d::new(s, f),
            Axis::Vertical => Point2d::new(f, s),
        }
    }
}
