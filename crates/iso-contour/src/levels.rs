use core::ops::Range;

/// Bucketing index over an ascending array of distinct threshold levels.
///
/// Ascending order is a precondition, checked in debug builds only.
#[derive(Debug, Clone, Copy)]
pub struct LevelIndex<'a> {
    levels: &'a [f64],
}

impl<'a> LevelIndex<'a> {
    pub fn new(levels: &'a [f64]) -> Self {
        debug_assert!(
            levels.windows(2).all(|w| w[0] < w[1]),
            "levels must be strictly ascending"
        );
        Self { levels }
    }

    pub fn len(&self) -> usize {
        self.levels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Number of levels `<= z`, i.e. the index of the first level strictly
    /// greater than `z`.
    #[inline]
    pub fn locate(&self, z: f64) -> usize {
        self.levels.partition_point(|&level| level <= z)
    }

    /// Indices of the levels crossed between two samples.
    ///
    /// A level equal to the larger sample is included, one equal to the
    /// smaller sample is not. Equal samples give an empty range.
    #[inline]
    pub fn between(&self, z1: f64, z2: f64) -> Range<usize> {
        let a = self.locate(z1);
        let b = self.locate(z2);
        if a <= b { a..b } else { b..a }
    }
}
