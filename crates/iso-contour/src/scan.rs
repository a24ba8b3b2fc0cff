use iso_core::{Corner, Error, NodeCodec, NodeId, ScalarField};

use crate::levels::LevelIndex;

/// One elementary isoline segment between two cell corners.
///
/// `a` and `b` keep the scanner's emission order (top or left corner first)
/// and equality compares them in that order. Chaining treats the segment as
/// undirected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Edge {
    pub a: NodeId,
    pub b: NodeId,
}

impl Edge {
    pub fn new(a: NodeId, b: NodeId) -> Self {
        Self { a, b }
    }
}

/// Single-pass row-major scanner emitting dual-grid edges per level.
///
/// The previous row is cached so each interior boundary is examined once and
/// each sample is evaluated once. The row buffer is reused across calls.
#[derive(Debug, Clone, Default)]
pub struct GridScanner {
    codec: NodeCodec,
    prev_row: Vec<Option<f64>>,
}

impl GridScanner {
    pub fn new(codec: NodeCodec) -> Self {
        Self {
            codec,
            prev_row: Vec::new(),
        }
    }

    pub fn codec(&self) -> NodeCodec {
        self.codec
    }

    /// Returns one edge list per level of `index`.
    ///
    /// A pair of adjacent samples contributes only when both are defined
    /// (NaN counts as undefined). A horizontal pair yields a vertical dual
    /// edge between the left corners of the right sample; a vertical pair
    /// yields a horizontal dual edge between the top corners of the lower
    /// sample.
    pub fn scan<F>(
        &mut self,
        field: &F,
        index: &LevelIndex<'_>,
        width: usize,
        height: usize,
    ) -> Result<Vec<Vec<Edge>>, Error>
    where
        F: ScalarField + ?Sized,
    {
        self.codec.check_extent(width, height)?;

        let mut level_edges = vec![Vec::new(); index.len()];
        if width == 0 || height == 0 || index.is_empty() {
            return Ok(level_edges);
        }

        self.prev_row.clear();
        self.prev_row.resize(width, None);

        for y in 0..height {
            let mut prev = None;
            for x in 0..width {
                let val = field.sample(x, y).filter(|v| !v.is_nan());

                if let Some(v) = val {
                    if let Some(left) = prev {
                        let edge = Edge::new(
                            self.codec.encode(x, y, Corner::TopLeft),
                            self.codec.encode(x, y, Corner::BottomLeft),
                        );
                        for level in index.between(v, left) {
                            level_edges[level].push(edge);
                        }
                    }
                    if let Some(up) = self.prev_row[x] {
                        let edge = Edge::new(
                            self.codec.encode(x, y, Corner::TopLeft),
                            self.codec.encode(x, y, Corner::TopRight),
                        );
                        for level in index.between(v, up) {
                            level_edges[level].push(edge);
                        }
                    }
                }

                self.prev_row[x] = val;
                prev = val;
            }
        }

        Ok(level_edges)
    }
}
