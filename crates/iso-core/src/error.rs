use core::fmt;

use crate::grid::NodeId;

#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    SizeMismatch {
        expected: usize,
        actual: usize,
    },
    InvalidAxisBits {
        bits: u32,
    },
    GridTooLarge {
        width: usize,
        height: usize,
        max_extent: usize,
    },
    /// A level's edges do not form a graph of degree <= 2 at `node`.
    ChainInconsistency {
        level: usize,
        node: NodeId,
    },
    NotOnSection {
        x: f64,
        y: f64,
    },
    UndefinedSample {
        t: f64,
    },
    NotANumber {
        t: f64,
    },
    DegenerateBracket,
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SizeMismatch { expected, actual } => {
                write!(f, "size mismatch: expected {expected}, got {actual}")
            }
            Self::InvalidAxisBits { bits } => {
                write!(f, "invalid node axis width: {bits} bits (expected 1..=31)")
            }
            Self::GridTooLarge {
                width,
                height,
                max_extent,
            } => write!(
                f,
                "grid {width}x{height} exceeds node packing limit of {max_extent} per axis"
            ),
            Self::ChainInconsistency { level, node } => {
                write!(f, "inconsistent chain at node {node} on level {level}")
            }
            Self::NotOnSection { x, y } => {
                write!(f, "point ({x}, {y}) is not on a grid section")
            }
            Self::UndefinedSample { t } => write!(f, "field undefined at t = {t}"),
            Self::NotANumber { t } => write!(f, "field returned NaN at t = {t}"),
            Self::DegenerateBracket => write!(f, "bracket endpoints have equal values"),
        }
    }
}

impl std::error::Error for Error {}
