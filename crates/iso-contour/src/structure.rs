#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use iso_core::{Error, NodeId, Polyline2d};

/// Lines of one level, split into open chains and closed loops.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LevelStructure<P> {
    pub opened: Vec<P>,
    pub closed: Vec<P>,
}

impl<P> Default for LevelStructure<P> {
    fn default() -> Self {
        Self {
            opened: Vec::new(),
            closed: Vec::new(),
        }
    }
}

impl<P> LevelStructure<P> {
    pub fn len(&self) -> usize {
        self.opened.len() + self.closed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.opened.is_empty() && self.closed.is_empty()
    }

    /// Converts every line, telling the callback whether it is closed.
    pub fn map<Q, F>(self, mut f: F) -> LevelStructure<Q>
    where
        F: FnMut(P, bool) -> Q,
    {
        LevelStructure {
            opened: self.opened.into_iter().map(|p| f(p, false)).collect(),
            closed: self.closed.into_iter().map(|p| f(p, true)).collect(),
        }
    }

    pub fn try_map<Q, E, F>(self, mut f: F) -> Result<LevelStructure<Q>, E>
    where
        F: FnMut(P, bool) -> Result<Q, E>,
    {
        Ok(LevelStructure {
            opened: self
                .opened
                .into_iter()
                .map(|p| f(p, false))
                .collect::<Result<_, _>>()?,
            closed: self
                .closed
                .into_iter()
                .map(|p| f(p, true))
                .collect::<Result<_, _>>()?,
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &P> {
        self.opened.iter().chain(self.closed.iter())
    }
}

pub type NodeChains = LevelStructure<Vec<NodeId>>;
pub type LevelIsolines = LevelStructure<Polyline2d>;

/// Outcome of one level; a failing level does not affect the others.
pub type LevelResult = Result<LevelIsolines, Error>;
