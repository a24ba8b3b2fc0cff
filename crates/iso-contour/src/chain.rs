use core::fmt;
use core::hash::Hash;
use std::collections::VecDeque;

use fnv::FnvHashMap;

use crate::structure::LevelStructure;

/// A node's segments cannot be split into chains: it has three, or more than
/// four, incident segments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InconsistentChain<N> {
    pub node: N,
}

impl<N: fmt::Debug> fmt::Display for InconsistentChain<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "inconsistent chain at node {:?}", self.node)
    }
}

impl<N: fmt::Debug> std::error::Error for InconsistentChain<N> {}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    Front,
    Back,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ChainState {
    Open,
    Closed,
    Absorbed,
}

#[derive(Debug, Clone)]
struct Chain<N> {
    nodes: VecDeque<N>,
    state: ChainState,
}

impl<N: Copy + PartialEq> Chain<N> {
    fn end(&self, side: Side) -> Option<N> {
        match side {
            Side::Front => self.nodes.front().copied(),
            Side::Back => self.nodes.back().copied(),
        }
    }

    fn side_of(&self, node: N) -> Option<Side> {
        if self.end(Side::Front) == Some(node) {
            Some(Side::Front)
        } else if self.end(Side::Back) == Some(node) {
            Some(Side::Back)
        } else {
            None
        }
    }

    /// Extends the chain at `side`; `tail[0]` becomes adjacent to the old end.
    fn attach<I>(&mut self, side: Side, tail: I)
    where
        I: IntoIterator<Item = N>,
    {
        match side {
            Side::Front => tail.into_iter().for_each(|n| self.nodes.push_front(n)),
            Side::Back => self.nodes.extend(tail),
        }
    }
}

/// Reconstructs maximal paths and cycles from an unordered multiset of
/// segments whose union has degree <= 2 at every node.
///
/// Chains live in an arena; the endpoint map stores arena indices keyed by
/// the free end nodes, so an open chain is reachable from both ends. A merge
/// moves the shorter chain into the longer one; the absorbed chain stays in
/// the arena, emptied and marked as such.
///
/// A node may carry four segments, where two chains touch (saddle cells).
/// Three or more than four segments at a node are reported as
/// [`InconsistentChain`].
#[derive(Debug, Clone)]
pub struct ChainBuilder<N> {
    chains: Vec<Chain<N>>,
    ends: FnvHashMap<N, usize>,
    closed: Vec<usize>,
    degree: FnvHashMap<N, u8>,
    /// Nodes that reached degree 3, in order; checked again by `finish`.
    odd: Vec<N>,
}

impl<N> Default for ChainBuilder<N> {
    fn default() -> Self {
        Self {
            chains: Vec::new(),
            ends: FnvHashMap::default(),
            closed: Vec::new(),
            degree: FnvHashMap::default(),
            odd: Vec::new(),
        }
    }
}

impl<N> ChainBuilder<N>
where
    N: Copy + Eq + Hash,
{
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds all chains from a list of two-node segments.
    pub fn from_edges<I>(edges: I) -> Result<LevelStructure<Vec<N>>, InconsistentChain<N>>
    where
        I: IntoIterator<Item = (N, N)>,
    {
        let mut builder = Self::new();
        for (a, b) in edges {
            builder.push_edge(a, b)?;
        }
        builder.finish()
    }

    pub fn push_edge(&mut self, a: N, b: N) -> Result<(), InconsistentChain<N>> {
        self.push_fragment(&[a, b])
    }

    /// Adds a sub-path. Fragments shorter than two nodes carry no segment and
    /// are ignored.
    pub fn push_fragment(&mut self, fragment: &[N]) -> Result<(), InconsistentChain<N>> {
        let &[first, .., last] = fragment else {
            return Ok(());
        };
        for w in fragment.windows(2) {
            self.count_segment_end(w[0])?;
            self.count_segment_end(w[1])?;
        }

        if let Some(&id) = self.ends.get(&first) {
            self.extend(id, fragment.iter().copied())
        } else if let Some(&id) = self.ends.get(&last) {
            self.extend(id, fragment.iter().rev().copied())
        } else if first == last {
            self.chains.push(Chain {
                nodes: fragment.iter().copied().collect(),
                state: ChainState::Closed,
            });
            self.closed.push(self.chains.len() - 1);
            Ok(())
        } else {
            let id = self.chains.len();
            self.chains.push(Chain {
                nodes: fragment.iter().copied().collect(),
                state: ChainState::Open,
            });
            self.ends.insert(first, id);
            self.ends.insert(last, id);
            Ok(())
        }
    }

    /// Number of chains currently open.
    pub fn open_count(&self) -> usize {
        self.chains
            .iter()
            .filter(|c| c.state == ChainState::Open)
            .count()
    }

    pub fn closed_count(&self) -> usize {
        self.closed.len()
    }

    /// Splits the chains into open and closed ones. Open chains are the
    /// distinct arena entries still referenced by the endpoint map, in
    /// creation order; closed chains keep their repeated closing node.
    ///
    /// Fails on the first node left with exactly three segments.
    pub fn finish(self) -> Result<LevelStructure<Vec<N>>, InconsistentChain<N>> {
        if let Some(&node) = self.odd.iter().find(|&n| self.degree.get(n) == Some(&3)) {
            return Err(InconsistentChain { node });
        }

        let mut open_ids: Vec<usize> = self.ends.values().copied().collect();
        open_ids.sort_unstable();
        open_ids.dedup();

        let Self {
            mut chains, closed, ..
        } = self;

        let mut take = |id: usize| Vec::from(core::mem::take(&mut chains[id].nodes));
        let closed = closed.into_iter().map(&mut take).collect();
        let opened = open_ids.into_iter().map(&mut take).collect();

        Ok(LevelStructure { opened, closed })
    }

    /// Degree 3 may still become a legal 4; only 5 and above fail at once.
    fn count_segment_end(&mut self, node: N) -> Result<(), InconsistentChain<N>> {
        let d = self.degree.entry(node).or_insert(0);
        *d = d.saturating_add(1);
        let d = *d;
        match d {
            3 => self.odd.push(node),
            5.. => return Err(InconsistentChain { node }),
            _ => {}
        }
        Ok(())
    }

    /// Appends `path` to chain `id`; `path` must start at one of its ends.
    fn extend<I>(&mut self, id: usize, mut path: I) -> Result<(), InconsistentChain<N>>
    where
        I: Iterator<Item = N>,
    {
        let Some(joint) = path.next() else {
            return Ok(());
        };
        let tail: Vec<N> = path.collect();
        let Some(&tail_end) = tail.last() else {
            return Ok(());
        };

        let chain = &mut self.chains[id];
        if chain.state != ChainState::Open {
            return Err(InconsistentChain { node: joint });
        }
        let Some(side) = chain.side_of(joint) else {
            return Err(InconsistentChain { node: joint });
        };

        chain.attach(side, tail);
        self.ends.remove(&joint);
        self.settle(id, side, tail_end)
    }

    /// Decides what the new free end `tail` of chain `id` at `side` is:
    /// the chain's other end (close), another chain's end (merge), or free.
    fn settle(&mut self, id: usize, side: Side, tail: N) -> Result<(), InconsistentChain<N>> {
        let opposite = match side {
            Side::Front => Side::Back,
            Side::Back => Side::Front,
        };

        if self.chains[id].end(opposite) == Some(tail) {
            self.ends.remove(&tail);
            self.chains[id].state = ChainState::Closed;
            self.closed.push(id);
            return Ok(());
        }

        let Some(&other) = self.ends.get(&tail) else {
            self.ends.insert(tail, id);
            return Ok(());
        };
        if other == id {
            return Err(InconsistentChain { node: tail });
        }

        if self.chains[other].nodes.len() > self.chains[id].nodes.len() {
            self.absorb(other, id, tail)
        } else {
            self.absorb(id, other, tail)
        }
    }

    /// Moves chain `from` onto chain `into` across their shared end `joint`.
    fn absorb(&mut self, into: usize, from: usize, joint: N) -> Result<(), InconsistentChain<N>> {
        let Some(side) = self.chains[into].side_of(joint) else {
            return Err(InconsistentChain { node: joint });
        };

        let from_chain = &mut self.chains[from];
        let mut nodes = core::mem::take(&mut from_chain.nodes);
        from_chain.state = ChainState::Absorbed;
        match (nodes.front() == Some(&joint), nodes.back() == Some(&joint)) {
            (true, _) => {}
            (false, true) => nodes.make_contiguous().reverse(),
            (false, false) => return Err(InconsistentChain { node: joint }),
        }
        nodes.pop_front();
        self.ends.remove(&joint);

        let chain = &mut self.chains[into];
        chain.attach(side, nodes);
        if let Some(far) = chain.end(side) {
            self.ends.insert(far, into);
        }
        Ok(())
    }
}
