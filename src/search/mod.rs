//! Shortest-path queries over any [`Traversal`] graph.
//!
//! Both algorithms record, per node, the edge used to first reach it and
//! then walk those arrival edges back from the destination (see
//! [`reconstruct`]). Unreachability is an ordinary outcome, not an error;
//! only asking about a node the graph does not hold is an error.

use std::fmt;

use thiserror::Error;

use crate::board::EdgeId;
use crate::graph::Traversal;

pub mod bfs;
pub mod dijkstra;
pub mod reconstruct;

pub use bfs::{bfs, bfs_bounded, MAX_BFS_ITERATIONS};
pub use dijkstra::dijkstra;
pub use reconstruct::is_connected_walk;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SearchError {
    #[error("{0} is not a node of this graph")]
    UnknownNode(String),
}

/// Edges from source to destination, in traversal order.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Path<E> {
    pub edges: Vec<E>,
    pub cost: u32,
}

impl<E: Copy> Path<E> {
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn edge_ids<G: Traversal<Edge = E>>(&self, graph: &G) -> Vec<EdgeId> {
        self.edges.iter().map(|&e| graph.edge_id(e)).collect()
    }
}

/// Why a query produced no path.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum NoPath {
    /// The destination is not connected to the source.
    Unreachable,
    /// The traversal hit its safety bound before settling the destination.
    IterationLimit(usize),
    /// The arrival records did not lead back to the source.
    Inconsistent(String),
}

impl fmt::Display for NoPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NoPath::Unreachable => write!(f, "destination unreachable"),
            NoPath::IterationLimit(n) => write!(f, "gave up after {} iterations", n),
            NoPath::Inconsistent(why) => write!(f, "inconsistent arrival records: {}", why),
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SearchOutcome<E> {
    Found(Path<E>),
    NoPath(NoPath),
}

impl<E> SearchOutcome<E> {
    pub fn path(&self) -> Option<&Path<E>> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NoPath(_) => None,
        }
    }

    pub fn into_path(self) -> Option<Path<E>> {
        match self {
            SearchOutcome::Found(p) => Some(p),
            SearchOutcome::NoPath(_) => None,
        }
    }
}

pub(crate) fn ensure_nodes<G: Traversal>(graph: &G, nodes: [G::Node; 2]) -> Result<(), SearchError> {
    for n in nodes {
        if !graph.contains(n) {
            return Err(SearchError::UnknownNode(format!("{:?}", n)));
        }
    }
    Ok(())
}
