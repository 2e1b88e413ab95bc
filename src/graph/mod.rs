//! Board graph representations.
//!
//! Two storage strategies are built from the same validated records:
//! [`KeyedGraph`] maps each city to copies of its incident legs, while
//! [`ArenaGraph`] owns city nodes and directed edges in two arenas and
//! expresses adjacency with indices into them. Both implement
//! [`Traversal`], which is all the search code needs.

use std::fmt;
use std::hash::Hash;

use thiserror::Error;

use crate::board::{City, EdgeId, EdgeRecord, Leg};

pub mod arena;
pub mod keyed;

pub use arena::{ArenaGraph, DirectedEdge, EdgeIx, NodeIx};
pub use keyed::{AdjacentLeg, KeyedGraph};

/// Highest node degree on the board. Only used as a capacity hint.
pub const MAX_NODE_DEGREE: usize = 10;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("duplicate city: {0}")]
    DuplicateCity(City),

    #[error("edge {edge} references unknown city {city}")]
    UnknownCity { edge: EdgeId, city: City },

    #[error("edge {edge} has cost {cost}, expected 1..=255")]
    CostOutOfRange { edge: EdgeId, cost: i64 },

    #[error("city {0} is not part of this graph")]
    NotInGraph(City),
}

/// Capability set the search algorithms are written against.
///
/// `Edge` handles describe one direction of travel: `tail` is where the
/// edge is taken from and `head` is where it leads. For every edge listed
/// by `edges_from(n)`, `tail(edge) == n`.
pub trait Traversal {
    type Node: Copy + Eq + Hash + fmt::Debug;
    type Edge: Copy + Eq + fmt::Debug;

    /// All nodes, in a fixed order for the lifetime of the graph.
    fn nodes(&self) -> Vec<Self::Node>;

    fn node_count(&self) -> usize;

    fn contains(&self, node: Self::Node) -> bool;

    /// Outgoing edges of `node`; empty for nodes not in the graph.
    fn edges_from(&self, node: Self::Node) -> &[Self::Edge];

    fn head(&self, edge: Self::Edge) -> Self::Node;

    fn tail(&self, edge: Self::Edge) -> Self::Node;

    fn cost(&self, edge: Self::Edge) -> u32;

    fn edge_id(&self, edge: Self::Edge) -> EdgeId;

    fn city(&self, node: Self::Node) -> City;

    /// Total number of adjacency entries (two per undirected leg).
    fn entry_count(&self) -> usize;
}

/// Canonicalize an input connection into a [`Leg`], checking the cost width.
pub fn canonical_leg(record: &EdgeRecord) -> Result<Leg, GraphError> {
    let cost = u8::try_from(record.cost)
        .ok()
        .filter(|c| *c >= 1)
        .ok_or(GraphError::CostOutOfRange { edge: record.id, cost: record.cost })?;
    let (low, high) = if record.city1 <= record.city2 {
        (record.city1, record.city2)
    } else {
        (record.city2, record.city1)
    };
    Ok(Leg { low, high, cost, color: record.color, id: record.id })
}
