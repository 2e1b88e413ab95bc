use std::collections::HashMap;

use log::{debug, trace};

use super::{canonical_leg, GraphError, Traversal, MAX_NODE_DEGREE};
use crate::board::{CardColor, City, CityNode, CityRecord, EdgeId, EdgeRecord};

/// Index of a [`CityNode`] in the node arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct NodeIx(pub usize);

/// Index of a [`DirectedEdge`] in the edge arena.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EdgeIx(pub usize);

/// One direction of travel over a leg. Every leg yields two of these.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct DirectedEdge {
    pub from: NodeIx,
    pub to: NodeIx,
    pub color: CardColor,
    pub cost: u8,
    pub id: EdgeId,
}

/// Node/edge graph over two append-only arenas.
///
/// Nodes and edges are owned here and nowhere else; adjacency lists hold
/// [`EdgeIx`] handles and edges hold [`NodeIx`] handles. Nothing mutates the
/// arenas after [`ArenaGraph::build`], so handles stay valid for the life of
/// the graph.
#[derive(Clone, Debug, Default)]
pub struct ArenaGraph {
    nodes: Vec<CityNode>,
    by_city: HashMap<City, NodeIx>,
    edges: Vec<DirectedEdge>,
    adjacency: Vec<Vec<EdgeIx>>,
}

impl ArenaGraph {
    pub fn build(cities: &[CityRecord], edges: &[EdgeRecord]) -> Result<Self, GraphError> {
        let mut nodes: Vec<CityNode> = Vec::with_capacity(cities.len());
        let mut by_city: HashMap<City, NodeIx> = HashMap::with_capacity(cities.len());
        for rec in cities {
            if by_city.insert(rec.city, NodeIx(nodes.len())).is_some() {
                return Err(GraphError::DuplicateCity(rec.city));
            }
            nodes.push(CityNode::from(rec));
        }

        let mut arena: Vec<DirectedEdge> = Vec::with_capacity(edges.len() * 2);
        for rec in edges {
            let leg = canonical_leg(rec)?;
            let lookup = |city: City| {
                by_city
                    .get(&city)
                    .copied()
                    .ok_or(GraphError::UnknownCity { edge: leg.id, city })
            };
            let a = lookup(rec.city1)?;
            let b = lookup(rec.city2)?;
            for (from, to) in [(a, b), (b, a)] {
                arena.push(DirectedEdge { from, to, color: leg.color, cost: leg.cost, id: leg.id });
            }
        }

        let mut adjacency: Vec<Vec<EdgeIx>> =
            (0..nodes.len()).map(|_| Vec::with_capacity(MAX_NODE_DEGREE)).collect();
        for (i, edge) in arena.iter().enumerate() {
            adjacency[edge.from.0].push(EdgeIx(i));
            trace!(
                "Added edge: {} -> {} cost {} color {} id {}",
                nodes[edge.from.0].name,
                nodes[edge.to.0].name,
                edge.cost,
                edge.color,
                edge.id
            );
        }

        let graph = Self { nodes, by_city, edges: arena, adjacency };
        debug!("arena graph: {} nodes, {} directed edges", graph.nodes.len(), graph.edges.len());
        Ok(graph)
    }

    /// Handle of `city`, or [`GraphError::NotInGraph`].
    pub fn node(&self, city: City) -> Result<NodeIx, GraphError> {
        self.by_city.get(&city).copied().ok_or(GraphError::NotInGraph(city))
    }

    pub fn city_node(&self, ix: NodeIx) -> Option<&CityNode> {
        self.nodes.get(ix.0)
    }

    pub fn directed_edges(&self) -> &[DirectedEdge] {
        &self.edges
    }

    pub fn degree(&self, city: City) -> Option<usize> {
        let ix = self.by_city.get(&city)?;
        self.adjacency.get(ix.0).map(Vec::len)
    }

    pub fn city_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected legs.
    pub fn leg_count(&self) -> usize {
        self.edges.len() / 2
    }
}

impl Traversal for ArenaGraph {
    type Node = NodeIx;
    type Edge = EdgeIx;

    fn nodes(&self) -> Vec<NodeIx> {
        (0..self.nodes.len()).map(NodeIx).collect()
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn contains(&self, node: NodeIx) -> bool {
        node.0 < self.nodes.len()
    }

    fn edges_from(&self, node: NodeIx) -> &[EdgeIx] {
        self.adjacency.get(node.0).map(Vec::as_slice).unwrap_or(&[])
    }

    // Edge handles only come from this graph's adjacency lists, so the
    // arena lookups below are in bounds.
    fn head(&self, edge: EdgeIx) -> NodeIx {
        self.edges[edge.0].to
    }

    fn tail(&self, edge: EdgeIx) -> NodeIx {
        self.edges[edge.0].from
    }

    fn cost(&self, edge: EdgeIx) -> u32 {
        u32::from(self.edges[edge.0].cost)
    }

    fn edge_id(&self, edge: EdgeIx) -> EdgeId {
        self.edges[edge.0].id
    }

    fn city(&self, node: NodeIx) -> City {
        self.nodes[node.0].city
    }

    fn entry_count(&self) -> usize {
        self.edges.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures;
    use anyhow::Result;

    use City::*;

    #[test]
    fn one_node_per_city_and_two_edges_per_leg() -> Result<()> {
        let cities = fixtures::cities(&[Seattle, Portland, Calgary]);
        let edges = fixtures::edges(&[(Seattle, Portland, 1), (Calgary, Seattle, 4)]);
        let g = ArenaGraph::build(&cities, &edges)?;

        assert_eq!(g.city_count(), 3);
        assert_eq!(g.directed_edges().len(), 4);
        assert_eq!(g.leg_count(), 2);
        for rec in &edges {
            let dirs: Vec<&DirectedEdge> = g.directed_edges().iter().filter(|e| e.id == rec.id).collect();
            assert_eq!(dirs.len(), 2);
            assert_eq!(dirs[0].from, dirs[1].to);
            assert_eq!(dirs[0].to, dirs[1].from);
            assert!(dirs.iter().all(|e| i64::from(e.cost) == rec.cost && e.color == rec.color));
        }
        Ok(())
    }

    #[test]
    fn adjacency_groups_edges_by_origin() -> Result<()> {
        let cities = fixtures::cities(&[Seattle, Portland, Calgary, Helena]);
        let edges = fixtures::edges(&[(Seattle, Portland, 1), (Calgary, Seattle, 4), (Helena, Calgary, 4)]);
        let g = ArenaGraph::build(&cities, &edges)?;

        for node in g.nodes() {
            for &e in g.edges_from(node) {
                assert_eq!(g.tail(e), node);
                assert_ne!(g.head(e), node);
            }
        }
        assert_eq!(g.degree(Seattle), Some(2));
        assert_eq!(g.degree(Helena), Some(1));
        assert_eq!(g.edges_from(g.node(Portland)?).len(), 1);
        Ok(())
    }

    #[test]
    fn node_handles_resolve_to_their_city() -> Result<()> {
        let cities = fixtures::cities(&[Denver, Omaha]);
        let g = ArenaGraph::build(&cities, &[])?;
        let denver = g.node(Denver)?;
        assert_eq!(g.city(denver), Denver);
        assert_eq!(g.city_node(denver).map(|n| n.name.as_str()), Some("Denver"));
        assert_eq!(g.node(Miami), Err(GraphError::NotInGraph(Miami)));
        Ok(())
    }

    #[test]
    fn construction_errors_match_keyed_graph() {
        let cities = fixtures::cities(&[Seattle, Portland]);
        let edges = fixtures::edges(&[(Seattle, Boston, 1)]);
        assert_eq!(
            ArenaGraph::build(&cities, &edges).unwrap_err(),
            GraphError::UnknownCity { edge: edges[0].id, city: Boston }
        );
        let dup = fixtures::cities(&[Portland, Portland]);
        assert_eq!(ArenaGraph::build(&dup, &[]).unwrap_err(), GraphError::DuplicateCity(Portland));
    }
}
