use log::{error, info};

use super::{NoPath, Path, SearchOutcome};
use crate::graph::Traversal;

/// Walk arrival edges back from `end` to `start` and return them in
/// source-to-destination order.
///
/// `arrival(n)` yields the edge that first reached `n`, or `None` for the
/// source and for nodes never reached. The walk takes at most
/// `node_count` steps.
pub(crate) fn backtrack<G, F>(graph: &G, start: G::Node, end: G::Node, arrival: F) -> SearchOutcome<G::Edge>
where
    G: Traversal,
    F: Fn(G::Node) -> Option<G::Edge>,
{
    let limit = graph.node_count();
    let mut edges: Vec<G::Edge> = Vec::new();
    let mut current = end;
    let mut steps = 0usize;

    while current != start {
        if steps >= limit {
            error!("Did not reach source while backtracking ({} steps)", steps);
            return SearchOutcome::NoPath(NoPath::Inconsistent(format!(
                "arrival chain from {:?} exceeds {} nodes",
                end, limit
            )));
        }
        let Some(edge) = arrival(current) else {
            error!("Reached end of graph while recording path at {:?}", current);
            return SearchOutcome::NoPath(NoPath::Inconsistent(format!("no arrival edge for {:?}", current)));
        };
        if graph.head(edge) != current {
            error!("Arrival edge {} does not lead to {:?}", graph.edge_id(edge), current);
            return SearchOutcome::NoPath(NoPath::Inconsistent(format!(
                "arrival edge {} does not lead to {:?}",
                graph.edge_id(edge),
                current
            )));
        }
        edges.push(edge);
        current = graph.tail(edge);
        steps += 1;
    }

    info!("Backtracked path in {} iterations", steps);
    edges.reverse();
    let cost = edges.iter().fold(0u32, |acc, &e| acc.saturating_add(graph.cost(e)));
    SearchOutcome::Found(Path { edges, cost })
}

/// True when `edges` is a walk from `start` to `end` over adjacent cities,
/// each edge leaving from where the previous one arrived and no edge
/// looping back onto its own city.
pub fn is_connected_walk<G: Traversal>(graph: &G, start: G::Node, end: G::Node, edges: &[G::Edge]) -> bool {
    let mut at = start;
    for &e in edges {
        if graph.tail(e) != at || graph.head(e) == at {
            return false;
        }
        if !graph.edges_from(at).contains(&e) {
            return false;
        }
        at = graph.head(e);
    }
    at == end
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::City::*;
    use crate::graph::{fixtures, KeyedGraph};
    use anyhow::Result;
    use std::collections::HashMap;

    fn line() -> Result<KeyedGraph> {
        let cities = fixtures::cities(&[Seattle, Portland, SanFrancisco, LosAngeles]);
        let edges = fixtures::edges(&[(Seattle, Portland, 1), (Portland, SanFrancisco, 5), (SanFrancisco, LosAngeles, 3)]);
        Ok(KeyedGraph::build(&cities, &edges)?)
    }

    fn entry(g: &KeyedGraph, from: crate::board::City, to: crate::board::City) -> crate::graph::AdjacentLeg {
        *g.edges_from(from).iter().find(|e| e.neighbor == to).unwrap()
    }

    #[test]
    fn backtrack_reverses_into_travel_order() -> Result<()> {
        let g = line()?;
        let mut arrivals = HashMap::new();
        arrivals.insert(Portland, entry(&g, Seattle, Portland));
        arrivals.insert(SanFrancisco, entry(&g, Portland, SanFrancisco));
        arrivals.insert(LosAngeles, entry(&g, SanFrancisco, LosAngeles));

        let out = backtrack(&g, Seattle, LosAngeles, |n| arrivals.get(&n).copied());
        let path = out.into_path().unwrap();
        assert_eq!(path.len(), 3);
        assert_eq!(path.cost, 9);
        assert_eq!(path.edges[0].owner(), Seattle);
        assert_eq!(path.edges[2].neighbor, LosAngeles);
        assert!(is_connected_walk(&g, Seattle, LosAngeles, &path.edges));
        Ok(())
    }

    #[test]
    fn missing_arrival_is_inconsistent() -> Result<()> {
        let g = line()?;
        let mut arrivals = HashMap::new();
        arrivals.insert(LosAngeles, entry(&g, SanFrancisco, LosAngeles));
        let out = backtrack(&g, Seattle, LosAngeles, |n| arrivals.get(&n).copied());
        assert!(matches!(out, SearchOutcome::NoPath(NoPath::Inconsistent(_))));
        Ok(())
    }

    #[test]
    fn cyclic_arrivals_terminate() -> Result<()> {
        let g = line()?;
        let mut arrivals = HashMap::new();
        arrivals.insert(SanFrancisco, entry(&g, LosAngeles, SanFrancisco));
        arrivals.insert(LosAngeles, entry(&g, SanFrancisco, LosAngeles));
        let out = backtrack(&g, Seattle, LosAngeles, |n| arrivals.get(&n).copied());
        assert!(matches!(out, SearchOutcome::NoPath(NoPath::Inconsistent(_))));
        Ok(())
    }

    #[test]
    fn start_equals_end_is_empty_path() -> Result<()> {
        let g = line()?;
        let out = backtrack(&g, Portland, Portland, |_| None);
        assert_eq!(out.into_path().map(|p| p.len()), Some(0));
        Ok(())
    }

    #[test]
    fn walk_check_rejects_gaps_and_wrong_ends() -> Result<()> {
        let g = line()?;
        let a = entry(&g, Seattle, Portland);
        let c = entry(&g, SanFrancisco, LosAngeles);
        assert!(!is_connected_walk(&g, Seattle, LosAngeles, &[a, c]));
        assert!(!is_connected_walk(&g, Seattle, SanFrancisco, &[a]));
        assert!(is_connected_walk(&g, Seattle, Seattle, &[]));
        Ok(())
    }
}
