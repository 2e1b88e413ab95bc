use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};

use log::{debug, error, info, warn};

use super::reconstruct::backtrack;
use super::{ensure_nodes, NoPath, SearchError, SearchOutcome};
use crate::graph::Traversal;

/// Minimum total-cost path from `start` to `end`. Costs must be non-negative.
///
/// Nodes are indexed once per query in [`Traversal::nodes`] order. The heap
/// holds `(distance, index)` pairs, so equal distances pop in index order.
/// Stale entries are dropped when popped. The number of pops is bounded by
/// one per node plus one per adjacency entry.
pub fn dijkstra<G: Traversal>(graph: &G, start: G::Node, end: G::Node) -> Result<SearchOutcome<G::Edge>, SearchError> {
    ensure_nodes(graph, [start, end])?;

    let nodes = graph.nodes();
    let index: HashMap<G::Node, usize> = nodes.iter().enumerate().map(|(i, &n)| (n, i)).collect();
    let start_ix = *index
        .get(&start)
        .ok_or_else(|| SearchError::UnknownNode(format!("{:?}", start)))?;

    let mut distances: Vec<u32> = vec![u32::MAX; nodes.len()];
    let mut arrivals: Vec<Option<G::Edge>> = vec![None; nodes.len()];
    let mut settled: Vec<bool> = vec![false; nodes.len()];
    let mut heap: BinaryHeap<Reverse<(u32, usize)>> = BinaryHeap::new();

    distances[start_ix] = 0;
    heap.push(Reverse((0, start_ix)));

    let bound = nodes.len() + graph.entry_count() + 1;
    let mut pops = 0usize;
    let mut reached = false;
    while let Some(Reverse((dist, ix))) = heap.pop() {
        pops += 1;
        if pops > bound {
            error!("Priority queue did not drain within {} pops", bound);
            return Ok(SearchOutcome::NoPath(NoPath::IterationLimit(bound)));
        }
        if settled[ix] {
            continue;
        }
        settled[ix] = true;
        let current = nodes[ix];
        debug!("Examining: {}/{}", dist, graph.city(current));

        if current == end {
            reached = true;
            break;
        }

        for &edge in graph.edges_from(current) {
            let next = graph.head(edge);
            if next == current {
                error!("Edge {} loops back to {:?}", graph.edge_id(edge), current);
                continue;
            }
            let Some(&nix) = index.get(&next) else {
                error!("Edge {} leads outside the graph", graph.edge_id(edge));
                continue;
            };
            if settled[nix] {
                continue;
            }
            let candidate = dist.saturating_add(graph.cost(edge));
            if candidate < distances[nix] {
                distances[nix] = candidate;
                arrivals[nix] = Some(edge);
                heap.push(Reverse((candidate, nix)));
            }
        }
    }

    if !reached {
        warn!("{:?} is not reachable from {:?}", end, start);
        return Ok(SearchOutcome::NoPath(NoPath::Unreachable));
    }
    info!("Reached goal in {} iters", pops);

    Ok(backtrack(graph, start, end, |n| index.get(&n).and_then(|&i| arrivals[i])))
}
