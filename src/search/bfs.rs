use std::collections::{HashMap, VecDeque};

use log::{error, info, warn};

use super::reconstruct::backtrack;
use super::{ensure_nodes, NoPath, SearchError, SearchOutcome};
use crate::graph::Traversal;

/// Expansion budget for one traversal: 36 cities plus both directions of
/// 100 legs. Only nodes taken off the queue for the first time count.
pub const MAX_BFS_ITERATIONS: usize = 36 + 2 * 100;

/// Path with the fewest edges from `start` to `end`.
///
/// A node counts as visited when it is dequeued, and the search stops when
/// `end` is dequeued, so the recorded arrival edge is the one from the
/// earliest frontier. Self-loop entries are logged and skipped.
pub fn bfs<G: Traversal>(graph: &G, start: G::Node, end: G::Node) -> Result<SearchOutcome<G::Edge>, SearchError> {
    bfs_bounded(graph, start, end, MAX_BFS_ITERATIONS)
}

/// [`bfs`] with an explicit cap on the number of expanded nodes.
///
/// Stale queue entries for already visited nodes are dropped without
/// counting, so parallel legs never eat into the budget.
pub fn bfs_bounded<G: Traversal>(
    graph: &G,
    start: G::Node,
    end: G::Node,
    max_iterations: usize,
) -> Result<SearchOutcome<G::Edge>, SearchError> {
    ensure_nodes(graph, [start, end])?;

    let mut arrivals: HashMap<G::Node, Option<G::Edge>> = HashMap::with_capacity(graph.node_count());
    let mut queue: VecDeque<(G::Node, Option<G::Edge>)> = VecDeque::new();
    queue.push_back((start, None));

    let mut iterations = 0usize;
    let mut reached = false;
    while let Some((current, via)) = queue.pop_front() {
        if arrivals.contains_key(&current) {
            continue;
        }
        if iterations >= max_iterations {
            error!("Could not reach destination within {} iterations", max_iterations);
            return Ok(SearchOutcome::NoPath(NoPath::IterationLimit(max_iterations)));
        }
        arrivals.insert(current, via);

        if current == end {
            reached = true;
            info!("Found shortest path in {} iterations", iterations);
            break;
        }

        for &edge in graph.edges_from(current) {
            let next = graph.head(edge);
            if next == current {
                error!("Edge {} loops back to {:?}", graph.edge_id(edge), current);
                continue;
            }
            if !arrivals.contains_key(&next) {
                queue.push_back((next, Some(edge)));
            }
        }
        iterations += 1;
    }

    if !reached {
        warn!("{:?} is not reachable from {:?}", end, start);
        return Ok(SearchOutcome::NoPath(NoPath::Unreachable));
    }

    Ok(backtrack(graph, start, end, |n| arrivals.get(&n).copied().flatten()))
}
