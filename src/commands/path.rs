use anyhow::{bail, Result};
use log::{error, info};
use rand::seq::SliceRandom;
use std::path::Path;

use super::{load_inputs, Algorithm};
use crate::board::{City, EdgeId, Route};
use crate::config::Config;
use crate::graph::{ArenaGraph, KeyedGraph, Traversal};
use crate::output;
use crate::search::{self, SearchOutcome};

/// Which pair of cities to connect.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Query {
    /// Route at this index of the routes file.
    Route(usize),
    Cities(City, City),
    /// A random route from the routes file.
    Random,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PathReport {
    pub from: City,
    pub to: City,
    pub algorithm: Algorithm,
    pub edge_ids: Vec<EdgeId>,
    pub cost: u32,
    pub found: bool,
}

pub fn cmd_path(cfg: &Config, algorithm: Algorithm, query: Query, output_path: Option<&Path>) -> Result<PathReport> {
    let (board, routes) = load_inputs(cfg)?;
    let (from, to) = pick_endpoints(&routes, query)?;
    info!("Finding path from {} to {} with {:?}", from, to, algorithm);

    let (edge_ids, cost, found) = match algorithm {
        Algorithm::Bfs => {
            let graph = KeyedGraph::build(&board.cities, &board.edges)?;
            let outcome = search::bfs(&graph, from, to)?;
            summarize(&graph, from, to, outcome)
        }
        Algorithm::BfsArena => {
            let graph = ArenaGraph::build(&board.cities, &board.edges)?;
            let outcome = search::bfs(&graph, graph.node(from)?, graph.node(to)?)?;
            summarize(&graph, from, to, outcome)
        }
        Algorithm::Dijkstra => {
            let graph = ArenaGraph::build(&board.cities, &board.edges)?;
            let outcome = search::dijkstra(&graph, graph.node(from)?, graph.node(to)?)?;
            summarize(&graph, from, to, outcome)
        }
    };

    let out = output_path.map(Path::to_path_buf).unwrap_or_else(|| cfg.output_path());
    output::write_board_state(&out, &edge_ids)?;
    info!("Path output written to {}", out.display());

    Ok(PathReport { from, to, algorithm, edge_ids, cost, found })
}

fn pick_endpoints(routes: &[Route], query: Query) -> Result<(City, City)> {
    match query {
        Query::Cities(a, b) => Ok((a, b)),
        Query::Route(i) => match routes.get(i) {
            Some(r) => Ok((r.city1, r.city2)),
            None => bail!("Route index {} out of range ({} routes)", i, routes.len()),
        },
        Query::Random => match routes.choose(&mut rand::thread_rng()) {
            Some(r) => {
                info!("Picked {}", r);
                Ok((r.city1, r.city2))
            }
            None => bail!("Routes file is empty; pass --from and --to"),
        },
    }
}

fn summarize<G: Traversal>(graph: &G, from: City, to: City, outcome: SearchOutcome<G::Edge>) -> (Vec<EdgeId>, u32, bool) {
    match outcome {
        SearchOutcome::Found(path) => {
            info!("Found shortest path from {} to {}:\n{}", from, to, output::render_path(graph, &path));
            println!("{} -> {}: {} legs, cost {}", from, to, path.len(), path.cost);
            (path.edge_ids(graph), path.cost, true)
        }
        SearchOutcome::NoPath(why) => {
            error!("No path from {} to {}: {}", from, to, why);
            println!("{} -> {}: no path ({})", from, to, why);
            (Vec::new(), 0, false)
        }
    }
}
