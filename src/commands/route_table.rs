use anyhow::Result;
use log::info;
use rayon::prelude::*;

use super::load_inputs;
use crate::board::Route;
use crate::config::Config;
use crate::graph::ArenaGraph;
use crate::search;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RouteRow {
    pub route: Route,
    pub hops: Option<usize>,
    pub cost: Option<u32>,
}

/// Fewest legs and lowest cost for every route, queried in parallel over
/// one shared graph.
pub fn cmd_route_table(cfg: &Config) -> Result<Vec<RouteRow>> {
    let (board, routes) = load_inputs(cfg)?;
    let graph = ArenaGraph::build(&board.cities, &board.edges)?;

    let rows = routes
        .par_iter()
        .map(|route| query_route(&graph, *route))
        .collect::<Result<Vec<_>>>()?;

    let connected = rows.iter().filter(|r| r.cost.is_some()).count();
    info!("route table: {} routes, {} connected", rows.len(), connected);

    println!("{:<18} {:<18} {:>6} {:>5} {:>5}", "from", "to", "points", "legs", "cost");
    for row in &rows {
        let fmt = |v: Option<String>| v.unwrap_or_else(|| "-".to_string());
        println!(
            "{:<18} {:<18} {:>6} {:>5} {:>5}",
            row.route.city1.to_string(),
            row.route.city2.to_string(),
            row.route.points,
            fmt(row.hops.map(|h| h.to_string())),
            fmt(row.cost.map(|c| c.to_string())),
        );
    }
    Ok(rows)
}

fn query_route(graph: &ArenaGraph, route: Route) -> Result<RouteRow> {
    let (from, to) = (graph.node(route.city1)?, graph.node(route.city2)?);
    let hops = search::bfs(graph, from, to)?.into_path().map(|p| p.len());
    let cost = search::dijkstra(graph, from, to)?.into_path().map(|p| p.cost);
    Ok(RouteRow { route, hops, cost })
}
