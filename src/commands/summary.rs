use anyhow::Result;
use log::{info, warn};

use super::load_inputs;
use crate::config::Config;
use crate::graph::{ArenaGraph, KeyedGraph, Traversal};

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SummaryStats {
    pub cities: usize,
    pub legs: usize,
    pub routes: usize,
    pub max_degree: usize,
    pub isolated: usize,
}

pub fn cmd_summary(cfg: &Config) -> Result<SummaryStats> {
    let (board, routes) = load_inputs(cfg)?;
    info!("Starting Ticket to Ride graph summary");

    let keyed = KeyedGraph::build(&board.cities, &board.edges)?;
    let arena = ArenaGraph::build(&board.cities, &board.edges)?;
    debug_assert_eq!(keyed.leg_count(), arena.leg_count());

    let degrees: Vec<usize> = keyed.cities().filter_map(|c| keyed.degree(c)).collect();
    let stats = SummaryStats {
        cities: keyed.city_count(),
        legs: keyed.leg_count(),
        routes: routes.len(),
        max_degree: degrees.iter().copied().max().unwrap_or(0),
        isolated: degrees.iter().filter(|d| **d == 0).count(),
    };
    info!("Total edges in graph: {}", stats.legs);
    for node in arena.nodes() {
        if arena.edges_from(node).is_empty() {
            if let Some(city) = arena.city_node(node) {
                warn!("{} has no connections", city);
            }
        }
    }

    println!("cities:     {}", stats.cities);
    println!("legs:       {}", stats.legs);
    println!("routes:     {}", stats.routes);
    println!("max degree: {}", stats.max_degree);
    if stats.isolated > 0 {
        println!("isolated:   {}", stats.isolated);
    }
    Ok(stats)
}
