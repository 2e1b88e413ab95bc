use anyhow::Result;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::config::Config;
use crate::loader::{self, Board};
use crate::board::Route;

pub mod path;
pub mod route_table;
pub mod summary;
pub mod validate_state;

#[derive(Args, Debug, Clone, Default)]
pub struct CommonOpts {
    /// Board JSON with cities and connections (default: data/base_board_representation.json)
    #[arg(long)]
    pub board: Option<PathBuf>,
    /// Routes JSON (default: data/routes.json)
    #[arg(long)]
    pub routes: Option<PathBuf>,
    /// Log filter, e.g. info or debug
    #[arg(long)]
    pub log_level: Option<String>,
    /// Worker threads for batch queries
    #[arg(long)]
    pub threads: Option<usize>,
}

#[derive(ValueEnum, Copy, Clone, Debug, Eq, PartialEq)]
pub enum Algorithm {
    /// Fewest legs over the city-keyed adjacency list
    Bfs,
    /// Fewest legs over the node/edge arena graph
    BfsArena,
    /// Lowest total cost over the node/edge arena graph
    Dijkstra,
}

/// Merge CLI options with environment defaults (env overrides CLI when set).
pub fn resolve_config(common: &CommonOpts) -> Config {
    let cli = Config {
        board: common.board.clone(),
        routes: common.routes.clone(),
        output: None,
        threads: common.threads,
        log_level: common.log_level.clone(),
    };
    cli.overlay(Config::from_env_defaults())
}

/// Load and cross-check the board and routes files named by `cfg`.
pub fn load_inputs(cfg: &Config) -> Result<(Board, Vec<Route>)> {
    let board = loader::load_board(&cfg.board_path())?;
    let routes = loader::load_routes(&cfg.routes_path())?;
    loader::check_routes_against(&board, &routes)?;
    Ok((board, routes))
}
