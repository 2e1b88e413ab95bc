//! Shortest paths between cities on a Ticket to Ride board.
//!
//! The board is loaded from JSON ([`loader`]), built into one of two graph
//! representations ([`graph`]) and queried with breadth-first search or
//! Dijkstra ([`search`]).

pub mod board;
pub mod commands;
pub mod config;
pub mod graph;
pub mod loader;
pub mod logging;
pub mod output;
pub mod search;
pub mod util;
