use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use ttr_pathfinder::board::City;
use ttr_pathfinder::commands::{self, path::Query, Algorithm, CommonOpts};
use ttr_pathfinder::logging;

#[derive(Parser, Debug)]
#[command(name = "ttr_pathfinder", version, about = "Shortest paths on a Ticket to Ride board")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Load the board and routes and report graph statistics
    Summary {
        #[command(flatten)]
        common: CommonOpts,
    },

    /// Find a path for one route and write it as a board-state file
    Path {
        #[command(flatten)]
        common: CommonOpts,
        /// Search algorithm
        #[arg(long, value_enum, default_value_t = Algorithm::Bfs)]
        algo: Algorithm,
        /// Index into the routes file (default: random route)
        #[arg(long, conflicts_with_all = ["from", "to"])]
        route: Option<usize>,
        /// Start city, e.g. "Salt Lake City"
        #[arg(long, requires = "to")]
        from: Option<City>,
        /// End city
        #[arg(long, requires = "from")]
        to: Option<City>,
        /// Board-state output file (default: path_output.json)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Fewest legs and lowest cost for every route
    RouteTable {
        #[command(flatten)]
        common: CommonOpts,
    },

    /// Check a board-state file against the board's connections
    ValidateState {
        #[command(flatten)]
        common: CommonOpts,
        /// Board-state file (default: the path output file)
        #[arg(long)]
        state: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::Summary { common } => {
            let cfg = setup(&common);
            commands::summary::cmd_summary(&cfg)?;
            Ok(())
        }
        Commands::Path { common, algo, route, from, to, output } => {
            let mut cfg = setup(&common);
            if cfg.output.is_none() {
                cfg.output = output;
            }
            let query = match (route, from, to) {
                (Some(i), _, _) => Query::Route(i),
                (None, Some(a), Some(b)) => Query::Cities(a, b),
                (None, None, None) => Query::Random,
                _ => bail!("--from and --to must be given together"),
            };
            commands::path::cmd_path(&cfg, algo, query, None)?;
            Ok(())
        }
        Commands::RouteTable { common } => {
            let cfg = setup(&common);
            commands::route_table::cmd_route_table(&cfg)?;
            Ok(())
        }
        Commands::ValidateState { common, state } => {
            let cfg = setup(&common);
            commands::validate_state::cmd_validate_state(&cfg, state.as_deref())?;
            Ok(())
        }
    }
}

fn setup(common: &CommonOpts) -> ttr_pathfinder::config::Config {
    // Env overrides CLI when set, TTR_OUTPUT included
    let cfg = commands::resolve_config(common);
    logging::init(cfg.log_level.as_deref());
    if let Some(n) = cfg.threads {
        let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
    }
    cfg
}
