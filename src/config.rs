use std::{env, path::PathBuf};

use crate::util;

#[derive(Clone, Debug, Default)]
pub struct Config {
    pub board: Option<PathBuf>,
    pub routes: Option<PathBuf>,
    pub output: Option<PathBuf>,
    pub threads: Option<usize>,
    pub log_level: Option<String>,
}

impl Config {
    pub fn from_env_defaults() -> Self {
        let board = env::var("TTR_BOARD").ok().map(PathBuf::from);
        let routes = env::var("TTR_ROUTES").ok().map(PathBuf::from);
        let output = env::var("TTR_OUTPUT").ok().map(PathBuf::from);
        let threads = env::var("TTR_THREADS").ok().and_then(|s| s.trim().parse::<usize>().ok()).filter(|n| *n > 0);
        let log_level = env::var("TTR_LOG_LEVEL").ok().filter(|s| !s.trim().is_empty());
        Self { board, routes, output, threads, log_level }
    }

    /// Values set in `env` replace the ones in `self`.
    pub fn overlay(mut self, env: Config) -> Self {
        if env.board.is_some() {
            self.board = env.board;
        }
        if env.routes.is_some() {
            self.routes = env.routes;
        }
        if env.output.is_some() {
            self.output = env.output;
        }
        if env.threads.is_some() {
            self.threads = env.threads;
        }
        if env.log_level.is_some() {
            self.log_level = env.log_level;
        }
        self
    }

    pub fn board_path(&self) -> PathBuf {
        self.board.clone().unwrap_or_else(|| util::default_paths().0)
    }

    pub fn routes_path(&self) -> PathBuf {
        self.routes.clone().unwrap_or_else(|| util::default_paths().1)
    }

    pub fn output_path(&self) -> PathBuf {
        self.output.clone().unwrap_or_else(|| PathBuf::from(util::OUTPUT_FILE))
    }
}
