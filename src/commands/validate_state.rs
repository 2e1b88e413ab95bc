use anyhow::Result;
use log::info;
use std::path::Path;

use crate::config::Config;
use crate::loader;
use crate::output;

/// Check a board-state file against the board. Defaults to the configured
/// output file, so a `path` run can be verified directly.
pub fn cmd_validate_state(cfg: &Config, state: Option<&Path>) -> Result<usize> {
    let board = loader::load_board(&cfg.board_path())?;
    let state_path = state.map(Path::to_path_buf).unwrap_or_else(|| cfg.output_path());
    info!("Validating {} against {} connections", state_path.display(), board.edges.len());

    let claimed = output::load_and_check_board_state(&board, &state_path)?;
    println!("{}: ok, {} claimed edges", state_path.display(), claimed);
    Ok(claimed)
}
