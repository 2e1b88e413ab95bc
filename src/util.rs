use std::path::PathBuf;

pub const BOARD_FILE: &str = "data/base_board_representation.json";
pub const ROUTES_FILE: &str = "data/routes.json";
pub const OUTPUT_FILE: &str = "path_output.json";

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Default (board, routes) input paths.
pub fn default_paths() -> (PathBuf, PathBuf) {
    let root = repo_root();
    (root.join(BOARD_FILE), root.join(ROUTES_FILE))
}
