use anyhow::{bail, Context, Result};
use log::{info, warn};
use serde::Serialize;
use serde_json::{json, Map, Value as JsonValue};
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path as FsPath;
use uuid::Uuid;

use crate::board::EdgeId;
use crate::graph::Traversal;
use crate::loader::Board;
use crate::search::Path;

/// Player colors of a board-state file. The computed path is drawn as red.
pub const PLAYER_COLORS: [&str; 5] = ["red", "blue", "green", "yellow", "black"];

pub fn board_state(path_ids: &[EdgeId]) -> JsonValue {
    let mut obj = Map::new();
    for color in PLAYER_COLORS {
        obj.insert(color.to_string(), json!([]));
    }
    let ids: Vec<JsonValue> = path_ids.iter().map(|id| JsonValue::String(id.to_string())).collect();
    obj.insert("red".to_string(), JsonValue::Array(ids));
    JsonValue::Object(obj)
}

/// Write the board state for `path_ids`, pretty-printed with 4-space indent.
pub fn write_board_state(out: &FsPath, path_ids: &[EdgeId]) -> Result<()> {
    let file = File::create(out).with_context(|| format!("Failed to open output file {}", out.display()))?;
    let mut w = BufWriter::new(file);
    let mut ser = serde_json::Serializer::with_formatter(&mut w, serde_json::ser::PrettyFormatter::with_indent(b"    "));
    board_state(path_ids).serialize(&mut ser)?;
    w.flush()?;
    Ok(())
}

/// Check a board-state object against `board`: every player key present,
/// each value an array of hyphenated UUID strings, no edge claimed twice and
/// every edge a connection of the board. Unknown player keys only warn.
///
/// Returns the number of claimed edges. All problems are reported together.
pub fn check_board_state(board: &Board, state: &JsonValue) -> Result<usize> {
    let Some(players) = state.as_object() else {
        bail!("Board state must be a JSON object");
    };
    let known: HashSet<Uuid> = board.edges.iter().map(|e| e.id.0).collect();
    let mut problems: Vec<String> = Vec::new();

    for color in PLAYER_COLORS {
        if !players.contains_key(color) {
            problems.push(format!("Missing required player: {}", color));
        }
    }
    for player in players.keys().filter(|k| !PLAYER_COLORS.contains(&k.as_str())) {
        warn!("Unexpected player found: {}", player);
    }

    let mut claimed: HashSet<Uuid> = HashSet::new();
    for (player, edges) in players {
        let Some(edges) = edges.as_array() else {
            problems.push(format!("Player '{}' edges must be a list", player));
            continue;
        };
        for (i, value) in edges.iter().enumerate() {
            let Some(text) = value.as_str() else {
                problems.push(format!("Player '{}' edge {} must be a string", player, i + 1));
                continue;
            };
            let id = match Uuid::parse_str(text) {
                Ok(id) if text.len() == 36 => id,
                _ => {
                    problems.push(format!("Player '{}' edge {} is not a valid UUID: {}", player, i + 1, text));
                    continue;
                }
            };
            if !claimed.insert(id) {
                problems.push(format!("Edge {} is claimed by multiple players", text));
            }
            if !known.contains(&id) {
                problems.push(format!("Player '{}' edge {} ({}) does not exist in base board", player, i + 1, text));
            }
        }
    }

    if !problems.is_empty() {
        bail!("Board state has {} problem(s):\n  {}", problems.len(), problems.join("\n  "));
    }
    info!("Total claimed edges: {}", claimed.len());
    Ok(claimed.len())
}

/// Read a board-state file and run [`check_board_state`] on it.
pub fn load_and_check_board_state(board: &Board, path: &FsPath) -> Result<usize> {
    let text = fs::read_to_string(path).with_context(|| format!("Could not open board state {}", path.display()))?;
    let state: JsonValue = serde_json::from_str(&text).with_context(|| format!("Invalid JSON in {}", path.display()))?;
    check_board_state(board, &state).with_context(|| format!("Invalid board state {}", path.display()))
}

pub fn render_path<G: Traversal>(graph: &G, path: &Path<G::Edge>) -> String {
    if path.is_empty() {
        return "Path(empty)".to_string();
    }
    let mut s = String::from("Path(\n");
    for (i, &e) in path.edges.iter().enumerate() {
        if i > 0 {
            s.push_str(" -> ");
        }
        s.push_str(&format!(
            "\t{}-{}: {}\n",
            graph.city(graph.tail(e)),
            graph.city(graph.head(e)),
            graph.edge_id(e)
        ));
    }
    s.push(')');
    s
}
