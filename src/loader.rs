use anyhow::{anyhow, bail, ensure, Context, Result};
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::str::FromStr;
use strum::EnumCount;
use uuid::Uuid;

use crate::board::{CardColor, City, CityRecord, EdgeId, EdgeRecord, Route};

/// Longest leg in the game, in train cars.
pub const MAX_LEG_COST: i64 = 6;

#[derive(Deserialize, Debug)]
struct BoardFile {
    cities: Vec<CityJson>,
    #[serde(default)]
    connections: Vec<ConnectionJson>,
}

#[derive(Deserialize, Debug)]
struct CityJson {
    name: String,
    x: i32,
    y: i32,
}

#[derive(Deserialize, Debug)]
struct ConnectionJson {
    city1: String,
    city2: String,
    color: CardColor,
    cost: i64,
    id: Uuid,
}

#[derive(Deserialize, Debug)]
struct RouteJson {
    city1: String,
    city2: String,
    points: i64,
}

/// Validated board contents, ready for the graph builders.
#[derive(Clone, Debug, Default)]
pub struct Board {
    pub cities: Vec<CityRecord>,
    pub edges: Vec<EdgeRecord>,
}

impl Board {
    pub fn has_city(&self, city: City) -> bool {
        self.cities.iter().any(|c| c.city == city)
    }
}

pub fn city_from_name(name: &str) -> Result<City> {
    City::from_str(name.trim()).map_err(|_| anyhow!("Invalid city: {}", name))
}

pub fn load_board(path: &Path) -> Result<Board> {
    let text = fs::read_to_string(path).with_context(|| format!("Could not open board file {}", path.display()))?;
    parse_board(&text).with_context(|| format!("Invalid board file {}", path.display()))
}

pub fn parse_board(text: &str) -> Result<Board> {
    let raw: BoardFile = serde_json::from_str(text).context("parse board JSON")?;

    let mut seen: HashSet<City> = HashSet::new();
    let mut cities = Vec::with_capacity(raw.cities.len());
    for c in raw.cities {
        let city = city_from_name(&c.name)?;
        ensure!(seen.insert(city), "Duplicate city name: {}", c.name);
        cities.push(CityRecord { city, name: c.name, x: c.x, y: c.y });
    }

    let mut ids: HashSet<Uuid> = HashSet::new();
    let mut edges = Vec::with_capacity(raw.connections.len());
    for (i, conn) in raw.connections.into_iter().enumerate() {
        let city1 = city_from_name(&conn.city1).with_context(|| format!("connection {}", i + 1))?;
        let city2 = city_from_name(&conn.city2).with_context(|| format!("connection {}", i + 1))?;
        for (field, city) in [("city1", city1), ("city2", city2)] {
            ensure!(seen.contains(&city), "Connection {} {} '{}' is not a listed city", i + 1, field, city);
        }
        if city1 == city2 {
            bail!("Connection {} goes from '{}' to itself", i + 1, city1);
        }
        ensure!(
            (1..=MAX_LEG_COST).contains(&conn.cost),
            "Connection {} cost {} is outside 1..={}",
            i + 1,
            conn.cost,
            MAX_LEG_COST
        );
        ensure!(ids.insert(conn.id), "Duplicate connection ID: {}", conn.id);
        edges.push(EdgeRecord { city1, city2, cost: conn.cost, color: conn.color, id: EdgeId(conn.id) });
    }

    if cities.len() != City::COUNT {
        log::warn!("Expected {} cities, found {}; treating the board as partial", City::COUNT, cities.len());
    }
    log::debug!("board: {} cities, {} connections", cities.len(), edges.len());
    Ok(Board { cities, edges })
}

pub fn load_routes(path: &Path) -> Result<Vec<Route>> {
    let text = fs::read_to_string(path).with_context(|| format!("Could not open routes file {}", path.display()))?;
    parse_routes(&text).with_context(|| format!("Invalid routes file {}", path.display()))
}

pub fn parse_routes(text: &str) -> Result<Vec<Route>> {
    let raw: Vec<RouteJson> = serde_json::from_str(text).context("parse routes JSON")?;
    let mut routes = Vec::with_capacity(raw.len());
    for (i, r) in raw.into_iter().enumerate() {
        let city1 = city_from_name(&r.city1).with_context(|| format!("route {}", i + 1))?;
        let city2 = city_from_name(&r.city2).with_context(|| format!("route {}", i + 1))?;
        ensure!(city1 != city2, "Route {}: Cannot route from '{}' to itself", i + 1, city1);
        let points = u8::try_from(r.points)
            .map_err(|_| anyhow!("Route {}: Points must be a nonnegative integer, got {}", i + 1, r.points))?;
        routes.push(Route { city1, city2, points });
    }
    Ok(routes)
}

/// Every route endpoint must be a city of `board`.
pub fn check_routes_against(board: &Board, routes: &[Route]) -> Result<()> {
    for (i, r) in routes.iter().enumerate() {
        for city in [r.city1, r.city2] {
            ensure!(board.has_city(city), "Route {}: City '{}' not found in base board", i + 1, city);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOARD: &str = r#"{
        "cities": [
            {"name": "Seattle", "x": 50, "y": 80},
            {"name": "Portland", "x": 40, "y": 120},
            {"name": "Salt Lake City", "x": 300, "y": 400}
        ],
        "connections": [
            {"city1": "Portland", "city2": "Seattle", "color": "gray", "cost": 1,
             "id": "d62ff9a4-bf82-4068-955b-9ce3204dde61"},
            {"city1": "Portland", "city2": "Salt Lake City", "color": "blue", "cost": 6,
             "id": "0b3c1f0e-6f2a-4a55-9a39-3f2d7f7f1a10"}
        ]
    }"#;

    #[test]
    fn parses_valid_board() -> Result<()> {
        let b = parse_board(BOARD)?;
        assert_eq!(b.cities.len(), 3);
        assert_eq!(b.cities[2].city, City::SaltLakeCity);
        assert_eq!(b.cities[2].name, "Salt Lake City");
        assert_eq!((b.cities[0].x, b.cities[0].y), (50, 80));
        assert_eq!(b.edges.len(), 2);
        assert_eq!(b.edges[1].color, CardColor::Blue);
        assert_eq!(b.edges[1].cost, 6);
        assert_eq!(b.edges[0].id.to_string(), "d62ff9a4-bf82-4068-955b-9ce3204dde61");
        Ok(())
    }

    #[test]
    fn rejects_bad_boards() {
        let unknown = BOARD.replace("\"Seattle\", \"x\"", "\"Gotham\", \"x\"");
        assert!(parse_board(&unknown).is_err());

        let dup = BOARD.replace("\"Portland\", \"x\"", "\"Seattle\", \"x\"");
        assert!(parse_board(&dup).is_err());

        let bad_id = BOARD.replace("d62ff9a4-bf82", "not-a-uuid");
        assert!(parse_board(&bad_id).is_err());

        let same_id = BOARD.replace("0b3c1f0e-6f2a-4a55-9a39-3f2d7f7f1a10", "d62ff9a4-bf82-4068-955b-9ce3204dde61");
        assert!(parse_board(&same_id).is_err());

        let bad_color = BOARD.replace("\"blue\"", "\"purple\"");
        assert!(parse_board(&bad_color).is_err());

        let self_loop = BOARD.replace("\"city2\": \"Seattle\"", "\"city2\": \"Portland\"");
        assert!(parse_board(&self_loop).is_err());
    }

    #[test]
    fn leg_cost_follows_game_rules() {
        for bad in ["0", "7", "-2"] {
            let text = BOARD.replace("\"cost\": 6", &format!("\"cost\": {}", bad));
            let err = parse_board(&text).unwrap_err();
            assert!(err.to_string().contains("outside 1..=6"), "{}", err);
        }
    }

    #[test]
    fn partial_board_is_accepted() -> Result<()> {
        assert!(parse_board(BOARD)?.cities.len() < City::COUNT);
        Ok(())
    }

    #[test]
    fn connection_to_unlisted_city_is_rejected() {
        let text = BOARD.replace("\"city2\": \"Seattle\"", "\"city2\": \"Miami\"");
        let err = parse_board(&text).unwrap_err();
        assert!(err.to_string().contains("not a listed city"));
    }

    #[test]
    fn parses_routes_and_checks_points() -> Result<()> {
        let routes = parse_routes(r#"[{"city1": "Seattle", "city2": "Salt_Lake_City", "points": 9}]"#)?;
        assert_eq!(routes, vec![Route { city1: City::Seattle, city2: City::SaltLakeCity, points: 9 }]);

        assert!(parse_routes(r#"[{"city1": "Seattle", "city2": "Portland", "points": -1}]"#).is_err());
        assert!(parse_routes(r#"[{"city1": "Seattle", "city2": "Seattle", "points": 3}]"#).is_err());
        assert!(parse_routes(r#"[{"city1": "Seattle", "points": 3}]"#).is_err());
        Ok(())
    }

    #[test]
    fn routes_must_use_board_cities() -> Result<()> {
        let board = parse_board(BOARD)?;
        let ok = parse_routes(r#"[{"city1": "Seattle", "city2": "Portland", "points": 2}]"#)?;
        check_routes_against(&board, &ok)?;
        let off_board = parse_routes(r#"[{"city1": "Seattle", "city2": "Miami", "points": 20}]"#)?;
        assert!(check_routes_against(&board, &off_board).is_err());
        Ok(())
    }
}
