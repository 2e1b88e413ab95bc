use serde::Deserialize;
use std::fmt;
use strum::{Display, EnumCount, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};
use uuid::Uuid;

/// Cities on the board, in board enumeration order. Edge endpoints are
/// canonicalized by this order.
#[derive(
    Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Display, EnumCount, EnumIter, EnumString, IntoStaticStr,
)]
pub enum City {
    Seattle,
    Vancouver,
    Calgary,
    Portland,
    #[strum(to_string = "San Francisco", serialize = "San_Francisco")]
    SanFrancisco,
    #[strum(to_string = "Los Angeles", serialize = "Los_Angeles")]
    LosAngeles,
    #[strum(to_string = "Las Vegas", serialize = "Las_Vegas")]
    LasVegas,
    #[strum(to_string = "Salt Lake City", serialize = "Salt_Lake_City")]
    SaltLakeCity,
    Phoenix,
    Helena,
    Winnipeg,
    Denver,
    #[strum(to_string = "Santa Fe", serialize = "Santa_Fe")]
    SantaFe,
    #[strum(to_string = "El Paso", serialize = "El_Paso")]
    ElPaso,
    Omaha,
    Duluth,
    #[strum(to_string = "Sault St Marie", serialize = "Sault_St_Marie")]
    SaultStMarie,
    #[strum(to_string = "Kansas City", serialize = "Kansas_City")]
    KansasCity,
    #[strum(to_string = "Oklahoma City", serialize = "Oklahoma_City")]
    OklahomaCity,
    Dallas,
    Houston,
    Chicago,
    #[strum(to_string = "Saint Louis", serialize = "Saint_Louis")]
    SaintLouis,
    #[strum(to_string = "Little Rock", serialize = "Little_Rock")]
    LittleRock,
    #[strum(to_string = "New Orleans", serialize = "New_Orleans")]
    NewOrleans,
    Toronto,
    Montreal,
    Pittsburgh,
    Nashville,
    Atlanta,
    Raleigh,
    Washington,
    #[strum(to_string = "New York", serialize = "New_York")]
    NewYork,
    Boston,
    Charleston,
    Miami,
}

impl City {
    pub fn all() -> impl Iterator<Item = City> {
        City::iter()
    }

    pub fn name(self) -> &'static str {
        self.into()
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Display, EnumIter, EnumString, Deserialize)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CardColor {
    Pink,
    Red,
    Green,
    White,
    Orange,
    Yellow,
    Blue,
    Black,
    Gray,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct EdgeId(pub Uuid);

impl EdgeId {
    pub fn new_random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// A city as handed over by the input layer, with its layout metadata.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CityRecord {
    pub city: City,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl CityRecord {
    /// Record with the display name and origin coordinates.
    pub fn bare(city: City) -> Self {
        Self { city, name: city.to_string(), x: 0, y: 0 }
    }
}

/// A connection as handed over by the input layer. Cost is unchecked here.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct EdgeRecord {
    pub city1: City,
    pub city2: City,
    pub cost: i64,
    pub color: CardColor,
    pub id: EdgeId,
}

/// Undirected leg with canonical endpoints (`low <= high`).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct Leg {
    pub low: City,
    pub high: City,
    pub cost: u8,
    pub color: CardColor,
    pub id: EdgeId,
}

impl Leg {
    pub fn other(&self, city: City) -> City {
        if self.low == city {
            self.high
        } else {
            self.low
        }
    }
}

/// City vertex of the arena graph. One instance per city per graph.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct CityNode {
    pub city: City,
    pub name: String,
    pub x: i32,
    pub y: i32,
}

impl From<&CityRecord> for CityNode {
    fn from(r: &CityRecord) -> Self {
        Self { city: r.city, name: r.name.clone(), x: r.x, y: r.y }
    }
}

impl fmt::Display for CityNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "City {} at ({},{})", self.name, self.x, self.y)
    }
}

/// Scoring objective between two cities. Only used as a source of queries.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct Route {
    pub city1: City,
    pub city2: City,
    pub points: u8,
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Route({} <-> {}: {} pts)", self.city1, self.city2, self.points)
    }
}
