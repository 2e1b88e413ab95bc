use std::collections::BTreeMap;
use std::fmt;

use log::{debug, trace};

use super::{canonical_leg, GraphError, Traversal, MAX_NODE_DEGREE};
use crate::board::{City, CityRecord, EdgeId, EdgeRecord, Leg};

/// One adjacency-list entry: a leg plus the endpoint on the far side of
/// the city that owns the list.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct AdjacentLeg {
    pub neighbor: City,
    pub leg: Leg,
}

impl AdjacentLeg {
    /// City whose list holds this entry.
    pub fn owner(&self) -> City {
        self.leg.other(self.neighbor)
    }
}

impl fmt::Display for AdjacentLeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Leg({} <-> {}, cost: {}, color: {}, id: {}, neighbor: {})",
            self.leg.low, self.leg.high, self.leg.cost, self.leg.color, self.leg.id, self.neighbor
        )
    }
}

/// City-keyed adjacency list. Each leg appears once in each endpoint's list.
#[derive(Clone, Debug, Default)]
pub struct KeyedGraph {
    adjacency: BTreeMap<City, Vec<AdjacentLeg>>,
}

impl KeyedGraph {
    pub fn build(cities: &[CityRecord], edges: &[EdgeRecord]) -> Result<Self, GraphError> {
        let mut adjacency: BTreeMap<City, Vec<AdjacentLeg>> = BTreeMap::new();
        for rec in cities {
            if adjacency.insert(rec.city, Vec::with_capacity(MAX_NODE_DEGREE)).is_some() {
                return Err(GraphError::DuplicateCity(rec.city));
            }
        }

        for rec in edges {
            let leg = canonical_leg(rec)?;
            for city in [leg.low, leg.high] {
                if !adjacency.contains_key(&city) {
                    return Err(GraphError::UnknownCity { edge: leg.id, city });
                }
            }
            for (owner, neighbor) in [(leg.low, leg.high), (leg.high, leg.low)] {
                let entry = AdjacentLeg { neighbor, leg };
                if let Some(list) = adjacency.get_mut(&owner) {
                    list.push(entry);
                }
                trace!("Added edge: {}", entry);
            }
        }

        let graph = Self { adjacency };
        debug!("keyed graph: {} cities, {} legs", graph.city_count(), graph.leg_count());
        Ok(graph)
    }

    pub fn legs(&self, city: City) -> Option<&[AdjacentLeg]> {
        self.adjacency.get(&city).map(Vec::as_slice)
    }

    pub fn degree(&self, city: City) -> Option<usize> {
        self.adjacency.get(&city).map(Vec::len)
    }

    pub fn cities(&self) -> impl Iterator<Item = City> + '_ {
        self.adjacency.keys().copied()
    }

    pub fn city_count(&self) -> usize {
        self.adjacency.len()
    }

    /// Number of undirected legs.
    pub fn leg_count(&self) -> usize {
        self.entry_count() / 2
    }
}

impl Traversal for KeyedGraph {
    type Node = City;
    type Edge = AdjacentLeg;

    fn nodes(&self) -> Vec<City> {
        self.cities().collect()
    }

    fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    fn contains(&self, node: City) -> bool {
        self.adjacency.contains_key(&node)
    }

    fn edges_from(&self, node: City) -> &[AdjacentLeg] {
        self.legs(node).unwrap_or(&[])
    }

    fn head(&self, edge: AdjacentLeg) -> City {
        edge.neighbor
    }

    fn tail(&self, edge: AdjacentLeg) -> City {
        edge.owner()
    }

    fn cost(&self, edge: AdjacentLeg) -> u32 {
        u32::from(edge.leg.cost)
    }

    fn edge_id(&self, edge: AdjacentLeg) -> EdgeId {
        edge.leg.id
    }

    fn city(&self, node: City) -> City {
        node
    }

    fn entry_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::fixtures;
    use anyhow::Result;
    use std::collections::HashMap;

    use City::*;

    #[test]
    fn every_city_is_a_key_and_degree_matches() -> Result<()> {
        let cities = fixtures::cities(&[Seattle, Portland, Vancouver, Calgary, Helena]);
        let edges = fixtures::edges(&[
            (Seattle, Portland, 1),
            (Vancouver, Seattle, 1),
            (Seattle, Calgary, 4),
            (Calgary, Vancouver, 3),
        ]);
        let g = KeyedGraph::build(&cities, &edges)?;

        let mut expected: HashMap<City, usize> = HashMap::new();
        for e in &edges {
            *expected.entry(e.city1).or_default() += 1;
            *expected.entry(e.city2).or_default() += 1;
        }
        for rec in &cities {
            assert!(g.contains(rec.city));
            assert_eq!(g.degree(rec.city), Some(expected.get(&rec.city).copied().unwrap_or(0)));
        }
        assert_eq!(g.degree(Helena), Some(0));
        assert_eq!(g.city_count(), 5);
        assert_eq!(g.leg_count(), 4);
        Ok(())
    }

    #[test]
    fn each_leg_listed_once_per_endpoint_with_resolved_neighbor() -> Result<()> {
        let cities = fixtures::cities(&[Seattle, Portland, Calgary]);
        let edges = fixtures::edges(&[(Portland, Seattle, 1), (Calgary, Seattle, 4)]);
        let g = KeyedGraph::build(&cities, &edges)?;

        for rec in &edges {
            let mut seen = 0;
            for city in [rec.city1, rec.city2] {
                let entries: Vec<&AdjacentLeg> = g
                    .legs(city)
                    .unwrap_or(&[])
                    .iter()
                    .filter(|e| e.leg.id == rec.id)
                    .collect();
                assert_eq!(entries.len(), 1);
                let entry = entries[0];
                assert!(entry.leg.low < entry.leg.high);
                assert_eq!(i64::from(entry.leg.cost), rec.cost);
                assert_eq!(entry.leg.color, rec.color);
                assert_eq!(entry.neighbor, entry.leg.other(city));
                assert_eq!(entry.owner(), city);
                seen += 1;
            }
            assert_eq!(seen, 2);
        }
        Ok(())
    }

    #[test]
    fn unknown_city_is_fatal() {
        let cities = fixtures::cities(&[Seattle, Portland]);
        let edges = fixtures::edges(&[(Seattle, Portland, 1), (Portland, Miami, 2)]);
        let err = KeyedGraph::build(&cities, &edges).unwrap_err();
        assert_eq!(err, GraphError::UnknownCity { edge: edges[1].id, city: Miami });
    }

    #[test]
    fn duplicate_city_is_fatal() {
        let cities = fixtures::cities(&[Seattle, Portland, Seattle]);
        let err = KeyedGraph::build(&cities, &[]).unwrap_err();
        assert_eq!(err, GraphError::DuplicateCity(Seattle));
    }

    #[test]
    fn out_of_range_cost_is_fatal() {
        let cities = fixtures::cities(&[Seattle, Portland]);
        let edges = fixtures::edges(&[(Seattle, Portland, 300)]);
        assert!(matches!(
            KeyedGraph::build(&cities, &edges),
            Err(GraphError::CostOutOfRange { cost: 300, .. })
        ));
    }

    #[test]
    fn degree_hint_does_not_cap_lists() -> Result<()> {
        let hub = Chicago;
        let spokes: Vec<City> = City::all().filter(|c| *c != hub).take(MAX_NODE_DEGREE + 5).collect();
        let mut list = spokes.clone();
        list.push(hub);
        let edges: Vec<EdgeRecord> = spokes.iter().map(|&s| fixtures::edge(hub, s, 2)).collect();
        let g = KeyedGraph::build(&fixtures::cities(&list), &edges)?;
        assert_eq!(g.degree(hub), Some(MAX_NODE_DEGREE + 5));
        Ok(())
    }
}
