use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, CoreResult};
use crate::location::{Location, LocationId};

/// The ship's navigation graph. Owns every location.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocationGraph {
    locations: BTreeMap<LocationId, Location>,
}

impl LocationGraph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a location. Fails if a location with the same identifier exists.
    pub fn insert(&mut self, location: Location) -> CoreResult<()> {
        if self.locations.contains_key(&location.id) {
            return Err(CoreError::DuplicateLocation(location.id));
        }
        self.locations.insert(location.id, location);
        Ok(())
    }

    /// Get a location by identifier.
    pub fn get(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(&id)
    }

    /// Get a mutable location by identifier.
    pub fn get_mut(&mut self, id: LocationId) -> Option<&mut Location> {
        self.locations.get_mut(&id)
    }

    /// Get a location, failing if it is not defined.
    pub fn location(&self, id: LocationId) -> CoreResult<&Location> {
        self.get(id).ok_or(CoreError::MissingLocation(id))
    }

    /// Get a mutable location, failing if it is not defined.
    pub fn location_mut(&mut self, id: LocationId) -> CoreResult<&mut Location> {
        self.get_mut(id).ok_or(CoreError::MissingLocation(id))
    }

    /// Iterate over all locations in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.locations.values()
    }

    /// Number of locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    /// Whether the graph has no locations.
    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    /// Total number of exits across all locations.
    pub fn connection_count(&self) -> usize {
        self.locations.values().map(|l| l.connections.len()).sum()
    }

    /// Whether the location exists and is locked.
    pub fn is_locked(&self, id: LocationId) -> bool {
        self.get(id).is_some_and(|l| l.locked)
    }

    /// Unlock a location. Returns `true` if it was locked before.
    pub fn unlock(&mut self, id: LocationId) -> CoreResult<bool> {
        let location = self.location_mut(id)?;
        let was_locked = location.locked;
        location.locked = false;
        Ok(was_locked)
    }

    /// Collect every integrity problem: missing locations and dangling exits.
    pub fn problems(&self) -> Vec<CoreError> {
        let mut problems: Vec<CoreError> = LocationId::ALL
            .into_iter()
            .filter(|id| !self.locations.contains_key(id))
            .map(CoreError::MissingLocation)
            .collect();

        for location in self.locations.values() {
            for (exit, target) in &location.connections {
                if !self.locations.contains_key(target) {
                    problems.push(CoreError::DanglingConnection {
                        from: location.id,
                        exit: exit.clone(),
                        target: *target,
                    });
                }
            }
        }

        problems
    }

    /// Check that every location is defined and every exit resolves.
    pub fn validate(&self) -> CoreResult<()> {
        match self.problems().into_iter().next() {
            Some(problem) => Err(problem),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn complete_graph() -> LocationGraph {
        let mut graph = LocationGraph::new();
        for (i, id) in LocationId::ALL.into_iter().enumerate() {
            let next = LocationId::ALL[(i + 1) % LocationId::ALL.len()];
            graph
                .insert(Location::new(id).with_exit(next))
                .unwrap();
        }
        graph
    }

    #[test]
    fn duplicate_insert_fails() {
        let mut graph = LocationGraph::new();
        graph.insert(Location::new(LocationId::Ship)).unwrap();
        let err = graph.insert(Location::new(LocationId::Ship)).unwrap_err();
        assert_eq!(err, CoreError::DuplicateLocation(LocationId::Ship));
    }

    #[test]
    fn complete_graph_validates() {
        let graph = complete_graph();
        assert_eq!(graph.len(), 13);
        assert_eq!(graph.connection_count(), 13);
        assert!(graph.validate().is_ok());
    }

    #[test]
    fn missing_location_reported() {
        let mut graph = LocationGraph::new();
        graph
            .insert(Location::new(LocationId::HangarBay).with_exit(LocationId::Ship))
            .unwrap();

        let problems = graph.problems();
        assert!(problems.contains(&CoreError::MissingLocation(LocationId::Ship)));
        assert!(problems.contains(&CoreError::DanglingConnection {
            from: LocationId::HangarBay,
            exit: "ship".to_string(),
            target: LocationId::Ship,
        }));
        assert!(graph.validate().is_err());
    }

    #[test]
    fn unlock_is_idempotent() {
        let mut graph = LocationGraph::new();
        graph
            .insert(Location::new(LocationId::ControlRoom).locked())
            .unwrap();

        assert!(graph.is_locked(LocationId::ControlRoom));
        assert!(graph.unlock(LocationId::ControlRoom).unwrap());
        assert!(!graph.unlock(LocationId::ControlRoom).unwrap());
        assert!(!graph.is_locked(LocationId::ControlRoom));
    }

    #[test]
    fn unlock_missing_location_fails() {
        let mut graph = LocationGraph::new();
        assert_eq!(
            graph.unlock(LocationId::Armory),
            Err(CoreError::MissingLocation(LocationId::Armory))
        );
    }

    proptest! {
        #[test]
        fn every_exit_of_a_valid_graph_resolves(seed in 0usize..13) {
            let mut graph = complete_graph();
            let from = LocationId::ALL[seed];
            let to = LocationId::ALL[(seed + 5) % 13];
            graph.get_mut(from).unwrap().connect(to.name(), to);

            prop_assert!(graph.validate().is_ok());
            for location in graph.iter() {
                for target in location.connections.values() {
                    prop_assert!(graph.get(*target).is_some());
                }
            }
        }
    }
}
