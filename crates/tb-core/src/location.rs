use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier for every location aboard the ship.
///
/// The set is closed: location definitions may only describe these places.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum LocationId {
    /// Where the player wakes up, behind an energy barrier.
    HoldingCell,
    /// Outside the cells; the player's bag is stored here.
    HoldingArea,
    /// Hallway where a patrol passes.
    PurpleHallway,
    /// Side hallway leading to storage.
    OrangeHallway,
    /// Hallway outside the barracks.
    RedHallway,
    /// The Martians' den.
    Barracks,
    /// Weapons storage; holds the bomb.
    Armory,
    /// Hallway beyond the patrol route.
    GreenHallway,
    /// Hallway connecting the forward and aft sections.
    YellowHallway,
    /// Controls for the hangar bay doors.
    ControlRoom,
    /// Cluttered storage room.
    StorageRoom,
    /// Where the player's ship is docked.
    HangarBay,
    /// The player's own ship.
    Ship,
}

impl LocationId {
    /// Every location identifier, in declaration order.
    pub const ALL: [LocationId; 13] = [
        LocationId::HoldingCell,
        LocationId::HoldingArea,
        LocationId::PurpleHallway,
        LocationId::OrangeHallway,
        LocationId::RedHallway,
        LocationId::Barracks,
        LocationId::Armory,
        LocationId::GreenHallway,
        LocationId::YellowHallway,
        LocationId::ControlRoom,
        LocationId::StorageRoom,
        LocationId::HangarBay,
        LocationId::Ship,
    ];

    /// The display name, e.g. `"Holding Cell"`.
    pub fn name(&self) -> &'static str {
        match self {
            Self::HoldingCell => "Holding Cell",
            Self::HoldingArea => "Holding Area",
            Self::PurpleHallway => "Purple Hallway",
            Self::OrangeHallway => "Orange Hallway",
            Self::RedHallway => "Red Hallway",
            Self::Barracks => "Barracks",
            Self::Armory => "Armory",
            Self::GreenHallway => "Green Hallway",
            Self::YellowHallway => "Yellow Hallway",
            Self::ControlRoom => "Control Room",
            Self::StorageRoom => "Storage Room",
            Self::HangarBay => "Hangar Bay",
            Self::Ship => "Ship",
        }
    }

    /// Resolve a written name to an identifier.
    ///
    /// Whitespace is ignored and case does not matter, so `"holding cell"`,
    /// `"HoldingCell"` and `"Holding  Cell"` all resolve to [`Self::HoldingCell`].
    pub fn parse(name: &str) -> Option<Self> {
        let wanted = normalize_exit(name);
        if wanted.is_empty() {
            return None;
        }
        Self::ALL
            .into_iter()
            .find(|id| normalize_exit(id.name()) == wanted)
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Normalize an exit name for comparison: lower-case with all whitespace removed.
pub fn normalize_exit(name: &str) -> String {
    name.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// A node in the ship's navigation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Unique identifier.
    pub id: LocationId,
    /// Display name as written in the definition.
    pub name: String,
    /// Text shown when no special condition holds.
    pub default_description: String,
    /// Text shown under a location-specific condition. Empty means none.
    pub alternate_description: String,
    /// Lower-cased exit name to target location.
    pub connections: BTreeMap<String, LocationId>,
    /// Lower-cased names of the items lying here.
    pub items: BTreeSet<String>,
    /// Whether movement into this location is refused.
    pub locked: bool,
}

impl Location {
    /// Create an empty, unlocked location named after its identifier.
    pub fn new(id: LocationId) -> Self {
        Self {
            id,
            name: id.name().to_string(),
            default_description: String::new(),
            alternate_description: String::new(),
            connections: BTreeMap::new(),
            items: BTreeSet::new(),
            locked: false,
        }
    }

    /// Set the default description.
    pub fn with_description(mut self, text: impl Into<String>) -> Self {
        self.default_description = text.into();
        self
    }

    /// Set the alternate description.
    pub fn with_alternate(mut self, text: impl Into<String>) -> Self {
        self.alternate_description = text.into();
        self
    }

    /// Add an exit named after the target location.
    pub fn with_exit(mut self, target: LocationId) -> Self {
        self.connect(target.name(), target);
        self
    }

    /// Add an item.
    pub fn with_item(mut self, item: &str) -> Self {
        self.items.insert(item.to_lowercase());
        self
    }

    /// Mark the location as locked.
    pub fn locked(mut self) -> Self {
        self.locked = true;
        self
    }

    /// Add an exit. Returns the previous target if the exit name was already taken.
    pub fn connect(&mut self, exit: &str, target: LocationId) -> Option<LocationId> {
        self.connections.insert(exit.trim().to_lowercase(), target)
    }

    /// The alternate description, if one is set.
    pub fn alternate(&self) -> Option<&str> {
        let text = self.alternate_description.trim();
        if text.is_empty() { None } else { Some(text) }
    }

    /// Find the exit matching `wanted`, ignoring case and whitespace.
    ///
    /// Returns the exit name as stored and its target.
    pub fn exit(&self, wanted: &str) -> Option<(&str, LocationId)> {
        let wanted = normalize_exit(wanted);
        self.connections
            .iter()
            .find(|(name, _)| normalize_exit(name) == wanted)
            .map(|(name, target)| (name.as_str(), *target))
    }

    /// Check whether an item lies here (case-insensitive).
    pub fn has_item(&self, item: &str) -> bool {
        self.items.contains(&item.to_lowercase())
    }

    /// Remove an item. Returns `false` if it was not here.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.items.remove(&item.to_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn parse_ignores_case_and_spaces() {
        assert_eq!(LocationId::parse("Holding Cell"), Some(LocationId::HoldingCell));
        assert_eq!(LocationId::parse("holdingcell"), Some(LocationId::HoldingCell));
        assert_eq!(LocationId::parse("  HANGAR   bay "), Some(LocationId::HangarBay));
        assert_eq!(LocationId::parse("Moon Base"), None);
        assert_eq!(LocationId::parse("   "), None);
    }

    #[test]
    fn names_round_trip() {
        for id in LocationId::ALL {
            assert_eq!(LocationId::parse(id.name()), Some(id));
            assert_eq!(id.to_string(), id.name());
        }
    }

    #[test]
    fn exit_lookup_is_space_insensitive() {
        let loc = Location::new(LocationId::PurpleHallway)
            .with_exit(LocationId::GreenHallway)
            .with_exit(LocationId::HoldingArea);

        assert_eq!(
            loc.exit("greenhallway"),
            Some(("green hallway", LocationId::GreenHallway))
        );
        assert_eq!(
            loc.exit("Green Hallway"),
            Some(("green hallway", LocationId::GreenHallway))
        );
        assert_eq!(loc.exit("red hallway"), None);
    }

    #[test]
    fn alternate_blank_means_none() {
        let loc = Location::new(LocationId::Armory).with_alternate("   ");
        assert_eq!(loc.alternate(), None);

        let loc = loc.with_alternate("The rack is empty.");
        assert_eq!(loc.alternate(), Some("The rack is empty."));
    }

    #[test]
    fn items_are_case_insensitive() {
        let mut loc = Location::new(LocationId::Armory).with_item("Bomb");
        assert!(loc.has_item("BOMB"));
        assert!(loc.remove_item("bomb"));
        assert!(!loc.remove_item("bomb"));
        assert!(loc.items.is_empty());
    }

    #[test]
    fn connect_reports_overwritten_exit() {
        let mut loc = Location::new(LocationId::HangarBay);
        assert_eq!(loc.connect("Ship", LocationId::Ship), None);
        assert_eq!(
            loc.connect("ship", LocationId::ControlRoom),
            Some(LocationId::Ship)
        );
    }

    #[test]
    fn location_serializes_to_json() {
        let loc = Location::new(LocationId::Ship).with_exit(LocationId::HangarBay);
        let json = serde_json::to_value(&loc).unwrap();
        assert_eq!(json["id"], "Ship");
        assert_eq!(json["connections"]["hangar bay"], "HangarBay");
    }

    proptest! {
        #[test]
        fn normalize_is_idempotent(s in "[ a-zA-Z]{0,24}") {
            let once = normalize_exit(&s);
            prop_assert_eq!(normalize_exit(&once), once.clone());
            prop_assert!(!once.contains(' '));
        }

        #[test]
        fn padding_does_not_change_resolution(idx in 0usize..13, pad in " {0,3}") {
            let id = LocationId::ALL[idx];
            let written = format!("{pad}{}{pad}", id.name().to_uppercase());
            prop_assert_eq!(LocationId::parse(&written), Some(id));
        }
    }
}
