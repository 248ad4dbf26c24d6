use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::location::LocationId;

/// The player's narrative progress for one session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoryState {
    /// Where the player stands. Changes only on a successful move.
    pub current_location: LocationId,
    /// Lower-cased names of the items the player holds.
    pub inventory: BTreeSet<String>,
    /// The player hid from the patrol in the Purple Hallway.
    pub has_hidden_in_purple_hallway: bool,
    /// The bomb went off at the barracks door.
    pub bomb_planted: bool,
    /// The bomb was picked up in the armory.
    pub bomb_taken: bool,
    /// The bomb just went off; anything but hiding is fatal.
    pub must_hide_now: bool,
    /// The hangar bay doors stand open.
    pub hangar_doors_open: bool,
    /// Code that opens the Control Room.
    pub control_room_code: String,
}

impl StoryState {
    /// Start a new story at `start`.
    pub fn new(start: LocationId, control_room_code: impl Into<String>) -> Self {
        Self {
            current_location: start,
            inventory: BTreeSet::new(),
            has_hidden_in_purple_hallway: false,
            bomb_planted: false,
            bomb_taken: false,
            must_hide_now: false,
            hangar_doors_open: false,
            control_room_code: control_room_code.into(),
        }
    }

    /// Check if the player holds an item (case-insensitive).
    pub fn has_item(&self, item: &str) -> bool {
        self.inventory.contains(&item.to_lowercase())
    }

    /// Add an item. Returns `false` if it was already held.
    pub fn add_item(&mut self, item: &str) -> bool {
        self.inventory.insert(item.to_lowercase())
    }

    /// Remove an item. Returns `false` if it was not held.
    pub fn remove_item(&mut self, item: &str) -> bool {
        self.inventory.remove(&item.to_lowercase())
    }

    /// Whether `code` opens the Control Room. Surrounding whitespace is ignored.
    pub fn code_matches(&self, code: &str) -> bool {
        code.trim() == self.control_room_code
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_story_is_blank() {
        let story = StoryState::new(LocationId::HoldingCell, "1986");
        assert_eq!(story.current_location, LocationId::HoldingCell);
        assert!(story.inventory.is_empty());
        assert!(!story.has_hidden_in_purple_hallway);
        assert!(!story.bomb_planted);
        assert!(!story.bomb_taken);
        assert!(!story.must_hide_now);
        assert!(!story.hangar_doors_open);
    }

    #[test]
    fn inventory_management() {
        let mut story = StoryState::new(LocationId::HoldingCell, "1986");

        assert!(!story.has_item("panel"));
        assert!(story.add_item("Panel"));
        assert!(story.has_item("PANEL"));

        // Adding again should not duplicate
        assert!(!story.add_item("panel"));
        assert_eq!(story.inventory.len(), 1);

        assert!(story.remove_item("panel"));
        assert!(!story.remove_item("panel"));
    }

    #[test]
    fn code_check_trims() {
        let story = StoryState::new(LocationId::HangarBay, "1986");
        assert!(story.code_matches(" 1986 "));
        assert!(!story.code_matches("1987"));
        assert!(!story.code_matches(""));
    }
}
