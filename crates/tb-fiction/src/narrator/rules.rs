//! Ordered rules that pick a location's narration from the story state.

use tb_core::{Location, LocationId, StoryState};

use crate::script;

/// How a narration ends the game, if it does.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ending {
    /// The player escaped.
    Won,
    /// The player was caught.
    Lost,
}

/// What to show on entering a location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Narration {
    /// Text to display, in order.
    pub passages: Vec<String>,
    /// Set when arriving here ends the game.
    pub ending: Option<Ending>,
}

/// What a matching rule shows.
#[derive(Debug, Clone, Copy)]
enum Render {
    Alternate,
    AlternateWith(&'static str),
    AlternateThenLose,
    DefaultThenWin,
}

struct Rule {
    at: LocationId,
    holds: fn(&StoryState) -> bool,
    render: Render,
}

fn has_panel(s: &StoryState) -> bool {
    s.has_item("panel")
}

fn has_bag(s: &StoryState) -> bool {
    s.has_item("bag")
}

fn hid_from_patrol(s: &StoryState) -> bool {
    s.has_hidden_in_purple_hallway
}

fn bomb_taken(s: &StoryState) -> bool {
    s.bomb_taken
}

fn doors_open(s: &StoryState) -> bool {
    s.hangar_doors_open
}

fn bomb_planted(s: &StoryState) -> bool {
    s.bomb_planted
}

fn bay_cleared_and_open(s: &StoryState) -> bool {
    s.bomb_planted && s.hangar_doors_open
}

fn bay_open_but_crewed(s: &StoryState) -> bool {
    s.hangar_doors_open && !s.bomb_planted
}

fn aboard_with_doors_shut(s: &StoryState) -> bool {
    s.bomb_planted && !s.hangar_doors_open
}

fn aboard_without_keys(s: &StoryState) -> bool {
    !s.has_item("bag") && !s.hangar_doors_open
}

fn ready_to_launch(s: &StoryState) -> bool {
    s.has_item("bag") && s.hangar_doors_open
}

/// First match wins. Every rule also needs a non-empty alternate description.
const RULES: [Rule; 11] = [
    Rule { at: LocationId::HoldingCell, holds: has_panel, render: Render::Alternate },
    Rule { at: LocationId::HoldingArea, holds: has_bag, render: Render::Alternate },
    Rule { at: LocationId::PurpleHallway, holds: hid_from_patrol, render: Render::Alternate },
    Rule { at: LocationId::Armory, holds: bomb_taken, render: Render::Alternate },
    Rule { at: LocationId::ControlRoom, holds: doors_open, render: Render::Alternate },
    Rule { at: LocationId::RedHallway, holds: bomb_planted, render: Render::Alternate },
    Rule { at: LocationId::HangarBay, holds: bay_cleared_and_open, render: Render::Alternate },
    Rule {
        at: LocationId::HangarBay,
        holds: bay_open_but_crewed,
        render: Render::AlternateWith(script::MARTIANS_REMAIN),
    },
    Rule {
        at: LocationId::Ship,
        holds: aboard_with_doors_shut,
        render: Render::AlternateWith(script::DOORS_CLOSED),
    },
    Rule { at: LocationId::Ship, holds: aboard_without_keys, render: Render::AlternateThenLose },
    Rule { at: LocationId::Ship, holds: ready_to_launch, render: Render::DefaultThenWin },
];

/// Pick the narration for `location` given the story so far.
pub fn narrate(location: &Location, story: &StoryState) -> Narration {
    let matched = location.alternate().and_then(|alternate| {
        RULES
            .iter()
            .find(|rule| rule.at == location.id && (rule.holds)(story))
            .map(|rule| (rule.render, alternate))
    });

    let Some((render, alternate)) = matched else {
        return Narration {
            passages: vec![location.default_description.clone()],
            ending: None,
        };
    };

    let (passages, ending) = match render {
        Render::Alternate => (vec![alternate.to_string()], None),
        Render::AlternateWith(suffix) => (vec![format!("{alternate}{suffix}")], None),
        Render::AlternateThenLose => (vec![alternate.to_string()], Some(Ending::Lost)),
        Render::DefaultThenWin => (
            vec![
                location.default_description.clone(),
                script::VICTORY.to_string(),
            ],
            Some(Ending::Won),
        ),
    };
    Narration { passages, ending }
}

/// Exits, visible items, and inventory, one line each. Empty parts are skipped.
pub fn surroundings(location: &Location, story: &StoryState) -> Vec<String> {
    let mut lines = Vec::new();

    if !location.connections.is_empty() {
        let exits: Vec<&str> = location.connections.keys().map(String::as_str).collect();
        lines.push(format!("Exits: {}", exits.join(", ")));
    }
    if !location.items.is_empty() {
        let items: Vec<&str> = location.items.iter().map(String::as_str).collect();
        lines.push(format!("You see: {}", items.join(", ")));
    }
    if !story.inventory.is_empty() {
        let held: Vec<&str> = story.inventory.iter().map(String::as_str).collect();
        lines.push(format!("You carry: {}", held.join(", ")));
    }

    lines
}
