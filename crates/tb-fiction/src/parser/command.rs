//! Command parsing for player input.

use tb_core::LocationId;

/// A canonical player action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Walk through a named exit.
    Move {
        /// The exit name as typed.
        target: String,
    },
    /// Pick up an item.
    Take {
        /// The item name.
        item: String,
    },
    /// Use a held item on something.
    Use {
        /// The item name.
        item: String,
        /// What to use it on. `None` when the input lacked ` on `.
        target: Option<String>,
    },
    /// Hide where you stand.
    Hide,
    /// Leave the game.
    Quit,
    /// Work the hangar door controls. Only produced in the Control Room.
    OpenHangarDoors,
    /// Anything else.
    Unrecognized {
        /// The normalized input.
        input: String,
    },
}

/// Full inputs that open the hangar bay doors while in the Control Room.
pub const DOOR_PHRASES: &[&str] = &[
    "open hangar bay doors",
    "open doors",
    "open bay doors",
    "use control slider",
];

/// Verb synonyms for command parsing.
const MOVE_VERBS: &[&str] = &["move", "go"];
const TAKE_VERBS: &[&str] = &["take", "grab", "pick"];
const USE_VERBS: &[&str] = &["use", "plant", "place", "put"];
const HIDE_VERBS: &[&str] = &["hide"];
const QUIT_VERBS: &[&str] = &["exit"];

/// Parse a line of input into an action.
///
/// Input is trimmed and lower-cased, then split at the first whitespace into
/// a verb and an optional argument. `location` decides whether the door
/// phrases are recognized; they take priority over verb routing.
///
/// `hide` ignores any argument, so `hide behind the crates` is still
/// [`Action::Hide`] and clears a pending sweep like a bare `hide`.
pub fn parse_command(input: &str, location: LocationId) -> Action {
    let input = input.trim().to_lowercase();

    if location == LocationId::ControlRoom && DOOR_PHRASES.contains(&input.as_str()) {
        return Action::OpenHangarDoors;
    }

    let (verb, argument) = match input.split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, Some(rest.trim()).filter(|r| !r.is_empty())),
        None => (input.as_str(), None),
    };

    if HIDE_VERBS.contains(&verb) {
        return Action::Hide;
    }
    if QUIT_VERBS.contains(&verb) {
        return Action::Quit;
    }

    let action = match argument {
        Some(arg) if MOVE_VERBS.contains(&verb) => Some(parse_move(arg)),
        Some(arg) if TAKE_VERBS.contains(&verb) => parse_take(arg),
        Some(arg) if USE_VERBS.contains(&verb) => Some(parse_use(arg)),
        _ => None,
    };
    action.unwrap_or(Action::Unrecognized { input })
}

fn parse_move(arg: &str) -> Action {
    let target = arg.strip_prefix("to ").map(str::trim).unwrap_or(arg);
    Action::Move {
        target: target.to_string(),
    }
}

/// `None` when only `up` is left, as in a bare `pick up`.
fn parse_take(arg: &str) -> Option<Action> {
    // "pick up the bag"
    let item = arg.strip_prefix("up ").map(str::trim).unwrap_or(arg);
    if item == "up" {
        return None;
    }
    Some(Action::Take {
        item: item.to_string(),
    })
}

fn parse_use(arg: &str) -> Action {
    match arg.split_once(" on ") {
        Some((item, target)) => Action::Use {
            item: item.trim().to_string(),
            target: Some(target.trim().to_string()),
        },
        None => Action::Use {
            item: arg.to_string(),
            target: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const CELL: LocationId = LocationId::HoldingCell;

    fn parse(input: &str) -> Action {
        parse_command(input, CELL)
    }

    #[test]
    fn parse_move_verbs() {
        let expected = Action::Move {
            target: "holding area".to_string(),
        };
        assert_eq!(parse("move to holding area"), expected);
        assert_eq!(parse("go holding area"), expected);
        assert_eq!(parse("  GO TO Holding Area  "), expected);
    }

    #[test]
    fn parse_take_verbs() {
        let expected = Action::Take {
            item: "panel".to_string(),
        };
        assert_eq!(parse("take panel"), expected);
        assert_eq!(parse("grab Panel"), expected);
        assert_eq!(parse("pick up panel"), expected);
    }

    #[test]
    fn parse_use_with_target() {
        let expected = Action::Use {
            item: "bomb".to_string(),
            target: Some("barracks".to_string()),
        };
        assert_eq!(parse("use bomb on barracks"), expected);
        assert_eq!(parse("plant bomb on barracks"), expected);
        assert_eq!(parse("place bomb on barracks"), expected);
        assert_eq!(parse("put bomb on barracks"), expected);
    }

    #[test]
    fn parse_use_without_target() {
        assert_eq!(
            parse("use panel"),
            Action::Use {
                item: "panel".to_string(),
                target: None
            }
        );
    }

    #[test]
    fn parse_hide_and_exit() {
        assert_eq!(parse("hide"), Action::Hide);
        assert_eq!(parse("HIDE"), Action::Hide);
        assert_eq!(parse("exit"), Action::Quit);
        assert_eq!(parse("hide behind the crates"), Action::Hide);
    }

    #[test]
    fn verbs_without_argument_are_unrecognized() {
        assert_eq!(
            parse("go"),
            Action::Unrecognized {
                input: "go".to_string()
            }
        );
        assert_eq!(
            parse("take   "),
            Action::Unrecognized {
                input: "take".to_string()
            }
        );
        assert_eq!(
            parse("pick up"),
            Action::Unrecognized {
                input: "pick up".to_string()
            }
        );
    }

    #[test]
    fn door_phrases_only_in_control_room() {
        for phrase in DOOR_PHRASES {
            assert_eq!(
                parse_command(phrase, LocationId::ControlRoom),
                Action::OpenHangarDoors
            );
        }
        assert_eq!(
            parse_command("open doors", LocationId::HangarBay),
            Action::Unrecognized {
                input: "open doors".to_string()
            }
        );
        assert_eq!(
            parse_command("use control slider", LocationId::HangarBay),
            Action::Use {
                item: "control slider".to_string(),
                target: None
            }
        );
    }

    #[test]
    fn parse_unknown() {
        assert_eq!(
            parse("dance wildly"),
            Action::Unrecognized {
                input: "dance wildly".to_string()
            }
        );
    }

    proptest! {
        #[test]
        fn case_and_padding_do_not_matter(
            input in "(move|go|take|grab|pick|use|hide|exit|dance) [a-z ]{0,12}",
            pad in " {0,3}",
        ) {
            let noisy = format!("{pad}{}{pad}", input.to_uppercase());
            prop_assert_eq!(parse(&noisy), parse(&input));
        }
    }
}
