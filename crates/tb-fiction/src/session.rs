//! Game session: owns the location graph and story state and runs each turn.

use tb_core::{CoreResult, LocationGraph, LocationId, StoryState};

use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult};
use crate::narrator::{self, Ending};
use crate::output::Line;
use crate::parser::{Action, parse_command, suggest_exit};
use crate::script;

/// Where a session stands between turns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Accepting commands.
    Playing,
    /// The next input line is the code for a locked door.
    AwaitingCode {
        /// The location the code unlocks.
        target: LocationId,
    },
    /// The player escaped.
    Won,
    /// The player was caught.
    Lost,
    /// The player left with `exit`.
    Quit,
}

impl SessionState {
    /// Whether the session has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Self::Won | Self::Lost | Self::Quit)
    }
}

/// The one location whose lock is opened by a code rather than an item.
const CODE_LOCKED: LocationId = LocationId::ControlRoom;

/// Moves that end the game when `triggered` holds.
struct Hazard {
    from: Option<LocationId>,
    to: LocationId,
    triggered: fn(&StoryState) -> bool,
    text: &'static str,
}

const HAZARDS: [Hazard; 3] = [
    Hazard {
        from: Some(LocationId::PurpleHallway),
        to: LocationId::GreenHallway,
        triggered: not_hidden,
        text: script::PATROL_AMBUSH,
    },
    Hazard {
        from: Some(LocationId::HangarBay),
        to: LocationId::Ship,
        triggered: crew_on_deck,
        text: script::HANGAR_DASH,
    },
    Hazard {
        from: None,
        to: LocationId::Barracks,
        triggered: always,
        text: script::BARRACKS_SWARM,
    },
];

fn not_hidden(s: &StoryState) -> bool {
    !s.has_hidden_in_purple_hallway
}

fn crew_on_deck(s: &StoryState) -> bool {
    !s.bomb_planted
}

fn always(_: &StoryState) -> bool {
    true
}

/// Scripted `use <item> on <target>` combinations.
struct Interaction {
    at: LocationId,
    item: &'static str,
    targets: &'static [&'static str],
    text: &'static str,
    effect: fn(&mut LocationGraph, &mut StoryState) -> CoreResult<()>,
}

const INTERACTIONS: [Interaction; 2] = [
    Interaction {
        at: LocationId::HoldingCell,
        item: "panel",
        targets: &["energy emitter", "emitter", "door"],
        text: script::EMITTER_SMASHED,
        effect: smash_emitter,
    },
    Interaction {
        at: LocationId::RedHallway,
        item: "bomb",
        targets: &["barracks", "barracks door", "barracks boor"],
        text: script::BOMB_DETONATED,
        effect: detonate_bomb,
    },
];

fn smash_emitter(graph: &mut LocationGraph, _story: &mut StoryState) -> CoreResult<()> {
    graph.unlock(LocationId::HoldingArea).map(|_| ())
}

fn detonate_bomb(_graph: &mut LocationGraph, story: &mut StoryState) -> CoreResult<()> {
    story.remove_item("bomb");
    story.bomb_planted = true;
    story.must_hide_now = true;
    Ok(())
}

/// An interactive fiction session.
#[derive(Debug)]
pub struct FictionSession {
    graph: LocationGraph,
    story: StoryState,
    state: SessionState,
}

impl FictionSession {
    /// Create a session over a complete location graph.
    ///
    /// Fails if the graph does not define every location or has an exit to
    /// nowhere.
    pub fn new(graph: LocationGraph, config: SessionConfig) -> FictionResult<Self> {
        graph.validate()?;
        let story = StoryState::new(config.start, config.control_room_code);
        Ok(Self {
            graph,
            story,
            state: SessionState::Playing,
        })
    }

    /// The location graph, including any doors unlocked so far.
    pub fn graph(&self) -> &LocationGraph {
        &self.graph
    }

    /// The story state.
    pub fn story(&self) -> &StoryState {
        &self.story
    }

    /// The session state.
    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Where the player is standing.
    pub fn current_location(&self) -> LocationId {
        self.story.current_location
    }

    /// Narrate the starting location.
    pub fn start(&mut self) -> FictionResult<Vec<Line>> {
        self.ensure_running()?;
        self.render_current()
    }

    /// Exits, items and inventory at the current location.
    pub fn surroundings(&self) -> FictionResult<Vec<String>> {
        let here = self.graph.location(self.story.current_location)?;
        Ok(narrator::surroundings(here, &self.story))
    }

    /// Process one line of player input.
    pub fn process(&mut self, input: &str) -> FictionResult<Vec<Line>> {
        self.ensure_running()?;
        if let SessionState::AwaitingCode { target } = self.state {
            return self.enter_code(target, input);
        }

        if input.trim().is_empty() {
            return Ok(vec![Line::feedback(script::EMPTY_INPUT)]);
        }
        let action = parse_command(input, self.story.current_location);
        self.execute(action)
    }

    /// Execute a parsed action.
    pub fn execute(&mut self, action: Action) -> FictionResult<Vec<Line>> {
        self.ensure_running()?;
        if matches!(self.state, SessionState::AwaitingCode { .. }) {
            return Err(FictionError::AwaitingCode);
        }

        tracing::debug!(?action, location = %self.story.current_location, "dispatching action");

        if self.story.must_hide_now && action != Action::Hide {
            return Ok(self.lose(script::SWEEP_AMBUSH));
        }

        match action {
            Action::Move { target } => self.do_move(&target),
            Action::Take { item } => self.do_take(&item),
            Action::Use { item, target } => self.do_use(&item, target.as_deref()),
            Action::Hide => Ok(self.do_hide()),
            Action::OpenHangarDoors => {
                self.story.hangar_doors_open = true;
                tracing::info!("hangar bay doors opened");
                Ok(vec![Line::narration(script::DOORS_OPENED)])
            }
            Action::Quit => {
                self.finish(SessionState::Quit);
                Ok(Vec::new())
            }
            Action::Unrecognized { .. } => Ok(vec![Line::feedback(script::HELP)]),
        }
    }

    fn ensure_running(&self) -> FictionResult<()> {
        if self.state.is_over() {
            Err(FictionError::SessionOver(self.state))
        } else {
            Ok(())
        }
    }

    fn do_move(&mut self, target: &str) -> FictionResult<Vec<Line>> {
        let from = self.story.current_location;
        let here = self.graph.location(from)?;

        let Some((_, destination)) = here.exit(target) else {
            let mut text = format!("You can't move to '{target}'.");
            if let Some(exit) = suggest_exit(here, target) {
                text.push_str(&format!(" Did you mean '{exit}'?"));
            }
            return Ok(vec![Line::feedback(text)]);
        };

        let hazard = HAZARDS.iter().find(|h| {
            h.to == destination
                && h.from.is_none_or(|f| f == from)
                && (h.triggered)(&self.story)
        });
        if let Some(hazard) = hazard {
            tracing::debug!(%from, to = %destination, "move triggered a hazard");
            return Ok(self.lose(hazard.text));
        }

        if self.graph.is_locked(destination) {
            if destination == CODE_LOCKED {
                self.state = SessionState::AwaitingCode {
                    target: destination,
                };
                return Ok(vec![Line::feedback(script::CODE_PROMPT)]);
            }
            return Ok(vec![Line::feedback(script::LOCKED)]);
        }

        tracing::info!(%from, to = %destination, "player moved");
        self.story.current_location = destination;
        self.render_current()
    }

    fn enter_code(&mut self, target: LocationId, code: &str) -> FictionResult<Vec<Line>> {
        self.state = SessionState::Playing;
        if !self.story.code_matches(code) {
            tracing::debug!(%target, "wrong door code");
            return Ok(vec![Line::feedback(script::WRONG_CODE)]);
        }

        self.graph.unlock(target)?;
        tracing::info!(from = %self.story.current_location, to = %target, "door unlocked by code");
        self.story.current_location = target;

        let mut lines = vec![Line::narration(script::CODE_ACCEPTED)];
        lines.extend(self.render_current()?);
        Ok(lines)
    }

    fn do_take(&mut self, item: &str) -> FictionResult<Vec<Line>> {
        let here = self.graph.location_mut(self.story.current_location)?;
        if !here.remove_item(item) {
            return Ok(vec![Line::feedback(format!("There is no '{item}' here."))]);
        }

        let item = item.to_lowercase();
        self.story.add_item(&item);
        if item == "bomb" {
            self.story.bomb_taken = true;
        }
        tracing::debug!(%item, "item taken");

        let line = match script::take_text(&item) {
            Some(text) => Line::narration(text),
            None => Line::feedback(format!("You take the {item}.")),
        };
        Ok(vec![line])
    }

    fn do_use(&mut self, item: &str, target: Option<&str>) -> FictionResult<Vec<Line>> {
        let Some(target) = target else {
            return Ok(vec![Line::feedback(script::USE_NEEDS_TARGET)]);
        };
        let item = item.to_lowercase();
        let target = target.to_lowercase();
        if !self.story.has_item(&item) {
            return Ok(vec![Line::feedback(format!(
                "You don't have a '{item}' to use."
            ))]);
        }

        let at = self.story.current_location;
        let interaction = INTERACTIONS
            .iter()
            .find(|i| i.at == at && i.item == item && i.targets.contains(&target.as_str()));
        let Some(interaction) = interaction else {
            return Ok(vec![Line::feedback(script::NO_EFFECT)]);
        };

        (interaction.effect)(&mut self.graph, &mut self.story)?;
        tracing::info!(%item, %target, location = %at, "scripted interaction");
        Ok(vec![Line::narration(interaction.text)])
    }

    fn do_hide(&mut self) -> Vec<Line> {
        if self.story.current_location == LocationId::PurpleHallway {
            self.story.has_hidden_in_purple_hallway = true;
            return vec![Line::narration(script::HIDE_FROM_PATROL)];
        }
        if self.story.must_hide_now {
            self.story.must_hide_now = false;
            return vec![Line::narration(script::HIDE_FROM_SWEEP)];
        }
        vec![Line::feedback(script::NO_DANGER)]
    }

    /// Narrate the current location, applying any ending it triggers.
    fn render_current(&mut self) -> FictionResult<Vec<Line>> {
        let here = self.graph.location(self.story.current_location)?;
        let narration = narrator::narrate(here, &self.story);

        let mut lines: Vec<Line> = narration
            .passages
            .into_iter()
            .map(Line::narration)
            .collect();
        match narration.ending {
            Some(Ending::Won) => {
                lines.push(Line::victory(script::VICTORY_BANNER));
                self.finish(SessionState::Won);
            }
            Some(Ending::Lost) => {
                lines.push(Line::defeat(script::GAME_OVER));
                self.finish(SessionState::Lost);
            }
            None => {}
        }
        Ok(lines)
    }

    fn lose(&mut self, text: &str) -> Vec<Line> {
        self.finish(SessionState::Lost);
        vec![Line::narration(text), Line::defeat(script::GAME_OVER)]
    }

    fn finish(&mut self, state: SessionState) {
        tracing::info!(?state, location = %self.story.current_location, "session ended");
        self.state = state;
    }
}
