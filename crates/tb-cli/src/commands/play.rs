//! The interactive game loop.

use std::io::{self, BufRead, IsTerminal, Write};
use std::path::PathBuf;
use std::time::Duration;

use clap::Args;
use tb_fiction::{FictionSession, Line, SessionConfig, SessionState, script};

use crate::display::{DEFAULT_DELAY_US, DEFAULT_WIDTH, Display, DisplayConfig};
use crate::error::CliError;

/// Options for a play session.
#[derive(Debug, Clone, Args)]
pub struct PlayArgs {
    /// Location definition file (default: the built-in ship)
    #[arg(short, long)]
    pub locations: Option<PathBuf>,

    /// Print text at once instead of typing it out
    #[arg(long)]
    pub fast: bool,

    /// Wrap text at this column (0 disables wrapping)
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: usize,

    /// Microseconds to pause after each narrated character
    #[arg(long = "delay-us", default_value_t = DEFAULT_DELAY_US)]
    pub delay_us: u64,

    /// Skip the opening story and the press-Enter pause
    #[arg(long)]
    pub no_intro: bool,

    /// List exits, items and inventory after each location
    #[arg(long)]
    pub show_exits: bool,

    /// Disable coloured output
    #[arg(long)]
    pub no_color: bool,
}

impl PlayArgs {
    fn display_config(&self) -> DisplayConfig {
        let delay = if self.fast { 0 } else { self.delay_us };
        DisplayConfig::default()
            .with_width(self.width)
            .with_delay(Duration::from_micros(delay))
            .with_color(!self.no_color && io::stdout().is_terminal())
    }
}

/// Loop behaviour that is not about rendering.
#[derive(Debug, Clone, Copy)]
pub struct LoopOptions {
    /// Show the intro and wait for Enter before starting.
    pub intro: bool,
    /// List surroundings after each location render.
    pub show_exits: bool,
}

pub fn run(args: &PlayArgs) -> Result<(), CliError> {
    let graph = super::load_graph(args.locations.as_deref())?;
    let session = FictionSession::new(graph, SessionConfig::default())?;

    let options = LoopOptions {
        intro: !args.no_intro,
        show_exits: args.show_exits,
    };
    let stdin = io::stdin();
    let stdout = io::stdout();
    let display = Display::new(stdout.lock(), args.display_config());

    play(session, stdin.lock(), display, options)?;
    Ok(())
}

/// Run a session to completion or until input runs out.
pub fn play<R: BufRead, W: Write>(
    mut session: FictionSession,
    mut input: R,
    mut display: Display<W>,
    options: LoopOptions,
) -> Result<SessionState, CliError> {
    if options.intro {
        display.line(&Line::narration(script::INTRO))?;
        display.prompt("\nPress Enter to begin...")?;
        let mut pause = String::new();
        input.read_line(&mut pause)?;
        display.newline()?;
    }

    let opening = session.start()?;
    display.lines(&opening)?;
    if options.show_exits && !session.state().is_over() {
        display.notes(&session.surroundings()?)?;
    }

    let mut buf = String::new();
    while !session.state().is_over() {
        let prompt = match session.state() {
            SessionState::AwaitingCode { .. } => "Enter code: ",
            _ => "\n> ",
        };
        display.prompt(prompt)?;

        buf.clear();
        if input.read_line(&mut buf)? == 0 {
            display.newline()?;
            break;
        }

        let before = session.current_location();
        let lines = session.process(buf.trim_end_matches(['\r', '\n']))?;
        display.lines(&lines)?;

        let moved = session.current_location() != before;
        if options.show_exits && moved && !session.state().is_over() {
            display.notes(&session.surroundings()?)?;
        }
    }

    let state = session.state();
    tracing::info!(?state, "game loop finished");
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WIN: &str = "take panel
use panel on door
move to holding area
take bag
move to purple hallway
hide
move to green hallway
move to armory
take bomb
move to green hallway
move to yellow hallway
move to red hallway
use bomb on barracks
hide
move to hangar bay
move to control room
1986
open hangar bay doors
move to hangar bay
move to ship
";

    fn new_session() -> FictionSession {
        let graph = tb_dsl::load_builtin().into_graph().unwrap();
        FictionSession::new(graph, SessionConfig::default()).unwrap()
    }

    fn run_script(input: &str, options: LoopOptions) -> (SessionState, String) {
        let mut out = Vec::new();
        let config = DisplayConfig::default()
            .with_delay(Duration::ZERO)
            .with_color(false);
        let state = play(
            new_session(),
            input.as_bytes(),
            Display::new(&mut out, config),
            options,
        )
        .unwrap();
        (state, String::from_utf8(out).unwrap())
    }

    const QUIET: LoopOptions = LoopOptions {
        intro: false,
        show_exits: false,
    };

    #[test]
    fn winning_script() {
        let (state, out) = run_script(WIN, QUIET);
        assert_eq!(state, SessionState::Won);
        assert!(out.contains("Enter code: "));
        assert!(out.trim_end().ends_with(script::VICTORY_BANNER));
    }

    #[test]
    fn losing_script() {
        let (state, out) = run_script(
            "take panel\nuse panel on door\nmove to holding area\nmove to purple hallway\nmove to green hallway\n",
            QUIET,
        );
        assert_eq!(state, SessionState::Lost);
        assert!(out.trim_end().ends_with(script::GAME_OVER));
    }

    #[test]
    fn end_of_input_stops_the_loop() {
        let (state, out) = run_script("hide\n", QUIET);
        assert_eq!(state, SessionState::Playing);
        assert!(out.contains(script::NO_DANGER));
    }

    #[test]
    fn quit_stops_the_loop() {
        let (state, _) = run_script("exit\nhide\n", QUIET);
        assert_eq!(state, SessionState::Quit);
    }

    #[test]
    fn intro_waits_for_enter() {
        let options = LoopOptions {
            intro: true,
            show_exits: false,
        };
        let (_, out) = run_script("\nexit\n", options);
        let intro = out.find("You were flying").unwrap();
        let pause = out.find("Press Enter").unwrap();
        let cell = out.find("You wake").unwrap();
        assert!(intro < pause && pause < cell);
    }

    #[test]
    fn show_exits_after_moves() {
        let options = LoopOptions {
            intro: false,
            show_exits: true,
        };
        let (_, out) = run_script(
            "take panel\nuse panel on door\nmove to holding area\n",
            options,
        );
        assert!(out.contains("Exits: holding area\nYou see: panel"));
        assert!(out.contains("Exits: holding cell, purple hallway\nYou see: bag\nYou carry: panel"));
    }
}
