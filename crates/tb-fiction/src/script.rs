//! Fixed narrative text.
//!
//! Location descriptions come from the definition file; everything the engine
//! says on its own lives here.

/// Shown once before the first location.
pub const INTRO: &str = "You were flying through the quiet expanse of space, the hum of your ship's engines a comforting constant against the void. It was supposed to be a routine run along a charted lane. Without warning your sensors lit up: a Martian ship, vast and dark, dropping onto your course. A surge of energy swept through your hull and every system died at once. The last thing you remember is the blinding light of the tractor beam pulling you in.";

/// Shown when the player submits an empty line.
pub const EMPTY_INPUT: &str = "Please enter a command.";

/// Shown for any input the parser does not recognize.
pub const HELP: &str =
    "Unknown command. Try 'move to <room>', 'hide', 'take <item>', or 'use <item> on <thing>'.";

/// Banner after every defeat.
pub const GAME_OVER: &str = "GAME OVER";

/// Closing line of the victory ending.
pub const VICTORY_BANNER: &str = "You've escaped. Victory is yours.";

/// Victory narration, shown after the Ship's description.
pub const VICTORY: &str = "The engines roar to full power and your ship surges forward, breaking free of the Martian vessel. The hangar shrinks behind you and the open void fills the canopy. Against all odds you slipped their grip. The Martians are behind you now, and the stars are ahead.";

/// Suffix when the hangar doors are open but the Martians are still on the deck.
pub const MARTIANS_REMAIN: &str = " But the Martians below remain.";

/// Suffix when the player reaches the ship with the hangar doors shut.
pub const DOORS_CLOSED: &str = " But the hangar bay doors remain closed.";

/// The player walked into the patrol without hiding.
pub const PATROL_AMBUSH: &str = "You step into the green hallway and walk straight into something solid. You look up into the glowing eyes of the Martian on patrol. It raises its weapon in one smooth motion, and a searing pain tears through you. The world goes dark.";

/// The player ran for the ship while the hangar was still crewed.
pub const HANGAR_DASH: &str = "You drop onto the hangar floor and sprint for your ship. Your footsteps ring through the bay and every head turns at once. The technicians drop their tools and a guttural cry goes up. You are halfway there when an energy blast catches you in the back, and the cold metal deck rushes up to meet you.";

/// The player opened the barracks door.
pub const BARRACKS_SWARM: &str = "The barracks doors slide open with a hiss and you step into humid, stale air. Dozens of Martians turn to face you as one. A unified hiss fills the room and they lunge. There is no time to run. Your last thought is that you walked straight into their den.";

/// The player did anything but hide right after the bomb went off.
pub const SWEEP_AMBUSH: &str = "Martians flood into the corridor, their voices sharp and frantic. The smoke begins to clear and their eyes land on you, standing in the open. There is no time to react. The last thing you see is the flash of their weapons.";

/// Picking up the floor panel.
pub const PANEL_TAKEN: &str = "With some effort you pry up the misaligned floor panel. The metal is light but sturdy, its edges sharp enough that you grip it carefully.";

/// Picking up the bag.
pub const BAG_TAKEN: &str = "You press your hand to the locker's glowing panel. The glyphs flare and dissolve, and the panel slides open with a soft hiss. Your bag is heavier than you remember. Inside, most of your belongings are intact, including the keys to your ship. As you sling it over your shoulder, the hum of the ship shifts, growing louder and more insistent.";

/// Picking up the bomb.
pub const BOMB_TAKEN: &str = "You lift the device carefully. A small indicator on its side blinks steadily: it works. Placed at the door of wherever the Martians gather in numbers, it could take most of them out of the fight and draw the rest away from your path to the ship.";

/// Smashing the barrier emitter with the panel.
pub const EMITTER_SMASHED: &str = "You grip the panel tightly and swing it into one of the barrier emitters. Sparks burst from the housing and the barrier's hum turns ragged. You strike again. The emitter sputters, flickers, and falls silent, and the barrier fades to nothing. The way into the holding area is open.";

/// Planting and detonating the bomb at the barracks door.
pub const BOMB_DETONATED: &str = "You crouch by the barracks doors and press the bomb to the centre seam. The adhesive grips and a quickening series of beeps begins. You back away, thumb on the detonator, and press. The explosion rocks the hallway and blows the doors inward in a spray of molten fragments. Alarms howl. The whole ship knows you are here.";

/// Hiding from the patrol in the Purple Hallway.
pub const HIDE_FROM_PATROL: &str = "You press yourself into the shadowed recess as the footsteps grow louder. A tall, wiry Martian strides into view, eyes sweeping the corridor. It pauses beside you, head tilted, then moves on towards the green hallway until its steps fade away. The danger has passed, for now.";

/// Hiding from the sweep after the explosion.
pub const HIDE_FROM_SWEEP: &str = "You duck into a shadowed alcove as Martians rush past towards the shattered barracks, weapons ready and chattering in alarm. None of them look your way. When the last one disappears through the smoke, the hallway falls quiet. The path ahead is clear, for now.";

/// Hiding when nothing threatens the player.
pub const NO_DANGER: &str = "You find a quiet spot to hide, but there's no immediate danger.";

/// Opening the hangar bay doors.
pub const DOORS_OPENED: &str = "You push the control slider to the end of its track. With a deep groan the hangar doors begin to part, revealing the starry void beyond. A rush of air whips through the bay as the atmospheric shield flares to life, shimmering across the opening.";

/// Arriving at the code-locked Control Room door.
pub const CODE_PROMPT: &str = "The Control Room is locked. You'll have to enter a code to unlock it:";

/// The right code was entered.
pub const CODE_ACCEPTED: &str = "With a faint beep the glyphs on the door flash and fade. The door slides open onto the dim hum of alien machinery.";

/// The wrong code was entered.
pub const WRONG_CODE: &str = "No, that's not it.";

/// Any other locked door.
pub const LOCKED: &str = "You can't seem to get past.";

/// `use` without ` on <target>`.
pub const USE_NEEDS_TARGET: &str = "I don't think that will do anything.";

/// `use` with a combination that has no scripted effect.
pub const NO_EFFECT: &str = "That doesn't seem to do anything.";

/// Flavor text for picking up an item, if it has any.
pub fn take_text(item: &str) -> Option<&'static str> {
    match item {
        "panel" => Some(PANEL_TAKEN),
        "bag" => Some(BAG_TAKEN),
        "bomb" => Some(BOMB_TAKEN),
        _ => None,
    }
}
