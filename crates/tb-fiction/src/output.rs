//! Output lines produced by a session turn.

/// Visual style for an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    /// Story text, rendered with typewriter pacing.
    Narration,
    /// Short responses to commands: refusals, help, prompts.
    Feedback,
    /// The defeat banner.
    Defeat,
    /// The victory banner.
    Victory,
}

/// A single piece of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    /// How the line should be shown.
    pub style: LineStyle,
    /// The text content.
    pub text: String,
}

impl Line {
    /// A line of story text.
    pub fn narration(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Narration,
            text: text.into(),
        }
    }

    /// A short response to a command.
    pub fn feedback(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Feedback,
            text: text.into(),
        }
    }

    /// The defeat banner.
    pub fn defeat(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Defeat,
            text: text.into(),
        }
    }

    /// The victory banner.
    pub fn victory(text: impl Into<String>) -> Self {
        Self {
            style: LineStyle::Victory,
            text: text.into(),
        }
    }
}
