//! Terminal rendering: word wrap, typewriter pacing and colour.

use std::io::{self, Write};
use std::thread;
use std::time::Duration;

use colored::Colorize;
use tb_fiction::{Line, LineStyle};

/// Default line width for wrapped text.
pub const DEFAULT_WIDTH: usize = 80;

/// Default pause after each character of narration.
pub const DEFAULT_DELAY_US: u64 = 500;

/// How story output is rendered.
#[derive(Debug, Clone)]
pub struct DisplayConfig {
    /// Wrap column. Zero disables wrapping.
    pub width: usize,
    /// Pause after each narrated character. Zero prints at once.
    pub delay: Duration,
    /// Whether to emit colour codes.
    pub color: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            delay: Duration::from_micros(DEFAULT_DELAY_US),
            color: true,
        }
    }
}

impl DisplayConfig {
    /// Set the wrap column.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Set the per-character delay.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Turn colour on or off.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}

/// Writes session output to a terminal or any other sink.
pub struct Display<W: Write> {
    out: W,
    config: DisplayConfig,
}

impl<W: Write> Display<W> {
    /// Wrap a writer.
    pub fn new(out: W, config: DisplayConfig) -> Self {
        Self { out, config }
    }

    /// Render lines in order.
    pub fn lines(&mut self, lines: &[Line]) -> io::Result<()> {
        for line in lines {
            self.line(line)?;
        }
        Ok(())
    }

    /// Render a single line. Narration is paced; everything else is immediate.
    pub fn line(&mut self, line: &Line) -> io::Result<()> {
        let text = wrap(&line.text, self.config.width);
        if line.style == LineStyle::Narration {
            return self.typewrite(&text);
        }

        let text = if self.config.color {
            match line.style {
                LineStyle::Feedback => text.cyan().to_string(),
                LineStyle::Defeat => text.red().bold().to_string(),
                LineStyle::Victory => text.green().bold().to_string(),
                LineStyle::Narration => text,
            }
        } else {
            text
        };
        writeln!(self.out, "{text}")?;
        self.out.flush()
    }

    /// Render side notes such as the exit listing.
    pub fn notes(&mut self, notes: &[String]) -> io::Result<()> {
        for note in notes {
            let text = wrap(note, self.config.width);
            if self.config.color {
                writeln!(self.out, "{}", text.dimmed())?;
            } else {
                writeln!(self.out, "{text}")?;
            }
        }
        self.out.flush()
    }

    /// Print a prompt without a trailing newline.
    pub fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.out, "{text}")?;
        self.out.flush()
    }

    /// End the current line.
    pub fn newline(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    fn typewrite(&mut self, text: &str) -> io::Result<()> {
        if self.config.delay.is_zero() {
            writeln!(self.out, "{text}")?;
            return self.out.flush();
        }
        for ch in text.chars() {
            write!(self.out, "{ch}")?;
            self.out.flush()?;
            thread::sleep(self.config.delay);
        }
        writeln!(self.out)?;
        self.out.flush()
    }
}

/// Greedy word wrap at `width` columns, keeping existing line breaks.
///
/// Words longer than the width get a line of their own.
pub fn wrap(text: &str, width: usize) -> String {
    if width == 0 {
        return text.to_string();
    }

    let mut out = String::with_capacity(text.len());
    for (i, paragraph) in text.lines().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let mut column = 0;
        for word in paragraph.split_whitespace() {
            let len = word.chars().count();
            if column > 0 && column + 1 + len > width {
                out.push('\n');
                column = 0;
            } else if column > 0 {
                out.push(' ');
                column += 1;
            }
            out.push_str(word);
            column += len;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lines: &[Line], config: DisplayConfig) -> String {
        let mut buf = Vec::new();
        Display::new(&mut buf, config).lines(lines).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn plain() -> DisplayConfig {
        DisplayConfig::default()
            .with_delay(Duration::ZERO)
            .with_color(false)
    }

    #[test]
    fn wrap_breaks_between_words() {
        assert_eq!(wrap("the quick brown fox", 10), "the quick\nbrown fox");
        assert_eq!(wrap("short", 80), "short");
    }

    #[test]
    fn wrap_never_exceeds_width() {
        let text = script_like_text();
        for line in wrap(&text, 30).lines() {
            assert!(line.chars().count() <= 30, "too long: {line:?}");
        }
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        assert_eq!(wrap("a extraordinarily b", 5), "a\nextraordinarily\nb");
    }

    #[test]
    fn wrap_keeps_paragraph_breaks() {
        assert_eq!(wrap("one two\n\nthree", 80), "one two\n\nthree");
    }

    #[test]
    fn zero_width_disables_wrapping() {
        let text = script_like_text();
        assert_eq!(wrap(&text, 0), text);
    }

    #[test]
    fn plain_output_has_no_escape_codes() {
        let out = render(
            &[
                Line::narration("You wake."),
                Line::feedback("Please enter a command."),
                Line::defeat("GAME OVER"),
            ],
            plain(),
        );
        assert_eq!(out, "You wake.\nPlease enter a command.\nGAME OVER\n");
    }

    #[test]
    fn notes_and_prompt() {
        let mut buf = Vec::new();
        let mut display = Display::new(&mut buf, plain());
        display.notes(&["Exits: ship".to_string()]).unwrap();
        display.prompt("> ").unwrap();
        display.newline().unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "Exits: ship\n> \n");
    }

    #[test]
    fn default_config() {
        let config = DisplayConfig::default();
        assert_eq!(config.width, 80);
        assert_eq!(config.delay, Duration::from_micros(500));
        assert!(config.color);
    }

    fn script_like_text() -> String {
        "Rows of empty cells line the walls of the holding area, their barriers dark. \
         Against the far wall stands a translucent locker."
            .to_string()
    }
}
