use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use std::fmt;
use std::ops::Range;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The definition cannot be played.
    Error,
    /// Suspicious but loadable.
    Warning,
}

/// A problem found while loading a location definition.
#[derive(Debug, Clone)]
pub struct Diagnostic {
    /// How serious the problem is.
    pub severity: Severity,
    /// Byte range in the source.
    pub span: Range<usize>,
    /// Headline message.
    pub message: String,
    /// Optional text attached to the highlighted span.
    pub label: Option<String>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Create a warning diagnostic.
    pub fn warning(span: Range<usize>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            span,
            message: message.into(),
            label: None,
        }
    }

    /// Attach a label to the highlighted span.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Whether this diagnostic blocks play.
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "error",
            Severity::Warning => "warning",
        };
        write!(f, "{prefix}: {}", self.message)
    }
}

/// Render diagnostics against their source with ariadne.
pub fn render_diagnostics(
    source: &str,
    filename: &str,
    diagnostics: &[Diagnostic],
    color: bool,
) -> String {
    let mut output = Vec::new();
    let end = source.len();

    for diag in diagnostics {
        let (kind, label_color) = match diag.severity {
            Severity::Error => (ReportKind::Error, Color::Red),
            Severity::Warning => (ReportKind::Warning, Color::Yellow),
        };

        // Clamp so a span at end-of-file still renders.
        let span = diag.span.start.min(end)..diag.span.end.min(end);
        let label_text = diag.label.as_deref().unwrap_or(&diag.message);

        Report::build(kind, (filename, span.clone()))
            .with_config(Config::default().with_color(color))
            .with_message(&diag.message)
            .with_label(
                Label::new((filename, span))
                    .with_message(label_text)
                    .with_color(label_color),
            )
            .finish()
            .write((filename, Source::from(source)), &mut output)
            .ok();
    }

    String::from_utf8(output).unwrap_or_default()
}

/// One-line tally such as `"2 errors, 1 warning"`. Empty when there is nothing to report.
pub fn summary(diagnostics: &[Diagnostic]) -> String {
    let errors = diagnostics.iter().filter(|d| d.is_error()).count();
    let warnings = diagnostics.len() - errors;
    let plural = |n: usize| if n == 1 { "" } else { "s" };

    match (errors, warnings) {
        (0, 0) => String::new(),
        (0, w) => format!("{w} warning{}", plural(w)),
        (e, w) => format!("{e} error{}, {w} warning{}", plural(e), plural(w)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_display() {
        let d = Diagnostic::error(0..5, "unknown location name \"Moon Base\"");
        insta::assert_snapshot!(d.to_string(), @r#"error: unknown location name "Moon Base""#);
    }

    #[test]
    fn render_produces_output() {
        let source = "Name: Moon Base\nDescription: Grey dust.";
        let diags = vec![
            Diagnostic::error(6..15, "unknown location name").with_label("not aboard the ship"),
        ];
        let output = render_diagnostics(source, "locations.txt", &diags, false);
        assert!(output.contains("unknown location name"));
        assert!(output.contains("not aboard the ship"));
    }

    #[test]
    fn render_clamps_end_of_file_span() {
        let source = "Name: Ship";
        let diags = vec![Diagnostic::error(50..50, "location not defined: Armory")];
        let output = render_diagnostics(source, "locations.txt", &diags, false);
        assert!(output.contains("Armory"));
    }

    #[test]
    fn summary_counts() {
        assert_eq!(summary(&[]), "");
        let warn = Diagnostic::warning(0..1, "w");
        let err = Diagnostic::error(0..1, "e");
        assert_eq!(summary(std::slice::from_ref(&warn)), "1 warning");
        assert_eq!(
            summary(&[err.clone(), err, warn.clone(), warn]),
            "2 errors, 2 warnings"
        );
    }
}
