use logos::Logos;
use std::fmt;
use std::ops::Range;

/// The keys a location definition line may start with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKey {
    /// `Name:` opens a new location block.
    Name,
    /// `Description:` sets the default description.
    Description,
    /// `AlternateDescription:` sets the conditional description.
    AlternateDescription,
    /// `Connections:` lists exits, comma-separated.
    Connections,
    /// `IsLocked:` is `true` or `false`.
    IsLocked,
    /// `Items:` lists items, comma-separated, `None` for empty.
    Items,
}

impl FieldKey {
    /// Every key, in the order they usually appear in a block.
    pub const ALL: [FieldKey; 6] = [
        FieldKey::Name,
        FieldKey::Description,
        FieldKey::AlternateDescription,
        FieldKey::Connections,
        FieldKey::IsLocked,
        FieldKey::Items,
    ];

    /// The key as written, without the colon.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Description => "Description",
            Self::AlternateDescription => "AlternateDescription",
            Self::Connections => "Connections",
            Self::IsLocked => "IsLocked",
            Self::Items => "Items",
        }
    }

    /// Match a written key exactly. Keys are case-sensitive.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.as_str() == s)
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.as_str())
    }
}

/// One `Key: value` line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    /// Which field this line sets.
    pub key: FieldKey,
    /// The value with surrounding whitespace removed.
    pub value: String,
    /// Byte range of `value` in the source.
    pub value_span: Range<usize>,
}

/// Raw logos token. Each definition line is a single token.
#[derive(Logos, Debug)]
#[logos(skip r"[ \t\r\n]+")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    #[regex(r"[A-Za-z]+:[^\n]*")]
    Field,
}

/// A lexer error with source location.
#[derive(Debug, Clone)]
pub struct LexError {
    /// Byte range of the offending input.
    pub span: Range<usize>,
    /// Human-readable description.
    pub message: String,
}

/// Lex a location definition into `(Field, span)` pairs, one per line.
///
/// Blank lines and `#` comment lines are skipped. A line that is not of the
/// form `Key: value` produces one error covering the rest of that line, and
/// lexing resumes on the next line.
pub fn lex(source: &str) -> (Vec<(Field, Range<usize>)>, Vec<LexError>) {
    let mut fields = Vec::new();
    let mut errors = Vec::new();
    let mut lexer = RawToken::lexer(source);

    while let Some(result) = lexer.next() {
        let span = lexer.span();
        match result {
            Ok(RawToken::Field) => {
                let slice = lexer.slice();
                let Some((key_text, rest)) = slice.split_once(':') else {
                    continue;
                };
                let Some(key) = FieldKey::parse(key_text) else {
                    errors.push(LexError {
                        span: span.start..span.start + key_text.len(),
                        message: format!("unknown field: {key_text:?}"),
                    });
                    continue;
                };

                let leading = rest.len() - rest.trim_start().len();
                let value = rest.trim();
                let start = span.start + key_text.len() + 1 + leading;
                fields.push((
                    Field {
                        key,
                        value: value.to_string(),
                        value_span: start..start + value.len(),
                    },
                    span,
                ));
            }
            Err(()) => {
                let line_len = lexer
                    .remainder()
                    .find('\n')
                    .unwrap_or(lexer.remainder().len());
                lexer.bump(line_len);
                let span = span.start..span.end + line_len;
                errors.push(LexError {
                    message: format!(
                        "expected `Key: value`, found {:?}",
                        source[span.clone()].trim()
                    ),
                    span,
                });
            }
        }
    }

    (fields, errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lex_block() {
        let source = "Name: Holding Cell\nDescription: A cramped cell.\nIsLocked: false\n";
        let (fields, errors) = lex(source);
        assert!(errors.is_empty(), "errors: {errors:?}");

        let keys: Vec<_> = fields.iter().map(|(f, _)| f.key).collect();
        assert_eq!(
            keys,
            vec![FieldKey::Name, FieldKey::Description, FieldKey::IsLocked]
        );
        assert_eq!(fields[0].0.value, "Holding Cell");
        assert_eq!(fields[1].0.value, "A cramped cell.");
    }

    #[test]
    fn value_span_points_at_trimmed_value() {
        let source = "Name:   Ship  ";
        let (fields, errors) = lex(source);
        assert!(errors.is_empty());
        let field = &fields[0].0;
        assert_eq!(&source[field.value_span.clone()], "Ship");
        assert_eq!(fields[0].1, 0..source.len());
    }

    #[test]
    fn indented_lines_and_crlf() {
        let source = "  Name: Armory\r\n\tItems: bomb\r\n";
        let (fields, errors) = lex(source);
        assert!(errors.is_empty(), "errors: {errors:?}");
        assert_eq!(fields.len(), 2);
        assert_eq!(fields[1].0.value, "bomb");
    }

    #[test]
    fn description_may_contain_colons() {
        let (fields, errors) = lex("Description: Scrawled on the wall: 1986.");
        assert!(errors.is_empty());
        assert_eq!(fields[0].0.value, "Scrawled on the wall: 1986.");
    }

    #[test]
    fn comments_are_skipped() {
        let source = "# the first room\nName: Holding Cell";
        let (fields, errors) = lex(source);
        assert!(errors.is_empty());
        assert_eq!(fields.len(), 1);
    }

    #[test]
    fn unknown_key_reported() {
        let (fields, errors) = lex("Smell: burnt metal");
        assert!(fields.is_empty());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 0..5);
        assert!(errors[0].message.contains("Smell"));
    }

    #[test]
    fn malformed_line_is_one_error_and_lexing_resumes() {
        let source = "this line has no key\nName: Ship";
        let (fields, errors) = lex(source);
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].span, 0..20);
        assert_eq!(fields.len(), 1);
        assert_eq!(fields[0].0.key, FieldKey::Name);
    }

    #[test]
    fn keys_are_case_sensitive() {
        assert_eq!(FieldKey::parse("Name"), Some(FieldKey::Name));
        assert_eq!(FieldKey::parse("name"), None);
        assert_eq!(FieldKey::IsLocked.to_string(), "IsLocked:");
    }
}
