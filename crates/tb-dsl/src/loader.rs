//! Build a [`LocationGraph`] from lexed definition lines.

use std::collections::HashMap;
use std::ops::Range;

use tb_core::{CoreError, Location, LocationGraph, LocationId};

use crate::diagnostics::Diagnostic;
use crate::lexer::{Field, FieldKey};

/// Output of loading: the graph plus everything worth reporting.
///
/// The graph is only safe to play when [`LoadResult::has_errors`] is `false`.
#[derive(Debug)]
pub struct LoadResult {
    /// Every location that loaded cleanly.
    pub graph: LocationGraph,
    /// Errors and warnings, in source order where possible.
    pub diagnostics: Vec<Diagnostic>,
}

impl LoadResult {
    /// Whether any error diagnostic was produced.
    pub fn has_errors(&self) -> bool {
        self.diagnostics.iter().any(Diagnostic::is_error)
    }

    /// Number of error diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics.iter().filter(|d| d.is_error()).count()
    }

    /// Consume the result, returning the graph only if it loaded without errors.
    pub fn into_graph(self) -> Result<LocationGraph, Vec<Diagnostic>> {
        if self.has_errors() {
            Err(self.diagnostics)
        } else {
            Ok(self.graph)
        }
    }
}

/// A location block being filled in.
struct Block {
    location: Location,
    span: Range<usize>,
    seen: Vec<FieldKey>,
}

enum Cursor {
    /// No `Name:` line yet.
    Outside,
    /// The current block has an unresolvable name; its fields are ignored.
    Skipping,
    In(Block),
}

struct Loader {
    graph: LocationGraph,
    diagnostics: Vec<Diagnostic>,
    exit_spans: HashMap<(LocationId, String), Range<usize>>,
    end: usize,
}

/// Load lexed fields into a graph, validating names, targets, and completeness.
///
/// `source_len` anchors diagnostics that have no natural span, such as a
/// location that is never defined.
pub fn load(fields: &[(Field, Range<usize>)], source_len: usize) -> LoadResult {
    let mut loader = Loader {
        graph: LocationGraph::new(),
        diagnostics: Vec::new(),
        exit_spans: HashMap::new(),
        end: source_len,
    };

    let mut cursor = Cursor::Outside;
    for (field, span) in fields {
        if field.key == FieldKey::Name {
            if let Cursor::In(block) = cursor {
                loader.finish(block);
            }
            cursor = loader.open(field, span);
            continue;
        }

        match &mut cursor {
            Cursor::Outside => loader.diagnostics.push(
                Diagnostic::error(
                    span.clone(),
                    format!("`{}` appears before any `Name:` line", field.key),
                )
                .with_label("start a location block with `Name:` first"),
            ),
            Cursor::Skipping => {}
            Cursor::In(block) => loader.apply(block, field),
        }
    }
    if let Cursor::In(block) = cursor {
        loader.finish(block);
    }

    loader.check_integrity();

    tracing::info!(
        locations = loader.graph.len(),
        exits = loader.graph.connection_count(),
        diagnostics = loader.diagnostics.len(),
        "location definition loaded"
    );

    LoadResult {
        graph: loader.graph,
        diagnostics: loader.diagnostics,
    }
}

impl Loader {
    fn open(&mut self, field: &Field, span: &Range<usize>) -> Cursor {
        match LocationId::parse(&field.value) {
            Some(id) => {
                let mut location = Location::new(id);
                location.name = field.value.clone();
                Cursor::In(Block {
                    location,
                    span: span.clone(),
                    seen: Vec::new(),
                })
            }
            None => {
                self.diagnostics.push(
                    Diagnostic::error(
                        field.value_span.clone(),
                        format!("unknown location name \"{}\"", field.value),
                    )
                    .with_label("not a location aboard the ship"),
                );
                Cursor::Skipping
            }
        }
    }

    fn apply(&mut self, block: &mut Block, field: &Field) {
        let location = &mut block.location;
        let repeated = block.seen.contains(&field.key);
        block.seen.push(field.key);

        match field.key {
            FieldKey::Name => {}
            FieldKey::Description => {
                self.warn_override(repeated, field, location.id);
                location.default_description = field.value.clone();
            }
            FieldKey::AlternateDescription => {
                self.warn_override(repeated, field, location.id);
                location.alternate_description = field.value.clone();
            }
            FieldKey::IsLocked => {
                self.warn_override(repeated, field, location.id);
                if field.value.eq_ignore_ascii_case("true") {
                    location.locked = true;
                } else if field.value.eq_ignore_ascii_case("false") {
                    location.locked = false;
                } else {
                    self.diagnostics.push(
                        Diagnostic::error(
                            field.value_span.clone(),
                            format!("invalid boolean \"{}\"", field.value),
                        )
                        .with_label("expected `true` or `false`"),
                    );
                }
            }
            FieldKey::Connections => {
                for (exit, span) in split_list(&field.value, &field.value_span) {
                    let Some(target) = LocationId::parse(exit) else {
                        self.diagnostics.push(
                            Diagnostic::error(
                                span,
                                format!("unknown connection target \"{exit}\""),
                            )
                            .with_label("not a location aboard the ship"),
                        );
                        continue;
                    };
                    if location.connect(exit, target).is_some() {
                        self.diagnostics.push(Diagnostic::warning(
                            span.clone(),
                            format!("duplicate exit \"{exit}\" from {}", location.id),
                        ));
                    }
                    self.exit_spans
                        .insert((location.id, exit.to_lowercase()), span);
                }
            }
            FieldKey::Items => {
                for (item, _) in split_list(&field.value, &field.value_span) {
                    if !item.eq_ignore_ascii_case("none") {
                        location.items.insert(item.to_lowercase());
                    }
                }
            }
        }
    }

    fn warn_override(&mut self, repeated: bool, field: &Field, id: LocationId) {
        if repeated {
            self.diagnostics.push(Diagnostic::warning(
                field.value_span.clone(),
                format!("`{}` given twice for {id}; the last one wins", field.key),
            ));
        }
    }

    fn finish(&mut self, block: Block) {
        let id = block.location.id;
        match self.graph.insert(block.location) {
            Ok(()) => tracing::debug!(location = %id, "location block loaded"),
            Err(err) => self.diagnostics.push(
                Diagnostic::error(block.span, err.to_string())
                    .with_label("this block repeats an earlier one"),
            ),
        }
    }

    fn check_integrity(&mut self) {
        for problem in self.graph.problems() {
            let diagnostic = match &problem {
                CoreError::DanglingConnection { from, exit, .. } => {
                    let span = self
                        .exit_spans
                        .get(&(*from, exit.clone()))
                        .cloned()
                        .unwrap_or(self.end..self.end);
                    Diagnostic::error(span, problem.to_string())
                        .with_label("the target has no `Name:` block")
                }
                _ => Diagnostic::error(self.end..self.end, problem.to_string())
                    .with_label("every location aboard the ship needs a `Name:` block"),
            };
            self.diagnostics.push(diagnostic);
        }
    }
}

/// Split a comma-separated value into trimmed, non-empty entries with their spans.
fn split_list<'a>(value: &'a str, value_span: &Range<usize>) -> Vec<(&'a str, Range<usize>)> {
    let mut entries = Vec::new();
    let mut offset = 0;
    for part in value.split(',') {
        let leading = part.len() - part.trim_start().len();
        let entry = part.trim();
        if !entry.is_empty() {
            let start = value_span.start + offset + leading;
            entries.push((entry, start..start + entry.len()));
        }
        offset += part.len() + 1;
    }
    entries
}
