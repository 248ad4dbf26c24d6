pub mod check;
pub mod export;
pub mod play;

use std::fs;
use std::io::{self, IsTerminal};
use std::path::Path;

use tb_core::LocationGraph;
use tb_dsl::diagnostics::{render_diagnostics, summary};

use crate::error::CliError;

/// Load a location definition, or the built-in one, printing diagnostics to stderr.
/// Returns the graph only if there are no errors.
fn load_graph(locations: Option<&Path>) -> Result<LocationGraph, CliError> {
    let (source, filename) = match locations {
        Some(path) => {
            let source = fs::read_to_string(path).map_err(|source| CliError::Read {
                path: path.to_path_buf(),
                source,
            })?;
            (source, path.display().to_string())
        }
        None => (tb_dsl::BUILTIN_LOCATIONS.to_string(), "<built-in>".to_string()),
    };

    let result = tb_dsl::load_source(&source);
    if !result.diagnostics.is_empty() {
        let color = io::stderr().is_terminal();
        eprint!(
            "{}",
            render_diagnostics(&source, &filename, &result.diagnostics, color)
        );
        eprintln!("  {}", summary(&result.diagnostics));
    }

    let count = result.error_count();
    result
        .into_graph()
        .map_err(|_| CliError::InvalidLocations { count })
}
