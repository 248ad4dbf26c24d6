use std::fs;
use std::path::Path;

use crate::error::CliError;

pub fn run(locations: Option<&Path>, output: Option<&Path>) -> Result<(), CliError> {
    let graph = super::load_graph(locations)?;
    let json = serde_json::to_string_pretty(&graph)?;

    if let Some(path) = output {
        fs::write(path, format!("{json}\n")).map_err(|source| CliError::Write {
            path: path.to_path_buf(),
            source,
        })?;
        println!("  Exported {} locations to {}", graph.len(), path.display());
    } else {
        println!("{json}");
    }

    Ok(())
}
