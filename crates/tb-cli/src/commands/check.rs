use std::path::Path;

use colored::Colorize;

use crate::error::CliError;

pub fn run(locations: Option<&Path>) -> Result<(), CliError> {
    let graph = super::load_graph(locations)?;
    let locked = graph.iter().filter(|l| l.locked).count();

    println!("  {}", "All checks passed.".green());
    println!(
        "  {} locations, {} exits, {} locked",
        graph.len(),
        graph.connection_count(),
        locked
    );

    Ok(())
}
