//! Exit-name suggestions with fuzzy matching.

use strsim::jaro_winkler;
use tb_core::{Location, normalize_exit};

/// Minimum similarity score for a suggestion (0.0-1.0).
pub const FUZZY_THRESHOLD: f64 = 0.8;

/// Suggest the exit the player most likely meant by `input`.
///
/// Returns `None` when no exit scores at least [`FUZZY_THRESHOLD`].
pub fn suggest_exit<'a>(location: &'a Location, input: &str) -> Option<&'a str> {
    let wanted = normalize_exit(input);
    if wanted.is_empty() {
        return None;
    }

    location
        .connections
        .keys()
        .map(|exit| (exit.as_str(), jaro_winkler(&wanted, &normalize_exit(exit))))
        .filter(|(_, score)| *score >= FUZZY_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
        .map(|(exit, _)| exit)
}
