//! Commit message markers that override the configured strategy.

use tracing::debug;

use super::bump::Strategy;

/// Markers in priority order: the first one present in a message wins.
const MARKERS: [(&str, Strategy); 3] = [
    ("[major]", Strategy::Major),
    ("[minor]", Strategy::Minor),
    ("[patch]", Strategy::Patch),
];

/// Find the highest-priority strategy marker in a commit message.
pub fn marker_strategy(commit_message: &str) -> Option<Strategy> {
    MARKERS
        .iter()
        .find(|(marker, _)| commit_message.contains(marker))
        .map(|(_, strategy)| *strategy)
}

/// Resolve the effective strategy from config and an optional commit message.
///
/// A marker in the message overrides the configured strategy; without a
/// message, or without any marker, the configured strategy is used.
pub fn resolve_strategy(configured: Strategy, commit_message: Option<&str>) -> Strategy {
    match commit_message.and_then(marker_strategy) {
        Some(overridden) => {
            debug!("Commit message overrides strategy {} -> {}", configured, overridden);
            overridden
        }
        None => configured,
    }
}
