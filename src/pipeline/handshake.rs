use regex::Regex;
use std::sync::LazyLock;

use crate::model::NEVER_HANDSHAKED;

struct Unit {
    word: &'static str,
    seconds: u64,
    pattern: Regex,
}

// Checked in order; a part is counted under the first unit word it contains.
static UNITS: LazyLock<Vec<Unit>> = LazyLock::new(|| {
    [("day", 86_400), ("hour", 3_600), ("minute", 60), ("second", 1)]
        .into_iter()
        .map(|(word, seconds)| Unit {
            word,
            seconds,
            pattern: Regex::new(&format!(r"(\d+)\s+{}", word)).expect("unit pattern is valid"),
        })
        .collect()
});

/// Converts `wg show`'s "latest handshake" phrase into elapsed seconds.
///
/// `"1 day, 2 hours, 3 minutes, 4 seconds ago"` becomes `93784`. An empty phrase means the peer
/// never completed a handshake and yields [`NEVER_HANDSHAKED`]. Parts without a recognised unit
/// or number count as zero.
pub fn handshake_seconds(phrase: &str) -> u64 {
    let phrase = phrase.trim();
    if phrase.is_empty() {
        return NEVER_HANDSHAKED;
    }

    phrase
        .split(',')
        .map(str::trim)
        .map(part_seconds)
        .fold(0u64, u64::saturating_add)
}

fn part_seconds(part: &str) -> u64 {
    let Some(unit) = UNITS.iter().find(|unit| part.contains(unit.word)) else {
        return 0;
    };

    unit.pattern
        .captures(part)
        .and_then(|captures| captures[1].parse::<u64>().ok())
        .map(|count| count.saturating_mul(unit.seconds))
        .unwrap_or(0)
}
