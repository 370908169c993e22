use std::fmt;

use crate::PlayerLabel;

/// Most entries the leaderboard keeps.
pub const MAX_ENTRIES: usize = 10;

/// One finished round's result. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoreEntry {
    label: PlayerLabel,
    attempts: u32,
}

impl ScoreEntry {
    /// Create an entry for a finished round.
    pub fn new(label: PlayerLabel, attempts: u32) -> Self {
        Self { label, attempts }
    }

    /// The player/round this entry belongs to.
    pub fn label(&self) -> &PlayerLabel {
        &self.label
    }

    /// How many valid guesses the round took.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }
}

impl fmt::Display for ScoreEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.attempts)
    }
}

/// Session-local board of the best (fewest-attempt) finished rounds.
///
/// Kept sorted ascending by attempt count and truncated to [`MAX_ENTRIES`]
/// after every insert. Ties keep their insertion order.
#[derive(Debug, Clone, Default)]
pub struct Leaderboard {
    entries: Vec<ScoreEntry>,
}

impl Leaderboard {
    /// Create an empty leaderboard.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a finished round's entry.
    ///
    /// `sort_by_key` is stable, which is what gives equal scores their
    /// insertion-order tie-break.
    pub fn record(&mut self, entry: ScoreEntry) {
        self.entries.push(entry);
        self.entries.sort_by_key(ScoreEntry::attempts);
        self.entries.truncate(MAX_ENTRIES);
    }

    /// Current standings, best (fewest attempts) first.
    pub fn entries(&self) -> &[ScoreEntry] {
        &self.entries
    }

    /// Get the number of recorded entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no rounds have been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
