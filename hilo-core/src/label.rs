use std::fmt;

/// Identifies a player and which of their rounds is being played.
///
/// The original version of this game glued the round number into the player
/// name string and split it back out on a delimiter; here the two parts are
/// separate fields and only joined for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerLabel {
    /// The player's name, as entered.
    name: String,

    /// Round counter for this player, starting at 1.
    round: u32,
}

impl PlayerLabel {
    /// Create a label for a fresh player, starting at round 1.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            round: 1,
        }
    }

    /// Get the player's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the round number, starting at 1.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Move on to the next round.
    ///
    /// Called when a round completes, won or lost. Playing again never takes
    /// the counter back; only switching players does, via [`Self::new`].
    pub fn advance(&mut self) {
        self.round += 1;
    }
}

impl fmt::Display for PlayerLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-Try {}", self.name, self.round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_name_and_round() {
        let label = PlayerLabel::new("Alice");
        assert_eq!(label.to_string(), "Alice-Try 1");
    }

    #[test]
    fn advance_increments_round() {
        let mut label = PlayerLabel::new("Alice");
        label.advance();
        label.advance();
        assert_eq!(label.round(), 3);
        assert_eq!(label.to_string(), "Alice-Try 3");
    }

    #[test]
    fn new_player_starts_back_at_round_one() {
        let mut label = PlayerLabel::new("Alice");
        label.advance();
        label = PlayerLabel::new("Bob");
        assert_eq!(label.name(), "Bob");
        assert_eq!(label.round(), 1);
    }
}
