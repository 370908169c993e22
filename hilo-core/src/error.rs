use crate::session::{MAX_TARGET, MIN_TARGET};

/// Why a guess was rejected at the input boundary.
///
/// Rejected input is recovered locally: the round is unchanged, the text is
/// discarded, and the player is re-prompted. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GuessError {
    /// The text does not parse as an integer.
    #[error("{0:?} is not a whole number")]
    NotANumber(String),

    /// The number parses but lies outside the guessing range.
    #[error("{0} is outside the range {MIN_TARGET}-{MAX_TARGET}")]
    OutOfRange(i64),
}

impl GuessError {
    /// Check if the input failed to parse at all (as opposed to being a
    /// number outside the range).
    pub fn is_not_a_number(&self) -> bool {
        matches!(self, Self::NotANumber(_))
    }
}
