//! Core rules for the hilo number-guessing game.
//!
//! This crate provides the presentation-agnostic pieces:
//! - `GameSession` - one round of the game and its guess state machine
//! - `PlayerLabel` - structured player/round identification
//! - `Leaderboard` and `ScoreEntry` - the capped best-rounds board
//! - `GuessError` - the single recoverable input failure
//!
//! Front ends own everything on screen; they hold these values and call
//! into them from their event handlers.

mod error;
pub use error::GuessError;

mod label;
pub use label::PlayerLabel;

mod score;
pub use score::{Leaderboard, MAX_ENTRIES, ScoreEntry};

mod session;
pub use session::{
    GameSession, GuessOutcome, MAX_ATTEMPTS, MAX_TARGET, MIN_TARGET, RoundStatus,
};
