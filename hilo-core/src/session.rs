use rand::Rng;

use crate::GuessError;

/// Bottom of the guessing range.
pub const MIN_TARGET: u32 = 1;

/// Top of the guessing range.
pub const MAX_TARGET: u32 = 100;

/// Valid guesses allowed per round before the round is lost.
pub const MAX_ATTEMPTS: u32 = 10;

/// Where a round stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundStatus {
    /// The round is live and waiting for the next guess.
    AwaitingGuess,
    /// The target was hit.
    Won,
    /// The attempt limit was exhausted without hitting the target.
    Lost,
}

/// The result of one accepted guess.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessOutcome {
    /// The guess is below the target; the round continues.
    TooLow,
    /// The guess is above the target; the round continues.
    TooHigh,
    /// The guess hit the target. `attempts` is the final count for scoring.
    Won { attempts: u32 },
    /// The attempt limit is used up. `target` is revealed for display.
    Lost { target: u32 },
}

/// One round of the guessing game.
///
/// A session is created per round and replaced wholesale on every
/// start / play-again / new-player action; nothing carries over between
/// rounds except the leaderboard, which lives elsewhere.
#[derive(Debug, Clone)]
pub struct GameSession {
    target: u32,
    attempts: u32,
    status: RoundStatus,
}

impl GameSession {
    /// Start a round with a uniformly random target in
    /// [`MIN_TARGET`]..=[`MAX_TARGET`].
    ///
    /// The RNG is passed in so callers control determinism; front ends hand
    /// in `rand::thread_rng()`.
    pub fn new(rng: &mut impl Rng) -> Self {
        Self::with_target(rng.gen_range(MIN_TARGET..=MAX_TARGET))
    }

    /// Start a round with a known target, for scripted play and tests.
    pub fn with_target(target: u32) -> Self {
        debug_assert!((MIN_TARGET..=MAX_TARGET).contains(&target));
        Self {
            target,
            attempts: 0,
            status: RoundStatus::AwaitingGuess,
        }
    }

    /// The number the player is trying to hit.
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Valid guesses evaluated so far this round.
    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Where the round stands.
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Check if the round has ended, won or lost.
    pub fn is_over(&self) -> bool {
        !matches!(self.status, RoundStatus::AwaitingGuess)
    }

    /// Evaluate one raw guess.
    ///
    /// Rejected input (not an integer, or outside the guessing range)
    /// leaves the round untouched and is not counted as an attempt; the
    /// caller re-prompts. An accepted guess counts as an attempt even when
    /// it ends the round, so winning on the last allowed guess is a win.
    ///
    /// Submitting after the round has ended restates the terminal outcome
    /// without counting anything; front ends disable input at that point.
    pub fn submit(&mut self, raw: &str) -> Result<GuessOutcome, GuessError> {
        match self.status {
            RoundStatus::Won => {
                return Ok(GuessOutcome::Won {
                    attempts: self.attempts,
                });
            }
            RoundStatus::Lost => {
                return Ok(GuessOutcome::Lost {
                    target: self.target,
                });
            }
            RoundStatus::AwaitingGuess => {}
        }

        let guess = parse_guess(raw)?;
        self.attempts += 1;

        if guess == self.target {
            self.status = RoundStatus::Won;
            Ok(GuessOutcome::Won {
                attempts: self.attempts,
            })
        } else if self.attempts >= MAX_ATTEMPTS {
            self.status = RoundStatus::Lost;
            Ok(GuessOutcome::Lost {
                target: self.target,
            })
        } else if guess < self.target {
            Ok(GuessOutcome::TooLow)
        } else {
            Ok(GuessOutcome::TooHigh)
        }
    }
}

/// Parse and bounds-check one guess.
fn parse_guess(raw: &str) -> Result<u32, GuessError> {
    let trimmed = raw.trim();
    let value: i64 = trimmed
        .parse()
        .map_err(|_| GuessError::NotANumber(trimmed.to_string()))?;

    if !(i64::from(MIN_TARGET)..=i64::from(MAX_TARGET)).contains(&value) {
        return Err(GuessError::OutOfRange(value));
    }

    Ok(value as u32)
}
