//! The round engine: scoring and turn alternation for one match.
//!
//! ## State machine
//!
//! ```text
//! InProgress(unlocked) --wrong, attempts left--> InProgress(locked)
//! InProgress(locked)   --external unlock------> InProgress(unlocked)
//! InProgress(*)        --correct / exhausted / timeout--> advance
//! advance              --past last item-------> Finished
//! ```
//!
//! `Finished` is absorbing: guesses and timeouts fail with `InvalidState`
//! so a match can never be scored twice.

use im::Vector;
use tracing::{debug, warn};

use super::state::{points_for_attempt, GuessOutcome, RoundState, MAX_ATTEMPTS};
use crate::catalog::Item;
use crate::core::{MatchConfig, PlayerMap, PlayerMode, PlayerSlot};
use crate::error::{Error, Result};

/// Drives one match from the first item to the last.
///
/// Cloning is cheap: items are held in a persistent vector.
///
/// ## Example
///
/// ```
/// use image_guesser::catalog::Item;
/// use image_guesser::core::{PlayerMode, PlayerSlot};
/// use image_guesser::round::{GuessOutcome, RoundEngine};
///
/// let items = vec![Item::new("animal_fox", "Fox")];
/// let mut engine = RoundEngine::new(items, PlayerMode::Single).unwrap();
///
/// let outcome = engine.submit_guess("fox").unwrap();
/// assert_eq!(outcome, GuessOutcome::Correct { points: 10, match_finished: true });
/// assert_eq!(engine.final_scores().unwrap()[PlayerSlot::One], 10);
/// ```
#[derive(Clone, Debug)]
pub struct RoundEngine {
    items: Vector<Item>,
    mode: PlayerMode,
    timed: bool,
    state: RoundState,
}

impl RoundEngine {
    /// Start a match over `items`.
    ///
    /// Fails with `InvalidConfiguration` if `items` is empty.
    pub fn new(items: impl IntoIterator<Item = Item>, mode: PlayerMode) -> Result<Self> {
        let items: Vector<Item> = items.into_iter().collect();
        if items.is_empty() {
            return Err(Error::config("a match needs at least one item"));
        }

        debug!(items = items.len(), ?mode, "match started");
        Ok(Self {
            items,
            mode,
            timed: false,
            state: RoundState::new(mode.player_count()),
        })
    }

    /// Start a match with the mode and timer taken from `config`.
    pub fn from_config(config: &MatchConfig, items: impl IntoIterator<Item = Item>) -> Result<Self> {
        let engine = Self::new(items, config.mode())?;
        Ok(if config.timer().is_some() {
            engine.with_timer()
        } else {
            engine
        })
    }

    /// Allow `notify_time_expired`.
    #[must_use]
    pub fn with_timer(mut self) -> Self {
        self.timed = true;
        self
    }

    // === Operations ===

    /// Evaluate a guess for the current item.
    ///
    /// Fails with `InvalidState` if the match is finished or guessing is
    /// locked after a wrong answer.
    pub fn submit_guess(&mut self, text: &str) -> Result<GuessOutcome> {
        if self.state.finished {
            warn!("guess submitted after the match finished");
            return Err(Error::InvalidState("match is finished"));
        }
        if self.state.guess_locked {
            warn!("guess submitted while locked");
            return Err(Error::InvalidState("guessing is locked until unlocked"));
        }

        let item = &self.items[self.state.current_index];
        let slot = self.state.current_turn;

        if item.matches(text) {
            let points = points_for_attempt(self.state.attempt_count);
            self.state.scores[slot] += points;
            debug!(index = self.state.current_index, %slot, points, "correct guess");
            self.advance();
            return Ok(GuessOutcome::Correct {
                points,
                match_finished: self.state.finished,
            });
        }

        if self.state.attempt_count < MAX_ATTEMPTS {
            self.state.attempt_count += 1;
            self.state.guess_locked = true;
            debug!(
                index = self.state.current_index,
                %slot,
                attempts = self.state.attempt_count,
                "wrong guess"
            );
            return Ok(GuessOutcome::Incorrect {
                attempts_remaining: self.state.attempts_remaining(),
            });
        }

        debug!(index = self.state.current_index, %slot, "attempts exhausted");
        Ok(self.give_up())
    }

    /// Clear the guess lock. No-op when not locked.
    pub fn notify_external_unlock(&mut self) {
        if self.state.guess_locked {
            debug!(index = self.state.current_index, "guessing unlocked");
            self.state.guess_locked = false;
        }
    }

    /// The timer for the current item ran out.
    ///
    /// Treated like running out of attempts. Fails with `InvalidState` if the
    /// match has no timer or is finished.
    pub fn notify_time_expired(&mut self) -> Result<GuessOutcome> {
        if !self.timed {
            warn!("timeout delivered to an untimed match");
            return Err(Error::InvalidState("timer is not enabled for this match"));
        }
        if self.state.finished {
            warn!("timeout delivered after the match finished");
            return Err(Error::InvalidState("match is finished"));
        }

        debug!(index = self.state.current_index, slot = %self.state.current_turn, "time expired");
        Ok(self.give_up())
    }

    /// Reveal the answer and move on with no points.
    fn give_up(&mut self) -> GuessOutcome {
        let answer = self.items[self.state.current_index].answer.clone();
        self.advance();
        GuessOutcome::Exhausted {
            answer,
            match_finished: self.state.finished,
        }
    }

    fn advance(&mut self) {
        self.state.current_index += 1;

        if self.state.current_index == self.items.len() {
            self.state.finished = true;
            self.state.guess_locked = false;
            debug!(scores = ?self.state.scores, "match finished");
            return;
        }

        self.state.attempt_count = 0;
        self.state.guess_locked = false;
        if self.mode.is_multiplayer() {
            self.state.current_turn = self.state.current_turn.other();
        }
    }

    // === Queries ===

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state.finished
    }

    /// Scores once the match is over.
    ///
    /// Fails with `InvalidState` while the match is in progress.
    pub fn final_scores(&self) -> Result<&PlayerMap<u32>> {
        if !self.state.finished {
            return Err(Error::InvalidState("match is still in progress"));
        }
        Ok(&self.state.scores)
    }

    /// Live scores.
    #[must_use]
    pub fn scores(&self) -> &PlayerMap<u32> {
        &self.state.scores
    }

    /// The item being guessed, or `None` once finished.
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.items.get(self.state.current_index)
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.state.current_index
    }

    #[must_use]
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn current_turn(&self) -> PlayerSlot {
        self.state.current_turn
    }

    #[must_use]
    pub fn attempt_count(&self) -> u8 {
        self.state.attempt_count
    }

    #[must_use]
    pub fn is_guess_locked(&self) -> bool {
        self.state.guess_locked
    }

    #[must_use]
    pub fn mode(&self) -> PlayerMode {
        self.mode
    }

    #[must_use]
    pub fn is_timed(&self) -> bool {
        self.timed
    }

    /// Read-only view of the round state.
    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }
}
