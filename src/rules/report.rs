//! End-of-match report and the match-completion flow.
//!
//! A `MatchReport` is built from a finished engine and its config. Recording
//! it consumes the report, and all players' rows go out in one write, so a
//! report is either fully recorded once or not recorded at all.

use tracing::info;

use super::outcome::{MatchResult, Outcome};
use crate::core::{MatchConfig, PlayerSlot};
use crate::error::{Error, Result};
use crate::round::RoundEngine;
use crate::store::{ScoreStore, StorageBackend};

/// One participant's line in the report.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayerResult {
    pub slot: PlayerSlot,
    pub name: String,
    pub score: u32,
    pub outcome: Outcome,
}

/// Final result of a match, ready to show and record.
///
/// Not `Clone`: `record` takes the report by value.
#[derive(Debug, PartialEq, Eq)]
pub struct MatchReport {
    result: MatchResult,
    players: Vec<PlayerResult>,
}

impl MatchReport {
    /// Build the report for a finished match.
    ///
    /// Fails with `InvalidState` if the engine is still in progress, and with
    /// `InvalidConfiguration` if the config and engine disagree on players.
    pub fn from_engine(engine: &RoundEngine, config: &MatchConfig) -> Result<Self> {
        let scores = engine.final_scores()?;
        if scores.player_count() != config.mode().player_count() {
            return Err(Error::config("config and engine have different player counts"));
        }

        let result = MatchResult::from_scores(scores);
        let players = scores
            .iter()
            .map(|(slot, &score)| {
                let name = config
                    .player_name(slot)
                    .ok_or_else(|| Error::config(format!("no name for {}", slot)))?;
                Ok(PlayerResult {
                    slot,
                    name: name.to_string(),
                    score,
                    outcome: result.outcome_for(slot),
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { result, players })
    }

    #[must_use]
    pub fn result(&self) -> MatchResult {
        self.result
    }

    #[must_use]
    pub fn players(&self) -> &[PlayerResult] {
        &self.players
    }

    #[must_use]
    pub fn player(&self, slot: PlayerSlot) -> Option<&PlayerResult> {
        self.players.iter().find(|p| p.slot == slot)
    }

    fn name_of(&self, slot: PlayerSlot) -> &str {
        self.player(slot).map(|p| p.name.as_str()).unwrap_or_default()
    }

    /// One-line result for the results screen.
    #[must_use]
    pub fn headline(&self) -> String {
        match self.result {
            MatchResult::Winner(slot) => format!("{} Wins!", self.name_of(slot)),
            MatchResult::Tie => "It's a Tie!".to_string(),
            MatchResult::Solo(score) => {
                format!("{} scored {} points!", self.name_of(PlayerSlot::One), score)
            }
        }
    }

    /// Text handed to the platform share sheet.
    #[must_use]
    pub fn share_text(&self) -> String {
        match self.result {
            MatchResult::Solo(score) => format!(
                "{} scored {} points in Image Guesser Game! Can you beat this?",
                self.name_of(PlayerSlot::One),
                score
            ),
            _ => {
                let mut text = self.headline();
                for p in &self.players {
                    text.push_str(&format!("\n{}: {} points", p.name, p.score));
                }
                text.push_str("\nCan you beat us?");
                text
            }
        }
    }

    /// Write every player's row update in a single store write.
    ///
    /// On a storage error no row is changed and the error is returned.
    pub fn record<B: StorageBackend>(self, store: &mut ScoreStore<B>) -> Result<()> {
        let results: Vec<_> = self
            .players
            .iter()
            .map(|p| (p.name.as_str(), p.score, p.outcome))
            .collect();
        store.record_outcomes(&results)?;
        info!(result = ?self.result, players = self.players.len(), "match recorded");
        Ok(())
    }
}
