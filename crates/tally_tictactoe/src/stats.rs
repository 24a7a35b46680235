//! Running win/draw tally.

use super::{Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Win and draw counters that survive board resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Stats {
    x_wins: u32,
    o_wins: u32,
    draws: u32,
}

impl Stats {
    /// Creates a zeroed tally.
    pub fn new() -> Self {
        Self::default()
    }

    /// Games won by X.
    pub fn x_wins(&self) -> u32 {
        self.x_wins
    }

    /// Games won by O.
    pub fn o_wins(&self) -> u32 {
        self.o_wins
    }

    /// Games drawn.
    pub fn draws(&self) -> u32 {
        self.draws
    }

    /// Games won by `player`.
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    /// Finished games counted so far.
    pub fn total(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    /// Counts one finished game. `InProgress` is ignored.
    #[instrument(skip(self))]
    pub(crate) fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Won(Player::X) => self.x_wins += 1,
            Outcome::Won(Player::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
            Outcome::InProgress => return,
        }
        debug!(x_wins = self.x_wins, o_wins = self.o_wins, draws = self.draws, "Tally updated");
    }

    /// Zeroes all counters.
    pub(crate) fn clear(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_each_outcome() {
        let mut stats = Stats::new();
        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Won(Player::X));
        stats.record(Outcome::Won(Player::O));
        stats.record(Outcome::Draw);
        assert_eq!(stats.x_wins(), 2);
        assert_eq!(stats.o_wins(), 1);
        assert_eq!(stats.draws(), 1);
        assert_eq!(stats.total(), 4);
        assert_eq!(stats.wins(Player::O), 1);
    }

    #[test]
    fn test_in_progress_is_not_counted() {
        let mut stats = Stats::new();
        stats.record(Outcome::InProgress);
        assert_eq!(stats, Stats::default());
    }

    #[test]
    fn test_serializes_as_named_counters() {
        let mut stats = Stats::new();
        stats.record(Outcome::Won(Player::O));
        assert_eq!(
            serde_json::to_value(stats).unwrap(),
            serde_json::json!({ "x_wins": 0, "o_wins": 1, "draws": 0 })
        );
    }

    #[test]
    fn test_clear() {
        let mut stats = Stats::new();
        stats.record(Outcome::Draw);
        stats.clear();
        assert_eq!(stats.total(), 0);
    }
}
