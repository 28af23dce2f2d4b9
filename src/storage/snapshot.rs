//! Persisted JSON snapshot shapes
//!
//! Saves use camelCase keys, `revealedLetters` as an array, and
//! `correctPositions` as an object keyed by decimal position.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Storage key for the in-progress round snapshot
pub const STATE_KEY: &str = "wordget-state";

/// Storage key for aggregate statistics
pub const STATS_KEY: &str = "wordget-stats";

/// Storage key for the last completed round record
pub const LAST_ROUND_KEY: &str = "wordget-last-completed-round";

/// Snapshot of an in-progress (or just-finished) round
///
/// The `date` field gates freshness: a snapshot from a different calendar
/// day is ignored on load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoundSnapshot {
    pub date: String,
    pub target_word: String,
    pub round: u32,
    pub current_guess: String,
    pub guesses: Vec<String>,
    pub current_row: usize,
    pub revealed_letters: Vec<char>,
    pub correct_positions: BTreeMap<u8, char>,
    pub incorrect_guesses: Vec<char>,
    pub game_over: bool,
    pub won: bool,
}

/// Snapshot of cross-round statistics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub win_count: u32,
    pub streak_count: u32,
    pub last_played_date: String,
    #[serde(default)]
    pub last_game_won: bool,
}

/// Record of the last completed round, used to number a fresh session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LastCompletedRound {
    pub round: u32,
    pub date: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_snapshot_camel_case_keys() {
        let snapshot = RoundSnapshot {
            date: "2024-03-15".to_string(),
            target_word: "crane".to_string(),
            round: 2,
            current_guess: "sl".to_string(),
            guesses: vec!["slate".to_string()],
            current_row: 1,
            revealed_letters: vec!['a', 'e'],
            correct_positions: BTreeMap::from([(2, 'a'), (4, 'e')]),
            incorrect_guesses: vec!['l', 's', 't'],
            game_over: false,
            won: false,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"targetWord\":\"crane\""));
        assert!(json.contains("\"revealedLetters\":[\"a\",\"e\"]"));
        assert!(json.contains("\"incorrectGuesses\""));
        assert!(json.contains("\"currentRow\":1"));

        // Positions serialize as an object keyed by decimal position
        assert!(json.contains("\"correctPositions\":{\"2\":\"a\",\"4\":\"e\"}"));

        let restored: RoundSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn stats_snapshot_round_trip() {
        let snapshot = StatsSnapshot {
            win_count: 12,
            streak_count: 3,
            last_played_date: "2024-03-15".to_string(),
            last_game_won: true,
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        assert!(json.contains("\"winCount\":12"));
        assert!(json.contains("\"streakCount\":3"));

        let restored: StatsSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, snapshot);
    }

    #[test]
    fn stats_snapshot_last_game_won_defaults() {
        // Older saves predate the lastGameWon field.
        let json = r#"{"winCount":5,"streakCount":2,"lastPlayedDate":"2024-03-14"}"#;
        let restored: StatsSnapshot = serde_json::from_str(json).unwrap();

        assert_eq!(restored.win_count, 5);
        assert!(!restored.last_game_won);
    }

    #[test]
    fn last_completed_round_round_trip() {
        let record = LastCompletedRound {
            round: 4,
            date: "2024-03-15".to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        let restored: LastCompletedRound = serde_json::from_str(&json).unwrap();
        assert_eq!(restored, record);
    }
}
