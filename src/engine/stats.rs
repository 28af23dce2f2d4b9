//! Cross-round statistics tracking
//!
//! Aggregate stats live outside any single round and only change when a
//! round reaches a terminal state. Dates are supplied by the caller so the
//! policy stays pure and testable.

use crate::storage::StatsSnapshot;
use chrono::NaiveDate;

/// Lifetime win count and calendar-day streak
///
/// Streak policy: a win extends the streak only when the previous completed
/// round was also a win, played on the immediately preceding calendar day.
/// A second win on the same day keeps the streak where it is, any other win
/// restarts it at 1, and a loss resets it to 0.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameStats {
    pub win_count: u32,
    pub streak_count: u32,
    pub last_played_date: Option<NaiveDate>,
    pub last_game_won: bool,
}

impl GameStats {
    /// Record a terminal round result
    ///
    /// `today` and `yesterday` are caller-supplied calendar dates;
    /// `last_played_date` is updated on every call, win or loss.
    pub fn record(&mut self, won: bool, today: NaiveDate, yesterday: NaiveDate) {
        if won {
            self.win_count += 1;
            self.streak_count = if self.last_game_won && self.last_played_date == Some(yesterday) {
                self.streak_count + 1
            } else if self.last_game_won && self.last_played_date == Some(today) {
                self.streak_count.max(1)
            } else {
                1
            };
            self.last_game_won = true;
        } else {
            self.streak_count = 0;
            self.last_game_won = false;
        }

        self.last_played_date = Some(today);
    }

    /// Rebuild stats from a persisted snapshot
    ///
    /// An unparseable date is treated as never having played.
    #[must_use]
    pub fn from_snapshot(snapshot: &StatsSnapshot) -> Self {
        Self {
            win_count: snapshot.win_count,
            streak_count: snapshot.streak_count,
            last_played_date: snapshot.last_played_date.parse().ok(),
            last_game_won: snapshot.last_game_won,
        }
    }

    /// Convert stats to the persisted snapshot shape
    #[must_use]
    pub fn to_snapshot(&self) -> StatsSnapshot {
        StatsSnapshot {
            win_count: self.win_count,
            streak_count: self.streak_count,
            last_played_date: self
                .last_played_date
                .map(|d| d.to_string())
                .unwrap_or_default(),
            last_game_won: self.last_game_won,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn first_win_starts_streak() {
        let mut stats = GameStats::default();
        let today = date(2024, 3, 15);

        stats.record(true, today, date(2024, 3, 14));

        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.streak_count, 1);
        assert_eq!(stats.last_played_date, Some(today));
        assert!(stats.last_game_won);
    }

    #[test]
    fn consecutive_day_win_extends_streak() {
        let mut stats = GameStats::default();
        stats.record(true, date(2024, 3, 14), date(2024, 3, 13));
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.win_count, 2);
        assert_eq!(stats.streak_count, 2);
    }

    #[test]
    fn same_day_second_win_keeps_streak() {
        let mut stats = GameStats::default();
        stats.record(true, date(2024, 3, 14), date(2024, 3, 13));
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.win_count, 3);
        assert_eq!(stats.streak_count, 2);
    }

    #[test]
    fn day_gap_restarts_streak() {
        let mut stats = GameStats::default();
        stats.record(true, date(2024, 3, 10), date(2024, 3, 9));
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.streak_count, 1);
    }

    #[test]
    fn loss_resets_streak_to_zero() {
        let mut stats = GameStats::default();
        stats.record(true, date(2024, 3, 14), date(2024, 3, 13));
        stats.record(false, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.win_count, 1);
        assert_eq!(stats.streak_count, 0);
        assert_eq!(stats.last_played_date, Some(date(2024, 3, 15)));
        assert!(!stats.last_game_won);
    }

    #[test]
    fn win_after_previous_day_loss_starts_fresh() {
        // Yesterday was played but lost, so today's win does not extend.
        let mut stats = GameStats::default();
        stats.record(false, date(2024, 3, 14), date(2024, 3, 13));
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.streak_count, 1);
    }

    #[test]
    fn loss_records_played_date() {
        let mut stats = GameStats::default();
        stats.record(false, date(2024, 3, 15), date(2024, 3, 14));

        assert_eq!(stats.win_count, 0);
        assert_eq!(stats.last_played_date, Some(date(2024, 3, 15)));
    }

    #[test]
    fn snapshot_round_trip() {
        let mut stats = GameStats::default();
        stats.record(true, date(2024, 3, 15), date(2024, 3, 14));

        let snapshot = stats.to_snapshot();
        assert_eq!(snapshot.last_played_date, "2024-03-15");

        let restored = GameStats::from_snapshot(&snapshot);
        assert_eq!(restored, stats);
    }

    #[test]
    fn snapshot_with_bad_date_treated_as_unplayed() {
        let snapshot = StatsSnapshot {
            win_count: 4,
            streak_count: 2,
            last_played_date: "not a date".to_string(),
            last_game_won: true,
        };

        let restored = GameStats::from_snapshot(&snapshot);
        assert_eq!(restored.win_count, 4);
        assert_eq!(restored.last_played_date, None);
    }
}
