//! Game state machine
//!
//! The engine owns one round and the aggregate stats, sequences validation
//! and scoring for each submitted guess, and snapshots everything through
//! the persistence gateway. All operations are synchronous and defensive:
//! calls that are illegal in the current state are silent no-ops.

mod round;
mod stats;
mod validator;

pub use round::{Round, MAX_GUESSES, WORD_LENGTH};
pub use stats::GameStats;
pub use validator::{validate, Rejection};

use crate::core::{select_word, Feedback, Word};
use crate::storage::{
    read_json, write_json, LastCompletedRound, RoundSnapshot, StatsSnapshot, Storage,
    LAST_ROUND_KEY, STATE_KEY, STATS_KEY,
};
use crate::wordlists::Dictionary;
use chrono::NaiveDate;

/// Result of a `submit_guess` call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Buffer not full or round already over; nothing happened
    Ignored,
    /// Guess failed validation; state unchanged
    Rejected(Rejection),
    /// Guess accepted, round continues
    Accepted(Feedback),
    /// Guess accepted and matched the target
    Won(Feedback),
    /// Guess accepted and used the final row without matching
    Lost { feedback: Feedback, answer: Word },
}

/// Keyboard-facing knowledge about a single letter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LetterStatus {
    Unknown,
    Correct,
    Present,
    Absent,
}

/// The game state machine for one session
///
/// Owns the current round and stats exclusively; callers exposing it across
/// threads must serialize access externally.
pub struct Engine<'a, S: Storage> {
    dictionary: &'a Dictionary,
    storage: S,
    today: NaiveDate,
    round: Round,
    stats: GameStats,
}

impl<'a, S: Storage> Engine<'a, S> {
    /// Start a session for `today`, restoring any same-day saved state
    ///
    /// Stats load once at startup; a stale or malformed round snapshot is
    /// ignored and a fresh round begins at the next round number for the
    /// day.
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, storage: S, today: NaiveDate) -> Self {
        let stats = read_json::<StatsSnapshot>(&storage, STATS_KEY)
            .map(|s| GameStats::from_snapshot(&s))
            .unwrap_or_default();

        let round_number = next_round_number(&storage, today);

        let round = read_json::<RoundSnapshot>(&storage, STATE_KEY)
            .filter(|snapshot| snapshot.date == today.to_string())
            .and_then(|snapshot| Round::from_snapshot(&snapshot))
            .unwrap_or_else(|| {
                let target = select_word(today, round_number, dictionary.answers()).clone();
                Round::new(target, round_number)
            });

        Self {
            dictionary,
            storage,
            today,
            round,
            stats,
        }
    }

    /// The current round
    #[must_use]
    pub fn round(&self) -> &Round {
        &self.round
    }

    /// Aggregate statistics
    #[must_use]
    pub fn stats(&self) -> &GameStats {
        &self.stats
    }

    /// The session's calendar date
    #[must_use]
    pub const fn today(&self) -> NaiveDate {
        self.today
    }

    /// Append a letter to the guess buffer
    ///
    /// No-op when the round is over, the buffer is full, or the input is
    /// not an ASCII letter.
    pub fn add_letter(&mut self, letter: char) {
        if self.round.is_over() || !letter.is_ascii_alphabetic() {
            return;
        }
        self.round.push_letter(letter.to_ascii_lowercase());
    }

    /// Remove the last letter from the guess buffer
    pub fn delete_letter(&mut self) {
        if self.round.is_over() {
            return;
        }
        self.round.pop_letter();
    }

    /// Submit the current guess buffer
    ///
    /// Validation runs against the revealed state as it stood before this
    /// guess; only a valid guess mutates anything. Terminal transitions
    /// update stats and the last-completed-round record, and every accepted
    /// guess persists a fresh round snapshot.
    pub fn submit_guess(&mut self) -> SubmitOutcome {
        if self.round.is_over() || self.round.current_guess().len() != WORD_LENGTH {
            return SubmitOutcome::Ignored;
        }

        let Ok(guess) = Word::new(self.round.current_guess()) else {
            return SubmitOutcome::Ignored;
        };

        if let Err(rejection) = validate(
            &guess,
            self.dictionary,
            self.round.target(),
            self.round.revealed_letters(),
            self.round.correct_positions(),
        ) {
            return SubmitOutcome::Rejected(rejection);
        }

        let feedback = Feedback::score(self.round.target(), &guess);
        self.round.record_guess(&guess);

        let outcome = if self.round.is_won() {
            self.finish_round(true);
            SubmitOutcome::Won(feedback)
        } else if self.round.is_over() {
            self.finish_round(false);
            SubmitOutcome::Lost {
                feedback,
                answer: self.round.target().clone(),
            }
        } else {
            SubmitOutcome::Accepted(feedback)
        };

        self.persist_round();
        outcome
    }

    /// Start the next round of the day
    ///
    /// Only callable once the current round is terminal; re-selects the
    /// target with the incremented round number and leaves stats untouched.
    pub fn reset_round(&mut self) {
        if !self.round.is_over() {
            return;
        }

        let round_number = self.round.round_number() + 1;
        let target = select_word(self.today, round_number, self.dictionary.answers()).clone();
        self.round = Round::new(target, round_number);
        self.persist_round();
    }

    /// What the keyboard knows about a letter so far
    #[must_use]
    pub fn letter_status(&self, letter: char) -> LetterStatus {
        if self.round.revealed_letters().contains(&letter) {
            let confirmed = (0..WORD_LENGTH).any(|i| {
                self.round.target().letter_at(i) == letter
                    && self.round.correct_positions().contains_key(&i)
            });
            if confirmed {
                LetterStatus::Correct
            } else {
                LetterStatus::Present
            }
        } else if self.round.incorrect_letters().contains(&letter) {
            LetterStatus::Absent
        } else {
            LetterStatus::Unknown
        }
    }

    /// Feedback for an accepted guess row, if that row has been played
    #[must_use]
    pub fn row_feedback(&self, row: usize) -> Option<Feedback> {
        self.round
            .guesses()
            .get(row)
            .map(|guess| Feedback::score(self.round.target(), guess))
    }

    fn finish_round(&mut self, won: bool) {
        let yesterday = self.today.pred_opt().unwrap_or(self.today);
        self.stats.record(won, self.today, yesterday);

        write_json(&mut self.storage, STATS_KEY, &self.stats.to_snapshot());
        write_json(
            &mut self.storage,
            LAST_ROUND_KEY,
            &LastCompletedRound {
                round: self.round.round_number(),
                date: self.today.to_string(),
            },
        );
    }

    fn persist_round(&mut self) {
        let snapshot = self.round.to_snapshot(self.today);
        write_json(&mut self.storage, STATE_KEY, &snapshot);
    }
}

/// Compute the round number for a fresh session
///
/// Continues from the last completed round if it was finished today,
/// otherwise starts at 1.
fn next_round_number(storage: &dyn Storage, today: NaiveDate) -> u32 {
    read_json::<LastCompletedRound>(storage, LAST_ROUND_KEY)
        .filter(|record| record.date == today.to_string())
        .map_or(1, |record| record.round + 1)
}
