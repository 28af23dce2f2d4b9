//! Per-round mutable state
//!
//! One Round is a single playthrough of up to six guesses against one
//! target word. The revealed-letter set and confirmed-position map only
//! grow within a round, and no guesses are accepted once it is over.

use crate::core::Word;
use crate::storage::RoundSnapshot;
use chrono::NaiveDate;
use rustc_hash::{FxHashMap, FxHashSet};

/// Maximum number of guesses per round
pub const MAX_GUESSES: usize = 6;

/// Length of every guess and target word
pub const WORD_LENGTH: usize = 5;

/// Mutable state of one puzzle round
#[derive(Debug, Clone)]
pub struct Round {
    target: Word,
    round_number: u32,
    current_guess: String,
    guesses: Vec<Word>,
    revealed_letters: FxHashSet<char>,
    correct_positions: FxHashMap<usize, char>,
    incorrect_letters: FxHashSet<char>,
    game_over: bool,
    won: bool,
}

impl Round {
    /// Start a fresh round against `target`
    #[must_use]
    pub fn new(target: Word, round_number: u32) -> Self {
        Self {
            target,
            round_number,
            current_guess: String::new(),
            guesses: Vec::new(),
            revealed_letters: FxHashSet::default(),
            correct_positions: FxHashMap::default(),
            incorrect_letters: FxHashSet::default(),
            game_over: false,
            won: false,
        }
    }

    /// The round's target word
    #[must_use]
    pub fn target(&self) -> &Word {
        &self.target
    }

    /// 1-based round number within the day
    #[must_use]
    pub const fn round_number(&self) -> u32 {
        self.round_number
    }

    /// The in-progress guess buffer (0-5 letters)
    #[must_use]
    pub fn current_guess(&self) -> &str {
        &self.current_guess
    }

    /// Accepted guesses in submission order
    #[must_use]
    pub fn guesses(&self) -> &[Word] {
        &self.guesses
    }

    /// The row currently being typed into; equals accepted guess count
    #[must_use]
    pub fn current_row(&self) -> usize {
        self.guesses.len()
    }

    /// Letters confirmed to occur somewhere in the target
    #[must_use]
    pub fn revealed_letters(&self) -> &FxHashSet<char> {
        &self.revealed_letters
    }

    /// Positions confirmed to hold a specific letter
    #[must_use]
    pub fn correct_positions(&self) -> &FxHashMap<usize, char> {
        &self.correct_positions
    }

    /// Letters guessed that do not occur in the target
    #[must_use]
    pub fn incorrect_letters(&self) -> &FxHashSet<char> {
        &self.incorrect_letters
    }

    /// Whether the round has reached a terminal state
    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_over
    }

    /// Whether the round ended in a win
    #[must_use]
    pub const fn is_won(&self) -> bool {
        self.won
    }

    /// Append a lowercase letter to the guess buffer, bounded at 5
    pub(crate) fn push_letter(&mut self, letter: char) {
        if self.current_guess.len() < WORD_LENGTH {
            self.current_guess.push(letter);
        }
    }

    /// Remove the last letter from the guess buffer, if any
    pub(crate) fn pop_letter(&mut self) {
        self.current_guess.pop();
    }

    /// Accept a validated guess and fold its reveals into round state
    ///
    /// Every guessed letter lands in exactly one set: confirmed position,
    /// revealed-somewhere, or known-absent. Sets only grow.
    pub(crate) fn record_guess(&mut self, guess: &Word) {
        for (i, letter) in guess.letters().enumerate() {
            if self.target.letter_at(i) == letter {
                self.correct_positions.insert(i, letter);
                self.revealed_letters.insert(letter);
            } else if self.target.contains(letter) {
                self.revealed_letters.insert(letter);
            } else {
                self.incorrect_letters.insert(letter);
            }
        }

        self.guesses.push(guess.clone());
        self.current_guess.clear();

        if guess == &self.target {
            self.won = true;
            self.game_over = true;
        } else if self.guesses.len() >= MAX_GUESSES {
            self.game_over = true;
        }
    }

    /// Serialize the round for persistence, stamped with `date`
    #[must_use]
    pub fn to_snapshot(&self, date: NaiveDate) -> RoundSnapshot {
        let mut revealed: Vec<char> = self.revealed_letters.iter().copied().collect();
        revealed.sort_unstable();

        let mut incorrect: Vec<char> = self.incorrect_letters.iter().copied().collect();
        incorrect.sort_unstable();

        RoundSnapshot {
            date: date.to_string(),
            target_word: self.target.text().to_string(),
            round: self.round_number,
            current_guess: self.current_guess.clone(),
            guesses: self.guesses.iter().map(|w| w.text().to_string()).collect(),
            current_row: self.current_row(),
            revealed_letters: revealed,
            correct_positions: self
                .correct_positions
                .iter()
                .map(|(&pos, &letter)| (pos as u8, letter))
                .collect(),
            incorrect_guesses: incorrect,
            game_over: self.game_over,
            won: self.won,
        }
    }

    /// Rebuild a round from a snapshot by replaying its guesses
    ///
    /// Replay keeps the derived sets consistent with the target even if the
    /// stored sets were tampered with. Returns None for snapshots that are
    /// structurally impossible (bad words, too many guesses, guesses after
    /// a terminal state).
    #[must_use]
    pub fn from_snapshot(snapshot: &RoundSnapshot) -> Option<Self> {
        let target = Word::new(&snapshot.target_word).ok()?;
        if snapshot.guesses.len() > MAX_GUESSES {
            return None;
        }

        let mut round = Self::new(target, snapshot.round);
        for text in &snapshot.guesses {
            if round.game_over {
                return None;
            }
            let guess = Word::new(text).ok()?;
            round.record_guess(&guess);
        }

        if !round.game_over {
            let buffer = snapshot.current_guess.to_lowercase();
            if buffer.len() <= WORD_LENGTH && buffer.chars().all(|c| c.is_ascii_lowercase()) {
                round.current_guess = buffer;
            }
        }

        Some(round)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    }

    #[test]
    fn fresh_round_is_empty() {
        let round = Round::new(word("apple"), 1);

        assert_eq!(round.current_row(), 0);
        assert_eq!(round.guesses().len(), 0);
        assert!(round.revealed_letters().is_empty());
        assert!(!round.is_over());
        assert!(!round.is_won());
    }

    #[test]
    fn push_letter_bounded_at_five() {
        let mut round = Round::new(word("apple"), 1);
        for letter in "abcdefg".chars() {
            round.push_letter(letter);
        }

        assert_eq!(round.current_guess(), "abcde");
    }

    #[test]
    fn pop_letter_on_empty_buffer() {
        let mut round = Round::new(word("apple"), 1);
        round.pop_letter();
        assert_eq!(round.current_guess(), "");
    }

    #[test]
    fn record_guess_updates_reveals() {
        let mut round = Round::new(word("apple"), 1);
        round.record_guess(&word("abbey"));

        // a correct at 0, e present, b and y absent
        assert!(round.revealed_letters().contains(&'a'));
        assert!(round.revealed_letters().contains(&'e'));
        assert!(!round.revealed_letters().contains(&'b'));
        assert_eq!(round.correct_positions().get(&0), Some(&'a'));
        assert!(round.incorrect_letters().contains(&'b'));
        assert!(round.incorrect_letters().contains(&'y'));
        assert_eq!(round.current_row(), 1);
    }

    #[test]
    fn correct_positions_match_target() {
        let mut round = Round::new(word("apple"), 1);
        round.record_guess(&word("abbey"));
        round.record_guess(&word("ample"));

        for (&pos, &letter) in round.correct_positions() {
            assert_eq!(round.target().letter_at(pos), letter);
        }
    }

    #[test]
    fn winning_guess_terminates() {
        let mut round = Round::new(word("apple"), 1);
        round.record_guess(&word("apple"));

        assert!(round.is_over());
        assert!(round.is_won());
        assert_eq!(round.current_row(), 1);
    }

    #[test]
    fn six_misses_terminate_without_win() {
        let mut round = Round::new(word("apple"), 1);
        for _ in 0..MAX_GUESSES {
            round.record_guess(&word("crane"));
        }

        assert!(round.is_over());
        assert!(!round.is_won());
        assert_eq!(round.current_row(), MAX_GUESSES);
    }

    #[test]
    fn snapshot_round_trip_preserves_state() {
        let mut round = Round::new(word("apple"), 2);
        round.record_guess(&word("abbey"));
        round.push_letter('a');
        round.push_letter('m');

        let snapshot = round.to_snapshot(date());
        let restored = Round::from_snapshot(&snapshot).unwrap();

        assert_eq!(restored.target(), round.target());
        assert_eq!(restored.round_number(), 2);
        assert_eq!(restored.guesses(), round.guesses());
        assert_eq!(restored.current_guess(), "am");
        assert_eq!(restored.revealed_letters(), round.revealed_letters());
        assert_eq!(restored.correct_positions(), round.correct_positions());
        assert_eq!(restored.incorrect_letters(), round.incorrect_letters());
        assert_eq!(restored.is_over(), round.is_over());
        assert_eq!(restored.is_won(), round.is_won());
    }

    #[test]
    fn snapshot_round_trip_terminal_state() {
        let mut round = Round::new(word("apple"), 1);
        round.record_guess(&word("apple"));

        let restored = Round::from_snapshot(&round.to_snapshot(date())).unwrap();
        assert!(restored.is_over());
        assert!(restored.is_won());
    }

    #[test]
    fn snapshot_with_invalid_target_rejected() {
        let mut snapshot = Round::new(word("apple"), 1).to_snapshot(date());
        snapshot.target_word = "not a word".to_string();

        assert!(Round::from_snapshot(&snapshot).is_none());
    }

    #[test]
    fn snapshot_with_too_many_guesses_rejected() {
        let mut snapshot = Round::new(word("apple"), 1).to_snapshot(date());
        snapshot.guesses = vec!["crane".to_string(); MAX_GUESSES + 1];

        assert!(Round::from_snapshot(&snapshot).is_none());
    }

    #[test]
    fn snapshot_replay_ignores_tampered_sets() {
        let mut round = Round::new(word("apple"), 1);
        round.record_guess(&word("abbey"));

        let mut snapshot = round.to_snapshot(date());
        snapshot.revealed_letters = vec!['z'];

        let restored = Round::from_snapshot(&snapshot).unwrap();
        assert!(!restored.revealed_letters().contains(&'z'));
        assert!(restored.revealed_letters().contains(&'a'));
    }
}
