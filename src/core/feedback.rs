//! Guess feedback scoring
//!
//! Scoring a guess against the target classifies each position as Correct
//! (right letter, right spot), Present (letter elsewhere in the target), or
//! Absent. Duplicate letters are handled with the standard two-pass rule:
//! exact matches consume a letter's budget first, then Present marks are
//! assigned left to right from whatever budget remains.

use super::Word;
use rustc_hash::FxHashMap;
use std::fmt;

/// Per-position classification of a guessed letter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LetterScore {
    Correct,
    Present,
    Absent,
}

/// Feedback for a full 5-letter guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feedback([LetterScore; 5]);

impl Feedback {
    /// Score `guess` against `target`
    ///
    /// # Algorithm
    /// 1. First pass: mark exact position matches Correct and deduct each
    ///    from the target's per-letter budget.
    /// 2. Second pass: for positions not yet Correct, mark Present while the
    ///    letter's budget lasts (scanning left to right), otherwise Absent.
    ///
    /// A repeated guess letter that occurs only once in the target therefore
    /// gets at most one non-Absent mark, with Correct taking priority over
    /// Present regardless of position order.
    ///
    /// # Examples
    /// ```
    /// use wordget::core::{Feedback, LetterScore, Word};
    ///
    /// let target = Word::new("shade").unwrap();
    /// let guess = Word::new("sames").unwrap();
    /// let feedback = Feedback::score(&target, &guess);
    ///
    /// assert_eq!(feedback.at(0), LetterScore::Correct); // first 's'
    /// assert_eq!(feedback.at(4), LetterScore::Absent); // second 's', budget spent
    /// ```
    #[must_use]
    pub fn score(target: &Word, guess: &Word) -> Self {
        let mut result = [LetterScore::Absent; 5];

        let mut budget: FxHashMap<u8, u8> = FxHashMap::default();
        for &b in target.bytes() {
            *budget.entry(b).or_insert(0) += 1;
        }

        // First pass: exact matches
        for i in 0..5 {
            if guess.bytes()[i] == target.bytes()[i] {
                result[i] = LetterScore::Correct;
                if let Some(count) = budget.get_mut(&guess.bytes()[i]) {
                    *count = count.saturating_sub(1);
                }
            }
        }

        // Second pass: present letters, left to right, from remaining budget
        for i in 0..5 {
            if result[i] == LetterScore::Correct {
                continue;
            }
            if let Some(count) = budget.get_mut(&guess.bytes()[i]) {
                if *count > 0 {
                    result[i] = LetterScore::Present;
                    *count -= 1;
                }
            }
        }

        Self(result)
    }

    /// Get the classification at a position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn at(self, position: usize) -> LetterScore {
        self.0[position]
    }

    /// Iterate over the five classifications in position order
    pub fn scores(self) -> impl Iterator<Item = LetterScore> {
        self.0.into_iter()
    }

    /// Check if this feedback is a winning guess (all Correct)
    #[must_use]
    pub fn is_win(self) -> bool {
        self.0.iter().all(|&s| s == LetterScore::Correct)
    }

    /// Convert feedback to an emoji row for summaries
    ///
    /// # Examples
    /// ```
    /// use wordget::core::{Feedback, Word};
    ///
    /// let target = Word::new("slate").unwrap();
    /// let guess = Word::new("crane").unwrap();
    /// assert_eq!(Feedback::score(&target, &guess).to_emoji(), "⬜⬜🟩⬜🟩");
    /// ```
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.0
            .iter()
            .map(|s| match s {
                LetterScore::Correct => '🟩',
                LetterScore::Present => '🟨',
                LetterScore::Absent => '⬜',
            })
            .collect()
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_emoji())
    }
}
