//! Combined guess dictionary
//!
//! Two disjoint lists make up the dictionary: answer words (candidates for
//! the daily target) and extra guess words (accepted as guesses, never
//! selected as targets). Membership in either makes a guess valid.

use crate::core::Word;
use crate::wordlists::loader::words_from_slice;
use crate::wordlists::{ANSWERS, EXTRA_GUESSES};
use rustc_hash::FxHashSet;

/// Answer list plus set-based membership over all valid guess words
pub struct Dictionary {
    answers: Vec<Word>,
    valid: FxHashSet<String>,
}

impl Dictionary {
    /// Build a dictionary from an answer list and extra valid guesses
    #[must_use]
    pub fn new(answers: Vec<Word>, extra_guesses: &[Word]) -> Self {
        let mut valid: FxHashSet<String> = answers.iter().map(|w| w.text().to_string()).collect();
        valid.extend(extra_guesses.iter().map(|w| w.text().to_string()));

        Self { answers, valid }
    }

    /// Build the dictionary from the embedded word lists
    #[must_use]
    pub fn builtin() -> Self {
        Self::new(
            words_from_slice(ANSWERS),
            &words_from_slice(EXTRA_GUESSES),
        )
    }

    /// Answer words in selection order
    #[must_use]
    pub fn answers(&self) -> &[Word] {
        &self.answers
    }

    /// Check whether a word is a valid guess
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.valid.contains(word.text())
    }

    /// Total number of valid guess words
    #[must_use]
    pub fn len(&self) -> usize {
        self.valid.len()
    }

    /// Check whether the dictionary has no words
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.valid.is_empty()
    }
}
