//! Guess validation
//!
//! A guess must be a dictionary word and, once letters have been revealed,
//! must keep using them: every revealed letter at least as many times as it
//! appears in the target, and every confirmed position with its exact
//! letter. Validation runs against the revealed state as it stood before
//! the guess, and only a fully valid guess mutates round state.

use crate::core::Word;
use crate::wordlists::Dictionary;
use rustc_hash::{FxHashMap, FxHashSet};
use std::fmt;

/// Reason a guess was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    NotInDictionary,
    MissingRevealed,
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotInDictionary => write!(f, "Word not in dictionary!"),
            Self::MissingRevealed => {
                write!(f, "Guess must include all revealed letters in correct positions!")
            }
        }
    }
}

impl std::error::Error for Rejection {}

/// Validate a guess against the dictionary and hard-mode constraints
///
/// # Errors
/// Returns the first failed check: dictionary membership, then revealed
/// letter frequency, then confirmed positions.
pub fn validate(
    guess: &Word,
    dictionary: &Dictionary,
    target: &Word,
    revealed_letters: &FxHashSet<char>,
    correct_positions: &FxHashMap<usize, char>,
) -> Result<(), Rejection> {
    if !dictionary.contains(guess) {
        return Err(Rejection::NotInDictionary);
    }

    // Revealed letters must reappear with the target's true frequency
    for &letter in revealed_letters {
        if guess.count_of(letter) < target.count_of(letter) {
            return Err(Rejection::MissingRevealed);
        }
    }

    // Confirmed positions must hold their exact letter
    for (&position, &letter) in correct_positions {
        if guess.letter_at(position) != letter {
            return Err(Rejection::MissingRevealed);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn dictionary() -> Dictionary {
        let answers = ["apple", "abbey", "brink", "amber", "crane"]
            .iter()
            .map(|s| word(s))
            .collect();
        Dictionary::new(answers, &[])
    }

    #[test]
    fn rejects_unknown_word() {
        let result = validate(
            &word("xyzzy"),
            &dictionary(),
            &word("apple"),
            &FxHashSet::default(),
            &FxHashMap::default(),
        );

        assert_eq!(result, Err(Rejection::NotInDictionary));
        assert_eq!(
            Rejection::NotInDictionary.to_string(),
            "Word not in dictionary!"
        );
    }

    #[test]
    fn accepts_any_dictionary_word_before_reveals() {
        let result = validate(
            &word("crane"),
            &dictionary(),
            &word("apple"),
            &FxHashSet::default(),
            &FxHashMap::default(),
        );

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_guess_missing_revealed_letter() {
        // 'a' was revealed; "brink" has no 'a'.
        let revealed: FxHashSet<char> = ['a'].into_iter().collect();

        let result = validate(
            &word("brink"),
            &dictionary(),
            &word("apple"),
            &revealed,
            &FxHashMap::default(),
        );

        assert_eq!(result, Err(Rejection::MissingRevealed));
    }

    #[test]
    fn accepts_guess_reusing_revealed_letter() {
        let revealed: FxHashSet<char> = ['a'].into_iter().collect();

        let result = validate(
            &word("amber"),
            &dictionary(),
            &word("apple"),
            &revealed,
            &FxHashMap::default(),
        );

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn revealed_letter_requires_target_frequency() {
        // Target "abbey" has two b's; once 'b' is revealed a guess with a
        // single 'b' falls short.
        let revealed: FxHashSet<char> = ['b'].into_iter().collect();

        let result = validate(
            &word("brink"),
            &dictionary(),
            &word("abbey"),
            &revealed,
            &FxHashMap::default(),
        );

        assert_eq!(result, Err(Rejection::MissingRevealed));

        let result = validate(
            &word("abbey"),
            &dictionary(),
            &word("abbey"),
            &revealed,
            &FxHashMap::default(),
        );

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn rejects_wrong_letter_at_confirmed_position() {
        let correct: FxHashMap<usize, char> = [(0, 'a')].into_iter().collect();

        let result = validate(
            &word("brink"),
            &dictionary(),
            &word("apple"),
            &FxHashSet::default(),
            &correct,
        );

        assert_eq!(result, Err(Rejection::MissingRevealed));
    }

    #[test]
    fn accepts_exact_letter_at_confirmed_position() {
        let revealed: FxHashSet<char> = ['a', 'p'].into_iter().collect();
        let correct: FxHashMap<usize, char> = [(0, 'a'), (1, 'p')].into_iter().collect();

        let result = validate(
            &word("apple"),
            &dictionary(),
            &word("apple"),
            &revealed,
            &correct,
        );

        assert_eq!(result, Ok(()));
    }

    #[test]
    fn dictionary_check_runs_first() {
        // Unknown word with hard-mode violations still reports dictionary.
        let revealed: FxHashSet<char> = ['a'].into_iter().collect();

        let result = validate(
            &word("zzzzz"),
            &dictionary(),
            &word("apple"),
            &revealed,
            &FxHashMap::default(),
        );

        assert_eq!(result, Err(Rejection::NotInDictionary));
    }
}
