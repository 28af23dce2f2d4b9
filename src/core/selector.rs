//! Deterministic daily word selection
//!
//! Maps a calendar date and round number to an index in the answer list via
//! a Mulberry32 integer hash, so every player sees the same sequence of
//! target words on a given day without any server coordination.

use super::Word;
use chrono::{Datelike, NaiveDate};

/// Select the target word for a (date, round) pair
///
/// The seed is `year*10000 + month*100 + day`, multiplied by the 1-based
/// round number and truncated to 32 bits. The same inputs always yield the
/// same word; different rounds on the same day are not deduplicated.
///
/// # Panics
/// Panics if `answers` is empty.
///
/// # Examples
/// ```
/// use chrono::NaiveDate;
/// use wordget::core::select_word;
/// use wordget::wordlists::Dictionary;
///
/// let dictionary = Dictionary::builtin();
/// let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
/// let first = select_word(date, 1, dictionary.answers());
/// let again = select_word(date, 1, dictionary.answers());
/// assert_eq!(first, again);
/// ```
#[must_use]
pub fn select_word(date: NaiveDate, round: u32, answers: &[Word]) -> &Word {
    assert!(!answers.is_empty(), "answer list must not be empty");

    let index = (mulberry32(game_seed(date, round)) * answers.len() as f64) as usize;
    &answers[index]
}

/// Combine the date seed with the round number, truncated to 32 bits
fn game_seed(date: NaiveDate, round: u32) -> u32 {
    let date_seed =
        i64::from(date.year()) * 10_000 + i64::from(date.month()) * 100 + i64::from(date.day());
    (date_seed as u64).wrapping_mul(u64::from(round)) as u32
}

/// Mulberry32 mix producing a float in [0, 1)
///
/// All arithmetic is unsigned 32-bit with wraparound, matching the
/// JavaScript `Math.imul`/`>>>` formulation bit for bit.
fn mulberry32(seed: u32) -> f64 {
    let mut t = seed.wrapping_add(0x6d2b_79f5);
    t = (t ^ (t >> 15)).wrapping_mul(t | 1);
    t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
    f64::from(t ^ (t >> 14)) / 4_294_967_296.0
}
