//! Core domain types for the word game
//!
//! Fundamental types for words, guess feedback, and deterministic daily word
//! selection. All logic here is pure and has clear mathematical properties.

mod feedback;
mod selector;
mod word;

pub use feedback::{Feedback, LetterScore};
pub use selector::select_word;
pub use word::{Word, WordError};
