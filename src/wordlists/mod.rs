//! Word lists and guess dictionary
//!
//! Provides embedded word lists compiled into the binary and the combined
//! dictionary used for guess validation.

mod dictionary;
mod embedded;
pub mod loader;

pub use dictionary::Dictionary;
pub use embedded::{ANSWERS, ANSWERS_COUNT, EXTRA_GUESSES, EXTRA_GUESSES_COUNT};
