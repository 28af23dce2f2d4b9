//! Wordget
//!
//! A daily word-guessing game: six guess rows of five letters, per-letter
//! feedback, a hard-mode constraint on revealed letters, and persisted
//! win/streak statistics. The target word is selected deterministically
//! from the calendar date, so everyone plays the same puzzle each day.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use wordget::engine::Engine;
//! use wordget::storage::MemoryStore;
//! use wordget::wordlists::Dictionary;
//!
//! let dictionary = Dictionary::builtin();
//! let today = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
//! let mut engine = Engine::new(&dictionary, MemoryStore::new(), today);
//!
//! for letter in "crane".chars() {
//!     engine.add_letter(letter);
//! }
//! let outcome = engine.submit_guess();
//! println!("{outcome:?}");
//! ```

// Core domain types
pub mod core;

// Game state machine
pub mod engine;

// Persistence gateway
pub mod storage;

// Word lists and dictionary
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
