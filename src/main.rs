//! Wordget - CLI
//!
//! Daily word-guessing game for the terminal with TUI and plain CLI modes.

use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use wordget::{
    commands::{run_simple, run_stats},
    engine::Engine,
    storage::FileStore,
    wordlists::{loader::load_from_file, loader::words_from_slice, Dictionary, EXTRA_GUESSES},
};

#[derive(Parser)]
#[command(
    name = "wordget",
    about = "Daily word-guessing game: six tries, hard mode, streak tracking",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Override today's date (YYYY-MM-DD) for a reproducible puzzle
    #[arg(short, long, global = true)]
    date: Option<NaiveDate>,

    /// Wordlist: 'builtin' (default) or path to a custom answers file
    #[arg(short = 'w', long, global = true, default_value = "builtin")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (playable without TUI)
    Simple,

    /// Show persisted win count and streak
    Stats,
}

/// Load the dictionary based on the -w flag
///
/// A custom answers file keeps the builtin extra-guess list so obscure but
/// valid guesses still work.
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    match wordlist_mode {
        "builtin" => Ok(Dictionary::builtin()),
        path => {
            let answers = load_from_file(path)?;
            anyhow::ensure!(!answers.is_empty(), "wordlist '{path}' has no valid words");
            Ok(Dictionary::new(answers, &words_from_slice(EXTRA_GUESSES)))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let today = cli
        .date
        .unwrap_or_else(|| chrono::Local::now().date_naive());

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let storage = FileStore::open_default()?;
            let engine = Engine::new(&dictionary, storage, today);

            use wordget::interactive::{run_tui, App};
            run_tui(App::new(engine))
        }
        Commands::Simple => {
            let storage = FileStore::open_default()?;
            let engine = Engine::new(&dictionary, storage, today);
            run_simple(engine).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Stats => {
            let storage = FileStore::open_default()?;
            run_stats(&storage);
            Ok(())
        }
    }
}
