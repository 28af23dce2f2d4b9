//! Simple interactive CLI mode
//!
//! Text-based playable game without TUI

use crate::engine::{Engine, SubmitOutcome, MAX_GUESSES, WORD_LENGTH};
use crate::output::{formatters::colored_guess, print_round_summary};
use crate::storage::Storage;
use colored::Colorize;
use std::io::{self, Write};

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<S: Storage>(mut engine: Engine<'_, S>) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                  Wordget - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Guess the 5-letter word of the day in {MAX_GUESSES} tries.");
    println!("After each guess the tiles show what you learned:\n");
    println!("  - Green:  right letter, right spot");
    println!("  - Yellow: letter is in the word, wrong spot");
    println!("  - Gray:   letter is not in the word\n");
    println!("Hard mode is on: revealed letters must be reused.");
    println!("Commands: 'quit' to exit\n");

    print_board(&engine);

    loop {
        if engine.round().is_over() {
            let feedbacks: Vec<_> = (0..engine.round().guesses().len())
                .filter_map(|row| engine.row_feedback(row))
                .collect();
            print_round_summary(engine.round(), &feedbacks);

            if engine.round().is_won() {
                println!("{}", "🎉 Congratulations! You won!".bright_green().bold());
            } else {
                println!(
                    "{}",
                    format!(
                        "Game over! The word was: {}",
                        engine.round().target().text().to_uppercase()
                    )
                    .bright_red()
                    .bold()
                );
            }

            println!(
                "\nWins: {}   Streak: {}",
                engine.stats().win_count.to_string().bright_green(),
                engine.stats().streak_count.to_string().bright_yellow()
            );

            match get_user_input("\nPlay again? (yes/no)")?.to_lowercase().as_str() {
                "yes" | "y" => {
                    engine.reset_round();
                    println!(
                        "\n🔄 Round {} started!\n",
                        engine.round().round_number()
                    );
                    continue;
                }
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        let row = engine.round().current_row() + 1;
        let input = get_user_input(&format!("Guess {row}/{MAX_GUESSES}"))?.to_lowercase();

        match input.as_str() {
            "quit" | "q" | "exit" => {
                println!("\n👋 Thanks for playing!\n");
                return Ok(());
            }
            word if word.len() == WORD_LENGTH && word.chars().all(|c| c.is_ascii_lowercase()) => {
                for letter in word.chars() {
                    engine.add_letter(letter);
                }

                match engine.submit_guess() {
                    SubmitOutcome::Rejected(rejection) => {
                        // Clear the buffer so the next line starts fresh
                        for _ in 0..WORD_LENGTH {
                            engine.delete_letter();
                        }
                        println!("❌ {rejection}\n");
                    }
                    SubmitOutcome::Ignored => {}
                    SubmitOutcome::Accepted(_)
                    | SubmitOutcome::Won(_)
                    | SubmitOutcome::Lost { .. } => {
                        print_board(&engine);
                    }
                }
            }
            _ => {
                println!("❌ Please enter exactly 5 letters, or 'quit'.\n");
            }
        }
    }
}

fn print_board<S: Storage>(engine: &Engine<'_, S>) {
    println!();
    for (row, guess) in engine.round().guesses().iter().enumerate() {
        if let Some(feedback) = engine.row_feedback(row) {
            println!("  {}", colored_guess(guess, feedback));
        }
    }
    println!();
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
