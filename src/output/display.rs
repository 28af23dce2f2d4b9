//! Display functions for command results

use super::formatters::share_grid;
use crate::core::Feedback;
use crate::engine::{GameStats, Round, MAX_GUESSES};
use colored::Colorize;

/// Print the persisted statistics
pub fn print_stats(stats: &GameStats) {
    println!("\n{}", "═".repeat(40).cyan());
    println!(" {} ", "WORDGET STATISTICS".bright_cyan().bold());
    println!("{}", "═".repeat(40).cyan());

    println!(
        "\n   Wins:        {}",
        stats.win_count.to_string().bright_green().bold()
    );
    println!(
        "   Streak:      {}",
        stats.streak_count.to_string().bright_yellow().bold()
    );

    match stats.last_played_date {
        Some(date) => println!("   Last played: {date}"),
        None => println!("   Last played: never"),
    }
    println!();
}

/// Print the end-of-round summary with the shareable grid
pub fn print_round_summary(round: &Round, feedbacks: &[Feedback]) {
    let score = if round.is_won() {
        round.guesses().len().to_string()
    } else {
        "X".to_string()
    };

    println!(
        "\nWordget round {} {}/{}",
        round.round_number(),
        score.bright_yellow().bold(),
        MAX_GUESSES
    );
    println!("{}\n", share_grid(feedbacks));
}
