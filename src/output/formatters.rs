//! Formatting utilities for terminal output

use crate::core::{Feedback, LetterScore, Word};
use colored::Colorize;

/// Format a guess with its feedback as colored tiles
#[must_use]
pub fn colored_guess(guess: &Word, feedback: Feedback) -> String {
    guess
        .letters()
        .zip(feedback.scores())
        .map(|(letter, score)| {
            let tile = format!(" {} ", letter.to_ascii_uppercase());
            match score {
                LetterScore::Correct => tile.black().on_green().bold().to_string(),
                LetterScore::Present => tile.black().on_yellow().bold().to_string(),
                LetterScore::Absent => tile.white().on_bright_black().to_string(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format a finished round as a spoiler-free emoji grid
#[must_use]
pub fn share_grid(feedbacks: &[Feedback]) -> String {
    feedbacks
        .iter()
        .map(|f| f.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn share_grid_joins_rows() {
        let target = word("shade");
        let feedbacks = vec![
            Feedback::score(&target, &word("crane")),
            Feedback::score(&target, &word("shade")),
        ];

        let grid = share_grid(&feedbacks);
        let rows: Vec<&str> = grid.lines().collect();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1], "🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_grid_empty() {
        assert_eq!(share_grid(&[]), "");
    }

    #[test]
    fn colored_guess_contains_letters() {
        let target = word("shade");
        let guess = word("slate");
        let rendered = colored_guess(&guess, Feedback::score(&target, &guess));

        for letter in ['S', 'L', 'A', 'T', 'E'] {
            assert!(rendered.contains(letter), "missing {letter}");
        }
    }
}
