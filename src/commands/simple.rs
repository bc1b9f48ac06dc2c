//! Simple interactive CLI mode
//!
//! Text-based game loop without TUI

use crate::dictionary::RealWordChecker;
use crate::game::WordValidator;
use crate::output::formatters::{length_badge, score_bar};
use crate::wordlists::loader::random_root;
use colored::Colorize;
use std::io::{self, Write};

/// Game-loop commands entered instead of a candidate word
///
/// Commands are single letters only: candidates need at least three
/// letters, so 'q' and 'n' can never be a valid submission. Word-length
/// inputs like "new" or "quit" always go to the validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Quit,
    NewRound,
}

fn command_for(input: &str) -> Option<Command> {
    match input.trim().to_lowercase().as_str() {
        "q" => Some(Command::Quit),
        "n" => Some(Command::NewRound),
        _ => None,
    }
}

/// Score line with a progress bar against a nominal 100-point round
fn score_line(score: u32) -> String {
    format!("Score: {:<4} [{}]", score, score_bar(score, 20))
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple<C: RealWordChecker>(root_pool: &[String], checker: C) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║               Word Scramble - Interactive Mode               ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("Spell real words from the letters of the root word.");
    println!("Rules: at least 3 letters, not the root word itself, no repeats,");
    println!("and each letter only as often as the root word contains it.\n");
    println!("Commands: 'q' to exit, 'n' for a new root word\n");

    let mut rng = rand::rng();
    let mut session = WordValidator::new(random_root(root_pool, &mut rng), checker);

    loop {
        println!("────────────────────────────────────────────────────────────");
        println!(
            "Root word: {}   {}",
            session.root_word().text().to_uppercase().bright_yellow().bold(),
            score_line(session.score()).bright_cyan()
        );
        println!("────────────────────────────────────────────────────────────");

        if !session.used_words().is_empty() {
            println!("\nYour words:");
            for word in session.used_words() {
                println!(
                    "  {} {}",
                    length_badge(word.chars().count()).bright_black(),
                    word
                );
            }
        }
        println!();

        let input = get_user_input("Enter your word ('q' quit, 'n' new round)")?;

        match command_for(&input) {
            Some(Command::Quit) => {
                println!(
                    "\n👋 Thanks for playing! Final score: {}\n",
                    session.score().to_string().bright_cyan().bold()
                );
                return Ok(());
            }
            Some(Command::NewRound) => {
                session.start_round(random_root(root_pool, &mut rng));
                println!("\n🔄 New round started!\n");
                continue;
            }
            None => {}
        }

        match session.submit(&input) {
            Ok(accepted) => {
                println!(
                    "\n{} {} {}\n",
                    "✓".green().bold(),
                    accepted.word.to_uppercase().bright_white().bold(),
                    format!("+{} points", accepted.score_delta).green()
                );
            }
            Err(rejection) => {
                println!(
                    "\n{} {}",
                    "✗".red().bold(),
                    rejection.title().bright_red().bold()
                );
                println!("  {}\n", rejection.message(session.root_word().text()));
            }
        }
    }
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letter_shortcuts_are_commands() {
        assert_eq!(command_for("q"), Some(Command::Quit));
        assert_eq!(command_for(" Q "), Some(Command::Quit));
        assert_eq!(command_for("n"), Some(Command::NewRound));
        assert_eq!(command_for("N"), Some(Command::NewRound));
    }

    #[test]
    fn word_length_input_is_never_a_command() {
        // "new" and "quit" are real words a player may want to submit
        assert_eq!(command_for("new"), None);
        assert_eq!(command_for("quit"), None);
        assert_eq!(command_for("exit"), None);
        assert_eq!(command_for("nest"), None);
    }

    #[test]
    fn submittable_command_words_reach_the_validator() {
        use crate::core::Word;
        use crate::dictionary::Dictionary;

        let dict = Dictionary::from_words(["new"]);
        let mut session = WordValidator::new(Word::new("sinew").unwrap(), dict);

        // "new" is spellable from "sinew" and must be playable
        assert_eq!(command_for("new"), None);
        let accepted = session.submit("new").unwrap();
        assert_eq!(accepted.word, "new");
        assert_eq!(accepted.score_delta, 3);
    }

    #[test]
    fn score_line_includes_bar() {
        let line = score_line(50);
        assert!(line.starts_with("Score: 50"));
        assert!(line.contains("██████████░░░░░░░░░░"));

        let empty = score_line(0);
        assert!(empty.contains(&"░".repeat(20)));
    }
}
