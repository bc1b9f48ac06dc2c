//! Word Scramble - CLI
//!
//! Anagram word game with TUI and CLI modes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_scramble::{
    commands::{check_word, run_simple},
    dictionary::Dictionary,
    output::print_check_result,
    wordlists::{START_WORDS, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_scramble",
    about = "Spell real words from the letters of a random root word",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Root word pool: 'embedded' (default) or path to a word list file
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,

    /// Dictionary: 'embedded' (default) or path to a word list file
    #[arg(short = 'd', long, global = true, default_value = "embedded")]
    dictionary: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (interactive game without TUI)
    Simple,

    /// Check a single candidate word against a root word
    Check {
        /// The root word whose letters bound the candidate
        root: String,

        /// The candidate word to validate
        word: String,
    },
}

/// Load the root word pool based on the -w flag
fn load_root_pool(wordlist_mode: &str) -> Result<Vec<String>> {
    use word_scramble::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(words_from_slice(START_WORDS)),
        path => load_from_file(path).with_context(|| format!("Could not load word list '{path}'")),
    }
}

/// Load the dictionary based on the -d flag
fn load_dictionary(dictionary_mode: &str) -> Result<Dictionary> {
    match dictionary_mode {
        "embedded" => Ok(Dictionary::embedded()),
        path => Dictionary::load_from_file(path)
            .with_context(|| format!("Could not load dictionary '{path}'")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let root_pool = load_root_pool(&cli.wordlist)?;
    anyhow::ensure!(!root_pool.is_empty(), "Root word pool is empty");

    let dictionary = load_dictionary(&cli.dictionary)?;
    anyhow::ensure!(!dictionary.is_empty(), "Dictionary is empty");

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(root_pool, dictionary),
        Commands::Simple => run_simple(&root_pool, dictionary).map_err(|e| anyhow::anyhow!(e)),
        Commands::Check { root, word } => {
            let result = check_word(&root, &word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_check_result(&result);
            Ok(())
        }
    }
}

fn run_play_command(root_pool: Vec<String>, dictionary: Dictionary) -> Result<()> {
    use word_scramble::interactive::{App, run_tui};

    let app = App::new(root_pool, dictionary);
    run_tui(app)
}
