//! Display functions for command results

use crate::commands::CheckResult;
use colored::Colorize;

/// Print the result of a one-shot word check
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Root: {}   Candidate: {}",
        result.root.to_uppercase().bright_yellow().bold(),
        result.candidate.to_uppercase().bright_white().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    match &result.outcome {
        Ok(accepted) => {
            println!(
                "\n{} {}",
                "✅ Accepted!".green().bold(),
                format!("+{} points", accepted.score_delta).bright_cyan()
            );
        }
        Err(rejection) => {
            println!("\n{} {}", "❌".red(), rejection.title().red().bold());
            println!("   {}", rejection.message(&result.root));
        }
    }
    println!();
}
