//! Common CLI utilities shared across all CLI commands.
//!
//! This module provides:
//! - Output helpers: `print_success`, `print_error`, `print_warning`, `print_info`
//! - Prompt helpers: `prompt_string`, `value_or_prompt`, `prompt_confirm`
//! - `report`: render a `ScreenAction` to the terminal

use crate::state::{ScreenAction, ScreenId};
use anyhow::{Context, Result};
use std::io::{self, Write};

// =============================================================================
// Output Helpers
// =============================================================================

/// Print a success message with a checkmark prefix.
pub fn print_success(msg: &str) {
    println!("\u{2713} {}", msg);
}

/// Print an error message with an X prefix to stderr.
pub fn print_error(msg: &str) {
    eprintln!("\u{2717} {}", msg);
}

/// Print a warning message with a warning sign prefix.
pub fn print_warning(msg: &str) {
    println!("\u{26A0}\u{FE0F} {}", msg);
}

/// Print an info message with an info sign prefix.
pub fn print_info(msg: &str) {
    println!("\u{2139}\u{FE0F} {}", msg);
}

/// Render what a screen asked for.
///
/// A CLI invocation runs a single screen, so navigation only prints a hint
/// about the command that would get there.
pub fn report(action: &ScreenAction) {
    match action {
        ScreenAction::None => {}
        ScreenAction::ShowMessage { content, .. } => print_success(content),
        ScreenAction::Navigate(ScreenId::Login) => {
            print_info("You are not logged in. Run 'lavajato login' first.");
        }
        ScreenAction::Navigate(ScreenId::WasheryList) => {
            print_info("Run 'lavajato list' to browse washeries.");
        }
        ScreenAction::Navigate(ScreenId::WasheryDetail(id)) => {
            print_info(&format!("Run 'lavajato show {}' for details.", id));
        }
        ScreenAction::Navigate(_) => {}
    }
}

// =============================================================================
// Prompt Helpers
// =============================================================================

/// Prompt the user for a string input with an optional default value.
///
/// Returns the default if they pressed Enter.
pub fn prompt_string(label: &str, default: Option<&str>) -> Result<String> {
    if let Some(def) = default {
        print!("{} [{}]: ", label, def);
    } else {
        print!("{}: ", label);
    }
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    let trimmed = input.trim();
    if trimmed.is_empty() {
        Ok(default.unwrap_or("").to_string())
    } else {
        Ok(trimmed.to_string())
    }
}

/// Use `value` when given, otherwise ask for it.
pub fn value_or_prompt(value: Option<String>, label: &str, default: Option<&str>) -> Result<String> {
    match value {
        Some(value) => Ok(value),
        None => prompt_string(label, default),
    }
}

/// Prompt the user for a yes/no confirmation.
pub fn prompt_confirm(message: &str) -> Result<bool> {
    print!("{} [y/N]: ", message);
    io::stdout().flush().context("Failed to flush stdout")?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Failed to read input")?;

    let trimmed = input.trim().to_lowercase();
    Ok(trimmed == "y" || trimmed == "yes")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_or_prompt_uses_given_value() {
        assert_eq!(
            value_or_prompt(Some("ana@example.com".to_string()), "Email", None).unwrap(),
            "ana@example.com"
        );
    }
}
