//! User interface module - interaction (prompts) and formatting.
//!
//! Separates concerns:
//! - `formatter` - Pure formatting functions
//! - This module - Interactive prompts and user input handling

use std::io::{self, BufRead, Write};

use anyhow::Result;

pub mod formatter;

// Re-export formatter functions for convenience
pub use formatter::{
    display_error, display_plan, display_status, display_success, display_version_change,
    display_warning, format_plan,
};

/// Prompts for a line of text, falling back to `default` on empty input.
///
/// # Arguments
/// * `prompt` - The question to display (without the default suffix)
/// * `default` - Value used when the user just presses Enter
pub fn prompt_with_default(prompt: &str, default: &str) -> Result<String> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    prompt_from(&mut stdin.lock(), &mut stdout.lock(), prompt, default)
}

/// Prompts user to confirm with a yes/no question.
///
/// Empty input yields `default`; otherwise "y"/"yes" (case-insensitive) is
/// confirmation and anything else is a refusal.
pub fn confirm_action(prompt: &str, default: bool) -> Result<bool> {
    let hint = if default { "Y/n" } else { "y/N" };
    let answer = prompt_with_default(&format!("{} ({})", prompt, hint), "")?;
    Ok(parse_confirmation(&answer, default))
}

fn prompt_from<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> Result<String> {
    if default.is_empty() {
        write!(output, "{}: ", prompt)?;
    } else {
        write!(output, "{} [{}]: ", prompt, default)?;
    }
    output.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    let answer = line.trim();

    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer.to_string())
    }
}

fn parse_confirmation(answer: &str, default: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default,
        "y" | "yes" => true,
        _ => false,
    }
}
