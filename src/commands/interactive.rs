//! Interactive prompts used by commands that need the user's go-ahead.

use std::io::{self, Write};

use crate::error::Result;
use crate::storefront::Confirm;

/// Prompt for yes/no confirmation on stdin.
///
/// Returns `true` only for `y` or `Y`.
///
/// ```no_run
/// # use boxoffice::commands::interactive::confirm;
/// if confirm("Delete ticket 4").unwrap() {
///     // proceed
/// }
/// ```
pub fn confirm(prompt: &str) -> Result<bool> {
    print!("{prompt}? [y/N] ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().eq_ignore_ascii_case("y"))
}

/// Asks on the terminal.
pub struct PromptConfirm;

impl Confirm for PromptConfirm {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        confirm(prompt)
    }
}

/// Accepts without asking (`--force`).
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, prompt: &str) -> Result<bool> {
        tracing::debug!(prompt, "confirmation skipped");
        Ok(true)
    }
}
