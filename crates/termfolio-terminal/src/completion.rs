//! Tab-completion candidates.
//!
//! The line is trimmed and split on single spaces. The first word completes
//! against every typeable command name; `themes <partial>` completes against
//! its subcommands and `themes set <partial>` against the theme catalogue.

use termfolio_skin::builtin_names;

use crate::interpreter::CommandRegistry;
use crate::settings_commands::THEME_SUBCOMMANDS;

/// Candidates for the last word of `input`. Empty when nothing applies.
pub fn candidates(registry: &CommandRegistry, input: &str) -> Vec<String> {
    let words: Vec<&str> = input.trim().split(' ').collect();
    match words.as_slice() {
        [first] => registry.completions(first),
        ["themes", partial] => THEME_SUBCOMMANDS
            .iter()
            .filter(|sub| sub.starts_with(*partial))
            .map(|sub| sub.to_string())
            .collect(),
        ["themes", "set", partial] => builtin_names()
            .filter(|name| name.starts_with(*partial))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    }
}
