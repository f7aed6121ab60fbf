//! Command trait, registry, and dispatch logic.
//!
//! A submitted line is resolved in a fixed order: easter eggs, registered
//! commands (and aliases), the lifecycle pseudo-commands, and finally the
//! "command not found" fallthrough. Dispatch never fails: handler errors are
//! folded into `CommandOutput::Error`.

use std::collections::HashMap;

use chrono::{DateTime, Local};

use termfolio_platform::PreferenceStore;
use termfolio_skin::Theme;
use termfolio_types::error::Result;

use crate::easter_eggs;

/// Output produced by a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOutput {
    /// Plain text, possibly multi-line.
    Text(String),
    /// A user-facing error message (unknown command, bad argument).
    Error(String),
    /// Signal to truncate the scrollback.
    Clear,
    /// Signal to rebuild the session from persisted preferences.
    Reload,
    /// Command produced no visible output.
    None,
}

impl CommandOutput {
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    /// Text to record in the scrollback. Signals record an empty string.
    pub fn text(&self) -> &str {
        match self {
            Self::Text(s) | Self::Error(s) => s,
            Self::Clear | Self::Reload | Self::None => "",
        }
    }
}

/// Per-dispatch context handed to every command.
pub struct Environment<'a> {
    /// Theme the output will be rendered with.
    pub theme: &'a Theme,
    /// Preference store, for the commands that read or write preferences.
    pub prefs: Option<&'a mut PreferenceStore>,
    /// Commands submitted this session, oldest first.
    pub history: &'a [String],
    /// Wall-clock time of the dispatch.
    pub now: DateTime<Local>,
}

impl<'a> Environment<'a> {
    /// An environment with no preferences and no history.
    pub fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            prefs: None,
            history: &[],
            now: Local::now(),
        }
    }
}

/// A single executable command.
pub trait Command {
    /// The command name (what the user types).
    fn name(&self) -> &str;

    /// One-line description.
    fn description(&self) -> &str;

    /// Usage string (e.g. "cat <file>").
    fn usage(&self) -> &str;

    fn category(&self) -> &str {
        "portfolio"
    }

    /// Execute with the arguments that followed the command name.
    ///
    /// An `Err` carries the message shown to the user.
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput>;
}

/// Reply to `exit` / `quit`.
pub const EXIT_HINT: &str = "Type \"reload\" to refresh the page and close the terminal.";

const EXIT_NAMES: [&str; 2] = ["exit", "quit"];
const RELOAD_NAMES: [&str; 2] = ["reload", "restart"];

/// The fallthrough reply for an unrecognized command name.
pub fn not_found_message(name: &str) -> String {
    format!(
        "{name}: command not found\n\n\
         💡 Did you mean: help, about, skills, projects, contact, or themes?\n\
         Type 'help' to see all available commands."
    )
}

/// Registry of available commands with dispatch.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
    aliases: HashMap<String, String>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            aliases: HashMap::new(),
        }
    }

    /// Register a command. Replaces any existing command with the same name.
    pub fn register(&mut self, cmd: Box<dyn Command>) {
        self.commands.insert(cmd.name().to_string(), cmd);
    }

    /// Make `alias` run the handler registered as `target`.
    pub fn register_alias(&mut self, alias: &str, target: &str) {
        if !self.commands.contains_key(target) {
            log::warn!("Alias '{alias}' points at unregistered command '{target}'");
        }
        self.aliases.insert(alias.to_string(), target.to_string());
    }

    /// Look up a command by exact, case-sensitive name or alias.
    pub fn resolve(&self, name: &str) -> Option<&dyn Command> {
        let target = self.aliases.get(name).map_or(name, String::as_str);
        self.commands.get(target).map(|c| c.as_ref())
    }

    /// Registered commands, sorted by name.
    pub fn list_commands(&self) -> Vec<&dyn Command> {
        let mut cmds: Vec<&dyn Command> = self.commands.values().map(|c| c.as_ref()).collect();
        cmds.sort_by_key(|c| c.name().to_string());
        cmds
    }

    /// Every name a user can type as the first token: commands, aliases and
    /// lifecycle pseudo-commands. Sorted, no duplicates.
    pub fn command_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .commands
            .keys()
            .chain(self.aliases.keys())
            .cloned()
            .chain(EXIT_NAMES.iter().chain(&RELOAD_NAMES).map(|s| s.to_string()))
            .collect();
        names.sort();
        names.dedup();
        names
    }

    /// Names starting with `prefix`, sorted.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        self.command_names()
            .into_iter()
            .filter(|name| name.starts_with(prefix))
            .collect()
    }

    /// Resolve and run one input line.
    pub fn dispatch(&self, line: &str, env: &mut Environment<'_>) -> CommandOutput {
        let trimmed = line.trim();
        let mut tokens = trimmed.split(' ');
        let name = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        if name.is_empty() {
            return CommandOutput::None;
        }

        if let Some(reply) = easter_eggs::lookup(trimmed) {
            log::debug!("Easter egg matched: {trimmed}");
            return CommandOutput::Text(reply.to_string());
        }

        if let Some(cmd) = self.resolve(name) {
            log::debug!("Dispatching '{}' with {} arg(s)", cmd.name(), args.len());
            return match cmd.execute(&args, env) {
                Ok(output) => output,
                Err(e) => CommandOutput::Error(e.to_string()),
            };
        }

        if EXIT_NAMES.contains(&name) {
            return CommandOutput::Text(EXIT_HINT.to_string());
        }
        if RELOAD_NAMES.contains(&name) {
            log::info!("Reload requested");
            return CommandOutput::Reload;
        }

        log::debug!("Unknown command: {name}");
        CommandOutput::Error(not_found_message(name))
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use termfolio_types::error::TermfolioError;

    use super::*;

    struct EchoArgs;
    impl Command for EchoArgs {
        fn name(&self) -> &str {
            "say"
        }
        fn description(&self) -> &str {
            "Repeat arguments"
        }
        fn usage(&self) -> &str {
            "say <text>"
        }
        fn execute(&self, args: &[&str], _env: &mut Environment<'_>) -> Result<CommandOutput> {
            if args.is_empty() {
                return Err(TermfolioError::Command("say: nothing to say".into()));
            }
            Ok(CommandOutput::Text(args.join(" ")))
        }
    }

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        reg.register(Box::new(EchoArgs));
        reg.register_alias("speak", "say");
        reg
    }

    fn run(reg: &CommandRegistry, line: &str) -> CommandOutput {
        let theme = termfolio_skin::default_theme();
        let mut env = Environment::new(&theme);
        reg.dispatch(line, &mut env)
    }

    #[test]
    fn dispatches_registered_command() {
        assert_eq!(
            run(&registry(), "say hi there"),
            CommandOutput::Text("hi there".into())
        );
    }

    #[test]
    fn alias_shares_handler() {
        assert_eq!(run(&registry(), "speak up"), run(&registry(), "say up"));
    }

    #[test]
    fn handler_error_becomes_error_output() {
        assert_eq!(
            run(&registry(), "say"),
            CommandOutput::Error("say: nothing to say".into())
        );
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let out = run(&registry(), "SAY hi");
        assert!(out.is_error());
        assert!(out.text().starts_with("SAY: command not found"));
    }

    #[test]
    fn empty_line_is_silent() {
        assert_eq!(run(&registry(), "   "), CommandOutput::None);
    }

    #[test]
    fn exit_and_quit_print_hint() {
        assert_eq!(run(&registry(), "exit"), CommandOutput::Text(EXIT_HINT.into()));
        assert_eq!(run(&registry(), "quit"), CommandOutput::Text(EXIT_HINT.into()));
    }

    #[test]
    fn reload_and_restart_signal() {
        assert_eq!(run(&registry(), "reload"), CommandOutput::Reload);
        assert_eq!(run(&registry(), "restart"), CommandOutput::Reload);
    }

    #[test]
    fn easter_eggs_win_over_registry() {
        let out = run(&registry(), "hello");
        assert!(out.text().contains("Hello there!"));
    }

    #[test]
    fn unknown_command_suggests_popular_ones() {
        let out = run(&registry(), "frobnicate --all");
        assert_eq!(out, CommandOutput::Error(not_found_message("frobnicate")));
        assert!(out.text().contains("command not found"));
        assert!(out.text().contains("help, about, skills, projects, contact, or themes"));
    }

    #[test]
    fn command_names_include_aliases_and_lifecycle() {
        let names = registry().command_names();
        assert_eq!(names, vec!["exit", "quit", "reload", "restart", "say", "speak"]);
    }

    #[test]
    fn completions_filter_by_prefix() {
        assert_eq!(registry().completions("s"), vec!["say", "speak"]);
        assert_eq!(registry().completions("re"), vec!["reload", "restart"]);
        assert!(registry().completions("z").is_empty());
    }

    #[test]
    fn dangling_alias_is_not_found() {
        let mut reg = registry();
        reg.register_alias("ghost", "missing");
        assert!(reg.resolve("ghost").is_none());
        assert!(run(&reg, "ghost").is_error());
    }

    #[test]
    fn signals_render_empty() {
        assert_eq!(CommandOutput::Clear.text(), "");
        assert_eq!(CommandOutput::Reload.text(), "");
        assert!(!CommandOutput::None.is_error());
    }
}
