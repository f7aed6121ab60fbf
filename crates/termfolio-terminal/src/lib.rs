//! Command registry for the portfolio terminal.
//!
//! Commands implement the `Command` trait and are registered by name. The
//! registry resolves a submitted line (easter eggs first, then commands and
//! aliases, then the lifecycle pseudo-commands) and always produces a
//! `CommandOutput`; nothing crosses this boundary as an error.

pub mod completion;
mod content_commands;
pub mod easter_eggs;
mod interpreter;
mod settings_commands;
mod system_commands;

/// Register the portfolio pages (help, about, projects, resume, ...).
pub use content_commands::register_content_commands;
/// A single executable command trait.
pub use interpreter::Command;
/// Output produced by a command (text, error, signals).
pub use interpreter::CommandOutput;
/// Registry of available commands with dispatch.
pub use interpreter::CommandRegistry;
/// Per-dispatch context passed to every command.
pub use interpreter::Environment;
pub use interpreter::{EXIT_HINT, not_found_message};
/// Register `themes` and `sound`.
pub use settings_commands::register_settings_commands;
pub use settings_commands::{SOUND_USAGE, THEME_SUBCOMMANDS, parse_sound_switch, theme_not_found};
/// Register the simulated shell commands (ls, cd, cat, ...).
pub use system_commands::register_system_commands;

/// Register every built-in command into a registry.
pub fn register_builtins(reg: &mut CommandRegistry) {
    register_content_commands(reg);
    register_system_commands(reg);
    register_settings_commands(reg);
}

/// A registry holding every built-in command.
pub fn builtin_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_builtins(&mut reg);
    reg
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(line: &str) -> CommandOutput {
        let theme = termfolio_skin::default_theme();
        let mut env = Environment::new(&theme);
        builtin_registry().dispatch(line, &mut env)
    }

    #[test]
    fn every_command_runs_without_arguments() {
        let reg = builtin_registry();
        for cmd in reg.list_commands() {
            let out = run(cmd.name());
            match cmd.name() {
                "clear" => assert_eq!(out, CommandOutput::Clear),
                "cd" | "cat" => assert!(out.is_error()),
                "echo" => assert_eq!(out, CommandOutput::Text(String::new())),
                name => assert!(!out.text().is_empty(), "{name} produced no output"),
            }
        }
    }

    #[test]
    fn registry_is_complete() {
        let reg = builtin_registry();
        for name in [
            "help", "about", "skills", "projects", "resume", "experience", "education",
            "contact", "achievements", "welcome", "whoami", "pwd", "ls", "cd", "cat", "echo",
            "history", "date", "themes", "sound", "clear",
        ] {
            assert!(reg.resolve(name).is_some(), "{name}");
        }
    }

    #[test]
    fn unmatched_input_is_not_found() {
        for line in ["foo", "Help", "sudo", "rm -rf /", "themes2"] {
            assert!(run(line).text().contains("command not found"), "{line}");
        }
    }

    #[test]
    fn easter_eggs_answer_before_lookup() {
        assert!(run("time").text().contains("What do you think this is, a clock?"));
        assert!(run("sudo make me a sandwich").text().contains("Nice try!"));
    }
}
