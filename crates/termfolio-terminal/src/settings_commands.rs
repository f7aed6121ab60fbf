//! Preference commands: `themes` and `sound`.
//!
//! These are the only handlers that touch the preference store.

use termfolio_skin::{builtin_names, load_builtin};
use termfolio_types::error::{Result, TermfolioError};

use crate::interpreter::{Command, CommandOutput, CommandRegistry, Environment};

/// Subcommands `themes` accepts, for completion.
pub const THEME_SUBCOMMANDS: [&str; 2] = ["ls", "set"];

/// Usage lines appended to `sound` status and error replies.
pub const SOUND_USAGE: &str = "Usage: sound on | off\nExample: sound off";

/// Register `themes` and `sound`.
pub fn register_settings_commands(reg: &mut CommandRegistry) {
    reg.register(Box::new(ThemesCmd));
    reg.register(Box::new(SoundCmd));
}

/// Parse a `sound` argument: `on`/`enable` and `off`/`disable`,
/// case-insensitive.
pub fn parse_sound_switch(arg: &str) -> Option<bool> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "enable" => Some(true),
        "off" | "disable" => Some(false),
        _ => None,
    }
}

/// `Theme '<name>' not found...` for an unknown theme.
pub fn theme_not_found(name: &str) -> String {
    format!("Theme '{name}' not found. Type 'themes' to see available themes.")
}

// ---------------------------------------------------------------------------
// themes
// ---------------------------------------------------------------------------

struct ThemesCmd;

impl ThemesCmd {
    fn listing(active: &str) -> String {
        let mut lines = vec![String::new(), "Available themes:".to_string()];
        for name in builtin_names() {
            let label = load_builtin(name).map(|t| t.label).unwrap_or_default();
            let marker = if name == active { "  [active]" } else { "" };
            lines.push(format!("  • {name:<16} {label}{marker}"));
        }
        lines.push(String::new());
        lines.push("Usage: themes set <theme-name>".to_string());
        lines.push("Example: themes set nord".to_string());
        lines.push(String::new());
        lines.join("\n")
    }
}

impl Command for ThemesCmd {
    fn name(&self) -> &str {
        "themes"
    }
    fn description(&self) -> &str {
        "Manage terminal themes (themes ls, themes set <name>)"
    }
    fn usage(&self) -> &str {
        "themes [ls | set <name>]"
    }
    fn category(&self) -> &str {
        "settings"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        match args {
            [] | ["ls", ..] => Ok(CommandOutput::Text(Self::listing(&env.theme.name))),
            ["set", name, ..] if !name.is_empty() => {
                let theme =
                    load_builtin(name).map_err(|_| TermfolioError::Command(theme_not_found(name)))?;
                if let Some(prefs) = env.prefs.as_deref_mut() {
                    prefs.set_theme(name);
                }
                Ok(CommandOutput::Text(format!(
                    "Theme switched to {} ({}).",
                    theme.label, theme.name
                )))
            },
            _ => Err(TermfolioError::Command(
                "Invalid themes command. Usage: themes, themes ls or themes set <theme-name>"
                    .to_string(),
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// sound
// ---------------------------------------------------------------------------

struct SoundCmd;
impl Command for SoundCmd {
    fn name(&self) -> &str {
        "sound"
    }
    fn description(&self) -> &str {
        "Toggle sound effects (sound on/off)"
    }
    fn usage(&self) -> &str {
        "sound [on | off]"
    }
    fn category(&self) -> &str {
        "settings"
    }
    fn execute(&self, args: &[&str], env: &mut Environment<'_>) -> Result<CommandOutput> {
        let Some(arg) = args.first() else {
            let enabled = env.prefs.as_ref().is_some_and(|p| p.is_sound_enabled());
            let status = if enabled { "on" } else { "off" };
            return Ok(CommandOutput::Text(format!(
                "Sound effects are currently {status}.\n\n{SOUND_USAGE}"
            )));
        };
        let Some(enabled) = parse_sound_switch(arg) else {
            return Err(TermfolioError::Command(format!(
                "Invalid sound command.\n\n{SOUND_USAGE}"
            )));
        };
        if let Some(prefs) = env.prefs.as_deref_mut() {
            prefs.set_sound_enabled(enabled);
        }
        let reply = if enabled {
            "Sound effects enabled."
        } else {
            "Sound effects disabled."
        };
        Ok(CommandOutput::Text(reply.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use termfolio_platform::{MemoryStore, PreferenceStore};
    use termfolio_skin::Theme;

    use super::*;

    fn registry() -> CommandRegistry {
        let mut reg = CommandRegistry::new();
        register_settings_commands(&mut reg);
        reg
    }

    fn prefs() -> PreferenceStore {
        PreferenceStore::load(Box::new(MemoryStore::new()), "dracula")
    }

    fn run(line: &str, theme: &Theme, prefs: &mut PreferenceStore) -> CommandOutput {
        let mut env = Environment::new(theme);
        env.prefs = Some(prefs);
        registry().dispatch(line, &mut env)
    }

    #[test]
    fn parse_switch_words() {
        assert_eq!(parse_sound_switch("on"), Some(true));
        assert_eq!(parse_sound_switch("ENABLE"), Some(true));
        assert_eq!(parse_sound_switch("Off"), Some(false));
        assert_eq!(parse_sound_switch("disable"), Some(false));
        assert_eq!(parse_sound_switch("loud"), None);
    }

    #[test]
    fn themes_lists_catalogue_and_marks_active() {
        let mut prefs = prefs();
        let nord = load_builtin("nord").unwrap();
        let text = run("themes", &nord, &mut prefs).text().to_string();
        assert!(text.contains("Available themes:"));
        for name in builtin_names() {
            assert!(text.contains(name), "{name}");
        }
        let active: Vec<&str> = text.lines().filter(|l| l.contains("[active]")).collect();
        assert_eq!(active.len(), 1);
        assert!(active[0].contains("nord"));
        assert_eq!(run("themes ls", &nord, &mut prefs), run("themes", &nord, &mut prefs));
    }

    #[test]
    fn themes_set_switches_preference() {
        let mut prefs = prefs();
        let theme = prefs.theme().clone();
        let out = run("themes set gruvbox", &theme, &mut prefs);
        assert!(matches!(out, CommandOutput::Text(ref s) if s.contains("gruvbox")));
        assert_eq!(prefs.theme().name, "gruvbox");
    }

    #[test]
    fn themes_set_unknown_keeps_previous() {
        let mut prefs = prefs();
        let theme = prefs.theme().clone();
        let out = run("themes set synthwave", &theme, &mut prefs);
        assert_eq!(out, CommandOutput::Error(theme_not_found("synthwave")));
        assert_eq!(prefs.theme().name, "dracula");
    }

    #[test]
    fn themes_bad_usage() {
        let mut prefs = prefs();
        let theme = prefs.theme().clone();
        assert!(run("themes set", &theme, &mut prefs).is_error());
        assert!(run("themes paint", &theme, &mut prefs).is_error());
    }

    #[test]
    fn sound_status_and_switches() {
        let mut prefs = prefs();
        let theme = prefs.theme().clone();
        assert!(
            run("sound", &theme, &mut prefs)
                .text()
                .starts_with("Sound effects are currently off.")
        );
        assert_eq!(
            run("sound on", &theme, &mut prefs),
            CommandOutput::Text("Sound effects enabled.".into())
        );
        assert!(prefs.is_sound_enabled());
        run("sound on", &theme, &mut prefs);
        assert!(prefs.is_sound_enabled());
        run("sound disable", &theme, &mut prefs);
        assert!(!prefs.is_sound_enabled());
    }

    #[test]
    fn sound_invalid_argument() {
        let mut prefs = prefs();
        let theme = prefs.theme().clone();
        let out = run("sound maybe", &theme, &mut prefs);
        assert!(out.is_error());
        assert!(out.text().contains("Usage: sound on | off"));
        assert!(!prefs.is_sound_enabled());
    }

    #[test]
    fn works_without_preferences() {
        let theme = termfolio_skin::default_theme();
        let mut env = Environment::new(&theme);
        let out = registry().dispatch("sound on", &mut env);
        assert_eq!(out, CommandOutput::Text("Sound effects enabled.".into()));
        let out = registry().dispatch("themes set nord", &mut env);
        assert!(out.text().contains("nord"));
    }
}
