//! The terminal session controller.
//!
//! `Terminal` owns the session state, the command registry, the preference
//! store and the sound notifier. It turns input events into `reduce`
//! transitions and performs the persistence and audio side effects around
//! them.

use std::time::{Duration, Instant};

use chrono::Local;

use termfolio_audio::SoundNotifier;
use termfolio_platform::PreferenceStore;
use termfolio_skin::{Theme, is_builtin};
use termfolio_terminal::{
    CommandOutput, CommandRegistry, Environment, SOUND_USAGE, builtin_registry, completion,
    parse_sound_switch,
};
use termfolio_types::input::{InputEvent, Key, Shortcut};

use crate::boot::{BootSequence, BootStep};
use crate::edit;
use crate::session::{Action, HistoryEntry, SessionState};

/// What the presentation layer should do after an input event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    Continue,
    /// Rebuild the session (`Terminal::reload`).
    Reload,
    Quit,
}

/// Marker appended to the scrollback by Ctrl+C.
pub const INTERRUPT_MARKER: &str = "^C";

pub struct Terminal {
    state: SessionState,
    registry: CommandRegistry,
    prefs: PreferenceStore,
    sound: SoundNotifier,
    boot: BootSequence,
    /// Theme captured when the boot sequence started; every boot entry uses it.
    boot_theme: Option<Theme>,
    boot_delay: Duration,
}

impl Terminal {
    /// Create a session with every built-in command.
    pub fn new(prefs: PreferenceStore, sound: SoundNotifier, boot_delay: Duration) -> Self {
        Self::with_registry(builtin_registry(), prefs, sound, boot_delay)
    }

    pub fn with_registry(
        registry: CommandRegistry,
        prefs: PreferenceStore,
        mut sound: SoundNotifier,
        boot_delay: Duration,
    ) -> Self {
        let state = SessionState::new(prefs.theme().clone(), prefs.is_sound_enabled());
        sound.set_enabled(state.sound_enabled);
        log::info!(
            "Session created: theme={} sound={}",
            state.active_theme.name,
            state.sound_enabled
        );
        Self {
            state,
            registry,
            prefs,
            sound,
            boot: BootSequence::new(boot_delay),
            boot_theme: None,
            boot_delay,
        }
    }

    /// Discard the session and start a new one from the persisted
    /// preferences. The boot sequence runs again once started.
    pub fn reload(self) -> Self {
        let Self {
            registry,
            mut prefs,
            sound,
            boot_delay,
            ..
        } = self;
        prefs.reload();
        log::info!("Session reloaded");
        Self::with_registry(registry, prefs, sound, boot_delay)
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn theme(&self) -> &Theme {
        &self.state.active_theme
    }

    pub fn prefs(&self) -> &PreferenceStore {
        &self.prefs
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    // -- Boot --

    /// Begin the boot sequence. Later calls are no-ops.
    pub fn start_boot(&mut self, now: Instant) {
        if self.boot.start(now) {
            self.boot_theme = Some(self.state.active_theme.clone());
            log::debug!("Boot sequence started");
        }
    }

    /// Append every boot step that is due. Returns `true` if anything was
    /// appended.
    pub fn poll_boot(&mut self, now: Instant) -> bool {
        let steps = self.boot.poll(now);
        if steps.is_empty() {
            return false;
        }
        let theme = self
            .boot_theme
            .clone()
            .unwrap_or_else(|| self.state.active_theme.clone());
        for step in &steps {
            match step {
                BootStep::Message(msg) => {
                    let entry = HistoryEntry::system(*msg, theme.clone(), Local::now());
                    self.state.apply(Action::AddToHistory(entry));
                },
                BootStep::Welcome => {
                    let output = self.run("welcome", &theme);
                    self.record("welcome", &output, theme.clone());
                },
            }
        }
        true
    }

    /// When the next boot step is due, if the sequence is still running.
    pub fn next_boot_due(&self) -> Option<Instant> {
        self.boot.next_due()
    }

    // -- Input --

    /// Apply one input event.
    pub fn handle_input(&mut self, event: InputEvent) -> Signal {
        match event {
            InputEvent::TextInput(ch) => {
                self.update(|s| edit::insert_char(s, ch));
                self.sound.keystroke();
            },
            InputEvent::Backspace => self.update(edit::backspace),
            InputEvent::Submit => return self.submit(),
            InputEvent::Key(key) => self.key(key),
            InputEvent::Shortcut(shortcut) => return self.shortcut(shortcut),
            InputEvent::PointerMove { .. } | InputEvent::Scroll { .. } => {},
            InputEvent::Quit => return Signal::Quit,
        }
        Signal::Continue
    }

    fn key(&mut self, key: Key) {
        match key {
            Key::Up => self.update(edit::history_up),
            Key::Down => self.update(edit::history_down),
            Key::Left => self.update(edit::caret_left),
            Key::Right => self.update(edit::caret_right),
            Key::Home => self.update(edit::caret_start),
            Key::End => self.update(edit::caret_end),
            Key::Tab => self.tab_complete(),
        }
    }

    /// Complete the word being typed (see `edit::complete`).
    pub fn tab_complete(&mut self) {
        let candidates = completion::candidates(&self.registry, &self.state.input);
        self.update(|s| edit::complete(s, &candidates, Local::now()));
    }

    fn shortcut(&mut self, shortcut: Shortcut) -> Signal {
        match shortcut {
            Shortcut::EndOfInput => {
                return if self.state.input.is_empty() {
                    log::info!("End of input, quitting");
                    Signal::Quit
                } else {
                    Signal::Continue
                };
            },
            Shortcut::ClearScreen => self.state.apply(Action::ClearHistory),
            Shortcut::ClearLine => self.state.apply(Action::SetInput(String::new())),
            Shortcut::Cancel => {
                self.state.apply(Action::SetInput(String::new()));
                let marker = HistoryEntry::system(
                    INTERRUPT_MARKER,
                    self.state.active_theme.clone(),
                    Local::now(),
                );
                self.state.apply(Action::AddToHistory(marker));
            },
            Shortcut::CaretStart => self.update(edit::caret_start),
            Shortcut::CaretEnd => self.update(edit::caret_end),
        }
        self.sound.command_executed();
        Signal::Continue
    }

    // -- Submit --

    /// Submit the edit line.
    pub fn submit(&mut self) -> Signal {
        let line = self.state.input.trim().to_string();
        if line.is_empty() {
            return Signal::Continue;
        }
        self.sound.command_executed();

        let words: Vec<&str> = line.split(' ').collect();
        let signal = match words.as_slice() {
            ["sound", args @ ..] => {
                self.submit_sound(&line, args);
                Signal::Continue
            },
            ["clear", ..] => {
                self.state.apply(Action::ClearHistory);
                Signal::Continue
            },
            _ => self.submit_command(&line, &words),
        };

        self.state.apply(Action::SetInput(String::new()));
        self.state.apply(Action::SetCommandIndex(None));
        signal
    }

    fn submit_sound(&mut self, line: &str, args: &[&str]) {
        let target = match args.first() {
            None => Some(!self.state.sound_enabled),
            Some(arg) => parse_sound_switch(arg),
        };
        let output = match target {
            Some(enabled) => {
                self.set_sound(enabled);
                let word = if enabled { "ON" } else { "OFF" };
                CommandOutput::Text(format!("Sound is now {word}"))
            },
            None => CommandOutput::Error(format!("Invalid sound command.\n\n{SOUND_USAGE}")),
        };
        self.record(line, &output, self.state.active_theme.clone());
    }

    fn submit_command(&mut self, line: &str, words: &[&str]) -> Signal {
        // Switch first so the confirmation is recorded in the new theme.
        if let ["themes", "set", name, ..] = words
            && is_builtin(name)
        {
            self.prefs.set_theme(name);
            self.state
                .apply(Action::SetTheme(self.prefs.theme().clone()));
        }

        let theme = self.state.active_theme.clone();
        match self.run(line, &theme) {
            CommandOutput::Reload => Signal::Reload,
            CommandOutput::Clear => {
                self.state.apply(Action::ClearHistory);
                Signal::Continue
            },
            output => {
                self.record(line, &output, theme);
                Signal::Continue
            },
        }
    }

    /// Dispatch `line` against the registry, rendering with `theme`.
    fn run(&mut self, line: &str, theme: &Theme) -> CommandOutput {
        let mut history: Vec<String> = self
            .state
            .recallable_commands()
            .into_iter()
            .map(str::to_string)
            .collect();
        history.push(line.to_string());

        let mut env = Environment {
            theme,
            prefs: Some(&mut self.prefs),
            history: &history,
            now: Local::now(),
        };
        let output = self.registry.dispatch(line, &mut env);
        self.sync_preferences();
        output
    }

    /// Append `line` and its output, playing the error tone for errors.
    fn record(&mut self, line: &str, output: &CommandOutput, theme: Theme) {
        let entry = HistoryEntry::command(line, output.text(), theme, Local::now())
        .with_error(output.is_error());
        self.state.apply(Action::AddToHistory(entry));
        if output.is_error() {
            self.sound.error_tone();
        }
    }

    fn set_sound(&mut self, enabled: bool) {
        self.prefs.set_sound_enabled(enabled);
        self.sound.set_enabled(enabled);
        self.state.apply(Action::SetSound(enabled));
    }

    /// Pull preference changes made by command handlers into the session.
    fn sync_preferences(&mut self) {
        if self.prefs.theme() != &self.state.active_theme {
            self.state
                .apply(Action::SetTheme(self.prefs.theme().clone()));
        }
        let enabled = self.prefs.is_sound_enabled();
        if enabled != self.state.sound_enabled {
            self.sound.set_enabled(enabled);
            self.state.apply(Action::SetSound(enabled));
        }
    }

    fn update(&mut self, f: impl FnOnce(SessionState) -> SessionState) {
        let state = std::mem::take(&mut self.state);
        self.state = f(state);
    }
}

impl std::fmt::Debug for Terminal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Terminal")
            .field("history_len", &self.state.history.len())
            .field("theme", &self.state.active_theme.name)
            .field("sound", &self.sound)
            .field("boot", &self.boot)
            .finish()
    }
}
