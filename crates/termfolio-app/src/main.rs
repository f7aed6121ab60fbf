//! termfolio entry point.
//!
//! A portfolio terminal in a full-screen TUI. Type `help` for commands,
//! Ctrl+D on an empty line to quit. Hover the mouse over the cat to pat it.
//!
//! Usage: `termfolio [config.toml]` (or set `TERMFOLIO_CONFIG`).

mod app_state;
mod cat;
mod input;
mod render;

use std::fs::File;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::backend::CrosstermBackend;

use app_state::ViewState;
use termfolio_audio::SoundNotifier;
use termfolio_core::{Signal, Terminal};
use termfolio_platform::{FileStore, KeyValueStore, MemoryStore, PreferenceStore};
use termfolio_types::config::TermfolioConfig;
use termfolio_types::input::InputEvent;

/// How long to wait for input before advancing timers.
const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Restores the host terminal on drop, including on early return.
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(std::io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
    }
}

fn main() -> Result<()> {
    init_logging();
    let config = TermfolioConfig::resolve(std::env::args().nth(1).as_deref())?;
    log::info!("Starting termfolio (theme={})", config.default_theme);

    let prefs = PreferenceStore::load(open_store(&config), &config.default_theme);
    let sound = SoundNotifier::new(termfolio_audio::default_sink(), config.sample_rate);
    let session = Terminal::new(
        prefs,
        sound,
        Duration::from_millis(config.boot_delay_ms),
    );
    let view = ViewState::new(&config, Instant::now());

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let _guard = TerminalGuard;
    let mut tui = ratatui::Terminal::new(CrosstermBackend::new(stdout))?;

    run(&mut tui, session, view)?;

    log::info!("termfolio shut down cleanly");
    Ok(())
}

fn run<B: ratatui::backend::Backend>(
    tui: &mut ratatui::Terminal<B>,
    mut session: Terminal,
    mut view: ViewState,
) -> Result<()> {
    session.start_boot(Instant::now());

    'running: loop {
        let now = Instant::now();
        session.poll_boot(now);
        view.cat.tick(now);

        let mut drawn = render::Drawn::default();
        tui.draw(|frame| drawn = render::draw(frame, &session, &view))?;
        view.after_draw(drawn);

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        let Some(input) = input::map_event(&event::read()?) else {
            continue;
        };
        match input {
            InputEvent::PointerMove { x, y } => view.pointer_moved(x, y, Instant::now()),
            InputEvent::Scroll { lines } => view.scroll_by(lines),
            InputEvent::Submit => view.scroll_to_bottom(),
            _ => {},
        }
        match session.handle_input(input) {
            Signal::Continue => {},
            Signal::Reload => {
                view.scroll_to_bottom();
                session = session.reload();
                session.start_boot(Instant::now());
            },
            Signal::Quit => break 'running,
        }
    }
    Ok(())
}

/// Open the preference file, falling back to an in-memory store so the
/// session still runs (without persistence) when the file is unusable.
fn open_store(config: &TermfolioConfig) -> Box<dyn KeyValueStore> {
    let path = match &config.prefs_path {
        Some(path) => Ok(path.clone()),
        None => FileStore::default_path(),
    };
    match path.and_then(FileStore::open) {
        Ok(store) => {
            log::info!("Preferences at {}", store.path().display());
            Box::new(store)
        },
        Err(e) => {
            log::warn!("Preferences will not persist: {e}");
            Box::new(MemoryStore::new())
        },
    }
}

fn log_path() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("termfolio")
        .join("termfolio.log")
}

/// The TUI owns stdout and stderr, so log lines go to a file.
fn init_logging() {
    let path = log_path();
    let file = path
        .parent()
        .map_or(Ok(()), std::fs::create_dir_all)
        .and_then(|()| File::create(&path));
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    match file {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        },
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        },
    }
    builder.init();
}
