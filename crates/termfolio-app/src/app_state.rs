//! Presentation state: prompt, cat animation, scroll position and the
//! layout facts needed for pointer hit-testing.

use std::time::{Duration, Instant};

use ratatui::layout::{Position, Rect};

use termfolio_types::config::TermfolioConfig;

use crate::cat::CatAnimation;
use crate::render::Drawn;

/// Presentation-only state. The session itself lives in `main` so that
/// `Terminal::reload` can take it by value.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub prompt: String,
    pub show_cat: bool,
    pub cat: CatAnimation,
    /// Where the cat panel was last drawn, for hover hit-testing.
    pub cat_area: Option<Rect>,
    /// Wrapped lines scrolled up from the bottom of the scrollback.
    pub scroll_back: u16,
    /// Upper bound for `scroll_back`, from the last drawn frame.
    pub max_scroll: u16,
}

impl ViewState {
    pub fn new(config: &TermfolioConfig, now: Instant) -> Self {
        Self {
            prompt: config.prompt.clone(),
            show_cat: config.show_cat,
            cat: CatAnimation::new(
                Duration::from_millis(config.cat_sleep_interval_ms),
                Duration::from_millis(config.cat_pat_interval_ms),
                Duration::from_millis(config.cat_idle_toggle_ms),
                now,
            ),
            cat_area: None,
            scroll_back: 0,
            max_scroll: 0,
        }
    }

    /// Record layout facts from the frame just drawn.
    pub fn after_draw(&mut self, drawn: Drawn) {
        self.cat_area = drawn.cat_area;
        self.max_scroll = drawn.max_scroll;
        self.scroll_back = self.scroll_back.min(self.max_scroll);
    }

    /// Scroll by `lines`; positive moves toward older output.
    pub fn scroll_by(&mut self, lines: i32) {
        let next = i64::from(self.scroll_back) + i64::from(lines);
        self.scroll_back = u16::try_from(next.clamp(0, i64::from(self.max_scroll))).unwrap_or(0);
    }

    pub fn scroll_to_bottom(&mut self) {
        self.scroll_back = 0;
    }

    /// Track the pointer: hovering the cat panel pats the cat.
    pub fn pointer_moved(&mut self, x: i32, y: i32, now: Instant) {
        let over_cat = match (self.cat_area, u16::try_from(x), u16::try_from(y)) {
            (Some(area), Ok(x), Ok(y)) => area.contains(Position { x, y }),
            _ => false,
        };
        self.cat.set_hovering(over_cat, now);
    }
}
