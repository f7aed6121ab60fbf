//! Draw the session with ratatui.
//!
//! Scrollback entries are painted with the theme they were produced under;
//! the frame, background and edit line use the active theme.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color as TuiColor, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph, Wrap};

use termfolio_core::{HistoryEntry, Terminal};
use termfolio_skin::Theme;
use termfolio_types::color::Color;

use crate::app_state::ViewState;
use crate::cat::{CatAnimation, Z_OVERLAY};

/// Width of the cat side panel.
pub const CAT_PANEL_WIDTH: u16 = 44;
/// Narrowest terminal that still gets the cat panel.
pub const CAT_MIN_TERMINAL_WIDTH: u16 = CAT_PANEL_WIDTH + 64;

const CAT_SLEEP: TuiColor = TuiColor::Rgb(189, 147, 249);
const CAT_PAT: TuiColor = TuiColor::Rgb(255, 182, 193);
const CAT_BORDER: TuiColor = TuiColor::Rgb(139, 233, 253);

pub fn tui_color(c: Color) -> TuiColor {
    TuiColor::Rgb(c.r, c.g, c.b)
}

/// Layout facts from the last frame that input handling needs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Drawn {
    /// The cat panel, if it was drawn.
    pub cat_area: Option<Rect>,
    /// Wrapped scrollback lines hidden above the pane when scrolled to the
    /// bottom.
    pub max_scroll: u16,
}

/// Draw one frame.
pub fn draw(frame: &mut Frame, session: &Terminal, view: &ViewState) -> Drawn {
    let area = frame.area();
    if view.show_cat && area.width >= CAT_MIN_TERMINAL_WIDTH {
        let [main, side] =
            Layout::horizontal([Constraint::Min(0), Constraint::Length(CAT_PANEL_WIDTH)])
                .areas(area);
        let panel = cat_panel_area(side);
        let max_scroll = draw_terminal(frame, main, session, view);
        draw_cat(frame, panel, &view.cat);
        Drawn {
            cat_area: Some(panel),
            max_scroll,
        }
    } else {
        Drawn {
            cat_area: None,
            max_scroll: draw_terminal(frame, area, session, view),
        }
    }
}

fn cat_panel_area(side: Rect) -> Rect {
    // z overlay + frame + blank + hint, plus borders.
    let height = (CatAnimation::max_height() as u16 + 5).min(side.height);
    let [_, panel] = Layout::vertical([Constraint::Min(0), Constraint::Length(height)]).areas(side);
    panel
}

/// Draw the scrollback and edit line, `view.scroll_back` wrapped lines up
/// from the bottom. Returns the largest useful scroll-back.
fn draw_terminal(frame: &mut Frame, area: Rect, session: &Terminal, view: &ViewState) -> u16 {
    let prompt = view.prompt.as_str();
    let theme = session.theme();
    let block = Block::bordered()
        .title(format!(" {} ", theme.label))
        .border_style(Style::default().fg(tui_color(theme.border)))
        .style(
            Style::default()
                .bg(tui_color(theme.background))
                .fg(tui_color(theme.text)),
        );
    let inner = block.inner(area);

    let mut lines: Vec<Line> = session
        .state()
        .history
        .iter()
        .flat_map(|entry| entry_lines(entry, prompt))
        .collect();
    lines.push(input_line(session, prompt));

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    let total = u16::try_from(paragraph.line_count(inner.width)).unwrap_or(u16::MAX);
    let max_scroll = total.saturating_sub(inner.height);
    let top = max_scroll - view.scroll_back.min(max_scroll);

    frame.render_widget(paragraph.block(block).scroll((top, 0)), area);
    max_scroll
}

/// Scrollback lines for one entry, in that entry's theme.
pub fn entry_lines<'a>(entry: &'a HistoryEntry, prompt: &'a str) -> Vec<Line<'a>> {
    let theme = &entry.theme;
    let mut lines = Vec::new();
    if let Some(command) = &entry.command {
        lines.push(prompt_line(theme, prompt, command));
    }
    let style = if entry.is_error {
        Style::default().fg(tui_color(theme.error))
    } else if entry.is_system {
        Style::default().fg(tui_color(theme.accent))
    } else {
        Style::default().fg(tui_color(theme.text))
    };
    lines.extend(
        entry
            .output
            .lines()
            .map(|line| Line::from(Span::styled(line, style))),
    );
    lines
}

fn prompt_line<'a>(theme: &Theme, prompt: &'a str, command: &'a str) -> Line<'a> {
    Line::from(vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(tui_color(theme.prompt))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(command, Style::default().fg(tui_color(theme.text))),
    ])
}

fn input_line<'a>(session: &'a Terminal, prompt: &'a str) -> Line<'a> {
    let theme = session.theme();
    let state = session.state();
    let split = state
        .input
        .char_indices()
        .nth(state.caret)
        .map_or(state.input.len(), |(i, _)| i);
    let (before, rest) = state.input.split_at(split);
    let mut chars = rest.chars();
    let under_caret = chars.next().map_or_else(|| " ".to_string(), String::from);
    let after = chars.as_str();

    let caret = Style::default()
        .fg(tui_color(theme.background))
        .bg(tui_color(theme.primary));
    let text = Style::default().fg(tui_color(theme.text));
    Line::from(vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(tui_color(theme.prompt))
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(before, text),
        Span::styled(under_caret, caret),
        Span::styled(after, text),
    ])
}

fn draw_cat(frame: &mut Frame, area: Rect, cat: &CatAnimation) {
    let color = if cat.is_patting() { CAT_PAT } else { CAT_SLEEP };
    let hint_color = if cat.is_patting() { CAT_PAT } else { CAT_BORDER };

    let mut lines = Vec::new();
    let overlay = if cat.show_z() { Z_OVERLAY } else { "" };
    lines.push(Line::from(Span::styled(overlay, Style::default().fg(CAT_SLEEP))).right_aligned());
    lines.extend(
        cat.frame()
            .lines()
            .map(|l| Line::from(Span::styled(l, Style::default().fg(color)))),
    );
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            cat.hint(),
            Style::default().fg(hint_color).add_modifier(Modifier::BOLD),
        ))
        .right_aligned(),
    );

    let block = Block::bordered()
        .border_style(Style::default().fg(CAT_BORDER))
        .style(Style::default().bg(TuiColor::Black));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, Instant};

    use ratatui::Terminal as Tui;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use termfolio_audio::SoundNotifier;
    use termfolio_platform::{MemoryStore, PreferenceStore};
    use termfolio_types::config::TermfolioConfig;
    use termfolio_types::input::{InputEvent, Key};

    use super::*;

    fn session() -> Terminal {
        let prefs = PreferenceStore::load(Box::new(MemoryStore::new()), "dracula");
        Terminal::new(prefs, SoundNotifier::silent(), Duration::ZERO)
    }

    fn type_line(session: &mut Terminal, line: &str) {
        for ch in line.chars() {
            session.handle_input(InputEvent::TextInput(ch));
        }
    }

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        (0..area.height)
            .map(|y| {
                (0..area.width)
                    .map(|x| buf[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_full(session: &Terminal, view: &ViewState, width: u16, height: u16) -> (String, Drawn) {
        let mut tui = Tui::new(TestBackend::new(width, height)).unwrap();
        let mut drawn = Drawn::default();
        tui.draw(|frame| drawn = draw(frame, session, view)).unwrap();
        (buffer_text(tui.backend().buffer()), drawn)
    }

    fn render(session: &Terminal, view: &ViewState, width: u16, height: u16) -> (String, Option<Rect>) {
        let (text, drawn) = render_full(session, view, width, height);
        (text, drawn.cat_area)
    }

    fn view() -> ViewState {
        ViewState::new(&TermfolioConfig::default(), Instant::now())
    }

    #[test]
    fn shows_prompt_command_and_output() {
        let mut s = session();
        type_line(&mut s, "pwd");
        s.handle_input(InputEvent::Submit);
        type_line(&mut s, "ech");
        let (text, _) = render(&s, &view(), 120, 30);
        assert!(text.contains("visitor@portfolio:~$ pwd"));
        assert!(text.contains("~/portfolio"));
        assert!(text.contains("visitor@portfolio:~$ ech"));
        assert!(text.contains("Dracula"));
    }

    #[test]
    fn keeps_newest_lines_visible() {
        let mut s = session();
        for _ in 0..20 {
            type_line(&mut s, "help");
            s.handle_input(InputEvent::Submit);
        }
        type_line(&mut s, "latest");
        let (text, _) = render(&s, &view(), 120, 20);
        assert!(text.contains("visitor@portfolio:~$ latest"));
    }

    #[test]
    fn scrolling_back_reaches_top_of_long_output() {
        let mut s = session();
        type_line(&mut s, "help");
        s.handle_input(InputEvent::Submit);
        let mut v = view();

        let (text, drawn) = render_full(&s, &v, 120, 24);
        assert!(!text.contains("Available Commands:"));
        assert!(drawn.max_scroll > 0);

        v.max_scroll = drawn.max_scroll;
        v.scroll_by(i32::from(drawn.max_scroll) + 50);
        assert_eq!(v.scroll_back, drawn.max_scroll);
        let (text, _) = render_full(&s, &v, 120, 24);
        assert!(text.contains("Available Commands:"));
        assert!(text.contains("visitor@portfolio:~$ help"));

        v.scroll_to_bottom();
        let (text, _) = render_full(&s, &v, 120, 24);
        assert!(!text.contains("Available Commands:"));
    }

    #[test]
    fn long_lines_wrap() {
        let mut s = session();
        let words = vec!["word"; 30].join(" ");
        type_line(&mut s, &format!("echo {words} ENDMARK"));
        s.handle_input(InputEvent::Submit);
        let (text, drawn) = render_full(&s, &view(), 80, 24);
        assert!(text.contains("ENDMARK"));
        assert_eq!(drawn.max_scroll, 0);
    }

    #[test]
    fn cat_panel_only_when_wide() {
        let s = session();
        let (text, area) = render(&s, &view(), 120, 30);
        let area = area.expect("cat panel");
        assert_eq!(area.width, CAT_PANEL_WIDTH);
        assert!(text.contains("Sleeping... hover to give pats"));

        let (text, area) = render(&s, &view(), 80, 30);
        assert!(area.is_none());
        assert!(!text.contains("Sleeping"));
    }

    #[test]
    fn cat_hidden_by_config() {
        let mut v = view();
        v.show_cat = false;
        let (_, area) = render(&session(), &v, 160, 40);
        assert!(area.is_none());
    }

    #[test]
    fn entries_keep_their_theme() {
        let mut s = session();
        type_line(&mut s, "whoami");
        s.handle_input(InputEvent::Submit);
        type_line(&mut s, "themes set nord");
        s.handle_input(InputEvent::Submit);

        let history = &s.state().history;
        let first = entry_lines(&history[0], "$");
        let second = entry_lines(&history[1], "$");
        assert_eq!(
            first[0].spans[0].style.fg,
            Some(tui_color(history[0].theme.prompt))
        );
        assert_ne!(first[0].spans[0].style.fg, second[0].spans[0].style.fg);
    }

    #[test]
    fn error_output_uses_error_color() {
        let mut s = session();
        type_line(&mut s, "nope");
        s.handle_input(InputEvent::Submit);
        let entry = &s.state().history[0];
        let lines = entry_lines(entry, "$");
        assert_eq!(lines[1].spans[0].style.fg, Some(tui_color(entry.theme.error)));
    }

    #[test]
    fn caret_cell_is_highlighted() {
        let mut s = session();
        type_line(&mut s, "abc");
        s.handle_input(InputEvent::Key(Key::Left));
        let line = input_line(&s, "$");
        let contents: Vec<&str> = line.spans.iter().map(|sp| sp.content.as_ref()).collect();
        assert_eq!(contents, vec!["$", " ", "ab", "c", ""]);
        assert_eq!(line.spans[3].style.bg, Some(tui_color(s.theme().primary)));
    }
}
