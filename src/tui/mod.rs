// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Terminal UI.
//!
//! Hosts the search box controller in a ratatui + crossterm shell: the search line with
//! badges, the suggestion list, an inline error notice, and a key-hint footer.

use std::{
    error::Error,
    io,
    sync::Arc,
    time::{Duration, Instant},
};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    style::Print,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};
use tokio::runtime::Handle;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

use crate::api::{FetchResult, SuggestionSource};
use crate::controller::{Command, Controller, FetchRequest, Focus, Key};
use crate::debounce::Debouncer;
use crate::model::{FilterBadge, HighlightedText, SuggestionItem};

const BADGE_BG: Color = Color::Rgb(240, 239, 247);
const BADGE_FG: Color = Color::Black;
const FOCUS_COLOR: Color = Color::LightGreen;
const SELECTED_BG: Color = Color::Rgb(232, 245, 254);
const MATCH_COLOR: Color = Color::Yellow;
const CONTEXT_COLOR: Color = Color::Gray;
const NOTICE_COLOR: Color = Color::LightRed;
const PLACEHOLDER_COLOR: Color = Color::DarkGray;
const FOOTER_LABEL_COLOR: Color = Color::Gray;
const FOOTER_KEY_COLOR: Color = Color::Cyan;
const PLACEHOLDER: &str = "Search";
const VERIFIED_MARK: &str = " ✓";
const POLL_INTERVAL: Duration = Duration::from_millis(30);

/// Search the user finalized before the UI closed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigation {
    pub query: String,
    pub url: String,
}

type Delivery = (u64, FetchResult);

/// Runs fetch commands through the debouncer and reports results back to the UI thread.
struct Fetcher<F> {
    runtime: Handle,
    debouncer: Debouncer<F, FetchResult>,
    results: UnboundedSender<Delivery>,
}

impl<F, Fut> Fetcher<F>
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: std::future::Future<Output = FetchResult> + Send + 'static,
{
    fn submit(&self, request: FetchRequest) {
        let debouncer = self.debouncer.clone();
        let results = self.results.clone();
        self.runtime.spawn(async move {
            if let Some(result) = debouncer.call(request.query).await {
                let _ = results.send((request.generation, result));
            }
        });
    }
}

/// Runs the interactive search box until the user finalizes a search or quits.
///
/// Must be called off the async runtime (e.g. from `spawn_blocking`); fetches are spawned
/// on `runtime`.
pub fn run<S: SuggestionSource>(
    controller: Controller,
    source: Arc<S>,
    debounce: Duration,
    runtime: Handle,
) -> Result<Option<Navigation>, Box<dyn Error>> {
    let (results_tx, mut results_rx) = unbounded_channel();
    let debouncer = Debouncer::new(debounce, move |query: String| {
        let source = source.clone();
        async move { source.fetch(query).await }
    });
    let fetcher = Fetcher { runtime, debouncer, results: results_tx };

    let mut terminal = TerminalSession::new()?;
    let mut app = App::new(controller);

    while !app.should_quit {
        app.drain_results(&mut results_rx);
        terminal.draw(|frame| draw(frame, &mut app))?;

        if event::poll(POLL_INTERVAL)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    for request in app.handle_key(key) {
                        fetcher.submit(request);
                    }
                }
            }
        }
    }

    if let Some(navigation) = &app.navigation {
        if let Err(err) = copy_to_clipboard(&navigation.url) {
            tracing::debug!(%err, "clipboard copy failed");
        }
    }

    Ok(app.navigation)
}

struct Toast {
    message: String,
    expires_at: Instant,
}

struct App {
    controller: Controller,
    list_state: ListState,
    navigation: Option<Navigation>,
    toast: Option<Toast>,
    should_quit: bool,
}

impl App {
    fn new(controller: Controller) -> Self {
        Self {
            controller,
            list_state: ListState::default(),
            navigation: None,
            toast: None,
            should_quit: false,
        }
    }

    fn drain_results(&mut self, results: &mut UnboundedReceiver<Delivery>) {
        while let Ok((generation, result)) = results.try_recv() {
            self.controller.apply_suggestions(generation, result);
        }
    }

    /// Routes one key press; returns the fetches to submit.
    fn handle_key(&mut self, key: KeyEvent) -> Vec<FetchRequest> {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return Vec::new();
        }

        let commands = match key.code {
            KeyCode::Esc => {
                self.should_quit = true;
                Vec::new()
            }
            KeyCode::Up => self.controller.handle_key_down(Key::ArrowUp).commands,
            KeyCode::Down => self.controller.handle_key_down(Key::ArrowDown).commands,
            KeyCode::Enter => self.controller.handle_key_down(Key::Enter).commands,
            KeyCode::Backspace => {
                let dispatch = self.controller.handle_key_down(Key::Backspace);
                if dispatch.handled {
                    dispatch.commands
                } else {
                    self.edit_focused(|text| {
                        text.pop();
                    })
                }
            }
            KeyCode::Char(ch) => {
                let dispatch = self.controller.handle_key_down(Key::Other);
                if dispatch.handled {
                    dispatch.commands
                } else {
                    self.edit_focused(|text| text.push(ch))
                }
            }
            _ => Vec::new(),
        };

        self.execute(commands)
    }

    /// Applies a text edit to whichever field has focus.
    fn edit_focused(&mut self, edit: impl FnOnce(&mut String)) -> Vec<Command> {
        match self.controller.focus() {
            Focus::Input => {
                let mut text = self.controller.input().to_owned();
                edit(&mut text);
                self.controller.handle_input_change(&text)
            }
            Focus::Badge(kind) => {
                let Some(badge) = self.controller.badges().get(kind) else {
                    return Vec::new();
                };
                let mut text = badge.raw_value().to_owned();
                edit(&mut text);
                self.controller.handle_badge_input(&text)
            }
        }
    }

    fn execute(&mut self, commands: Vec<Command>) -> Vec<FetchRequest> {
        let mut fetches = Vec::new();
        for command in commands {
            match command {
                Command::Fetch(request) => fetches.push(request),
                Command::Navigate { query, url } => {
                    self.set_toast(format!("Searching {query}"));
                    self.navigation = Some(Navigation { query, url });
                    self.should_quit = true;
                }
            }
        }
        fetches
    }

    fn set_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast {
            message: message.into(),
            expires_at: Instant::now() + Duration::from_secs(2),
        });
    }
}

fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(frame.size());
    let (search_area, notice_area, list_area, footer_area) =
        (layout[0], layout[1], layout[2], layout[3]);

    let (search_line, cursor_col) = search_line(&app.controller);
    let search = Paragraph::new(search_line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(Style::default().fg(FOCUS_COLOR)),
    );
    frame.render_widget(search, search_area);
    let max_col = search_area.width.saturating_sub(2);
    let cursor_x = search_area.x + 1 + u16::try_from(cursor_col).unwrap_or(u16::MAX).min(max_col);
    frame.set_cursor(cursor_x, search_area.y + 1);

    if let Some(notice) = app.controller.notice() {
        let notice = Paragraph::new(Line::from(Span::styled(
            format!("⚠ {notice}"),
            Style::default().fg(NOTICE_COLOR),
        )));
        frame.render_widget(notice, notice_area);
    }

    let items = app.controller.suggestions().iter().map(suggestion_list_item).collect::<Vec<_>>();
    app.list_state.select(app.controller.suggestions().selected_index());
    let list = List::new(items)
        .block(Block::default().borders(Borders::ALL).title(" Suggestions "))
        .highlight_style(Style::default().bg(SELECTED_BG).fg(Color::Black));
    frame.render_stateful_widget(list, list_area, &mut app.list_state);

    if app.toast.as_ref().is_some_and(|toast| toast.expires_at <= Instant::now()) {
        app.toast = None;
    }
    let toast = app.toast.as_ref().map(|toast| toast.message.as_str()).unwrap_or("");
    frame.render_widget(Paragraph::new(footer_help_line(&app.controller, toast)), footer_area);
}

// Search line, suggestion rows and footer helpers.
include!("chrome.rs");

struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn new() -> Result<Self, Box<dyn Error>> {
        enable_raw_mode()?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen).map_err(|err| {
            teardown_terminal();
            err
        })?;

        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend).map_err(|err| {
            teardown_terminal();
            err
        })?;
        terminal.clear().map_err(|err| {
            teardown_terminal();
            err
        })?;

        Ok(Self { terminal })
    }

    fn draw(&mut self, draw_fn: impl FnOnce(&mut Frame<'_>)) -> io::Result<()> {
        self.terminal.draw(draw_fn)?;
        Ok(())
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        let _ = self.terminal.show_cursor();
        teardown_terminal();
    }
}

fn teardown_terminal() {
    let _ = disable_raw_mode();
    let mut stdout = io::stdout();
    let _ = execute!(stdout, LeaveAlternateScreen);
}

fn copy_to_clipboard(text: &str) -> io::Result<()> {
    let mut stdout = io::stdout();
    execute!(stdout, Print(osc52_sequence(text)))
}

fn osc52_sequence(text: &str) -> String {
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine as _;

    let encoded = STANDARD.encode(text.as_bytes());
    format!("\x1b]52;c;{encoded}\x1b\\")
}

#[cfg(test)]
mod tests;
