// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Badger-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Badger and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::{draw, footer_help_line, osc52_sequence, search_line, App, Navigation};
use crate::api::FetchError;
use crate::config::Config;
use crate::controller::Controller;
use crate::model::Suggestion;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{backend::TestBackend, Terminal};

fn app() -> App {
    App::new(Controller::new(&Config::default()).expect("controller"))
}

fn press(app: &mut App, code: KeyCode) -> Vec<super::FetchRequest> {
    app.handle_key(KeyEvent::new(code, KeyModifiers::NONE))
}

fn type_text(app: &mut App, text: &str) -> Vec<super::FetchRequest> {
    let mut last = Vec::new();
    for ch in text.chars() {
        last = press(app, KeyCode::Char(ch));
    }
    last
}

fn line_to_string(line: &ratatui::text::Line<'_>) -> String {
    line.spans.iter().map(|span| span.content.as_ref()).collect::<String>()
}

fn deliver(app: &mut App, generation: u64, handles: &[&str]) {
    let users = handles
        .iter()
        .map(|handle| Suggestion {
            display_name: handle.to_uppercase(),
            handle: (*handle).to_owned(),
            verified: true,
            context_label: format!("Followed by {handle}"),
            ..Suggestion::default()
        })
        .collect();
    assert!(app.controller.apply_suggestions(generation, Ok(users)));
}

fn render(app: &mut App, width: u16, height: u16) -> Vec<String> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).expect("terminal");
    terminal.draw(|frame| draw(frame, app)).expect("draw");
    let buffer = terminal.backend().buffer();
    (0..height)
        .map(|y| (0..width).map(|x| buffer.get(x, y).symbol().to_owned()).collect::<String>())
        .collect()
}

#[test]
fn typing_edits_main_input_and_requests_fetch() {
    let mut app = app();
    let fetches = type_text(&mut app, "cat");
    assert_eq!(app.controller.input(), "cat");
    assert_eq!(fetches.len(), 1);
    assert_eq!(fetches[0].query, "cat");

    let fetches = press(&mut app, KeyCode::Backspace);
    assert_eq!(app.controller.input(), "ca");
    assert_eq!(fetches[0].query, "ca");
}

#[test]
fn typing_trigger_opens_badge_and_routes_chars_into_it() {
    let mut app = app();
    let fetches = type_text(&mut app, "from: ");
    assert!(fetches.is_empty());
    assert_eq!(app.controller.input(), "");

    let fetches = type_text(&mut app, "al");
    assert_eq!(fetches[0].query, "@al");
    let (line, _) = search_line(&app.controller);
    assert_eq!(line_to_string(&line), " from:@al  ");
}

#[test]
fn backspace_on_empty_badge_removes_it() {
    let mut app = app();
    type_text(&mut app, "to: ");
    press(&mut app, KeyCode::Backspace);
    assert!(app.controller.badges().is_empty());
    type_text(&mut app, "x");
    assert_eq!(app.controller.input(), "x");
}

#[test]
fn enter_finalizes_and_quits_with_navigation() {
    let mut app = app();
    type_text(&mut app, "from: ");
    type_text(&mut app, "alice ");
    type_text(&mut app, "cats");
    press(&mut app, KeyCode::Enter);

    assert!(app.should_quit);
    assert_eq!(
        app.navigation,
        Some(Navigation {
            query: "(from:@alice) cats".to_owned(),
            url: "https://twitter.com/search?q=%28from%3A%40alice%29+cats".to_owned(),
        })
    );
}

#[test]
fn escape_quits_without_navigation() {
    let mut app = app();
    type_text(&mut app, "cats");
    press(&mut app, KeyCode::Esc);
    assert!(app.should_quit);
    assert!(app.navigation.is_none());
}

#[test]
fn ctrl_c_quits() {
    let mut app = app();
    app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
    assert!(app.should_quit);
    assert_eq!(app.controller.input(), "");
}

#[test]
fn placeholder_shows_until_first_badge() {
    let app = app();
    let (line, cursor) = search_line(&app.controller);
    assert_eq!(line_to_string(&line), "Search");
    assert_eq!(cursor, 0);
}

#[test]
fn cursor_sits_after_focused_badge_value() {
    let mut app = app();
    type_text(&mut app, "to: ");
    let (line, cursor) = search_line(&app.controller);
    assert_eq!(line_to_string(&line), " to:   ");
    assert_eq!(cursor, 4);

    type_text(&mut app, "bo");
    let (_, cursor) = search_line(&app.controller);
    assert_eq!(cursor, 7);
}

#[test]
fn render_shows_suggestions_with_selection_and_notice() {
    let mut app = app();
    let fetch = type_text(&mut app, "bo").remove(0);
    deliver(&mut app, fetch.generation, &["bob", "bobby"]);
    press(&mut app, KeyCode::Down);

    let rows = render(&mut app, 50, 12);
    assert!(rows[1].contains("bo"));
    assert!(rows.iter().any(|row| row.contains("BOB ✓  @bob")));
    assert!(rows.iter().any(|row| row.contains("Followed by bobby")));
    assert!(rows[11].contains("Enter:⏎ pick"));

    let fetch = type_text(&mut app, "b").remove(0);
    assert!(app.controller.apply_suggestions(fetch.generation, Err(FetchError::AuthMissing)));
    let rows = render(&mut app, 80, 12);
    assert!(rows[3].contains("⚠ no session credentials"));
}

#[test]
fn footer_switches_hints_with_focus() {
    let mut app = app();
    let line = line_to_string(&footer_help_line(&app.controller, ""));
    assert!(line.contains("Enter:⏎ search"));
    assert!(line.contains("Quit:esc"));

    type_text(&mut app, "from: ");
    let line = line_to_string(&footer_help_line(&app.controller, "hello"));
    assert!(line.contains("From:⏎ pick"));
    assert!(line.contains("Remove:⌫ on empty"));
    assert!(line.ends_with("  hello"));
}

#[test]
fn osc52_wraps_base64_payload() {
    assert_eq!(osc52_sequence("hi"), "\x1b]52;c;aGk=\x1b\\");
}
