use crate::ui::app::{App, ScreenKind};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Lines moved by PageUp/PageDown on the detail screen.
const PAGE_LINES: i32 = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') || matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) {
        app.request_quit();
        return;
    }

    match app.screen() {
        ScreenKind::Detail => handle_detail_key(app, key),
        ScreenKind::List => handle_list_key(app, key),
    }
}

fn handle_detail_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Backspace | KeyCode::Left | KeyCode::Char('b') => {
            app.back();
        }
        KeyCode::Enter if app.detail().is_some_and(|screen| screen.state().is_error()) => {
            app.back();
        }
        KeyCode::Up | KeyCode::Char('k') => app.scroll_detail(-1),
        KeyCode::Down | KeyCode::Char('j') => app.scroll_detail(1),
        KeyCode::PageUp => app.scroll_detail(-PAGE_LINES),
        KeyCode::PageDown | KeyCode::Char(' ') => app.scroll_detail(PAGE_LINES),
        KeyCode::Home | KeyCode::Char('g') => app.scroll_detail_top(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    if app.list_state().is_error() {
        if matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R') | KeyCode::Enter) {
            app.reload();
        }
        return;
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => app.move_selection(-1, 0),
        KeyCode::Right | KeyCode::Char('l') => app.move_selection(1, 0),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(0, -1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(0, 1),
        KeyCode::Home | KeyCode::Char('g') => app.select_first(),
        KeyCode::End | KeyCode::Char('G') => app.select_last(),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.open_selected();
        }
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
