use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::time::Instant;

use crate::nav::Direction;
use crate::story::SaveKind;
use crate::ui::app::{App, Screen};
use crate::ui::editor::{EditorField, EditorIntent};

pub fn handle_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.screen() {
        Screen::Preview => handle_preview_key(app, key, now),
        Screen::Editor => handle_editor_key(app, key, now),
    }
}

fn handle_preview_key(app: &mut App, key: KeyEvent, now: Instant) {
    if key.code == KeyCode::Esc {
        app.close_preview(now);
        return;
    }
    let Some(navigator) = app.navigator_mut() else {
        return;
    };
    match key.code {
        KeyCode::Down | KeyCode::Char(' ') | KeyCode::Char('j') => {
            navigator.step(Direction::Forward, now)
        }
        KeyCode::Up | KeyCode::Char('k') => navigator.step(Direction::Backward, now),
        KeyCode::Right => navigator.step_loop(Direction::Forward, now),
        KeyCode::Left => navigator.step_loop(Direction::Backward, now),
        KeyCode::PageDown => {
            let page = navigator.page_height();
            navigator.scroll_by(page, now);
            navigator.snap_to_current();
        }
        KeyCode::PageUp => {
            let page = navigator.page_height();
            navigator.scroll_by(-page, now);
            navigator.snap_to_current();
        }
        KeyCode::Home => navigator.jump_to(0, now),
        KeyCode::End => {
            let last = navigator.len().saturating_sub(1);
            navigator.jump_to(last, now);
        }
        KeyCode::Char(ch) if ch.is_ascii_digit() && ch != '0' => {
            let index = ch.to_digit(10).unwrap_or(1) as usize - 1;
            navigator.jump_to(index, now);
        }
        _ => {}
    }
}

fn handle_editor_key(app: &mut App, key: KeyEvent, now: Instant) {
    if is_ctrl_char(key, 'p') {
        app.open_preview(now);
        return;
    }
    if is_ctrl_char(key, 's') {
        app.request_save(SaveKind::Draft);
        return;
    }
    if is_ctrl_char(key, 'o') {
        app.request_save(SaveKind::Published);
        return;
    }
    if is_ctrl_char(key, 't') {
        app.dispatch_editor(EditorIntent::ToggleComposerKind);
        return;
    }

    match key.code {
        KeyCode::Tab => {
            app.dispatch_editor(EditorIntent::FocusNext);
            return;
        }
        KeyCode::BackTab => {
            app.dispatch_editor(EditorIntent::FocusPrev);
            return;
        }
        KeyCode::Esc => {
            app.dispatch_editor(EditorIntent::DismissNotice);
            return;
        }
        _ => {}
    }

    let focus = app.editor().focus;
    match focus {
        EditorField::Title | EditorField::Tags => match key.code {
            KeyCode::Enter => app.dispatch_editor(EditorIntent::FocusNext),
            KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                app.dispatch_editor(EditorIntent::InsertChar(ch))
            }
            _ => {}
        },
        EditorField::Composer => match key.code {
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                app.dispatch_editor(EditorIntent::InsertChar('\n'))
            }
            KeyCode::Enter => app.submit_composer(),
            KeyCode::Backspace => app.dispatch_editor(EditorIntent::Backspace),
            KeyCode::Char(ch) if !has_command_modifier(key) => {
                app.dispatch_editor(EditorIntent::InsertChar(ch))
            }
            _ => {}
        },
        EditorField::Genre => match key.code {
            KeyCode::Left => app.dispatch_editor(EditorIntent::CycleGenre { forward: false }),
            KeyCode::Right | KeyCode::Enter | KeyCode::Char(' ') => {
                app.dispatch_editor(EditorIntent::CycleGenre { forward: true })
            }
            _ => {}
        },
        EditorField::Slides => match key.code {
            KeyCode::Up | KeyCode::Char('k') => app.dispatch_editor(EditorIntent::SelectPrev),
            KeyCode::Down | KeyCode::Char('j') => app.dispatch_editor(EditorIntent::SelectNext),
            KeyCode::Char('K') => app.dispatch_editor(EditorIntent::MoveSelectedUp),
            KeyCode::Char('J') => app.dispatch_editor(EditorIntent::MoveSelectedDown),
            KeyCode::Delete | KeyCode::Backspace | KeyCode::Char('d') => {
                app.dispatch_editor(EditorIntent::RemoveSelected)
            }
            _ => {}
        },
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
        && !key.modifiers.contains(KeyModifiers::SHIFT)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) || key.modifiers.contains(KeyModifiers::ALT)
}
