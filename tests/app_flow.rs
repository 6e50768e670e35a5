//! End-to-end flows through key and mouse handling.

mod common;

use common::*;
use crossterm::event::{KeyCode, MouseEventKind};
use std::sync::mpsc;
use std::sync::Arc;
use std::time::{Duration, Instant};
use storyreel::media::ImageLoader;
use storyreel::storage::MemorySink;
use storyreel::story::{SaveKind, SlideKind};
use storyreel::ui::app::Screen;
use storyreel::ui::commands::spawn_command_worker;
use storyreel::ui::editor::{EditorField, EditorIntent, NoticeLevel};
use storyreel::ui::events::AppEvent;
use storyreel::ui::input::handle_key;

fn type_text(app: &mut storyreel::ui::app::App, text: &str, now: Instant) {
    for ch in text.chars() {
        handle_key(app, press_key(KeyCode::Char(ch)), now);
    }
}

/// Editor with `[Text("a"), Image(u1), Text("b")]`, preview open.
fn app_in_preview(now: Instant) -> storyreel::ui::app::App {
    let mut app = make_app();
    add_text_slides(&mut app, &["a"]);
    app.on_image_loaded(png_data_uri());
    add_text_slides(&mut app, &["b"]);
    handle_key(&mut app, ctrl_key('p'), now);
    assert_eq!(app.screen(), Screen::Preview);
    app
}

fn current(app: &storyreel::ui::app::App) -> Option<usize> {
    app.navigator().and_then(|nav| nav.current_index())
}

#[test]
fn typed_slides_land_in_order() {
    let now = Instant::now();
    let mut app = make_app();
    type_text(&mut app, "My story", now);
    handle_key(&mut app, press_key(KeyCode::Tab), now);
    handle_key(&mut app, press_key(KeyCode::Tab), now);
    handle_key(&mut app, press_key(KeyCode::Tab), now);
    assert_eq!(app.editor().focus, EditorField::Composer);

    type_text(&mut app, "first", now);
    handle_key(&mut app, press_key(KeyCode::Enter), now);
    type_text(&mut app, "second", now);
    handle_key(&mut app, press_key(KeyCode::Enter), now);
    handle_key(&mut app, press_key(KeyCode::Enter), now);

    assert_eq!(app.editor().title, "My story");
    let contents: Vec<_> = app
        .editor()
        .slides
        .items()
        .iter()
        .map(|s| s.content.clone())
        .collect();
    assert_eq!(contents, vec!["first", "second"]);
    assert_eq!(
        app.editor().notice.as_ref().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}

#[test]
fn arrow_down_scenario_through_the_keyboard() {
    let mut now = Instant::now();
    let mut app = app_in_preview(now);
    assert_eq!(current(&app), Some(0));
    assert_eq!(
        app.navigator().and_then(|nav| nav.slides().get(1)).map(|s| s.kind),
        Some(SlideKind::Image)
    );
    assert_eq!(app.thumbnails().len(), 1);

    for _ in 0..2 {
        handle_key(&mut app, press_key(KeyCode::Down), now);
        now += SETTLE;
        app.on_tick(now);
    }
    assert_eq!(current(&app), Some(2));

    handle_key(&mut app, press_key(KeyCode::Down), now);
    now += SETTLE;
    app.on_tick(now);
    assert_eq!(current(&app), Some(2));
}

#[test]
fn keys_pressed_mid_transition_are_dropped() {
    let now = Instant::now();
    let mut app = app_in_preview(now);
    handle_key(&mut app, press_key(KeyCode::Down), now);
    handle_key(&mut app, press_key(KeyCode::Down), now);
    handle_key(&mut app, press_key(KeyCode::Char(' ')), now);
    app.on_tick(now + SETTLE);
    assert_eq!(current(&app), Some(1));
}

#[test]
fn digit_keys_jump_and_clamp() {
    let now = Instant::now();
    let mut app = app_in_preview(now);
    handle_key(&mut app, press_key(KeyCode::Char('9')), now);
    app.on_tick(now + SETTLE);
    assert_eq!(current(&app), Some(2));
}

#[test]
fn escape_closes_and_reopen_starts_at_zero() {
    let mut now = Instant::now();
    let mut app = app_in_preview(now);
    handle_key(&mut app, press_key(KeyCode::End), now);
    now += SETTLE;
    app.on_tick(now);
    assert_eq!(current(&app), Some(2));

    handle_key(&mut app, press_key(KeyCode::Esc), now);
    assert_eq!(app.screen(), Screen::Editor);
    assert!(app.thumbnails().is_empty());

    handle_key(&mut app, ctrl_key('p'), now);
    assert_eq!(current(&app), Some(0));
}

#[test]
fn escape_mid_transition_leaves_nothing_pending() {
    let now = Instant::now();
    let mut app = app_in_preview(now);
    handle_key(&mut app, press_key(KeyCode::Down), now);
    handle_key(&mut app, press_key(KeyCode::Esc), now);
    app.on_tick(now + Duration::from_secs(1));
    assert!(app.navigator().is_none());
}

#[test]
fn preview_refused_for_empty_story() {
    let now = Instant::now();
    let mut app = make_app();
    handle_key(&mut app, ctrl_key('p'), now);
    assert_eq!(app.screen(), Screen::Editor);
    assert_eq!(
        app.editor().notice.as_ref().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}

#[test]
fn mouse_drag_up_swipes_forward_and_wraps() {
    let mut now = Instant::now();
    let mut app = app_in_preview(now);

    app.on_mouse(left_down(20), now);
    app.on_mouse(left_up(10), now);
    now += SETTLE;
    app.on_tick(now);
    assert_eq!(current(&app), Some(1));

    // One row is 16 units, inside the 30 unit threshold.
    app.on_mouse(left_down(12), now);
    app.on_mouse(left_up(11), now);
    now += SETTLE;
    app.on_tick(now);
    assert_eq!(current(&app), Some(1));

    app.on_mouse(left_down(5), now);
    app.on_mouse(left_up(15), now);
    now += SETTLE;
    app.on_tick(now);
    app.on_mouse(left_down(5), now);
    app.on_mouse(left_up(15), now);
    app.on_tick(now + SETTLE);
    assert_eq!(current(&app), Some(2));
}

#[test]
fn wheel_scroll_moves_one_slide_per_notch() {
    let now = Instant::now();
    let mut app = app_in_preview(now);
    app.on_mouse(mouse(MouseEventKind::ScrollDown, 0), now);
    assert_eq!(current(&app), Some(1));
    let page = app.navigator().map(|nav| nav.page_height()).unwrap_or_default();
    assert_eq!(app.navigator().map(|nav| nav.scroll_offset()), Some(page));

    app.on_mouse(mouse(MouseEventKind::ScrollDown, 0), now);
    app.on_mouse(mouse(MouseEventKind::ScrollDown, 0), now);
    assert_eq!(current(&app), Some(0));
    assert_eq!(app.navigator().map(|nav| nav.scroll_offset()), Some(0.0));

    app.on_mouse(mouse(MouseEventKind::ScrollUp, 0), now);
    assert_eq!(current(&app), Some(2));
}

#[test]
fn save_without_worker_reports_error() {
    let now = Instant::now();
    let mut app = make_app();
    type_text(&mut app, "Title", now);
    handle_key(&mut app, ctrl_key('s'), now);
    assert!(!app.editor().is_saving());
    assert_eq!(
        app.editor().notice.as_ref().map(|n| n.level),
        Some(NoticeLevel::Error)
    );
}

#[test]
fn publish_without_slides_is_rejected_locally() {
    let now = Instant::now();
    let mut app = make_app();
    type_text(&mut app, "Title", now);
    handle_key(&mut app, ctrl_key('o'), now);
    assert!(!app.editor().is_saving());
    assert!(app
        .editor()
        .notice
        .as_ref()
        .is_some_and(|n| n.level == NoticeLevel::Error));
}

#[test]
fn publish_goes_through_the_worker() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let sink = MemorySink::new();
    let (tx, rx) = mpsc::channel();
    let sender = spawn_command_worker(
        runtime.handle(),
        Arc::new(sink.clone()),
        ImageLoader::new(1024 * 1024),
        tx,
    );

    let now = Instant::now();
    let mut app = make_app();
    app.set_command_sender(sender);
    type_text(&mut app, "Published story", now);
    add_text_slides(&mut app, &["only slide"]);
    handle_key(&mut app, ctrl_key('o'), now);
    assert_eq!(app.editor().saving, Some(SaveKind::Published));

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::SaveFinished(result)) => app.on_save_finished(result),
        _ => panic!("expected SaveFinished"),
    }
    assert!(!app.editor().is_saving());
    assert!(!app.editor().dirty);

    let saved = sink.saved();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].title, "Published story");
    assert!(saved[0].published_at.is_some());
}

#[test]
fn image_path_goes_through_the_worker() {
    let runtime = tokio::runtime::Runtime::new().unwrap();
    let (tx, rx) = mpsc::channel();
    let sender = spawn_command_worker(
        runtime.handle(),
        Arc::new(MemorySink::new()),
        ImageLoader::new(8),
        tx,
    );
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().join("big.png");
    std::fs::write(&path, vec![0u8; 64]).unwrap();

    let now = Instant::now();
    let mut app = make_app();
    app.set_command_sender(sender);
    app.dispatch_editor(EditorIntent::Focus(EditorField::Composer));
    handle_key(&mut app, ctrl_key('t'), now);
    app.dispatch_editor(EditorIntent::InsertText(path.display().to_string()));
    handle_key(&mut app, press_key(KeyCode::Enter), now);
    assert!(app.editor().loading_image);

    match rx.recv_timeout(Duration::from_secs(5)) {
        Ok(AppEvent::ImageFailed { message }) => app.on_image_failed(message),
        _ => panic!("expected ImageFailed"),
    }
    assert!(!app.editor().loading_image);
    assert!(app.editor().slides.is_empty());
}

#[test]
fn ctrl_q_quits_from_either_screen() {
    let now = Instant::now();
    let mut app = app_in_preview(now);
    handle_key(&mut app, ctrl_key('q'), now);
    assert!(app.should_quit());
}
