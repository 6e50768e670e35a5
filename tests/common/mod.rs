//! Shared test helpers.

#![allow(dead_code, unused_imports)]

use crossterm::event::{
    KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use std::io::Cursor;
use std::sync::Arc;
use std::time::{Duration, Instant};
use storyreel::config::Config;
use storyreel::media::encode_data_uri;
use storyreel::nav::{NavSettings, SlideNavigator};
use storyreel::story::{SlideItem, SlideKind, SlideSequence};
use storyreel::ui::app::App;
use storyreel::ui::editor::{EditorField, EditorIntent};

/// Gesture units per page used by navigator tests.
pub const PAGE: f32 = 100.0;

pub const SETTLE: Duration = Duration::from_millis(200);

/// Small valid PNG encoded as a data URI.
pub fn png_data_uri() -> String {
    let img: ImageBuffer<Rgb<u8>, Vec<u8>> =
        ImageBuffer::from_fn(6, 4, |x, y| Rgb([x as u8 * 40, y as u8 * 60, 120]));
    let mut out = Cursor::new(Vec::new());
    DynamicImage::ImageRgb8(img)
        .write_to(&mut out, ImageFormat::Png)
        .expect("encode png");
    encode_data_uri(ImageFormat::Png, &out.into_inner())
}

/// `[Text("a"), Image(u1), Text("b")]`
pub fn mixed_sequence() -> SlideSequence {
    let mut sequence = SlideSequence::new();
    sequence.append(SlideKind::Text, "a");
    sequence.append(SlideKind::Image, png_data_uri());
    sequence.append(SlideKind::Text, "b");
    sequence
}

pub fn text_sequence(count: usize) -> SlideSequence {
    let mut sequence = SlideSequence::new();
    for i in 0..count {
        sequence.append(SlideKind::Text, format!("slide {}", i + 1));
    }
    sequence
}

pub fn open_navigator(slides: Arc<[SlideItem]>, now: Instant) -> SlideNavigator {
    let mut navigator = SlideNavigator::open(slides, NavSettings::default(), now);
    navigator.set_page_height(PAGE);
    navigator
}

/// Tick past the settle delay and return the new clock.
pub fn settle(navigator: &mut SlideNavigator, now: Instant) -> Instant {
    let later = now + SETTLE;
    navigator.tick(later);
    later
}

pub fn press_key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl_key(ch: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(ch), KeyModifiers::CONTROL)
}

pub fn mouse(kind: MouseEventKind, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column: 10,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

pub fn left_down(row: u16) -> MouseEvent {
    mouse(MouseEventKind::Down(MouseButton::Left), row)
}

pub fn left_up(row: u16) -> MouseEvent {
    mouse(MouseEventKind::Up(MouseButton::Left), row)
}

/// App sized to an 80x24 terminal with default config.
pub fn make_app() -> App {
    let mut app = App::new(Config::default());
    app.on_resize(80, 24);
    app
}

/// Add text slides through the editor, as a user would.
pub fn add_text_slides(app: &mut App, texts: &[&str]) {
    app.dispatch_editor(EditorIntent::Focus(EditorField::Composer));
    for text in texts {
        app.dispatch_editor(EditorIntent::InsertText(text.to_string()));
        app.submit_composer();
    }
}
