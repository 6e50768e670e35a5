//! Reducer for the story editor.

use crate::story::{SaveKind, SlideKind, GENRES};
use crate::ui::mvi::Reducer;

use super::intent::EditorIntent;
use super::state::{EditorField, EditorState, Notice};

/// Reducer for editor state transitions.
///
/// Loading images and saving happen outside; their outcomes come back as
/// intents.
pub struct EditorReducer;

impl Reducer for EditorReducer {
    type State = EditorState;
    type Intent = EditorIntent;

    fn reduce(mut state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            EditorIntent::FocusNext => state.focus = state.focus.next(),
            EditorIntent::FocusPrev => state.focus = state.focus.prev(),
            EditorIntent::Focus(field) => state.focus = field,

            EditorIntent::InsertChar(ch) => {
                if let Some(field) = focused_text(&mut state) {
                    field.push(ch);
                    state.dirty = true;
                }
            }
            EditorIntent::InsertText(text) => {
                let multiline = state.focus == EditorField::Composer
                    && state.composer_kind == SlideKind::Text;
                if let Some(field) = focused_text(&mut state) {
                    if multiline {
                        field.push_str(&text);
                    } else {
                        field.push_str(&text.replace(['\r', '\n'], " "));
                    }
                    state.dirty = true;
                }
            }
            EditorIntent::Backspace => {
                if let Some(field) = focused_text(&mut state) {
                    if field.pop().is_some() {
                        state.dirty = true;
                    }
                }
            }

            EditorIntent::ToggleComposerKind => {
                if !state.loading_image {
                    state.composer_kind = state.composer_kind.toggled();
                    state.composer.clear();
                }
            }
            EditorIntent::SubmitText => {
                if state.composer_kind != SlideKind::Text {
                    return state;
                }
                let text = state.composer.trim();
                if text.is_empty() {
                    state.notice = Some(Notice::error("Slide text is empty"));
                    return state;
                }
                let text = text.to_string();
                state.slides.append(SlideKind::Text, text);
                state.composer.clear();
                state.selected = state.slides.len() - 1;
                state.dirty = true;
                state.notice = Some(Notice::info(format!(
                    "Added text slide {}",
                    state.slides.len()
                )));
            }
            EditorIntent::ImageRequested => {
                state.loading_image = true;
                state.notice = Some(Notice::info("Loading image..."));
            }
            EditorIntent::ImageLoaded { uri } => {
                state.loading_image = false;
                state.slides.append(SlideKind::Image, uri);
                state.composer.clear();
                state.selected = state.slides.len() - 1;
                state.dirty = true;
                state.notice = Some(Notice::info(format!(
                    "Added image slide {}",
                    state.slides.len()
                )));
            }
            EditorIntent::ImageFailed { message } => {
                state.loading_image = false;
                state.notice = Some(Notice::error(message));
            }

            EditorIntent::CycleGenre { forward } => {
                let len = GENRES.len();
                state.genre = if forward {
                    (state.genre + 1) % len
                } else {
                    (state.genre + len - 1) % len
                };
                state.dirty = true;
            }

            EditorIntent::SelectPrev => state.selected = state.selected.saturating_sub(1),
            EditorIntent::SelectNext => {
                if state.selected + 1 < state.slides.len() {
                    state.selected += 1;
                }
            }
            EditorIntent::RemoveSelected => {
                if let Some(id) = state.selected_slide_id() {
                    state.slides.remove(id);
                    state.selected = state.selected.min(state.slides.len().saturating_sub(1));
                    state.dirty = true;
                    state.notice = Some(Notice::info("Slide removed"));
                }
            }
            EditorIntent::MoveSelectedUp => {
                if let Some(id) = state.selected_slide_id() {
                    if state.slides.move_up(id) {
                        state.selected -= 1;
                        state.dirty = true;
                    }
                }
            }
            EditorIntent::MoveSelectedDown => {
                if let Some(id) = state.selected_slide_id() {
                    if state.slides.move_down(id) {
                        state.selected += 1;
                        state.dirty = true;
                    }
                }
            }

            EditorIntent::SaveStarted { kind } => {
                state.saving = Some(kind);
                state.notice = Some(Notice::info(match kind {
                    SaveKind::Draft => "Saving draft...",
                    SaveKind::Published => "Publishing...",
                }));
            }
            EditorIntent::SaveSucceeded { kind, location } => {
                state.saving = None;
                state.dirty = false;
                state.notice = Some(Notice::info(match kind {
                    SaveKind::Draft => format!("Draft saved to {location}"),
                    SaveKind::Published => format!("Published to {location}"),
                }));
            }
            EditorIntent::SaveFailed { message } => {
                state.saving = None;
                state.notice = Some(Notice::error(message));
            }

            EditorIntent::Load { payload } => {
                let genre = GENRES
                    .iter()
                    .position(|name| name.eq_ignore_ascii_case(&payload.genre))
                    .unwrap_or(0);
                let notice = Notice::info(format!(
                    "Loaded \"{}\" ({} slides)",
                    payload.title,
                    payload.slides.len()
                ));
                state = EditorState {
                    title: payload.title,
                    genre,
                    tags: payload.tags.join(", "),
                    slides: payload.slides,
                    notice: Some(notice),
                    ..EditorState::default()
                };
            }

            EditorIntent::Notify { notice } => state.notice = Some(notice),
            EditorIntent::DismissNotice => state.notice = None,
        }
        state
    }
}

/// The string behind the focused field, if it takes typed input.
fn focused_text(state: &mut EditorState) -> Option<&mut String> {
    match state.focus {
        EditorField::Title => Some(&mut state.title),
        EditorField::Tags => Some(&mut state.tags),
        EditorField::Composer if !state.loading_image => Some(&mut state.composer),
        _ => None,
    }
}
