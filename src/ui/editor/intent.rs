use crate::story::{SaveKind, SavePayload};
use crate::ui::mvi::Intent;

use super::state::{EditorField, Notice};

/// Intents that can be dispatched to the editor.
#[derive(Debug, Clone)]
pub enum EditorIntent {
    FocusNext,
    FocusPrev,
    Focus(EditorField),

    /// Typed character for the focused text field.
    InsertChar(char),
    /// Pasted text for the focused text field.
    InsertText(String),
    Backspace,

    /// Switch the composer between text and image slides.
    ToggleComposerKind,
    /// Append the composer text as a text slide. Blank text is rejected.
    SubmitText,
    /// An image path was handed off for loading.
    ImageRequested,
    /// Image finished loading; append it as a slide.
    ImageLoaded { uri: String },
    ImageFailed { message: String },

    CycleGenre { forward: bool },

    SelectPrev,
    SelectNext,
    RemoveSelected,
    MoveSelectedUp,
    MoveSelectedDown,

    SaveStarted { kind: SaveKind },
    SaveSucceeded { kind: SaveKind, location: String },
    SaveFailed { message: String },

    /// Replace the whole form with a saved story.
    Load { payload: SavePayload },

    Notify { notice: Notice },
    DismissNotice,
}

impl Intent for EditorIntent {}
