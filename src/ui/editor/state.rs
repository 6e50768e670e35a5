use std::time::SystemTime;

use crate::story::{parse_tags, SaveKind, SavePayload, SlideId, SlideKind, SlideSequence, GENRES};
use crate::ui::mvi::UiState;

/// Focusable parts of the editor, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditorField {
    #[default]
    Title,
    Genre,
    Tags,
    Composer,
    Slides,
}

impl EditorField {
    const ORDER: [EditorField; 5] = [
        EditorField::Title,
        EditorField::Genre,
        EditorField::Tags,
        EditorField::Composer,
        EditorField::Slides,
    ];

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|field| *field == self)
            .unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.position() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.position() + len - 1) % len]
    }

    /// Fields that accept typed characters.
    pub fn is_text_input(self) -> bool {
        matches!(
            self,
            EditorField::Title | EditorField::Tags | EditorField::Composer
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// One-line message shown under the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Info,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    pub title: String,
    /// Index into [`GENRES`].
    pub genre: usize,
    /// Raw comma separated tag line.
    pub tags: String,
    pub slides: SlideSequence,
    /// Text of the next slide, or the path of the next image.
    pub composer: String,
    pub composer_kind: SlideKind,
    pub focus: EditorField,
    /// Highlighted row in the slide list.
    pub selected: usize,
    pub loading_image: bool,
    pub saving: Option<SaveKind>,
    /// Changed since the last successful save or load.
    pub dirty: bool,
    pub notice: Option<Notice>,
}

impl Default for EditorState {
    fn default() -> Self {
        Self {
            title: String::new(),
            genre: 0,
            tags: String::new(),
            slides: SlideSequence::new(),
            composer: String::new(),
            composer_kind: SlideKind::Text,
            focus: EditorField::default(),
            selected: 0,
            loading_image: false,
            saving: None,
            dirty: false,
            notice: None,
        }
    }
}

impl UiState for EditorState {}

impl EditorState {
    pub fn genre_name(&self) -> &'static str {
        GENRES.get(self.genre).copied().unwrap_or(GENRES[0])
    }

    pub fn parsed_tags(&self) -> Vec<String> {
        parse_tags(&self.tags)
    }

    pub fn selected_slide_id(&self) -> Option<SlideId> {
        self.slides.get(self.selected).map(|slide| slide.id)
    }

    pub fn is_saving(&self) -> bool {
        self.saving.is_some()
    }

    /// Build what a save sink receives.
    pub fn to_payload(&self, kind: SaveKind, now: SystemTime) -> SavePayload {
        SavePayload::new(
            kind,
            self.title.clone(),
            self.genre_name(),
            self.parsed_tags(),
            self.slides.clone(),
            now,
        )
    }
}
