use serde::{Deserialize, Serialize};
use std::time::SystemTime;
use thiserror::Error;

use super::sequence::SlideSequence;

/// Genres offered by the editor, in display order.
pub const GENRES: &[&str] = &[
    "General",
    "Travel",
    "Food",
    "Fiction",
    "Technology",
    "Lifestyle",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SaveKind {
    Draft,
    Published,
}

impl SaveKind {
    pub fn label(self) -> &'static str {
        match self {
            SaveKind::Draft => "draft",
            SaveKind::Published => "published",
        }
    }
}

/// Reasons a payload cannot be handed to a sink.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("Nothing to save: add a title or at least one slide")]
    Empty,

    #[error("A story needs a title before it can be published")]
    MissingTitle,

    #[error("A story needs at least one slide before it can be published")]
    NoSlides,
}

/// Everything a save sink receives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SavePayload {
    pub kind: SaveKind,
    pub title: String,
    pub genre: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub slides: SlideSequence,
    /// Set only for published stories.
    #[serde(default)]
    pub published_at: Option<SystemTime>,
}

impl SavePayload {
    pub fn new(
        kind: SaveKind,
        title: impl Into<String>,
        genre: impl Into<String>,
        tags: Vec<String>,
        slides: SlideSequence,
        now: SystemTime,
    ) -> Self {
        Self {
            kind,
            title: title.into().trim().to_string(),
            genre: genre.into(),
            tags,
            slides,
            published_at: (kind == SaveKind::Published).then_some(now),
        }
    }

    /// Drafts need some content; published stories need a title and slides.
    pub fn validate(&self) -> Result<(), PayloadError> {
        let has_title = !self.title.trim().is_empty();
        match self.kind {
            SaveKind::Draft if !has_title && self.slides.is_empty() => Err(PayloadError::Empty),
            SaveKind::Draft => Ok(()),
            SaveKind::Published if !has_title => Err(PayloadError::MissingTitle),
            SaveKind::Published if self.slides.is_empty() => Err(PayloadError::NoSlides),
            SaveKind::Published => Ok(()),
        }
    }
}

/// Split a comma separated tag line into distinct, trimmed tags.
///
/// A leading `#` is dropped and duplicates are compared case-insensitively.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for raw in input.split(',') {
        let tag = raw.trim().trim_start_matches('#').trim();
        if tag.is_empty() {
            continue;
        }
        if tags.iter().any(|existing| existing.eq_ignore_ascii_case(tag)) {
            continue;
        }
        tags.push(tag.to_string());
    }
    tags
}
