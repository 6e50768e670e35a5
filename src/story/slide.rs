use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Stable identifier assigned when a slide is created.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SlideId(Uuid);

impl SlideId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for SlideId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlideKind {
    Text,
    Image,
}

impl SlideKind {
    pub fn label(self) -> &'static str {
        match self {
            SlideKind::Text => "Text",
            SlideKind::Image => "Image",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            SlideKind::Text => SlideKind::Image,
            SlideKind::Image => SlideKind::Text,
        }
    }
}

/// One unit of story content.
///
/// For [`SlideKind::Text`] `content` is the raw text, for
/// [`SlideKind::Image`] it is a displayable reference (a `data:` URI).
/// `order` always equals the slide's index in the owning sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlideItem {
    pub id: SlideId,
    pub kind: SlideKind,
    pub content: String,
    pub order: usize,
}

impl SlideItem {
    pub fn is_text(&self) -> bool {
        self.kind == SlideKind::Text
    }

    /// Short single-line description for list views.
    pub fn summary(&self, max_chars: usize) -> String {
        let raw = match self.kind {
            SlideKind::Text => self.content.replace('\n', " "),
            SlideKind::Image => {
                let mime = self
                    .content
                    .strip_prefix("data:")
                    .and_then(|rest| rest.split(';').next())
                    .unwrap_or("image");
                format!("[{}]", mime)
            }
        };
        if raw.chars().count() <= max_chars {
            return raw;
        }
        let mut truncated: String = raw.chars().take(max_chars.saturating_sub(1)).collect();
        truncated.push('…');
        truncated
    }
}
