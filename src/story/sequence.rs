use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::slide::{SlideId, SlideItem, SlideKind};

/// Ordered list of slides; insertion order is display order.
///
/// Every mutation renumbers `order` so that `slides[i].order == i` holds.
/// Deserialized sequences are renumbered as well.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Vec<SlideItem>", into = "Vec<SlideItem>")]
pub struct SlideSequence {
    items: Vec<SlideItem>,
}

impl SlideSequence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[SlideItem] {
        &self.items
    }

    pub fn get(&self, index: usize) -> Option<&SlideItem> {
        self.items.get(index)
    }

    pub fn position(&self, id: SlideId) -> Option<usize> {
        self.items.iter().position(|item| item.id == id)
    }

    /// Append a new slide at the tail and return its id.
    pub fn append(&mut self, kind: SlideKind, content: impl Into<String>) -> SlideId {
        let id = SlideId::new();
        self.items.push(SlideItem {
            id,
            kind,
            content: content.into(),
            order: self.items.len(),
        });
        id
    }

    /// Remove the slide with `id`. Unknown ids are a no-op and return `false`.
    pub fn remove(&mut self, id: SlideId) -> bool {
        let Some(index) = self.position(id) else {
            return false;
        };
        self.items.remove(index);
        self.renumber_from(index);
        true
    }

    /// Swap the slide with its predecessor.
    pub fn move_up(&mut self, id: SlideId) -> bool {
        match self.position(id) {
            Some(index) if index > 0 => {
                self.items.swap(index - 1, index);
                self.renumber_from(index - 1);
                true
            }
            _ => false,
        }
    }

    /// Swap the slide with its successor.
    pub fn move_down(&mut self, id: SlideId) -> bool {
        match self.position(id) {
            Some(index) if index + 1 < self.items.len() => {
                self.items.swap(index, index + 1);
                self.renumber_from(index);
                true
            }
            _ => false,
        }
    }

    /// Immutable copy handed to the preview reel.
    pub fn snapshot(&self) -> Arc<[SlideItem]> {
        Arc::from(self.items.as_slice())
    }

    fn renumber_from(&mut self, start: usize) {
        for (index, item) in self.items.iter_mut().enumerate().skip(start) {
            item.order = index;
        }
    }
}

impl From<Vec<SlideItem>> for SlideSequence {
    fn from(items: Vec<SlideItem>) -> Self {
        let mut sequence = Self { items };
        sequence.renumber_from(0);
        sequence
    }
}

impl From<SlideSequence> for Vec<SlideItem> {
    fn from(sequence: SlideSequence) -> Self {
        sequence.items
    }
}
