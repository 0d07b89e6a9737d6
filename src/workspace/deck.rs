//! Deck — the presentation tab's slides.
//!
//! DESIGN
//! ======
//! Slides are keyed by a `SlideId` handed out by a monotonic counter, so a
//! deleted slide's id is never reused and a new slide can never overwrite an
//! existing one. Navigation walks the ids in order.
//!
//! INVARIANTS
//! ==========
//! - `slides` is never empty.
//! - `current` is always a key of `slides`.
//! - `next_id` is greater than every key of `slides`.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use super::WorkspaceError;

pub const NEW_SLIDE_TITLE: &str = "New Slide";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct SlideId(pub u32);

impl fmt::Display for SlideId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Slide {
    pub title: String,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Deck {
    slides: BTreeMap<SlideId, Slide>,
    current: SlideId,
    #[serde(skip)]
    next_id: SlideId,
}

impl Default for Deck {
    fn default() -> Self {
        let first = SlideId(1);
        let mut slides = BTreeMap::new();
        slides.insert(first, Slide { title: "First Slide".into(), content: "- Point 1\n- Point 2".into() });
        Self { slides, current: first, next_id: SlideId(2) }
    }
}

impl Deck {
    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    /// Always false; a deck keeps at least one slide.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    #[must_use]
    pub fn current_id(&self) -> SlideId {
        self.current
    }

    #[must_use]
    pub fn current(&self) -> &Slide {
        match self.slides.get(&self.current) {
            Some(slide) => slide,
            None => unreachable!("current slide {} missing from deck", self.current),
        }
    }

    /// 1-based position of the current slide in display order.
    #[must_use]
    pub fn position(&self) -> usize {
        self.slides.range(..=self.current).count()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SlideId, &Slide)> {
        self.slides.iter().map(|(id, slide)| (*id, slide))
    }

    /// Step back one slide, staying put on the first.
    #[must_use]
    pub fn previous(&self) -> Self {
        let target = self.slides.range(..self.current).next_back().map(|(id, _)| *id);
        self.with_current(target.unwrap_or(self.current))
    }

    /// Step forward one slide, staying put on the last.
    #[must_use]
    pub fn next(&self) -> Self {
        let target = self
            .slides
            .range(self.current..)
            .map(|(id, _)| *id)
            .find(|id| *id != self.current);
        self.with_current(target.unwrap_or(self.current))
    }

    /// Jump to a slide by id.
    ///
    /// # Errors
    ///
    /// Returns an error if no slide has that id.
    pub fn select(&self, id: SlideId) -> Result<Self, WorkspaceError> {
        if !self.slides.contains_key(&id) {
            return Err(WorkspaceError::SlideNotFound(id));
        }
        Ok(self.with_current(id))
    }

    /// Add a slide under a fresh id and make it current.
    ///
    /// # Errors
    ///
    /// Returns an error once the id counter is exhausted.
    pub fn push_slide(&self, title: String, content: String) -> Result<Self, WorkspaceError> {
        let id = self.next_id;
        let following = id.0.checked_add(1).ok_or(WorkspaceError::SlideIdsExhausted)?;

        let mut next = self.clone();
        next.next_id = SlideId(following);
        next.slides.insert(id, Slide { title, content });
        next.current = id;
        Ok(next)
    }

    /// Overwrite the title and content of the current slide.
    #[must_use]
    pub fn update_current(&self, title: String, content: String) -> Self {
        let mut next = self.clone();
        next.slides.insert(self.current, Slide { title, content });
        next
    }

    /// Delete the current slide. The previous slide becomes current, or the
    /// following one when the first slide is removed.
    ///
    /// # Errors
    ///
    /// Returns an error if this is the only slide left.
    pub fn remove_current(&self) -> Result<Self, WorkspaceError> {
        if self.slides.len() <= 1 {
            return Err(WorkspaceError::LastSlide);
        }
        let before = self.previous();
        let landing = if before.current == self.current { self.next().current } else { before.current };

        let mut next = self.clone();
        next.slides.remove(&self.current);
        next.current = landing;
        Ok(next)
    }

    fn with_current(&self, current: SlideId) -> Self {
        let mut next = self.clone();
        next.current = current;
        next
    }
}

#[cfg(test)]
#[path = "deck_test.rs"]
mod tests;
