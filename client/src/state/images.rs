//! Image pipeline state: the per-word image cache and the current image card.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cache is an unbounded map from blended word to base64 image data. It is
//! seeded from the persisted gallery on load, so every gallery word is also a
//! cache key.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use std::collections::HashMap;

use crate::net::types::GeneratedImage;

/// Banner shown when image generation fails.
pub const IMAGE_FAILED_MESSAGE: &str = "Failed to generate image. Please try again.";

#[derive(Clone, Debug, Default)]
pub struct ImageState {
    /// Base64 image data keyed by word.
    pub cache: HashMap<String, String>,
    /// Whether the current-image card is shown at all.
    pub card_visible: bool,
    /// Loading overlay over the card.
    pub loading: bool,
    /// Image displayed in the card.
    pub current: Option<GeneratedImage>,
    /// Inline error shown in the card.
    pub error: Option<String>,
}

impl ImageState {
    /// Populate the cache from gallery entries.
    pub fn seed<'a>(&mut self, entries: impl IntoIterator<Item = &'a GeneratedImage>) {
        for entry in entries {
            self.cache
                .insert(entry.word.clone(), entry.image_data.clone());
        }
    }

    #[must_use]
    pub fn cached(&self, word: &str) -> Option<&str> {
        self.cache.get(word).map(String::as_str)
    }

    pub fn remember(&mut self, word: &str, image_data: &str) {
        self.cache
            .insert(word.to_owned(), image_data.to_owned());
    }

    /// Show the card with a loading overlay on top of whatever it displays.
    pub fn show_overlay(&mut self) {
        self.card_visible = true;
        self.loading = true;
        self.error = None;
    }

    /// Hide the overlay, leaving the card contents as they were.
    pub fn hide_overlay(&mut self) {
        self.loading = false;
    }

    /// Clear the card and show only the loading overlay.
    pub fn begin_generation(&mut self) {
        self.card_visible = true;
        self.loading = true;
        self.current = None;
        self.error = None;
    }

    pub fn show(&mut self, image: GeneratedImage) {
        self.card_visible = true;
        self.loading = false;
        self.error = None;
        self.current = Some(image);
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.current = None;
        self.error = Some(message.into());
    }

    /// Hide the card entirely. The cache is kept.
    pub fn hide(&mut self) {
        self.card_visible = false;
        self.loading = false;
        self.current = None;
        self.error = None;
    }
}
