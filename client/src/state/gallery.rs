//! Gallery state: the bounded, newest-first image history and the preview modal.
//!
//! DESIGN
//! ======
//! The list is capped at [`MAX_GALLERY_IMAGES`] on every mutation so the
//! persisted copy never grows past the cap either. Duplicates by word are
//! allowed here; the image pipeline checks `contains_word` before re-adding a
//! cached image.

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use crate::net::types::GeneratedImage;

/// Maximum number of images kept in the gallery.
pub const MAX_GALLERY_IMAGES: usize = 10;

#[derive(Clone, Debug, Default)]
pub struct GalleryState {
    /// Entries, newest first.
    pub entries: Vec<GeneratedImage>,
    /// Image currently open in the preview modal.
    pub preview: Option<GeneratedImage>,
}

impl GalleryState {
    /// Build from previously persisted entries, keeping the newest ones.
    #[must_use]
    pub fn from_entries(mut entries: Vec<GeneratedImage>) -> Self {
        entries.truncate(MAX_GALLERY_IMAGES);
        Self { entries, preview: None }
    }

    /// Insert at the front and drop the oldest entries past the cap.
    pub fn add(&mut self, entry: GeneratedImage) {
        self.entries.insert(0, entry);
        self.entries.truncate(MAX_GALLERY_IMAGES);
    }

    #[must_use]
    pub fn contains_word(&self, word: &str) -> bool {
        self.entries.iter().any(|e| e.word == word)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn open_preview(&mut self, entry: GeneratedImage) {
        self.preview = Some(entry);
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }
}
