//! Browser `localStorage` persistence for the image gallery.
//!
//! SYSTEM CONTEXT
//! ==============
//! The gallery is stored as a JSON array of `{word, image_data}` under
//! [`GALLERY_STORAGE_KEY`]. Parsing and encoding are plain functions so they
//! run in native tests; only the storage handle itself is hydrate-only.
//!
//! TRADE-OFFS
//! ==========
//! Storage is best-effort. Callers log failures and fall back to an empty
//! gallery, so a full quota or corrupted value never breaks the page.

#[cfg(test)]
#[path = "gallery_storage_test.rs"]
mod gallery_storage_test;

use crate::net::types::GeneratedImage;
use crate::state::gallery::MAX_GALLERY_IMAGES;

/// `localStorage` key holding the serialized gallery.
pub const GALLERY_STORAGE_KEY: &str = "wordBlenderGallery";

/// Failures reading or writing the persisted gallery.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("localStorage is not available")]
    Unavailable,
    #[error("localStorage read failed")]
    Read,
    #[error("localStorage write failed (quota exceeded?)")]
    Write,
    #[error("stored gallery is not valid JSON: {0}")]
    Parse(#[source] serde_json::Error),
    #[error("gallery could not be serialized: {0}")]
    Encode(#[source] serde_json::Error),
}

/// Decode a stored gallery, keeping the newest entries and dropping any
/// entry without a word or image payload.
///
/// # Errors
///
/// Returns [`StorageError::Parse`] if `raw` is not a JSON array of entries.
pub fn parse_gallery(raw: &str) -> Result<Vec<GeneratedImage>, StorageError> {
    let mut entries: Vec<Option<GeneratedImage>> = serde_json::from_str(raw).map_err(StorageError::Parse)?;
    entries.truncate(MAX_GALLERY_IMAGES);
    Ok(entries
        .into_iter()
        .flatten()
        .filter(GeneratedImage::is_valid)
        .collect())
}

/// Encode at most [`MAX_GALLERY_IMAGES`] entries for storage.
///
/// # Errors
///
/// Returns [`StorageError::Encode`] if serialization fails.
pub fn encode_gallery(entries: &[GeneratedImage]) -> Result<String, StorageError> {
    let capped = &entries[..entries.len().min(MAX_GALLERY_IMAGES)];
    serde_json::to_string(capped).map_err(StorageError::Encode)
}

/// Load the persisted gallery. A missing key is an empty gallery.
///
/// # Errors
///
/// Returns an error if storage is unavailable or the stored value is corrupt.
pub fn load_gallery() -> Result<Vec<GeneratedImage>, StorageError> {
    #[cfg(feature = "hydrate")]
    {
        let storage = local_storage()?;
        match storage
            .get_item(GALLERY_STORAGE_KEY)
            .map_err(|_| StorageError::Read)?
        {
            Some(raw) => parse_gallery(&raw),
            None => Ok(Vec::new()),
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Ok(Vec::new())
    }
}

/// Persist the gallery, capped to [`MAX_GALLERY_IMAGES`] entries.
///
/// # Errors
///
/// Returns an error if storage is unavailable, serialization fails, or the
/// browser rejects the write.
pub fn save_gallery(entries: &[GeneratedImage]) -> Result<(), StorageError> {
    let raw = encode_gallery(entries)?;
    #[cfg(feature = "hydrate")]
    {
        local_storage()?
            .set_item(GALLERY_STORAGE_KEY, &raw)
            .map_err(|_| StorageError::Write)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = raw;
        Ok(())
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}
