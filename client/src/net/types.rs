//! Wire DTOs for the `/words`, `/blend`, and `/generate-image` endpoints.
//!
//! DESIGN
//! ======
//! `GeneratedImage` doubles as the persisted gallery entry, so the
//! `localStorage` JSON and the image response share one shape.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

use super::error::ApiError;

/// `GET /words` response.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct WordsResponse {
    #[serde(default)]
    pub words: Vec<String>,
}

/// `POST /blend` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct BlendRequest<'a> {
    pub word1: &'a str,
    pub word2: &'a str,
}

/// `POST /blend` response. The word may be missing or null.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct BlendResponse {
    #[serde(default)]
    pub blended_word: Option<String>,
}

impl BlendResponse {
    /// Extract the blended word, treating a missing or blank value as an error.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::EmptyBlend`] when no usable word is present.
    pub fn into_word(self) -> Result<String, ApiError> {
        match self.blended_word {
            Some(word) if !word.trim().is_empty() => Ok(word),
            _ => Err(ApiError::EmptyBlend),
        }
    }
}

/// `POST /generate-image` request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ImageRequest<'a> {
    pub word: &'a str,
}

/// `POST /generate-image` response.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ImageResponse {
    pub image_data: String,
}

/// A generated image and the word it depicts.
///
/// Fields default to empty so malformed persisted entries deserialize and can
/// be filtered with [`GeneratedImage::is_valid`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedImage {
    #[serde(default)]
    pub word: String,
    #[serde(default)]
    pub image_data: String,
}

impl GeneratedImage {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.word.is_empty() && !self.image_data.is_empty()
    }
}
