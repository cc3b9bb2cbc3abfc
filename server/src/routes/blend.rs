//! Word, blend, and image endpoints.
//!
//! `/words` is served locally from the word pool. `/blend` and
//! `/generate-image` normalize their input and relay to the configured
//! [`Generator`](crate::generator::Generator).

#[cfg(test)]
#[path = "blend_test.rs"]
mod blend_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde::{Deserialize, Serialize};

use crate::generator::GeneratorError;
use crate::state::AppState;
use crate::words;

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Debug, Serialize)]
pub struct WordsResponse {
    pub words: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct BlendBody {
    pub word1: String,
    pub word2: String,
}

#[derive(Debug, Serialize)]
pub struct BlendResponse {
    pub blended_word: String,
}

#[derive(Debug, Deserialize)]
pub struct ImageBody {
    pub word: String,
}

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub image_data: String,
    pub word: String,
}

// =============================================================================
// ERROR
// =============================================================================

/// Handler failure rendered as a status code with a plain-text body.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(&'static str),

    #[error("generator not configured")]
    NotConfigured,

    #[error(transparent)]
    Upstream(#[from] GeneratorError),
}

impl ApiError {
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotConfigured => StatusCode::SERVICE_UNAVAILABLE,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status(), self.to_string()).into_response()
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /words` — a fresh random draw from the pool.
pub async fn words() -> Json<WordsResponse> {
    Json(WordsResponse { words: words::draw() })
}

/// `POST /blend` — blend two words into one.
pub async fn blend(State(state): State<AppState>, Json(body): Json<BlendBody>) -> Result<Json<BlendResponse>, ApiError> {
    let word1 = normalize_blend_word(&body.word1);
    let word2 = normalize_blend_word(&body.word2);
    if word1.is_empty() || word2.is_empty() {
        return Err(ApiError::BadRequest("two words are required"));
    }
    let generator = state.generator.as_ref().ok_or(ApiError::NotConfigured)?;

    tracing::info!(%word1, %word2, "blending words");
    let blended_word = generator.blend(&word1, &word2).await.map_err(|e| {
        tracing::warn!(%word1, %word2, error = %e, "blend failed");
        ApiError::from(e)
    })?;
    tracing::info!(word = %blended_word, "blend generated");

    Ok(Json(BlendResponse { blended_word }))
}

/// `POST /generate-image` — base64 JPEG illustrating a word.
pub async fn generate_image(
    State(state): State<AppState>,
    Json(body): Json<ImageBody>,
) -> Result<Json<ImageResponse>, ApiError> {
    let word = body.word.trim().to_string();
    if word.is_empty() {
        return Err(ApiError::BadRequest("a word is required"));
    }
    let generator = state.generator.as_ref().ok_or(ApiError::NotConfigured)?;

    tracing::info!(%word, "generating image");
    let image_data = generator.generate_image(&word).await.map_err(|e| {
        tracing::warn!(%word, error = %e, "image generation failed");
        ApiError::from(e)
    })?;

    Ok(Json(ImageResponse { image_data, word }))
}

fn normalize_blend_word(raw: &str) -> String {
    raw.trim().to_lowercase()
}
