//! REST helpers for the blend endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR) and native tests: [`HttpApi`] returns
//! [`ApiError::Unavailable`] since these endpoints are only called from the
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Every call returns `Result<_, ApiError>`; callers turn failures into inline
//! banners and never panic.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use std::time::Duration;

use super::error::ApiError;
#[cfg(feature = "hydrate")]
use super::types::{BlendRequest, BlendResponse, ImageRequest, ImageResponse, WordsResponse};

pub const WORDS_ENDPOINT: &str = "/words";
pub const BLEND_ENDPOINT: &str = "/blend";
pub const GENERATE_IMAGE_ENDPOINT: &str = "/generate-image";

/// Operations the blend flows need from the outside world.
///
/// The browser build talks HTTP through [`HttpApi`]; tests substitute a fake.
#[allow(async_fn_in_trait)]
pub trait BlendApi {
    /// Draw a fresh set of words for the board.
    async fn fetch_words(&self) -> Result<Vec<String>, ApiError>;

    /// Blend two words into a new one.
    async fn blend(&self, word1: &str, word2: &str) -> Result<String, ApiError>;

    /// Generate an image for `word`, returning base64 image data.
    async fn generate_image(&self, word: &str) -> Result<String, ApiError>;

    /// Wait before continuing; used to pace cached replays.
    async fn pause(&self, duration: Duration);
}

/// [`BlendApi`] backed by same-origin HTTP requests.
#[derive(Clone, Copy, Debug, Default)]
pub struct HttpApi;

impl BlendApi for HttpApi {
    async fn fetch_words(&self) -> Result<Vec<String>, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let resp = gloo_net::http::Request::get(WORDS_ENDPOINT)
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let resp = ensure_ok(resp).await?;
            let body: WordsResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.words)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Err(ApiError::Unavailable)
        }
    }

    async fn blend(&self, word1: &str, word2: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = BlendRequest { word1, word2 };
            let resp = gloo_net::http::Request::post(BLEND_ENDPOINT)
                .json(&payload)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let resp = ensure_ok(resp).await?;
            let body: BlendResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            body.into_word()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (word1, word2);
            Err(ApiError::Unavailable)
        }
    }

    async fn generate_image(&self, word: &str) -> Result<String, ApiError> {
        #[cfg(feature = "hydrate")]
        {
            let payload = ImageRequest { word };
            let resp = gloo_net::http::Request::post(GENERATE_IMAGE_ENDPOINT)
                .json(&payload)
                .map_err(|e| ApiError::Request(e.to_string()))?
                .send()
                .await
                .map_err(|e| ApiError::Request(e.to_string()))?;
            let resp = ensure_ok(resp).await?;
            let body: ImageResponse = resp
                .json()
                .await
                .map_err(|e| ApiError::Decode(e.to_string()))?;
            Ok(body.image_data)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = word;
            Err(ApiError::Unavailable)
        }
    }

    async fn pause(&self, duration: Duration) {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::sleep(duration).await;
        #[cfg(not(feature = "hydrate"))]
        let _ = duration;
    }
}

/// Pass through a 2xx response; otherwise read its body as the error text.
#[cfg(feature = "hydrate")]
async fn ensure_ok(resp: gloo_net::http::Response) -> Result<gloo_net::http::Response, ApiError> {
    if resp.ok() {
        return Ok(resp);
    }
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    Err(ApiError::status(status, &body))
}
