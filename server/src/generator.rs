//! Upstream word/image generator.
//!
//! DESIGN
//! ======
//! Blending and image generation are delegated to an external service that
//! speaks the same `/blend` and `/generate-image` JSON shapes this server
//! exposes. Handlers depend on the [`Generator`] trait so tests can swap in a
//! fake without a network.

use serde::{Deserialize, Serialize};

use crate::config::GeneratorTimeouts;

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced while relaying to the generator.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The request never produced a response (connect, timeout, body read).
    #[error("generator request failed: {0}")]
    Request(String),

    /// The generator answered with a non-success status.
    #[error("generator returned status {status}: {body}")]
    Status { status: u16, body: String },

    /// The generator body was not the expected JSON.
    #[error("generator response parse failed: {0}")]
    Parse(String),

    /// The generator answered 2xx but left out the expected field.
    #[error("generator response missing {0}")]
    Missing(&'static str),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

// =============================================================================
// TRAIT
// =============================================================================

#[async_trait::async_trait]
pub trait Generator: Send + Sync {
    /// Blend two normalized words into one.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the upstream call fails or yields no word.
    async fn blend(&self, word1: &str, word2: &str) -> Result<String, GeneratorError>;

    /// Produce base64 JPEG data depicting `word`.
    ///
    /// # Errors
    ///
    /// Returns a [`GeneratorError`] if the upstream call fails or yields no image.
    async fn generate_image(&self, word: &str) -> Result<String, GeneratorError>;
}

// =============================================================================
// WIRE TYPES
// =============================================================================

#[derive(Serialize)]
struct BlendBody<'a> {
    word1: &'a str,
    word2: &'a str,
}

#[derive(Serialize)]
struct ImageBody<'a> {
    word: &'a str,
}

#[derive(Deserialize)]
struct BlendReply {
    #[serde(default)]
    blended_word: Option<String>,
}

#[derive(Deserialize)]
struct ImageReply {
    #[serde(default)]
    image_data: Option<String>,
}

// =============================================================================
// HTTP CLIENT
// =============================================================================

/// [`Generator`] backed by HTTP calls to `base_url`.
pub struct UpstreamGenerator {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamGenerator {
    /// # Errors
    ///
    /// Returns [`GeneratorError::HttpClientBuild`] if reqwest rejects the settings.
    pub fn new(base_url: &str, timeouts: GeneratorTimeouts) -> Result<Self, GeneratorError> {
        let http = reqwest::Client::builder()
            .timeout(timeouts.request())
            .connect_timeout(timeouts.connect())
            .build()
            .map_err(|e| GeneratorError::HttpClientBuild(e.to_string()))?;
        Ok(Self { http, base_url: base_url.trim_end_matches('/').to_string() })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn send_json(&self, path: &str, body: &impl Serialize) -> Result<String, GeneratorError> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| GeneratorError::Request(e.to_string()))?;
        if !status.is_success() {
            return Err(GeneratorError::Status { status: status.as_u16(), body: text });
        }
        Ok(text)
    }
}

#[async_trait::async_trait]
impl Generator for UpstreamGenerator {
    async fn blend(&self, word1: &str, word2: &str) -> Result<String, GeneratorError> {
        let text = self.send_json("/blend", &BlendBody { word1, word2 }).await?;
        parse_blend_reply(&text)
    }

    async fn generate_image(&self, word: &str) -> Result<String, GeneratorError> {
        let text = self.send_json("/generate-image", &ImageBody { word }).await?;
        parse_image_reply(&text)
    }
}

pub(crate) fn parse_blend_reply(text: &str) -> Result<String, GeneratorError> {
    let reply: BlendReply = serde_json::from_str(text).map_err(|e| GeneratorError::Parse(e.to_string()))?;
    reply
        .blended_word
        .map(|w| w.trim().to_string())
        .filter(|w| !w.is_empty())
        .ok_or(GeneratorError::Missing("blended_word"))
}

pub(crate) fn parse_image_reply(text: &str) -> Result<String, GeneratorError> {
    let reply: ImageReply = serde_json::from_str(text).map_err(|e| GeneratorError::Parse(e.to_string()))?;
    reply
        .image_data
        .filter(|d| !d.is_empty())
        .ok_or(GeneratorError::Missing("image_data"))
}

#[cfg(test)]
#[path = "generator_test.rs"]
mod tests;
