//! Blend result panel state.

#[cfg(test)]
#[path = "blend_test.rs"]
mod blend_test;

/// Lifecycle of the most recent blend request.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum BlendPhase {
    /// Nothing to show; the result panel is hidden.
    #[default]
    Idle,
    /// Request in flight for the two words.
    Pending { word1: String, word2: String },
    /// Server returned a blended word.
    Blended { word: String },
    /// Request failed; `message` is rendered in the error banner.
    Failed { message: String },
}

/// State for the blend result panel.
#[derive(Clone, Debug, Default)]
pub struct BlendState {
    pub phase: BlendPhase,
}

impl BlendState {
    pub fn begin(&mut self, word1: &str, word2: &str) {
        self.phase = BlendPhase::Pending { word1: word1.to_owned(), word2: word2.to_owned() };
    }

    pub fn succeed(&mut self, word: &str) {
        self.phase = BlendPhase::Blended { word: word.to_owned() };
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.phase = BlendPhase::Failed { message: message.into() };
    }

    /// Hide the panel and drop any error banner.
    pub fn reset(&mut self) {
        self.phase = BlendPhase::Idle;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        matches!(self.phase, BlendPhase::Pending { .. })
    }

    /// Latest blended word, if the last request succeeded.
    #[must_use]
    pub fn blended_word(&self) -> Option<&str> {
        match &self.phase {
            BlendPhase::Blended { word } => Some(word),
            _ => None,
        }
    }

    /// Banner text for a failed blend.
    #[must_use]
    pub fn error_banner(&self) -> Option<String> {
        match &self.phase {
            BlendPhase::Failed { message } => Some(format!("Error: {message}")),
            _ => None,
        }
    }
}
