//! Word board state: tokens, the two-slot selection, and board availability.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tokens are drawn from `/words` or appended after a successful blend. The
//! selection holds at most [`MAX_SELECTED`] token IDs in click order; reaching
//! capacity is what triggers the blend flow in the page.

#[cfg(test)]
#[path = "words_test.rs"]
mod words_test;

/// Number of words combined by one blend.
pub const MAX_SELECTED: usize = 2;

/// Stable identifier for a rendered token. Word strings can repeat on the
/// board, so selection tracks tokens rather than text.
pub type TokenId = u32;

/// A selectable word on the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WordToken {
    pub id: TokenId,
    pub text: String,
    /// True for tokens produced by a blend rather than drawn from `/words`.
    pub blended: bool,
}

/// Result of clicking a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Board is disabled or the token is unknown.
    Ignored,
    /// The token was already selected: the selection restarted with only this
    /// token and the caller should reset the result and image views.
    Reset,
    /// The token joined the selection, evicting the oldest one when full.
    Selected { evicted: Option<TokenId> },
}

/// Board-level state for the word picker.
#[derive(Clone, Debug, Default)]
pub struct WordBoardState {
    /// Tokens in display order.
    pub tokens: Vec<WordToken>,
    /// Selected token IDs, oldest first.
    pub selection: Vec<TokenId>,
    /// True while a `/words` draw is in flight.
    pub loading: bool,
    /// True while a blend is in flight; clicks and refreshes are ignored.
    pub blending: bool,
    /// Inline error shown in place of the tokens.
    pub error: Option<String>,
    next_id: TokenId,
}

impl WordBoardState {
    /// Drop the current tokens and show the loading state.
    pub fn begin_loading(&mut self) {
        self.tokens.clear();
        self.selection.clear();
        self.loading = true;
        self.error = None;
    }

    /// Replace the board with a fresh draw of words.
    pub fn replace_words(&mut self, words: Vec<String>) {
        self.tokens.clear();
        self.selection.clear();
        for text in words {
            self.push_token(text, false);
        }
        self.loading = false;
        self.error = None;
    }

    /// Record a failed draw.
    pub fn fail_loading(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.error = Some(message.into());
    }

    /// Apply a click on `id`.
    pub fn click(&mut self, id: TokenId) -> ClickOutcome {
        if self.blending || !self.tokens.iter().any(|t| t.id == id) {
            return ClickOutcome::Ignored;
        }
        if self.is_selected(id) {
            self.selection.clear();
            self.selection.push(id);
            return ClickOutcome::Reset;
        }
        let evicted = if self.selection.len() >= MAX_SELECTED {
            Some(self.selection.remove(0))
        } else {
            None
        };
        self.selection.push(id);
        ClickOutcome::Selected { evicted }
    }

    #[must_use]
    pub fn is_selected(&self, id: TokenId) -> bool {
        self.selection.contains(&id)
    }

    /// Words to blend, in selection order, once the selection is full.
    #[must_use]
    pub fn selected_pair(&self) -> Option<(String, String)> {
        if self.selection.len() != MAX_SELECTED {
            return None;
        }
        let first = self.token_text(self.selection[0])?;
        let second = self.token_text(self.selection[1])?;
        Some((first.to_owned(), second.to_owned()))
    }

    /// Text shown in selection slot `index` (0 or 1), if filled.
    #[must_use]
    pub fn slot(&self, index: usize) -> Option<&str> {
        self.selection
            .get(index)
            .and_then(|id| self.token_text(*id))
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Append a blended word unless a token with the same text already exists.
    ///
    /// Returns `true` when a token was added.
    pub fn append_blended(&mut self, word: &str) -> bool {
        if word.is_empty() || self.tokens.iter().any(|t| t.text == word) {
            return false;
        }
        self.push_token(word.to_owned(), true);
        true
    }

    fn token_text(&self, id: TokenId) -> Option<&str> {
        self.tokens
            .iter()
            .find(|t| t.id == id)
            .map(|t| t.text.as_str())
    }

    fn push_token(&mut self, text: String, blended: bool) {
        let id = self.next_id;
        self.next_id = self.next_id.wrapping_add(1);
        self.tokens.push(WordToken { id, text, blended });
    }
}
