//! Deterministic color classes for word tokens.

#[cfg(test)]
#[path = "word_color_test.rs"]
mod word_color_test;

/// Number of `word-color-N` classes defined in the stylesheet.
pub const WORD_COLOR_COUNT: u32 = 8;

/// Color index in `1..=WORD_COLOR_COUNT` from the UTF-16 code of the
/// lowercased first character. Empty words map to 1.
#[must_use]
pub fn color_index(word: &str) -> u32 {
    let Some(first) = word.chars().next() else {
        return 1;
    };
    let lowered: String = first.to_lowercase().collect();
    let code = lowered.encode_utf16().next().map_or(0, u32::from);
    (code % WORD_COLOR_COUNT) + 1
}

/// CSS class list for a token.
#[must_use]
pub fn token_class(word: &str, blended: bool) -> String {
    if blended {
        "word-item badge-primary".to_owned()
    } else {
        format!("word-item word-color-{}", color_index(word))
    }
}
