//! Helpers for presenting base64 image payloads.

#[cfg(test)]
#[path = "image_data_test.rs"]
mod image_data_test;

/// Inline `src` for a base64 JPEG payload.
#[must_use]
pub fn data_uri(image_data: &str) -> String {
    format!("data:image/jpeg;base64,{image_data}")
}

/// Download filename derived from the word: whitespace runs become `-`.
#[must_use]
pub fn download_filename(word: &str) -> String {
    let mut name = String::with_capacity(word.len() + 4);
    let mut in_space = false;
    for ch in word.chars() {
        if ch.is_whitespace() {
            if !in_space {
                name.push('-');
            }
            in_space = true;
        } else {
            name.push(ch);
            in_space = false;
        }
    }
    name.push_str(".jpg");
    name
}
