// src/domain/content/excerpt.rs

/// Derives a plain-text summary of at most `max_length` characters from
/// long-form `content`, preferring to end on a whole word.
///
/// Content that already fits is returned trimmed. Longer content is cut to
/// `max_length` characters and then back to the last whitespace inside that
/// window; when the window holds no whitespace the hard cut is returned.
pub fn derive_excerpt(content: &str, max_length: usize) -> String {
    let trimmed = content.trim();
    let Some((window_end, _)) = trimmed.char_indices().nth(max_length) else {
        return trimmed.to_owned();
    };

    let window = &trimmed[..window_end];
    let cut = window
        .rfind(char::is_whitespace)
        .map_or(window, |idx| window[..idx].trim_end());

    if cut.is_empty() {
        window.to_owned()
    } else {
        cut.to_owned()
    }
}
