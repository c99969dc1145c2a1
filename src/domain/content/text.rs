// src/domain/content/text.rs

/// Splits long-form content into display paragraphs: one per non-blank line,
/// each trimmed.
pub fn paragraphs(content: &str) -> Vec<String> {
    content
        .split('\n')
        .map(str::trim)
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
        .collect()
}
