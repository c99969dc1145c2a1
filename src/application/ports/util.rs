// src/application/ports/util.rs

/// Turns display text into slug form. May return an empty string when the
/// input has no usable characters; callers supply the fallback.
pub trait SlugGenerator: Send + Sync {
    fn slugify(&self, input: &str) -> String;
}
