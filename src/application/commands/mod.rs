// src/application/commands/mod.rs
pub mod posts;
pub mod tools;
pub mod validation;

/// Inserts attempted before a slug race is reported as a conflict.
pub(crate) const MAX_INSERT_ATTEMPTS: usize = 3;
