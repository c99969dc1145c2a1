// src/application/commands/validation.rs
use crate::application::error::{ApplicationError, ApplicationResult};

/// Collects every rule a submitted form breaks so they can all be reported at
/// once.
#[derive(Debug, Default)]
pub struct SubmissionCheck {
    violations: Vec<String>,
}

impl SubmissionCheck {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn require(&mut self, label: &str, value: &str) -> &mut Self {
        if value.is_empty() {
            self.violations.push(format!("{label} is required."));
        }
        self
    }

    pub fn max_chars(&mut self, label: &str, value: &str, max: usize) -> &mut Self {
        if value.chars().count() > max {
            self.violations
                .push(format!("{label} must be at most {max} characters."));
        }
        self
    }

    pub fn finish(&mut self) -> ApplicationResult<()> {
        if self.violations.is_empty() {
            Ok(())
        } else {
            Err(ApplicationError::InvalidSubmission(std::mem::take(
                &mut self.violations,
            )))
        }
    }
}
