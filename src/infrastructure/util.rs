// src/infrastructure/util.rs
use crate::application::ports::util::SlugGenerator;
use crate::domain::content::slug::normalize;

#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        normalize(input)
    }
}
