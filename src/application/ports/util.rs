// src/application/ports/util.rs
pub trait SlugGenerator: Send + Sync {
    /// URL-safe candidate for `input`; empty when nothing usable remains.
    fn slugify(&self, input: &str) -> String;
}
