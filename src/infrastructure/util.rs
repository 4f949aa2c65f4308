use crate::application::ports::util::SlugGenerator;
use crate::domain::slug::SLUG_MAX_LEN;

/// Lower-cases the input, collapses every run of characters outside
/// `[a-z0-9]` into one `-` and trims hyphens at both ends.
#[derive(Default, Clone, Copy)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len().min(SLUG_MAX_LEN));
        let mut pending_dash = false;

        for ch in input.chars().flat_map(char::to_lowercase) {
            if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
                if pending_dash && !slug.is_empty() {
                    slug.push('-');
                }
                pending_dash = false;
                slug.push(ch);
            } else {
                pending_dash = true;
            }
            if slug.len() >= SLUG_MAX_LEN {
                break;
            }
        }

        slug.truncate(SLUG_MAX_LEN);
        while slug.ends_with('-') {
            slug.pop();
        }
        slug
    }
}
