use crate::application::ports::util::SlugGenerator;

/// Lowercases the input, collapses whitespace runs to a single hyphen and
/// drops everything outside `[a-z0-9_-]`. Punctuation is removed rather than
/// hyphenated, so "Don't panic" becomes "dont-panic".
#[derive(Default, Clone)]
pub struct DefaultSlugGenerator;

impl SlugGenerator for DefaultSlugGenerator {
    fn slugify(&self, input: &str) -> String {
        let mut slug = String::with_capacity(input.len());
        for c in input.to_lowercase().chars() {
            let mapped = if c.is_whitespace() { '-' } else { c };
            if mapped == '-' {
                if !slug.ends_with('-') {
                    slug.push('-');
                }
            } else if mapped.is_ascii_alphanumeric() || mapped == '_' {
                slug.push(mapped);
            }
        }
        slug
    }
}
