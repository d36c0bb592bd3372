use std::sync::Arc;

use chrono::Utc;

use crate::application::ports::util::SlugGenerator;
use crate::domain::article::repository::ArticleReadRepository;
use crate::domain::article::value_objects::{ArticleSlug, ArticleTitle};
use crate::domain::errors::DomainResult;

/// Domain service responsible for producing unique slugs for articles.
///
/// Collisions are resolved by appending an incrementing counter to the title
/// and re-slugifying, retrying until a free value is found. The loop is
/// bounded by data, not by a fixed attempt count.
pub struct ArticleSlugService {
    read_repo: Arc<dyn ArticleReadRepository>,
    generator: Arc<dyn SlugGenerator>,
}

impl ArticleSlugService {
    pub fn new(
        read_repo: Arc<dyn ArticleReadRepository>,
        generator: Arc<dyn SlugGenerator>,
    ) -> Self {
        Self {
            read_repo,
            generator,
        }
    }

    /// `current` is the slug the article already holds, if any; regenerating
    /// from an unchanged title then yields the same slug instead of a
    /// needlessly suffixed one.
    pub async fn generate_unique_slug(
        &self,
        title: &ArticleTitle,
        current: Option<&ArticleSlug>,
    ) -> DomainResult<ArticleSlug> {
        let base = self.generator.slugify(title.as_str());
        let base_slug = if base.is_empty() {
            format!("article-{}", Utc::now().timestamp())
        } else {
            base
        };

        let mut candidate = base_slug.clone();
        let mut counter = 1u64;

        loop {
            let slug = ArticleSlug::new(candidate)?;
            if current.is_some_and(|own| *own == slug) {
                return Ok(slug);
            }
            if !self.read_repo.slug_exists(&slug).await? {
                return Ok(slug);
            }
            candidate = self.generator.slugify(&format!("{base_slug} {counter}"));
            counter += 1;
        }
    }
}
