use crate::domain::errors::{DomainError, DomainResult};
use async_trait::async_trait;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TagName(String);

impl TagName {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(DomainError::validation("tagList", "tags cannot be empty"));
        }
        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<TagName> for String {
    fn from(value: TagName) -> Self {
        value.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Tags are created implicitly when first referenced by an article and never
/// deleted; the repository only needs upsert-by-name (handled by the article
/// write side) and a distinct listing.
#[async_trait]
pub trait TagRepository: Send + Sync {
    async fn list(&self) -> DomainResult<Vec<String>>;
}
