use super::TagQueryService;
use crate::application::error::ApplicationResult;

impl TagQueryService {
    /// Every tag name on record, whether or not an article still carries it.
    pub async fn list_tags(&self) -> ApplicationResult<Vec<String>> {
        Ok(self.tag_repo.list().await?)
    }
}
