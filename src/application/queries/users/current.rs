use super::UserQueryService;
use crate::application::{
    dto::{AuthenticatedUser, UserDto},
    error::{ApplicationError, ApplicationResult},
};

impl UserQueryService {
    /// The authenticated user's own record, without issuing a new token.
    pub async fn current_user(&self, actor: &AuthenticatedUser) -> ApplicationResult<UserDto> {
        let user = self
            .user_repo
            .find_by_id(actor.id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("user"))?;

        Ok(UserDto::from_user(&user, None))
    }
}
