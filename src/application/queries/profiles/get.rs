use super::ProfileQueryService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

impl ProfileQueryService {
    pub async fn get_profile(
        &self,
        actor: Option<&AuthenticatedUser>,
        username: String,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(username)?;
        let record = self
            .user_repo
            .find_profile(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        Ok(ProfileDto::project(&record, actor.map(|a| a.id)))
    }
}
