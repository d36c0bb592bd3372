use super::ProfileCommandService;
use crate::{
    application::{
        dto::{AuthenticatedUser, ProfileDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Username,
};

impl ProfileCommandService {
    /// Follow a user by username. Following an already-followed user is a
    /// no-op, the call still succeeds and returns the current profile.
    pub async fn follow(
        &self,
        actor: &AuthenticatedUser,
        username: String,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(username)?;
        let target = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        self.user_repo.add_follower(target.id, actor.id).await?;
        self.reload_profile(&username, actor).await
    }

    /// Unfollow a user by username. Idempotent like `follow`.
    pub async fn unfollow(
        &self,
        actor: &AuthenticatedUser,
        username: String,
    ) -> ApplicationResult<ProfileDto> {
        let username = Username::new(username)?;
        let target = self
            .user_repo
            .find_by_username(&username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;

        self.user_repo.remove_follower(target.id, actor.id).await?;
        self.reload_profile(&username, actor).await
    }

    async fn reload_profile(
        &self,
        username: &Username,
        actor: &AuthenticatedUser,
    ) -> ApplicationResult<ProfileDto> {
        let record = self
            .user_repo
            .find_profile(username)
            .await?
            .ok_or_else(|| ApplicationError::not_found("profile not found"))?;
        Ok(ProfileDto::project(&record, Some(actor.id)))
    }
}
