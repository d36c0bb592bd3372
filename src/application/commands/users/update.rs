use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{AuthenticatedUser, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, PasswordHash, UserUpdate, Username},
};

#[derive(Default)]
pub struct UpdateUserCommand {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserCommandService {
    pub async fn update(
        &self,
        actor: &AuthenticatedUser,
        command: UpdateUserCommand,
    ) -> ApplicationResult<UserDto> {
        let mut update = UserUpdate::new(actor.id, self.clock.now());

        if let Some(username) = command.username {
            update = update.with_username(Username::new(username)?);
        }
        if let Some(email) = command.email {
            update = update.with_email(Email::new(email)?);
        }
        if let Some(password) = command.password {
            validate_password(&password)?;
            let hash = self.password_hasher.hash(&password).await?;
            update = update.with_password_hash(PasswordHash::new(hash)?);
        }
        if let Some(bio) = command.bio {
            update = update.with_bio(bio);
        }
        if let Some(image) = command.image {
            update = update.with_image(image);
        }

        let user = if update.has_changes() {
            self.user_repo.update(update).await?
        } else {
            self.user_repo
                .find_by_id(actor.id)
                .await?
                .ok_or_else(|| ApplicationError::not_found("user"))?
        };

        Ok(UserDto::from_user(&user, None))
    }
}
