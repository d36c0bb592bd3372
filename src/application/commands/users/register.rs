use super::{UserCommandService, password::validate_password};
use crate::{
    application::{
        dto::{TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::{Email, NewUser, PasswordHash, Username},
};

pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Create an account and issue a token so the client is logged in
    /// immediately after registration.
    pub async fn register(&self, command: RegisterUserCommand) -> ApplicationResult<UserDto> {
        let username = Username::new(command.username)?;
        let email = Email::new(command.email)?;
        validate_password(&command.password)?;

        if self
            .user_repo
            .exists_with_username_or_email(&username, &email)
            .await?
        {
            return Err(ApplicationError::conflict(
                "username or email is already taken",
            ));
        }

        let hash = self.password_hasher.hash(&command.password).await?;
        let new_user = NewUser::new(username, email, PasswordHash::new(hash)?, self.clock.now());
        let user = self.user_repo.insert(new_user).await?;

        let token = self
            .token_manager
            .issue(TokenSubject {
                user_id: user.id,
                email: user.email.to_string(),
            })
            .await?;

        Ok(UserDto::from_user(&user, Some(token.token)))
    }
}
