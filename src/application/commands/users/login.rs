use super::UserCommandService;
use crate::{
    application::{
        dto::{TokenSubject, UserDto},
        error::{ApplicationError, ApplicationResult},
    },
    domain::user::Email,
};

pub struct LoginUserCommand {
    pub email: String,
    pub password: String,
}

impl UserCommandService {
    /// Authenticate by email and password. An unknown email and a wrong
    /// password produce the same error so the response does not reveal
    /// which accounts exist.
    pub async fn login(&self, command: LoginUserCommand) -> ApplicationResult<UserDto> {
        let email = Email::new(command.email)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| ApplicationError::unauthorized("invalid credentials"))?;

        self.password_hasher
            .verify(&command.password, user.password_hash.as_str())
            .await?;

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
