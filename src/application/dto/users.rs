use crate::domain::user::User;
use serde::Serialize;

/// The authenticated-user view returned by the user and auth endpoints.
/// The token is present only when the endpoint issued or echoed one.
#[derive(Debug, Clone, Serialize)]
pub struct UserDto {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

impl UserDto {
    pub fn from_user(user: &User, token: Option<String>) -> Self {
        Self {
            email: user.email.to_string(),
            token,
            username: user.username.to_string(),
            bio: user.bio.clone(),
            image: user.image.clone(),
        }
    }
}
