pub mod articles;
pub mod auth;
pub mod comments;
pub mod profiles;
pub mod users;

pub use articles::{ArticleDto, ArticleListDto};
pub use auth::{AuthTokenDto, AuthenticatedUser, TokenSubject};
pub use comments::CommentDto;
pub use profiles::ProfileDto;
pub use users::UserDto;
