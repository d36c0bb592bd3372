mod error;
mod postgres_article;
mod postgres_comment;
mod postgres_tag;
mod postgres_user;
mod profiles;

pub(crate) use error::map_sqlx;
pub use postgres_article::{PostgresArticleReadRepository, PostgresArticleWriteRepository};
pub use postgres_comment::PostgresCommentRepository;
pub use postgres_tag::PostgresTagRepository;
pub use postgres_user::PostgresUserRepository;
