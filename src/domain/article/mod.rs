pub mod entity;
pub mod record;
pub mod repository;
pub mod services;
pub mod value_objects;

pub use entity::{Article, ArticleFilter, ArticleUpdate, NewArticle};
pub use record::ArticleRecord;
pub use repository::{ArticleReadRepository, ArticleWriteRepository};
pub use value_objects::{ArticleBody, ArticleDescription, ArticleId, ArticleSlug, ArticleTitle};
