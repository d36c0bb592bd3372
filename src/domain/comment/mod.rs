pub mod entity;
pub mod repository;

pub use entity::{Comment, CommentBody, CommentId, CommentRecord, NewComment};
pub use repository::CommentRepository;
