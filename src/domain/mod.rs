pub mod article;
pub mod comment;
pub mod errors;
pub mod specifications;
pub mod tag;
pub mod user;
