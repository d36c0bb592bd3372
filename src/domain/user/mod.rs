pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::{NewUser, ProfileRecord, User, UserUpdate};
pub use repository::UserRepository;
pub use value_objects::{Email, PasswordHash, UserId, Username};
