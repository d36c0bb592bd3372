mod follow;
mod service;

pub use service::ProfileCommandService;
