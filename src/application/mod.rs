pub mod commands;
pub mod dto;
pub mod error;
pub mod ports;
pub mod queries;
pub mod services;
#[cfg(test)]
pub mod test_support;

pub use error::ApplicationResult;
