pub mod message;
pub mod session;
pub mod event;
pub mod config;
pub mod error;

#[cfg(test)]
mod tests;

pub use error::AssistantError;
pub type Result<T> = std::result::Result<T, AssistantError>;
