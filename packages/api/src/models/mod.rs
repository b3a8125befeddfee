//! Data models for the application.

mod comment;
mod user;

pub use comment::Comment;
pub use user::User;
