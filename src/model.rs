pub mod bookmark;
pub mod emoji;
pub mod message;
pub mod reacted;
pub mod user;
