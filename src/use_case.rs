mod add_bookmark;
mod handle_reaction;
mod remove_bookmark;

pub use add_bookmark::{AddBookmark, NOTICE_LIFETIME_SECS};
pub use handle_reaction::HandleReaction;
pub use remove_bookmark::RemoveBookmark;
