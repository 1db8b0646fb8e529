use serenity::model::id::{GuildId, UserId};

pub trait ReactionContext {
    fn reactor_id(&self) -> UserId;
    fn guild_id(&self) -> Option<GuildId>;
    /// Unicode emoji or the name of a custom emoji.
    fn emoji_name(&self) -> Option<&str>;
}
