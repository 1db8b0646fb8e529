use crate::context::{BotContext, ConfigContext, MessageContext, ReactionContext};
use crate::error::Result;
use crate::model::emoji::BookmarkAction;
use crate::use_case::{AddBookmark, RemoveBookmark};

use tracing::{debug, info};

#[async_trait::async_trait]
pub trait HandleReaction:
    AddBookmark + RemoveBookmark + BotContext + ConfigContext + ReactionContext + MessageContext
{
    async fn handle_reaction(&self) -> Result<()> {
        let action = match self
            .emoji_name()
            .and_then(|name| self.emojis().classify(name))
        {
            None => return Ok(()),
            Some(action) => action,
        };

        let reactor_id = self.reactor_id();
        if reactor_id == self.bot_id() {
            debug!("ignoring own reaction on message {}", self.message_id());
            return Ok(());
        }

        info!(
            "handle {:?} reaction by {} on message {}",
            action,
            reactor_id,
            self.message_id()
        );

        let user = self.user(reactor_id).await?;
        let channel_kind = self.channel_kind().await?;
        let message = self.reacted_message().await?;

        debug!(
            "reacted message {} by {} in {:?} channel",
            message.id, message.author.name, channel_kind
        );

        match action {
            BookmarkAction::Add => self.add_bookmark(&user, &message).await,
            BookmarkAction::Remove => self.remove_bookmark(channel_kind, &message).await,
        }
    }
}

impl<
        T: AddBookmark
            + RemoveBookmark
            + BotContext
            + ConfigContext
            + ReactionContext
            + MessageContext,
    > HandleReaction for T
{
}
