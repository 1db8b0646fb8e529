use crate::context::{BotContext, ChannelContext};
use crate::error::Result;
use crate::model::reacted::{ChannelKind, ReactedMessage};

use tracing::{debug, info};

#[async_trait::async_trait]
pub trait RemoveBookmark: BotContext + ChannelContext {
    async fn remove_bookmark(&self, kind: ChannelKind, message: &ReactedMessage) -> Result<()> {
        // bookmarks only ever live in DMs
        if kind != ChannelKind::Private {
            debug!("ignoring removal of message {} outside DMs", message.id);
            return Ok(());
        }

        if message.author.id != self.bot_id() {
            debug!("ignoring removal of message {} not sent by us", message.id);
            return Ok(());
        }

        self.delete_message(message.id).await?;
        info!("removed bookmark {}", message.id);
        Ok(())
    }
}

impl<T: BotContext + ChannelContext> RemoveBookmark for T {}
