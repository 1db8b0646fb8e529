use crate::error::Result;
use crate::model::{message::Message, reacted::ChannelKind};

use serenity::model::id::{ChannelId, MessageId};

#[async_trait::async_trait]
pub trait ChannelContext {
    fn channel_id(&self) -> ChannelId;
    async fn channel_kind(&self) -> Result<ChannelKind>;
    async fn message(&self, message: Message) -> Result<MessageId>;
    async fn delete_message(&self, message_id: MessageId) -> Result<()>;
}
