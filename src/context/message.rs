use crate::error::Result;
use crate::model::reacted::ReactedMessage;

use serenity::model::id::MessageId;

#[async_trait::async_trait]
pub trait MessageContext {
    fn message_id(&self) -> MessageId;
    async fn reacted_message(&self) -> Result<ReactedMessage>;
}
