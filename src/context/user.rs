use crate::error::Result;
use crate::model::{bookmark::Bookmark, user::User};

use serenity::model::{
    channel::ReactionType,
    id::{ChannelId, MessageId, UserId},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DirectMessage {
    pub channel_id: ChannelId,
    pub message_id: MessageId,
}

#[async_trait::async_trait]
pub trait UserContext {
    async fn user(&self, user_id: UserId) -> Result<User>;
    async fn send_bookmark(&self, user_id: UserId, bookmark: &Bookmark) -> Result<DirectMessage>;
    async fn react_direct_message(
        &self,
        direct_message: DirectMessage,
        reaction: ReactionType,
    ) -> Result<()>;
}
