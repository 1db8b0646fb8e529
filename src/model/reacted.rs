use crate::model::user::User;

use serenity::model::id::{ChannelId, MessageId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelKind {
    Guild,
    Private,
}

impl From<&serenity::model::channel::Channel> for ChannelKind {
    fn from(channel: &serenity::model::channel::Channel) -> ChannelKind {
        match channel {
            serenity::model::channel::Channel::Private(_) => ChannelKind::Private,
            _ => ChannelKind::Guild,
        }
    }
}

/// The message a reaction was added to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReactedMessage {
    pub id: MessageId,
    pub channel_id: ChannelId,
    pub author: User,
    pub content: String,
    pub attachments: Vec<String>,
}

impl From<&serenity::model::channel::Message> for ReactedMessage {
    fn from(message: &serenity::model::channel::Message) -> ReactedMessage {
        ReactedMessage {
            id: message.id,
            channel_id: message.channel_id,
            author: User::from(&message.author),
            content: message.content.clone(),
            attachments: message.attachments.iter().map(|a| a.url.clone()).collect(),
        }
    }
}
