use std::sync::Arc;

use crate::error::{Error, Resource, Result};
use crate::model::{
    bookmark::Bookmark,
    emoji::EmojiSet,
    message::Message,
    reacted::{ChannelKind, ReactedMessage},
    user::User,
};

use anyhow::Context as _;
use chrono::{DateTime, Utc};
use serenity::{
    builder::CreateMessage,
    cache::Cache,
    http::Http,
    model::{
        channel::{Reaction, ReactionType},
        id::{ChannelId, GuildId, MessageId, UserId},
    },
};
use tracing::debug;

mod bot;
mod channel;
mod config;
mod message;
mod reaction;
mod time;
mod user;

pub use bot::BotContext;
pub use channel::ChannelContext;
pub use config::ConfigContext;
pub use message::MessageContext;
pub use reaction::ReactionContext;
pub use time::TimeContext;
pub use user::{DirectMessage, UserContext};

#[derive(Clone)]
pub struct Context {
    http: Arc<Http>,
    cache: Arc<Cache>,
    emojis: Arc<EmojiSet>,
    bot_id: UserId,
    guild_id: Option<GuildId>,
    reactor_id: UserId,
    channel_id: ChannelId,
    message_id: MessageId,
    emoji_name: Option<String>,
}

impl BotContext for Context {
    fn bot_id(&self) -> UserId {
        self.bot_id
    }
}

impl ConfigContext for Context {
    fn emojis(&self) -> &EmojiSet {
        &self.emojis
    }
}

impl ReactionContext for Context {
    fn reactor_id(&self) -> UserId {
        self.reactor_id
    }

    fn guild_id(&self) -> Option<GuildId> {
        self.guild_id
    }

    fn emoji_name(&self) -> Option<&str> {
        self.emoji_name.as_deref()
    }
}

#[async_trait::async_trait]
impl UserContext for Context {
    async fn user(&self, user_id: UserId) -> Result<User> {
        let cached = self.cache.user(user_id).map(|user| User::from(&*user));
        if let Some(user) = cached {
            return Ok(user);
        }

        debug!("user {} is not cached, fetching", user_id);
        let user = self
            .http
            .get_user(user_id)
            .await
            .map_err(|e| Error::from_serenity(e, Resource::User(user_id)))?;
        Ok(User::from(&user))
    }

    async fn send_bookmark(&self, user_id: UserId, bookmark: &Bookmark) -> Result<DirectMessage> {
        let builder = CreateMessage::new().embed(bookmark.embed());
        let message = user_id
            .direct_message((&self.cache, self.http.as_ref()), builder)
            .await
            .map_err(|e| Error::from_serenity(e, Resource::User(user_id)))?;

        Ok(DirectMessage {
            channel_id: message.channel_id,
            message_id: message.id,
        })
    }

    async fn react_direct_message(
        &self,
        direct_message: DirectMessage,
        reaction: ReactionType,
    ) -> Result<()> {
        direct_message
            .channel_id
            .create_reaction(&self.http, direct_message.message_id, reaction)
            .await
            .context("cannot react on the bookmark")?;
        Ok(())
    }
}

#[async_trait::async_trait]
impl ChannelContext for Context {
    fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    async fn channel_kind(&self) -> Result<ChannelKind> {
        let channel = self
            .channel_id
            .to_channel((&self.cache, self.http.as_ref()))
            .await
            .map_err(|e| Error::from_serenity(e, Resource::Channel(self.channel_id)))?;
        Ok(ChannelKind::from(&channel))
    }

    async fn message(&self, message: Message) -> Result<MessageId> {
        debug!("send message: {}", message);
        let sent = self
            .channel_id
            .say(&self.http, message.to_string())
            .await
            .context("cannot create a message")?;
        Ok(sent.id)
    }

    async fn delete_message(&self, message_id: MessageId) -> Result<()> {
        self.channel_id
            .delete_message(&self.http, message_id)
            .await
            .map_err(|e| Error::from_serenity(e, Resource::Message(message_id)))
    }
}

#[async_trait::async_trait]
impl MessageContext for Context {
    fn message_id(&self) -> MessageId {
        self.message_id
    }

    async fn reacted_message(&self) -> Result<ReactedMessage> {
        let message = self
            .channel_id
            .message((&self.cache, self.http.as_ref()), self.message_id)
            .await
            .map_err(|e| Error::from_serenity(e, Resource::Message(self.message_id)))?;
        Ok(ReactedMessage::from(&message))
    }
}

#[async_trait::async_trait]
impl TimeContext for Context {
    fn current_time(&self) -> DateTime<Utc> {
        Utc::now()
    }

    async fn delay_until(&self, time: DateTime<Utc>) {
        if let Ok(duration) = (time - Utc::now()).to_std() {
            tokio::time::sleep(duration).await;
        }
    }
}

fn emoji_name(emoji: &ReactionType) -> Option<String> {
    match emoji {
        ReactionType::Unicode(s) => Some(s.clone()),
        ReactionType::Custom { name, .. } => name.clone(),
        _ => None,
    }
}

impl Context {
    pub fn new(
        http: Arc<Http>,
        cache: Arc<Cache>,
        emojis: Arc<EmojiSet>,
        reaction: &Reaction,
    ) -> Option<Context> {
        let bot_id = cache.current_user().id;
        let reactor_id = reaction.user_id?;

        Some(Context {
            http,
            cache,
            emojis,
            bot_id,
            guild_id: reaction.guild_id,
            reactor_id,
            channel_id: reaction.channel_id,
            message_id: reaction.message_id,
            emoji_name: emoji_name(&reaction.emoji),
        })
    }
}
