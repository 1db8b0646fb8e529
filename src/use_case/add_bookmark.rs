use crate::context::{ChannelContext, ConfigContext, ReactionContext, TimeContext, UserContext};
use crate::error::Result;
use crate::model::{bookmark::Bookmark, message::Message, reacted::ReactedMessage, user::User};

use chrono::{DateTime, Duration, Utc};
use serenity::model::id::MessageId;
use tokio::spawn;
use tracing::{error, info, warn};

/// How long the "DMs are closed" notice stays in the channel.
pub const NOTICE_LIFETIME_SECS: i64 = 30;

#[async_trait::async_trait]
pub trait AddBookmark:
    UserContext
    + ChannelContext
    + ReactionContext
    + ConfigContext
    + TimeContext
    + Clone
    + Send
    + Sync
    + 'static
{
    async fn add_bookmark(&self, user: &User, message: &ReactedMessage) -> Result<()> {
        let bookmark = Bookmark::new(message, self.guild_id(), self.current_time());

        match self.send_bookmark(user.id, &bookmark).await {
            Ok(direct_message) => {
                self.react_direct_message(direct_message, self.emojis().remove_reaction())
                    .await?;
                info!("bookmarked message {} for {}", message.id, user.name);
                Ok(())
            }
            Err(e) => {
                warn!("cannot send a DM to {}: {}", user.name, e);
                let notice_id = self.message(Message::DirectMessageClosed(user.id)).await?;
                let delete_at = self.current_time() + Duration::seconds(NOTICE_LIFETIME_SECS);
                schedule_deletion_at(self.clone(), notice_id, delete_at);
                Ok(())
            }
        }
    }
}

impl<
        T: UserContext
            + ChannelContext
            + ReactionContext
            + ConfigContext
            + TimeContext
            + Clone
            + Send
            + Sync
            + 'static,
    > AddBookmark for T
{
}

fn schedule_deletion_at<C: AddBookmark>(ctx: C, message_id: MessageId, time: DateTime<Utc>) {
    spawn(async move {
        ctx.delay_until(time).await;

        if let Err(e) = ctx.delete_message(message_id).await {
            error!("failed to delete notice {}: {}", message_id, &e);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::{AddBookmark, NOTICE_LIFETIME_SECS};
    use crate::context::DirectMessage;
    use crate::model::message::Message;
    use crate::test::{
        mock_message, MockContext, MOCK_AUTHOR, MOCK_BOOKMARK_ID, MOCK_CHANNEL_ID,
        MOCK_DM_CHANNEL_ID, MOCK_NOTICE_ID, MOCK_REACTOR, MOCK_USERS,
    };

    use chrono::{Duration, TimeZone, Utc};
    use serenity::model::channel::ReactionType;

    #[tokio::test]
    async fn test_sends_bookmark() {
        let now = Utc.with_ymd_and_hms(2024, 5, 6, 7, 8, 9).unwrap();
        let ctx = MockContext::with_current_time("🔖", now);
        let message = mock_message(MOCK_AUTHOR, MOCK_CHANNEL_ID);

        ctx.add_bookmark(&MOCK_USERS[&MOCK_REACTOR], &message)
            .await
            .unwrap();

        let sent = ctx.sent_bookmarks.lock().await;
        assert_eq!(sent.len(), 1);
        let (user_id, bookmark) = &sent[0];
        assert_eq!(*user_id, MOCK_REACTOR);
        assert_eq!(bookmark.description.as_deref(), Some("> hello, world"));
        assert_eq!(bookmark.author_name, "author");
        assert_eq!(bookmark.bookmarked_at, now);
        assert_eq!(
            bookmark.attachments.as_deref(),
            Some("https://cdn.example.com/ferris.png")
        );

        assert_eq!(
            ctx.added_reactions.lock().await.as_slice(),
            &[(
                DirectMessage {
                    channel_id: MOCK_DM_CHANNEL_ID,
                    message_id: MOCK_BOOKMARK_ID,
                },
                ReactionType::Unicode("🗑️".to_owned()),
            )]
        );
        assert!(ctx.sent_messages.lock().await.is_empty());
    }

    #[tokio::test]
    async fn test_direct_message_closed() {
        let now = Utc::now();
        let ctx = MockContext::with_current_time("🔖", now);
        ctx.close_direct_message();
        let message = mock_message(MOCK_AUTHOR, MOCK_CHANNEL_ID);

        ctx.add_bookmark(&MOCK_USERS[&MOCK_REACTOR], &message)
            .await
            .unwrap();

        assert!(ctx.sent_bookmarks.lock().await.is_empty());
        assert!(ctx.added_reactions.lock().await.is_empty());
        assert_eq!(
            ctx.sent_messages.lock().await.as_slice(),
            &[Message::DirectMessageClosed(MOCK_REACTOR)]
        );
        assert!(ctx.deleted_messages.lock().await.is_empty());

        ctx.set_current_time(now + Duration::seconds(NOTICE_LIFETIME_SECS));
        ctx.wait_for_deletion(MOCK_NOTICE_ID).await;
        assert_eq!(
            ctx.deleted_messages.lock().await.as_slice(),
            &[MOCK_NOTICE_ID]
        );
    }
}
