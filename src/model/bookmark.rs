use std::borrow::Cow;

use crate::model::reacted::ReactedMessage;

use chrono::{DateTime, Utc};
use serenity::builder::{CreateEmbed, CreateEmbedFooter};
use serenity::model::{colour::Colour, id::GuildId, timestamp::Timestamp};

pub const EMBED_MAX_DESCRIPTION_LENGTH: usize = 4096;
pub const EMBED_MAX_FIELD_LENGTH: usize = 1024;

const TITLE: &str = "Message Bookmarked";
const FOOTER: &str = "React to dismiss this bookmark";
const ELLIPSIS: &str = "...";

/// What gets delivered to the user for a bookmarked message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bookmark {
    pub description: Option<String>,
    pub author_name: String,
    pub jump_url: String,
    pub attachments: Option<String>,
    pub bookmarked_at: DateTime<Utc>,
}

fn truncate(s: &str, max: usize) -> Cow<'_, str> {
    if s.chars().count() <= max {
        return Cow::Borrowed(s);
    }

    let keep = max.saturating_sub(ELLIPSIS.len());
    let mut truncated: String = s.chars().take(keep).collect();
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}

fn quote(content: &str) -> String {
    content
        .lines()
        .map(|line| format!("> {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn jump_url(message: &ReactedMessage, guild_id: Option<GuildId>) -> String {
    message.id.link(message.channel_id, guild_id)
}

impl Bookmark {
    pub fn new(
        message: &ReactedMessage,
        guild_id: Option<GuildId>,
        bookmarked_at: DateTime<Utc>,
    ) -> Bookmark {
        let description = if message.content.trim().is_empty() {
            None
        } else {
            let quoted = quote(&message.content);
            Some(truncate(&quoted, EMBED_MAX_DESCRIPTION_LENGTH).into_owned())
        };

        let attachments = if message.attachments.is_empty() {
            None
        } else {
            let joined = message.attachments.join("\n");
            Some(truncate(&joined, EMBED_MAX_FIELD_LENGTH).into_owned())
        };

        Bookmark {
            description,
            author_name: message.author.name.clone(),
            jump_url: jump_url(message, guild_id),
            attachments,
            bookmarked_at,
        }
    }

    pub fn embed(&self) -> CreateEmbed {
        let mut embed = CreateEmbed::new()
            .title(TITLE)
            .colour(Colour::BLUE)
            .field("Author", &self.author_name, false)
            .field(
                "Jump to Message",
                format!("[Click Here]({})", self.jump_url),
                false,
            )
            .footer(CreateEmbedFooter::new(FOOTER));

        if let Some(description) = &self.description {
            embed = embed.description(description);
        }
        if let Some(attachments) = &self.attachments {
            embed = embed.field("Attachments", attachments, false);
        }
        if let Ok(timestamp) = Timestamp::from_unix_timestamp(self.bookmarked_at.timestamp()) {
            embed = embed.timestamp(timestamp);
        }

        embed
    }
}

#[cfg(test)]
mod tests {
    use super::{
        jump_url, truncate, Bookmark, EMBED_MAX_DESCRIPTION_LENGTH, EMBED_MAX_FIELD_LENGTH,
    };
    use crate::model::{reacted::ReactedMessage, user::User};

    use chrono::{TimeZone, Utc};
    use serenity::model::id::{ChannelId, GuildId, MessageId, UserId};

    fn message(content: &str, attachments: Vec<String>) -> ReactedMessage {
        ReactedMessage {
            id: MessageId::new(300),
            channel_id: ChannelId::new(200),
            author: User {
                id: UserId::new(1),
                name: "ferris".to_owned(),
                bot: false,
            },
            content: content.to_owned(),
            attachments,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("abc", 3), "abc");
        assert_eq!(truncate("abcdef", 5), "ab...");
        assert_eq!(truncate("あいうえお", 5), "あいうえお");
        assert_eq!(truncate("あいうえおか", 5), "あい...");
    }

    #[test]
    fn test_guild_message() {
        let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        let bookmark = Bookmark::new(
            &message("hello\nworld", vec![]),
            Some(GuildId::new(100)),
            at,
        );

        assert_eq!(bookmark.description.as_deref(), Some("> hello\n> world"));
        assert_eq!(bookmark.author_name, "ferris");
        assert_eq!(
            bookmark.jump_url,
            "https://discord.com/channels/100/200/300"
        );
        assert_eq!(bookmark.attachments, None);
        assert_eq!(bookmark.bookmarked_at, at);
    }

    #[test]
    fn test_jump_url_follows_reaction_guild() {
        let message = message("hi", vec![]);
        assert_eq!(
            jump_url(&message, Some(GuildId::new(100))),
            "https://discord.com/channels/100/200/300"
        );
        assert_eq!(
            jump_url(&message, None),
            "https://discord.com/channels/@me/200/300"
        );
    }

    #[test]
    fn test_private_message() {
        let bookmark = Bookmark::new(&message("hi", vec![]), None, Utc::now());
        assert_eq!(
            bookmark.jump_url,
            "https://discord.com/channels/@me/200/300"
        );
    }

    #[test]
    fn test_attachments_only() {
        let bookmark = Bookmark::new(
            &message(
                "",
                vec![
                    "https://cdn.example.com/a.png".to_owned(),
                    "https://cdn.example.com/b.png".to_owned(),
                ],
            ),
            None,
            Utc::now(),
        );

        assert_eq!(bookmark.description, None);
        assert_eq!(
            bookmark.attachments.as_deref(),
            Some("https://cdn.example.com/a.png\nhttps://cdn.example.com/b.png")
        );
    }

    #[test]
    fn test_long_content_fits_embed() {
        let content = "x".repeat(EMBED_MAX_DESCRIPTION_LENGTH);
        let bookmark = Bookmark::new(&message(&content, vec![]), None, Utc::now());

        let description = bookmark.description.unwrap();
        assert_eq!(description.chars().count(), EMBED_MAX_DESCRIPTION_LENGTH);
        assert!(description.starts_with("> xxx"));
        assert!(description.ends_with("x..."));
    }

    #[test]
    fn test_many_attachments_fit_field() {
        let urls = (0..100)
            .map(|i| format!("https://cdn.example.com/{}.png", i))
            .collect();
        let bookmark = Bookmark::new(&message("", urls), None, Utc::now());

        let attachments = bookmark.attachments.unwrap();
        assert_eq!(attachments.chars().count(), EMBED_MAX_FIELD_LENGTH);
        assert!(attachments.ends_with("..."));
    }
}
