use std::fmt::{self, Display};

use serenity::model::{id::UserId, mention::Mentionable};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    DirectMessageClosed(UserId),
}

impl Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Message::DirectMessageClosed(user_id) => write!(
                f,
                "{}, I couldn't send you a DM. Please make sure your DMs are open for bookmarks to work.",
                user_id.mention()
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Message;

    use serenity::model::id::UserId;

    #[test]
    fn test_direct_message_closed() {
        let message = Message::DirectMessageClosed(UserId::new(42));
        assert!(message.to_string().starts_with("<@42>, I couldn't send you a DM."));
    }
}
