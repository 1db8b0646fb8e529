use crate::model::emoji::EmojiSet;

pub trait ConfigContext {
    fn emojis(&self) -> &EmojiSet;
}
