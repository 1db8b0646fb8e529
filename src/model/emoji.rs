use serenity::model::channel::ReactionType;
use thiserror::Error;

const VARIATION_SELECTOR: char = '\u{FE0F}';

pub const DEFAULT_ADD_EMOJI: &str = "🔖";
pub const DEFAULT_REMOVE_EMOJI: &str = "🗑️";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookmarkAction {
    Add,
    Remove,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmojiSetError {
    #[error("at least one add and one remove emoji are required")]
    Empty,
    #[error("invalid custom emoji {0}")]
    InvalidCustomEmoji(String),
    #[error("no remove emoji can be reacted with, give a unicode emoji or <:name:id>")]
    NoRemoveReaction,
}

/// A configured emoji, matched against reactions by name.
///
/// Accepted forms are a unicode emoji, a full custom emoji `<:name:id>`, or a
/// bare custom emoji name. A bare name can be matched but not reacted with.
#[derive(Debug, Clone, PartialEq, Eq)]
struct Emoji {
    name: String,
    reaction: Option<ReactionType>,
}

fn normalize(name: &str) -> String {
    name.trim().chars().filter(|&c| c != VARIATION_SELECTOR).collect()
}

fn is_custom_name(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

impl Emoji {
    fn parse(s: &str) -> Result<Option<Emoji>, EmojiSetError> {
        let s = s.trim();
        if normalize(s).is_empty() {
            return Ok(None);
        }

        if s.starts_with('<') {
            let reaction = ReactionType::try_from(s)
                .map_err(|_| EmojiSetError::InvalidCustomEmoji(s.to_owned()))?;
            return match &reaction {
                ReactionType::Custom {
                    name: Some(name), ..
                } => Ok(Some(Emoji {
                    name: name.clone(),
                    reaction: Some(reaction.clone()),
                })),
                _ => Err(EmojiSetError::InvalidCustomEmoji(s.to_owned())),
            };
        }

        let reaction = if is_custom_name(s) {
            None
        } else {
            Some(ReactionType::Unicode(s.to_owned()))
        };
        Ok(Some(Emoji {
            name: s.to_owned(),
            reaction,
        }))
    }

    fn matches(&self, name: &str) -> bool {
        normalize(&self.name) == name
    }
}

fn parse_all<I>(iter: I) -> Result<Vec<Emoji>, EmojiSetError>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut emojis = Vec::new();
    for s in iter {
        if let Some(emoji) = Emoji::parse(s.as_ref())? {
            emojis.push(emoji);
        }
    }
    Ok(emojis)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSet {
    add: Vec<Emoji>,
    remove: Vec<Emoji>,
    remove_reaction: ReactionType,
}

impl EmojiSet {
    pub fn new<I, J>(add: I, remove: J) -> Result<EmojiSet, EmojiSetError>
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        J: IntoIterator,
        J::Item: AsRef<str>,
    {
        let add = parse_all(add)?;
        let remove = parse_all(remove)?;

        if add.is_empty() || remove.is_empty() {
            return Err(EmojiSetError::Empty);
        }

        let remove_reaction = remove
            .iter()
            .find_map(|e| e.reaction.clone())
            .ok_or(EmojiSetError::NoRemoveReaction)?;

        Ok(EmojiSet {
            add,
            remove,
            remove_reaction,
        })
    }

    pub fn classify(&self, name: &str) -> Option<BookmarkAction> {
        let name = normalize(name);
        if self.add.iter().any(|e| e.matches(&name)) {
            Some(BookmarkAction::Add)
        } else if self.remove.iter().any(|e| e.matches(&name)) {
            Some(BookmarkAction::Remove)
        } else {
            None
        }
    }

    /// The reaction put on each bookmark so that the user can dismiss it.
    pub fn remove_reaction(&self) -> ReactionType {
        self.remove_reaction.clone()
    }
}

impl Default for EmojiSet {
    fn default() -> EmojiSet {
        let remove_reaction = ReactionType::Unicode(DEFAULT_REMOVE_EMOJI.to_owned());
        EmojiSet {
            add: vec![Emoji {
                name: DEFAULT_ADD_EMOJI.to_owned(),
                reaction: Some(ReactionType::Unicode(DEFAULT_ADD_EMOJI.to_owned())),
            }],
            remove: vec![Emoji {
                name: DEFAULT_REMOVE_EMOJI.to_owned(),
                reaction: Some(remove_reaction.clone()),
            }],
            remove_reaction,
        }
    }
}
