use std::fmt::{self, Display};

use serenity::http::HttpError;
use serenity::model::id::{ChannelId, MessageId, UserId};
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User(UserId),
    Channel(ChannelId),
    Message(MessageId),
}

impl Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Resource::User(id) => write!(f, "user {}", id),
            Resource::Channel(id) => write!(f, "channel {}", id),
            Resource::Message(id) => write!(f, "message {}", id),
        }
    }
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("{0} not found")]
    NotFound(Resource),
    #[error("missing access to {0}")]
    Forbidden(Resource),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl Error {
    /// Maps a Discord HTTP status to the error it means for `resource`.
    pub fn from_status(status: u16, resource: Resource) -> Option<Error> {
        match status {
            404 => Some(Error::NotFound(resource)),
            403 => Some(Error::Forbidden(resource)),
            _ => None,
        }
    }

    /// Classifies a serenity error raised by a request touching `resource`.
    pub fn from_serenity(e: serenity::Error, resource: Resource) -> Error {
        if let serenity::Error::Http(HttpError::UnsuccessfulRequest(response)) = &e {
            if let Some(error) = Error::from_status(response.status_code.as_u16(), resource) {
                return error;
            }
        }

        Error::Other(anyhow::Error::new(e).context(format!("request for {} failed", resource)))
    }
}

pub type Result<T> = std::result::Result<T, Error>;
