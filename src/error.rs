//! Centralized error types for the room map.
//!
//! Every failure the library can produce is a distinct, recoverable value.
//! Construction errors mean the description should be refused; a layout error
//! leaves the map usable for pathfinding.

/// Main error type for map construction and queries.
///
/// This is the error type returned by the public API of [`crate::map`].
#[derive(thiserror::Error, Debug)]
pub enum MapError {
    #[error("Malformed map description: {0}")]
    MalformedDescription(#[from] ParseError),

    #[error("Room defined more than once: {0}")]
    DuplicateRoom(String),

    #[error("Room {room:?} lists {key:?} more than once")]
    DuplicateConnection { room: String, key: String },

    #[error("Room {room:?} connects to unknown room {target:?}")]
    UnknownRoomReference { room: String, target: String },

    #[error("Unknown room: {0}")]
    UnknownRoom(String),

    #[error("Invalid draw token {token:?} in room {room:?}: {source}")]
    InvalidDrawToken {
        room: String,
        token: String,
        #[source]
        source: DrawTokenError,
    },
}

/// Grammar violations found while splitting a description string.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum ParseError {
    #[error("Description has no '/' after the map name")]
    MissingMapSeparator,

    #[error("Room entry {entry} has an empty name")]
    EmptyRoomName { entry: usize },

    #[error("Connection {connection:?} of room {room:?} has {fields} ':'-separated fields, expected 3")]
    MalformedConnection {
        room: String,
        connection: String,
        fields: usize,
    },
}

/// Reasons a draw token such as `"2ne"` cannot be tokenized.
#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum DrawTokenError {
    #[error("Draw token is empty")]
    Empty,

    #[error("Draw token has no direction letters")]
    MissingDirection,

    #[error("Distance {0:?} is not a positive integer")]
    InvalidDistance(String),

    #[error("Unknown direction code: {0:?}")]
    UnknownDirection(String),
}

/// Errors raised while loading or validating configuration.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(error: figment::Error) -> Self {
        ConfigError::Load(Box::new(error))
    }
}

/// Result type for map operations.
pub type MapResult<T> = Result<T, MapError>;
