use bevy::prelude::Entity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("ron error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("ron serialization error: {0}")]
    Serialize(#[from] ron::Error),

    #[error("invalid value for `{field}`: {reason}")]
    Invalid { field: &'static str, reason: String },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum RigError {
    /// The rig's camera entity has no [`FollowOffset`](crate::FollowOffset).
    #[error("camera {0:?} is missing a FollowOffset component")]
    MissingFollowOffset(Entity),
}
