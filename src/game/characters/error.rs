use super::config::ConfigError;

/// Reasons a character controller cannot be built or started
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ControllerError {
    #[error("no physics body was supplied")]
    MissingBody,

    #[error("no animator was supplied")]
    MissingAnimator,

    #[error("physics body {0} is not present in the world")]
    BodyNotFound(String),

    #[error("invalid character config: {0}")]
    InvalidConfig(#[from] ConfigError),
}
