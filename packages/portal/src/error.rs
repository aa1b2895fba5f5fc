//! Portal error type.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PortalError>;

/// Errors surfaced by portal operations. Every variant is recoverable: the
/// caller reports it and the stored state is left as it was before the call,
/// except for [`PortalError::Store`], which may leave a multi-key write half done.
#[derive(Debug, Error)]
pub enum PortalError {
    #[error(transparent)]
    Store(#[from] store::StoreError),

    /// Form input rejected before anything was written.
    #[error("{0}")]
    Validation(String),

    /// The generated address collides with another user's.
    #[error("generated email {0} already exists, use a different name or roll number")]
    EmailTaken(String),

    #[error("invalid credentials, try again or sign up")]
    InvalidCredentials,

    #[error("no user with id {0}")]
    UnknownUser(String),
}

impl PortalError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        PortalError::Validation(message.into())
    }
}
