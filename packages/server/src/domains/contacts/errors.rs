use thiserror::Error;

/// Format failures for contact attributes
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid email format: {0}")]
    InvalidEmail(String),

    #[error("invalid phone number format: {0}")]
    InvalidPhone(String),
}

/// Writes rejected because they would violate a within-scope
/// uniqueness invariant
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConflictError {
    #[error("contact with that name already exists")]
    DuplicateName,

    #[error("contact with that email already exists: {0}")]
    DuplicateEmail(String),

    #[error("contact with that phone number already exists: {0}")]
    DuplicatePhone(String),
}

/// Per-request directory failure
///
/// Routing maps these onto the preserved response contract; nothing
/// here is fatal to the process.
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Conflict(#[from] ConflictError),

    #[error("contact {0} does not exist")]
    NotFound(String),

    #[error("storage error: {0}")]
    Internal(#[from] anyhow::Error),
}
