use thiserror::Error;

/// Authentication failures surfaced to the routing layer
///
/// Display strings double as response bodies where the contract calls
/// for plain text.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Bad credentials")]
    BadCredentials,

    #[error("Authentication required")]
    Unauthorized,

    #[error("Invalid or expired token")]
    InvalidToken,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// Registration failures
#[derive(Error, Debug)]
pub enum RegistrationError {
    #[error("Login cannot be empty")]
    EmptyLogin,

    #[error("Password cannot be empty")]
    EmptyPassword,

    #[error("Login already exists")]
    LoginExists,

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}
