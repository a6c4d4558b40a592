use thiserror::Error;

/// Startup failures. Anything past startup degrades into a user-visible
/// notice instead of killing the process.
#[derive(Error, Debug)]
pub enum GeneralError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Failures of the backend collaborator, surfaced to the user as a
/// transient notice.
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Backend error: {0}")]
    Internal(String),
}

/// Authentication failures. The expected cases (wrong credentials, duplicate
/// email) are variants the caller is meant to present, not to propagate.
#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("An account with this email already exists")]
    EmailTaken,

    #[error("Password hashing failed: {0}")]
    Hash(String),

    #[error(transparent)]
    Backend(#[from] BackendError),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(e: argon2::password_hash::Error) -> Self {
        AuthError::Hash(e.to_string())
    }
}
