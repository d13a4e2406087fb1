use std::fmt;

use thiserror::Error;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum AppError {
    /// The store health check failed or the store could not be reached in
    /// time. Fatal for the current request; never retried by the core.
    #[error("message store is unreachable")]
    StorageUnavailable,

    /// Sender, recipient or viewer id was missing or the reserved zero value.
    #[error("sender or recipient id is missing or invalid")]
    InvalidIdentity,

    /// Message body absent or empty after trimming.
    #[error("message body is empty")]
    EmptyBody,

    /// No free message id was found within the configured attempt bound.
    #[error("could not allocate a unique message id")]
    GenerationExhausted,

    /// Insert hit the id uniqueness constraint; recoverable by one
    /// regenerate-and-retry.
    #[error("message id already exists")]
    DuplicateId,

    /// An id returned by a just-executed store query failed to resolve.
    #[error("data integrity violation: {0}")]
    DataIntegrity(String),

    #[error("{0} not found")]
    NotFound(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Accumulated per-request errors. Validation problems within one group are
/// collected and reported together rather than failing on the first; storage
/// and integrity failures travel alone.
#[derive(Debug, Default)]
pub struct ErrorList(Vec<AppError>);

impl ErrorList {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn push(&mut self, error: AppError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn as_slice(&self) -> &[AppError] {
        &self.0
    }

    pub fn into_inner(self) -> Vec<AppError> {
        self.0
    }
}

impl From<AppError> for ErrorList {
    fn from(error: AppError) -> Self {
        Self(vec![error])
    }
}

impl fmt::Display for ErrorList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.0 {
            if !first {
                write!(f, "; ")?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

impl std::error::Error for ErrorList {}

impl IntoIterator for ErrorList {
    type Item = AppError;
    type IntoIter = std::vec::IntoIter<AppError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
