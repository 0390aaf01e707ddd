use serde::Serialize;
use thiserror::Error;

/// Errors raised while loading candidate data.
///
/// Missing or malformed records inside an otherwise readable file never
/// error; they degrade to the `NO_DATA` sentinel or are skipped with a
/// warning, so scoring stays total.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for RepositoryError {
    fn from(error: std::io::Error) -> Self {
        RepositoryError::Io(error.to_string())
    }
}

impl Serialize for RepositoryError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_ref())
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(test)]
#[path = "tests/errors_tests.rs"]
mod tests;
