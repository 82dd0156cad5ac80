use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("network error: {0}")]
    Network(String),

    #[error("unexpected status code: {0}")]
    Status(u16),

    #[error("malformed response: {0}")]
    Decode(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

#[cfg(feature = "client")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else if let Some(status) = err.status() {
            RepositoryError::Status(status.as_u16())
        } else {
            RepositoryError::Network(err.to_string())
        }
    }
}
