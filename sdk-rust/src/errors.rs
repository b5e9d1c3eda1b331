use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    /// The request could not be built from the given input (e.g. a malformed
    /// slug). No network call was made.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    /// The request to the service failed or the parsing of the response
    /// failed.
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
    /// The request returns a non-success status code
    #[error("Status error: {1} (Status {0})")]
    StatusCode(reqwest::StatusCode, String),
    /// The response from the service was unexpected.
    #[error("Invariant from {0}: {1}")]
    Invariant(&'static str, String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;
