#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("Network error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid URL {0}")]
    InvalidUrl(String),

    #[error("Service unavailable: {0}")]
    Unavailable(String),
}
