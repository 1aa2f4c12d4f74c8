use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum ApiError {
    #[error("registration rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("invalid endpoint URL: {0}")]
    InvalidUrl(String),
}
