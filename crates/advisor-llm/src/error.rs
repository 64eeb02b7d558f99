use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssessError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication error: {0}")]
    Auth(String),

    #[error("Contract error: {0}")]
    Contract(String),

    #[error("The assessment service returned no content")]
    EmptyResponse,

    #[error("The assessment request timed out after {0}s")]
    Timeout(u64),

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
}

pub type Result<T> = std::result::Result<T, AssessError>;
