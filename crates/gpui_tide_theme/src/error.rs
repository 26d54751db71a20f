use thiserror::Error;

#[derive(Debug, Error)]
pub enum ThemeError {
    #[error("no theme provider is mounted")]
    NotProvided,

    #[error("unknown design token \"{0}\"")]
    UnknownToken(String),

    #[error("unknown theme mode \"{0}\"")]
    UnknownMode(String),

    #[error("unknown primary color \"{0}\"")]
    UnknownColor(String),

    #[error("invalid theme json: {0}")]
    Json(#[from] serde_json::Error),
}
