use thiserror::Error;

#[derive(Debug, Error)]
pub enum GhasError {
    #[error("required field \"{0}\" is missing")]
    MissingField(String),

    #[error("field \"{path}\" is not {expected}")]
    InvalidField { path: String, expected: &'static str },

    #[error("\"{0}\" is not a valid organization or repository name")]
    InvalidName(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
