use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

/// Everything that can stop a prompt from turning into an image file
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Missing session id, pass it as the second argument")]
    MissingSessionId,

    #[error("Generation request failed ({status}): {body}")]
    Generation { status: StatusCode, body: String },

    #[error("The provider returned no image data")]
    NoImageData,

    #[error("The provider returned an unusable image entry: {0}")]
    InvalidImageData(String),

    #[error("Invalid session cookie: {0}")]
    InvalidCookie(String),

    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error("Couldn't write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Couldn't decode inline image: {0}")]
    Decode(#[from] base64::DecodeError),
}

pub type Result<T> = std::result::Result<T, PipelineError>;
