use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Discord API error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed denylist: {0}")]
    Denylist(#[from] serde_json::Error),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    pub fn custom<S: Into<String>>(msg: S) -> Self {
        Error::Custom(msg.into())
    }
}
