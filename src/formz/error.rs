use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormzError {
    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Transport error: {0}")]
    Transport(String),

    #[error("Server returned status {status}: {message}")]
    TransportStatus { status: u16, message: String },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Session error: {0}")]
    Session(String),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, FormzError>;
