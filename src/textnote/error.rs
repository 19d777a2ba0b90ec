use thiserror::Error;

#[derive(Error, Debug)]
pub enum TextnoteError {
    #[error("cannot parse section from empty input")]
    EmptyInput,

    #[error("invalid delimiter prefix [{prefix}] or suffix [{suffix}]")]
    InvalidDelimiterPattern { prefix: String, suffix: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Note not found: {0}")]
    NoteNotFound(String),

    #[error("Configuration file not found: {0}")]
    ConfigNotFound(String),

    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Api Error: {0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, TextnoteError>;
