use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("malformed festival line: {0}")]
    MalformedLine(String),

    #[error("invalid date: {0}")]
    Date(#[from] chrono::format::ParseError),

    #[error("invalid duration: {0}")]
    Duration(String),

    #[error("unknown style: {0}")]
    UnknownStyle(String),
}

pub type Result<T> = std::result::Result<T, Error>;
