use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown selection level: {0}")]
    UnknownLevel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
