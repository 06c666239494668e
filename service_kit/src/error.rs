use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Tracing Error: {0}")]
    Tracing(String),
    #[error("SerdeJson Error: {0}")]
    SerdeJson(#[from] serde_json::Error),
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
