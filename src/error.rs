use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    #[error("No record boundary found in chunk starting at byte {offset}")]
    NoRecordBoundary { offset: usize },

    #[error("Malformed temperature at byte {offset}")]
    MalformedTemperature { offset: usize },

    #[error("Record without ';' delimiter at byte {offset}")]
    MissingDelimiter { offset: usize },

    #[error("Scanning worker panicked")]
    WorkerPanicked,
}
