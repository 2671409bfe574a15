use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Participant index {index} is out of range (roster holds {len})")]
    OutOfRange { index: usize, len: usize },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Malformed roster line {line}: expected 4 comma-separated fields, found {found}")]
    FormatError { line: usize, found: usize },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },
}

pub type Result<T> = std::result::Result<T, RosterError>;
