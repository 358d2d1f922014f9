use thiserror::Error;

#[derive(Error, Debug)]
pub enum AnswerError {
    #[error("Channel error: {0}")]
    Channel(String),

    #[error("Normalizer error: {0}")]
    Normalizer(String),

    #[error("Solver error: {0}")]
    Solver(String),

    #[error("Ingestion queue is closed")]
    QueueClosed,

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AnswerError>;
