use thiserror::Error;

pub type Result<T> = std::result::Result<T, SyncError>;

#[derive(Debug, Error)]
pub enum SyncError {
    #[error("config error: {0}")]
    Config(String),

    #[error("table format error: {0}")]
    TableFormat(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}
