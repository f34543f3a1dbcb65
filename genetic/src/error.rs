// Author: Dylan Turner <dylan.turner@tutanota.com>
//! Everything that can abort a training run

use thiserror::Error;
use tokio::task::JoinError;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Bad preset, population settings or mutation settings
    #[error("configuration error: {0}")]
    Config(String),

    /// A data row that can't be turned into a record
    #[error("data format error: {0}")]
    DataFormat(String),

    /// Empty datasets and other inputs the math can't work with
    #[error("precondition failed: {0}")]
    Precondition(String),

    #[error("could not read data set: {0}")]
    Io(#[from] std::io::Error),

    /// An evaluation task panicked or got cancelled
    #[error("fitness worker failed: {0}")]
    Worker(#[from] JoinError)
}
