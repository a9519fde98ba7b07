use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::TransactionError;

#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("Unable to open dataset at [{}]: {source}", path.display())]
    Io {
        path: PathBuf,
        source: io::Error
    },
    #[error("Malformed CSV at line [{line}]: {source}")]
    Csv {
        line: u64,
        source: csv::Error
    },
    #[error("Unparseable date [{value}] at line [{line}]")]
    InvalidDate {
        line: u64,
        value: String
    },
    #[error("Invalid row at line [{line}]: {source}")]
    InvalidRow {
        line: u64,
        source: TransactionError
    },
    #[error("Total revenue exceeds the supported decimal range at line [{line}]")]
    RevenueOverflow {
        line: u64
    }
}
