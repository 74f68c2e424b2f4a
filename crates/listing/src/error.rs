use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ListingError {
    #[error("row {index} out of range (row count {len})")]
    IndexOutOfRange { index: usize, len: usize },
}
