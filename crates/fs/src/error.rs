use std::{io, path::PathBuf};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("root not found: {}", .0.display())]
    RootNotFound(PathBuf),

    #[error("root is not a directory: {}", .0.display())]
    RootNotADirectory(PathBuf),

    #[error("cannot read root {}: {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot enumerate {}: {source}", .path.display())]
    SubtreeEnumerationFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("cannot inspect {}: {source}", .path.display())]
    EntryInspectionFailed {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid exclude pattern: {0}")]
    Pattern(#[from] ignore::Error),
}

impl ScanError {
    /// The filesystem path the error is about, if any.
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            ScanError::RootNotFound(path)
            | ScanError::RootNotADirectory(path)
            | ScanError::RootUnreadable { path, .. }
            | ScanError::SubtreeEnumerationFailed { path, .. }
            | ScanError::EntryInspectionFailed { path, .. } => Some(path),
            ScanError::Pattern(_) => None,
        }
    }

    /// Root errors end the scan before any entry is produced.
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            ScanError::SubtreeEnumerationFailed { .. } | ScanError::EntryInspectionFailed { .. }
        )
    }
}
