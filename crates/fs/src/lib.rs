mod config;
mod entry;
mod error;
mod excludes;
mod options;
mod walker;

pub use entry::Entry;
pub use error::ScanError;
pub use excludes::Excludes;
pub use options::{Depth, ScanMode, ScanOptions};
pub use walker::{ScanReport, scan};
