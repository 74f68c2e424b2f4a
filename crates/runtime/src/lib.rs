mod config;
pub mod logging;

pub use config::{
    DEFAULT_EXCLUDE_PATTERNS, PROGRAM_LOG_LEVEL, default_scan_root,
};

pub use logging::init;
