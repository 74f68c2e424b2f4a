use std::path::PathBuf;

pub const PROGRAM_LOG_LEVEL: &str = "DIRVIEW_LOG_LEVEL";

/// Default root for the program to start listing.
///
/// The working directory wins; the home directory is only used when the
/// working directory has been removed or is otherwise unavailable.
pub fn default_scan_root() -> PathBuf {
    std::env::current_dir()
        .ok()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Gitignore-style patterns for VCS metadata, build output and dependency
/// caches. Only applied when the caller opts in.
pub const DEFAULT_EXCLUDE_PATTERNS: &[&str] = &[
    ".git/",
    ".hg/",
    ".svn/",
    "venv/",
    ".venv/",
    "__pycache__/",
    "node_modules/",
    "target/",
    ".DS_Store",
    "Thumbs.db",
];

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
