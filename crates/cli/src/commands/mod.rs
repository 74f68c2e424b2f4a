pub mod list;
pub mod stats;

use std::{path::PathBuf, process::ExitCode};

use clap::{Args, Parser, Subcommand, ValueEnum};
use dirview_fs::{Depth, ScanError, ScanMode, ScanOptions, ScanReport, scan};
use dirview_listing::{ListingStore, SortOrder};
use dirview_runtime::default_scan_root;
pub use list::ListArgs;
pub use stats::StatsArgs;

/// Exit code when the listing completed but some subtrees were unreadable.
pub const EXIT_PARTIAL: u8 = 1;
/// Exit code when nothing could be listed.
pub const EXIT_FATAL: u8 = 2;

#[derive(Parser, Debug)]
#[command(
    name = "dirview",
    version,
    about = "dirview - list a directory tree with sortable metadata",
    propagate_version = true
)]
pub struct Cli {
    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List every entry below a root directory.
    ///
    /// Example:
    ///   dirview list ~/projects --sort size
    ///   dirview list --files-only --default-excludes --json .
    List(ListArgs),

    /// Show file and directory counts for a root directory.
    Stats(StatsArgs),
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum SortKey {
    Name,
    Type,
    Size,
}

impl From<SortKey> for SortOrder {
    fn from(key: SortKey) -> Self {
        match key {
            SortKey::Name => SortOrder::Name,
            SortKey::Type => SortOrder::Type,
            SortKey::Size => SortOrder::Size,
        }
    }
}

/// Flags shared by every command that scans.
#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Directory to scan. Defaults to the current directory.
    pub root: Option<PathBuf>,

    /// List files only; directories are walked but not shown
    #[arg(long)]
    pub files_only: bool,

    /// Only list the root's immediate children
    #[arg(long)]
    pub flat: bool,

    /// Skip dot-prefixed files and directories
    #[arg(long)]
    pub no_hidden: bool,

    /// Gitignore-style pattern to skip (repeatable)
    #[arg(long, short = 'x', value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Skip VCS metadata and common build/dependency directories
    #[arg(long)]
    pub default_excludes: bool,
}

impl ScanArgs {
    pub fn root(&self) -> PathBuf {
        self.root.clone().unwrap_or_else(default_scan_root)
    }

    pub fn options(&self) -> ScanOptions {
        let mut options = ScanOptions::default()
            .with_mode(if self.files_only {
                ScanMode::FilesOnly
            } else {
                ScanMode::Everything
            })
            .with_depth(if self.flat { Depth::Flat } else { Depth::Recursive })
            .with_hidden(!self.no_hidden);

        if self.default_excludes {
            options = options.with_default_excludes();
        }
        options.excludes.extend(self.exclude.iter().cloned());
        options
    }

    /// Scans into a fresh store. Root failures are returned as errors.
    pub fn load(&self) -> Result<ListingStore, ScanError> {
        let mut store = ListingStore::new(self.options());
        store.scan(self.root())?;
        Ok(store)
    }

    /// Raw scan result, for commands that only need totals.
    pub fn report(&self) -> Result<ScanReport, ScanError> {
        scan(&self.root(), &self.options())
    }
}

/// Writes scan diagnostics to stderr and picks the exit code.
pub fn report_diagnostics(diagnostics: &[ScanError]) -> ExitCode {
    for diag in diagnostics {
        eprintln!("[warn] {diag}");
    }

    if diagnostics.is_empty() {
        ExitCode::SUCCESS
    } else {
        eprintln!("[warn] {} entries could not be read", diagnostics.len());
        ExitCode::from(EXIT_PARTIAL)
    }
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
