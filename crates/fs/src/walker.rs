use std::{
    fs::{self, DirEntry},
    io::{self, ErrorKind},
    path::{Path, PathBuf},
};

use log::{debug, warn};

use crate::{
    config::{INITIAL_STACK_CAPACITY, RELATIVE_SEPARATOR},
    entry::Entry,
    error::ScanError,
    excludes::Excludes,
    options::{Depth, ScanMode, ScanOptions},
};

/// Result of one full traversal.
///
/// `entries` are in traversal order, which is not a display order.
#[derive(Debug, Default)]
pub struct ScanReport {
    /// Absolute scan root.
    pub root: PathBuf,
    pub entries: Vec<Entry>,
    /// Subtrees and entries that could not be read. The scan went on without them.
    pub diagnostics: Vec<ScanError>,
}

impl ScanReport {
    pub fn file_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.is_directory()).count()
    }

    pub fn dir_count(&self) -> usize {
        self.entries.iter().filter(|e| e.is_directory()).count()
    }

    pub fn total_size(&self) -> u64 {
        self.entries.iter().map(Entry::size).sum()
    }

    #[inline]
    pub fn is_partial(&self) -> bool {
        !self.diagnostics.is_empty()
    }
}

/// A directory waiting to be enumerated.
struct PendingDir {
    path: PathBuf,
    /// Relative path of this directory; empty for the root.
    relative: String,
}

struct ScanContext<'a> {
    options: &'a ScanOptions,
    excludes: Excludes,
}

/// What a single child of a directory turned out to be.
struct Inspected {
    entry: Entry,
    /// Relative path of the child itself, used when it is pushed for expansion.
    own_relative: String,
    descend: bool,
}

/// Walks `root` depth-first with an explicit stack of pending directories.
///
/// Fails only when the root itself is unusable. Unreadable subdirectories
/// and entries are skipped and reported through `ScanReport::diagnostics`.
pub fn scan(root: &Path, options: &ScanOptions) -> Result<ScanReport, ScanError> {
    let root = resolve_root(root)?;
    let ctx = ScanContext {
        options,
        excludes: Excludes::new(&root, options.excludes.as_slice())?,
    };

    let mut report = ScanReport {
        root: root.clone(),
        ..ScanReport::default()
    };

    let mut stack = Vec::with_capacity(INITIAL_STACK_CAPACITY);
    stack.push(PendingDir {
        path: root,
        relative: String::new(),
    });

    while let Some(dir) = stack.pop() {
        scan_dir(&dir, &ctx, &mut stack, &mut report);
    }

    debug!(
        "[scan] {:?}: {} entries, {} diagnostics",
        report.root,
        report.entries.len(),
        report.diagnostics.len()
    );

    Ok(report)
}

fn resolve_root(root: &Path) -> Result<PathBuf, ScanError> {
    let metadata = match fs::metadata(root) {
        Ok(m) => m,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(ScanError::RootNotFound(root.to_path_buf()));
        }
        Err(source) => {
            return Err(ScanError::RootUnreadable {
                path: root.to_path_buf(),
                source,
            });
        }
    };

    if !metadata.is_dir() {
        return Err(ScanError::RootNotADirectory(root.to_path_buf()));
    }

    std::path::absolute(root).map_err(|source| ScanError::RootUnreadable {
        path: root.to_path_buf(),
        source,
    })
}

/// Enumerates one directory, pushing subdirectories and collecting rows.
fn scan_dir(
    dir: &PendingDir,
    ctx: &ScanContext<'_>,
    stack: &mut Vec<PendingDir>,
    report: &mut ScanReport,
) {
    let rd = match fs::read_dir(&dir.path) {
        Ok(rd) => rd,
        Err(source) => {
            warn!("[scan] read_dir({:?}) failed: {source}", dir.path);
            report.diagnostics.push(ScanError::SubtreeEnumerationFailed {
                path: dir.path.clone(),
                source,
            });
            return;
        }
    };

    for entry_res in rd {
        let entry = match entry_res {
            Ok(e) => e,
            Err(source) => {
                warn!("[scan] error reading entry in {:?}: {source}", dir.path);
                report.diagnostics.push(ScanError::EntryInspectionFailed {
                    path: dir.path.clone(),
                    source,
                });
                continue;
            }
        };

        match inspect_entry(&entry, &dir.relative, ctx) {
            Ok(Some(inspected)) => {
                if inspected.descend {
                    stack.push(PendingDir {
                        path: inspected.entry.path().to_path_buf(),
                        relative: inspected.own_relative,
                    });
                }
                if ctx.options.lists_directories() || !inspected.entry.is_directory() {
                    report.entries.push(inspected.entry);
                }
            }
            Ok(None) => {}
            Err(source) => {
                let path = entry.path();
                warn!("[scan] inspect({:?}) failed: {source}", path);
                report
                    .diagnostics
                    .push(ScanError::EntryInspectionFailed { path, source });
            }
        }
    }
}

/// Builds the entry for one child. `Ok(None)` means the child is filtered out.
fn inspect_entry(
    entry: &DirEntry,
    parent_relative: &str,
    ctx: &ScanContext<'_>,
) -> io::Result<Option<Inspected>> {
    let path = entry.path();
    let name = entry.file_name();
    let name = name.to_string_lossy();

    if !ctx.options.include_hidden && name.starts_with('.') {
        return Ok(None);
    }

    let file_type = entry.file_type()?;
    let is_symlink = file_type.is_symlink();

    // Links are reported by what they point at but never followed.
    let (is_dir, size) = if is_symlink {
        match fs::metadata(&path) {
            Ok(target) if target.is_dir() => (true, 0),
            Ok(target) => (false, target.len()),
            Err(_) => (false, entry.metadata()?.len()),
        }
    } else if file_type.is_dir() {
        (true, 0)
    } else {
        (false, entry.metadata()?.len())
    };

    if ctx.excludes.is_excluded(&path, is_dir) {
        debug!("[scan] excluded {:?}", path);
        return Ok(None);
    }

    let own_relative = join_relative(parent_relative, &name);
    let descend = is_dir && !is_symlink && ctx.options.depth == Depth::Recursive;

    let entry = if is_dir {
        Entry::directory(path, own_relative.clone())
    } else {
        let relative = match ctx.options.mode {
            ScanMode::Everything => own_relative.clone(),
            ScanMode::FilesOnly => parent_relative.to_owned(),
        };
        Entry::file(path, relative, size)
    };

    Ok(Some(Inspected {
        entry: entry.symlinked(is_symlink),
        own_relative,
        descend,
    }))
}

fn join_relative(prefix: &str, name: &str) -> String {
    if prefix.is_empty() {
        name.to_owned()
    } else {
        let mut joined = String::with_capacity(prefix.len() + 1 + name.len());
        joined.push_str(prefix);
        joined.push(RELATIVE_SEPARATOR);
        joined.push_str(name);
        joined
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
