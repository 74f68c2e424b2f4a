use std::path::{Path, PathBuf};

/// One filesystem object discovered during a scan.
///
/// Fields are private so the derived values (`extension`, `kind_label`) can
/// never disagree with the path they were computed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    name: String,
    path: PathBuf,
    relative_path: String,
    /// Byte size. Always 0 for directories.
    size: u64,
    /// Lowercase extension without dot, e.g. `pdf`. Empty if none.
    extension: String,
    is_directory: bool,
    is_symlink: bool,
}

impl Entry {
    pub fn file(path: PathBuf, relative_path: String, size: u64) -> Self {
        let extension = extension_of(&path);
        Self {
            name: name_of(&path),
            path,
            relative_path,
            size,
            extension,
            is_directory: false,
            is_symlink: false,
        }
    }

    pub fn directory(path: PathBuf, relative_path: String) -> Self {
        Self {
            name: name_of(&path),
            path,
            relative_path,
            size: 0,
            extension: String::new(),
            is_directory: true,
            is_symlink: false,
        }
    }

    pub(crate) fn symlinked(mut self, is_symlink: bool) -> Self {
        self.is_symlink = is_symlink;
        self
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    pub fn path(&self) -> &Path {
        &self.path
    }

    #[inline]
    pub fn relative_path(&self) -> &str {
        &self.relative_path
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.size
    }

    #[inline]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.is_directory
    }

    #[inline]
    pub fn is_symlink(&self) -> bool {
        self.is_symlink
    }

    #[inline]
    pub fn is_hidden(&self) -> bool {
        self.name.starts_with('.')
    }

    /// `"Directory"`, `"File"`, or `"<EXT> File"`.
    pub fn kind_label(&self) -> String {
        if self.is_directory {
            "Directory".to_owned()
        } else if self.extension.is_empty() {
            "File".to_owned()
        } else {
            format!("{} File", self.extension.to_uppercase())
        }
    }
}

fn name_of(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default()
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .map(|ext| ext.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

#[cfg(test)]
#[path = "entry_tests.rs"]
mod tests;
