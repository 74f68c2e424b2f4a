use dirview_runtime::DEFAULT_EXCLUDE_PATTERNS;

/// Which filesystem objects become rows, and what their relative path means.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ScanMode {
    /// Files and directories are rows. `relative_path` is the entry's own
    /// path below the root, name included.
    #[default]
    Everything,
    /// Only files are rows; directories are traversed but never listed.
    /// `relative_path` is the containing directory below the root.
    FilesOnly,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Depth {
    #[default]
    Recursive,
    /// Immediate children of the root only.
    Flat,
}

#[derive(Debug, Clone)]
pub struct ScanOptions {
    pub mode: ScanMode,
    pub depth: Depth,
    /// Whether dot-prefixed entries are listed and descended into.
    pub include_hidden: bool,
    /// Gitignore-style patterns, matched relative to the scan root.
    pub excludes: Vec<String>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            mode: ScanMode::Everything,
            depth: Depth::Recursive,
            include_hidden: true,
            excludes: Vec::new(),
        }
    }
}

impl ScanOptions {
    pub fn with_mode(mut self, mode: ScanMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_depth(mut self, depth: Depth) -> Self {
        self.depth = depth;
        self
    }

    pub fn with_hidden(mut self, include_hidden: bool) -> Self {
        self.include_hidden = include_hidden;
        self
    }

    pub fn with_exclude(mut self, pattern: impl Into<String>) -> Self {
        self.excludes.push(pattern.into());
        self
    }

    /// Adds the VCS/build patterns from `DEFAULT_EXCLUDE_PATTERNS`.
    pub fn with_default_excludes(mut self) -> Self {
        self.excludes
            .extend(DEFAULT_EXCLUDE_PATTERNS.iter().map(|p| (*p).to_owned()));
        self
    }

    #[inline]
    pub fn lists_directories(&self) -> bool {
        self.mode == ScanMode::Everything
    }
}
