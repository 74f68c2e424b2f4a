use std::path::Path;

use ignore::gitignore::{Gitignore, GitignoreBuilder};

/// Gitignore-style exclusion rooted at the scan root.
#[derive(Default)]
pub struct Excludes {
    matcher: Option<Gitignore>,
}

impl Excludes {
    /// Compiles `patterns` against `root`. No patterns means nothing is excluded.
    pub fn new<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<Self, ignore::Error> {
        if patterns.is_empty() {
            return Ok(Self::default());
        }

        let mut builder = GitignoreBuilder::new(root);
        for pat in patterns {
            builder.add_line(None, pat.as_ref())?;
        }

        Ok(Excludes {
            matcher: Some(builder.build()?),
        })
    }

    #[inline]
    #[must_use]
    pub fn is_excluded(&self, path: &Path, is_dir: bool) -> bool {
        // Excluded directories are never descended into, so checking the
        // path itself is enough; parents were already checked on the way down.
        self.matcher
            .as_ref()
            .is_some_and(|m| m.matched(path, is_dir).is_ignore())
    }

    pub fn is_empty(&self) -> bool {
        self.matcher.as_ref().is_none_or(|m| m.is_empty())
    }
}

#[cfg(test)]
#[path = "excludes_tests.rs"]
mod tests;
