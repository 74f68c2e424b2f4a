use std::cmp::Ordering;

use dirview_fs::Entry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    /// Case-insensitive name.
    Name,
    /// Extension, then name.
    Type,
    /// Byte size, smallest first.
    Size,
}

impl SortOrder {
    /// Total order over entries: directories first, then the primary key,
    /// then case-insensitive name, then full path.
    pub fn compare(self, a: &Entry, b: &Entry) -> Ordering {
        directories_first(a, b)
            .then_with(|| match self {
                SortOrder::Name => Ordering::Equal,
                SortOrder::Type => cmp_ignore_case(a.extension(), b.extension()),
                SortOrder::Size => a.size().cmp(&b.size()),
            })
            .then_with(|| cmp_ignore_case(a.name(), b.name()))
            .then_with(|| a.path().cmp(b.path()))
    }

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::Name => "name",
            SortOrder::Type => "type",
            SortOrder::Size => "size",
        }
    }
}

#[inline]
fn directories_first(a: &Entry, b: &Entry) -> Ordering {
    b.is_directory().cmp(&a.is_directory())
}

/// Compares two strings by their lowercase form without allocating.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
}

#[cfg(test)]
#[path = "sort_tests.rs"]
mod tests;
