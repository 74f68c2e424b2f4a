use std::{borrow::Cow, path::Path};

use dirview_fs::Entry;
use serde::Serialize;

use crate::event::RowFields;

/// Named row attributes, for presentation layers that bind by role name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Name,
    Path,
    RelativePath,
    Size,
    Type,
    Extension,
    IsDirectory,
    DisplayName,
}

impl Role {
    pub const ALL: [Role; 8] = [
        Role::Name,
        Role::Path,
        Role::RelativePath,
        Role::Size,
        Role::Type,
        Role::Extension,
        Role::IsDirectory,
        Role::DisplayName,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Role::Name => "name",
            Role::Path => "path",
            Role::RelativePath => "relativePath",
            Role::Size => "size",
            Role::Type => "type",
            Role::Extension => "extension",
            Role::IsDirectory => "isDirectory",
            Role::DisplayName => "displayName",
        }
    }

    pub fn from_name(name: &str) -> Option<Role> {
        Role::ALL.into_iter().find(|role| role.name() == name)
    }

    pub fn field(self) -> RowFields {
        match self {
            Role::Name => RowFields::NAME,
            Role::Path => RowFields::PATH,
            Role::RelativePath => RowFields::RELATIVE_PATH,
            Role::Size => RowFields::SIZE,
            Role::Type => RowFields::KIND,
            Role::Extension => RowFields::EXTENSION,
            Role::IsDirectory => RowFields::IS_DIRECTORY,
            Role::DisplayName => RowFields::DISPLAY_NAME,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum RowValue {
    Text(String),
    Size(u64),
    Flag(bool),
}

/// Read-only view of one row. Borrowing the store keeps it short-lived.
#[derive(Debug, Clone, Copy)]
pub struct RowView<'a> {
    entry: &'a Entry,
    show_full_path: bool,
}

impl<'a> RowView<'a> {
    pub(crate) fn new(entry: &'a Entry, show_full_path: bool) -> Self {
        Self {
            entry,
            show_full_path,
        }
    }

    #[inline]
    pub fn entry(&self) -> &'a Entry {
        self.entry
    }

    #[inline]
    pub fn name(&self) -> &'a str {
        self.entry.name()
    }

    #[inline]
    pub fn path(&self) -> &'a Path {
        self.entry.path()
    }

    #[inline]
    pub fn relative_path(&self) -> &'a str {
        self.entry.relative_path()
    }

    #[inline]
    pub fn size(&self) -> u64 {
        self.entry.size()
    }

    #[inline]
    pub fn extension(&self) -> &'a str {
        self.entry.extension()
    }

    #[inline]
    pub fn is_directory(&self) -> bool {
        self.entry.is_directory()
    }

    pub fn kind_label(&self) -> String {
        self.entry.kind_label()
    }

    /// Full path or bare name, depending on the store's display mode.
    pub fn display_name(&self) -> Cow<'a, str> {
        if self.show_full_path {
            self.entry.path().to_string_lossy()
        } else {
            Cow::Borrowed(self.entry.name())
        }
    }

    pub fn value(&self, role: Role) -> RowValue {
        match role {
            Role::Name => RowValue::Text(self.name().to_owned()),
            Role::Path => RowValue::Text(self.path().to_string_lossy().into_owned()),
            Role::RelativePath => RowValue::Text(self.relative_path().to_owned()),
            Role::Size => RowValue::Size(self.size()),
            Role::Type => RowValue::Text(self.kind_label()),
            Role::Extension => RowValue::Text(self.extension().to_owned()),
            Role::IsDirectory => RowValue::Flag(self.is_directory()),
            Role::DisplayName => RowValue::Text(self.display_name().into_owned()),
        }
    }
}

#[cfg(test)]
#[path = "row_tests.rs"]
mod tests;
