use std::path::{Path, PathBuf};

use crossbeam::channel::Receiver;
use dirview_fs::{Entry, ScanError, ScanOptions, scan};
use log::{debug, warn};

use crate::{
    error::ListingError,
    event::{ListingEvent, Notifier, RowFields},
    row::RowView,
    sort::SortOrder,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListingState {
    /// No scan has completed yet.
    Empty,
    /// At least one scan (or `replace`) has happened, even if it found nothing.
    Populated,
}

/// Counts from the latest scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanSummary {
    pub rows: usize,
    pub failures: usize,
}

/// Ordered rows for the current root plus display configuration.
///
/// Single writer: callers that share a store across threads must wrap it
/// in their own lock.
pub struct ListingStore {
    options: ScanOptions,
    root: Option<PathBuf>,
    entries: Vec<Entry>,
    diagnostics: Vec<ScanError>,
    state: ListingState,
    show_full_path: bool,
    sort_order: Option<SortOrder>,
    notifier: Notifier,
}

impl Default for ListingStore {
    fn default() -> Self {
        Self::new(ScanOptions::default())
    }
}

impl ListingStore {
    pub fn new(options: ScanOptions) -> Self {
        Self {
            options,
            root: None,
            entries: Vec::new(),
            diagnostics: Vec::new(),
            state: ListingState::Empty,
            show_full_path: false,
            sort_order: None,
            notifier: Notifier::default(),
        }
    }

    pub fn subscribe(&mut self) -> Receiver<ListingEvent> {
        self.notifier.subscribe()
    }

    #[inline]
    pub fn options(&self) -> &ScanOptions {
        &self.options
    }

    #[inline]
    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    #[inline]
    pub fn state(&self) -> ListingState {
        self.state
    }

    #[inline]
    pub fn sort_order(&self) -> Option<SortOrder> {
        self.sort_order
    }

    #[inline]
    pub fn show_full_path(&self) -> bool {
        self.show_full_path
    }

    /// Problems hit by the latest scan. Empty when it was complete.
    #[inline]
    pub fn diagnostics(&self) -> &[ScanError] {
        &self.diagnostics
    }

    #[inline]
    pub fn row_count(&self) -> usize {
        self.entries.len()
    }

    pub fn row_at(&self, index: usize) -> Result<RowView<'_>, ListingError> {
        self.entries
            .get(index)
            .map(|entry| RowView::new(entry, self.show_full_path))
            .ok_or(ListingError::IndexOutOfRange {
                index,
                len: self.entries.len(),
            })
    }

    pub fn rows(&self) -> impl ExactSizeIterator<Item = RowView<'_>> {
        let show_full_path = self.show_full_path;
        self.entries
            .iter()
            .map(move |entry| RowView::new(entry, show_full_path))
    }

    /// Scans `root` unless it is already the current root.
    pub fn set_root(&mut self, root: impl AsRef<Path>) -> Result<Option<ScanSummary>, ScanError> {
        if self.root.as_deref() == Some(root.as_ref()) {
            return Ok(None);
        }
        self.scan(root).map(Some)
    }

    /// Scans `root` and replaces every row with the result.
    ///
    /// A root that cannot be scanned still becomes the current root, with
    /// no rows, and the error is returned.
    pub fn scan(&mut self, root: impl AsRef<Path>) -> Result<ScanSummary, ScanError> {
        let root = root.as_ref();
        self.update_root(root);

        match scan(root, &self.options) {
            Ok(report) => {
                for diag in &report.diagnostics {
                    debug!("[store] scan diagnostic: {diag}");
                }
                self.diagnostics = report.diagnostics;
                self.replace(report.entries);
                Ok(ScanSummary {
                    rows: self.entries.len(),
                    failures: self.diagnostics.len(),
                })
            }
            Err(e) => {
                warn!("[store] scan of {:?} failed: {e}", root);
                self.diagnostics.clear();
                self.replace(Vec::new());
                Err(e)
            }
        }
    }

    /// Scans the current root again. Does nothing before the first scan.
    pub fn rescan(&mut self) -> Result<ScanSummary, ScanError> {
        match self.root.clone() {
            Some(root) => self.scan(root),
            None => Ok(ScanSummary::default()),
        }
    }

    /// Swaps in a new set of rows as one bulk change.
    ///
    /// The last requested sort order is applied before subscribers hear
    /// about it.
    pub fn replace(&mut self, entries: Vec<Entry>) {
        self.entries = entries;
        self.state = ListingState::Populated;
        if let Some(order) = self.sort_order {
            self.entries.sort_by(|a, b| order.compare(a, b));
        }
        self.notifier.emit(ListingEvent::Reset);
    }

    pub fn sort_by_name(&mut self) {
        self.sort(SortOrder::Name);
    }

    pub fn sort_by_type(&mut self) {
        self.sort(SortOrder::Type);
    }

    pub fn sort_by_size(&mut self) {
        self.sort(SortOrder::Size);
    }

    /// Reorders the rows in place. A no-op before the first scan.
    pub fn sort(&mut self, order: SortOrder) {
        if self.state == ListingState::Empty {
            return;
        }
        self.entries.sort_by(|a, b| order.compare(a, b));
        self.sort_order = Some(order);
        self.notifier.emit(ListingEvent::Reset);
    }

    /// Switches `display_name` between the full path and the bare name.
    /// A no-op before the first scan.
    pub fn set_show_full_path(&mut self, show_full_path: bool) {
        if self.state == ListingState::Empty || self.show_full_path == show_full_path {
            return;
        }
        self.show_full_path = show_full_path;
        self.notifier
            .emit(ListingEvent::FieldsChanged(RowFields::DISPLAY_NAME));
    }

    fn update_root(&mut self, root: &Path) {
        if self.root.as_deref() != Some(root) {
            self.root = Some(root.to_path_buf());
            self.notifier
                .emit(ListingEvent::RootChanged(root.to_path_buf()));
        }
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
