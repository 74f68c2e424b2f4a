mod error;
mod event;
mod row;
mod sort;
mod store;

pub use error::ListingError;
pub use event::{ListingEvent, RowFields};
pub use row::{Role, RowValue, RowView};
pub use sort::{SortOrder, cmp_ignore_case};
pub use store::{ListingState, ListingStore, ScanSummary};
