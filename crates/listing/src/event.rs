use std::path::PathBuf;

use bitflags::bitflags;
use crossbeam::channel::{self, Receiver, Sender};

use crate::row::Role;

bitflags! {
    /// Row fields a presentation layer may need to refresh.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct RowFields: u8 {
        const NAME          = 0b0000_0001;
        const PATH          = 0b0000_0010;
        const RELATIVE_PATH = 0b0000_0100;
        const SIZE          = 0b0000_1000;
        const KIND          = 0b0001_0000;
        const EXTENSION     = 0b0010_0000;
        const IS_DIRECTORY  = 0b0100_0000;
        /// Full path or bare name, depending on the display mode.
        const DISPLAY_NAME  = 0b1000_0000;
    }
}

impl RowFields {
    /// Roles whose value is covered by this set, in `Role::ALL` order.
    pub fn roles(self) -> impl Iterator<Item = Role> {
        Role::ALL
            .into_iter()
            .filter(move |role| self.contains(role.field()))
    }
}

/// Change notifications. The store never emits per-row diffs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListingEvent {
    /// Rows were replaced or reordered; re-read everything.
    Reset,
    /// The scan root changed. Always followed by a `Reset`.
    RootChanged(PathBuf),
    /// The given fields changed for every row; order and count did not.
    FieldsChanged(RowFields),
}

/// Fan-out of events to every live subscriber.
#[derive(Default)]
pub(crate) struct Notifier {
    subscribers: Vec<Sender<ListingEvent>>,
}

impl Notifier {
    pub(crate) fn subscribe(&mut self) -> Receiver<ListingEvent> {
        let (tx, rx) = channel::unbounded();
        self.subscribers.push(tx);
        rx
    }

    /// Sends to all subscribers, dropping the ones whose receiver is gone.
    pub(crate) fn emit(&mut self, event: ListingEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }

    #[cfg(test)]
    pub(crate) fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }
}
