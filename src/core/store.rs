//! # Booking Store
//!
//! Holds the ordered list of bookings and publishes it as immutable,
//! versioned snapshots.
//!
//! ```text
//!   add / remove / toggle
//!            │
//!            ▼
//!   ┌─────────────────┐  publish   ┌──────────────┐
//!   │  BookingStore   │──────────► │ Receiver<..> │  (one per subscriber)
//!   │  snapshot: v3   │            └──────────────┘
//!   └─────────────────┘
//! ```
//!
//! Every effective mutation builds a complete new sequence and swaps it in,
//! bumping the version. A call that matches nothing leaves the current
//! snapshot in place and publishes nothing.
//!
//! Two ways to address bookings:
//!
//! - By value (`remove`, `toggle`): every structurally equal entry is hit.
//! - By id (`remove_id`, `toggle_id`): exactly one entry is hit. The TUI
//!   only uses these.

use log::{debug, info};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Arc, Mutex, PoisonError};

use crate::core::booking::{Booking, BookingId, Entry};

/// Immutable view of the store at one version.
#[derive(Clone, Debug)]
pub struct Snapshot {
    version: u64,
    entries: Arc<[Entry]>,
}

impl Snapshot {
    fn empty() -> Self {
        Self {
            version: 0,
            entries: Arc::from(Vec::new()),
        }
    }

    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn bookings(&self) -> impl Iterator<Item = &Booking> {
        self.entries.iter().map(|entry| &entry.booking)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: BookingId) -> Option<&Entry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn position(&self, id: BookingId) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id == id)
    }

    pub fn completed_count(&self) -> usize {
        self.bookings().filter(|b| b.is_completed).count()
    }
}

pub struct BookingStore {
    snapshot: Snapshot,
    next_id: u64,
    subscribers: Vec<Sender<Snapshot>>,
}

impl Default for BookingStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingStore {
    pub fn new() -> Self {
        Self {
            snapshot: Snapshot::empty(),
            next_id: 1,
            subscribers: Vec::new(),
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        self.snapshot.clone()
    }

    /// Register an observer. The current snapshot is delivered right away,
    /// followed by every snapshot published afterwards.
    pub fn subscribe(&mut self) -> Receiver<Snapshot> {
        let (tx, rx) = mpsc::channel();
        // The receiver is still in hand, so this send cannot fail.
        let _ = tx.send(self.snapshot.clone());
        self.subscribers.push(tx);
        debug!("Store subscriber added ({} total)", self.subscribers.len());
        rx
    }

    /// Append `booking` as the last entry under a fresh id.
    pub fn add(&mut self, booking: Booking) -> Snapshot {
        let id = BookingId::new(self.next_id);
        self.next_id += 1;
        info!("Adding booking {} '{}'", id, booking.title);

        let mut entries = self.snapshot.entries.to_vec();
        entries.push(Entry { id, booking });
        self.publish(entries)
    }

    /// Drop every entry structurally equal to `booking`.
    pub fn remove(&mut self, booking: &Booking) -> Snapshot {
        let entries: Vec<Entry> = self
            .snapshot
            .entries
            .iter()
            .filter(|entry| entry.booking != *booking)
            .cloned()
            .collect();
        let removed = self.snapshot.len() - entries.len();
        if removed == 0 {
            debug!("remove: no booking matched '{}'", booking.title);
            return self.snapshot();
        }
        info!("Removed {} booking(s) titled '{}'", removed, booking.title);
        self.publish(entries)
    }

    /// Flip the completion flag of every entry structurally equal to `booking`.
    pub fn toggle(&mut self, booking: &Booking) -> Snapshot {
        if !self.snapshot.bookings().any(|b| b == booking) {
            debug!("toggle: no booking matched '{}'", booking.title);
            return self.snapshot();
        }
        let entries: Vec<Entry> = self
            .snapshot
            .entries
            .iter()
            .map(|entry| {
                if entry.booking == *booking {
                    Entry {
                        id: entry.id,
                        booking: entry.booking.toggled(),
                    }
                } else {
                    entry.clone()
                }
            })
            .collect();
        info!("Toggled booking(s) titled '{}'", booking.title);
        self.publish(entries)
    }

    /// Drop the entry with the given id.
    pub fn remove_id(&mut self, id: BookingId) -> Snapshot {
        if self.snapshot.get(id).is_none() {
            debug!("remove_id: unknown booking {}", id);
            return self.snapshot();
        }
        let entries: Vec<Entry> = self
            .snapshot
            .entries
            .iter()
            .filter(|entry| entry.id != id)
            .cloned()
            .collect();
        info!("Removed booking {}", id);
        self.publish(entries)
    }

    /// Flip the completion flag of the entry with the given id.
    pub fn toggle_id(&mut self, id: BookingId) -> Snapshot {
        if self.snapshot.get(id).is_none() {
            debug!("toggle_id: unknown booking {}", id);
            return self.snapshot();
        }
        let entries: Vec<Entry> = self
            .snapshot
            .entries
            .iter()
            .map(|entry| {
                if entry.id == id {
                    Entry {
                        id,
                        booking: entry.booking.toggled(),
                    }
                } else {
                    entry.clone()
                }
            })
            .collect();
        info!("Toggled booking {}", id);
        self.publish(entries)
    }

    /// Swap in a new sequence and hand it to every live subscriber.
    fn publish(&mut self, entries: Vec<Entry>) -> Snapshot {
        self.snapshot = Snapshot {
            version: self.snapshot.version + 1,
            entries: Arc::from(entries),
        };

        let snapshot = &self.snapshot;
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(snapshot.clone()).is_ok());
        if self.subscribers.len() < before {
            debug!(
                "Pruned {} dropped subscriber(s)",
                before - self.subscribers.len()
            );
        }

        debug!(
            "Published snapshot v{} ({} entries)",
            snapshot.version,
            snapshot.len()
        );
        self.snapshot.clone()
    }
}

/// Cloneable handle for hosts with more than one writer.
///
/// Each call holds the lock for exactly one store operation.
#[derive(Clone, Default)]
pub struct SharedStore {
    inner: Arc<Mutex<BookingStore>>,
}

impl SharedStore {
    pub fn new(store: BookingStore) -> Self {
        Self {
            inner: Arc::new(Mutex::new(store)),
        }
    }

    /// Run `f` with exclusive access to the store.
    ///
    /// A poisoned lock is recovered: mutations swap whole snapshots, so a
    /// panicking writer never leaves a half-applied sequence behind.
    pub fn with<R>(&self, f: impl FnOnce(&mut BookingStore) -> R) -> R {
        let mut guard = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard)
    }

    pub fn snapshot(&self) -> Snapshot {
        self.with(|store| store.snapshot())
    }

    pub fn subscribe(&self) -> Receiver<Snapshot> {
        self.with(|store| store.subscribe())
    }

    pub fn add(&self, booking: Booking) -> Snapshot {
        self.with(|store| store.add(booking))
    }

    pub fn remove(&self, booking: &Booking) -> Snapshot {
        self.with(|store| store.remove(booking))
    }

    pub fn toggle(&self, booking: &Booking) -> Snapshot {
        self.with(|store| store.toggle(booking))
    }

    pub fn remove_id(&self, id: BookingId) -> Snapshot {
        self.with(|store| store.remove_id(id))
    }

    pub fn toggle_id(&self, id: BookingId) -> Snapshot {
        self.with(|store| store.toggle_id(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::booking::DateRange;
    use crate::test_support::{booking, trip};

    fn titles(snapshot: &Snapshot) -> Vec<&str> {
        snapshot.bookings().map(|b| b.title.as_str()).collect()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = BookingStore::new();
        let snapshot = store.snapshot();
        assert!(snapshot.is_empty());
        assert_eq!(snapshot.version(), 0);
    }

    #[test]
    fn test_add_appends_last() {
        let mut store = BookingStore::new();
        store.add(booking("A"));
        store.add(booking("B"));
        let snapshot = store.add(booking("C"));
        assert_eq!(titles(&snapshot), vec!["A", "B", "C"]);
        assert_eq!(snapshot.version(), 3);
    }

    #[test]
    fn test_add_assigns_increasing_ids() {
        let mut store = BookingStore::new();
        store.add(trip());
        let snapshot = store.add(trip());
        let ids: Vec<u64> = snapshot.entries().iter().map(|e| e.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
    }

    #[test]
    fn test_ids_are_not_reused_after_remove() {
        let mut store = BookingStore::new();
        let first = store.add(booking("A")).entries()[0].id;
        store.remove_id(first);
        let snapshot = store.add(booking("B"));
        assert_ne!(snapshot.entries()[0].id, first);
    }

    #[test]
    fn test_remove_keeps_order_of_others() {
        let mut store = BookingStore::new();
        for title in ["A", "B", "C", "D"] {
            store.add(booking(title));
        }
        let snapshot = store.remove(&booking("B"));
        assert_eq!(titles(&snapshot), vec!["A", "C", "D"]);
    }

    #[test]
    fn test_remove_all_structural_matches() {
        let mut store = BookingStore::new();
        store.add(trip());
        store.add(booking("Other"));
        store.add(trip());
        let snapshot = store.remove(&trip());
        assert_eq!(titles(&snapshot), vec!["Other"]);
    }

    #[test]
    fn test_toggle_all_structural_matches() {
        let mut store = BookingStore::new();
        store.add(trip());
        store.add(trip());
        let snapshot = store.toggle(&trip());
        assert!(snapshot.bookings().all(|b| b.is_completed));
    }

    #[test]
    fn test_remove_absent_publishes_nothing() {
        let mut store = BookingStore::new();
        let before = store.add(booking("A"));
        let after = store.remove(&booking("Missing"));
        assert_eq!(after.version(), before.version());
        assert_eq!(after.entries(), before.entries());
    }

    #[test]
    fn test_toggle_absent_publishes_nothing() {
        let mut store = BookingStore::new();
        let before = store.add(booking("A"));
        // Same title, different completion flag: not a structural match
        let after = store.toggle(&booking("A").toggled());
        assert_eq!(after.version(), before.version());
        assert_eq!(after.entries(), before.entries());
    }

    #[test]
    fn test_double_toggle_restores_sequence() {
        let mut store = BookingStore::new();
        store.add(booking("A"));
        let before = store.add(trip());
        let toggled = store.toggle(&trip());
        let restored = store.toggle(&toggled.entries()[1].booking);
        assert_eq!(restored.entries(), before.entries());
    }

    #[test]
    fn test_id_operations_hit_exactly_one_duplicate() {
        let mut store = BookingStore::new();
        store.add(trip());
        let snapshot = store.add(trip());
        let second = snapshot.entries()[1].id;

        let snapshot = store.toggle_id(second);
        assert!(!snapshot.entries()[0].booking.is_completed);
        assert!(snapshot.entries()[1].booking.is_completed);

        let snapshot = store.remove_id(second);
        assert_eq!(snapshot.len(), 1);
        assert_eq!(snapshot.entries()[0].booking, trip());
    }

    #[test]
    fn test_unknown_id_is_a_no_op() {
        let mut store = BookingStore::new();
        let before = store.add(trip());
        let bogus = BookingId::new(99);
        assert_eq!(store.toggle_id(bogus).version(), before.version());
        assert_eq!(store.remove_id(bogus).version(), before.version());
    }

    #[test]
    fn test_old_snapshot_is_not_affected_by_later_mutation() {
        let mut store = BookingStore::new();
        let old = store.add(trip());
        store.toggle(&trip());
        assert!(!old.entries()[0].booking.is_completed);
    }

    #[test]
    fn test_subscriber_receives_current_then_updates() {
        let mut store = BookingStore::new();
        store.add(booking("A"));
        let rx = store.subscribe();

        let current = rx.try_recv().unwrap();
        assert_eq!(current.version(), 1);

        store.add(booking("B"));
        store.remove(&booking("A"));
        let versions: Vec<u64> = rx.try_iter().map(|s| s.version()).collect();
        assert_eq!(versions, vec![2, 3]);
    }

    #[test]
    fn test_no_op_does_not_notify() {
        let mut store = BookingStore::new();
        let rx = store.subscribe();
        rx.try_recv().unwrap();
        store.remove(&trip());
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_dropped_subscriber_is_pruned() {
        let mut store = BookingStore::new();
        let rx = store.subscribe();
        let _kept = store.subscribe();
        drop(rx);
        store.add(trip());
        assert_eq!(store.subscribers.len(), 1);
    }

    #[test]
    fn test_completed_count() {
        let mut store = BookingStore::new();
        store.add(booking("A"));
        store.add(trip());
        let snapshot = store.toggle(&trip());
        assert_eq!(snapshot.completed_count(), 1);
    }

    #[test]
    fn test_partial_range_booking_still_matches_by_value() {
        let mut store = BookingStore::new();
        let partial = Booking {
            title: "Loose".to_string(),
            is_completed: false,
            date_range: Some(DateRange {
                start: Some(1),
                end: None,
            }),
        };
        store.add(partial.clone());
        assert!(store.remove(&partial).is_empty());
    }

    #[test]
    fn test_shared_store_serialises_writers() {
        let shared = SharedStore::default();
        let handles: Vec<_> = (0..4)
            .map(|n| {
                let shared = shared.clone();
                std::thread::spawn(move || {
                    for i in 0..25 {
                        shared.add(booking(&format!("{n}-{i}")));
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }
        let snapshot = shared.snapshot();
        assert_eq!(snapshot.len(), 100);
        assert_eq!(snapshot.version(), 100);
    }
}
