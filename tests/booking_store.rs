//! Store behaviour through the public library API.

use bookings::core::action::{Action, update};
use bookings::core::booking::{Booking, DateRange};
use bookings::core::draft::INCOMPLETE_SUBMISSION_MESSAGE;
use bookings::core::state::App;
use bookings::core::store::{BookingStore, SharedStore, Snapshot};

fn trip() -> Booking {
    Booking::new("Trip", DateRange::new(1_700_000_000_000, 1_700_500_000_000))
}

fn titled(title: &str) -> Booking {
    Booking::new(title, DateRange::new(1_736_899_200_000, 1_737_331_200_000))
}

fn bookings(snapshot: &Snapshot) -> Vec<Booking> {
    snapshot.bookings().cloned().collect()
}

fn store_with(titles: &[&str]) -> BookingStore {
    let mut store = BookingStore::new();
    for title in titles {
        store.add(titled(title));
    }
    store
}

#[test]
fn test_add_appends_as_last_element() {
    let mut store = store_with(&["A", "B"]);
    let before = bookings(&store.snapshot());

    let after = store.add(titled("C"));

    assert_eq!(after.len(), before.len() + 1);
    assert_eq!(bookings(&after)[..2], before[..]);
    assert_eq!(after.entries().last().unwrap().booking, titled("C"));
}

#[test]
fn test_add_then_remove_round_trips() {
    let mut store = store_with(&["A", "B"]);
    let before = bookings(&store.snapshot());

    store.add(titled("C"));
    let after = store.remove(&titled("C"));

    assert_eq!(bookings(&after), before);
}

#[test]
fn test_double_toggle_is_identity() {
    let mut store = store_with(&["A", "B", "C"]);
    let before = bookings(&store.snapshot());

    let once = store.toggle(&titled("B"));
    assert!(once.entries()[1].booking.is_completed);
    let twice = store.toggle(&once.entries()[1].booking.clone());

    assert_eq!(bookings(&twice), before);
}

#[test]
fn test_absent_booking_leaves_store_unchanged() {
    let mut store = store_with(&["A"]);
    let before = store.snapshot();

    assert_eq!(bookings(&store.remove(&titled("Z"))), bookings(&before));
    assert_eq!(bookings(&store.toggle(&titled("Z"))), bookings(&before));
    assert_eq!(store.snapshot().version(), before.version());
}

#[test]
fn test_untouched_entries_keep_their_order() {
    let mut store = store_with(&["A", "B", "C", "D"]);

    let removed = store.remove(&titled("B"));
    let titles: Vec<_> = removed.bookings().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["A", "C", "D"]);

    let toggled = store.toggle(&titled("C"));
    let titles: Vec<_> = toggled.bookings().map(|b| b.title.as_str()).collect();
    assert_eq!(titles, ["A", "C", "D"]);
}

#[test]
fn test_value_keyed_operations_hit_every_match() {
    let mut store = BookingStore::new();
    store.add(trip());
    store.add(titled("Other"));
    store.add(trip());

    let toggled = store.toggle(&trip());
    let flags: Vec<_> = toggled.bookings().map(|b| b.is_completed).collect();
    assert_eq!(flags, [true, false, true]);

    let removed = store.remove(&trip().toggled());
    assert_eq!(bookings(&removed), vec![titled("Other")]);
}

#[test]
fn test_id_keyed_operations_hit_exactly_one() {
    let mut store = BookingStore::new();
    store.add(trip());
    let second = store.add(trip()).entries()[1].id;

    let toggled = store.toggle_id(second);
    let flags: Vec<_> = toggled.bookings().map(|b| b.is_completed).collect();
    assert_eq!(flags, [false, true]);

    let removed = store.remove_id(second);
    assert_eq!(bookings(&removed), vec![trip()]);
}

#[test]
fn test_trip_scenario() {
    let mut store = BookingStore::new();

    let added = store.add(trip());
    assert_eq!(bookings(&added), vec![trip()]);
    assert!(!added.entries()[0].booking.is_completed);

    let toggled = store.toggle(&trip());
    assert_eq!(toggled.len(), 1);
    assert!(toggled.entries()[0].booking.is_completed);

    let removed = store.remove(&toggled.entries()[0].booking.clone());
    assert!(removed.is_empty());
}

#[test]
fn test_subscribers_see_every_published_snapshot() {
    let mut store = BookingStore::new();
    let rx = store.subscribe();

    store.add(trip());
    store.toggle(&trip());
    store.remove(&titled("Missing"));

    let versions: Vec<_> = rx.try_iter().map(|s| (s.version(), s.len())).collect();
    assert_eq!(versions, [(0, 0), (1, 1), (2, 1)]);
}

#[test]
fn test_shared_store_writers_from_threads() {
    let store = SharedStore::new(BookingStore::new());
    let rx = store.subscribe();

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let store = store.clone();
            std::thread::spawn(move || {
                store.add(titled(&format!("Booking {i}")));
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(store.snapshot().len(), 4);
    assert_eq!(rx.try_iter().last().unwrap().version(), 4);
}

#[test]
fn test_empty_title_is_rejected_before_the_store() {
    let mut app = App::default();
    update(&mut app, Action::OpenAddBooking);
    update(
        &mut app,
        Action::SetDraftRange(DateRange::new(1_700_000_000_000, 1_700_500_000_000)),
    );

    update(&mut app, Action::SaveDraft);

    assert!(app.store.snapshot().is_empty());
    assert_eq!(app.form_error.as_deref(), Some(INCOMPLETE_SUBMISSION_MESSAGE));
}

#[test]
fn test_complete_draft_is_added() {
    let mut app = App::default();
    update(&mut app, Action::OpenAddBooking);
    update(&mut app, Action::SetDraftTitle("Trip".to_string()));
    update(
        &mut app,
        Action::SetDraftRange(DateRange::new(1_700_000_000_000, 1_700_500_000_000)),
    );

    update(&mut app, Action::SaveDraft);

    assert_eq!(bookings(&app.store.snapshot()), vec![trip()]);
    assert!(app.form_error.is_none());
}
