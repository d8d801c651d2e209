// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::tests::helpers::{apply_ok, create_test_ledger, stay};
use crate::{
    BookingFilter, Command, GuestContact, InMemoryGuestDirectory, Ledger, search,
};
use stay_ledger_domain::{
    Amount, BookingSource, BookingStatus, GuestRef, PaymentStatus,
};

fn guest(id: &str) -> GuestRef {
    GuestRef::new(id).unwrap()
}

/// Builds a ledger with three bookings and a directory knowing their guests.
fn seeded_ledger() -> (Ledger, InMemoryGuestDirectory) {
    let mut directory = InMemoryGuestDirectory::new();
    directory.insert(
        &guest("guest-1"),
        GuestContact::new(
            String::from("Amina Mwangi"),
            String::from("+254 712 345678"),
            String::from("amina.mwangi@example.com"),
        ),
    );
    directory.insert(
        &guest("guest-2"),
        GuestContact::new(
            String::from("James Okonkwo"),
            String::from("+234 801 234567"),
            String::from("j.okonkwo@example.com"),
        ),
    );
    directory.insert(
        &guest("guest-3"),
        GuestContact::new(
            String::from("Grace Mwangi"),
            String::from("+254 700 111222"),
            String::from("grace@example.com"),
        ),
    );

    let ledger = create_test_ledger();
    let a = apply_ok(
        &ledger,
        Command::CreateBooking {
            guest: guest("guest-1"),
            room: None,
            stay: stay(2, 5),
            total_amount: Amount::new(180_000).unwrap(),
            source: BookingSource::Website,
        },
    );
    let b = apply_ok(
        &a.new_ledger,
        Command::CreateBooking {
            guest: guest("guest-2"),
            room: None,
            stay: stay(10, 12),
            total_amount: Amount::new(120_000).unwrap(),
            source: BookingSource::Phone,
        },
    );
    let b = apply_ok(
        &b.new_ledger,
        Command::RecordPayment {
            reference: b.booking.reference.clone(),
            amount: 120_000,
        },
    );
    let c = apply_ok(
        &b.new_ledger,
        Command::CreateBooking {
            guest: guest("guest-3"),
            room: None,
            stay: stay(15, 18),
            total_amount: Amount::new(90_000).unwrap(),
            source: BookingSource::Website,
        },
    );

    (c.new_ledger, directory)
}

#[test]
fn test_empty_filter_returns_everything_in_insertion_order() {
    let (ledger, directory) = seeded_ledger();

    let results = search(&ledger, &directory, &BookingFilter::default());

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].reference.value(), "BK000001");
    assert_eq!(results[1].reference.value(), "BK000002");
    assert_eq!(results[2].reference.value(), "BK000003");
}

#[test]
fn test_text_matches_guest_name_case_insensitively() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        text: Some(String::from("mwangi")),
        ..BookingFilter::default()
    };

    let results = search(&ledger, &directory, &filter);

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].guest.value(), "guest-1");
    assert_eq!(results[1].guest.value(), "guest-3");
}

#[test]
fn test_text_matches_booking_reference() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        text: Some(String::from("bk000002")),
        ..BookingFilter::default()
    };

    let results = search(&ledger, &directory, &filter);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].guest.value(), "guest-2");
}

#[test]
fn test_text_matches_phone_and_email() {
    let (ledger, directory) = seeded_ledger();

    let by_phone = search(
        &ledger,
        &directory,
        &BookingFilter {
            text: Some(String::from("801 234")),
            ..BookingFilter::default()
        },
    );
    assert_eq!(by_phone.len(), 1);
    assert_eq!(by_phone[0].guest.value(), "guest-2");

    let by_email = search(
        &ledger,
        &directory,
        &BookingFilter {
            text: Some(String::from("AMINA.MWANGI@")),
            ..BookingFilter::default()
        },
    );
    assert_eq!(by_email.len(), 1);
    assert_eq!(by_email[0].guest.value(), "guest-1");
}

#[test]
fn test_categorical_filters_and_with_text() {
    let (ledger, directory) = seeded_ledger();

    // "mwangi" matches guests 1 and 3; the source filter narrows to websites,
    // which both are, then payment status narrows to unpaid only.
    let filter = BookingFilter {
        text: Some(String::from("mwangi")),
        source: Some(BookingSource::Website),
        payment_status: Some(PaymentStatus::Unpaid),
        status: None,
    };

    let results = search(&ledger, &directory, &filter);

    assert_eq!(results.len(), 2);
}

#[test]
fn test_payment_status_filter_uses_derived_status() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        payment_status: Some(PaymentStatus::Paid),
        ..BookingFilter::default()
    };

    let results = search(&ledger, &directory, &filter);

    assert_eq!(results.len(), 1);
    assert_eq!(results[0].guest.value(), "guest-2");
}

#[test]
fn test_status_filter() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        status: Some(BookingStatus::Pending),
        ..BookingFilter::default()
    };

    assert_eq!(search(&ledger, &directory, &filter).len(), 3);

    let filter = BookingFilter {
        status: Some(BookingStatus::Confirmed),
        ..BookingFilter::default()
    };
    assert!(search(&ledger, &directory, &filter).is_empty());
}

#[test]
fn test_whitespace_text_matches_everything() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        text: Some(String::from("   ")),
        ..BookingFilter::default()
    };

    assert_eq!(search(&ledger, &directory, &filter).len(), 3);
}

#[test]
fn test_unknown_guest_still_matches_by_reference() {
    let (ledger, _) = seeded_ledger();
    // An empty directory knows none of the guests.
    let empty = InMemoryGuestDirectory::new();

    let by_name = search(
        &ledger,
        &empty,
        &BookingFilter {
            text: Some(String::from("mwangi")),
            ..BookingFilter::default()
        },
    );
    assert!(by_name.is_empty());

    let by_reference = search(
        &ledger,
        &empty,
        &BookingFilter {
            text: Some(String::from("BK000001")),
            ..BookingFilter::default()
        },
    );
    assert_eq!(by_reference.len(), 1);
}

#[test]
fn test_no_match_returns_empty() {
    let (ledger, directory) = seeded_ledger();
    let filter = BookingFilter {
        text: Some(String::from("nobody by this name")),
        ..BookingFilter::default()
    };

    assert!(search(&ledger, &directory, &filter).is_empty());
}
