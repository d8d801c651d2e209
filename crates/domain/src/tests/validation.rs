// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::Booking;
use crate::booking_status::BookingStatus;
use crate::error::DomainError;
use crate::stay::StayInterval;
use crate::types::{Amount, BookingReference, BookingSource, GuestRef, ReferencePrefix, RoomRef};
use crate::validation::{validate_payment, validate_reference_unique, validate_room_available};
use chrono::{NaiveDate, TimeZone, Utc};

fn stay(from_day: u32, to_day: u32) -> StayInterval {
    StayInterval::new(
        NaiveDate::from_ymd_opt(2026, 3, from_day).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, to_day).unwrap(),
    )
    .unwrap()
}

fn booking_in_room(sequence: u64, room: &str, stay: StayInterval, status: BookingStatus) -> Booking {
    let prefix = ReferencePrefix::new("BK").unwrap();
    let mut booking = Booking::new(
        BookingReference::generate(&prefix, sequence),
        GuestRef::new("guest-1").unwrap(),
        Some(RoomRef::new(room).unwrap()),
        stay,
        Amount::new(100_000).unwrap(),
        BookingSource::Direct,
        Utc.with_ymd_and_hms(2026, 2, 1, 12, 0, 0).unwrap(),
    );
    booking.status = status;
    booking
}

#[test]
fn test_duplicate_reference_detected() {
    let existing = booking_in_room(1, "204", stay(2, 5), BookingStatus::Pending);
    let reference = existing.reference.clone();

    let result = validate_reference_unique(&reference, &[existing]);

    assert!(matches!(
        result,
        Err(DomainError::DuplicateReference { .. })
    ));
}

#[test]
fn test_fresh_reference_accepted() {
    let existing = booking_in_room(1, "204", stay(2, 5), BookingStatus::Pending);
    let prefix = ReferencePrefix::new("BK").unwrap();
    let fresh = BookingReference::generate(&prefix, 2);

    assert!(validate_reference_unique(&fresh, &[existing]).is_ok());
}

#[test]
fn test_confirmed_booking_blocks_overlapping_stay() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Confirmed);
    let room = RoomRef::new("204").unwrap();

    let result = validate_room_available(&room, &stay(4, 8), &[existing], None);

    match result {
        Err(DomainError::RoomOverlap {
            room,
            conflicting_reference,
        }) => {
            assert_eq!(room, "204");
            assert_eq!(conflicting_reference, "BK000001");
        }
        other => panic!("expected RoomOverlap, got {other:?}"),
    }
}

#[test]
fn test_checked_in_booking_blocks_room() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::CheckedIn);
    let room = RoomRef::new("204").unwrap();

    assert!(validate_room_available(&room, &stay(4, 8), &[existing], None).is_err());
}

#[test]
fn test_pending_booking_does_not_block_room() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Pending);
    let room = RoomRef::new("204").unwrap();

    assert!(validate_room_available(&room, &stay(4, 8), &[existing], None).is_ok());
}

#[test]
fn test_cancelled_booking_does_not_block_room() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Cancelled);
    let room = RoomRef::new("204").unwrap();

    assert!(validate_room_available(&room, &stay(4, 8), &[existing], None).is_ok());
}

#[test]
fn test_different_room_does_not_conflict() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Confirmed);
    let room = RoomRef::new("205").unwrap();

    assert!(validate_room_available(&room, &stay(2, 6), &[existing], None).is_ok());
}

#[test]
fn test_back_to_back_stays_allowed_in_same_room() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Confirmed);
    let room = RoomRef::new("204").unwrap();

    assert!(validate_room_available(&room, &stay(6, 9), &[existing], None).is_ok());
}

#[test]
fn test_excluded_booking_does_not_conflict_with_itself() {
    let existing = booking_in_room(1, "204", stay(2, 6), BookingStatus::Confirmed);
    let reference = existing.reference.clone();
    let room = RoomRef::new("204").unwrap();

    let result = validate_room_available(&room, &stay(2, 6), &[existing], Some(&reference));

    assert!(result.is_ok());
}

#[test]
fn test_payment_must_be_positive() {
    let booking = booking_in_room(1, "204", stay(2, 5), BookingStatus::Confirmed);

    assert!(matches!(
        validate_payment(&booking, 0),
        Err(DomainError::InvalidAmount { .. })
    ));
    assert!(matches!(
        validate_payment(&booking, -500),
        Err(DomainError::InvalidAmount { .. })
    ));
}

#[test]
fn test_overpayment_rejected() {
    let mut booking = booking_in_room(1, "204", stay(2, 5), BookingStatus::Confirmed);
    booking.paid_amount = Amount::new(90_000).unwrap();

    // total is 100000, paid 90000: 10001 would overpay.
    assert!(matches!(
        validate_payment(&booking, 10_001),
        Err(DomainError::Overpayment { .. })
    ));
    assert!(validate_payment(&booking, 10_000).is_ok());
}
