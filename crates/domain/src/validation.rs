// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking::Booking;
use crate::error::DomainError;
use crate::stay::StayInterval;
use crate::types::{BookingReference, RoomRef};

/// Validates that a booking reference is not already present in a ledger.
///
/// # Arguments
///
/// * `reference` - The reference to check
/// * `bookings` - The existing bookings of the ledger
///
/// # Errors
///
/// Returns `DomainError::DuplicateReference` if any existing booking carries
/// the same reference.
pub fn validate_reference_unique(
    reference: &BookingReference,
    bookings: &[Booking],
) -> Result<(), DomainError> {
    if bookings.iter().any(|b| &b.reference == reference) {
        return Err(DomainError::DuplicateReference {
            reference: reference.value().to_owned(),
        });
    }
    Ok(())
}

/// Validates that a room is free for a stay.
///
/// A room is unavailable when any confirmed or checked-in booking holds it
/// for an overlapping stay. Pending and terminal bookings never block a
/// room. The booking being mutated excludes itself via `exclude` so a
/// re-check does not collide with its own prior state.
///
/// # Arguments
///
/// * `room` - The room to check
/// * `stay` - The stay interval being requested
/// * `bookings` - The existing bookings of the ledger
/// * `exclude` - Reference of the booking being mutated, if any
///
/// # Errors
///
/// Returns `DomainError::RoomOverlap` naming the conflicting booking.
pub fn validate_room_available(
    room: &RoomRef,
    stay: &StayInterval,
    bookings: &[Booking],
    exclude: Option<&BookingReference>,
) -> Result<(), DomainError> {
    for booking in bookings {
        if Some(&booking.reference) == exclude {
            continue;
        }
        if booking.blocks_room(room) && booking.stay.overlaps(stay) {
            return Err(DomainError::RoomOverlap {
                room: room.value().to_owned(),
                conflicting_reference: booking.reference.value().to_owned(),
            });
        }
    }
    Ok(())
}

/// Validates that a payment can be recorded against a booking.
///
/// # Arguments
///
/// * `booking` - The booking being paid
/// * `payment` - The payment amount
///
/// # Errors
///
/// Returns `DomainError::InvalidAmount` if the payment is not positive, or
/// `DomainError::Overpayment` if it would push the paid amount past the
/// booking total.
pub fn validate_payment(booking: &Booking, payment: i64) -> Result<(), DomainError> {
    if payment <= 0 {
        return Err(DomainError::InvalidAmount {
            amount: payment,
            reason: String::from("payment must be greater than zero"),
        });
    }
    let paid = booking.paid_amount.value();
    let total = booking.total_amount.value();
    if paid.saturating_add(payment) > total {
        return Err(DomainError::Overpayment {
            reference: booking.reference.value().to_owned(),
            paid,
            payment,
            total,
        });
    }
    Ok(())
}
