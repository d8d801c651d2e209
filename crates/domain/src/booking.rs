// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::booking_status::{BookingStatus, PaymentStatus};
use crate::stay::StayInterval;
use crate::types::{Amount, BookingReference, BookingSource, GuestRef, RoomRef};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A booking within a property's ledger.
///
/// `booking_id` is the canonical internal identifier assigned by the
/// persistence collaborator; the reference is the human-facing identity and
/// is unique per ledger. Both are immutable for the life of the booking.
/// Payment status is derived from the amounts, never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Booking {
    /// Canonical internal identifier (opaque, stable, immutable).
    /// Optional to support creation before persistence.
    pub booking_id: Option<i64>,
    /// The unique booking reference (e.g., `BK001234`).
    pub reference: BookingReference,
    /// Weak reference to the guest this booking belongs to.
    pub guest: GuestRef,
    /// The assigned room, if any. Remains unset until room assignment.
    pub room: Option<RoomRef>,
    /// The check-in/check-out date range.
    pub stay: StayInterval,
    /// Current lifecycle status.
    pub status: BookingStatus,
    /// The total charge for the stay, in minor units.
    pub total_amount: Amount,
    /// The amount paid so far. Only ever increases.
    pub paid_amount: Amount,
    /// The channel this booking arrived through.
    pub source: BookingSource,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// Why the booking was cancelled, if it was.
    pub cancellation_reason: Option<String>,
    /// When the booking was cancelled, if it was.
    pub cancellation_date: Option<DateTime<Utc>>,
}

impl Booking {
    /// Creates a new pending `Booking` without a persisted `booking_id`.
    ///
    /// The `booking_id` will be assigned by the persistence collaborator on
    /// first save. Paid amount starts at zero.
    ///
    /// # Arguments
    ///
    /// * `reference` - The ledger-assigned booking reference
    /// * `guest` - The guest this booking belongs to
    /// * `room` - The pre-assigned room, if any
    /// * `stay` - The validated stay interval
    /// * `total_amount` - The total charge for the stay
    /// * `source` - The channel this booking arrived through
    /// * `created_at` - The creation timestamp
    #[must_use]
    pub const fn new(
        reference: BookingReference,
        guest: GuestRef,
        room: Option<RoomRef>,
        stay: StayInterval,
        total_amount: Amount,
        source: BookingSource,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            booking_id: None,
            reference,
            guest,
            room,
            stay,
            status: BookingStatus::Pending,
            total_amount,
            paid_amount: Amount::ZERO,
            source,
            created_at,
            cancellation_reason: None,
            cancellation_date: None,
        }
    }

    /// Returns the derived payment status.
    ///
    /// Recomputed from the amounts on every call so it cannot drift.
    #[must_use]
    pub const fn payment_status(&self) -> PaymentStatus {
        PaymentStatus::derive(self.paid_amount, self.total_amount)
    }

    /// Returns the unpaid remainder of the total.
    #[must_use]
    pub const fn outstanding_balance(&self) -> Amount {
        self.total_amount.saturating_sub(self.paid_amount)
    }

    /// Returns true if this booking blocks the given room for its stay.
    ///
    /// Only confirmed and checked-in bookings hold room inventory.
    #[must_use]
    pub fn blocks_room(&self, room: &RoomRef) -> bool {
        self.status.occupies_room() && self.room.as_ref() == Some(room)
    }
}
