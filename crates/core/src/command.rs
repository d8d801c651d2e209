// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stay_ledger_domain::{
    Amount, BookingReference, BookingSource, GuestRef, RoomRef, StayInterval,
};

/// A command represents user or system intent as data only.
///
/// Commands are the only way to request ledger changes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Create a new pending booking.
    CreateBooking {
        /// The guest this booking belongs to.
        guest: GuestRef,
        /// The pre-assigned room, if any.
        room: Option<RoomRef>,
        /// The validated stay interval.
        stay: StayInterval,
        /// The total charge for the stay.
        total_amount: Amount,
        /// The channel this booking arrived through.
        source: BookingSource,
    },
    /// Confirm a pending booking. Re-checks room availability.
    ConfirmBooking {
        /// The booking reference.
        reference: BookingReference,
    },
    /// Cancel a non-terminal booking, recording why.
    CancelBooking {
        /// The booking reference.
        reference: BookingReference,
        /// The cancellation reason. Must not be empty.
        reason: String,
    },
    /// Check a confirmed booking in.
    CheckIn {
        /// The booking reference.
        reference: BookingReference,
    },
    /// Check a checked-in booking out.
    CheckOut {
        /// The booking reference.
        reference: BookingReference,
    },
    /// Record a payment against a booking.
    RecordPayment {
        /// The booking reference.
        reference: BookingReference,
        /// The payment amount in minor units. Must be positive and must not
        /// push the paid amount past the booking total.
        amount: i64,
    },
    /// Assign or replace the room on a booking.
    AssignRoom {
        /// The booking reference.
        reference: BookingReference,
        /// The room to assign.
        room: RoomRef,
    },
}

impl Command {
    /// Returns the action name recorded in the audit event for this command.
    #[must_use]
    pub const fn action_name(&self) -> &'static str {
        match self {
            Self::CreateBooking { .. } => "CreateBooking",
            Self::ConfirmBooking { .. } => "ConfirmBooking",
            Self::CancelBooking { .. } => "CancelBooking",
            Self::CheckIn { .. } => "CheckIn",
            Self::CheckOut { .. } => "CheckOut",
            Self::RecordPayment { .. } => "RecordPayment",
            Self::AssignRoom { .. } => "AssignRoom",
        }
    }
}
