// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;

/// Errors that can occur during domain validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Check-out date is not strictly after check-in date.
    InvalidStayInterval {
        /// The check-in date.
        check_in: NaiveDate,
        /// The check-out date.
        check_out: NaiveDate,
    },
    /// A monetary amount is negative or otherwise malformed.
    InvalidAmount {
        /// The invalid amount in minor units.
        amount: i64,
        /// Description of the constraint that was violated.
        reason: String,
    },
    /// A payment would push the paid amount past the booking total.
    Overpayment {
        /// The booking reference.
        reference: String,
        /// The amount already paid, in minor units.
        paid: i64,
        /// The payment being recorded, in minor units.
        payment: i64,
        /// The booking total, in minor units.
        total: i64,
    },
    /// No booking with the given reference exists in the ledger.
    BookingNotFound {
        /// The unknown booking reference.
        reference: String,
    },
    /// The requested status change is not permitted by the lifecycle table.
    InvalidStatusTransition {
        /// The current status.
        from: String,
        /// The requested status.
        to: String,
        /// Why the transition is not permitted.
        reason: String,
    },
    /// A room already has a confirmed or checked-in booking overlapping the stay.
    RoomOverlap {
        /// The room identifier.
        room: String,
        /// The reference of the conflicting booking.
        conflicting_reference: String,
    },
    /// The configured total room count is invalid for occupancy calculation.
    InvalidRoomCount {
        /// The invalid count value.
        count: u32,
    },
    /// A booking reference already exists in the ledger.
    DuplicateReference {
        /// The duplicate reference.
        reference: String,
    },
    /// A booking reference string is malformed.
    InvalidReference(String),
    /// A reference prefix is not exactly two ASCII uppercase letters.
    InvalidReferencePrefix(String),
    /// A booking source string is not a recognized channel.
    InvalidSource(String),
    /// A booking status string is not a recognized status.
    InvalidStatus(String),
    /// A guest identifier is empty or invalid.
    InvalidGuest(String),
    /// A room identifier is empty or invalid.
    InvalidRoom(String),
    /// A required cancellation reason is empty.
    InvalidCancellationReason(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStayInterval {
                check_in,
                check_out,
            } => {
                write!(
                    f,
                    "Invalid stay interval: check-out {check_out} must be after check-in {check_in}"
                )
            }
            Self::InvalidAmount { amount, reason } => {
                write!(f, "Invalid amount {amount}: {reason}")
            }
            Self::Overpayment {
                reference,
                paid,
                payment,
                total,
            } => {
                write!(
                    f,
                    "Overpayment on booking '{reference}': {paid} paid + {payment} payment exceeds total {total}"
                )
            }
            Self::BookingNotFound { reference } => {
                write!(f, "Booking '{reference}' not found")
            }
            Self::InvalidStatusTransition { from, to, reason } => {
                write!(f, "Cannot transition booking from '{from}' to '{to}': {reason}")
            }
            Self::RoomOverlap {
                room,
                conflicting_reference,
            } => {
                write!(
                    f,
                    "Room '{room}' is already booked for an overlapping stay by '{conflicting_reference}'"
                )
            }
            Self::InvalidRoomCount { count } => {
                write!(
                    f,
                    "Invalid total room count: {count}. Must be greater than 0"
                )
            }
            Self::DuplicateReference { reference } => {
                write!(f, "Booking reference '{reference}' already exists")
            }
            Self::InvalidReference(msg) => write!(f, "Invalid booking reference: {msg}"),
            Self::InvalidReferencePrefix(msg) => {
                write!(f, "Invalid reference prefix: {msg}")
            }
            Self::InvalidSource(msg) => write!(f, "Invalid booking source: {msg}"),
            Self::InvalidStatus(msg) => write!(f, "Invalid booking status: {msg}"),
            Self::InvalidGuest(msg) => write!(f, "Invalid guest: {msg}"),
            Self::InvalidRoom(msg) => write!(f, "Invalid room: {msg}"),
            Self::InvalidCancellationReason(msg) => {
                write!(f, "Invalid cancellation reason: {msg}")
            }
        }
    }
}

impl std::error::Error for DomainError {}
