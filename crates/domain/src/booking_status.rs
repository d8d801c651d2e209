// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Booking status tracking and transition logic.
//!
//! This module defines booking lifecycle states and valid transitions.
//! Transitions are one-way; cancelled and checked-out bookings are never
//! resurrected.

use crate::error::DomainError;
use crate::types::Amount;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Booking lifecycle states.
///
/// Status is tracked per booking and only changes through explicit commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStatus {
    /// Created but not yet confirmed; holds no room inventory.
    Pending,
    /// Confirmed; counts toward occupancy and blocks its room.
    Confirmed,
    /// Guest is on the property.
    CheckedIn,
    /// Stay completed.
    CheckedOut,
    /// Booking was cancelled before completion.
    Cancelled,
}

impl BookingStatus {
    /// Returns the string representation of the status.
    ///
    /// This is used for persistence and API serialization.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::CheckedIn => "checked_in",
            Self::CheckedOut => "checked_out",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a status from its string representation.
    fn parse_str(s: &str) -> Result<Self, DomainError> {
        match s {
            "pending" => Ok(Self::Pending),
            "confirmed" => Ok(Self::Confirmed),
            "checked_in" => Ok(Self::CheckedIn),
            "checked_out" => Ok(Self::CheckedOut),
            "cancelled" => Ok(Self::Cancelled),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }

    /// Returns true if this status is terminal (no further transitions).
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::CheckedOut | Self::Cancelled)
    }

    /// Returns true if this booking holds its room and counts toward
    /// occupancy.
    #[must_use]
    pub const fn occupies_room(&self) -> bool {
        matches!(self, Self::Confirmed | Self::CheckedIn)
    }

    /// Validates if a transition from this status to another is permitted.
    ///
    /// The full transition table:
    ///
    /// - Pending → Confirmed | Cancelled
    /// - Confirmed → `CheckedIn` | Cancelled
    /// - `CheckedIn` → `CheckedOut`
    /// - `CheckedOut`, Cancelled → (terminal)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidStatusTransition` if the transition is
    /// not in the table.
    pub fn validate_transition(&self, new_status: Self) -> Result<(), DomainError> {
        if self.is_terminal() {
            return Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "cannot transition from terminal state".to_string(),
            });
        }

        let valid = match self {
            Self::Pending => matches!(new_status, Self::Confirmed | Self::Cancelled),
            Self::Confirmed => matches!(new_status, Self::CheckedIn | Self::Cancelled),
            Self::CheckedIn => matches!(new_status, Self::CheckedOut),
            Self::CheckedOut | Self::Cancelled => false,
        };

        if valid {
            Ok(())
        } else {
            Err(DomainError::InvalidStatusTransition {
                from: self.as_str().to_string(),
                to: new_status.as_str().to_string(),
                reason: "transition not permitted by booking lifecycle rules".to_string(),
            })
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_str(s)
    }
}

/// Derived payment state of a booking.
///
/// Payment status is never stored; it is recomputed from the paid and total
/// amounts on every read so it cannot drift from them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    /// Nothing has been paid.
    Unpaid,
    /// Some, but not all, of the total has been paid.
    Partial,
    /// The total has been paid in full.
    Paid,
}

impl PaymentStatus {
    /// Derives the payment status from amounts.
    ///
    /// Rules are checked in order: unpaid when nothing is paid, paid when
    /// the total is covered, partial otherwise. A zero-total booking with
    /// nothing paid reads as unpaid.
    #[must_use]
    pub const fn derive(paid: Amount, total: Amount) -> Self {
        if paid.is_zero() {
            Self::Unpaid
        } else if paid.value() >= total.value() {
            Self::Paid
        } else {
            Self::Partial
        }
    }

    /// Returns the string representation of this payment status.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Unpaid => "unpaid",
            Self::Partial => "partial",
            Self::Paid => "paid",
        }
    }
}

impl std::fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaymentStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "unpaid" => Ok(Self::Unpaid),
            "partial" => Ok(Self::Partial),
            "paid" => Ok(Self::Paid),
            _ => Err(DomainError::InvalidStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_status_string_round_trip() {
        let statuses = vec![
            BookingStatus::Pending,
            BookingStatus::Confirmed,
            BookingStatus::CheckedIn,
            BookingStatus::CheckedOut,
            BookingStatus::Cancelled,
        ];

        for status in statuses {
            let s = status.as_str();
            match BookingStatus::parse_str(s) {
                Ok(parsed) => assert_eq!(status, parsed),
                Err(e) => panic!("Failed to parse status string: {s}: {e}"),
            }
        }
    }

    #[test]
    fn test_invalid_status_string() {
        let result = BookingStatus::parse_str("no_show");
        assert!(result.is_err());
    }

    #[test]
    fn test_terminal_states() {
        assert!(!BookingStatus::Pending.is_terminal());
        assert!(!BookingStatus::Confirmed.is_terminal());
        assert!(!BookingStatus::CheckedIn.is_terminal());
        assert!(BookingStatus::CheckedOut.is_terminal());
        assert!(BookingStatus::Cancelled.is_terminal());
    }

    #[test]
    fn test_occupying_states() {
        assert!(!BookingStatus::Pending.occupies_room());
        assert!(BookingStatus::Confirmed.occupies_room());
        assert!(BookingStatus::CheckedIn.occupies_room());
        assert!(!BookingStatus::CheckedOut.occupies_room());
        assert!(!BookingStatus::Cancelled.occupies_room());
    }

    #[test]
    fn test_valid_transitions_from_pending() {
        let current = BookingStatus::Pending;

        assert!(
            current
                .validate_transition(BookingStatus::Confirmed)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
    }

    #[test]
    fn test_pending_cannot_skip_to_checked_in() {
        let current = BookingStatus::Pending;

        assert!(
            current
                .validate_transition(BookingStatus::CheckedIn)
                .is_err()
        );
        assert!(
            current
                .validate_transition(BookingStatus::CheckedOut)
                .is_err()
        );
    }

    #[test]
    fn test_valid_transitions_from_confirmed() {
        let current = BookingStatus::Confirmed;

        assert!(
            current
                .validate_transition(BookingStatus::CheckedIn)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(BookingStatus::Cancelled)
                .is_ok()
        );
        assert!(current.validate_transition(BookingStatus::Pending).is_err());
        assert!(
            current
                .validate_transition(BookingStatus::CheckedOut)
                .is_err()
        );
    }

    #[test]
    fn test_checked_in_can_only_check_out() {
        let current = BookingStatus::CheckedIn;

        assert!(
            current
                .validate_transition(BookingStatus::CheckedOut)
                .is_ok()
        );
        assert!(
            current
                .validate_transition(BookingStatus::Cancelled)
                .is_err()
        );
        assert!(current.validate_transition(BookingStatus::Pending).is_err());
    }

    #[test]
    fn test_no_transitions_from_terminal_states() {
        let terminal_states = vec![BookingStatus::CheckedOut, BookingStatus::Cancelled];

        for terminal in terminal_states {
            assert!(terminal.validate_transition(BookingStatus::Pending).is_err());
            assert!(
                terminal
                    .validate_transition(BookingStatus::Confirmed)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(BookingStatus::CheckedIn)
                    .is_err()
            );
            assert!(
                terminal
                    .validate_transition(BookingStatus::Cancelled)
                    .is_err()
            );
        }
    }

    #[test]
    fn test_payment_status_unpaid_when_nothing_paid() {
        let status = PaymentStatus::derive(Amount::ZERO, Amount::new(180_000).unwrap());
        assert_eq!(status, PaymentStatus::Unpaid);
    }

    #[test]
    fn test_payment_status_partial() {
        let status = PaymentStatus::derive(
            Amount::new(90_000).unwrap(),
            Amount::new(180_000).unwrap(),
        );
        assert_eq!(status, PaymentStatus::Partial);
    }

    #[test]
    fn test_payment_status_paid_in_full() {
        let status = PaymentStatus::derive(
            Amount::new(120_000).unwrap(),
            Amount::new(120_000).unwrap(),
        );
        assert_eq!(status, PaymentStatus::Paid);
    }

    #[test]
    fn test_payment_status_zero_total_is_unpaid() {
        // The unpaid rule is checked first, so a 0/0 booking is unpaid.
        let status = PaymentStatus::derive(Amount::ZERO, Amount::ZERO);
        assert_eq!(status, PaymentStatus::Unpaid);
    }
}
