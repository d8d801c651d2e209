// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::command::Command;
use crate::error::CoreError;
use crate::ledger::{Ledger, TransitionResult};
use chrono::Utc;
use stay_ledger_audit::{Action, Actor, AuditEvent, Cause, StateSnapshot};
use stay_ledger_domain::{
    Amount, Booking, BookingReference, BookingStatus, DomainError, validate_payment,
    validate_reference_unique, validate_room_available,
};

/// Applies a command to a ledger, producing a new ledger and audit event.
///
/// The input ledger is never modified: every arm validates first, then
/// builds the successor ledger from a copy. A failed command therefore
/// leaves no partial write behind.
///
/// # Arguments
///
/// * `ledger` - The current ledger snapshot (immutable)
/// * `command` - The command to apply
/// * `actor` - The actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Returns
///
/// * `Ok(TransitionResult)` containing the new ledger, the affected booking,
///   and the audit event
/// * `Err(CoreError)` if the command is invalid
///
/// # Errors
///
/// Returns an error if the command violates domain rules: unknown
/// reference, illegal status transition, room overlap, or payment
/// validation failure.
#[allow(clippy::too_many_lines)]
pub fn apply(
    ledger: &Ledger,
    command: Command,
    actor: Actor,
    cause: Cause,
) -> Result<TransitionResult, CoreError> {
    match command {
        Command::CreateBooking {
            guest,
            room,
            stay,
            total_amount,
            source,
        } => {
            // A pre-assigned room must be free for the requested stay.
            if let Some(ref room_ref) = room {
                validate_room_available(room_ref, &stay, &ledger.bookings, None)?;
            }

            let reference: BookingReference = ledger.next_reference();
            validate_reference_unique(&reference, &ledger.bookings)?;

            let booking: Booking = Booking::new(
                reference,
                guest,
                room,
                stay,
                total_amount,
                source,
                Utc::now(),
            );

            let before: StateSnapshot = ledger.to_snapshot();
            let mut new_ledger: Ledger = ledger.clone();
            new_ledger.push_booking(booking.clone());
            let after: StateSnapshot = new_ledger.to_snapshot();

            let action: Action = Action::new(
                String::from("CreateBooking"),
                Some(format!(
                    "Created booking '{}' for guest '{}' ({} nights, total {})",
                    booking.reference,
                    booking.guest.value(),
                    booking.stay.nights(),
                    booking.total_amount
                )),
            );
            let audit_event: AuditEvent = AuditEvent::new(
                actor,
                cause,
                action,
                before,
                after,
                ledger.property_id.clone(),
                booking.reference.clone(),
            );

            Ok(TransitionResult {
                new_ledger,
                booking,
                audit_event,
            })
        }
        Command::ConfirmBooking { reference } => {
            let booking: &Booking = lookup(ledger, &reference)?;
            booking
                .status
                .validate_transition(BookingStatus::Confirmed)
                .map_err(CoreError::DomainViolation)?;

            // The room may have been assigned after creation, so overlap is
            // re-checked at confirmation time.
            if let Some(ref room) = booking.room {
                validate_room_available(room, &booking.stay, &ledger.bookings, Some(&reference))?;
            }

            let mut updated: Booking = booking.clone();
            updated.status = BookingStatus::Confirmed;

            let details: String = format!("Confirmed booking '{reference}'");
            Ok(transition(ledger, updated, actor, cause, "ConfirmBooking", details))
        }
        Command::CancelBooking { reference, reason } => {
            let trimmed: &str = reason.trim();
            if trimmed.is_empty() {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidCancellationReason(String::from(
                        "cancellation reason cannot be empty",
                    )),
                ));
            }

            let booking: &Booking = lookup(ledger, &reference)?;
            booking
                .status
                .validate_transition(BookingStatus::Cancelled)
                .map_err(CoreError::DomainViolation)?;

            let mut updated: Booking = booking.clone();
            updated.status = BookingStatus::Cancelled;
            updated.cancellation_reason = Some(trimmed.to_owned());
            updated.cancellation_date = Some(Utc::now());

            let details: String = format!("Cancelled booking '{reference}': {trimmed}");
            Ok(transition(ledger, updated, actor, cause, "CancelBooking", details))
        }
        Command::CheckIn { reference } => {
            let booking: &Booking = lookup(ledger, &reference)?;
            booking
                .status
                .validate_transition(BookingStatus::CheckedIn)
                .map_err(CoreError::DomainViolation)?;

            let mut updated: Booking = booking.clone();
            updated.status = BookingStatus::CheckedIn;

            let details: String = format!("Checked in booking '{reference}'");
            Ok(transition(ledger, updated, actor, cause, "CheckIn", details))
        }
        Command::CheckOut { reference } => {
            let booking: &Booking = lookup(ledger, &reference)?;
            booking
                .status
                .validate_transition(BookingStatus::CheckedOut)
                .map_err(CoreError::DomainViolation)?;

            let mut updated: Booking = booking.clone();
            updated.status = BookingStatus::CheckedOut;

            let details: String = format!("Checked out booking '{reference}'");
            Ok(transition(ledger, updated, actor, cause, "CheckOut", details))
        }
        Command::RecordPayment { reference, amount } => {
            let booking: &Booking = lookup(ledger, &reference)?;

            // Refunds are not modeled; money is never recorded against a
            // cancelled booking.
            if booking.status == BookingStatus::Cancelled {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: booking.status.as_str().to_string(),
                        to: booking.status.as_str().to_string(),
                        reason: String::from("cannot record a payment on a cancelled booking"),
                    },
                ));
            }

            validate_payment(booking, amount)?;

            // validate_payment guarantees paid + amount <= total, so the
            // new paid amount is non-negative and in range.
            let new_paid: Amount = Amount::new(booking.paid_amount.value() + amount)?;

            let mut updated: Booking = booking.clone();
            updated.paid_amount = new_paid;

            let details: String = format!(
                "Recorded payment of {amount} against '{reference}' (paid {} of {}, now {})",
                updated.paid_amount,
                updated.total_amount,
                updated.payment_status()
            );
            Ok(transition(ledger, updated, actor, cause, "RecordPayment", details))
        }
        Command::AssignRoom { reference, room } => {
            let booking: &Booking = lookup(ledger, &reference)?;

            if booking.status.is_terminal() {
                return Err(CoreError::DomainViolation(
                    DomainError::InvalidStatusTransition {
                        from: booking.status.as_str().to_string(),
                        to: booking.status.as_str().to_string(),
                        reason: String::from("cannot assign a room on a terminal booking"),
                    },
                ));
            }

            // A booking already holding inventory must not collide in its
            // new room; pending bookings are checked at confirmation.
            if booking.status.occupies_room() {
                validate_room_available(&room, &booking.stay, &ledger.bookings, Some(&reference))?;
            }

            let mut updated: Booking = booking.clone();
            updated.room = Some(room.clone());

            let details: String = format!("Assigned room '{room}' to booking '{reference}'");
            Ok(transition(ledger, updated, actor, cause, "AssignRoom", details))
        }
    }
}

/// Looks up a booking or fails with `BookingNotFound`.
fn lookup<'a>(ledger: &'a Ledger, reference: &BookingReference) -> Result<&'a Booking, CoreError> {
    ledger.get(reference).ok_or_else(|| {
        CoreError::DomainViolation(DomainError::BookingNotFound {
            reference: reference.value().to_owned(),
        })
    })
}

/// Builds the successor ledger and audit event for an updated booking.
fn transition(
    ledger: &Ledger,
    updated: Booking,
    actor: Actor,
    cause: Cause,
    action_name: &str,
    details: String,
) -> TransitionResult {
    let before: StateSnapshot = ledger.to_snapshot();
    let mut new_ledger: Ledger = ledger.clone();
    new_ledger.replace_booking(updated.clone());
    let after: StateSnapshot = new_ledger.to_snapshot();

    let action: Action = Action::new(action_name.to_owned(), Some(details));
    let audit_event: AuditEvent = AuditEvent::new(
        actor,
        cause,
        action,
        before,
        after,
        ledger.property_id.clone(),
        updated.reference.clone(),
    );

    TransitionResult {
        new_ledger,
        booking: updated,
        audit_event,
    }
}
