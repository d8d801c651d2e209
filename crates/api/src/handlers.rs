// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API handler functions for state-changing and read-only operations.

use std::str::FromStr;

use stay_ledger::{
    BookingFilter, Command, GuestDirectory, Ledger, TransitionResult, apply, search,
};
use stay_ledger_audit::{Actor, AuditEvent, Cause};
use stay_ledger_domain::{
    Amount, BookingReference, BookingSource, BookingStatus, GuestRef, PaymentStatus, RoomRef,
    StayInterval, compute_occupancy,
};

use crate::auth::{AuthenticatedActor, AuthorizationService};
use crate::error::{ApiError, translate_core_error, translate_domain_error};
use crate::request_response::{
    AssignRoomRequest, BookingInfo, BookingResponse, CancelBookingRequest, CreateBookingRequest,
    ListBookingsResponse, OccupancyResponse, RecordPaymentRequest, SearchBookingsRequest,
    SearchBookingsResponse,
};

/// The result of a state-changing API operation.
///
/// This ensures that successful API operations always produce both the
/// replacement ledger and an audit trail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResult<T> {
    /// The API response.
    pub response: T,
    /// The ledger after the operation.
    pub new_ledger: Ledger,
    /// The audit event generated by this operation.
    pub audit_event: AuditEvent,
}

fn parse_reference(reference: &str) -> Result<BookingReference, ApiError> {
    BookingReference::parse(reference).map_err(translate_domain_error)
}

fn run_command(
    ledger: &Ledger,
    command: Command,
    actor: &AuthenticatedActor,
    cause: Cause,
    message: String,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let audit_actor: Actor = actor.to_audit_actor();
    let result: TransitionResult =
        apply(ledger, command, audit_actor, cause).map_err(translate_core_error)?;
    let response = BookingResponse {
        booking: BookingInfo::from_booking(&result.booking),
        message,
    };
    Ok(ApiResult {
        response,
        new_ledger: result.new_ledger,
        audit_event: result.audit_event,
    })
}

/// Creates a new pending booking via the API boundary.
///
/// This function:
/// - Translates the API request into domain types
/// - Applies the `CreateBooking` command to the current ledger
/// - Translates any errors to API errors
///
/// # Arguments
///
/// * `ledger` - The current booking ledger
/// * `request` - The create booking request
/// * `actor` - The authenticated actor performing this action
/// * `cause` - The cause or reason for this action
///
/// # Errors
///
/// Returns an error if the request fields fail domain validation or a
/// pre-assigned room has an overlapping occupying booking.
pub fn create_booking(
    ledger: &Ledger,
    request: CreateBookingRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let guest: GuestRef = GuestRef::new(&request.guest_id).map_err(translate_domain_error)?;
    let room: Option<RoomRef> = match request.room.as_deref() {
        Some(value) => Some(RoomRef::new(value).map_err(translate_domain_error)?),
        None => None,
    };
    let stay: StayInterval =
        StayInterval::new(request.check_in, request.check_out).map_err(translate_domain_error)?;
    let total_amount: Amount =
        Amount::new(request.total_amount).map_err(translate_domain_error)?;
    let source: BookingSource =
        BookingSource::from_str(&request.source).map_err(translate_domain_error)?;

    let command = Command::CreateBooking {
        guest,
        room,
        stay,
        total_amount,
        source,
    };
    let result = run_command(ledger, command, actor, cause, String::new())?;
    tracing::info!(
        reference = %result.response.booking.reference,
        "created booking"
    );
    let reference = result.response.booking.reference.clone();
    Ok(ApiResult {
        response: BookingResponse {
            message: format!("Created booking '{reference}'"),
            ..result.response
        },
        new_ledger: result.new_ledger,
        audit_event: result.audit_event,
    })
}

/// Confirms a pending booking.
///
/// Room availability is re-checked at confirmation time, since another
/// booking may have taken the room while this one was pending.
///
/// # Errors
///
/// Returns an error if the reference is malformed or unknown, the booking
/// is not pending, or the assigned room now has an overlapping booking.
pub fn confirm_booking(
    ledger: &Ledger,
    reference: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let reference = parse_reference(reference)?;
    let message = format!("Confirmed booking '{}'", reference.value());
    run_command(
        ledger,
        Command::ConfirmBooking { reference },
        actor,
        cause,
        message,
    )
}

/// Cancels a booking with a recorded reason. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the reference is
/// malformed or unknown, the booking is already terminal, or the reason
/// is empty.
pub fn cancel_booking(
    ledger: &Ledger,
    reference: &str,
    request: CancelBookingRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    AuthorizationService::authorize_cancel_booking(actor)?;
    let reference = parse_reference(reference)?;
    let message = format!("Cancelled booking '{}'", reference.value());
    run_command(
        ledger,
        Command::CancelBooking {
            reference,
            reason: request.reason,
        },
        actor,
        cause,
        message,
    )
}

/// Checks a confirmed booking in.
///
/// # Errors
///
/// Returns an error if the reference is malformed or unknown, or the
/// booking is not confirmed.
pub fn check_in(
    ledger: &Ledger,
    reference: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let reference = parse_reference(reference)?;
    let message = format!("Checked in booking '{}'", reference.value());
    run_command(ledger, Command::CheckIn { reference }, actor, cause, message)
}

/// Checks a checked-in booking out.
///
/// # Errors
///
/// Returns an error if the reference is malformed or unknown, or the
/// booking is not checked in.
pub fn check_out(
    ledger: &Ledger,
    reference: &str,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let reference = parse_reference(reference)?;
    let message = format!("Checked out booking '{}'", reference.value());
    run_command(ledger, Command::CheckOut { reference }, actor, cause, message)
}

/// Records a payment against a booking.
///
/// Payments remain allowed after check-out to settle outstanding balances,
/// but never on cancelled bookings.
///
/// # Errors
///
/// Returns an error if the reference is malformed or unknown, the amount
/// is not positive, the payment would exceed the booking total, or the
/// booking is cancelled.
pub fn record_payment(
    ledger: &Ledger,
    reference: &str,
    request: RecordPaymentRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    let RecordPaymentRequest { amount } = request;
    let reference = parse_reference(reference)?;
    let message = format!(
        "Recorded payment of {amount} on booking '{}'",
        reference.value()
    );
    run_command(
        ledger,
        Command::RecordPayment { reference, amount },
        actor,
        cause,
        message,
    )
}

/// Assigns or replaces the room on a booking. Admin only.
///
/// # Errors
///
/// Returns an error if the actor is not an Admin, the reference is
/// malformed or unknown, the booking is terminal, or the room has an
/// overlapping occupying booking.
pub fn assign_room(
    ledger: &Ledger,
    reference: &str,
    request: AssignRoomRequest,
    actor: &AuthenticatedActor,
    cause: Cause,
) -> Result<ApiResult<BookingResponse>, ApiError> {
    AuthorizationService::authorize_assign_room(actor)?;
    let reference = parse_reference(reference)?;
    let room: RoomRef = RoomRef::new(&request.room).map_err(translate_domain_error)?;
    let message = format!(
        "Assigned room '{}' to booking '{}'",
        room.value(),
        reference.value()
    );
    run_command(
        ledger,
        Command::AssignRoom { reference, room },
        actor,
        cause,
        message,
    )
}

/// Lists all bookings in creation order.
#[must_use]
pub fn list_bookings(ledger: &Ledger) -> ListBookingsResponse {
    let bookings: Vec<BookingInfo> = ledger.list().iter().map(BookingInfo::from_booking).collect();
    let count = bookings.len();
    ListBookingsResponse { bookings, count }
}

/// Searches bookings by free text and categorical filters.
///
/// All filters are conjunctive. Free text matches the booking reference
/// and the guest's directory contact fields, case-insensitively.
///
/// # Errors
///
/// Returns an error if a categorical filter value is not recognized.
pub fn search_bookings(
    ledger: &Ledger,
    directory: &dyn GuestDirectory,
    request: SearchBookingsRequest,
) -> Result<SearchBookingsResponse, ApiError> {
    let payment_status: Option<PaymentStatus> = match request.payment_status.as_deref() {
        Some(value) => Some(PaymentStatus::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };
    let source: Option<BookingSource> = match request.source.as_deref() {
        Some(value) => Some(BookingSource::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };
    let status: Option<BookingStatus> = match request.status.as_deref() {
        Some(value) => Some(BookingStatus::from_str(value).map_err(translate_domain_error)?),
        None => None,
    };

    let filter = BookingFilter {
        text: request.text,
        payment_status,
        source,
        status,
    };
    let bookings: Vec<BookingInfo> = search(ledger, directory, &filter)
        .into_iter()
        .map(BookingInfo::from_booking)
        .collect();
    let count = bookings.len();
    Ok(SearchBookingsResponse { bookings, count })
}

/// Computes the occupancy and revenue summary for the ledger.
///
/// # Errors
///
/// Returns an error if the configured total room count is zero.
pub fn occupancy(ledger: &Ledger, total_rooms: u32) -> Result<OccupancyResponse, ApiError> {
    let summary =
        compute_occupancy(ledger.list(), total_rooms).map_err(translate_domain_error)?;
    Ok(OccupancyResponse {
        property_id: ledger.property_id.value().to_string(),
        total_rooms,
        summary,
    })
}
