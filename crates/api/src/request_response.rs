// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API request and response data transfer objects.

use chrono::{DateTime, NaiveDate, Utc};
use stay_ledger_domain::{Booking, OccupancySummary};

/// API request to create a new booking.
///
/// This DTO is distinct from domain types and represents the API contract.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CreateBookingRequest {
    /// The guest identifier the booking belongs to.
    pub guest_id: String,
    /// Optional room to pre-assign.
    pub room: Option<String>,
    /// The check-in date.
    pub check_in: NaiveDate,
    /// The check-out date (exclusive).
    pub check_out: NaiveDate,
    /// The total charge for the stay, in minor currency units.
    pub total_amount: i64,
    /// The channel the booking arrived through (direct, website, phone,
    /// walk_in, ota).
    pub source: String,
}

/// API request to cancel a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct CancelBookingRequest {
    /// The reason for cancellation. Must not be empty.
    pub reason: String,
}

/// API request to record a payment against a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RecordPaymentRequest {
    /// The payment amount in minor currency units. Must be positive.
    pub amount: i64,
}

/// API request to assign or replace the room on a booking.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssignRoomRequest {
    /// The room identifier to assign.
    pub room: String,
}

/// API request to search bookings.
///
/// All fields are optional; absent fields do not constrain the result.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchBookingsRequest {
    /// Free-text term matched against reference and guest contact fields.
    pub text: Option<String>,
    /// Derived payment status filter (unpaid, partial, paid).
    pub payment_status: Option<String>,
    /// Booking source filter.
    pub source: Option<String>,
    /// Booking status filter.
    pub status: Option<String>,
}

/// A booking as presented at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingInfo {
    /// The booking reference (e.g. BK000042).
    pub reference: String,
    /// The guest identifier.
    pub guest_id: String,
    /// The assigned room, if any.
    pub room: Option<String>,
    /// The check-in date.
    pub check_in: NaiveDate,
    /// The check-out date (exclusive).
    pub check_out: NaiveDate,
    /// The number of nights in the stay.
    pub nights: i64,
    /// The booking status.
    pub status: String,
    /// The derived payment status.
    pub payment_status: String,
    /// The total charge in minor units.
    pub total_amount: i64,
    /// The amount paid so far in minor units.
    pub paid_amount: i64,
    /// The remaining balance in minor units.
    pub outstanding_balance: i64,
    /// The channel the booking arrived through.
    pub source: String,
    /// When the booking was created.
    pub created_at: DateTime<Utc>,
    /// The cancellation reason, when cancelled.
    pub cancellation_reason: Option<String>,
    /// When the booking was cancelled, when cancelled.
    pub cancellation_date: Option<DateTime<Utc>>,
}

impl BookingInfo {
    /// Builds the API view of a booking.
    #[must_use]
    pub fn from_booking(booking: &Booking) -> Self {
        Self {
            reference: booking.reference.value().to_string(),
            guest_id: booking.guest.value().to_string(),
            room: booking.room.as_ref().map(|r| r.value().to_string()),
            check_in: booking.stay.check_in(),
            check_out: booking.stay.check_out(),
            nights: booking.stay.nights(),
            status: String::from(booking.status.as_str()),
            payment_status: String::from(booking.payment_status().as_str()),
            total_amount: booking.total_amount.value(),
            paid_amount: booking.paid_amount.value(),
            outstanding_balance: booking.outstanding_balance().value(),
            source: String::from(booking.source.as_str()),
            created_at: booking.created_at,
            cancellation_reason: booking.cancellation_reason.clone(),
            cancellation_date: booking.cancellation_date,
        }
    }
}

/// API response for a state-changing booking operation.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BookingResponse {
    /// The booking after the operation.
    pub booking: BookingInfo,
    /// A success message.
    pub message: String,
}

/// API response listing bookings in creation order.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ListBookingsResponse {
    /// The bookings, oldest first.
    pub bookings: Vec<BookingInfo>,
    /// The number of bookings returned.
    pub count: usize,
}

/// API response for a booking search.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SearchBookingsResponse {
    /// The matching bookings, oldest first.
    pub bookings: Vec<BookingInfo>,
    /// The number of matches.
    pub count: usize,
}

/// API response for the occupancy summary.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct OccupancyResponse {
    /// The property the summary covers.
    pub property_id: String,
    /// The configured total room count.
    pub total_rooms: u32,
    /// The aggregated summary.
    #[serde(flatten)]
    pub summary: OccupancySummary,
}
