// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Occupancy and revenue aggregation over a ledger snapshot.
//!
//! All aggregates are recomputed from the full booking set on every call.
//! There is no incremental or cached state; at property scale (tens to low
//! thousands of bookings) a full pass is well under a millisecond. This is a
//! documented scalability limit, not a defect.
//!
//! ## Rules
//!
//! - Occupancy counts confirmed and checked-in bookings against the total
//!   room count, rounded to the nearest whole percent, clamped to [0, 100].
//! - Revenue sums totals over confirmed, checked-in, and checked-out
//!   bookings. Pending and cancelled bookings are excluded.
//! - Outstanding balance sums unpaid remainders over all non-cancelled
//!   bookings.

use crate::booking::Booking;
use crate::booking_status::{BookingStatus, PaymentStatus};
use crate::error::DomainError;
use crate::types::{Amount, BookingSource};
use serde::{Deserialize, Serialize};

/// Booking counts grouped by lifecycle status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub checked_in: usize,
    pub checked_out: usize,
    pub cancelled: usize,
}

/// Booking counts grouped by derived payment status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PaymentCounts {
    pub unpaid: usize,
    pub partial: usize,
    pub paid: usize,
}

/// Booking counts grouped by source channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SourceCounts {
    pub direct: usize,
    pub website: usize,
    pub phone: usize,
    pub walk_in: usize,
    pub ota: usize,
}

/// The rolled-up statistics for a ledger snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancySummary {
    /// Percentage of rooms held by confirmed or checked-in bookings, 0-100.
    pub occupancy_rate: u32,
    /// Revenue over confirmed, checked-in, and checked-out bookings.
    pub total_revenue: Amount,
    /// Unpaid remainder over all non-cancelled bookings.
    pub outstanding_balance: Amount,
    /// Counts by lifecycle status.
    pub by_status: StatusCounts,
    /// Counts by derived payment status.
    pub by_payment_status: PaymentCounts,
    /// Counts by source channel.
    pub by_source: SourceCounts,
}

/// Computes the occupancy summary for a booking snapshot.
///
/// # Arguments
///
/// * `bookings` - The full booking set of one property's ledger
/// * `total_room_count` - The property's room count (static configuration)
///
/// # Errors
///
/// Returns `DomainError::InvalidRoomCount` if `total_room_count` is zero.
pub fn compute_occupancy(
    bookings: &[Booking],
    total_room_count: u32,
) -> Result<OccupancySummary, DomainError> {
    if total_room_count == 0 {
        return Err(DomainError::InvalidRoomCount {
            count: total_room_count,
        });
    }

    let mut by_status = StatusCounts::default();
    let mut by_payment_status = PaymentCounts::default();
    let mut by_source = SourceCounts::default();
    let mut total_revenue = Amount::ZERO;
    let mut outstanding_balance = Amount::ZERO;

    for booking in bookings {
        match booking.status {
            BookingStatus::Pending => by_status.pending += 1,
            BookingStatus::Confirmed => by_status.confirmed += 1,
            BookingStatus::CheckedIn => by_status.checked_in += 1,
            BookingStatus::CheckedOut => by_status.checked_out += 1,
            BookingStatus::Cancelled => by_status.cancelled += 1,
        }

        match booking.payment_status() {
            PaymentStatus::Unpaid => by_payment_status.unpaid += 1,
            PaymentStatus::Partial => by_payment_status.partial += 1,
            PaymentStatus::Paid => by_payment_status.paid += 1,
        }

        match booking.source {
            BookingSource::Direct => by_source.direct += 1,
            BookingSource::Website => by_source.website += 1,
            BookingSource::Phone => by_source.phone += 1,
            BookingSource::WalkIn => by_source.walk_in += 1,
            BookingSource::Ota => by_source.ota += 1,
        }

        if matches!(
            booking.status,
            BookingStatus::Confirmed | BookingStatus::CheckedIn | BookingStatus::CheckedOut
        ) {
            total_revenue = total_revenue.saturating_add(booking.total_amount);
        }

        if booking.status != BookingStatus::Cancelled {
            outstanding_balance = outstanding_balance.saturating_add(booking.outstanding_balance());
        }
    }

    let occupied = u64::try_from(by_status.confirmed + by_status.checked_in).unwrap_or(u64::MAX);
    let occupancy_rate = rounded_percentage(occupied, u64::from(total_room_count));

    Ok(OccupancySummary {
        occupancy_rate,
        total_revenue,
        outstanding_balance,
        by_status,
        by_payment_status,
        by_source,
    })
}

/// Rounds `100 * part / whole` to the nearest whole percent, clamped to 100.
#[allow(clippy::cast_possible_truncation)]
const fn rounded_percentage(part: u64, whole: u64) -> u32 {
    if part >= whole {
        return 100;
    }
    // part < whole here, so the result is below 100 and the arithmetic
    // cannot overflow for any realistic room count.
    ((200 * part + whole) / (2 * whole)) as u32
}
