// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all,
    clippy::suspicious,
    clippy::complexity,
    clippy::perf,
    clippy::unwrap_used,
    clippy::expect_used
)]

mod booking;
mod booking_status;
mod error;
mod occupancy;
mod stay;
mod types;
mod validation;

#[cfg(test)]
mod tests;

// Re-export public types
pub use booking::Booking;
pub use booking_status::{BookingStatus, PaymentStatus};
pub use error::DomainError;
pub use occupancy::{
    OccupancySummary, PaymentCounts, SourceCounts, StatusCounts, compute_occupancy,
};
pub use stay::StayInterval;
pub use types::{
    Amount, BookingReference, BookingSource, GuestRef, PropertyId, ReferencePrefix, RoomRef,
};
pub use validation::{validate_payment, validate_reference_unique, validate_room_available};
