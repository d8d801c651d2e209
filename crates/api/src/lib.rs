// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! API boundary for the stay ledger.
//!
//! This crate sits between transports and the core: it authenticates and
//! authorizes actors, translates requests into commands, and translates
//! domain and core errors into the API error contract. It never mutates
//! the ledger itself; state-changing handlers return the replacement
//! ledger alongside the response and audit event.

#![deny(
    clippy::pedantic,
    clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

pub mod auth;
pub mod error;
pub mod handlers;
pub mod request_response;

#[cfg(test)]
mod tests;

pub use auth::{AuthenticatedActor, AuthorizationService, Role, authenticate_stub};
pub use error::{ApiError, AuthError, translate_core_error, translate_domain_error};
pub use handlers::{
    ApiResult, assign_room, cancel_booking, check_in, check_out, confirm_booking, create_booking,
    list_bookings, occupancy, record_payment, search_bookings,
};
pub use request_response::{
    AssignRoomRequest, BookingInfo, BookingResponse, CancelBookingRequest, CreateBookingRequest,
    ListBookingsResponse, OccupancyResponse, RecordPaymentRequest, SearchBookingsRequest,
    SearchBookingsResponse,
};
