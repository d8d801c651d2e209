// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use chrono::NaiveDate;
use stay_ledger::Ledger;
use stay_ledger_audit::Cause;
use stay_ledger_domain::{PropertyId, ReferencePrefix};

use crate::auth::{AuthenticatedActor, Role};
use crate::error::ApiError;
use crate::handlers::{ApiResult, create_booking};
use crate::request_response::{BookingResponse, CreateBookingRequest};

pub fn admin_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("op-admin"), Role::Admin)
}

pub fn front_desk_actor() -> AuthenticatedActor {
    AuthenticatedActor::new(String::from("op-desk"), Role::FrontDesk)
}

pub fn test_cause() -> Cause {
    Cause::new(String::from("req-1"), String::from("Front desk request"))
}

pub fn test_ledger() -> Ledger {
    Ledger::new(
        PropertyId::new("harborview"),
        ReferencePrefix::new("BK").unwrap(),
    )
}

pub fn date(day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 6, day).unwrap()
}

pub fn create_request(guest: &str, room: Option<&str>, from_day: u32, to_day: u32) -> CreateBookingRequest {
    CreateBookingRequest {
        guest_id: String::from(guest),
        room: room.map(String::from),
        check_in: date(from_day),
        check_out: date(to_day),
        total_amount: 150_000,
        source: String::from("website"),
    }
}

/// Creates a booking that is expected to succeed, returning the result.
pub fn create_ok(ledger: &Ledger, request: CreateBookingRequest) -> ApiResult<BookingResponse> {
    create_booking(ledger, request, &front_desk_actor(), test_cause())
        .unwrap_or_else(|e| panic!("expected create to succeed, got {e}"))
}

/// Runs a handler result that is expected to fail, returning the error.
pub fn expect_err<T>(result: Result<T, ApiError>) -> ApiError {
    match result {
        Ok(_) => panic!("expected handler to fail"),
        Err(e) => e,
    }
}
