// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{Command, CoreError, Ledger, TransitionResult, apply};
use chrono::NaiveDate;
use stay_ledger_audit::{Actor, Cause};
use stay_ledger_domain::{
    Amount, BookingSource, GuestRef, PropertyId, ReferencePrefix, RoomRef, StayInterval,
};

pub fn create_test_actor() -> Actor {
    Actor::new(String::from("admin-123"), String::from("admin"))
}

pub fn create_test_cause() -> Cause {
    Cause::new(String::from("req-456"), String::from("Admin request"))
}

pub fn create_test_ledger() -> Ledger {
    Ledger::new(
        PropertyId::new("harborview"),
        ReferencePrefix::new("BK").unwrap(),
    )
}

pub fn stay(from_day: u32, to_day: u32) -> StayInterval {
    StayInterval::new(
        NaiveDate::from_ymd_opt(2026, 3, from_day).unwrap(),
        NaiveDate::from_ymd_opt(2026, 3, to_day).unwrap(),
    )
    .unwrap()
}

pub fn create_command(guest: &str, room: Option<&str>, from_day: u32, to_day: u32) -> Command {
    Command::CreateBooking {
        guest: GuestRef::new(guest).unwrap(),
        room: room.map(|r| RoomRef::new(r).unwrap()),
        stay: stay(from_day, to_day),
        total_amount: Amount::new(180_000).unwrap(),
        source: BookingSource::Website,
    }
}

/// Applies a command that is expected to succeed, returning the result.
pub fn apply_ok(ledger: &Ledger, command: Command) -> TransitionResult {
    apply(ledger, command, create_test_actor(), create_test_cause())
        .unwrap_or_else(|e| panic!("expected command to succeed, got {e}"))
}

/// Applies a command that is expected to fail, returning the error.
pub fn apply_err(ledger: &Ledger, command: Command) -> CoreError {
    match apply(ledger, command, create_test_actor(), create_test_cause()) {
        Ok(_) => panic!("expected command to fail"),
        Err(e) => e,
    }
}
