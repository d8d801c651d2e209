// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The persistence collaborator seam.
//!
//! The core never performs I/O itself; a store implementation is supplied
//! by the hosting process. Delivery is at-least-once: `save_booking` may be
//! retried by the caller after a failure, and implementations must tolerate
//! saving the same booking state more than once. The core itself never
//! retries.

use stay_ledger_domain::{Booking, PropertyId};
use std::collections::HashMap;

/// Errors reported by a booking store.
///
/// Store failures are retryable by the caller; the core treats them as
/// opaque and performs no retries of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// The backing store could not be reached.
    Unavailable {
        /// Description of the failure.
        reason: String,
    },
    /// The backing store returned data the ledger cannot use.
    Corrupted {
        /// Description of the failure.
        reason: String,
    },
}

impl std::fmt::Display for StoreError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable { reason } => write!(f, "Store unavailable: {reason}"),
            Self::Corrupted { reason } => write!(f, "Store corrupted: {reason}"),
        }
    }
}

impl std::error::Error for StoreError {}

/// The persistence contract for booking ledgers.
pub trait BookingStore {
    /// Loads all bookings for a property, in their original insertion order.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` the caller may retry.
    fn load_bookings(&self, property: &PropertyId) -> Result<Vec<Booking>, StoreError>;

    /// Saves one booking state, inserting or replacing by reference.
    ///
    /// # Errors
    ///
    /// Returns a `StoreError` the caller may retry.
    fn save_booking(&mut self, property: &PropertyId, booking: &Booking) -> Result<(), StoreError>;
}

/// A booking store backed by an in-process map.
///
/// Used by tests and the server binary when no external store is wired in.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    bookings: HashMap<String, Vec<Booking>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self {
            bookings: HashMap::new(),
        }
    }
}

impl BookingStore for MemoryStore {
    fn load_bookings(&self, property: &PropertyId) -> Result<Vec<Booking>, StoreError> {
        Ok(self
            .bookings
            .get(property.value())
            .cloned()
            .unwrap_or_default())
    }

    fn save_booking(&mut self, property: &PropertyId, booking: &Booking) -> Result<(), StoreError> {
        let entries = self
            .bookings
            .entry(property.value().to_owned())
            .or_default();
        if let Some(slot) = entries.iter_mut().find(|b| b.reference == booking.reference) {
            *slot = booking.clone();
        } else {
            entries.push(booking.clone());
        }
        Ok(())
    }
}
