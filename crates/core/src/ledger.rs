// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use stay_ledger_audit::{AuditEvent, StateSnapshot};
use stay_ledger_domain::{
    Booking, BookingReference, PropertyId, ReferencePrefix, RoomRef, StayInterval,
};

/// The authoritative in-memory booking collection for one property.
///
/// A ledger is an immutable snapshot: mutations go through
/// [`apply`](crate::apply), which produces a new ledger and leaves the input
/// untouched. Bookings are kept in insertion order; that order is the stable
/// result order of every read. One ledger instance is owned per property and
/// injected where needed, never a process-wide singleton.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ledger {
    /// The property this ledger is scoped to.
    pub property_id: PropertyId,
    /// All bookings, in insertion order.
    pub bookings: Vec<Booking>,
    /// The prefix used when generating booking references.
    reference_prefix: ReferencePrefix,
    /// The sequence number the next created booking will receive.
    next_sequence: u64,
}

impl Ledger {
    /// Creates a new empty ledger for a property.
    ///
    /// # Arguments
    ///
    /// * `property_id` - The property this ledger is scoped to
    /// * `reference_prefix` - The prefix for generated booking references
    #[must_use]
    pub const fn new(property_id: PropertyId, reference_prefix: ReferencePrefix) -> Self {
        Self {
            property_id,
            bookings: Vec::new(),
            reference_prefix,
            next_sequence: 1,
        }
    }

    /// Rebuilds a ledger from a persisted booking set.
    ///
    /// The sequence counter resumes above the highest sequence found among
    /// the loaded references, so newly generated references stay unique
    /// without a separately stored counter.
    ///
    /// # Arguments
    ///
    /// * `property_id` - The property this ledger is scoped to
    /// * `reference_prefix` - The prefix for generated booking references
    /// * `bookings` - The loaded bookings, in their original insertion order
    #[must_use]
    pub fn from_bookings(
        property_id: PropertyId,
        reference_prefix: ReferencePrefix,
        bookings: Vec<Booking>,
    ) -> Self {
        let next_sequence = bookings
            .iter()
            .map(|b| b.reference.sequence())
            .max()
            .unwrap_or(0)
            + 1;
        Self {
            property_id,
            bookings,
            reference_prefix,
            next_sequence,
        }
    }

    /// Looks up a booking by reference.
    #[must_use]
    pub fn get(&self, reference: &BookingReference) -> Option<&Booking> {
        self.bookings.iter().find(|b| &b.reference == reference)
    }

    /// Looks up a booking by its canonical persisted identifier.
    #[must_use]
    pub fn get_by_id(&self, booking_id: i64) -> Option<&Booking> {
        self.bookings
            .iter()
            .find(|b| b.booking_id == Some(booking_id))
    }

    /// Returns all bookings in insertion order.
    #[must_use]
    pub fn list(&self) -> &[Booking] {
        &self.bookings
    }

    /// Returns the bookings blocking a room for an overlapping stay.
    ///
    /// Only confirmed and checked-in bookings block a room. The booking
    /// named by `exclude` is skipped so a mutation does not collide with its
    /// own prior state.
    #[must_use]
    pub fn bookings_overlapping(
        &self,
        room: &RoomRef,
        stay: &StayInterval,
        exclude: Option<&BookingReference>,
    ) -> Vec<&Booking> {
        self.bookings
            .iter()
            .filter(|b| Some(&b.reference) != exclude)
            .filter(|b| b.blocks_room(room) && b.stay.overlaps(stay))
            .collect()
    }

    /// Returns the reference the next created booking will receive.
    #[must_use]
    pub fn next_reference(&self) -> BookingReference {
        BookingReference::generate(&self.reference_prefix, self.next_sequence)
    }

    /// Converts the ledger to a snapshot for audit purposes.
    #[must_use]
    pub fn to_snapshot(&self) -> StateSnapshot {
        let occupied = self
            .bookings
            .iter()
            .filter(|b| b.status.occupies_room())
            .count();
        StateSnapshot::new(format!(
            "property={},bookings_count={},occupying_count={}",
            self.property_id,
            self.bookings.len(),
            occupied
        ))
    }

    /// Appends a freshly created booking and advances the sequence counter.
    pub(crate) fn push_booking(&mut self, booking: Booking) {
        self.bookings.push(booking);
        self.next_sequence += 1;
    }

    /// Replaces the booking with the same reference as `updated`.
    ///
    /// The caller has already looked the booking up, so the reference is
    /// known to exist.
    pub(crate) fn replace_booking(&mut self, updated: Booking) {
        if let Some(slot) = self
            .bookings
            .iter_mut()
            .find(|b| b.reference == updated.reference)
        {
            *slot = updated;
        }
    }
}

/// The result of a successful ledger transition.
///
/// Transitions are atomic: they either succeed completely or fail without
/// side effects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionResult {
    /// The new ledger after the transition.
    pub new_ledger: Ledger,
    /// The booking the transition created or changed, in its new state.
    pub booking: Booking,
    /// The audit event recording this transition.
    pub audit_event: AuditEvent,
}
