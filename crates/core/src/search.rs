// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! The read façade combining free-text search and categorical filters.
//!
//! Text matches are case-insensitive substring matches against the guest
//! name, the booking reference, the guest phone, or the guest email (OR
//! across fields). Categorical filters AND with the text and each other.
//! Empty filter values match everything. Results keep the ledger's
//! insertion order.

use crate::ledger::Ledger;
use stay_ledger_domain::{Booking, BookingSource, BookingStatus, GuestRef, PaymentStatus};
use std::collections::HashMap;

/// A contact snapshot for a guest, supplied by the directory collaborator.
///
/// The ledger never owns this data; it is resolved per search call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuestContact {
    /// The guest's display name.
    pub name: String,
    /// The guest's phone number.
    pub phone: String,
    /// The guest's email address.
    pub email: String,
}

impl GuestContact {
    /// Creates a new `GuestContact`.
    ///
    /// # Arguments
    ///
    /// * `name` - The guest's display name
    /// * `phone` - The guest's phone number
    /// * `email` - The guest's email address
    #[must_use]
    pub const fn new(name: String, phone: String, email: String) -> Self {
        Self { name, phone, email }
    }
}

/// Resolves weak guest references to contact snapshots.
///
/// Implemented by the collaborator that owns guest profiles. A guest the
/// directory does not know still matches searches through the booking
/// reference field.
pub trait GuestDirectory {
    /// Looks up the contact snapshot for a guest.
    fn lookup(&self, guest: &GuestRef) -> Option<GuestContact>;
}

/// A guest directory backed by an in-process map.
///
/// Used by tests and the server binary; a real deployment would back this
/// with the external guest-profile service.
#[derive(Debug, Clone, Default)]
pub struct InMemoryGuestDirectory {
    entries: HashMap<String, GuestContact>,
}

impl InMemoryGuestDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Adds or replaces a guest's contact snapshot.
    ///
    /// # Arguments
    ///
    /// * `guest` - The guest reference
    /// * `contact` - The contact snapshot
    pub fn insert(&mut self, guest: &GuestRef, contact: GuestContact) {
        self.entries.insert(guest.value().to_owned(), contact);
    }
}

impl GuestDirectory for InMemoryGuestDirectory {
    fn lookup(&self, guest: &GuestRef) -> Option<GuestContact> {
        self.entries.get(guest.value()).cloned()
    }
}

/// The filter applied by [`search`].
///
/// Every field is optional; an empty filter matches every booking.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookingFilter {
    /// Free-text query matched against guest name, reference, phone, email.
    pub text: Option<String>,
    /// Restrict to a derived payment status.
    pub payment_status: Option<PaymentStatus>,
    /// Restrict to a source channel.
    pub source: Option<BookingSource>,
    /// Restrict to a lifecycle status.
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    /// Returns the normalized free-text query, if one is set.
    ///
    /// Whitespace-only queries count as unset.
    fn normalized_text(&self) -> Option<String> {
        self.text
            .as_deref()
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .map(str::to_lowercase)
    }
}

/// Searches a ledger, resolving guest contacts through the directory.
///
/// Results are references into the ledger in its insertion order; the
/// ledger is never mutated.
///
/// # Arguments
///
/// * `ledger` - The ledger snapshot to search
/// * `directory` - The guest directory collaborator
/// * `filter` - The filter to apply
#[must_use]
pub fn search<'a>(
    ledger: &'a Ledger,
    directory: &dyn GuestDirectory,
    filter: &BookingFilter,
) -> Vec<&'a Booking> {
    let text: Option<String> = filter.normalized_text();

    ledger
        .list()
        .iter()
        .filter(|booking| {
            filter
                .payment_status
                .is_none_or(|wanted| booking.payment_status() == wanted)
        })
        .filter(|booking| filter.source.is_none_or(|wanted| booking.source == wanted))
        .filter(|booking| filter.status.is_none_or(|wanted| booking.status == wanted))
        .filter(|booking| match &text {
            None => true,
            Some(query) => matches_text(booking, directory, query),
        })
        .collect()
}

/// Checks the free-text query against reference and guest contact fields.
fn matches_text(booking: &Booking, directory: &dyn GuestDirectory, query: &str) -> bool {
    if booking.reference.value().to_lowercase().contains(query) {
        return true;
    }
    directory.lookup(&booking.guest).is_some_and(|contact| {
        contact.name.to_lowercase().contains(query)
            || contact.phone.to_lowercase().contains(query)
            || contact.email.to_lowercase().contains(query)
    })
}
