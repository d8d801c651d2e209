// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Identifies a single property (hotel site).
///
/// A ledger is scoped to exactly one property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PropertyId {
    /// The property identifier value.
    value: String,
}

impl PropertyId {
    /// Creates a new `PropertyId`.
    ///
    /// # Arguments
    ///
    /// * `value` - The property identifier (trimmed of surrounding whitespace)
    #[must_use]
    pub fn new(value: &str) -> Self {
        Self {
            value: value.trim().to_owned(),
        }
    }

    /// Returns the property identifier value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for PropertyId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A weak reference to a guest.
///
/// Bookings record which guest they belong to but never own guest profile
/// data; contact details live with the guest directory collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuestRef {
    /// The opaque guest identifier.
    guest_id: String,
}

impl GuestRef {
    /// Creates a new `GuestRef`.
    ///
    /// # Arguments
    ///
    /// * `guest_id` - The guest identifier
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidGuest` if the identifier is empty.
    pub fn new(guest_id: &str) -> Result<Self, DomainError> {
        let trimmed = guest_id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidGuest(String::from(
                "guest identifier cannot be empty",
            )));
        }
        Ok(Self {
            guest_id: trimmed.to_owned(),
        })
    }

    /// Returns the guest identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.guest_id
    }
}

/// An opaque room identifier within a property.
///
/// Room identifiers are normalized to uppercase so "2a" and "2A" name the
/// same room.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomRef {
    /// The room identifier (e.g., "204").
    room_id: String,
}

impl RoomRef {
    /// Creates a new `RoomRef`.
    ///
    /// # Arguments
    ///
    /// * `room_id` - The room identifier (normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidRoom` if the identifier is empty.
    pub fn new(room_id: &str) -> Result<Self, DomainError> {
        let trimmed = room_id.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidRoom(String::from(
                "room identifier cannot be empty",
            )));
        }
        Ok(Self {
            room_id: trimmed.to_uppercase(),
        })
    }

    /// Returns the room identifier.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.room_id
    }
}

impl std::fmt::Display for RoomRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.room_id)
    }
}

/// A monetary amount in minor currency units (e.g., cents).
///
/// Amounts are never negative. Arithmetic that could overflow or go negative
/// is expressed through checked operations at the call sites that need it.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(transparent)]
pub struct Amount {
    /// The value in minor units.
    value: i64,
}

impl Amount {
    /// The zero amount.
    pub const ZERO: Self = Self { value: 0 };

    /// Creates a new `Amount`.
    ///
    /// # Arguments
    ///
    /// * `value` - The value in minor units
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidAmount` if the value is negative.
    pub fn new(value: i64) -> Result<Self, DomainError> {
        if value < 0 {
            return Err(DomainError::InvalidAmount {
                amount: value,
                reason: String::from("amount cannot be negative"),
            });
        }
        Ok(Self { value })
    }

    /// Returns the value in minor units.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.value
    }

    /// Returns whether this amount is zero.
    #[must_use]
    pub const fn is_zero(&self) -> bool {
        self.value == 0
    }

    /// Adds another amount, saturating at `i64::MAX`.
    ///
    /// Booking totals are far below the saturation point in practice.
    #[must_use]
    pub const fn saturating_add(&self, other: Self) -> Self {
        Self {
            value: self.value.saturating_add(other.value),
        }
    }

    /// Returns the difference `self - other`, or zero if `other` is larger.
    #[must_use]
    pub const fn saturating_sub(&self, other: Self) -> Self {
        if other.value >= self.value {
            Self::ZERO
        } else {
            Self {
                value: self.value - other.value,
            }
        }
    }
}

impl std::fmt::Display for Amount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// The two-letter prefix used when generating booking references.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferencePrefix {
    /// The prefix value (exactly two ASCII uppercase letters).
    value: String,
}

impl ReferencePrefix {
    /// Creates a new `ReferencePrefix`.
    ///
    /// The prefix is normalized to uppercase.
    ///
    /// # Arguments
    ///
    /// * `value` - The prefix (must be exactly two ASCII letters)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReferencePrefix` if the value is not
    /// exactly two ASCII letters.
    pub fn new(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim();
        if trimmed.len() != 2 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(DomainError::InvalidReferencePrefix(format!(
                "'{trimmed}' must be exactly two ASCII letters"
            )));
        }
        Ok(Self {
            value: trimmed.to_uppercase(),
        })
    }

    /// Returns the prefix value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

impl std::fmt::Display for ReferencePrefix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

/// A unique, human-readable booking reference.
///
/// References are generated at creation time as a two-letter prefix followed
/// by a zero-padded six-digit sequence number, e.g. `BK001234`. They are
/// immutable for the life of the booking.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BookingReference {
    /// The reference value.
    value: String,
}

impl BookingReference {
    /// The number of digits in the sequence part of a reference.
    const SEQUENCE_DIGITS: usize = 6;

    /// Generates a reference from a prefix and sequence number.
    ///
    /// # Arguments
    ///
    /// * `prefix` - The reference prefix
    /// * `sequence` - The ledger-assigned sequence number
    #[must_use]
    pub fn generate(prefix: &ReferencePrefix, sequence: u64) -> Self {
        Self {
            value: format!(
                "{}{:0width$}",
                prefix.value(),
                sequence,
                width = Self::SEQUENCE_DIGITS
            ),
        }
    }

    /// Parses an existing reference string.
    ///
    /// # Arguments
    ///
    /// * `value` - The reference string (normalized to uppercase)
    ///
    /// # Errors
    ///
    /// Returns `DomainError::InvalidReference` if the string is not a
    /// two-letter prefix followed by at least six digits.
    pub fn parse(value: &str) -> Result<Self, DomainError> {
        let trimmed = value.trim().to_uppercase();
        let letters = trimmed
            .chars()
            .take_while(char::is_ascii_alphabetic)
            .count();
        let digits = trimmed.chars().count() - letters;
        if letters != 2 || digits < Self::SEQUENCE_DIGITS {
            return Err(DomainError::InvalidReference(format!(
                "'{value}' is not a two-letter prefix followed by a six-digit sequence"
            )));
        }
        if !trimmed.chars().skip(letters).all(|c| c.is_ascii_digit()) {
            return Err(DomainError::InvalidReference(format!(
                "'{value}' contains non-digit characters in the sequence part"
            )));
        }
        Ok(Self { value: trimmed })
    }

    /// Returns the reference value.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Returns the numeric sequence part of the reference.
    ///
    /// Used to restore the ledger sequence counter when rebuilding from a
    /// persisted booking set.
    #[must_use]
    pub fn sequence(&self) -> u64 {
        self.value
            .chars()
            .skip_while(char::is_ascii_alphabetic)
            .collect::<String>()
            .parse()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for BookingReference {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value)
    }
}

impl FromStr for BookingReference {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// The channel a booking arrived through.
///
/// Sources are fixed domain constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSource {
    /// Booked directly with the property (front desk, email).
    Direct,
    /// Booked through the property's website.
    Website,
    /// Booked over the phone.
    Phone,
    /// Walk-in guest with no prior booking.
    WalkIn,
    /// Booked through an online travel agency.
    Ota,
}

impl BookingSource {
    /// Returns the string representation of this source.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Direct => "direct",
            Self::Website => "website",
            Self::Phone => "phone",
            Self::WalkIn => "walk_in",
            Self::Ota => "ota",
        }
    }

    /// Returns all source channels, in a stable order.
    #[must_use]
    pub const fn all() -> [Self; 5] {
        [
            Self::Direct,
            Self::Website,
            Self::Phone,
            Self::WalkIn,
            Self::Ota,
        ]
    }
}

impl std::fmt::Display for BookingSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BookingSource {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "direct" => Ok(Self::Direct),
            "website" => Ok(Self::Website),
            "phone" => Ok(Self::Phone),
            "walk_in" => Ok(Self::WalkIn),
            "ota" => Ok(Self::Ota),
            _ => Err(DomainError::InvalidSource(s.to_string())),
        }
    }
}
