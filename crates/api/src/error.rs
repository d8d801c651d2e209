// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for the API layer.

use stay_ledger::CoreError;
use stay_ledger_domain::DomainError;
use thiserror::Error;

/// Authentication and authorization errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
}

/// API-level errors.
///
/// These are distinct from domain/core errors and represent the API contract.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Authentication failed.
    #[error("Authentication failed: {reason}")]
    AuthenticationFailed {
        /// The reason authentication failed.
        reason: String,
    },
    /// Authorization failed - the actor does not have permission.
    #[error("Unauthorized: '{action}' requires {required_role} role")]
    Unauthorized {
        /// The action that was attempted.
        action: String,
        /// The role required for this action.
        required_role: String,
    },
    /// A domain rule was violated.
    #[error("Domain rule violation ({rule}): {message}")]
    DomainRuleViolation {
        /// The rule that was violated.
        rule: String,
        /// A human-readable description of the violation.
        message: String,
    },
    /// Invalid input was provided.
    #[error("Invalid input for field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A human-readable description of the error.
        message: String,
    },
    /// A requested resource was not found.
    #[error("{resource_type} not found: {message}")]
    ResourceNotFound {
        /// The type of resource that was not found.
        resource_type: String,
        /// A human-readable description of what was not found.
        message: String,
    },
    /// An internal error occurred.
    #[error("Internal error: {message}")]
    Internal {
        /// A description of the internal error.
        message: String,
    },
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::AuthenticationFailed { reason } => Self::AuthenticationFailed { reason },
            AuthError::Unauthorized {
                action,
                required_role,
            } => Self::Unauthorized {
                action,
                required_role,
            },
        }
    }
}

/// Translates a domain error into an API error.
///
/// This translation is explicit and ensures domain errors are not leaked directly.
#[must_use]
pub fn translate_domain_error(err: DomainError) -> ApiError {
    match err {
        DomainError::InvalidStayInterval {
            check_in,
            check_out,
        } => ApiError::InvalidInput {
            field: String::from("stay"),
            message: format!("Check-out {check_out} must be after check-in {check_in}"),
        },
        DomainError::InvalidAmount { amount, reason } => ApiError::InvalidInput {
            field: String::from("amount"),
            message: format!("Invalid amount {amount}: {reason}"),
        },
        DomainError::Overpayment {
            reference,
            paid,
            payment,
            total,
        } => ApiError::InvalidInput {
            field: String::from("amount"),
            message: format!(
                "Payment of {payment} on booking '{reference}' would exceed total {total} (already paid {paid})"
            ),
        },
        DomainError::BookingNotFound { reference } => ApiError::ResourceNotFound {
            resource_type: String::from("Booking"),
            message: format!("Booking '{reference}' does not exist"),
        },
        DomainError::InvalidStatusTransition { from, to, reason } => {
            ApiError::DomainRuleViolation {
                rule: String::from("status_transition"),
                message: format!("Cannot transition from '{from}' to '{to}': {reason}"),
            }
        }
        DomainError::RoomOverlap {
            room,
            conflicting_reference,
        } => ApiError::DomainRuleViolation {
            rule: String::from("room_availability"),
            message: format!(
                "Room '{room}' already has an overlapping booking '{conflicting_reference}'"
            ),
        },
        DomainError::InvalidRoomCount { count } => ApiError::Internal {
            message: format!("Configured total room count {count} is invalid"),
        },
        DomainError::DuplicateReference { reference } => ApiError::InvalidInput {
            field: String::from("reference"),
            message: format!("Booking reference '{reference}' already exists"),
        },
        DomainError::InvalidReference(msg) => ApiError::InvalidInput {
            field: String::from("reference"),
            message: msg,
        },
        DomainError::InvalidReferencePrefix(msg) => ApiError::InvalidInput {
            field: String::from("reference_prefix"),
            message: msg,
        },
        DomainError::InvalidSource(msg) => ApiError::InvalidInput {
            field: String::from("source"),
            message: msg,
        },
        DomainError::InvalidStatus(msg) => ApiError::InvalidInput {
            field: String::from("status"),
            message: msg,
        },
        DomainError::InvalidGuest(msg) => ApiError::InvalidInput {
            field: String::from("guest"),
            message: msg,
        },
        DomainError::InvalidRoom(msg) => ApiError::InvalidInput {
            field: String::from("room"),
            message: msg,
        },
        DomainError::InvalidCancellationReason(msg) => ApiError::InvalidInput {
            field: String::from("reason"),
            message: msg,
        },
    }
}

/// Translates a core error into an API error.
///
/// This translation is explicit and ensures core errors are not leaked directly.
#[must_use]
pub fn translate_core_error(err: CoreError) -> ApiError {
    match err {
        CoreError::DomainViolation(domain_err) => translate_domain_error(domain_err),
    }
}
