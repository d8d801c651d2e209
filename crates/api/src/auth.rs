// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Authentication and authorization types and services.

use stay_ledger_audit::Actor;

use crate::error::AuthError;

/// Actor roles for authorization.
///
/// Roles determine what actions an authenticated actor may perform.
/// Roles apply only to system operators, never to guests.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Admin role: operators with corrective and structural authority.
    ///
    /// Admins may additionally:
    /// - cancel bookings
    /// - assign or reassign rooms
    Admin,
    /// Front desk role: operators handling day-to-day guest traffic.
    ///
    /// Front desk operators may:
    /// - create and confirm bookings
    /// - check guests in and out
    /// - record payments
    /// - run read-only queries
    FrontDesk,
}

impl Role {
    /// Returns the lowercase name used in audit events and request payloads.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::FrontDesk => "front_desk",
        }
    }

    /// Parses a role from its request representation.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::AuthenticationFailed` if the string is not a
    /// recognized role.
    pub fn parse(value: &str) -> Result<Self, AuthError> {
        match value.trim().to_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "front_desk" => Ok(Self::FrontDesk),
            other => Err(AuthError::AuthenticationFailed {
                reason: format!("Unknown role '{other}'"),
            }),
        }
    }
}

/// An authenticated actor with an associated role.
///
/// This represents a system operator who has been authenticated and
/// has permission to perform certain actions based on their role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedActor {
    /// The unique identifier for this actor.
    pub id: String,
    /// The role assigned to this actor.
    pub role: Role,
}

impl AuthenticatedActor {
    /// Creates a new authenticated actor.
    ///
    /// # Arguments
    ///
    /// * `id` - The unique identifier for this actor
    /// * `role` - The role assigned to this actor
    #[must_use]
    pub const fn new(id: String, role: Role) -> Self {
        Self { id, role }
    }

    /// Converts this authenticated actor into an audit Actor.
    ///
    /// This is used when recording audit events to attribute actions
    /// to the authenticated operator.
    #[must_use]
    pub fn to_audit_actor(&self) -> Actor {
        Actor::new(self.id.clone(), String::from(self.role.as_str()))
    }
}

/// Placeholder authentication.
///
/// Real identity verification belongs to an external collaborator; this
/// stub only binds a caller-supplied identity to a parsed role so the
/// rest of the boundary can enforce authorization against it.
///
/// # Arguments
///
/// * `actor_id` - The caller-supplied operator identifier
/// * `role` - The role string from the request
///
/// # Errors
///
/// Returns `AuthError::AuthenticationFailed` if the actor id is empty
/// or the role is not recognized.
pub fn authenticate_stub(actor_id: &str, role: &str) -> Result<AuthenticatedActor, AuthError> {
    let trimmed = actor_id.trim();
    if trimmed.is_empty() {
        return Err(AuthError::AuthenticationFailed {
            reason: String::from("Actor id must not be empty"),
        });
    }
    let role = Role::parse(role)?;
    Ok(AuthenticatedActor::new(trimmed.to_string(), role))
}

/// Authorization service for enforcing role-based access control.
///
/// This service determines whether an authenticated actor has permission
/// to perform a specific action based on their role.
pub struct AuthorizationService;

impl AuthorizationService {
    fn require_admin(actor: &AuthenticatedActor, action: &str) -> Result<(), AuthError> {
        match actor.role {
            Role::Admin => Ok(()),
            Role::FrontDesk => Err(AuthError::Unauthorized {
                action: String::from(action),
                required_role: String::from("Admin"),
            }),
        }
    }

    /// Checks if an actor is authorized to cancel a booking.
    ///
    /// Only Admin actors may cancel bookings.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_cancel_booking(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "cancel_booking")
    }

    /// Checks if an actor is authorized to assign or reassign a room.
    ///
    /// Only Admin actors may change room assignments.
    ///
    /// # Errors
    ///
    /// Returns an error if the actor does not have the Admin role.
    pub fn authorize_assign_room(actor: &AuthenticatedActor) -> Result<(), AuthError> {
        Self::require_admin(actor, "assign_room")
    }
}
