//! Principal and role models.
//!
//! A [`Principal`] is the explicit evaluation context for every policy
//! decision: the acting user and the roles it holds. It is always passed
//! in by the caller, never held as ambient state, so the policy model is
//! testable without any session machinery.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A role a principal may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// The privileged role; full access to all payroll entities.
    Admin,
    /// An ordinary employee login.
    Employee,
}

impl Role {
    /// Returns the role's wire name, as stored in the user_roles table.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Employee => "employee",
        }
    }
}

/// One row of the user_roles table.
///
/// Unique per (user_id, role); the storage layer rejects duplicates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleAssignment {
    /// Unique identifier for the assignment row.
    pub id: Uuid,
    /// The user the role is granted to.
    pub user_id: Uuid,
    /// The granted role.
    pub role: Role,
}

/// An authenticated actor, as seen by the policy model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Principal {
    /// The acting user's id, as issued by the authentication provider.
    pub user_id: Uuid,
    /// The roles the user holds. May be empty.
    pub roles: Vec<Role>,
}

impl Principal {
    /// Creates a principal with the given roles.
    pub fn new(user_id: Uuid, roles: Vec<Role>) -> Self {
        Self { user_id, roles }
    }

    /// Creates a principal holding no roles.
    ///
    /// Such a principal sees nothing unless an employee row links to it.
    pub fn without_roles(user_id: Uuid) -> Self {
        Self {
            user_id,
            roles: Vec::new(),
        }
    }

    /// Returns true if the principal holds the given role.
    pub fn has_role(&self, role: Role) -> bool {
        self.roles.contains(&role)
    }

    /// Returns true if the principal holds the admin role.
    pub fn is_admin(&self) -> bool {
        self.has_role(Role::Admin)
    }
}
