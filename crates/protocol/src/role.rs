//! Viewer roles and the top-level view each one gets.
//!
//! The role only picks a view; it never changes how selection, dispatch or
//! creation behave.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;

/// Who is looking at the screen.
///
/// # Examples
///
/// ```
/// use returndesk_protocol::{Role, ViewKind};
///
/// let role: Role = "Client".parse().unwrap();
/// assert_eq!(role.view(), ViewKind::ClientTable);
/// assert_eq!(Role::Manager.view(), ViewKind::Board);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// Back-office staff.
    #[default]
    Employee,
    /// Staff supervisor.
    Manager,
    /// The customer.
    Client,
}

/// Top-level views.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViewKind {
    /// Kanban board of typed buckets.
    Board,
    /// Compact table of the first few requests.
    ClientTable,
}

impl Role {
    /// Returns all roles.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Employee, Self::Manager, Self::Client]
    }

    /// Returns the view rendered for this role.
    #[must_use]
    pub const fn view(self) -> ViewKind {
        match self {
            Self::Employee | Self::Manager => ViewKind::Board,
            Self::Client => ViewKind::ClientTable,
        }
    }

    /// Returns the lowercase name used in configuration.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Manager => "manager",
            Self::Client => "client",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::all()
            .into_iter()
            .find(|role| role.as_str() == key)
            .ok_or_else(|| ProtocolError::UnknownRole(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn staff_roles_see_the_board() {
        assert_eq!(Role::Employee.view(), ViewKind::Board);
        assert_eq!(Role::Manager.view(), ViewKind::Board);
        assert_eq!(Role::Client.view(), ViewKind::ClientTable);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(" MANAGER ".parse::<Role>().ok(), Some(Role::Manager));
        for role in Role::all() {
            assert_eq!(role.to_string().parse::<Role>().ok(), Some(role));
        }
    }

    #[test]
    fn parse_rejects_unknown_roles() {
        let err = "auditor".parse::<Role>().expect_err("should fail");
        assert!(matches!(err, ProtocolError::UnknownRole(name) if name == "auditor"));
    }

    #[test]
    fn serde_uses_lowercase_names() {
        let json = serde_json::to_string(&Role::Client).expect("serialize");
        assert_eq!(json, r#""client""#);
        let role: Role = serde_json::from_str(r#""manager""#).expect("deserialize");
        assert_eq!(role, Role::Manager);
    }
}
