//! UserRole enum for platform access levels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Role a platform user holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Owner,
    Shelter,
    #[default]
    Adopter,
    Admin,
}

impl UserRole {
    /// Returns true if the role may list pets for adoption.
    pub fn can_manage_pets(&self) -> bool {
        matches!(self, UserRole::Owner | UserRole::Shelter | UserRole::Admin)
    }

    /// Returns true if the role may approve or reject adoption requests.
    pub fn can_review_adoptions(&self) -> bool {
        matches!(self, UserRole::Shelter | UserRole::Admin)
    }

    /// Returns true if the role may remove other users.
    pub fn can_remove_users(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            UserRole::Owner => "owner",
            UserRole::Shelter => "shelter",
            UserRole::Adopter => "adopter",
            UserRole::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "owner" => Ok(UserRole::Owner),
            "shelter" => Ok(UserRole::Shelter),
            "adopter" => Ok(UserRole::Adopter),
            "admin" => Ok(UserRole::Admin),
            other => Err(format!("unknown role: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_adopter() {
        assert_eq!(UserRole::default(), UserRole::Adopter);
    }

    #[test]
    fn can_manage_pets_excludes_adopter() {
        assert!(UserRole::Owner.can_manage_pets());
        assert!(UserRole::Shelter.can_manage_pets());
        assert!(UserRole::Admin.can_manage_pets());
        assert!(!UserRole::Adopter.can_manage_pets());
    }

    #[test]
    fn can_review_adoptions_requires_shelter_or_admin() {
        assert!(UserRole::Shelter.can_review_adoptions());
        assert!(UserRole::Admin.can_review_adoptions());
        assert!(!UserRole::Owner.can_review_adoptions());
        assert!(!UserRole::Adopter.can_review_adoptions());
    }

    #[test]
    fn only_admin_can_remove_users() {
        assert!(UserRole::Admin.can_remove_users());
        assert!(!UserRole::Shelter.can_remove_users());
        assert!(!UserRole::Owner.can_remove_users());
        assert!(!UserRole::Adopter.can_remove_users());
    }

    #[test]
    fn serializes_to_snake_case_json() {
        assert_eq!(
            serde_json::to_string(&UserRole::Shelter).unwrap(),
            "\"shelter\""
        );
        assert_eq!(serde_json::to_string(&UserRole::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn deserializes_from_snake_case_json() {
        let role: UserRole = serde_json::from_str("\"owner\"").unwrap();
        assert_eq!(role, UserRole::Owner);
    }

    #[test]
    fn round_trips_through_display_and_from_str() {
        for role in [
            UserRole::Owner,
            UserRole::Shelter,
            UserRole::Adopter,
            UserRole::Admin,
        ] {
            let parsed: UserRole = role.to_string().parse().unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn from_str_rejects_unknown_role() {
        let result: Result<UserRole, _> = "wizard".parse();
        assert!(result.is_err());
    }
}
