//! User roles within the portal.

use serde::{Deserialize, Serialize};

/// Role a user signs up with. Carries no permissions; it is profile data
/// the portal frontend displays and filters on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    #[default]
    Player,
    Coach,
    Official,
    Viewer,
}

impl UserRole {
    /// Storage representation (lowercase text column).
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Player => "player",
            UserRole::Coach => "coach",
            UserRole::Official => "official",
            UserRole::Viewer => "viewer",
        }
    }

    /// Parse the storage representation back. Unknown values fall back to
    /// `Player`, matching the column default.
    pub fn from_name(name: &str) -> Self {
        match name {
            "coach" => UserRole::Coach,
            "official" => UserRole::Official,
            "viewer" => UserRole::Viewer,
            _ => UserRole::Player,
        }
    }
}
