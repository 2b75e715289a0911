//! User identity type for core updates.

use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Name used when addressing the user: first name, falling back to
    /// username. `None` means the identity is unusable for a greeting.
    pub fn display_name(&self) -> Option<&str> {
        self.first_name.as_deref().or(self.username.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// **Test: display_name prefers first_name, falls back to username.**
    #[test]
    fn test_display_name_fallback() {
        let full = User {
            id: 1,
            username: Some("ivan_dev".to_string()),
            first_name: Some("Ivan".to_string()),
            last_name: None,
        };
        assert_eq!(full.display_name(), Some("Ivan"));

        let username_only = User {
            id: 2,
            username: Some("ghost".to_string()),
            first_name: None,
            last_name: None,
        };
        assert_eq!(username_only.display_name(), Some("ghost"));

        let anonymous = User {
            id: 3,
            username: None,
            first_name: None,
            last_name: None,
        };
        assert_eq!(anonymous.display_name(), None);
    }
}
