use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::common::{Role, UserId};

/// Newsroom member profile.
///
/// Created at registration (sign-up itself happens in the external auth
/// layer); the role defaults to scrittore and only an admin changes it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: Role,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Last activity marker, powers the "online now" list in chat.
    pub last_seen_at: Option<DateTime<Utc>>,
}

impl User {
    /// Build a fresh profile with the default scrittore role.
    pub fn new(email: String, first_name: String, last_name: String) -> Self {
        Self::with_role(email, first_name, last_name, Role::Scrittore)
    }

    /// Build a profile with an explicit role (seeding, tests).
    pub fn with_role(email: String, first_name: String, last_name: String, role: Role) -> Self {
        Self {
            id: UserId::new(),
            email,
            first_name,
            last_name,
            role,
            avatar_url: None,
            created_at: Utc::now(),
            last_seen_at: None,
        }
    }

    /// "Nome Cognome" as shown in notification messages.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_user_defaults_to_scrittore() {
        let user = User::new(
            "anna.bianchi@scuola.it".to_string(),
            "Anna".to_string(),
            "Bianchi".to_string(),
        );
        assert_eq!(user.role, Role::Scrittore);
        assert!(user.last_seen_at.is_none());
    }

    #[test]
    fn test_display_name() {
        let user = User::new(
            "anna.bianchi@scuola.it".to_string(),
            "Anna".to_string(),
            "Bianchi".to_string(),
        );
        assert_eq!(user.display_name(), "Anna Bianchi");
    }
}
