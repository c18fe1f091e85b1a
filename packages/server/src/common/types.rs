// Common types used across multiple domains and layers
//
// These types are shared between the kernel and domain layers to avoid
// circular dependencies while maintaining type safety.

use serde::{Deserialize, Serialize};

/// Newsroom role. Single-valued: every user holds exactly one role.
///
/// The serialized values are part of the external contract and must stay
/// as-is: `scrittore`, `verificatore`, `amministratore`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Scrittore,
    Verificatore,
    Amministratore,
}

impl Role {
    /// Capitalized label shown in user-facing messages.
    pub fn label(&self) -> &'static str {
        match self {
            Role::Scrittore => "Scrittore",
            Role::Verificatore => "Verificatore",
            Role::Amministratore => "Amministratore",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::Scrittore => write!(f, "scrittore"),
            Role::Verificatore => write!(f, "verificatore"),
            Role::Amministratore => write!(f, "amministratore"),
        }
    }
}

impl std::str::FromStr for Role {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "scrittore" => Ok(Role::Scrittore),
            "verificatore" => Ok(Role::Verificatore),
            "amministratore" => Ok(Role::Amministratore),
            _ => Err(anyhow::anyhow!("Invalid role: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_role_wire_values() {
        assert_eq!(Role::Scrittore.to_string(), "scrittore");
        assert_eq!(Role::Verificatore.to_string(), "verificatore");
        assert_eq!(Role::Amministratore.to_string(), "amministratore");
    }

    #[test]
    fn test_role_serde_roundtrip() {
        for role in [Role::Scrittore, Role::Verificatore, Role::Amministratore] {
            let json = serde_json::to_string(&role).unwrap();
            assert_eq!(json, format!("\"{}\"", role));
            let parsed: Role = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, role);
        }
    }

    #[test]
    fn test_role_from_str_rejects_unknown() {
        assert!(Role::from_str("direttore").is_err());
    }
}
