//! User (caseworker) domain model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Caseworker category. Wire values match the municipal program names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    #[serde(rename = "Bolsa Família")]
    BolsaFamilia,
    #[serde(rename = "Centro de Referência de Assistência Social")]
    Cras,
    #[serde(rename = "None")]
    None,
}

impl Default for UserRole {
    fn default() -> Self {
        Self::None
    }
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BolsaFamilia => "Bolsa Família",
            Self::Cras => "Centro de Referência de Assistência Social",
            Self::None => "None",
        }
    }

    /// Parse a wire value. Unknown strings are a constraint violation for
    /// the caller to report, never silently defaulted.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Bolsa Família" => Some(Self::BolsaFamilia),
            "Centro de Referência de Assistência Social" => Some(Self::Cras),
            "None" => Some(Self::None),
            _ => None,
        }
    }
}

/// User model. Only the bcrypt hash is ever stored.
#[derive(Debug, Clone)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: UserRole,
}

/// Signup candidate, validated before the password is hashed.
#[derive(Debug, Validate)]
pub struct NewUser {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
    #[validate(email(message = "email must be a valid e-mail address"))]
    pub email: String,
    #[validate(length(min = 6, max = 15, message = "password must be between 6 and 15 characters"))]
    pub password: String,
    pub role: UserRole,
}

/// Name-only update candidate. The stored hash is never re-validated
/// against the plaintext password rules.
#[derive(Debug, Validate)]
pub struct UserNameUpdate {
    #[validate(length(min = 5, max = 50, message = "name must be between 5 and 50 characters"))]
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::collect_violations;
    use validator::Validate;

    #[test]
    fn role_round_trip() {
        for role in [UserRole::BolsaFamilia, UserRole::Cras, UserRole::None] {
            assert_eq!(UserRole::parse(role.as_str()), Some(role));
        }
        assert_eq!(UserRole::parse("Admin"), None);
    }

    #[test]
    fn collects_all_violations_not_just_the_first() {
        let candidate = NewUser {
            name: "abc".into(),
            email: "not-an-email".into(),
            password: "123".into(),
            role: UserRole::None,
        };
        let violations = collect_violations(&candidate.validate().unwrap_err());
        let props: Vec<&str> = violations.iter().map(|v| v.property.as_str()).collect();
        assert_eq!(props, vec!["email", "name", "password"]);
    }
}
