//! User management service — application-layer orchestration
//!
//! All user-related business logic lives here, including the login flow.
//! HTTP handlers are thin wrappers that delegate to this service.

use std::sync::Arc;

use tracing::info;
use validator::Validate;

use crate::domain::{
    collect_violations, DomainError, DomainResult, FieldViolation, NewUser, User,
    UserNameUpdate, UserRepositoryInterface, UserRole,
};
use crate::infrastructure::crypto::jwt::{create_token, JwtConfig};
use crate::infrastructure::crypto::password::{hash_password, verify_password};

/// Signup input as it arrives from the wire; presence is checked here.
#[derive(Debug, Default)]
pub struct CreateUserInput {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub user_type: Option<String>,
}

/// Successful login: the authenticated user plus a signed token.
#[derive(Debug)]
pub struct AuthResult {
    pub user: User,
    pub token: String,
}

/// User service — orchestrates all identity / user-management use-cases.
///
/// Generic over `R: UserRepositoryInterface` so it stays decoupled from
/// the concrete persistence layer.
pub struct UserService<R: UserRepositoryInterface> {
    repo: Arc<R>,
    jwt_config: JwtConfig,
    bcrypt_cost: u32,
}

impl<R: UserRepositoryInterface> UserService<R> {
    pub fn new(repo: Arc<R>, jwt_config: JwtConfig, bcrypt_cost: u32) -> Self {
        Self {
            repo,
            jwt_config,
            bcrypt_cost,
        }
    }

    // ── Authentication ──────────────────────────────────────────

    /// Authenticate by email + password and return a signed token.
    ///
    /// A missing user and a wrong password produce the same error, so the
    /// endpoint cannot be used to enumerate registered emails.
    pub async fn login(&self, email: &str, password: &str) -> DomainResult<AuthResult> {
        if email.is_empty() || password.is_empty() {
            return Err(DomainError::Precondition(
                "E-mail and password are required".into(),
            ));
        }

        let Some(user) = self.repo.find_by_email(email).await? else {
            return Err(DomainError::InvalidCredentials);
        };

        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(DomainError::InvalidCredentials);
        }

        let token = create_token(&user.id, &self.jwt_config)
            .map_err(|e| DomainError::Internal(format!("Failed to create token: {}", e)))?;

        info!(user_id = %user.id, "User logged in");
        Ok(AuthResult { user, token })
    }

    // ── Commands ────────────────────────────────────────────────

    /// Signup: presence check, validation, email-uniqueness precheck,
    /// hash, persist.
    pub async fn create_user(&self, input: CreateUserInput) -> DomainResult<User> {
        let name = input.name.unwrap_or_default();
        let email = input.email.unwrap_or_default();
        let password = input.password.unwrap_or_default();

        if name.is_empty() || password.is_empty() || email.is_empty() {
            return Err(DomainError::Precondition(
                "Name, password and email are required".into(),
            ));
        }

        // Absent role falls back to the "None" sentinel; an unrecognized
        // string is a constraint violation, reported with the others.
        let (role, role_violation) = match input.user_type.as_deref() {
            None | Some("") => (UserRole::None, None),
            Some(value) => match UserRole::parse(value) {
                Some(role) => (role, None),
                None => (
                    UserRole::None,
                    Some(FieldViolation {
                        property: "userType".into(),
                        constraints: vec!["userType must be a valid caseworker role".into()],
                    }),
                ),
            },
        };

        let candidate = NewUser {
            name,
            email,
            password,
            role,
        };

        let mut violations = match candidate.validate() {
            Ok(()) => Vec::new(),
            Err(errors) => collect_violations(&errors),
        };
        if let Some(violation) = role_violation {
            violations.push(violation);
            violations.sort_by(|a, b| a.property.cmp(&b.property));
        }
        if !violations.is_empty() {
            return Err(DomainError::Validation(violations));
        }

        if self.repo.find_by_email(&candidate.email).await?.is_some() {
            return Err(DomainError::Duplicate("Email already in use".into()));
        }

        let password_hash = hash_password(&candidate.password, self.bcrypt_cost)
            .map_err(|e| DomainError::Internal(format!("Failed to hash password: {}", e)))?;

        let user = User {
            id: uuid::Uuid::new_v4().to_string(),
            name: candidate.name,
            email: candidate.email,
            password_hash,
            role: candidate.role,
        };

        self.repo.insert(user.clone()).await?;

        info!(user_id = %user.id, email = %user.email, "New user registered");
        Ok(user)
    }

    /// Rename a user. Only the incoming name is validated; the stored
    /// password hash is never re-checked against the plaintext rules.
    pub async fn update_user(&self, id: &str, name: Option<String>) -> DomainResult<User> {
        let name = name.unwrap_or_default();
        if name.is_empty() {
            return Err(DomainError::Precondition("Name is required".into()));
        }

        let Some(mut user) = self.repo.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "User" });
        };

        let candidate = UserNameUpdate { name };
        if let Err(errors) = candidate.validate() {
            return Err(DomainError::Validation(collect_violations(&errors)));
        }

        user.name = candidate.name;
        self.repo.update(&user).await?;

        Ok(user)
    }

    /// Delete a user and return the deleted id.
    pub async fn delete_user(&self, id: &str) -> DomainResult<String> {
        let Some(user) = self.repo.find_by_id(id).await? else {
            return Err(DomainError::NotFound { entity: "User" });
        };

        self.repo.delete(&user.id).await?;
        Ok(user.id)
    }

    // ── Queries ─────────────────────────────────────────────────

    pub async fn list_users(&self) -> DomainResult<Vec<User>> {
        self.repo.list().await
    }

    pub async fn get_by_email(&self, email: &str) -> DomainResult<User> {
        self.repo
            .find_by_email(email)
            .await?
            .ok_or(DomainError::NotFound { entity: "User" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::test_support::{test_db, user_service};
    use crate::domain::DomainError;

    fn signup_input(email: &str) -> CreateUserInput {
        CreateUserInput {
            name: Some("Ana Caseworker".into()),
            email: Some(email.into()),
            password: Some("secret1".into()),
            user_type: Some("Bolsa Família".into()),
        }
    }

    #[tokio::test]
    async fn signup_strips_nothing_but_persists_hash() {
        let db = test_db().await;
        let service = user_service(&db);

        let user = service.create_user(signup_input("ana@city.gov")).await.unwrap();
        assert_eq!(user.role, UserRole::BolsaFamilia);
        assert_ne!(user.password_hash, "secret1");
        assert!(verify_password("secret1", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn duplicate_email_is_rejected_after_first_commit() {
        let db = test_db().await;
        let service = user_service(&db);

        service.create_user(signup_input("dup@city.gov")).await.unwrap();
        let err = service.create_user(signup_input("dup@city.gov")).await.unwrap_err();
        assert!(matches!(err, DomainError::Duplicate(_)));
    }

    #[tokio::test]
    async fn missing_fields_fail_fast() {
        let db = test_db().await;
        let service = user_service(&db);

        let err = service
            .create_user(CreateUserInput {
                name: Some("Ana Caseworker".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::Precondition(_)));
    }

    #[tokio::test]
    async fn unknown_role_is_a_violation_not_a_default() {
        let db = test_db().await;
        let service = user_service(&db);

        let mut input = signup_input("role@city.gov");
        input.user_type = Some("Mayor".into());
        let err = service.create_user(input).await.unwrap_err();
        match err {
            DomainError::Validation(violations) => {
                assert!(violations.iter().any(|v| v.property == "userType"));
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn login_does_not_reveal_which_credential_failed() {
        let db = test_db().await;
        let service = user_service(&db);
        service.create_user(signup_input("who@city.gov")).await.unwrap();

        let missing = service.login("nobody@city.gov", "secret1").await.unwrap_err();
        let wrong = service.login("who@city.gov", "wrong-pass").await.unwrap_err();
        assert_eq!(missing.to_string(), wrong.to_string());
    }

    #[tokio::test]
    async fn login_returns_token_for_valid_credentials() {
        let db = test_db().await;
        let service = user_service(&db);
        let created = service.create_user(signup_input("ok@city.gov")).await.unwrap();

        let auth = service.login("ok@city.gov", "secret1").await.unwrap();
        assert_eq!(auth.user.id, created.id);
        assert!(!auth.token.is_empty());
    }

    #[tokio::test]
    async fn update_validates_name_only() {
        let db = test_db().await;
        let service = user_service(&db);
        let user = service.create_user(signup_input("upd@city.gov")).await.unwrap();

        // The stored bcrypt hash is longer than 15 chars; a whole-entity
        // re-validation would wrongly reject it.
        let renamed = service
            .update_user(&user.id, Some("Ana Renamed".into()))
            .await
            .unwrap();
        assert_eq!(renamed.name, "Ana Renamed");

        let err = service.update_user(&user.id, Some("ab".into())).await.unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_returns_id_and_missing_user_is_404() {
        let db = test_db().await;
        let service = user_service(&db);
        let user = service.create_user(signup_input("del@city.gov")).await.unwrap();

        assert_eq!(service.delete_user(&user.id).await.unwrap(), user.id);
        let err = service.delete_user(&user.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound { entity: "User" }));
    }
}
