use std::sync::Arc;

use tracing::debug;

use crate::domains::auth::errors::{AuthError, RegistrationError};
use crate::domains::auth::jwt::JwtService;
use crate::domains::auth::models::Identity;
use crate::kernel::{BaseCredentialHasher, BaseCredentialStore};

/// Authentication gateway
///
/// Converts credentials into bearer tokens and resolves tokens back to
/// identities. Keeps no state beyond the injected store handles.
pub struct AuthGateway {
    credentials: Arc<dyn BaseCredentialStore>,
    hasher: Arc<dyn BaseCredentialHasher>,
    jwt: Arc<JwtService>,
}

impl AuthGateway {
    pub fn new(
        credentials: Arc<dyn BaseCredentialStore>,
        hasher: Arc<dyn BaseCredentialHasher>,
        jwt: Arc<JwtService>,
    ) -> Self {
        Self {
            credentials,
            hasher,
            jwt,
        }
    }

    /// Check credentials and issue a fresh token
    ///
    /// An unknown login and a wrong password are indistinguishable to
    /// the caller.
    pub async fn authenticate(&self, login: &str, password: &str) -> Result<String, AuthError> {
        let identity = self
            .credentials
            .find_by_login(login)
            .await?
            .ok_or(AuthError::BadCredentials)?;

        if !self.hasher.matches(password, &identity.password_hash) {
            return Err(AuthError::BadCredentials);
        }

        let token = self.jwt.create_token(&identity.login)?;
        debug!(login = %identity.login, "issued token");
        Ok(token)
    }

    /// Register a new identity
    ///
    /// Empty-credential checks run before any store access.
    pub async fn register(
        &self,
        login: &str,
        password: &str,
    ) -> Result<Identity, RegistrationError> {
        if login.is_empty() {
            return Err(RegistrationError::EmptyLogin);
        }
        if password.is_empty() {
            return Err(RegistrationError::EmptyPassword);
        }
        if self.credentials.find_by_login(login).await?.is_some() {
            return Err(RegistrationError::LoginExists);
        }

        let identity = Identity::new(login.to_string(), self.hasher.hash(password));
        let stored = self.credentials.save(identity).await?;
        debug!(login = %stored.login, "registered new identity");
        Ok(stored)
    }

    /// Map a bearer token to its owning identity
    ///
    /// Called once per request before any owner-scoped directory
    /// operation. Fails `Unauthorized` when the token does not verify
    /// or its login no longer resolves.
    pub async fn resolve_caller(&self, token: &str) -> Result<Identity, AuthError> {
        let claims = self
            .jwt
            .verify_token(token)
            .map_err(|_| AuthError::Unauthorized)?;

        self.credentials
            .find_by_login(&claims.sub)
            .await?
            .ok_or(AuthError::Unauthorized)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::{MockCredentialStore, Sha256CredentialHasher};

    fn gateway() -> AuthGateway {
        AuthGateway::new(
            Arc::new(MockCredentialStore::new()),
            Arc::new(Sha256CredentialHasher::new()),
            Arc::new(JwtService::new("test_secret", "test_issuer".to_string())),
        )
    }

    #[tokio::test]
    async fn test_register_then_authenticate() {
        let gateway = gateway();

        let identity = gateway.register("login", "password").await.unwrap();
        assert_eq!(identity.login, "login");

        let token = gateway.authenticate("login", "password").await.unwrap();
        assert!(!token.is_empty());
    }

    #[tokio::test]
    async fn test_register_duplicate_login() {
        let gateway = gateway();

        gateway.register("login", "password").await.unwrap();
        let err = gateway.register("login", "other").await.unwrap_err();
        assert!(matches!(err, RegistrationError::LoginExists));
    }

    #[tokio::test]
    async fn test_register_empty_credentials() {
        let gateway = gateway();

        let err = gateway.register("", "password").await.unwrap_err();
        assert!(matches!(err, RegistrationError::EmptyLogin));

        let err = gateway.register("login", "").await.unwrap_err();
        assert!(matches!(err, RegistrationError::EmptyPassword));
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let gateway = gateway();

        gateway.register("login", "password").await.unwrap();
        let err = gateway.authenticate("login", "wrong").await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn test_authenticate_unknown_login() {
        let gateway = gateway();

        let err = gateway.authenticate("ghost", "password").await.unwrap_err();
        assert!(matches!(err, AuthError::BadCredentials));
    }

    #[tokio::test]
    async fn test_resolve_caller_round_trip() {
        let gateway = gateway();

        let identity = gateway.register("login", "password").await.unwrap();
        let token = gateway.authenticate("login", "password").await.unwrap();

        let resolved = gateway.resolve_caller(&token).await.unwrap();
        assert_eq!(resolved.id, identity.id);
        assert_eq!(resolved.login, "login");
    }

    #[tokio::test]
    async fn test_resolve_caller_rejects_garbage() {
        let gateway = gateway();

        let err = gateway.resolve_caller("not-a-token").await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn test_resolve_caller_rejects_foreign_secret() {
        let gateway = gateway();
        gateway.register("login", "password").await.unwrap();

        let foreign = JwtService::new("other_secret", "test_issuer".to_string());
        let token = foreign.create_token("login").unwrap();

        let err = gateway.resolve_caller(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }

    #[tokio::test]
    async fn test_resolve_caller_unknown_identity() {
        let gateway = gateway();

        // Token verifies but the login was never registered
        let jwt = JwtService::new("test_secret", "test_issuer".to_string());
        let token = jwt.create_token("ghost").unwrap();

        let err = gateway.resolve_caller(&token).await.unwrap_err();
        assert!(matches!(err, AuthError::Unauthorized));
    }
}
