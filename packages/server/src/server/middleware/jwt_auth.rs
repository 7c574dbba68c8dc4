use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use tracing::debug;

use crate::domains::auth::models::Identity;
use crate::domains::auth::AuthGateway;

/// Resolved caller for the current request
#[derive(Clone, Debug)]
pub struct CurrentIdentity(pub Identity);

/// Bearer-token authentication middleware
///
/// Extracts the token from the Authorization header, resolves it to an
/// identity once per request and adds it to request extensions.
/// Requests without a valid token continue unauthenticated; the
/// owner-scoped routes reject those via `require_identity`.
pub async fn jwt_auth_middleware(
    gateway: Arc<AuthGateway>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    if let Some(identity) = resolve_identity(&request, &gateway).await {
        debug!(login = %identity.login, "authenticated caller");
        request.extensions_mut().insert(CurrentIdentity(identity));
    } else {
        debug!("no valid authentication token");
    }

    next.run(request).await
}

/// Extract and resolve the bearer token from a request
fn resolve_identity<'a>(
    request: &Request<Body>,
    gateway: &'a AuthGateway,
) -> impl std::future::Future<Output = Option<Identity>> + Send + 'a {
    // Token is copied to an owned string so no borrow of the request
    // (which is not Sync) is held across the await; the returned future
    // would otherwise not be Send
    let token = request
        .headers()
        .get("authorization")
        .and_then(|h| h.to_str().ok())
        // Handle both "Bearer <token>" and raw token
        .map(|s| s.strip_prefix("Bearer ").unwrap_or(s).to_owned());

    async move {
        let token = token?;
        gateway.resolve_caller(&token).await.ok()
    }
}

/// Gate for owner-scoped routes: unauthenticated callers get 401
/// before the operation is attempted
pub async fn require_identity(request: Request<Body>, next: Next) -> Response {
    if request.extensions().get::<CurrentIdentity>().is_none() {
        return (StatusCode::UNAUTHORIZED, "Unauthorized").into_response();
    }
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::auth::JwtService;
    use crate::kernel::{MockCredentialStore, Sha256CredentialHasher};

    async fn gateway_with_user(login: &str, password: &str) -> Arc<AuthGateway> {
        let gateway = AuthGateway::new(
            Arc::new(MockCredentialStore::new()),
            Arc::new(Sha256CredentialHasher::new()),
            Arc::new(JwtService::new("test_secret", "test_issuer".to_string())),
        );
        gateway.register(login, password).await.unwrap();
        Arc::new(gateway)
    }

    #[tokio::test]
    async fn test_resolve_with_bearer_prefix() {
        let gateway = gateway_with_user("alice", "pw").await;
        let token = gateway.authenticate("alice", "pw").await.unwrap();

        let request = Request::builder()
            .header("authorization", format!("Bearer {}", token))
            .body(Body::empty())
            .unwrap();

        let identity = resolve_identity(&request, &gateway).await;
        assert_eq!(identity.unwrap().login, "alice");
    }

    #[tokio::test]
    async fn test_resolve_without_bearer_prefix() {
        let gateway = gateway_with_user("alice", "pw").await;
        let token = gateway.authenticate("alice", "pw").await.unwrap();

        let request = Request::builder()
            .header("authorization", token)
            .body(Body::empty())
            .unwrap();

        let identity = resolve_identity(&request, &gateway).await;
        assert!(identity.is_some());
    }

    #[tokio::test]
    async fn test_no_auth_header() {
        let gateway = gateway_with_user("alice", "pw").await;

        let request = Request::builder().body(Body::empty()).unwrap();

        let identity = resolve_identity(&request, &gateway).await;
        assert!(identity.is_none());
    }

    #[tokio::test]
    async fn test_invalid_token() {
        let gateway = gateway_with_user("alice", "pw").await;

        let request = Request::builder()
            .header("authorization", "Bearer invalid_token")
            .body(Body::empty())
            .unwrap();

        let identity = resolve_identity(&request, &gateway).await;
        assert!(identity.is_none());
    }
}
