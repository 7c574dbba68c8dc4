//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{
        header::{AUTHORIZATION, CONTENT_TYPE},
        Method,
    },
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::domains::auth::{AuthGateway, JwtService};
use crate::domains::contacts::ContactDirectory;
use crate::kernel::{BaseContactStore, BaseCredentialHasher, BaseCredentialStore};
use crate::server::middleware::{jwt_auth_middleware, require_identity};
use crate::server::routes::{
    add_contact, all_contacts, authenticate, delete_contact, edit_contact, get_contact,
    health_handler, hello, register,
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub gateway: Arc<AuthGateway>,
    pub directory: Arc<ContactDirectory>,
}

/// Build the Axum application router
///
/// Stores and the hasher are injected behind traits so tests can run
/// the full HTTP surface against in-memory implementations.
pub fn build_app(
    credential_store: Arc<dyn BaseCredentialStore>,
    contact_store: Arc<dyn BaseContactStore>,
    hasher: Arc<dyn BaseCredentialHasher>,
    jwt_secret: &str,
    jwt_issuer: String,
) -> Router {
    let jwt_service = Arc::new(JwtService::new(jwt_secret, jwt_issuer));
    let gateway = Arc::new(AuthGateway::new(credential_store, hasher, jwt_service));
    let directory = Arc::new(ContactDirectory::new(contact_store));

    let state = AppState {
        gateway: gateway.clone(),
        directory,
    };

    // CORS: browser clients send the bearer token in a header
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([AUTHORIZATION, CONTENT_TYPE]);

    // Owner-scoped routes: unauthenticated callers are rejected before
    // the operation is attempted
    let contacts = Router::new()
        .route("/new", post(add_contact))
        .route("/edit/:name", put(edit_contact))
        .route("/delete/:name", delete(delete_contact))
        .route("/get/:name", get(get_contact))
        .route("/all", get(all_contacts))
        .route_layer(middleware::from_fn(require_identity));

    let gateway_for_middleware = gateway.clone();

    Router::new()
        .route("/", get(hello))
        .route("/registration", post(register))
        .route("/auth", post(authenticate))
        .route("/health", get(health_handler))
        .nest("/contacts", contacts)
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(middleware::from_fn::<_, (axum::extract::Request,)>(
            move |req: axum::extract::Request, next: middleware::Next| {
                jwt_auth_middleware(gateway_for_middleware.clone(), req, next)
            },
        ))
        .layer(Extension(state))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
