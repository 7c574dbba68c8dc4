// Phone Contacts - API Core
//
// Per-tenant contact directory gated by JWT authentication. Every
// registered identity owns a private contact set; name, email and
// phone uniqueness are enforced strictly within that owner's scope.

pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
