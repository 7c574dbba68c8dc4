// Auth domain - registration, credential checks and token handling

pub mod errors;
pub mod gateway;
pub mod jwt;
pub mod models;

pub use errors::{AuthError, RegistrationError};
pub use gateway::AuthGateway;
pub use jwt::{Claims, JwtService};
